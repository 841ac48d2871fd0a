//! Integration tests for the two-phase tick
//!
//! These simulate a host rendering loop: every tick advances the driver
//! with that frame's delta, then the projector reads the settled state.
//! The frame clock is deliberately hostile - steady frames, dropped
//! frames, a long pause, zero and negative deltas.

use springtick_core::{FixedStepDriver, SpringConfig};
use springtick_scene::{LinearScale, Point, SceneProjector};

const FRAME: f32 = 1.0 / 60.0;

#[test]
fn irregular_frame_loop_keeps_the_scene_consistent() {
    let config = SpringConfig::default();
    let mut driver = FixedStepDriver::new(config, 2.0, 0.0).unwrap();
    let projector = SceneProjector::default();
    let axis = LinearScale::new(-4.0, 4.0, 0.0, 8.0);

    let deltas = [
        FRAME,
        FRAME,
        3.0 * FRAME, // dropped frames
        0.0,         // duplicate frame
        -FRAME,      // clock jitter
        1.5,         // long pause
        FRAME,
        0.25,
        FRAME,
    ];

    for dt in deltas {
        driver.tick(dt);
        let scene = projector.project(driver.state(), |v| Point::new(axis.map(v), -1.5));

        // The marker stays on the axis span covered by the position bound.
        assert!(scene.marker.x >= axis.map(-config.position_limit));
        assert!(scene.marker.x <= axis.map(config.position_limit));

        // The spring is always rooted at equilibrium.
        assert!((scene.spring.start.x - axis.map(0.0)).abs() < 1e-6);
        assert_eq!(scene.spring.end, scene.marker);

        // The indicator never exceeds its clip.
        assert!(scene.velocity_arrow.dx().abs() <= projector.velocity_clip + 1e-6);
    }

    // Readouts mirror the clamped post-tick state to display precision.
    let readout = projector.readout(driver.state());
    assert!((readout.position - driver.position()).abs() < 0.006);
    assert!((readout.velocity - driver.velocity()).abs() < 0.006);
}

#[test]
fn pauses_do_not_change_where_the_simulation_ends_up() {
    let mut continuous = FixedStepDriver::new(SpringConfig::default(), 2.0, 0.0).unwrap();
    continuous.tick(4.0);

    let mut interrupted = FixedStepDriver::new(SpringConfig::default(), 2.0, 0.0).unwrap();
    for dt in [1.0, 0.0, -0.5, 2.5, 0.5] {
        interrupted.tick(dt); // negative delta contributes nothing
    }

    assert!((continuous.position() - interrupted.position()).abs() < 2e-2);
    assert!((continuous.velocity() - interrupted.velocity()).abs() < 2e-2);
}

#[test]
fn projection_does_not_advance_the_simulation() {
    let mut driver = FixedStepDriver::new(SpringConfig::default(), 2.0, 0.0).unwrap();
    driver.tick(0.5);
    let projector = SceneProjector::default();

    let before = *driver.state();
    for _ in 0..10 {
        let _ = projector.project(driver.state(), |v| Point::new(v, 0.0));
        let _ = projector.readout(driver.state());
    }
    assert_eq!(before, *driver.state());
}
