//! State-to-geometry projection
//!
//! Pure mapping from [`SpringState`] plus a host-supplied coordinate
//! transform to renderable primitives. Called once per tick, strictly
//! after the driver has finished sub-stepping; nothing here mutates
//! simulation state.

use serde::{Deserialize, Serialize};
use springtick_core::SpringState;

use crate::geometry::{Point, Segment};

/// Renderable primitives derived from one tick's state.
///
/// Recomputed every tick; holds no state of its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringScene {
    /// Segment from the equilibrium point to the current position
    pub spring: Segment,
    /// Marker at the current position
    pub marker: Point,
    /// Velocity indicator anchored above the marker, extent clipped
    pub velocity_arrow: Segment,
}

/// Rounded display values for the host's numeric widgets.
///
/// Rounding is presentation-only; it never feeds back into the state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Readout {
    pub position: f32,
    pub velocity: f32,
}

/// Projects spring state into screen-space geometry.
///
/// The mapper is supplied per call so the projector stays independent of
/// how the host lays out its coordinate system.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SceneProjector {
    /// Vertical offset of the velocity arrow anchor above the marker,
    /// in mapped (screen) units
    pub indicator_offset: f32,
    /// Scale from m/s to arrow extent
    pub velocity_scale: f32,
    /// Arrow extent saturates at this magnitude
    pub velocity_clip: f32,
    /// Decimal places for display readouts
    pub readout_decimals: u32,
}

impl Default for SceneProjector {
    fn default() -> Self {
        Self {
            indicator_offset: 0.6,
            velocity_scale: 0.4,
            velocity_clip: 1.5,
            readout_decimals: 2,
        }
    }
}

impl SceneProjector {
    /// Compute the frame's geometry from the advanced state.
    pub fn project<F>(&self, state: &SpringState, map: F) -> SpringScene
    where
        F: Fn(f32) -> Point,
    {
        let equilibrium = map(0.0);
        let marker = map(state.position);

        let anchor = Point::new(marker.x, marker.y + self.indicator_offset);
        let extent = (state.velocity * self.velocity_scale)
            .clamp(-self.velocity_clip, self.velocity_clip);

        SpringScene {
            spring: Segment::new(equilibrium, marker),
            marker,
            velocity_arrow: Segment::new(anchor, Point::new(anchor.x + extent, anchor.y)),
        }
    }

    /// Rounded position/velocity for display widgets.
    pub fn readout(&self, state: &SpringState) -> Readout {
        Readout {
            position: round_to(state.position, self.readout_decimals),
            velocity: round_to(state.velocity, self.readout_decimals),
        }
    }
}

fn round_to(value: f32, decimals: u32) -> f32 {
    let factor = 10f32.powi(decimals as i32);
    (value * factor).round() / factor
}
