//! springtick demo host
//!
//! A headless stand-in for a rendering loop: generates frame deltas
//! (steady or jittered), drives the fixed-step simulation, and logs the
//! projected scene and readout panel. Timing is entirely synthetic - the
//! simulation only ever sees explicit deltas, so runs are deterministic.

mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use springtick_core::FixedStepDriver;
use springtick_scene::Point;
use tracing::{debug, info, trace};

use crate::config::DemoConfig;

#[derive(Parser, Debug)]
#[command(name = "springtick", about = "Damped spring-mass simulation demo", version)]
struct Args {
    /// Simulated run duration in seconds
    #[arg(long, default_value_t = 8.0)]
    duration: f32,

    /// Synthetic frame rate driving the tick loop
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Optional TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Alternate short and long frames to exercise irregular deltas
    #[arg(long)]
    jitter: bool,
}

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    anyhow::ensure!(args.fps > 0, "fps must be at least 1");

    let demo = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };

    let mut driver =
        FixedStepDriver::new(demo.spring, demo.initial.position, demo.initial.velocity)?;
    let projector = demo.scene;
    let axis = demo.axis.to_scale();
    let baseline = demo.axis.baseline;
    debug!(config = ?demo.spring, "simulation configured");

    let frame = 1.0 / args.fps as f32;
    let mut elapsed = 0.0f32;
    let mut frame_index = 0u64;
    let mut next_panel = 0.0f32;

    while elapsed < args.duration {
        let dt = if args.jitter {
            // Repeating stutter: two short frames, then a long one.
            match frame_index % 3 {
                0 | 1 => frame * 0.5,
                _ => frame * 2.0,
            }
        } else {
            frame
        };

        driver.tick(dt);
        elapsed += dt;
        frame_index += 1;

        let scene = projector.project(driver.state(), |v| Point::new(axis.map(v), baseline));
        trace!(
            marker_x = scene.marker.x,
            arrow_dx = scene.velocity_arrow.dx(),
            "frame"
        );

        if elapsed >= next_panel {
            let readout = projector.readout(driver.state());
            info!(
                t = elapsed,
                position = readout.position,
                velocity = readout.velocity,
                "panel"
            );
            next_panel += 1.0;
        }
    }

    let readout = projector.readout(driver.state());
    info!(
        frames = frame_index,
        position = readout.position,
        velocity = readout.velocity,
        settled = driver.is_settled(),
        "simulation finished"
    );
    Ok(())
}
