//! springtick scene projection
//!
//! The pure presentation side of the simulation: reads the advanced
//! spring state plus a host-supplied coordinate mapping and produces the
//! primitives a renderer draws each frame.
//!
//! # Features
//!
//! - **Two-phase tick**: projection runs strictly after the driver has
//!   finished sub-stepping, and never mutates simulation state
//! - **Saturating velocity indicator**: visually large velocities clip
//!   instead of overflowing the display
//! - **Display readouts**: rounded position/velocity values that never
//!   feed back into the simulation

pub mod geometry;
pub mod projector;
pub mod scale;

pub use geometry::{Point, Segment};
pub use projector::{Readout, SceneProjector, SpringScene};
pub use scale::LinearScale;
