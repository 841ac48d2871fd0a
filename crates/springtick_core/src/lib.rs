//! springtick physics core
//!
//! A damped spring-mass simulation that stays numerically stable under an
//! unpredictable host frame clock.
//!
//! # Features
//!
//! - **Semi-implicit Euler**: velocity updates before position within each step
//! - **Fixed-step driving**: arbitrary frame deltas are partitioned into bounded sub-steps
//! - **Fail-fast configuration**: invalid parameters are rejected before the run starts
//!
//! # Example
//!
//! ```rust
//! use springtick_core::{FixedStepDriver, SpringConfig};
//!
//! let mut driver = FixedStepDriver::new(SpringConfig::default(), 2.0, 0.0)?;
//!
//! // One 60 fps frame; the mass starts falling back toward equilibrium.
//! driver.tick(1.0 / 60.0);
//! assert!(driver.position() < 2.0);
//! # Ok::<(), springtick_core::ConfigError>(())
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod state;

pub use config::SpringConfig;
pub use driver::FixedStepDriver;
pub use error::ConfigError;
pub use state::SpringState;
