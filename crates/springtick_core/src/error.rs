//! Configuration error types

use thiserror::Error;

/// Errors reported when a simulation is constructed from invalid parameters.
///
/// All variants are construction-time: they signal a configuration mistake,
/// not a transient condition, and a simulation never starts once one is
/// reported.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Mass must be strictly positive
    #[error("mass must be strictly positive, got {0}")]
    NonPositiveMass(f32),

    /// Position bound must be strictly positive
    #[error("position limit must be strictly positive, got {0}")]
    NonPositiveLimit(f32),

    /// Largest sub-step must be strictly positive
    #[error("max sub-step must be strictly positive, got {0}")]
    NonPositiveSubStep(f32),

    /// A parameter is NaN or infinite
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },
}

/// Result type for simulation construction
pub type Result<T> = std::result::Result<T, ConfigError>;
