//! Spring configuration

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Physical parameters of the spring-mass system.
///
/// Immutable for the lifetime of a run: the driver takes a copy at
/// construction and never writes to it. Deserializable so a host can load
/// it from a TOML file; missing fields fall back to the defaults below.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Spring stiffness in N/m
    pub stiffness: f32,
    /// Damping coefficient in N*s/m
    pub damping: f32,
    /// Mass in kg
    pub mass: f32,
    /// Symmetric position bound in meters; integration clamps into
    /// `[-position_limit, position_limit]`
    pub position_limit: f32,
    /// Largest single integration step in seconds
    pub max_substep: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 3.0,
            damping: 0.8,
            mass: 1.0,
            position_limit: 3.5,
            max_substep: 1.0 / 60.0,
        }
    }
}

impl SpringConfig {
    /// Check the parameters a simulation must not start without.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("mass", self.mass),
            ("position_limit", self.position_limit),
            ("max_substep", self.max_substep),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        if self.mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass(self.mass));
        }
        if self.position_limit <= 0.0 {
            return Err(ConfigError::NonPositiveLimit(self.position_limit));
        }
        if self.max_substep <= 0.0 {
            return Err(ConfigError::NonPositiveSubStep(self.max_substep));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SpringConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_mass() {
        let config = SpringConfig {
            mass: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveMass(_))
        ));
    }

    #[test]
    fn rejects_negative_limit() {
        let config = SpringConfig {
            position_limit: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveLimit(_))
        ));
    }

    #[test]
    fn rejects_zero_substep() {
        let config = SpringConfig {
            max_substep: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveSubStep(_))
        ));
    }

    #[test]
    fn rejects_nan_stiffness() {
        let config = SpringConfig {
            stiffness: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite {
                name: "stiffness",
                ..
            })
        ));
    }

    #[test]
    fn missing_toml_fields_fall_back_to_defaults() {
        let config: SpringConfig = toml::from_str("stiffness = 5.0").unwrap();
        assert_eq!(config.stiffness, 5.0);
        assert_eq!(config.mass, 1.0);
        assert_eq!(config.position_limit, 3.5);
    }
}
