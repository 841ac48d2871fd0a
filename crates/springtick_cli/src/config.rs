//! Demo configuration file handling

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use springtick_core::SpringConfig;
use springtick_scene::{LinearScale, SceneProjector};

/// Top-level demo configuration (springtick.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DemoConfig {
    pub spring: SpringConfig,
    pub initial: InitialState,
    pub scene: SceneProjector,
    pub axis: AxisConfig,
}

/// Starting displacement and velocity
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct InitialState {
    pub position: f32,
    pub velocity: f32,
}

impl Default for InitialState {
    fn default() -> Self {
        Self {
            position: 2.0,
            velocity: 0.0,
        }
    }
}

/// The host coordinate system the demo maps positions through
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AxisConfig {
    pub domain_min: f32,
    pub domain_max: f32,
    pub range_min: f32,
    pub range_max: f32,
    /// Vertical placement of the axis in screen space
    pub baseline: f32,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            domain_min: -4.0,
            domain_max: 4.0,
            range_min: 0.0,
            range_max: 8.0,
            baseline: -1.5,
        }
    }
}

impl AxisConfig {
    pub fn to_scale(&self) -> LinearScale {
        LinearScale::new(
            self.domain_min,
            self.domain_max,
            self.range_min,
            self.range_max,
        )
    }
}

impl DemoConfig {
    /// Load a configuration file, falling back to defaults for any
    /// missing section.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: DemoConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: DemoConfig = toml::from_str("").unwrap();
        assert_eq!(config.spring, SpringConfig::default());
        assert_eq!(config.initial.position, 2.0);
        assert_eq!(config.axis.baseline, -1.5);
    }

    #[test]
    fn sections_override_independently() {
        let config: DemoConfig = toml::from_str(
            r#"
            [spring]
            stiffness = 9.0

            [scene]
            velocity_clip = 2.5
            "#,
        )
        .unwrap();
        assert_eq!(config.spring.stiffness, 9.0);
        assert_eq!(config.spring.mass, 1.0);
        assert_eq!(config.scene.velocity_clip, 2.5);
        assert_eq!(config.scene.velocity_scale, 0.4);
    }
}
