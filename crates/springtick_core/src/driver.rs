//! Fixed-step driving of the spring simulation
//!
//! Decouples the simulation's numerical behavior from the host frame rate:
//! each tick's elapsed time is partitioned into sub-steps no larger than
//! the configured ceiling before the integrator runs. The state after a
//! tick depends only on total elapsed time and that ceiling, never on how
//! the host slices its frames.

use tracing::trace;

use crate::config::SpringConfig;
use crate::error::Result;
use crate::state::SpringState;

/// Remaining time below this is dropped rather than integrated.
const SUBSTEP_EPSILON: f32 = 1e-6;

/// Displacement and velocity magnitudes below this count as at rest
/// (one unit of the 2-decimal display precision).
const REST_EPSILON: f32 = 1e-2;

/// Owns a [`SpringState`] and advances it with bounded sub-steps.
pub struct FixedStepDriver {
    config: SpringConfig,
    state: SpringState,
}

impl FixedStepDriver {
    /// Validate the configuration and seed the initial state.
    ///
    /// The initial position is clamped into the configured bound so the
    /// position invariant holds before the first tick.
    pub fn new(config: SpringConfig, initial_position: f32, initial_velocity: f32) -> Result<Self> {
        config.validate()?;
        let position = initial_position.clamp(-config.position_limit, config.position_limit);
        Ok(Self {
            config,
            state: SpringState::new(position, initial_velocity),
        })
    }

    /// Advance the simulation by `dt` seconds of host frame time.
    ///
    /// `dt` may be zero or arbitrarily large (a dropped frame, a pause).
    /// Negative or non-finite deltas arise from host clock jitter and are
    /// treated as zero elapsed time, not as errors.
    pub fn tick(&mut self, dt: f32) {
        let mut remaining = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut steps = 0u32;
        while remaining > SUBSTEP_EPSILON {
            let step = self.config.max_substep.min(remaining);
            self.state.integrate(step, &self.config);
            remaining -= step;
            steps += 1;
        }
        if steps > 0 {
            trace!(steps, dt, position = self.state.position, "advanced spring state");
        }
    }

    /// Current displacement from equilibrium in meters
    pub fn position(&self) -> f32 {
        self.state.position
    }

    /// Current velocity in m/s
    pub fn velocity(&self) -> f32 {
        self.state.velocity
    }

    /// The state read by the projection phase after a tick completes
    pub fn state(&self) -> &SpringState {
        &self.state
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// True once the oscillation has effectively died out.
    pub fn is_settled(&self) -> bool {
        self.state.position.abs() < REST_EPSILON && self.state.velocity.abs() < REST_EPSILON
    }
}
