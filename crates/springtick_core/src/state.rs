//! Spring-mass state and the single-step integration rule

use crate::config::SpringConfig;

/// Position and velocity of the oscillating mass.
///
/// Mutated in place once per sub-step by the driver; everything else reads
/// it through a shared reference.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringState {
    /// Displacement from equilibrium in meters
    pub position: f32,
    /// Rate of change of position in m/s
    pub velocity: f32,
}

impl SpringState {
    pub const fn new(position: f32, velocity: f32) -> Self {
        Self { position, velocity }
    }

    /// Advance by one sub-step using semi-implicit Euler.
    ///
    /// Velocity is updated from the old position before position advances
    /// with the new velocity; this ordering keeps oscillatory systems
    /// stable where explicit Euler gains energy. The position is clamped
    /// into the configured bound after every step.
    pub fn integrate(&mut self, step: f32, config: &SpringConfig) {
        let acceleration = -(config.stiffness / config.mass) * self.position
            - (config.damping / config.mass) * self.velocity;
        self.velocity += acceleration * step;
        self.position += self.velocity * step;
        self.position = self
            .position
            .clamp(-config.position_limit, config.position_limit);
    }
}
