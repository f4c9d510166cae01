//! Configuration for a simulation.

use crate::collision::ContactWeighting;
use crate::float::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunable parameters of a [`Simulation`](crate::Simulation).
///
/// # Builder Pattern
/// ```
/// use pointmass::config::SimulationConfig;
/// use pointmass::ContactWeighting;
///
/// let config: SimulationConfig<f32> = SimulationConfig::new()
///     .with_constraint_iterations(16)
///     .with_restitution(0.8)
///     .with_contact_weighting(ContactWeighting::InverseMass);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig<F: Float> {
    /// Relaxation passes over all distance constraints per step.
    /// More passes = stiffer rods but slower. Default: 10.
    pub constraint_iterations: usize,
    /// Fraction of normal velocity kept after a contact, in [0, 1].
    /// Also used to damp the impact. Default: 0.5.
    pub restitution: F,
    /// How particle-particle contacts are shared. Default: `Equal`.
    pub contact_weighting: ContactWeighting,
    /// Resolve particle-particle contacts. Default: true.
    pub particle_collisions: bool,
    /// Resolve particle-plane contacts. Default: true.
    pub plane_collisions: bool,
}

impl<F: Float> SimulationConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimulationConfig {
            constraint_iterations: 10,
            restitution: F::half(),
            contact_weighting: ContactWeighting::Equal,
            particle_collisions: true,
            plane_collisions: true,
        }
    }

    /// Set the number of constraint relaxation passes.
    pub fn with_constraint_iterations(mut self, iterations: usize) -> Self {
        self.constraint_iterations = iterations;
        self
    }

    /// Set the restitution coefficient, clamped to [0, 1].
    pub fn with_restitution(mut self, restitution: F) -> Self {
        self.restitution = restitution.clamp(F::zero(), F::one());
        self
    }

    pub fn with_contact_weighting(mut self, weighting: ContactWeighting) -> Self {
        self.contact_weighting = weighting;
        self
    }

    pub fn with_particle_collisions(mut self, enabled: bool) -> Self {
        self.particle_collisions = enabled;
        self
    }

    pub fn with_plane_collisions(mut self, enabled: bool) -> Self {
        self.plane_collisions = enabled;
        self
    }

    /// Restitution as used by the solver; values loaded from outside are clamped here.
    pub fn effective_restitution(&self) -> F {
        self.restitution.clamp(F::zero(), F::one())
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
