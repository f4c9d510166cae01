//! Numerical time steppers advancing a particle under a given acceleration.

use crate::float::{Float, DT_EPSILON};
use crate::particle::Particle;
use crate::vec::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The time-stepping scheme used by a simulation.
///
/// Every variant is a pure function of `(acceleration, particle state, dt)`,
/// skips fixed particles and does nothing for `dt <= 1e-9`. All of them
/// record the pre-step position in `previous_position`, so the scheme can be
/// swapped between steps.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Integrator<F: Float> {
    /// Explicit forward Euler: position moves with the velocity from before the step.
    Euler,
    /// Symplectic Euler: velocity first, then position with the new velocity.
    SemiImplicitEuler,
    /// Position Verlet with a drag factor.
    Verlet(Verlet<F>),
}

impl<F: Float> Default for Integrator<F> {
    fn default() -> Self {
        Integrator::Euler
    }
}

impl<F: Float> Integrator<F> {
    pub fn integrate(&self, acceleration: Vec3<F>, particle: &mut Particle<F>, dt: F) {
        if !(dt > F::from_f32(DT_EPSILON)) || particle.is_fixed() {
            return;
        }
        match self {
            Integrator::Euler => {
                particle.previous_position = particle.position;
                particle.position += particle.velocity.scale(dt);
                particle.velocity += acceleration.scale(dt);
            }
            Integrator::SemiImplicitEuler => {
                particle.previous_position = particle.position;
                particle.velocity += acceleration.scale(dt);
                particle.position += particle.velocity.scale(dt);
            }
            Integrator::Verlet(v) => v.integrate(acceleration, particle, dt),
        }
    }

    pub fn verlet(drag: F) -> Self {
        Integrator::Verlet(Verlet::new(drag))
    }
}

/// Position Verlet: `x' = x + (x - x_prev) * (1 - drag) + a * dt^2`.
///
/// Velocity is implied by the last displacement. The explicit `velocity`
/// field is refreshed from it after each step so springs, drag and
/// collision tests see the motion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Verlet<F: Float> {
    drag: F,
}

impl<F: Float> Verlet<F> {
    /// Drag is clamped into [0, 1].
    pub fn new(drag: F) -> Self {
        Verlet { drag: drag.clamp(F::zero(), F::one()) }
    }

    pub fn drag(&self) -> F {
        self.drag
    }

    pub fn set_drag(&mut self, drag: F) {
        self.drag = drag.clamp(F::zero(), F::one());
    }

    pub fn integrate(&self, acceleration: Vec3<F>, particle: &mut Particle<F>, dt: F) {
        if !(dt > F::from_f32(DT_EPSILON)) || particle.is_fixed() {
            return;
        }
        let current = particle.position;
        let displacement = current - particle.previous_position;
        let next = current + displacement.scale(F::one() - self.drag) + acceleration.scale(dt * dt);

        particle.previous_position = current;
        particle.position = next;
        particle.velocity = (next - current) / dt;
    }
}

impl<F: Float> Default for Verlet<F> {
    fn default() -> Self {
        Verlet { drag: F::zero() }
    }
}
