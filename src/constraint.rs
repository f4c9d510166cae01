//! Rigid distance constraints solved by iterative positional relaxation.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::{Particle, ParticleHandle};
use crate::spring::check_pair;

/// A massless rod holding two particles at a fixed separation.
///
/// Solving only moves positions; velocities and forces are left alone.
/// Several constraints sharing particles fight each other, so the
/// simulation runs repeated passes over all of them.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    a: ParticleHandle,
    b: ParticleHandle,
    length: F,
}

impl<F: Float> DistanceConstraint<F> {
    pub fn new(
        particles: &[Particle<F>],
        a: ParticleHandle,
        b: ParticleHandle,
        length: F,
    ) -> Result<Self, PhysicsError> {
        check_pair(particles, a, b)?;
        if !(length >= F::zero()) {
            return Err(PhysicsError::NegativeLength);
        }
        Ok(DistanceConstraint { a, b, length })
    }

    /// Constraint holding the particles at their current separation.
    pub fn from_positions(
        particles: &[Particle<F>],
        a: ParticleHandle,
        b: ParticleHandle,
    ) -> Result<Self, PhysicsError> {
        check_pair(particles, a, b)?;
        let length = particles[a.index()].position.distance(particles[b.index()].position);
        Self::new(particles, a, b, length)
    }

    /// One relaxation step for this constraint.
    pub fn solve(&self, particles: &mut [Particle<F>]) {
        let pa = &particles[self.a.index()];
        let pb = &particles[self.b.index()];

        let (weight_a, weight_b) = match (pa.is_fixed(), pb.is_fixed()) {
            (false, false) => (F::half(), F::half()),
            (true, false) => (F::zero(), F::one()),
            (false, true) => (F::one(), F::zero()),
            (true, true) => return,
        };

        let delta = pb.position - pa.position;
        let dist = delta.length();
        if dist == F::zero() {
            return; // no defined direction
        }

        let error = dist - self.length;
        let correction = (delta / dist).scale(error);

        particles[self.a.index()].displace(correction.scale(weight_a));
        particles[self.b.index()].displace(-correction.scale(weight_b));
    }

    /// Signed deviation from the target length (positive when stretched).
    pub fn error(&self, particles: &[Particle<F>]) -> F {
        particles[self.a.index()].position.distance(particles[self.b.index()].position) - self.length
    }

    pub fn endpoints(&self) -> (ParticleHandle, ParticleHandle) { (self.a, self.b) }
    pub fn length(&self) -> F { self.length }
}
