//! Damped Hookean springs between two particles.

use crate::error::PhysicsError;
use crate::float::{Float, COINCIDENT_EPSILON};
use crate::particle::{Particle, ParticleHandle};
use crate::vec::Vec3;

/// Elastic connector between two particles with linear damping along its axis.
///
/// The spring refers to its endpoints by handle and never owns them.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    a: ParticleHandle,
    b: ParticleHandle,
    stiffness: F,
    damping: F,
    rest_length: F,
}

/// Stiffness and damping for the springs a scene builder creates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringParams<F: Float> {
    pub stiffness: F,
    pub damping: F,
}

impl<F: Float> SpringParams<F> {
    pub fn new(stiffness: F, damping: F) -> Self {
        SpringParams { stiffness, damping }
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.stiffness > F::zero()) {
            return Err(PhysicsError::InvalidStiffness);
        }
        if !(self.damping >= F::zero()) {
            return Err(PhysicsError::NegativeDamping);
        }
        Ok(())
    }
}

pub(crate) fn check_pair<F: Float>(
    particles: &[Particle<F>],
    a: ParticleHandle,
    b: ParticleHandle,
) -> Result<(), PhysicsError> {
    let count = particles.len();
    for h in [a, b] {
        if h.index() >= count {
            return Err(PhysicsError::ParticleOutOfBounds { index: h.index(), count });
        }
    }
    if a == b {
        return Err(PhysicsError::IdenticalParticles { index: a.index() });
    }
    Ok(())
}

impl<F: Float> Spring<F> {
    /// Spring whose rest length is the current separation of `a` and `b`.
    ///
    /// Separations under 1e-6 give a rest length of exactly zero.
    pub fn new(
        particles: &[Particle<F>],
        a: ParticleHandle,
        b: ParticleHandle,
        stiffness: F,
        damping: F,
    ) -> Result<Self, PhysicsError> {
        check_pair(particles, a, b)?;
        let mut rest_length = particles[a.index()].position.distance(particles[b.index()].position);
        if rest_length < F::from_f32(COINCIDENT_EPSILON) {
            rest_length = F::zero();
        }
        Self::with_rest_length(particles, a, b, stiffness, damping, rest_length)
    }

    pub fn with_rest_length(
        particles: &[Particle<F>],
        a: ParticleHandle,
        b: ParticleHandle,
        stiffness: F,
        damping: F,
        rest_length: F,
    ) -> Result<Self, PhysicsError> {
        check_pair(particles, a, b)?;
        if !(stiffness > F::zero()) {
            return Err(PhysicsError::InvalidStiffness);
        }
        if !(damping >= F::zero()) {
            return Err(PhysicsError::NegativeDamping);
        }
        if !(rest_length >= F::zero()) {
            return Err(PhysicsError::NegativeRestLength);
        }
        Ok(Spring { a, b, stiffness, damping, rest_length })
    }

    /// Force this spring exerts on `a`; `b` receives the negation.
    ///
    /// `None` when the endpoints coincide and the axis is undefined.
    pub fn force_on_a(&self, particles: &[Particle<F>]) -> Option<Vec3<F>> {
        let pa = &particles[self.a.index()];
        let pb = &particles[self.b.index()];

        let delta = pa.position - pb.position;
        let length = delta.length();
        if length < F::from_f32(COINCIDENT_EPSILON) {
            return None;
        }
        let unit = delta / length;

        let spring_magnitude = -self.stiffness * (length - self.rest_length);
        let closing_speed = (pa.velocity - pb.velocity).dot(unit);
        let damping_magnitude = -self.damping * closing_speed;

        Some(unit.scale(spring_magnitude + damping_magnitude))
    }

    /// Accumulate equal and opposite forces on both endpoints.
    pub fn apply(&self, particles: &mut [Particle<F>]) {
        if let Some(force) = self.force_on_a(particles) {
            particles[self.a.index()].add_force(force);
            particles[self.b.index()].add_force(-force);
        }
    }

    pub fn current_length(&self, particles: &[Particle<F>]) -> F {
        particles[self.a.index()].position.distance(particles[self.b.index()].position)
    }

    pub fn endpoints(&self) -> (ParticleHandle, ParticleHandle) { (self.a, self.b) }
    pub fn particle_a(&self) -> ParticleHandle { self.a }
    pub fn particle_b(&self) -> ParticleHandle { self.b }
    pub fn stiffness(&self) -> F { self.stiffness }
    pub fn damping(&self) -> F { self.damping }
    pub fn rest_length(&self) -> F { self.rest_length }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn h(i: usize) -> ParticleHandle {
        ParticleHandle::from_index(i)
    }

    #[test]
    fn rest_length_from_positions() {
        let particles = vec![
            Particle::new(Vec3::new(0.0f32, 0.0, 0.0), 1.0),
            Particle::new(Vec3::new(2.5f32, 0.0, 0.0), 1.0),
        ];
        let s = Spring::new(&particles, h(0), h(1), 100.0, 5.0).unwrap();
        assert!((s.rest_length() - 2.5).abs() < 1e-6);
    }

    #[test]
    fn coincident_rest_length_clamps_to_zero() {
        let particles = vec![
            Particle::new(Vec3::new(1.0f32, 1.0, 1.0), 1.0),
            Particle::new(Vec3::new(1.0f32, 1.0, 1.0 + 1e-7), 1.0),
        ];
        let s = Spring::new(&particles, h(0), h(1), 10.0, 0.0).unwrap();
        assert_eq!(s.rest_length(), 0.0);
    }

    #[test]
    fn coincident_endpoints_exert_nothing() {
        let mut particles = vec![
            Particle::new(Vec3::new(0.0f32, 0.0, 0.0), 1.0),
            Particle::new(Vec3::new(0.0f32, 0.0, 0.0), 1.0),
        ];
        let s = Spring::with_rest_length(&particles, h(0), h(1), 10.0, 1.0, 1.0).unwrap();
        assert!(s.force_on_a(&particles).is_none());
        s.apply(&mut particles);
        assert_eq!(particles[0].force, Vec3::zero());
        assert_eq!(particles[1].force, Vec3::zero());
    }

    #[test]
    fn damping_opposes_separation() {
        let particles = vec![
            Particle::new(Vec3::new(1.0f32, 0.0, 0.0), 1.0).with_velocity(Vec3::new(2.0, 0.0, 0.0)),
            Particle::new(Vec3::new(0.0f32, 0.0, 0.0), 1.0),
        ];
        let s = Spring::with_rest_length(&particles, h(0), h(1), 10.0, 3.0, 1.0).unwrap();
        let f = s.force_on_a(&particles).unwrap();
        assert!((f.x - (-6.0)).abs() < 1e-6, "f = {:?}", f);
    }

    #[test]
    fn validation_errors() {
        let particles = vec![
            Particle::new(Vec3::new(0.0f32, 0.0, 0.0), 1.0),
            Particle::new(Vec3::new(1.0f32, 0.0, 0.0), 1.0),
        ];
        assert_eq!(
            Spring::new(&particles, h(0), h(0), 1.0, 0.0),
            Err(PhysicsError::IdenticalParticles { index: 0 })
        );
        assert_eq!(
            Spring::new(&particles, h(0), h(7), 1.0, 0.0),
            Err(PhysicsError::ParticleOutOfBounds { index: 7, count: 2 })
        );
        assert_eq!(Spring::new(&particles, h(0), h(1), 0.0, 0.0), Err(PhysicsError::InvalidStiffness));
        assert_eq!(Spring::new(&particles, h(0), h(1), -3.0, 0.0), Err(PhysicsError::InvalidStiffness));
        assert_eq!(Spring::new(&particles, h(0), h(1), 1.0, -0.1), Err(PhysicsError::NegativeDamping));
        assert_eq!(
            Spring::with_rest_length(&particles, h(0), h(1), 1.0, 0.0, -1.0),
            Err(PhysicsError::NegativeRestLength)
        );
    }
}
