//! Force generators: gravity and linear drag.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec3;

/// A force field applied to every active particle each step.
///
/// Generators only ever add to the accumulator, so several of them compose.
#[derive(Clone, Debug, PartialEq)]
pub enum ForceGenerator<F: Float> {
    Gravity(Gravity<F>),
    Medium(Medium<F>),
}

impl<F: Float> ForceGenerator<F> {
    pub fn apply(&self, particle: &mut Particle<F>) {
        match self {
            ForceGenerator::Gravity(g) => g.apply(particle),
            ForceGenerator::Medium(m) => m.apply(particle),
        }
    }
}

impl<F: Float> From<Gravity<F>> for ForceGenerator<F> {
    fn from(g: Gravity<F>) -> Self {
        ForceGenerator::Gravity(g)
    }
}

impl<F: Float> From<Medium<F>> for ForceGenerator<F> {
    fn from(m: Medium<F>) -> Self {
        ForceGenerator::Medium(m)
    }
}

/// Uniform gravitational field, `F = m * a`.
#[derive(Clone, Debug, PartialEq)]
pub struct Gravity<F: Float> {
    pub acceleration: Vec3<F>,
}

impl<F: Float> Gravity<F> {
    pub fn new(acceleration: Vec3<F>) -> Self {
        Gravity { acceleration }
    }

    pub fn apply(&self, particle: &mut Particle<F>) {
        if particle.mass <= F::zero() {
            return;
        }
        particle.add_force(self.acceleration.scale(particle.mass));
    }
}

impl<F: Float> Default for Gravity<F> {
    /// Earth gravity along -y.
    fn default() -> Self {
        Gravity::new(Vec3::new(F::zero(), F::from_f32(-9.8), F::zero()))
    }
}

/// Linear drag through a viscous medium, `F = -k * v`.
#[derive(Clone, Debug, PartialEq)]
pub struct Medium<F: Float> {
    drag_coefficient: F,
}

impl<F: Float> Medium<F> {
    pub fn new(drag_coefficient: F) -> Result<Self, PhysicsError> {
        if !(drag_coefficient >= F::zero()) {
            return Err(PhysicsError::NegativeDrag);
        }
        Ok(Medium { drag_coefficient })
    }

    pub fn drag_coefficient(&self) -> F {
        self.drag_coefficient
    }

    pub fn set_drag_coefficient(&mut self, drag_coefficient: F) -> Result<(), PhysicsError> {
        if !(drag_coefficient >= F::zero()) {
            return Err(PhysicsError::NegativeDrag);
        }
        self.drag_coefficient = drag_coefficient;
        Ok(())
    }

    pub fn apply(&self, particle: &mut Particle<F>) {
        particle.add_force(particle.velocity.scale(-self.drag_coefficient));
    }
}
