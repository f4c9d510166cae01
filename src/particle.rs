//! Point-mass particles and the handles used to refer to them.

use crate::color::Color;
use crate::error::PhysicsError;
use crate::float::{Float, MASS_EPSILON};
use crate::vec::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Radius given to particles that do not specify one.
pub const DEFAULT_RADIUS: f32 = 0.1;

/// Stable index of a particle inside a [`Simulation`](crate::Simulation).
///
/// Particles are never removed from the simulation, so a handle handed out
/// by `add_particle` (or by a body) stays valid for the simulation's lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleHandle(pub(crate) usize);

impl ParticleHandle {
    /// Build a handle from a raw arena index. Lookups validate it.
    pub const fn from_index(index: usize) -> Self {
        ParticleHandle(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// Reject NaN/infinite masses and negative or non-finite radii.
///
/// Zero and negative masses pass: they integrate with zero acceleration.
pub(crate) fn check_mass_radius<F: Float>(mass: F, radius: F) -> Result<(), PhysicsError> {
    if !mass.is_finite() {
        return Err(PhysicsError::InvalidMass);
    }
    if !radius.is_finite() || radius < F::zero() {
        return Err(PhysicsError::InvalidRadius);
    }
    Ok(())
}

/// Whether the simulation may move a particle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParticleKind {
    /// Affected by forces, integration, constraints and collisions.
    #[default]
    Active,
    /// Immovable anchor with conceptually infinite mass.
    Fixed,
}

/// A point mass.
///
/// `previous_position` doubles as the velocity memory of the Verlet
/// integrator; every integrator records the pre-step position there.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub position: Vec3<F>,
    pub previous_position: Vec3<F>,
    pub velocity: Vec3<F>,
    pub force: Vec3<F>,
    pub mass: F,
    pub radius: F,
    pub color: Color,
    pub kind: ParticleKind,
}

impl<F: Float> Particle<F> {
    pub fn new(position: Vec3<F>, mass: F) -> Self {
        Particle {
            position,
            previous_position: position,
            velocity: Vec3::zero(),
            force: Vec3::zero(),
            mass,
            radius: F::from_f32(DEFAULT_RADIUS),
            color: Color::WHITE,
            kind: ParticleKind::Active,
        }
    }

    /// An anchor particle. Its mass is irrelevant and set to zero.
    pub fn fixed(position: Vec3<F>) -> Self {
        Particle {
            kind: ParticleKind::Fixed,
            ..Particle::new(position, F::zero())
        }
    }

    pub fn with_radius(mut self, radius: F) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec3<F>) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_kind(mut self, kind: ParticleKind) -> Self {
        self.kind = kind;
        if kind == ParticleKind::Fixed {
            self.velocity = Vec3::zero();
        }
        self
    }

    pub fn is_fixed(&self) -> bool {
        self.kind == ParticleKind::Fixed
    }

    pub fn is_active(&self) -> bool {
        self.kind == ParticleKind::Active
    }

    /// Accumulate a force for this step. Fixed particles ignore it.
    pub fn add_force(&mut self, force: Vec3<F>) {
        if self.is_active() {
            self.force += force;
        }
    }

    pub fn clear_forces(&mut self) {
        self.force = Vec3::zero();
    }

    /// `force / mass`, or zero for fixed and massless particles.
    pub fn acceleration(&self) -> Vec3<F> {
        if self.is_fixed() || self.mass <= F::from_f32(MASS_EPSILON) {
            return Vec3::zero();
        }
        self.force / self.mass
    }

    /// `1 / mass`, zero for fixed and massless particles.
    pub fn inverse_mass(&self) -> F {
        if self.is_fixed() || self.mass <= F::from_f32(MASS_EPSILON) {
            F::zero()
        } else {
            F::one() / self.mass
        }
    }

    /// Positional correction used by constraints and collisions.
    pub fn displace(&mut self, offset: Vec3<F>) {
        if self.is_active() {
            self.position += offset;
        }
    }

    /// Instantaneous velocity change used by collision response.
    pub fn apply_impulse(&mut self, delta_velocity: Vec3<F>) {
        if self.is_active() {
            self.velocity += delta_velocity;
        }
    }

    /// Turn the particle into an anchor at its current position.
    pub fn fix(&mut self) {
        self.kind = ParticleKind::Fixed;
        self.velocity = Vec3::zero();
        self.force = Vec3::zero();
        self.previous_position = self.position;
    }

    /// Let a fixed particle move again with the given mass.
    pub fn release(&mut self, mass: F) {
        self.kind = ParticleKind::Active;
        self.mass = mass;
        self.previous_position = self.position;
    }

    /// Drag an anchor to a new location. Only fixed particles can be moved this way.
    pub fn move_to(&mut self, position: Vec3<F>) {
        if self.is_fixed() {
            self.previous_position = self.position;
            self.position = position;
        }
    }
}
