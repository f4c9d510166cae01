//! Error types for physics operations.

use core::fmt;

/// Errors reported when building or registering simulation entities.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Particle handle does not refer to a particle in the arena.
    ParticleOutOfBounds { index: usize, count: usize },
    /// Body id does not refer to a registered body.
    BodyOutOfBounds { index: usize, count: usize },
    /// Both ends of a spring or constraint name the same particle.
    IdenticalParticles { index: usize },
    /// Spring stiffness must be positive.
    InvalidStiffness,
    /// Spring damping must not be negative.
    NegativeDamping,
    /// Spring rest length must not be negative.
    NegativeRestLength,
    /// Constraint length must not be negative.
    NegativeLength,
    /// Drag coefficient must not be negative.
    NegativeDrag,
    /// Mass is NaN or infinite.
    InvalidMass,
    /// Radius must be non-negative and finite.
    InvalidRadius,
    /// Plane normal has no direction.
    DegeneratePlaneNormal,
    /// Cloth dimensions must be at least 2x2.
    InvalidGridDimensions,
    /// Cloth cell lies outside the grid.
    CellOutOfBounds { u: usize, v: usize, dim_u: usize, dim_v: usize },
    /// Particle generator asked for zero particles.
    EmptyGenerator,
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::BodyOutOfBounds { index, count } => {
                write!(f, "body index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::IdenticalParticles { index } => {
                write!(f, "both ends refer to particle {}", index)
            }
            PhysicsError::InvalidStiffness => write!(f, "stiffness must be positive"),
            PhysicsError::NegativeDamping => write!(f, "damping cannot be negative"),
            PhysicsError::NegativeRestLength => write!(f, "rest length cannot be negative"),
            PhysicsError::NegativeLength => write!(f, "constraint length cannot be negative"),
            PhysicsError::NegativeDrag => write!(f, "drag coefficient cannot be negative"),
            PhysicsError::InvalidMass => write!(f, "mass must be finite"),
            PhysicsError::InvalidRadius => write!(f, "radius must be non-negative and finite"),
            PhysicsError::DegeneratePlaneNormal => write!(f, "plane normal must be non-zero"),
            PhysicsError::InvalidGridDimensions => write!(f, "cloth must be at least 2x2"),
            PhysicsError::CellOutOfBounds { u, v, dim_u, dim_v } => {
                write!(f, "cell ({}, {}) outside {}x{} cloth", u, v, dim_u, dim_v)
            }
            PhysicsError::EmptyGenerator => write!(f, "particle generator needs at least one particle"),
        }
    }
}

impl core::error::Error for PhysicsError {}
