//! Records of the particle groups registered with a simulation.

use crate::color::Color;
use crate::cube::CUBE_FACES;
use crate::error::PhysicsError;
use crate::particle::ParticleHandle;
use alloc::vec::Vec as AllocVec;

/// Identifies a body registered with a [`Simulation`](crate::Simulation).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BodyId(pub(crate) usize);

impl BodyId {
    /// Build an id from a raw index. Lookups validate it.
    pub const fn from_index(index: usize) -> Self {
        BodyId(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// What created a body.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BodyKind {
    /// A single particle added directly.
    Particle,
    Cube,
    Cloth { dim_u: usize, dim_v: usize },
    Generator,
}

/// A contiguous run of particles in the simulation's arena that were
/// registered together.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    kind: BodyKind,
    first: usize,
    count: usize,
    color: Color,
}

impl Body {
    pub(crate) fn new(kind: BodyKind, first: usize, count: usize, color: Color) -> Self {
        Body { kind, first, count, color }
    }

    pub fn kind(&self) -> BodyKind { self.kind }
    pub fn color(&self) -> Color { self.color }
    pub fn len(&self) -> usize { self.count }
    pub fn is_empty(&self) -> bool { self.count == 0 }

    pub fn handles(&self) -> impl Iterator<Item = ParticleHandle> {
        (self.first..self.first + self.count).map(ParticleHandle)
    }

    /// Handle of the body's `local`-th particle.
    pub fn handle(&self, local: usize) -> Result<ParticleHandle, PhysicsError> {
        if local >= self.count {
            return Err(PhysicsError::ParticleOutOfBounds { index: local, count: self.count });
        }
        Ok(ParticleHandle(self.first + local))
    }

    /// Handle of cloth cell `(u, v)`; `None` for other bodies or outside the grid.
    pub fn cloth_handle(&self, u: usize, v: usize) -> Option<ParticleHandle> {
        match self.kind {
            BodyKind::Cloth { dim_u, dim_v } if u < dim_u && v < dim_v => {
                Some(ParticleHandle(self.first + u * dim_v + v))
            }
            _ => None,
        }
    }

    /// Quads for drawing: the six faces of a cube or every cell of a cloth.
    pub fn quads(&self) -> AllocVec<[ParticleHandle; 4]> {
        let at = |i: usize| ParticleHandle(self.first + i);
        match self.kind {
            BodyKind::Cube => CUBE_FACES
                .iter()
                .map(|f| [at(f[0]), at(f[1]), at(f[2]), at(f[3])])
                .collect(),
            BodyKind::Cloth { dim_u, dim_v } => {
                let mut quads = AllocVec::with_capacity((dim_u - 1) * (dim_v - 1));
                for u in 0..dim_u - 1 {
                    for v in 0..dim_v - 1 {
                        quads.push([
                            at(u * dim_v + v),
                            at((u + 1) * dim_v + v),
                            at((u + 1) * dim_v + v + 1),
                            at(u * dim_v + v + 1),
                        ]);
                    }
                }
                quads
            }
            BodyKind::Particle | BodyKind::Generator => AllocVec::new(),
        }
    }
}
