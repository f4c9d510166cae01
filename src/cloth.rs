//! Cloth: a U×V grid of particles with structural, shear and bend links.

use crate::color::Color;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::{check_mass_radius, Particle, ParticleKind};
use crate::spring::SpringParams;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Configuration for a cloth sheet.
///
/// The sheet spans the parallelogram with corners `origin`, `corner_u`
/// (end of the first row) and `corner_v` (end of the first column).
#[derive(Clone, Debug)]
pub struct ClothConfig<F: Float> {
    pub dim_u: usize,
    pub dim_v: usize,
    pub origin: Vec3<F>,
    pub corner_u: Vec3<F>,
    pub corner_v: Vec3<F>,
    /// Spread evenly over all particles.
    pub total_mass: F,
    pub particle_radius: F,
    pub springs: SpringParams<F>,
    /// Also hold structural neighbours at their rest distance with rods.
    pub structural_constraints: bool,
    pub color: Color,
    pub kind: ParticleKind,
}

impl<F: Float> ClothConfig<F> {
    /// A `dim_u × dim_v` sheet over the given corners with the stock
    /// stiffness 100 and damping 1.
    pub fn new(dim_u: usize, dim_v: usize, origin: Vec3<F>, corner_u: Vec3<F>, corner_v: Vec3<F>) -> Self {
        ClothConfig {
            dim_u,
            dim_v,
            origin,
            corner_u,
            corner_v,
            total_mass: F::one(),
            particle_radius: F::from_f32(0.05),
            springs: SpringParams::new(F::from_f32(100.0), F::one()),
            structural_constraints: true,
            color: Color::WHITE,
            kind: ParticleKind::Active,
        }
    }
}

/// A cloth sheet ready to be handed to [`Simulation::add_cloth`](crate::Simulation::add_cloth).
///
/// Particle at grid cell `(u, v)` has index `u * dim_v + v`.
///
/// Links created on registration:
/// - Structural: `(u, v)`–`(u+1, v)` and `(u, v)`–`(u, v+1)`, spring + rod
/// - Shear: both diagonals of every cell, spring
/// - Bend: skip-one along u and along v, spring
pub struct Cloth<F: Float> {
    particles: AllocVec<Particle<F>>,
    dim_u: usize,
    dim_v: usize,
    springs: SpringParams<F>,
    structural_constraints: bool,
    color: Color,
}

impl<F: Float> Cloth<F> {
    pub fn new(config: &ClothConfig<F>) -> Result<Self, PhysicsError> {
        let (dim_u, dim_v) = (config.dim_u, config.dim_v);
        if dim_u < 2 || dim_v < 2 {
            return Err(PhysicsError::InvalidGridDimensions);
        }
        config.springs.validate()?;
        let count = dim_u * dim_v;
        let mass = config.total_mass / F::from_usize(count);
        check_mass_radius(mass, config.particle_radius)?;

        let step_u = (config.corner_u - config.origin) / F::from_usize(dim_u - 1);
        let step_v = (config.corner_v - config.origin) / F::from_usize(dim_v - 1);

        let mut particles = AllocVec::with_capacity(count);
        for u in 0..dim_u {
            for v in 0..dim_v {
                let pos = config.origin + step_u.scale(F::from_usize(u)) + step_v.scale(F::from_usize(v));
                particles.push(
                    Particle::new(pos, mass)
                        .with_radius(config.particle_radius)
                        .with_color(config.color)
                        .with_kind(config.kind),
                );
            }
        }

        Ok(Cloth {
            particles,
            dim_u,
            dim_v,
            springs: config.springs,
            structural_constraints: config.structural_constraints,
            color: config.color,
        })
    }

    pub fn index(&self, u: usize, v: usize) -> usize {
        u * self.dim_v + v
    }

    /// Fix the particle at `(u, v)` in place.
    pub fn pin(&mut self, u: usize, v: usize) -> Result<(), PhysicsError> {
        if u >= self.dim_u || v >= self.dim_v {
            return Err(PhysicsError::CellOutOfBounds { u, v, dim_u: self.dim_u, dim_v: self.dim_v });
        }
        let idx = self.index(u, v);
        self.particles[idx].fix();
        Ok(())
    }

    /// Fix the first row (`u = 0`), e.g. to hang the sheet like a curtain.
    pub fn pin_first_row(&mut self) {
        for v in 0..self.dim_v {
            let idx = self.index(0, v);
            self.particles[idx].fix();
        }
    }

    /// Horizontal and vertical neighbours.
    pub fn structural_pairs(&self) -> AllocVec<(usize, usize)> {
        let mut pairs = AllocVec::new();
        for u in 0..self.dim_u {
            for v in 0..self.dim_v {
                if u + 1 < self.dim_u {
                    pairs.push((self.index(u, v), self.index(u + 1, v)));
                }
                if v + 1 < self.dim_v {
                    pairs.push((self.index(u, v), self.index(u, v + 1)));
                }
            }
        }
        pairs
    }

    /// Both diagonals of every cell.
    pub fn shear_pairs(&self) -> AllocVec<(usize, usize)> {
        let mut pairs = AllocVec::new();
        for u in 0..(self.dim_u - 1) {
            for v in 0..(self.dim_v - 1) {
                pairs.push((self.index(u, v), self.index(u + 1, v + 1)));
                pairs.push((self.index(u + 1, v), self.index(u, v + 1)));
            }
        }
        pairs
    }

    /// Skip-one neighbours along both grid directions.
    pub fn bend_pairs(&self) -> AllocVec<(usize, usize)> {
        let mut pairs = AllocVec::new();
        for u in 0..self.dim_u {
            for v in 0..self.dim_v {
                if u + 2 < self.dim_u {
                    pairs.push((self.index(u, v), self.index(u + 2, v)));
                }
                if v + 2 < self.dim_v {
                    pairs.push((self.index(u, v), self.index(u, v + 2)));
                }
            }
        }
        pairs
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn dim_u(&self) -> usize { self.dim_u }
    pub fn dim_v(&self) -> usize { self.dim_v }
    pub fn springs(&self) -> SpringParams<F> { self.springs }
    pub fn structural_constraints(&self) -> bool { self.structural_constraints }
    pub fn color(&self) -> Color { self.color }

    pub(crate) fn into_particles(self) -> AllocVec<Particle<F>> {
        self.particles
    }
}
