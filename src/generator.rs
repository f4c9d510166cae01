//! Particle generator: a batch of loose particles scattered over a box.

use crate::color::Color;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::{check_mass_radius, Particle};
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Configuration for a particle generator.
///
/// Each particle is placed at `origin + offset` with every offset component
/// drawn uniformly between `offset_min` and `offset_max`, and gets a random
/// color. The same seed always produces the same batch.
#[derive(Clone, Debug)]
pub struct GeneratorConfig<F: Float> {
    pub count: usize,
    pub mass: F,
    pub radius: F,
    pub origin: Vec3<F>,
    pub offset_min: Vec3<F>,
    pub offset_max: Vec3<F>,
    pub seed: u64,
}

impl<F: Float> GeneratorConfig<F> {
    /// `count` particles of mass 10 and radius 0.5 in a tall column above
    /// `origin`: x and z within ±2, y between 0 and 500.
    pub fn new(count: usize, origin: Vec3<F>) -> Self {
        GeneratorConfig {
            count,
            mass: F::from_f32(10.0),
            radius: F::half(),
            origin,
            offset_min: Vec3::new(F::from_f32(-2.0), F::zero(), F::from_f32(-2.0)),
            offset_max: Vec3::new(F::two(), F::from_f32(500.0), F::two()),
            seed: 0,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_offsets(mut self, min: Vec3<F>, max: Vec3<F>) -> Self {
        self.offset_min = min;
        self.offset_max = max;
        self
    }
}

fn uniform<F: Float>(rng: &mut SmallRng, lo: F, hi: F) -> F {
    lo + (hi - lo) * F::from_f32(rng.random::<f32>())
}

/// A generated batch ready to be handed to
/// [`Simulation::add_particle_generator`](crate::Simulation::add_particle_generator).
pub struct ParticleGenerator<F: Float> {
    particles: AllocVec<Particle<F>>,
    origin: Vec3<F>,
}

impl<F: Float> ParticleGenerator<F> {
    pub fn new(config: &GeneratorConfig<F>) -> Result<Self, PhysicsError> {
        if config.count == 0 {
            return Err(PhysicsError::EmptyGenerator);
        }
        check_mass_radius(config.mass, config.radius)?;

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let (lo, hi) = (config.offset_min, config.offset_max);

        let mut particles = AllocVec::with_capacity(config.count);
        for _ in 0..config.count {
            let color = Color::new(rng.random(), rng.random(), rng.random());
            let offset = Vec3::new(
                uniform(&mut rng, lo.x, hi.x),
                uniform(&mut rng, lo.y, hi.y),
                uniform(&mut rng, lo.z, hi.z),
            );
            particles.push(
                Particle::new(config.origin + offset, config.mass)
                    .with_radius(config.radius)
                    .with_color(color),
            );
        }

        Ok(ParticleGenerator { particles, origin: config.origin })
    }

    /// Bounds-checked access to a generated particle.
    pub fn particle(&self, index: usize) -> Result<&Particle<F>, PhysicsError> {
        self.particles
            .get(index)
            .ok_or(PhysicsError::ParticleOutOfBounds { index, count: self.particles.len() })
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn len(&self) -> usize { self.particles.len() }
    pub fn is_empty(&self) -> bool { self.particles.is_empty() }
    pub fn origin(&self) -> Vec3<F> { self.origin }

    pub(crate) fn into_particles(self) -> AllocVec<Particle<F>> {
        self.particles
    }
}
