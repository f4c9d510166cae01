//! Cube: eight corner particles, optionally tied together by springs.

use crate::color::Color;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::{check_mass_radius, Particle, ParticleKind};
use crate::spring::SpringParams;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Number of corner particles in a cube.
pub const CUBE_CORNERS: usize = 8;

/// Corner indices of the six faces, wound consistently for drawing quads.
pub const CUBE_FACES: [[usize; 4]; 6] = [
    [0, 3, 2, 1], // top
    [4, 5, 6, 7], // bottom
    [0, 1, 5, 4], // front
    [1, 2, 6, 5], // right
    [2, 3, 7, 6], // back
    [0, 4, 7, 3], // left
];

/// Configuration for an axis-aligned cube.
#[derive(Clone, Debug)]
pub struct CubeConfig<F: Float> {
    pub center: Vec3<F>,
    pub size: F,
    pub particle_mass: F,
    pub particle_radius: F,
    /// Springs on every corner pair (12 edges, 12 face diagonals, 4 body
    /// diagonals), which keeps the cube from collapsing. `None` leaves the
    /// corners unconnected.
    pub springs: Option<SpringParams<F>>,
    pub color: Color,
    pub kind: ParticleKind,
}

impl<F: Float> CubeConfig<F> {
    pub fn new(center: Vec3<F>, size: F) -> Self {
        CubeConfig {
            center,
            size,
            particle_mass: F::one(),
            particle_radius: F::from_f32(0.1),
            springs: Some(SpringParams::new(F::from_f32(100.0), F::from_f32(5.0))),
            color: Color::WHITE,
            kind: ParticleKind::Active,
        }
    }
}

/// A cube ready to be handed to [`Simulation::add_cube`](crate::Simulation::add_cube).
///
/// Corners 0-3 form the top face (`y = max`), 4-7 the bottom face, in the
/// same order around the vertical axis.
pub struct Cube<F: Float> {
    particles: AllocVec<Particle<F>>,
    springs: Option<SpringParams<F>>,
    color: Color,
}

impl<F: Float> Cube<F> {
    pub fn new(config: &CubeConfig<F>) -> Result<Self, PhysicsError> {
        check_mass_radius(config.particle_mass, config.particle_radius)?;
        if let Some(springs) = &config.springs {
            springs.validate()?;
        }

        let h = config.size * F::half();
        let c = config.center;
        let (x0, x1) = (c.x - h, c.x + h);
        let (y0, y1) = (c.y - h, c.y + h);
        let (z0, z1) = (c.z - h, c.z + h);
        let corners = [
            Vec3::new(x0, y1, z0),
            Vec3::new(x1, y1, z0),
            Vec3::new(x1, y1, z1),
            Vec3::new(x0, y1, z1),
            Vec3::new(x0, y0, z0),
            Vec3::new(x1, y0, z0),
            Vec3::new(x1, y0, z1),
            Vec3::new(x0, y0, z1),
        ];

        let particles = corners
            .iter()
            .map(|&pos| {
                Particle::new(pos, config.particle_mass)
                    .with_radius(config.particle_radius)
                    .with_color(config.color)
                    .with_kind(config.kind)
            })
            .collect();

        Ok(Cube { particles, springs: config.springs, color: config.color })
    }

    /// Every unordered corner pair.
    pub fn spring_pairs(&self) -> AllocVec<(usize, usize)> {
        let mut pairs = AllocVec::with_capacity(CUBE_CORNERS * (CUBE_CORNERS - 1) / 2);
        for a in 0..CUBE_CORNERS {
            for b in (a + 1)..CUBE_CORNERS {
                pairs.push((a, b));
            }
        }
        pairs
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn springs(&self) -> Option<SpringParams<F>> { self.springs }
    pub fn color(&self) -> Color { self.color }

    pub(crate) fn into_particles(self) -> AllocVec<Particle<F>> {
        self.particles
    }
}
