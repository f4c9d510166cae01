//! Discrete-time particle physics: point masses, springs, rods and contacts.
//!
//! `pointmass` advances a world of point-mass particles in fixed time steps.
//! Particles are pushed around by force fields and damped springs, held
//! together by rigid distance constraints, and kept apart from each other
//! and from infinite planes by contact resolution.
//!
//! # Features
//!
//! - **Force generators**: uniform gravity and linear drag
//! - **Springs**: damped Hookean springs with equal and opposite forces
//! - **Distance constraints**: iterative positional relaxation
//! - **Integrators**: explicit Euler, semi-implicit Euler and Verlet with drag
//! - **Collisions**: particle-particle and particle-plane with restitution
//! - **Scene builders**: spring cubes, cloth sheets, seeded particle showers
//! - **Observable**: Monitor physics steps via the `StepObserver` trait
//! - **`no_std` compatible**: only needs `alloc`
//!
//! # Example
//! ```
//! use pointmass::{Gravity, Particle, Plane, Simulation, Vec3};
//!
//! let mut sim: Simulation<f32> = Simulation::default();
//! sim.add_force_generator(Gravity::default());
//! sim.add_plane(Plane::ground(0.0));
//! let ball = sim.add_particle(Particle::new(Vec3::new(0.0, 10.0, 0.0), 1.0)).unwrap();
//!
//! for _ in 0..100 {
//!     sim.step(0.01);
//! }
//! assert!(sim.particle(ball).unwrap().position.y < 10.0);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod color;
pub mod error;
pub mod particle;
pub mod force;
pub mod spring;
pub mod constraint;
pub mod integrator;
pub mod plane;
pub mod collision;
pub mod cube;
pub mod cloth;
pub mod generator;
pub mod body;
pub mod observer;
pub mod config;
pub mod simulation;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use color::Color;
pub use error::PhysicsError;
pub use particle::{Particle, ParticleHandle, ParticleKind};
pub use force::{ForceGenerator, Gravity, Medium};
pub use spring::{Spring, SpringParams};
pub use constraint::DistanceConstraint;
pub use integrator::{Integrator, Verlet};
pub use plane::Plane;
pub use collision::ContactWeighting;
pub use cube::{Cube, CubeConfig};
pub use cloth::{Cloth, ClothConfig};
pub use generator::{GeneratorConfig, ParticleGenerator};
pub use body::{Body, BodyId, BodyKind};
pub use observer::{NoOpStepObserver, StepObserver};
pub use config::SimulationConfig;
pub use simulation::Simulation;
