//! The simulation world: particle arena, links, fields, planes and the step loop.

use crate::body::{Body, BodyId, BodyKind};
use crate::cloth::Cloth;
use crate::collision::{resolve_particle_contacts, resolve_plane_contacts};
use crate::color::Color;
use crate::config::SimulationConfig;
use crate::constraint::DistanceConstraint;
use crate::cube::Cube;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::force::ForceGenerator;
use crate::generator::ParticleGenerator;
use crate::integrator::Integrator;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::{check_mass_radius, Particle, ParticleHandle};
use crate::plane::Plane;
use crate::spring::Spring;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// A particle world advanced in fixed, caller-chosen time steps.
///
/// Particles live in a single arena and are referred to by
/// [`ParticleHandle`]. Springs, constraints and bodies only hold handles, so
/// they never alias the particle storage.
///
/// Every step runs the same phases in the same order:
/// forces, springs, integration, constraint relaxation, collisions,
/// and finally clearing the force accumulators.
pub struct Simulation<F: Float> {
    particles: AllocVec<Particle<F>>,
    bodies: AllocVec<Body>,
    springs: AllocVec<Spring<F>>,
    constraints: AllocVec<DistanceConstraint<F>>,
    force_generators: AllocVec<ForceGenerator<F>>,
    planes: AllocVec<Plane<F>>,
    integrator: Integrator<F>,
    config: SimulationConfig<F>,
    elapsed: F,
    steps: u64,
}

impl<F: Float> Simulation<F> {
    pub fn new(config: SimulationConfig<F>) -> Self {
        if config.constraint_iterations == 0 {
            log::warn!("constraint_iterations is 0, distance constraints will not be enforced");
        }
        Simulation {
            particles: AllocVec::new(),
            bodies: AllocVec::new(),
            springs: AllocVec::new(),
            constraints: AllocVec::new(),
            force_generators: AllocVec::new(),
            planes: AllocVec::new(),
            integrator: Integrator::default(),
            config,
            elapsed: F::zero(),
            steps: 0,
        }
    }

    pub fn with_integrator(mut self, integrator: Integrator<F>) -> Self {
        self.integrator = integrator;
        self
    }

    // --- registration ---

    /// Add a single particle and return its handle.
    pub fn add_particle(&mut self, particle: Particle<F>) -> Result<ParticleHandle, PhysicsError> {
        check_mass_radius(particle.mass, particle.radius)?;
        let handle = ParticleHandle(self.particles.len());
        self.bodies.push(Body::new(BodyKind::Particle, handle.0, 1, particle.color));
        self.particles.push(particle);
        log::trace!("added particle {}", handle.0);
        Ok(handle)
    }

    /// Spring between two registered particles, resting at their current separation.
    pub fn add_spring(
        &mut self,
        a: ParticleHandle,
        b: ParticleHandle,
        stiffness: F,
        damping: F,
    ) -> Result<usize, PhysicsError> {
        let spring = Spring::new(&self.particles, a, b, stiffness, damping)?;
        self.springs.push(spring);
        Ok(self.springs.len() - 1)
    }

    pub fn add_spring_with_rest_length(
        &mut self,
        a: ParticleHandle,
        b: ParticleHandle,
        stiffness: F,
        damping: F,
        rest_length: F,
    ) -> Result<usize, PhysicsError> {
        let spring = Spring::with_rest_length(&self.particles, a, b, stiffness, damping, rest_length)?;
        self.springs.push(spring);
        Ok(self.springs.len() - 1)
    }

    pub fn add_constraint(
        &mut self,
        a: ParticleHandle,
        b: ParticleHandle,
        length: F,
    ) -> Result<usize, PhysicsError> {
        let constraint = DistanceConstraint::new(&self.particles, a, b, length)?;
        self.constraints.push(constraint);
        Ok(self.constraints.len() - 1)
    }

    /// Rod holding two particles at their current separation.
    pub fn add_constraint_from_positions(
        &mut self,
        a: ParticleHandle,
        b: ParticleHandle,
    ) -> Result<usize, PhysicsError> {
        let constraint = DistanceConstraint::from_positions(&self.particles, a, b)?;
        self.constraints.push(constraint);
        Ok(self.constraints.len() - 1)
    }

    pub fn add_plane(&mut self, plane: Plane<F>) -> usize {
        self.planes.push(plane);
        self.planes.len() - 1
    }

    pub fn add_force_generator(&mut self, generator: impl Into<ForceGenerator<F>>) -> usize {
        self.force_generators.push(generator.into());
        self.force_generators.len() - 1
    }

    /// Register a cube's corners and, when configured, its 28 springs.
    pub fn add_cube(&mut self, cube: Cube<F>) -> Result<BodyId, PhysicsError> {
        let pairs = cube.spring_pairs();
        let params = cube.springs();
        let color = cube.color();

        let first = self.particles.len();
        self.particles.extend(cube.into_particles());

        let mut springs = AllocVec::new();
        if let Some(params) = params {
            for (a, b) in pairs {
                match Spring::new(
                    &self.particles,
                    ParticleHandle(first + a),
                    ParticleHandle(first + b),
                    params.stiffness,
                    params.damping,
                ) {
                    Ok(s) => springs.push(s),
                    Err(e) => {
                        self.particles.truncate(first);
                        return Err(e);
                    }
                }
            }
        }

        let count = self.particles.len() - first;
        log::debug!("added cube: {} particles, {} springs", count, springs.len());
        self.springs.extend(springs);
        Ok(self.push_body(BodyKind::Cube, first, count, color))
    }

    /// Register a cloth's particles, its structural/shear/bend springs and,
    /// when configured, rods on the structural links.
    pub fn add_cloth(&mut self, cloth: Cloth<F>) -> Result<BodyId, PhysicsError> {
        let (dim_u, dim_v) = (cloth.dim_u(), cloth.dim_v());
        let params = cloth.springs();
        let rods = cloth.structural_constraints();
        let color = cloth.color();
        let structural = cloth.structural_pairs();
        let mut spring_pairs = structural.clone();
        spring_pairs.extend(cloth.shear_pairs());
        spring_pairs.extend(cloth.bend_pairs());

        let first = self.particles.len();
        self.particles.extend(cloth.into_particles());

        match self.link_cloth(first, &spring_pairs, &structural, params.stiffness, params.damping, rods) {
            Ok((springs, constraints)) => {
                log::debug!(
                    "added {}x{} cloth: {} springs, {} constraints",
                    dim_u,
                    dim_v,
                    springs.len(),
                    constraints.len()
                );
                self.springs.extend(springs);
                self.constraints.extend(constraints);
            }
            Err(e) => {
                self.particles.truncate(first);
                return Err(e);
            }
        }

        Ok(self.push_body(BodyKind::Cloth { dim_u, dim_v }, first, dim_u * dim_v, color))
    }

    fn link_cloth(
        &self,
        first: usize,
        spring_pairs: &[(usize, usize)],
        structural: &[(usize, usize)],
        stiffness: F,
        damping: F,
        rods: bool,
    ) -> Result<(AllocVec<Spring<F>>, AllocVec<DistanceConstraint<F>>), PhysicsError> {
        let h = |i: usize| ParticleHandle(first + i);
        let mut springs = AllocVec::with_capacity(spring_pairs.len());
        for &(a, b) in spring_pairs {
            springs.push(Spring::new(&self.particles, h(a), h(b), stiffness, damping)?);
        }
        let mut constraints = AllocVec::new();
        if rods {
            for &(a, b) in structural {
                constraints.push(DistanceConstraint::from_positions(&self.particles, h(a), h(b))?);
            }
        }
        Ok((springs, constraints))
    }

    /// Register a generated batch of loose particles.
    pub fn add_particle_generator(&mut self, generator: ParticleGenerator<F>) -> Result<BodyId, PhysicsError> {
        let first = self.particles.len();
        let particles = generator.into_particles();
        for p in &particles {
            check_mass_radius(p.mass, p.radius)?;
        }
        let count = particles.len();
        self.particles.extend(particles);
        log::debug!("added particle generator: {} particles", count);
        Ok(self.push_body(BodyKind::Generator, first, count, Color::WHITE))
    }

    fn push_body(&mut self, kind: BodyKind, first: usize, count: usize, color: Color) -> BodyId {
        let id = BodyId(self.bodies.len());
        self.bodies.push(Body::new(kind, first, count, color));
        id
    }

    pub fn set_integrator(&mut self, integrator: Integrator<F>) {
        log::debug!("integrator set to {:?}", integrator);
        self.integrator = integrator;
    }

    // --- stepping ---

    /// Advance the world by `dt`.
    pub fn step(&mut self, dt: F) {
        self.step_observed(dt, &mut NoOpStepObserver);
    }

    /// Advance the world by `dt`, reporting each phase to `observer`.
    pub fn step_observed<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        self.apply_forces();
        self.update_springs();
        observer.on_forces_applied();

        self.integrate_particles(dt);
        observer.on_integrate();

        self.relax_constraints(observer);

        let (particle_contacts, plane_contacts) = self.handle_collisions();
        observer.on_collisions(particle_contacts, plane_contacts);

        self.clear_forces();

        if dt > F::zero() {
            self.elapsed += dt;
        }
        self.steps += 1;
        log::trace!(
            "step {}: {} particle contacts, {} plane contacts",
            self.steps,
            particle_contacts,
            plane_contacts
        );
        observer.on_step_complete();
    }

    /// Apply every force generator to every active particle.
    pub fn apply_forces(&mut self) {
        for generator in &self.force_generators {
            for p in self.particles.iter_mut().filter(|p| p.is_active()) {
                generator.apply(p);
            }
        }
    }

    /// Accumulate spring forces on their endpoints.
    pub fn update_springs(&mut self) {
        for spring in &self.springs {
            spring.apply(&mut self.particles);
        }
    }

    /// Advance every active particle with the current integrator.
    pub fn integrate_particles(&mut self, dt: F) {
        for p in self.particles.iter_mut().filter(|p| p.is_active()) {
            let acceleration = p.acceleration();
            self.integrator.integrate(acceleration, p, dt);
        }
    }

    /// Run the configured number of relaxation passes over all constraints.
    pub fn update_constraints(&mut self) {
        self.relax_constraints(&mut NoOpStepObserver);
    }

    fn relax_constraints<O: StepObserver>(&mut self, observer: &mut O) {
        if self.constraints.is_empty() {
            return;
        }
        for i in 0..self.config.constraint_iterations {
            for constraint in &self.constraints {
                constraint.solve(&mut self.particles);
            }
            observer.on_constraint_iteration(i);
        }
    }

    /// Resolve contacts. Returns `(particle_contacts, plane_contacts)`.
    pub fn handle_collisions(&mut self) -> (usize, usize) {
        let restitution = self.config.effective_restitution();
        let particle_contacts = if self.config.particle_collisions {
            resolve_particle_contacts(&mut self.particles, restitution, self.config.contact_weighting)
        } else {
            0
        };
        let plane_contacts = if self.config.plane_collisions {
            resolve_plane_contacts(&mut self.particles, &self.planes, restitution)
        } else {
            0
        };
        (particle_contacts, plane_contacts)
    }

    /// Zero every particle's force accumulator.
    pub fn clear_forces(&mut self) {
        for p in self.particles.iter_mut() {
            p.clear_forces();
        }
    }

    // --- access ---

    pub fn particle(&self, handle: ParticleHandle) -> Result<&Particle<F>, PhysicsError> {
        let count = self.particles.len();
        self.particles
            .get(handle.0)
            .ok_or(PhysicsError::ParticleOutOfBounds { index: handle.0, count })
    }

    pub fn particle_mut(&mut self, handle: ParticleHandle) -> Result<&mut Particle<F>, PhysicsError> {
        let count = self.particles.len();
        self.particles
            .get_mut(handle.0)
            .ok_or(PhysicsError::ParticleOutOfBounds { index: handle.0, count })
    }

    pub fn body(&self, id: BodyId) -> Result<&Body, PhysicsError> {
        let count = self.bodies.len();
        self.bodies
            .get(id.0)
            .ok_or(PhysicsError::BodyOutOfBounds { index: id.0, count })
    }

    /// Pin a particle where it currently is.
    pub fn fix_particle(&mut self, handle: ParticleHandle) -> Result<(), PhysicsError> {
        self.particle_mut(handle)?.fix();
        Ok(())
    }

    /// Let a pinned particle move again with the given mass.
    pub fn release_particle(&mut self, handle: ParticleHandle, mass: F) -> Result<(), PhysicsError> {
        check_mass_radius(mass, F::zero())?;
        self.particle_mut(handle)?.release(mass);
        Ok(())
    }

    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.particles.iter().map(|p| p.position).collect()
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn bodies(&self) -> &[Body] { &self.bodies }
    pub fn springs(&self) -> &[Spring<F>] { &self.springs }
    pub fn constraints(&self) -> &[DistanceConstraint<F>] { &self.constraints }
    pub fn planes(&self) -> &[Plane<F>] { &self.planes }
    pub fn force_generators(&self) -> &[ForceGenerator<F>] { &self.force_generators }
    pub fn integrator(&self) -> &Integrator<F> { &self.integrator }
    pub fn config(&self) -> &SimulationConfig<F> { &self.config }
    pub fn config_mut(&mut self) -> &mut SimulationConfig<F> { &mut self.config }
    /// Simulated time advanced so far.
    pub fn elapsed(&self) -> F { self.elapsed }
    pub fn step_count(&self) -> u64 { self.steps }
}

impl<F: Float> Default for Simulation<F> {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
