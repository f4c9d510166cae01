use pointmass::{
    Cloth, ClothConfig, GeneratorConfig, Gravity, Integrator, Medium, ParticleGenerator, Plane, Simulation,
    SimulationConfig, Vec3,
};

fn shower(seed: u64) -> Vec<Vec3<f32>> {
    let mut sim: Simulation<f32> = Simulation::new(SimulationConfig::new().with_restitution(0.7));
    sim.add_force_generator(Gravity::default());
    sim.add_force_generator(Medium::new(0.1).unwrap());
    sim.add_plane(Plane::ground(0.0));
    let config = GeneratorConfig::new(60, Vec3::new(0.0, 1.0, 0.0))
        .with_seed(seed)
        .with_offsets(Vec3::new(-2.0, 0.0, -2.0), Vec3::new(2.0, 20.0, 2.0));
    sim.add_particle_generator(ParticleGenerator::new(&config).unwrap()).unwrap();
    for _ in 0..200 {
        sim.step(1.0 / 60.0);
    }
    sim.positions()
}

#[test]
fn particle_shower_deterministic() {
    let results: Vec<_> = (0..3).map(|_| shower(11)).collect();
    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
            assert_eq!(a.z, b.z);
        }
    }
}

#[test]
fn different_seeds_differ() {
    assert_ne!(shower(1), shower(2));
}

#[test]
fn cloth_deterministic() {
    let results: Vec<_> = (0..3)
        .map(|_| {
            let mut config = ClothConfig::new(
                8,
                8,
                Vec3::new(0.0f64, 3.0, 0.0),
                Vec3::new(3.5, 3.0, 0.0),
                Vec3::new(0.0, 3.0, 3.5),
            );
            config.total_mass = 16.0;
            let mut cloth = Cloth::new(&config).unwrap();
            cloth.pin(0, 0).unwrap();
            cloth.pin(0, 7).unwrap();

            let mut sim: Simulation<f64> = Simulation::default().with_integrator(Integrator::verlet(0.01));
            sim.add_force_generator(Gravity::default());
            sim.add_cloth(cloth).unwrap();
            for _ in 0..90 {
                sim.step(1.0 / 120.0);
            }
            sim.positions()
        })
        .collect();

    for r in &results[1..] {
        assert_eq!(&results[0], r);
    }
}
