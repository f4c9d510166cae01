use pointmass::{ContactWeighting, Simulation, SimulationConfig};

#[test]
fn defaults() {
    let config: SimulationConfig<f32> = SimulationConfig::default();
    assert_eq!(config.constraint_iterations, 10);
    assert_eq!(config.restitution, 0.5);
    assert_eq!(config.contact_weighting, ContactWeighting::Equal);
    assert!(config.particle_collisions && config.plane_collisions);
}

#[test]
fn restitution_is_clamped() {
    let config: SimulationConfig<f64> = SimulationConfig::new().with_restitution(3.0);
    assert_eq!(config.restitution, 1.0);

    let mut config: SimulationConfig<f64> = SimulationConfig::new();
    config.restitution = -2.0;
    assert_eq!(config.effective_restitution(), 0.0);

    let sim = Simulation::new(SimulationConfig::<f64>::new().with_restitution(-1.0));
    assert_eq!(sim.config().restitution, 0.0);
}

#[cfg(feature = "serde")]
mod yaml {
    use super::*;

    #[test]
    fn partial_yaml_fills_defaults() {
        let yaml = "constraint_iterations: 4\ncontact_weighting: InverseMass\n";
        let config: SimulationConfig<f32> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.constraint_iterations, 4);
        assert_eq!(config.contact_weighting, ContactWeighting::InverseMass);
        assert_eq!(config.restitution, 0.5);
        assert!(config.plane_collisions);
    }

    #[test]
    fn yaml_round_trip() {
        let config: SimulationConfig<f64> = SimulationConfig::new()
            .with_constraint_iterations(20)
            .with_restitution(0.25)
            .with_particle_collisions(false);
        let text = serde_yaml::to_string(&config).unwrap();
        let back: SimulationConfig<f64> = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
