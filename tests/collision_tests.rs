use pointmass::collision::{resolve_particle_contacts, resolve_plane_contacts};
use pointmass::{ContactWeighting, Particle, Plane, Vec3};

fn overlapping_cluster() -> Vec<Particle<f64>> {
    let mut ps = Vec::new();
    for i in 0..4 {
        for j in 0..4 {
            ps.push(Particle::new(Vec3::new(i as f64 * 0.7, 0.0, j as f64 * 0.7), 1.0).with_radius(0.5));
        }
    }
    ps
}

#[test]
fn isolated_pairs_end_separated() {
    for weighting in [ContactWeighting::Equal, ContactWeighting::InverseMass] {
        let mut ps = vec![
            Particle::new(Vec3::new(0.0, 0.0, 0.0), 1.0).with_radius(0.5),
            Particle::new(Vec3::new(0.6, 0.1, 0.0), 3.0).with_radius(0.5),
            Particle::new(Vec3::new(10.0, 0.0, 0.0), 1.0).with_radius(1.0),
            Particle::new(Vec3::new(10.0, 0.0, 1.5), 2.0).with_radius(1.0),
        ];
        let contacts = resolve_particle_contacts(&mut ps, 0.5, weighting);
        assert_eq!(contacts, 2);
        assert!(ps[0].position.distance(ps[1].position) >= 1.0 - 1e-9);
        assert!(ps[2].position.distance(ps[3].position) >= 2.0 - 1e-9);
    }
}

#[test]
fn repeated_passes_separate_a_cluster() {
    let mut ps = overlapping_cluster();
    for _ in 0..500 {
        resolve_particle_contacts(&mut ps, 0.0, ContactWeighting::Equal);
    }
    for i in 0..ps.len() {
        for j in (i + 1)..ps.len() {
            let d = ps[i].position.distance(ps[j].position);
            assert!(d >= 1.0 - 1e-2, "pair ({}, {}) at {}", i, j, d);
        }
    }
}

#[test]
fn fixed_particle_is_not_pushed() {
    let mut ps = vec![
        Particle::fixed(Vec3::new(0.0f32, 0.0, 0.0)).with_radius(0.5),
        Particle::new(Vec3::new(0.0, 0.5, 0.0), 1.0).with_radius(0.5).with_velocity(Vec3::new(0.0, -2.0, 0.0)),
    ];
    resolve_particle_contacts(&mut ps, 1.0, ContactWeighting::InverseMass);
    assert_eq!(ps[0].position, Vec3::zero());
    assert!((ps[1].position.y - 1.0).abs() < 1e-6);
    assert!((ps[1].velocity.y - 2.0).abs() < 1e-5);
}

#[test]
fn two_fixed_particles_are_left_alone() {
    let mut ps = vec![
        Particle::fixed(Vec3::new(0.0f32, 0.0, 0.0)).with_radius(1.0),
        Particle::fixed(Vec3::new(0.5, 0.0, 0.0)).with_radius(1.0),
    ];
    assert_eq!(resolve_particle_contacts(&mut ps, 0.5, ContactWeighting::Equal), 0);
    assert_eq!(ps[1].position, Vec3::new(0.5, 0.0, 0.0));
}

#[test]
fn coincident_centers_are_skipped() {
    let mut ps = vec![
        Particle::new(Vec3::new(1.0f32, 1.0, 1.0), 1.0).with_radius(0.5),
        Particle::new(Vec3::new(1.0, 1.0, 1.0), 1.0).with_radius(0.5),
    ];
    assert_eq!(resolve_particle_contacts(&mut ps, 0.5, ContactWeighting::Equal), 0);
    assert!(ps[0].position.is_finite() && ps[1].position.is_finite());
}

#[test]
fn particles_never_end_below_a_plane() {
    let slope = Plane::new(Vec3::new(1.0f64, 1.0, 0.0), Vec3::zero()).unwrap();
    let floor = Plane::ground(-1.0);
    let planes = [slope, floor];
    let mut ps = overlapping_cluster();
    for p in ps.iter_mut() {
        p.position.y -= 3.0;
        p.velocity = Vec3::new(-1.0, -5.0, 0.0);
    }
    resolve_plane_contacts(&mut ps, &planes, 0.3);
    resolve_plane_contacts(&mut ps, &planes, 0.3);
    for p in &ps {
        for plane in &planes {
            assert!(plane.signed_distance(p.position) >= p.radius - 1e-9);
        }
        assert!(p.velocity.y >= 0.0);
    }
}

#[test]
fn plane_leaves_fixed_particles() {
    let mut ps = vec![Particle::fixed(Vec3::new(0.0f32, -2.0, 0.0))];
    assert_eq!(resolve_plane_contacts(&mut ps, &[Plane::ground(0.0)], 0.5), 0);
    assert_eq!(ps[0].position.y, -2.0);
}

#[test]
fn massless_particle_yields_under_inverse_mass() {
    let mut ps = vec![
        Particle::new(Vec3::new(0.0f64, 0.0, 0.0), 0.0).with_radius(0.5),
        Particle::new(Vec3::new(0.5, 0.0, 0.0), 1.0).with_radius(0.5),
    ];
    assert_eq!(resolve_particle_contacts(&mut ps, 0.5, ContactWeighting::InverseMass), 1);
    assert!((ps[0].position.x + 0.5).abs() < 1e-12, "massless a at {:?}", ps[0].position);
    assert_eq!(ps[1].position, Vec3::new(0.5, 0.0, 0.0));

    let mut ps = vec![
        Particle::new(Vec3::new(0.0f64, 0.0, 0.0), 1.0).with_radius(0.5),
        Particle::new(Vec3::new(0.5, 0.0, 0.0), 0.0).with_radius(0.5),
    ];
    resolve_particle_contacts(&mut ps, 0.5, ContactWeighting::InverseMass);
    assert_eq!(ps[0].position, Vec3::zero());
    assert!((ps[1].position.x - 1.0).abs() < 1e-12);
}

#[test]
fn two_massless_particles_split_evenly() {
    let a = Particle::new(Vec3::new(0.0f32, 0.0, 0.0), 0.0);
    let b = Particle::new(Vec3::new(0.1, 0.0, 0.0), 0.0);
    assert_eq!(ContactWeighting::InverseMass.weights(&a, &b), Some((0.5, 0.5)));
}
