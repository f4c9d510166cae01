//! Brute-force contact resolution: particle against particle, particle against plane.
//!
//! Contacts are resolved in one pass with a positional push-out along the
//! contact normal followed by a restitution impulse when the bodies approach.
//! How the push and the impulse are shared between two particles is chosen
//! by [`ContactWeighting`] and applied identically to both.

use crate::float::{Float, CONTACT_EPSILON_SQ, MASS_EPSILON};
use crate::particle::Particle;
use crate::plane::Plane;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a particle-particle contact is shared between the two particles.
///
/// A fixed particle never takes any share, whichever scheme is selected,
/// and a plane is always immovable, so plane contacts give the particle
/// the full correction under both schemes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContactWeighting {
    /// Half each when both move, all of it on the movable one otherwise.
    /// Exact only for equal masses.
    #[default]
    Equal,
    /// Shares proportional to inverse mass.
    InverseMass,
}

impl ContactWeighting {
    /// Shares `(w_a, w_b)` of a correction, or `None` when neither particle can move.
    pub fn weights<F: Float>(self, a: &Particle<F>, b: &Particle<F>) -> Option<(F, F)> {
        let equal = match (a.is_fixed(), b.is_fixed()) {
            (false, false) => (F::half(), F::half()),
            (true, false) => (F::zero(), F::one()),
            (false, true) => (F::one(), F::zero()),
            (true, true) => return None,
        };
        match self {
            ContactWeighting::Equal => Some(equal),
            ContactWeighting::InverseMass => {
                if a.is_fixed() || b.is_fixed() {
                    return Some(equal);
                }
                let eps = F::from_f32(MASS_EPSILON);
                // a massless active particle yields completely
                match (a.mass <= eps, b.mass <= eps) {
                    (true, true) => Some(equal),
                    (true, false) => Some((F::one(), F::zero())),
                    (false, true) => Some((F::zero(), F::one())),
                    (false, false) => {
                        let inv_a = a.inverse_mass();
                        let inv_b = b.inverse_mass();
                        let total = inv_a + inv_b;
                        Some((inv_a / total, inv_b / total))
                    }
                }
            }
        }
    }
}

/// Resolve every overlapping pair once. Returns the number of contacts handled.
pub fn resolve_particle_contacts<F: Float>(
    particles: &mut [Particle<F>],
    restitution: F,
    weighting: ContactWeighting,
) -> usize {
    let mut contacts = 0;
    let n = particles.len();
    for j in 1..n {
        let (head, tail) = particles.split_at_mut(j);
        let p2 = &mut tail[0];
        for p1 in head.iter_mut() {
            if resolve_pair(p1, p2, restitution, weighting) {
                contacts += 1;
            }
        }
    }
    contacts
}

fn resolve_pair<F: Float>(
    p1: &mut Particle<F>,
    p2: &mut Particle<F>,
    restitution: F,
    weighting: ContactWeighting,
) -> bool {
    let delta = p1.position - p2.position;
    let dist_sq = delta.length_sq();
    let combined = p1.radius + p2.radius;

    // coincident centers have no usable normal
    if !(dist_sq < combined * combined && dist_sq > F::from_f32(CONTACT_EPSILON_SQ)) {
        return false;
    }
    let Some((w1, w2)) = weighting.weights(p1, p2) else {
        return false;
    };

    let dist = dist_sq.sqrt();
    let normal = delta / dist;
    let penetration = combined - dist;

    p1.displace(normal.scale(penetration * w1));
    p2.displace(-normal.scale(penetration * w2));

    let approach = (p1.velocity - p2.velocity).dot(normal);
    if approach < F::zero() {
        let impulse = -(F::one() + restitution) * approach;
        p1.apply_impulse(normal.scale(impulse * w1));
        p2.apply_impulse(-normal.scale(impulse * w2));
    }
    true
}

/// Push particles out of every plane they penetrate. Returns the number of contacts handled.
pub fn resolve_plane_contacts<F: Float>(
    particles: &mut [Particle<F>],
    planes: &[Plane<F>],
    restitution: F,
) -> usize {
    let mut contacts = 0;
    for p in particles.iter_mut().filter(|p| p.is_active()) {
        for plane in planes {
            let normal = plane.normal();
            let gap = plane.signed_distance(p.position) - p.radius;
            if gap >= F::zero() {
                continue;
            }
            contacts += 1;
            p.displace(normal.scale(-gap));

            let approach = p.velocity.dot(normal);
            if approach < F::zero() {
                p.apply_impulse(normal.scale(-(F::one() + restitution) * approach));
            }
        }
    }
    contacts
}
