//! Static infinite planes particles collide against.

use crate::color::Color;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec3;

/// A static plane through `point` facing along the unit `normal`.
///
/// Collision treats the plane as infinite; `size` and `color` only tell the
/// renderer how large a quad to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane<F: Float> {
    normal: Vec3<F>,
    point: Vec3<F>,
    size: F,
    color: Color,
}

impl<F: Float> Plane<F> {
    /// The normal is normalized here; a zero normal is rejected.
    pub fn new(normal: Vec3<F>, point: Vec3<F>) -> Result<Self, PhysicsError> {
        let normal = normal.try_normalize().ok_or(PhysicsError::DegeneratePlaneNormal)?;
        Ok(Plane { normal, point, size: F::one(), color: Color::GRAY })
    }

    /// Ground plane `y = height` facing up.
    pub fn ground(height: F) -> Self {
        Plane {
            normal: Vec3::new(F::zero(), F::one(), F::zero()),
            point: Vec3::new(F::zero(), height, F::zero()),
            size: F::one(),
            color: Color::GRAY,
        }
    }

    pub fn with_size(mut self, size: F) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Signed distance from `p` to the plane, positive on the normal side.
    pub fn signed_distance(&self, p: Vec3<F>) -> F {
        (p - self.point).dot(self.normal)
    }

    pub fn normal(&self) -> Vec3<F> { self.normal }
    pub fn point(&self) -> Vec3<F> { self.point }
    pub fn size(&self) -> F { self.size }
    pub fn color(&self) -> Color { self.color }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_is_normalized() {
        let p = Plane::new(Vec3::new(0.0f32, 5.0, 0.0), Vec3::zero()).unwrap();
        assert_eq!(p.normal(), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn zero_normal_rejected() {
        assert_eq!(
            Plane::new(Vec3::<f32>::zero(), Vec3::zero()),
            Err(PhysicsError::DegeneratePlaneNormal)
        );
    }

    #[test]
    fn signed_distance_sides() {
        let wall = Plane::new(Vec3::new(-1.0f32, 0.0, 0.0), Vec3::new(3.0, 3.0, 0.0)).unwrap();
        assert!((wall.signed_distance(Vec3::new(1.0, 0.0, 0.0)) - 2.0).abs() < 1e-6);
        assert!((wall.signed_distance(Vec3::new(4.0, 0.0, 0.0)) + 1.0).abs() < 1e-6);
    }
}
