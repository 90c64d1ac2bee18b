use crate::{color::Color, math::vec::Vec3, ray::Ray};

/// A sphere with a flat base color and a mirror coefficient.
///
/// `specular` runs from 0 (matte) to 1 (perfect mirror); in-between values
/// blend the shaded color with the reflected one.
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub color: Color,
    pub specular: f32,
}

impl Sphere {
    /// Panics on a non-positive radius or a specular coefficient outside
    /// [0, 1], both are construction-time contract violations.
    pub fn new(center: Vec3, radius: f32, color: Color, specular: f32) -> Self {
        assert!(radius > 0.0, "sphere radius must be positive, got {radius}");
        assert!(
            (0.0..=1.0).contains(&specular),
            "specular coefficient must lie in [0, 1], got {specular}"
        );
        Self {
            center,
            radius,
            color,
            specular,
        }
    }

    /// Distance along `ray` to the nearest surface crossing, if any.
    ///
    /// Returns the smaller quadratic root when it lies in front of the
    /// origin, the larger one when the origin sits inside the sphere, and
    /// None when the sphere is missed or entirely behind the ray.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let b_half = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant_quarter = b_half * b_half - a * c;
        if discriminant_quarter < 0.0 {
            return None;
        }

        let t = (-b_half - discriminant_quarter.sqrt()) / a;
        if t >= 0.0 {
            return Some(t);
        }
        let t = (-b_half + discriminant_quarter.sqrt()) / a;
        (t >= 0.0).then_some(t)
    }
}
