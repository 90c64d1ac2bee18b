use crate::math::vec::{Vec3, Vec3SafeNormExt};

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_safe(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::Ray;

    #[test]
    fn ray() {
        let eps = 0.01;
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(-2.0, 2.0, 0.0));

        assert!(ray.at(0.0).distance_squared(ray.origin) < eps);
        assert!(ray.at(1.0).distance_squared(ray.origin + ray.direction) < eps);
        assert!((ray.direction.length() - 1.0).abs() < eps);
    }

    #[test]
    fn degenerate_direction_is_zero() {
        let ray = Ray::new(Vec3::ZERO, Vec3::splat(1e-8));
        assert_eq!(ray.direction, Vec3::ZERO);
    }
}
