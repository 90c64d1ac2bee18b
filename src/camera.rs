use crate::{math::vec::Vec3, ray::Ray};

/// Pinhole camera looking down -Z, mapping pixel coordinates to world-space
/// rays. The tracer itself never sees screen space; this is the sole bridge.
pub struct Camera {
    pub width: u32,
    pub height: u32,
    pub fov: f32,
    pub origin: Vec3,
}

impl Camera {
    /// `fov` is the vertical field of view in radians.
    pub fn new(width: u32, height: u32, fov: f32, origin: Vec3) -> Self {
        Self {
            width,
            height,
            fov,
            origin,
        }
    }

    /// Ray through the center of pixel (x, y).
    pub fn ray(&self, x: u32, y: u32) -> Ray {
        let h = f32::tan(self.fov / 2.0);
        let aspect_ratio = self.width as f32 / self.height as f32;

        let ndc_x = (2.0 * ((x as f32 + 0.5) / self.width as f32) - 1.0) * h * aspect_ratio;
        let ndc_y = (1.0 - 2.0 * ((y as f32 + 0.5) / self.height as f32)) * h;

        Ray::new(self.origin, Vec3::new(ndc_x, ndc_y, -1.0))
    }
}
