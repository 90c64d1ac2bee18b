pub mod examples;

use crate::{
    color::{self, Color},
    math::vec::{ReflectVecExt, Vec3, Vec3AsUnit, Vec3SafeNormExt},
    ray::Ray,
    sphere::Sphere,
};

/// Reflection rays stop spawning past this depth.
pub const MAX_DEPTH: u32 = 5;

/// Shininess exponent of the specular highlight.
const SHININESS: f32 = 32.0;

/// Offset along the normal applied to reflection ray origins so they start
/// clear of the surface they bounce off.
const SELF_HIT_BIAS: f32 = 1e-4;

/// A set of spheres and point lights under a constant ambient term.
///
/// Build the scene up front with [`Scene::add_sphere`] and
/// [`Scene::add_light`]; tracing never mutates it, so a fully built scene
/// can be shared across rendering workers by reference.
pub struct Scene {
    spheres: Vec<Sphere>,
    lights: Vec<Vec3>,
    pub ambient: f32,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            spheres: Vec::new(),
            lights: Vec::new(),
            ambient: 0.2,
        }
    }
}

impl Scene {
    /// Insert a sphere in the scene
    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Insert a point light in the scene
    pub fn add_light(&mut self, position: Vec3) {
        self.lights.push(position);
    }

    /// Trace a ray through the scene and return one color sample.
    ///
    /// Total and deterministic: every degenerate case (missed rays, near-zero
    /// vectors, exhausted recursion) falls back to a defined value rather
    /// than an error. Callers start at `depth` 0; reflection rays recurse
    /// with `depth + 1` until [`MAX_DEPTH`] cuts the chain.
    pub fn trace(&self, ray: &Ray, depth: u32) -> Color {
        if depth > MAX_DEPTH {
            return color::BLACK;
        }

        let Some((t, sphere)) = self.closest_hit(ray) else {
            // Background
            return color::BLACK;
        };

        let hit_point = ray.at(t);
        let normal = (hit_point - sphere.center).normalize_safe();

        let mut intensity = self.ambient;
        for light in &self.lights {
            // A light sitting on the hit point has no direction, skip it
            let Some(light_dir) = (*light - hit_point).as_unit() else {
                continue;
            };

            intensity += normal.dot(light_dir).max(0.0);

            if sphere.specular > 0.0 {
                let Some(view_dir) = (ray.origin - hit_point).as_unit() else {
                    continue;
                };
                let Some(highlight_dir) = (-light_dir).reflect(normal).as_unit() else {
                    continue;
                };
                intensity +=
                    sphere.specular * view_dir.dot(highlight_dir).max(0.0).powf(SHININESS);
            }
        }

        let base = color::shaded(sphere.color, intensity);

        if sphere.specular > 0.0 {
            if let Some(mirror_dir) = ray.direction.reflect(normal).as_unit() {
                let mirror_ray = Ray::new(hit_point + SELF_HIT_BIAS * normal, mirror_dir);
                let reflected = self.trace(&mirror_ray, depth + 1);
                return color::blend(base, reflected, sphere.specular);
            }
        }

        base
    }

    /// Linear scan for the smallest valid hit distance. Ties keep the first
    /// sphere in insertion order.
    fn closest_hit(&self, ray: &Ray) -> Option<(f32, &Sphere)> {
        let mut closest: Option<(f32, &Sphere)> = None;
        for sphere in &self.spheres {
            if let Some(t) = sphere.intersect(ray) {
                if closest.map_or(true, |(closest_t, _)| t < closest_t) {
                    closest = Some((t, sphere));
                }
            }
        }
        closest
    }
}
