use crate::{color, math::vec::Vec3, scene::Scene, sphere::Sphere};

/// Three colored spheres of increasing reflectivity over a gray floor, lit
/// from both sides.
pub struct ThreeSpheresScene;

impl From<ThreeSpheresScene> for Scene {
    fn from(_: ThreeSpheresScene) -> Self {
        let mut scene = Scene::default();

        scene.add_sphere(Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            color::RED,
            0.5,
        ));
        scene.add_sphere(Sphere::new(
            Vec3::new(-2.0, 0.0, -5.0),
            1.0,
            color::GREEN,
            0.3,
        ));
        scene.add_sphere(Sphere::new(
            Vec3::new(2.0, 0.0, -5.0),
            1.0,
            color::BLUE,
            0.7,
        ));
        // A huge sphere standing in for the floor plane
        scene.add_sphere(Sphere::new(
            Vec3::new(0.0, -5001.0, 0.0),
            5000.0,
            image::Rgb([200, 200, 200]),
            0.0,
        ));

        scene.add_light(Vec3::new(5.0, 5.0, -5.0));
        scene.add_light(Vec3::new(-5.0, 5.0, -5.0));

        scene
    }
}
