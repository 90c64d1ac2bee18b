use image::RgbImage;
use rayon::prelude::{ParallelBridge, ParallelIterator};

use crate::{camera::Camera, scene::Scene, utils::timer::timed_scope_log};

/// Render one full frame, one trace per pixel.
///
/// The scene is borrowed immutably by every worker, so it must be fully
/// built before this call; rows are distributed over the rayon thread pool.
pub fn render(scene: &Scene, camera: &Camera) -> RgbImage {
    log::info!("rendering {}x{} pixels", camera.width, camera.height);

    let mut image = RgbImage::new(camera.width, camera.height);
    timed_scope_log("Render pass", || {
        image
            .enumerate_rows_mut()
            .par_bridge()
            .for_each(|(_, row)| {
                for (x, y, pixel) in row {
                    *pixel = scene.trace(&camera.ray(x, y), 0);
                }
            });
    });

    image
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::render;
    use crate::{camera::Camera, color, scene::Scene, sphere::Sphere};

    #[test]
    fn empty_scene_renders_black() {
        let scene = Scene::default();
        let camera = Camera::new(16, 12, std::f32::consts::FRAC_PI_2, Vec3::ZERO);

        let image = render(&scene, &camera);
        assert_eq!(image.dimensions(), (16, 12));
        assert!(image.pixels().all(|p| *p == color::BLACK));
    }

    #[test]
    fn centered_sphere_covers_center_pixel() {
        let mut scene = Scene::default();
        scene.add_sphere(Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            color::RED,
            0.0,
        ));

        let camera = Camera::new(17, 13, std::f32::consts::FRAC_PI_2, Vec3::ZERO);
        let image = render(&scene, &camera);

        // Ambient-lit red at the center, background at the corner
        assert_eq!(*image.get_pixel(8, 6), image::Rgb([51, 0, 0]));
        assert_eq!(*image.get_pixel(0, 0), color::BLACK);
    }
}
