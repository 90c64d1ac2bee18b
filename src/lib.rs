pub mod camera;
pub mod color;
pub mod math;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod sphere;
pub mod utils;
