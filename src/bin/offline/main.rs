use std::{fmt::Display, path::PathBuf, str::FromStr};

use anyhow::Result;
use clap::Parser;
use glam::Vec3;

use raytracer::{
    camera::Camera,
    renderer,
    scene::{examples::ThreeSpheresScene, Scene},
};

#[derive(Clone, Debug)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl FromStr for Dimensions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((w, h)) = s.split_once('x') else {
            return Err(anyhow::anyhow!("Incorrect format, see help"));
        };
        Ok(Dimensions {
            width: w.parse()?,
            height: h.parse()?,
        })
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}x{}", self.width, self.height))
    }
}

#[derive(Parser, Debug)]
pub struct Args {
    #[arg(short, long, default_value = "800x600")]
    /// Image dimension in format `width`x`height`
    dimensions: Dimensions,

    #[arg(short, long, default_value = "output/render.png")]
    /// Path of the image to write
    output: PathBuf,

    #[arg(long, default_value_t = 90.0)]
    /// Vertical field of view, in degrees
    fov: f32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let scene: Scene = ThreeSpheresScene.into();
    let camera = Camera::new(
        args.dimensions.width,
        args.dimensions.height,
        args.fov.to_radians(),
        Vec3::ZERO,
    );

    let image = renderer::render(&scene, &camera);

    if let Some(parent) = args.output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    image.save(&args.output)?;
    log::info!("Saved image to {}", args.output.display());

    Ok(())
}
