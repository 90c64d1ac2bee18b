use image::Rgb;

pub type Color = Rgb<u8>;

pub const BLACK: Color = Rgb([0, 0, 0]);
pub const WHITE: Color = Rgb([255, 255, 255]);
pub const RED: Color = Rgb([255, 0, 0]);
pub const GREEN: Color = Rgb([0, 255, 0]);
pub const BLUE: Color = Rgb([0, 0, 255]);

/// Scale a color by a light intensity.
///
/// Channels are truncated and saturate at 255, they never wrap.
pub fn shaded(color: Color, intensity: f32) -> Color {
    Rgb(color.0.map(|c| (c as f32 * intensity).min(255.0) as u8))
}

/// Blend a surface color with its mirror reflection.
///
/// `specular` 0 keeps `base` untouched, 1 keeps only `reflected`. Channels
/// are truncated, not rounded.
pub fn blend(base: Color, reflected: Color, specular: f32) -> Color {
    let mut out = [0; 3];
    for (channel, (b, r)) in out.iter_mut().zip(base.0.into_iter().zip(reflected.0)) {
        *channel = (b as f32 * (1.0 - specular) + r as f32 * specular) as u8;
    }
    Rgb(out)
}
