pub use glam::Vec3;

/// Length under which a vector is treated as degenerate.
pub const DEGENERATE_EPS: f32 = 1e-6;

pub trait ReflectVecExt {
    fn reflect(self, normal: Vec3) -> Vec3;
}

impl ReflectVecExt for Vec3 {
    fn reflect(self, normal: Vec3) -> Vec3 {
        self - (2.0 * self.dot(normal) * normal)
    }
}

pub trait Vec3AsUnit: Sized {
    fn as_unit(self) -> Option<Self>;
}

impl Vec3AsUnit for Vec3 {
    /// Returns the normalized vector, or None when its length is below
    /// [`DEGENERATE_EPS`]
    fn as_unit(self) -> Option<Self> {
        let length = self.length();
        (length >= DEGENERATE_EPS).then(|| self / length)
    }
}

pub trait Vec3SafeNormExt {
    fn normalize_safe(self) -> Self;
}

impl Vec3SafeNormExt for Vec3 {
    /// Like `normalize`, but degenerate vectors map to zero instead of being
    /// amplified into garbage
    fn normalize_safe(self) -> Vec3 {
        self.as_unit().unwrap_or(Vec3::ZERO)
    }
}
