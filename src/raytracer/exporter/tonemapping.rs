use glam::Vec3;

#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub enum ToneMap {
    #[default]
    None,
    Aces,
    Reinhard,
}

impl ToneMap {
    pub fn apply(self, color: Vec3) -> Vec3 {
        match self {
            ToneMap::None => color,
            ToneMap::Aces => aces_tonemap(color),
            ToneMap::Reinhard => reinhard_tonemap(color),
        }
    }

    pub fn apply_with_exposure(self, color: Vec3, exposure: f32) -> Vec3 {
        self.apply(color * exposure)
    }
}

fn aces_tonemap(color: Vec3) -> Vec3 {
    let color = Vec3::new(
        color.x * 0.59719 + color.y * 0.35458 + color.z * 0.04823,
        color.x * 0.07600 + color.y * 0.90834 + color.z * 0.01566,
        color.x * 0.02840 + color.y * 0.13383 + color.z * 0.83777,
    );

    let a = color * (color + Vec3::splat(0.0245786)) - Vec3::splat(0.000090537);
    let b = color * (color * 0.983729 + Vec3::splat(0.432951)) + Vec3::splat(0.238081);
    let color = a / b;

    Vec3::new(
        color.x * 1.60475 + color.y * -0.53108 + color.z * -0.07367,
        color.x * -0.10208 + color.y * 1.10813 + color.z * -0.00605,
        color.x * -0.00327 + color.y * -0.07276 + color.z * 1.07602,
    )
    .clamp(Vec3::ZERO, Vec3::ONE)
}

fn reinhard_tonemap(color: Vec3) -> Vec3 {
    color / (color + Vec3::ONE)
}

pub fn linear_to_srgb_u8(color: Vec3) -> [u8; 3] {
    fn linear_to_srgb(c: f32) -> f32 {
        if c <= 0.0031308 {
            12.92 * c
        } else {
            1.055 * c.powf(1.0 / 2.4) - 0.055
        }
    }

    [
        (linear_to_srgb(color.x.clamp(0.0, 1.0)) * 255.0) as u8,
        (linear_to_srgb(color.y.clamp(0.0, 1.0)) * 255.0) as u8,
        (linear_to_srgb(color.z.clamp(0.0, 1.0)) * 255.0) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reinhard_stays_below_one() {
        let mapped = ToneMap::Reinhard.apply(Vec3::splat(100.0));
        assert!(mapped.max_element() < 1.0);
    }

    #[test]
    fn srgb_endpoints() {
        assert_eq!(linear_to_srgb_u8(Vec3::ZERO), [0, 0, 0]);
        assert_eq!(linear_to_srgb_u8(Vec3::ONE), [255, 255, 255]);
    }
}
