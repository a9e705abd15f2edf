use glam::{Vec3, Vec4};

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub enum MaterialFlag {
    #[default]
    None,
}

#[derive(Clone, Copy, Debug)]
pub struct Material {
    pub base_colour: Vec4,
    pub emission_colour: Vec4,
    pub specular_colour: Vec4,
    pub emission_strength: f32,
    pub smoothness: f32,
    pub specular_probability: f32,
    pub flag: MaterialFlag,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_colour: Vec4::ONE,
            emission_colour: Vec4::new(0.0, 0.0, 0.0, 1.0),
            specular_colour: Vec4::ONE,
            emission_strength: 0.0,
            smoothness: 0.0,
            specular_probability: 0.0,
            flag: MaterialFlag::None,
        }
    }
}

impl Material {
    pub fn diffuse(colour: Vec3) -> Self {
        Self {
            base_colour: colour.extend(1.0),
            ..Default::default()
        }
    }

    pub fn emissive(colour: Vec3, strength: f32) -> Self {
        Self {
            emission_colour: colour.extend(1.0),
            emission_strength: strength,
            ..Default::default()
        }
    }

    pub fn specular(colour: Vec3, smoothness: f32, probability: f32) -> Self {
        Self {
            base_colour: colour.extend(1.0),
            smoothness: smoothness.clamp(0.0, 1.0),
            specular_probability: probability.clamp(0.0, 1.0),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specular_clamps_to_unit_range() {
        let material = Material::specular(Vec3::ONE, 1.5, -0.2);
        assert_eq!(material.smoothness, 1.0);
        assert_eq!(material.specular_probability, 0.0);
    }

    #[test]
    fn default_is_non_emissive() {
        let material = Material::default();
        assert_eq!(material.emission_strength, 0.0);
        assert_eq!(material.flag, MaterialFlag::None);
    }
}
