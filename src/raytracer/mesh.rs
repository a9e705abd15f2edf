use crate::raytracer::material::Material;
use glam::{Quat, Vec3};

pub struct MeshObject {
    pub material: Material,
    local_vertices: Vec<Vec3>,
    indices: Vec<u32>,
    rotation: Quat,
    scale: Vec3,
    translation: Vec3,
    world_vertices: Vec<Vec3>,
    bounds_min: Vec3,
    bounds_max: Vec3,
}

impl MeshObject {
    pub fn new(local_vertices: Vec<Vec3>, indices: Vec<u32>, material: Material) -> Self {
        let mut mesh = Self {
            material,
            local_vertices,
            indices,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            translation: Vec3::ZERO,
            world_vertices: Vec::new(),
            bounds_min: Vec3::ZERO,
            bounds_max: Vec3::ZERO,
        };
        mesh.bake();
        mesh
    }

    pub fn cube(material: Material) -> Self {
        let vertices = vec![
            Vec3::new(-0.5, -0.5, -0.5),
            Vec3::new(0.5, -0.5, -0.5),
            Vec3::new(0.5, 0.5, -0.5),
            Vec3::new(-0.5, 0.5, -0.5),
            Vec3::new(-0.5, -0.5, 0.5),
            Vec3::new(0.5, -0.5, 0.5),
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(-0.5, 0.5, 0.5),
        ];
        let indices = vec![
            0, 2, 1, 0, 3, 2, // back
            4, 5, 6, 4, 6, 7, // front
            0, 4, 7, 0, 7, 3, // left
            1, 6, 5, 1, 2, 6, // right
            3, 7, 6, 3, 6, 2, // top
            0, 1, 5, 0, 5, 4, // bottom
        ];
        Self::new(vertices, indices, material)
    }

    pub fn set_transform(&mut self, rotation: Quat, scale: Vec3, translation: Vec3) {
        self.rotation = rotation;
        self.scale = scale;
        self.translation = translation;
        self.bake();
    }

    pub fn set_geometry(&mut self, local_vertices: Vec<Vec3>, indices: Vec<u32>) {
        self.local_vertices = local_vertices;
        self.indices = indices;
        self.bake();
    }

    pub fn triangles(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.world_vertices
    }

    pub fn bounds_min(&self) -> Vec3 {
        self.bounds_min
    }

    pub fn bounds_max(&self) -> Vec3 {
        self.bounds_max
    }

    // Runs on geometry or transform edits, never per render tick.
    fn bake(&mut self) {
        self.world_vertices.clear();
        self.world_vertices.reserve(self.local_vertices.len());
        for &v in &self.local_vertices {
            self.world_vertices
                .push(self.translation + self.scale * (self.rotation * v));
        }

        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for &v in &self.world_vertices {
            min = min.min(v);
            max = max.max(v);
        }
        if self.world_vertices.is_empty() {
            min = Vec3::ZERO;
            max = Vec3::ZERO;
        }
        self.bounds_min = min;
        self.bounds_max = max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn single_triangle() -> MeshObject {
        MeshObject::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            vec![0, 1, 2],
            Material::default(),
        )
    }

    #[test]
    fn bake_applies_rotation_then_scale_then_translation() {
        let mut mesh = single_triangle();
        let rotation = Quat::from_rotation_z(FRAC_PI_2);
        mesh.set_transform(rotation, Vec3::new(2.0, 3.0, 1.0), Vec3::new(10.0, 0.0, 0.0));

        // X rotates onto Y, then scales by 3, then translates.
        let v = mesh.vertices()[1];
        assert!((v - Vec3::new(10.0, 3.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn bake_preserves_vertex_order() {
        let mesh = single_triangle();
        assert_eq!(mesh.vertices().len(), 3);
        assert_eq!(mesh.vertices()[0], Vec3::ZERO);
        assert_eq!(mesh.vertices()[2], Vec3::Y);
    }

    #[test]
    fn bounds_cover_world_vertices() {
        let mut mesh = single_triangle();
        mesh.set_transform(Quat::IDENTITY, Vec3::ONE, Vec3::new(-1.0, 2.0, 0.5));
        assert_eq!(mesh.bounds_min(), Vec3::new(-1.0, 2.0, 0.5));
        assert_eq!(mesh.bounds_max(), Vec3::new(0.0, 3.0, 0.5));
    }

    #[test]
    fn rebake_shrinks_bounds_to_current_geometry() {
        let mut mesh = single_triangle();
        mesh.set_transform(Quat::IDENTITY, Vec3::splat(10.0), Vec3::ZERO);
        assert_eq!(mesh.bounds_max(), Vec3::new(10.0, 10.0, 0.0));

        mesh.set_transform(Quat::IDENTITY, Vec3::ONE, Vec3::ZERO);
        assert_eq!(mesh.bounds_max(), Vec3::new(1.0, 1.0, 0.0));
    }
}
