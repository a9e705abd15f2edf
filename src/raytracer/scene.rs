use crate::raytracer::material::Material;
use crate::raytracer::mesh::MeshObject;
use glam::Vec3;

#[derive(Clone, Copy)]
pub struct SphereObject {
    pub position: Vec3,
    pub uniform_scale: f32,
    pub material: Material,
}

impl SphereObject {
    pub fn new(position: Vec3, uniform_scale: f32, material: Material) -> Self {
        Self {
            position,
            uniform_scale,
            material,
        }
    }
}

// Renderables are traversed in insertion order; the flattened buffer
// offsets produced each tick depend on that order staying fixed.
#[derive(Default)]
pub struct Scene {
    spheres: Vec<SphereObject>,
    meshes: Vec<MeshObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sphere(&mut self, sphere: SphereObject) {
        self.spheres.push(sphere);
    }

    pub fn add_mesh(&mut self, mesh: MeshObject) {
        self.meshes.push(mesh);
    }

    pub fn spheres(&self) -> &[SphereObject] {
        &self.spheres
    }

    pub fn meshes(&self) -> &[MeshObject] {
        &self.meshes
    }
}
