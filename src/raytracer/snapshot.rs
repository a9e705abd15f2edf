use crate::raytracer::material::Material;
use crate::raytracer::scene::Scene;
use glam::Vec3;

#[derive(Clone, Copy)]
#[repr(C)]
pub struct Sphere {
    pub position: Vec3,
    pub radius: f32,
    pub material: Material,
}

#[derive(Clone, Copy)]
#[repr(C)]
pub struct MeshInfo {
    pub triangle_start_index: u32,
    pub triangle_count: u32,
    pub material: Material,
    pub bounds_min: Vec3,
    pub bounds_max: Vec3,
}

// Flat, tracer-consumable view of the scene, rebuilt from scratch every
// tick and handed off by value. Triangle indices are rebased so the
// single triangle buffer can hold every mesh without collision.
pub struct SceneSnapshot {
    pub spheres: Vec<Sphere>,
    pub mesh_infos: Vec<MeshInfo>,
    pub triangles: Vec<u32>,
    pub vertices: Vec<Vec3>,
}

impl SceneSnapshot {
    pub fn build(scene: &Scene) -> Self {
        let spheres: Vec<Sphere> = scene
            .spheres()
            .iter()
            .map(|obj| Sphere {
                position: obj.position,
                radius: obj.uniform_scale * 0.5,
                material: obj.material,
            })
            .collect();

        let mut mesh_infos = Vec::with_capacity(scene.meshes().len());
        let mut triangles = Vec::new();
        let mut vertices = Vec::new();

        for mesh in scene.meshes() {
            mesh_infos.push(MeshInfo {
                triangle_start_index: triangles.len() as u32,
                triangle_count: mesh.triangles().len() as u32,
                material: mesh.material,
                bounds_min: mesh.bounds_min(),
                bounds_max: mesh.bounds_max(),
            });

            // Rebase by the vertex count *before* this mesh's vertices land.
            let vertex_offset = vertices.len() as u32;
            for &index in mesh.triangles() {
                triangles.push(index + vertex_offset);
            }
            vertices.extend_from_slice(mesh.vertices());
        }

        Self {
            spheres,
            mesh_infos,
            triangles,
            vertices,
        }
    }

    pub fn num_spheres(&self) -> usize {
        self.spheres.len()
    }

    pub fn num_mesh_infos(&self) -> usize {
        self.mesh_infos.len()
    }

    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }
}
