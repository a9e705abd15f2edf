use super::{FrameParams, TracerProgram};
use crate::raytracer::material::Material;
use crate::raytracer::rng::Rng;
use crate::raytracer::snapshot::{MeshInfo, SceneSnapshot};
use glam::Vec3;
use rayon::prelude::*;

const T_MIN: f32 = 0.001;

// Reference tracer: brute force over the flat sphere and triangle
// buffers, no acceleration structure. Stands in for the GPU program the
// driver parameterizes.
pub struct BruteForceTracer;

struct Hit {
    t: f32,
    normal: Vec3,
    material: Material,
}

impl TracerProgram for BruteForceTracer {
    fn trace(
        &self,
        params: &FrameParams,
        scene: &SceneSnapshot,
        width: usize,
        height: usize,
    ) -> Vec<Vec3> {
        let origin = params.cam_local_to_world.transform_point3(Vec3::ZERO);
        let vp = params.view_params;
        let rays = params.num_rays_per_pixel.max(1);

        (0..width * height)
            .into_par_iter()
            .map(|idx| {
                let x = idx % width;
                let y = idx / width;
                let mut rng = Rng::new(
                    (params.frame as u64) << 32 | idx as u64,
                );

                let mut colour = Vec3::ZERO;
                for _ in 0..rays {
                    let u = (x as f32 + rng.next_f32()) / width as f32;
                    let v = (y as f32 + rng.next_f32()) / height as f32;
                    let local = Vec3::new(
                        (u - 0.5) * vp.plane_width,
                        (0.5 - v) * vp.plane_height,
                        -vp.near_clip,
                    );
                    let target = params.cam_local_to_world.transform_point3(local);
                    let direction = (target - origin).normalize();
                    colour += shade(scene, origin, direction);
                }
                colour / rays as f32
            })
            .collect()
    }
}

fn shade(scene: &SceneSnapshot, origin: Vec3, direction: Vec3) -> Vec3 {
    match closest_hit(scene, origin, direction) {
        Some(hit) => {
            let material = hit.material;
            let emitted = material.emission_colour.truncate() * material.emission_strength;
            let n_dot_l = hit.normal.dot(-direction).max(0.0);
            emitted + material.base_colour.truncate() * (0.2 + 0.8 * n_dot_l)
        }
        None => sky(direction),
    }
}

fn sky(direction: Vec3) -> Vec3 {
    let t = 0.5 * (direction.y + 1.0);
    Vec3::ONE.lerp(Vec3::new(0.5, 0.7, 1.0), t)
}

fn closest_hit(scene: &SceneSnapshot, origin: Vec3, direction: Vec3) -> Option<Hit> {
    let mut closest: Option<Hit> = None;

    for sphere in &scene.spheres {
        if let Some(t) = hit_sphere(origin, direction, sphere.position, sphere.radius) {
            if closest.as_ref().map_or(true, |h| t < h.t) {
                let normal = ((origin + direction * t) - sphere.position).normalize();
                closest = Some(Hit {
                    t,
                    normal,
                    material: sphere.material,
                });
            }
        }
    }

    for info in &scene.mesh_infos {
        if !hit_bounds(origin, direction, info) {
            continue;
        }
        let start = info.triangle_start_index as usize;
        let end = start + info.triangle_count as usize;
        for tri in scene.triangles[start..end].chunks_exact(3) {
            let v0 = scene.vertices[tri[0] as usize];
            let v1 = scene.vertices[tri[1] as usize];
            let v2 = scene.vertices[tri[2] as usize];
            if let Some((t, normal)) = hit_triangle(origin, direction, v0, v1, v2) {
                if closest.as_ref().map_or(true, |h| t < h.t) {
                    closest = Some(Hit {
                        t,
                        normal,
                        material: info.material,
                    });
                }
            }
        }
    }

    closest
}

fn hit_sphere(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let half_b = oc.dot(direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = half_b * half_b - c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let t = -half_b - sqrt_d;
    if t > T_MIN {
        return Some(t);
    }
    let t = -half_b + sqrt_d;
    (t > T_MIN).then_some(t)
}

// Moller-Trumbore, double sided.
fn hit_triangle(origin: Vec3, direction: Vec3, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<(f32, Vec3)> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let p = direction.cross(edge2);
    let det = edge1.dot(p);
    if det.abs() < 1e-8 {
        return None;
    }
    let inv_det = 1.0 / det;
    let s = origin - v0;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(edge1);
    let v = direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = edge2.dot(q) * inv_det;
    if t <= T_MIN {
        return None;
    }
    let mut normal = edge1.cross(edge2).normalize();
    if normal.dot(direction) > 0.0 {
        normal = -normal;
    }
    Some((t, normal))
}

fn hit_bounds(origin: Vec3, direction: Vec3, info: &MeshInfo) -> bool {
    let inv = direction.recip();
    let t0 = (info.bounds_min - origin) * inv;
    let t1 = (info.bounds_max - origin) * inv;
    let t_min = t0.min(t1);
    let t_max = t0.max(t1);
    let enter = t_min.x.max(t_min.y).max(t_min.z);
    let exit = t_max.x.min(t_max.y).min(t_max.z);
    exit >= enter.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raytracer::camera::Camera;
    use crate::raytracer::mesh::MeshObject;
    use crate::raytracer::scene::{Scene, SphereObject};

    #[test]
    fn sphere_intersection_from_outside() {
        let t = hit_sphere(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, -5.0), 1.0);
        assert!((t.unwrap() - 4.0).abs() < 1e-5);
    }

    #[test]
    fn sphere_behind_ray_is_missed() {
        let t = hit_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 1.0);
        assert!(t.is_none());
    }

    #[test]
    fn triangle_intersection_hits_interior() {
        let hit = hit_triangle(
            Vec3::new(0.2, 0.2, 1.0),
            Vec3::NEG_Z,
            Vec3::ZERO,
            Vec3::X,
            Vec3::Y,
        );
        let (t, normal) = hit.unwrap();
        assert!((t - 1.0).abs() < 1e-5);
        assert!(normal.dot(Vec3::NEG_Z) < 0.0);
    }

    #[test]
    fn bounds_test_never_culls_a_real_hit() {
        let mut scene = Scene::new();
        let mut cube = MeshObject::cube(Material::diffuse(Vec3::ONE));
        cube.set_transform(glam::Quat::IDENTITY, Vec3::ONE, Vec3::new(0.0, 0.0, -3.0));
        scene.add_mesh(cube);
        let snapshot = SceneSnapshot::build(&scene);

        assert!(hit_bounds(Vec3::ZERO, Vec3::NEG_Z, &snapshot.mesh_infos[0]));
        assert!(closest_hit(&snapshot, Vec3::ZERO, Vec3::NEG_Z).is_some());
        assert!(closest_hit(&snapshot, Vec3::ZERO, Vec3::Z).is_none());
    }

    #[test]
    fn center_pixel_sees_the_sphere() {
        let mut scene = Scene::new();
        scene.add_sphere(SphereObject::new(
            Vec3::new(0.0, 0.0, -5.0),
            2.0,
            Material::emissive(Vec3::new(1.0, 0.0, 0.0), 2.0),
        ));
        let snapshot = SceneSnapshot::build(&scene);
        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0), 60.0, 1.0);
        let params = FrameParams::new(&camera, 0, 4);

        let frame = BruteForceTracer.trace(&params, &snapshot, 9, 9);
        let center = frame[4 * 9 + 4];
        // Emission dominates at the sphere's center.
        assert!(center.x > 1.0);
        let corner = frame[0];
        assert!(corner != center);
    }
}
