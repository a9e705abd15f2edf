mod brute_force;

use crate::raytracer::camera::{Camera, ViewParams};
use crate::raytracer::snapshot::SceneSnapshot;
use glam::{Mat4, Vec3};

pub use brute_force::BruteForceTracer;

// Everything the tracer consumes for one frame, assembled fresh per tick.
pub struct FrameParams {
    pub view_params: ViewParams,
    pub cam_local_to_world: Mat4,
    pub frame: u32,
    pub num_rays_per_pixel: u32,
}

impl FrameParams {
    pub fn new(camera: &Camera, frame: u32, num_rays_per_pixel: u32) -> Self {
        Self {
            view_params: camera.view_params(),
            cam_local_to_world: camera.local_to_world(),
            frame,
            num_rays_per_pixel,
        }
    }
}

// Opaque per-tick routine: scene buffers and camera parameters in, one
// noisy frame out. The driver never looks inside.
pub trait TracerProgram {
    fn trace(
        &self,
        params: &FrameParams,
        scene: &SceneSnapshot,
        width: usize,
        height: usize,
    ) -> Vec<Vec3>;
}
