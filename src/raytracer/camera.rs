use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug)]
pub struct ViewParams {
    pub plane_width: f32,
    pub plane_height: f32,
    pub near_clip: f32,
}

#[derive(Clone)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near_clip: f32,
}

impl Camera {
    pub fn new(position: Vec3, look_at: Vec3, fov: f32, aspect_ratio: f32) -> Self {
        let dir = (look_at - position).normalize();
        let yaw = dir.x.atan2(-dir.z);
        let pitch = dir.y.asin();

        Camera {
            position,
            yaw,
            pitch,
            fov,
            aspect_ratio,
            near_clip: 0.1,
        }
    }

    pub fn with_near_clip(mut self, near_clip: f32) -> Self {
        self.near_clip = near_clip;
        self
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
    }

    pub fn view_params(&self) -> ViewParams {
        let plane_height = 2.0 * self.near_clip * (self.fov.to_radians() * 0.5).tan();
        ViewParams {
            plane_width: plane_height * self.aspect_ratio,
            plane_height,
            near_clip: self.near_clip,
        }
    }

    pub fn local_to_world(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), Vec3::Y).inverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_plane_matches_fov() {
        let camera = Camera::new(Vec3::ZERO, Vec3::NEG_Z, 90.0, 2.0).with_near_clip(1.0);
        let params = camera.view_params();
        assert!((params.plane_height - 2.0).abs() < 1e-5);
        assert!((params.plane_width - 4.0).abs() < 1e-5);
        assert_eq!(params.near_clip, 1.0);
    }

    #[test]
    fn local_to_world_maps_origin_to_position() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, 60.0, 1.0);
        let origin = camera.local_to_world().transform_point3(Vec3::ZERO);
        assert!((origin - camera.position).length() < 1e-5);
    }

    #[test]
    fn local_forward_is_negative_z() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 60.0, 1.0);
        let forward = camera.local_to_world().transform_vector3(Vec3::NEG_Z);
        assert!((forward - camera.forward()).length() < 1e-5);
    }
}
