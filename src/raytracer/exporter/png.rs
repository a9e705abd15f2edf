use super::{linear_to_srgb_u8, Exporter, ToneMap};
use crate::raytracer::framebuffer::FramebufferView;
use glam::Vec3;
use image::{ImageBuffer, Rgb};

pub struct PngExporter {
    tonemap: ToneMap,
    exposure: f32,
}

impl PngExporter {
    pub fn with_tonemap(tonemap: ToneMap) -> Self {
        Self {
            tonemap,
            exposure: 1.0,
        }
    }

    pub fn with_exposure(mut self, exposure: f32) -> Self {
        self.exposure = exposure;
        self
    }

    fn vec3_to_rgb(&self, color: Vec3) -> Rgb<u8> {
        let mapped = self.tonemap.apply_with_exposure(color, self.exposure);
        Rgb(linear_to_srgb_u8(mapped))
    }
}

impl Exporter for PngExporter {
    fn export<F: FramebufferView>(&self, framebuffer: &F, path: &str) {
        let width = framebuffer.width();
        let height = framebuffer.height();
        let img = ImageBuffer::from_fn(width as u32, height as u32, |x, y| {
            self.vec3_to_rgb(framebuffer.get_pixel(x as usize, y as usize))
        });
        img.save(path).expect("Failed to write PNG file");
    }
}
