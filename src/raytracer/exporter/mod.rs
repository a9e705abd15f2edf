mod png;
mod tonemapping;
mod window;

pub use png::PngExporter;
pub use tonemapping::{linear_to_srgb_u8, ToneMap};
pub use window::WindowExporter;

use super::framebuffer::FramebufferView;

pub trait Exporter {
    fn export<F: FramebufferView>(&self, framebuffer: &F, path: &str);
}
