use glam::Vec3;
use rayon::prelude::*;

pub trait FramebufferView {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn get_pixel(&self, x: usize, y: usize) -> Vec3;
}

// Running average of every noisy frame rendered so far. Owned by the
// driver; reallocated only when the destination surface changes size.
pub struct AccumulationBuffer {
    pixels: Vec<Vec3>,
    width: usize,
    height: usize,
}

impl AccumulationBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![Vec3::ZERO; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Vec3] {
        &self.pixels
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        if self.width == width && self.height == height {
            return;
        }
        self.pixels = vec![Vec3::ZERO; width * height];
        self.width = width;
        self.height = height;
    }

    // Newest sample weighs 1/(frame+1), so after N frames the buffer
    // holds the unweighted mean of all N samples.
    pub fn blend(&mut self, noisy: &[Vec3], frame: u32) {
        debug_assert_eq!(noisy.len(), self.pixels.len());
        let weight = 1.0 / (frame + 1) as f32;
        self.pixels
            .par_iter_mut()
            .zip(noisy.par_iter())
            .for_each(|(prev, &new)| {
                *prev = *prev * (1.0 - weight) + new * weight;
            });
    }
}

impl FramebufferView for AccumulationBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get_pixel(&self, x: usize, y: usize) -> Vec3 {
        self.pixels[y * self.width + x]
    }
}
