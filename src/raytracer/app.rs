use crate::raytracer::camera::Camera;
use crate::raytracer::framebuffer::{AccumulationBuffer, FramebufferView};
use crate::raytracer::mode::RenderMode;
use crate::raytracer::rng::Rng;
use crate::raytracer::scene::Scene;
use crate::raytracer::snapshot::SceneSnapshot;
use crate::raytracer::tracer::{FrameParams, TracerProgram};
use glam::Vec3;

pub struct RenderConfig {
    pub num_rays_per_pixel: u32,
    pub frame_budget: u32,
    pub trace_in_editor: bool,
    pub preview_seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            num_rays_per_pixel: 10,
            frame_budget: 100,
            trace_in_editor: false,
            preview_seed: 0x5EED_CAFE,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ViewInfo {
    pub is_interactive: bool,
    pub is_editor_view: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickAction {
    Continue,
    // Host should capture the presented image, then terminate.
    CaptureAndStop,
}

pub struct TickOutput {
    pub image: Vec<Vec3>,
    pub width: usize,
    pub height: usize,
    pub action: TickAction,
}

impl FramebufferView for TickOutput {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get_pixel(&self, x: usize, y: usize) -> Vec3 {
        self.image[y * self.width + x]
    }
}

pub struct App {
    pub config: RenderConfig,
    accumulation: AccumulationBuffer,
    frame: u32,
    preview_rng: Rng,
    capture_requested: bool,
}

impl App {
    pub fn new(config: RenderConfig) -> Self {
        let preview_rng = Rng::new(config.preview_seed);
        Self {
            config,
            accumulation: AccumulationBuffer::new(0, 0),
            frame: 0,
            preview_rng,
            capture_requested: false,
        }
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn result(&self) -> &AccumulationBuffer {
        &self.accumulation
    }

    // One render tick, run to completion: classify the view, rebuild the
    // scene buffers, parameterize the tracer, blend the noisy frame into
    // the running average and hand back the presentable result.
    //
    // The accumulation buffer and frame counter deliberately survive
    // mode changes; only a resize clears them.
    pub fn tick<T: TracerProgram>(
        &mut self,
        tracer: &T,
        scene: &Scene,
        camera: &Camera,
        view: ViewInfo,
        src: &[Vec3],
        width: usize,
        height: usize,
    ) -> TickOutput {
        let mode = RenderMode::classify(
            view.is_interactive,
            view.is_editor_view,
            self.config.trace_in_editor,
        );

        if mode == RenderMode::Passthrough {
            return TickOutput {
                image: src.to_vec(),
                width,
                height,
                action: TickAction::Continue,
            };
        }

        self.accumulation.resize(width, height);

        let snapshot = SceneSnapshot::build(scene);
        let tracer_frame = match mode {
            // A fresh seed every tick keeps preview frames decorrelated
            // instead of converging.
            RenderMode::Preview => self.preview_rng.next_u32(),
            _ => self.frame,
        };
        let params = FrameParams::new(camera, tracer_frame, self.config.num_rays_per_pixel);
        let noisy = tracer.trace(&params, &snapshot, width, height);
        self.accumulation.blend(&noisy, self.frame);

        let mut action = TickAction::Continue;
        if mode == RenderMode::Live {
            if self.frame > self.config.frame_budget && !self.capture_requested {
                self.capture_requested = true;
                action = TickAction::CaptureAndStop;
            }
            self.frame += 1;
        }

        TickOutput {
            image: self.accumulation.pixels().to_vec(),
            width,
            height,
            action,
        }
    }
}
