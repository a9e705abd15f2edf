pub mod app;
pub mod camera;
pub mod exporter;
pub mod framebuffer;
pub mod material;
pub mod mesh;
pub mod mode;
mod rng;
pub mod scene;
pub mod snapshot;
pub mod tracer;

pub use app::{App, RenderConfig, TickAction, ViewInfo};
pub use camera::Camera;
pub use exporter::{Exporter, PngExporter, ToneMap, WindowExporter};
pub use material::Material;
pub use mesh::MeshObject;
pub use scene::{Scene, SphereObject};
pub use tracer::BruteForceTracer;
