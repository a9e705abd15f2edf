use std::time::Instant;

mod raytracer;

use glam::{Quat, Vec3};
use raytracer::{
    App, BruteForceTracer, Camera, Exporter, Material, MeshObject, PngExporter, RenderConfig,
    Scene, SphereObject, TickAction, ToneMap, ViewInfo, WindowExporter,
};

const WIDTH: usize = 640;
const HEIGHT: usize = 360;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let editor_preview = args.iter().any(|a| a == "--preview" || a == "-p");

    let config = RenderConfig {
        trace_in_editor: editor_preview,
        ..Default::default()
    };

    let scene = build_demo_scene();
    let camera = Camera::new(
        Vec3::new(0.0, 1.2, 4.0),
        Vec3::new(0.0, 0.5, 0.0),
        60.0,
        WIDTH as f32 / HEIGHT as f32,
    );

    let mut app = App::new(config);
    let tracer = BruteForceTracer;
    let mut window = WindowExporter::new(WIDTH, HEIGHT);

    let view = ViewInfo {
        is_interactive: !editor_preview,
        is_editor_view: editor_preview,
    };

    let render_start = Instant::now();
    while window.is_open() {
        let out = app.tick(&tracer, &scene, &camera, view, &[], WIDTH, HEIGHT);
        window.update(&out);

        let elapsed = render_start.elapsed().as_secs_f32();
        let title = if editor_preview {
            format!("Progressive Raytracer - {:.1}s - PREVIEW", elapsed)
        } else {
            format!(
                "Progressive Raytracer - {:.1}s - frame {}",
                elapsed,
                app.frame()
            )
        };
        window.set_title(&title);

        if out.action == TickAction::CaptureAndStop {
            println!("Frame budget reached, capturing screenshot.png");
            PngExporter::with_tonemap(ToneMap::Aces)
                .with_exposure(window.exposure())
                .export(app.result(), "screenshot.png");
            return;
        }
    }
}

fn build_demo_scene() -> Scene {
    let mut scene = Scene::new();

    // Ground.
    scene.add_sphere(SphereObject::new(
        Vec3::new(0.0, -100.0, 0.0),
        200.0,
        Material::diffuse(Vec3::new(0.5, 0.5, 0.5)),
    ));
    scene.add_sphere(SphereObject::new(
        Vec3::new(-1.2, 0.5, 0.0),
        1.0,
        Material::diffuse(Vec3::new(0.8, 0.3, 0.3)),
    ));
    scene.add_sphere(SphereObject::new(
        Vec3::new(2.0, 3.0, -2.0),
        1.5,
        Material::emissive(Vec3::new(1.0, 0.9, 0.7), 8.0),
    ));

    let mut cube = MeshObject::cube(Material::specular(Vec3::new(0.3, 0.5, 0.9), 0.8, 0.4));
    cube.set_transform(
        Quat::from_rotation_y(0.6),
        Vec3::ONE,
        Vec3::new(1.0, 0.5, 0.0),
    );
    scene.add_mesh(cube);

    scene
}
