// Copyright @yucwang 2026

use genoise::core::scene_loader::load_scene;

use std::env;
use std::process;

// Loads a scene description and prints what the loader resolved. Handy
// for checking a document before handing it to a renderer.
fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <scene.xml>", args[0]);
        process::exit(1);
    }

    let scene = match load_scene(&args[1]) {
        Ok(scene) => scene,
        Err(err) => {
            eprintln!("Failed to load scene {}: {}", args[1], err);
            process::exit(1);
        }
    };

    let camera = scene.camera();
    println!("camera: eye ({:.2}, {:.2}, {:.2}) target ({:.2}, {:.2}, {:.2}) fov {:.1} at {}x{}",
             camera.eye[0], camera.eye[1], camera.eye[2],
             camera.target[0], camera.target[1], camera.target[2],
             camera.fov, camera.width as u32, camera.height as u32);

    match scene.integrator() {
        Some(integrator) => {
            println!("integrator: {} (max depth {}, {} light samples, {} brdf samples)",
                     integrator.type_name(), integrator.max_depth(),
                     integrator.light_sample_number(), integrator.brdf_sample_number());
        }
        None => println!("integrator: none"),
    }
    println!("pixel sample length: {}", scene.pixel_sample_length());

    println!("{} geometries:", scene.len());
    for geometry in scene.geometries() {
        let material_name = geometry.material()
            .map(|material_index| scene.materials()[material_index].name())
            .unwrap_or("<unbound>");
        println!("  {} \"{}\": material {}, area {:.4}",
                 geometry.type_name(), geometry.name(), material_name, geometry.area());
    }

    println!("{} materials:", scene.materials().len());
    for material in scene.materials() {
        println!("  {} \"{}\": {} bxdfs, {} weights",
                 material.type_name(), material.name(),
                 material.bxdfs().len(), material.bxdf_weights().len());
    }

    println!("{} bxdfs:", scene.bxdfs().len());
    for bxdf in scene.bxdfs() {
        println!("  {} \"{}\"", bxdf.type_name(), bxdf.name());
    }

    println!("{} lights: {:?}", scene.lights().len(), scene.lights());

    let bounds = scene.bounds();
    if bounds.is_valid() {
        println!("world bounds: ({:.2}, {:.2}, {:.2}) to ({:.2}, {:.2}, {:.2})",
                 bounds.p_min[0], bounds.p_min[1], bounds.p_min[2],
                 bounds.p_max[0], bounds.p_max[1], bounds.p_max[2]);
    }
}
