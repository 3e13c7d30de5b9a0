//! Photon-mapped room example.
//!
//! Renders two spheres in a closed coloured room and saves to PNG.
//!
//! Usage: `cargo run --release --example photon_room [settings.json] [output.png]`

use std::sync::Arc;

use anyhow::{Context, Result};
use lumen_renderer::{
    build_photon_map, render, Color, Light, Material, Object, Plane, ProjectionCamera,
    RenderSettings, Scene, Sphere, Vec3,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path))?;
            RenderSettings::from_json(&json)?
        }
        None => RenderSettings::default(),
    };
    let output = args.next().unwrap_or_else(|| "output.png".to_string());

    let mut scene = build_scene();

    if settings.photon_mapping {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let photons = build_photon_map(&scene, &settings, &mut rng);
        scene = scene.with_photon_map(photons);
    }

    let camera = ProjectionCamera::from_settings(Vec3::new(0.0, -1.0, 0.0), &settings);
    let image = render(&camera, &scene, &settings);

    image
        .to_image()
        .save(&output)
        .with_context(|| format!("Failed to save image to {}", output))?;
    log::info!("Saved to {}", output);

    Ok(())
}

fn build_scene() -> Scene {
    let red = Color::new(1.0, 0.0, 0.0);
    let green = Color::new(0.0, 1.0, 0.0);
    let blue = Color::new(0.0, 0.0, 1.0);

    // Glassy red and mirrored green spheres
    let glass = Arc::new(Material::glass(red, 0.6, 1.0, 0.3, 1.3));
    let mirror = Arc::new(Material::mirror(green, 0.8, 2.0));

    let wall = |color: Color| Arc::new(Material::diffuse(color, 0.8));

    let objects: Vec<Object> = vec![
        Sphere::new(Vec3::new(0.0, 1.0, 10.0), 2.0, glass).into(),
        Sphere::new(Vec3::new(-8.0, 1.0, 12.0), 2.0, mirror).into(),
        // Floor
        Plane::new(Vec3::new(0.0, -2.0, 0.0), Vec3::Y, wall(blue)).into(),
        // Side walls
        Plane::new(Vec3::new(20.0, 0.0, 0.0), -Vec3::X, wall(green)).into(),
        Plane::new(Vec3::new(-20.0, 0.0, 0.0), Vec3::X, wall(red)).into(),
        // Back and front walls
        Plane::new(Vec3::new(0.0, 0.0, 30.0), -Vec3::Z, wall(Color::ONE)).into(),
        Plane::new(Vec3::new(0.0, 0.0, -10.0), Vec3::Z, wall(Color::ONE)).into(),
    ];

    let lights = vec![
        Light::new(Vec3::new(0.0, 5.0, -5.0)),
        Light::new(Vec3::new(0.0, 5.0, 12.0)),
    ];

    Scene::new(objects, lights)
}
