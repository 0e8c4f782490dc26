use std::io::prelude::*;
use std::sync::Arc;
use std::time::Instant;

use tracer::{
    camera::{Orbit, OrbitParameters, ViewParameters},
    color_map::TransferFunction,
    integrators::IntegratorType,
    materials::Material,
    math::{vec3, Color, Ray, Vec3},
    renderer::render_frame,
    scene::{RandomSceneParams, Scene},
    shapes::{CtMask, Ellipsoid, Geometry, Sphere, VoxelGrid},
};

const ITERATIONS: usize = 2000000;

fn bench_intersect(name: &str, geometry: &Geometry) {
    let start = Instant::now();
    let mut hits = 0;
    for i in 0..ITERATIONS {
        // Sweep the rays across the shape so both hits and misses get timed
        let x = ((i % 200) as f64) * 0.5 - 50.0;
        let ray = Ray::new(vec3(x, 0.0, 0.0), vec3(0.0, 0.0, 1.0)).unwrap();
        if geometry.intersect(&ray, 0.0, 1000.0).is_hit() {
            hits += 1;
        }
    }
    if hits == 0 {
        panic!("We only wanted to force the loop to be executed!")
    }
    let elapsed_ns = start.elapsed().as_nanos();
    let elapsed_ms = (elapsed_ns as f64) * 1e-6;
    let ns_per_ray = (elapsed_ns as f64) / (ITERATIONS as f64);
    println!(
        "{:<9} took {:6.1} ms total, {:0.2} ns per ray, {} hits",
        name, elapsed_ms, ns_per_ray, hits
    );
}

fn bench_frame(name: &str, scene: &Scene, integrator: IntegratorType) {
    let camera = Orbit::new(&OrbitParameters::default())
        .and_then(|orbit| orbit.camera(0, 1, ViewParameters::default()))
        .unwrap();
    let integrator = integrator.instantiate();

    let start = Instant::now();
    let (_, ray_count) = render_frame(scene, &camera, integrator.as_ref(), 640, 480);
    let secs = start.elapsed().as_secs_f64();
    println!(
        "{:<9} took {:6.1} ms total, {:0.2} Mrays/s",
        name,
        secs * 1e3,
        (ray_count as f64) / secs / 1e6
    );
}

fn main() {
    let material = Material::from_color(Color::white());

    let sphere: Geometry =
        Sphere::new(vec3(0.0, 0.0, 100.0), 40.0, material, Color::white()).into();
    let ellipsoid: Geometry = Ellipsoid::new(
        vec3(0.0, 0.0, 100.0),
        vec3(1.0, 0.5, 2.0),
        40.0,
        material,
        Color::white(),
    )
    .unwrap()
    .into();

    // Dense ball in a 64^3 volume
    let n = 64usize;
    let data = (0..n * n * n)
        .map(|i| {
            let (x, y, z) = (i % n, (i / n) % n, i / (n * n));
            let p = vec3(x as f64, y as f64, z as f64) - Vec3::ones() * (n as f64 / 2.0);
            if p.len() < 24.0 {
                200u8
            } else {
                0
            }
        })
        .collect();
    let grid = VoxelGrid::from_parts([n, n, n], Vec3::ones(), data).unwrap();
    let ct: Geometry = CtMask::new(
        grid,
        vec3(-32.0, -32.0, 68.0),
        1.0,
        Arc::new(TransferFunction::default()),
    )
    .unwrap()
    .into();

    println!("Intersections");
    bench_intersect("Sphere", &sphere);
    bench_intersect("Ellipsoid", &ellipsoid);
    bench_intersect("CT", &ct);

    println!("Frames");
    let builtin = Scene::builtin(Color::none());
    bench_frame("Builtin", &builtin, IntegratorType::Phong);
    let random = Scene::random(&RandomSceneParams::default(), Color::none());
    bench_frame("Random", &random, IntegratorType::Phong);
    bench_frame("Normals", &random, IntegratorType::Normals);

    println!("Press enter to quit...");
    // Read a single byte and discard
    let _ = std::io::stdin().read(&mut [0u8]).unwrap();
}
