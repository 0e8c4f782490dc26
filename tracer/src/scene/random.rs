use super::Scene;
use crate::{
    lights::Light,
    materials::Material,
    math::{Color, Vec3},
    shapes::{Geometry, Sphere},
    tracer_debug,
};

use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

const MIN_POS: f64 = -100.0;
const MAX_POS: f64 = 100.0;
const MIN_RADIUS: f64 = 5.0;
const MAX_RADIUS: f64 = 50.0;
const MIN_SHININESS: f64 = 1.0;
const MAX_SHININESS: f64 = 128.0;

#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RandomSceneParams {
    pub spheres: usize,
    pub lights: usize,
    /// The same seed always generates the same scene
    pub seed: u64,
}

impl Default for RandomSceneParams {
    fn default() -> Self {
        Self {
            spheres: 20,
            lights: 4,
            seed: 0x73B9642E74AC471C,
        }
    }
}

impl Scene {
    /// Generates a scene of random spheres and lights.
    pub fn random(params: &RandomSceneParams, background: Color<f64>) -> Self {
        let mut rng = Pcg32::new(params.seed, 0);
        let position = Uniform::new(MIN_POS, MAX_POS);

        let random_position = |rng: &mut Pcg32| {
            Vec3::new(
                position.sample(rng),
                position.sample(rng),
                position.sample(rng),
            )
        };

        let geometries: Vec<Geometry> = (0..params.spheres)
            .map(|_| {
                let center = random_position(&mut rng);
                let radius = rng.gen_range(MIN_RADIUS..=MAX_RADIUS);
                let ambient = Color::new(
                    rng.gen::<f64>() / 5.0,
                    rng.gen::<f64>() / 5.0,
                    rng.gen::<f64>() / 5.0,
                    1.0,
                );
                let shininess = rng.gen_range(MIN_SHININESS..MAX_SHININESS).floor();
                let material = Material::new(ambient, ambient * 2.0, ambient * 5.0, shininess);
                let color = Color::new(1.0 - ambient.r, 1.0 - ambient.g, 1.0 - ambient.b, 1.0);

                Sphere::new(center, radius, material, color).into()
            })
            .collect();

        let lights: Vec<Light> = (0..params.lights)
            .map(|_| {
                let position = random_position(&mut rng);
                let color = Color::new(rng.gen(), rng.gen(), rng.gen(), 1.0);
                let intensity = rng.gen();

                Light::uniform(position, color, intensity)
            })
            .collect();

        tracer_debug!(
            "Generated {} spheres and {} lights with seed {:#X}",
            geometries.len(),
            lights.len(),
            params.seed
        );

        Scene::new(
            &format!("random-{:x}", params.seed),
            geometries,
            lights,
            background,
        )
    }
}
