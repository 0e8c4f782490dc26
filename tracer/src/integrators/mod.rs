mod flat;
mod normals;
mod phong;

pub use flat::Flat;
pub use normals::Normals;
pub use phong::{shade, Phong};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, EnumVariantNames};

use crate::{
    camera::{Camera, ViewParameters},
    film::Film,
    math::{Color, Ray},
    scene::Scene,
};

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Deserialize,
    Serialize,
    Display,
    EnumVariantNames,
    EnumString,
)]
pub enum IntegratorType {
    #[default]
    Phong,
    Normals,
    Flat,
}

impl IntegratorType {
    pub fn instantiate(self) -> Box<dyn Integrator> {
        match self {
            IntegratorType::Phong => Box::new(Phong {}),
            IntegratorType::Normals => Box::new(Normals {}),
            IntegratorType::Flat => Box::new(Flat {}),
        }
    }
}

pub struct RadianceResult {
    pub color: Color<f64>,
    pub ray_scene_intersections: usize,
}

impl RadianceResult {
    pub fn background(scene: &Scene) -> Self {
        Self {
            color: scene.background,
            ray_scene_intersections: 0,
        }
    }
}

// Public interface for scene integrators.
pub trait Integrator: Send + Sync {
    /// Evaluates the color seen along `ray`, only considering hits between the clip planes
    /// in `view`. Also returns the number of rays intersected with `scene`.
    fn li(&self, ray: &Ray<f64>, scene: &Scene, view: &ViewParameters) -> RadianceResult;

    /// Renders every pixel of `film` as seen from `camera`. Returns the number of rays
    /// intersected with `scene`.
    fn render(&self, scene: &Scene, camera: &Camera, film: &mut Film) -> usize {
        let (width, height) = (film.width(), film.height());

        let mut ray_count = 0;
        for j in 0..height {
            for i in 0..width {
                let result = match camera.ray(i, j, width, height) {
                    Some(ray) => self.li(&ray, scene, &camera.view),
                    None => RadianceResult::background(scene),
                };
                film.set_pixel(i, j, result.color);
                ray_count += result.ray_scene_intersections;
            }
        }
        ray_count
    }
}
