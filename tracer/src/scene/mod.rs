mod builtin;
mod random;

pub use random::RandomSceneParams;

use crate::{
    color_map::TransferFunction,
    interaction::Intersection,
    lights::Light,
    math::{Color, Ray, Vec3},
    shapes::{CtMask, Geometry, VoxelGrid},
    tracer_info,
};
use serde::{Deserialize, Serialize};

use std::{path::PathBuf, sync::Arc, time::Instant};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Where the bulk of the scene comes from
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum SceneSource {
    Builtin,
    Random(RandomSceneParams),
}

impl Default for SceneSource {
    fn default() -> Self {
        SceneSource::Builtin
    }
}

/// A CT scan added on top of the scene source
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CtMaskSettings {
    pub dat: PathBuf,
    pub raw: PathBuf,
    /// Minimum corner of the volume
    #[serde(default)]
    pub position: [f64; 3],
    #[serde(default = "default_ct_scale")]
    pub scale: f64,
    #[serde(default)]
    pub transfer_function: TransferFunction,
}

fn default_ct_scale() -> f64 {
    1.0
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SceneSettings {
    pub source: SceneSource,
    pub ct_mask: Option<CtMaskSettings>,
}

/// Geometry and lights for rendering. Immutable once built.
pub struct Scene {
    pub name: String,
    pub geometries: Vec<Geometry>,
    pub lights: Vec<Light>,
    /// Color of pixels that don't hit anything
    pub background: Color<f64>,
}

impl Scene {
    pub fn new(
        name: &str,
        geometries: Vec<Geometry>,
        lights: Vec<Light>,
        background: Color<f64>,
    ) -> Self {
        Self {
            name: name.to_string(),
            geometries,
            lights,
            background,
        }
    }

    /// Builds the scene described by `settings`.
    ///
    /// Also returns the time it took to build in seconds.
    pub fn from_settings(settings: &SceneSettings, background: Color<f64>) -> Result<(Self, f32)> {
        let load_start = Instant::now();

        let mut scene = match &settings.source {
            SceneSource::Builtin => Scene::builtin(background),
            SceneSource::Random(params) => Scene::random(params, background),
        };

        if let Some(ct) = &settings.ct_mask {
            let grid = VoxelGrid::load(&ct.dat, &ct.raw)?;
            let mask = CtMask::new(
                grid,
                Vec3::from(ct.position),
                ct.scale,
                Arc::new(ct.transfer_function.clone()),
            )?;
            scene.geometries.push(mask.into());
            scene.name = format!("{} + ct", scene.name);
        }

        let total_secs = load_start.elapsed().as_secs_f32();

        tracer_info!(
            "Scene '{}': {} geometries, {} lights, built in {:.2}s",
            scene.name,
            scene.geometries.len(),
            scene.lights.len(),
            total_secs
        );

        Ok((scene, total_secs))
    }

    /// Finds the nearest geometry hit by `ray` within `[min_dist, max_dist]`.
    ///
    /// Returns [`Intersection::none`] if nothing is hit.
    pub fn find_first_intersection(
        &self,
        ray: &Ray<f64>,
        min_dist: f64,
        max_dist: f64,
    ) -> Intersection {
        let mut nearest = Intersection::none();

        for (i, geometry) in self.geometries.iter().enumerate() {
            let hit = geometry.intersect(ray, min_dist, max_dist);
            if !hit.is_hit() {
                continue;
            }

            if !nearest.is_hit() || hit.t < nearest.t {
                nearest = Intersection {
                    geometry: Some(i),
                    ..hit
                };
            }
        }

        nearest
    }
}
