use super::{Integrator, RadianceResult};
use crate::{camera::ViewParameters, math::Ray, scene::Scene};

/// Base color of the first hit without any lighting.
pub struct Flat {}

impl Integrator for Flat {
    fn li(&self, ray: &Ray<f64>, scene: &Scene, view: &ViewParameters) -> RadianceResult {
        let hit = scene.find_first_intersection(
            ray,
            view.front_plane_distance,
            view.back_plane_distance,
        );

        RadianceResult {
            color: if hit.is_hit() {
                hit.color
            } else {
                scene.background
            },
            ray_scene_intersections: 1,
        }
    }
}
