use super::{Integrator, RadianceResult};
use crate::{
    camera::ViewParameters,
    math::{Color, Ray},
    scene::Scene,
};

/// Maps the surface normal of the first hit into a color.
pub struct Normals {}

impl Integrator for Normals {
    fn li(&self, ray: &Ray<f64>, scene: &Scene, view: &ViewParameters) -> RadianceResult {
        let hit = scene.find_first_intersection(
            ray,
            view.front_plane_distance,
            view.back_plane_distance,
        );

        let color = if hit.is_hit() {
            let n = hit.normal;
            Color::new(n.x / 2.0 + 0.5, n.y / 2.0 + 0.5, n.z / 2.0 + 0.5, 1.0)
        } else {
            scene.background
        };

        RadianceResult {
            color,
            ray_scene_intersections: 1,
        }
    }
}
