use super::{Integrator, RadianceResult};
use crate::{
    camera::ViewParameters,
    interaction::Intersection,
    math::{Color, Ray, Vec3},
    scene::Scene,
    visibility::VisibilityTester,
};

/// Local Phong illumination with hard shadows from every light
pub struct Phong {}

impl Integrator for Phong {
    fn li(&self, ray: &Ray<f64>, scene: &Scene, view: &ViewParameters) -> RadianceResult {
        let hit = scene.find_first_intersection(
            ray,
            view.front_plane_distance,
            view.back_plane_distance,
        );
        if !hit.is_hit() {
            return RadianceResult {
                color: scene.background,
                ray_scene_intersections: 1,
            };
        }

        let (color, shadow_rays) = shade(&hit, scene, ray.o);

        RadianceResult {
            color,
            ray_scene_intersections: 1 + shadow_rays,
        }
    }
}

/// Shades `hit` as seen from `viewer` with every light in `scene`.
///
/// Lights that are blocked only contribute their ambient term. Also returns the number of
/// shadow rays cast. The result isn't clamped.
pub fn shade(hit: &Intersection, scene: &Scene, viewer: Vec3<f64>) -> (Color<f64>, usize) {
    let n = hit.normal;
    let material = &hit.material;
    let towards_viewer = (viewer - hit.position).try_normalized();

    let mut shadow_rays = 0;
    let color = scene.lights.iter().fold(Color::black(), |color, light| {
        let mut partial = material.ambient * light.ambient;

        // A light right at the hit has no direction to shade with
        if let Some(l) = (light.position - hit.position).try_normalized() {
            shadow_rays += 1;
            if VisibilityTester::from_hit(hit, light.position).unoccluded(scene) {
                let n_dot_l = n.dot(l);
                partial += material.diffuse * light.diffuse * n_dot_l.max(0.0);

                if let Some(v) = towards_viewer {
                    let r = n * (2.0 * n_dot_l) - l;
                    let v_dot_r = v.dot(r);
                    if v_dot_r > 0.0 {
                        partial += material.specular
                            * light.specular
                            * v_dot_r.powf(material.shininess);
                    }
                }
            }
        }

        color + partial * light.intensity
    });

    (color, shadow_rays)
}
