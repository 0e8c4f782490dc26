use super::{quadric_intersection, solve_quadratic};
use crate::{
    interaction::Intersection,
    materials::Material,
    math::{Color, Ray, Vec3},
};

/// A sphere object.
#[derive(Clone, Debug)]
pub struct Sphere {
    center: Vec3<f64>,
    radius: f64,
    material: Material,
    color: Color<f64>,
}

impl Sphere {
    /// Creates a new `Sphere`.
    pub fn new(center: Vec3<f64>, radius: f64, material: Material, color: Color<f64>) -> Self {
        Self {
            center,
            radius,
            material,
            color,
        }
    }

    pub fn center(&self) -> Vec3<f64> {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn intersect(&self, ray: &Ray<f64>, min_dist: f64, max_dist: f64) -> Intersection {
        let oc = ray.o - self.center;

        // Quadratic coefficients
        let a = ray.d.len_sqr();
        let b = 2.0 * ray.d.dot(oc);
        let c = oc.len_sqr() - self.radius * self.radius;

        quadric_intersection(
            ray,
            solve_quadratic(a, b, c),
            min_dist,
            max_dist,
            |ray, t, visible| {
                Intersection::new(
                    ray,
                    t,
                    visible,
                    self.normal(ray.point(t)),
                    self.material,
                    self.color,
                )
            },
        )
    }

    pub fn normal(&self, p: Vec3<f64>) -> Vec3<f64> {
        // A zero radius sphere has no meaningful normal
        (p - self.center).try_normalized().unwrap_or_else(Vec3::zeros)
    }
}
