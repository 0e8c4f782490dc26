mod ct_mask;
mod ellipsoid;
mod sphere;

pub use ct_mask::{CtMask, LoadError, VoxelGrid};
pub use ellipsoid::Ellipsoid;
pub use sphere::Sphere;

use crate::{
    interaction::Intersection,
    math::{Ray, Vec3},
};

/// All the geometry a scene can hold.
///
/// Geometry is immutable after construction and shared between render threads.
pub enum Geometry {
    Sphere(Sphere),
    Ellipsoid(Ellipsoid),
    CtMask(CtMask),
}

impl Geometry {
    /// Intersects `ray` with this geometry. Only hits within `[min_dist, max_dist]`
    /// are visible.
    pub fn intersect(&self, ray: &Ray<f64>, min_dist: f64, max_dist: f64) -> Intersection {
        match self {
            Geometry::Sphere(s) => s.intersect(ray, min_dist, max_dist),
            Geometry::Ellipsoid(e) => e.intersect(ray, min_dist, max_dist),
            Geometry::CtMask(m) => m.intersect(ray, min_dist, max_dist),
        }
    }

    /// Returns the unit surface normal at `p`, which is expected to lie on the surface.
    ///
    /// Zero where the surface has no normal, e.g. inside homogeneous regions of a
    /// [`CtMask`]. Its intersections fall back to facing the ray instead.
    pub fn normal(&self, p: Vec3<f64>) -> Vec3<f64> {
        match self {
            Geometry::Sphere(s) => s.normal(p),
            Geometry::Ellipsoid(e) => e.normal(p),
            Geometry::CtMask(m) => m.normal(p),
        }
    }

    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Sphere(_) => "sphere",
            Geometry::Ellipsoid(_) => "ellipsoid",
            Geometry::CtMask(_) => "ct mask",
        }
    }
}

impl From<Sphere> for Geometry {
    fn from(s: Sphere) -> Self {
        Geometry::Sphere(s)
    }
}

impl From<Ellipsoid> for Geometry {
    fn from(e: Ellipsoid) -> Self {
        Geometry::Ellipsoid(e)
    }
}

impl From<CtMask> for Geometry {
    fn from(m: CtMask) -> Self {
        Geometry::CtMask(m)
    }
}

#[derive(Debug)]
pub enum ShapeError {
    /// Ellipsoid axis scales have to be finite and non-zero
    DegenerateAxisScale(Vec3<f64>),
    NegativeRadius(f64),
    /// Volume scales have to be finite and positive
    InvalidScale(f64),
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::DegenerateAxisScale(s) => {
                write!(f, "Degenerate axis scale ({}, {}, {})", s.x, s.y, s.z)
            }
            ShapeError::NegativeRadius(r) => write!(f, "Negative radius {}", r),
            ShapeError::InvalidScale(s) => write!(f, "Invalid volume scale {}", s),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Solves `a*t^2 + b*t + c = 0` for real roots, returned in ascending order.
///
/// Returns `None` when there are no real roots, also for a degenerate `a`.
fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    if a == 0.0 || !a.is_finite() {
        return None;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 || discriminant.is_nan() {
        return None;
    }
    let rd = discriminant.sqrt();

    // Avoid cancellation between b and rd
    let q = if b < 0.0 {
        -0.5 * (b - rd)
    } else {
        -0.5 * (b + rd)
    };
    if q == 0.0 {
        // b and the discriminant are both zero, so is c
        return Some((0.0, 0.0));
    }

    let t0 = q / a;
    let t1 = c / q;
    if t0 > t1 {
        Some((t1, t0))
    } else {
        Some((t0, t1))
    }
}

/// Picks the nearest root that is in front of the ray origin and within `[min_dist, max_dist]`.
fn nearest_root(t0: f64, t1: f64, min_dist: f64, max_dist: f64) -> Option<f64> {
    debug_assert!(t0 <= t1);

    [t0, t1]
        .into_iter()
        .find(|&t| t > 0.0 && t >= min_dist && t <= max_dist)
}

/// Builds the intersection for the roots of a quadric.
///
/// The nearest root in range is visible. If neither root is in range the intersection is
/// still valid but not visible.
fn quadric_intersection(
    ray: &Ray<f64>,
    roots: Option<(f64, f64)>,
    min_dist: f64,
    max_dist: f64,
    hit: impl Fn(&Ray<f64>, f64, bool) -> Intersection,
) -> Intersection {
    match roots {
        Some((t0, t1)) => match nearest_root(t0, t1, min_dist, max_dist) {
            Some(t) => hit(ray, t, true),
            None => hit(ray, t0, false),
        },
        None => Intersection::none(),
    }
}
