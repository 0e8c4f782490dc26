use crate::math::{Ray, Vec3};

use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum CameraError {
    /// `up` and `direction` don't span a view plane
    DegenerateViewPlane,
    /// The orbit axis has no direction or is parallel to the orbit center
    DegenerateOrbit,
}

impl std::fmt::Display for CameraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CameraError::DegenerateViewPlane => {
                write!(f, "Camera up and direction are zero or parallel")
            }
            CameraError::DegenerateOrbit => {
                write!(f, "Orbit axis is zero or parallel to the orbit center")
            }
        }
    }
}

impl std::error::Error for CameraError {}

/// The view plane and clip planes of a `Camera`
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewParameters {
    pub view_plane_distance: f64,
    pub view_plane_width: f64,
    pub view_plane_height: f64,
    pub front_plane_distance: f64,
    pub back_plane_distance: f64,
}

impl Default for ViewParameters {
    fn default() -> Self {
        Self {
            view_plane_distance: 65.0,
            view_plane_width: 160.0,
            view_plane_height: 120.0,
            front_plane_distance: 0.0,
            back_plane_distance: 1000.0,
        }
    }
}

/// A pinhole camera that shoots rays through a rectangular view plane
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    pub position: Vec3<f64>,
    pub direction: Vec3<f64>,
    pub up: Vec3<f64>,
    pub view: ViewParameters,
    // Horizontal axis of the view plane
    right: Vec3<f64>,
}

impl Camera {
    /// Creates a new `Camera`. `up` should be orthogonal to `direction`.
    pub fn new(
        position: Vec3<f64>,
        direction: Vec3<f64>,
        up: Vec3<f64>,
        view: ViewParameters,
    ) -> Result<Self, CameraError> {
        let right = up
            .cross(direction)
            .try_normalized()
            .ok_or(CameraError::DegenerateViewPlane)?;

        Ok(Self {
            position,
            direction,
            up,
            view,
            right,
        })
    }

    /// Returns the primary ray for pixel `(i, j)` of a `width` x `height` image.
    ///
    /// `None` if the pixel maps onto the camera position.
    pub fn ray(&self, i: usize, j: usize, width: usize, height: usize) -> Option<Ray<f64>> {
        let u = image_to_view_plane(i, width, self.view.view_plane_width);
        let v = image_to_view_plane(j, height, self.view.view_plane_height);

        let on_plane = self.position
            + self.direction * self.view.view_plane_distance
            + self.right * u
            + self.up * v;

        Ray::between(self.position, on_plane)
    }
}

fn image_to_view_plane(n: usize, image_size: usize, view_plane_size: f64) -> f64 {
    (n as f64) * view_plane_size / (image_size as f64) - view_plane_size / 2.0
}

/// Circle the camera travels on over an animation
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OrbitParameters {
    /// Center of the orbit, the camera always looks at it
    pub middle: [f64; 3],
    /// Rotation axis, doubles as the camera up vector
    pub up: [f64; 3],
    pub distance: f64,
}

impl Default for OrbitParameters {
    fn default() -> Self {
        Self {
            middle: [0.0, 0.0, 100.0],
            up: [-(0.125f64.sqrt()), -(0.75f64.sqrt()), 0.125f64.sqrt()],
            distance: 150.0,
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Orbit {
    middle: Vec3<f64>,
    up: Vec3<f64>,
    first: Vec3<f64>,
    distance: f64,
}

impl Orbit {
    pub fn new(params: &OrbitParameters) -> Result<Self, CameraError> {
        let middle = Vec3::from(params.middle);
        let up = Vec3::from(params.up)
            .try_normalized()
            .ok_or(CameraError::DegenerateOrbit)?;
        let first = middle
            .cross(up)
            .try_normalized()
            .ok_or(CameraError::DegenerateOrbit)?;

        Ok(Self {
            middle,
            up,
            first,
            distance: params.distance,
        })
    }

    /// Returns the camera for `frame` out of `frame_count` evenly spaced positions.
    pub fn camera(
        &self,
        frame: usize,
        frame_count: usize,
        view: ViewParameters,
    ) -> Result<Camera, CameraError> {
        let angle = (360.0 / frame_count.max(1) as f64 * frame as f64).to_radians();
        let (sa, ca) = angle.sin_cos();

        // Rodrigues' rotation of first around up
        let dir = self.first * ca
            + self.up.cross(self.first) * sa
            + self.up * self.up.dot(self.first) * (1.0 - ca);

        Camera::new(self.middle + dir * self.distance, -dir, self.up, view)
    }
}
