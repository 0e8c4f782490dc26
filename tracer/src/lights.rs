use crate::math::{Color, Vec3};

/// A point light with separate Phong terms.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3<f64>,
    pub ambient: Color<f64>,
    pub diffuse: Color<f64>,
    pub specular: Color<f64>,
    /// Scales the light's total contribution
    pub intensity: f64,
}

impl Light {
    pub fn new(
        position: Vec3<f64>,
        ambient: Color<f64>,
        diffuse: Color<f64>,
        specular: Color<f64>,
        intensity: f64,
    ) -> Self {
        Self {
            position,
            ambient,
            diffuse,
            specular,
            intensity,
        }
    }

    /// Creates a `Light` that uses `color` for all of its terms.
    pub fn uniform(position: Vec3<f64>, color: Color<f64>, intensity: f64) -> Self {
        Self::new(position, color, color, color, intensity)
    }
}
