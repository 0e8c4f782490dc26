use crate::math::Color;

/// Phong material parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub ambient: Color<f64>,
    pub diffuse: Color<f64>,
    pub specular: Color<f64>,
    /// Specular exponent, >= 0
    pub shininess: f64,
}

impl Material {
    pub fn new(
        ambient: Color<f64>,
        diffuse: Color<f64>,
        specular: Color<f64>,
        shininess: f64,
    ) -> Self {
        debug_assert!(shininess >= 0.0);
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// A material that contributes nothing.
    pub fn none() -> Self {
        Self::new(Color::none(), Color::none(), Color::none(), 0.0)
    }

    /// Derives a flat-shaded material from a single color.
    pub fn from_color(color: Color<f64>) -> Self {
        Self::new(color * 0.1, color * 0.8, color * 0.3, 100.0)
    }
}
