use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::math::Color;

/// Maps voxel intensities to colors. Alpha is the opacity of the sample.
pub trait ColorMap: Send + Sync {
    fn color(&self, value: u8) -> Color<f64>;
}

/// Fully opaque `color` for intensities at or above `threshold`, transparent otherwise.
#[derive(Copy, Clone, Debug)]
pub struct Threshold {
    pub threshold: u8,
    pub color: Color<f64>,
}

impl ColorMap for Threshold {
    fn color(&self, value: u8) -> Color<f64> {
        if value >= self.threshold {
            Color::new(self.color.r, self.color.g, self.color.b, 1.0)
        } else {
            Color::none()
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ControlPoint {
    pub value: f64,
    /// RGBA
    pub color: [f64; 4],
}

/// Piecewise-linear transfer function over the 8-bit intensity range.
///
/// Intensities below the first or above the last control point get the color of that point.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(from = "Vec<ControlPoint>", into = "Vec<ControlPoint>")]
pub struct TransferFunction {
    points: Vec<ControlPoint>,
}

impl TransferFunction {
    pub fn new(mut points: Vec<ControlPoint>) -> Self {
        points.retain(|p| p.value.is_finite());
        points.sort_by(|a, b| a.value.total_cmp(&b.value));
        Self { points }
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }
}

impl Default for TransferFunction {
    /// Air and soft tissue transparent, bone opaque white
    fn default() -> Self {
        Self::new(vec![
            ControlPoint {
                value: 0.0,
                color: [0.0, 0.0, 0.0, 0.0],
            },
            ControlPoint {
                value: 80.0,
                color: [0.0, 0.0, 0.0, 0.0],
            },
            ControlPoint {
                value: 120.0,
                color: [0.9, 0.55, 0.45, 0.2],
            },
            ControlPoint {
                value: 200.0,
                color: [1.0, 1.0, 0.9, 1.0],
            },
        ])
    }
}

impl From<Vec<ControlPoint>> for TransferFunction {
    fn from(points: Vec<ControlPoint>) -> Self {
        Self::new(points)
    }
}

impl From<TransferFunction> for Vec<ControlPoint> {
    fn from(tf: TransferFunction) -> Self {
        tf.points
    }
}

impl ColorMap for TransferFunction {
    fn color(&self, value: u8) -> Color<f64> {
        let v = value as f64;

        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Color::none(),
        };

        let color = if v <= first.value {
            Color::from(first.color)
        } else if v >= last.value {
            Color::from(last.color)
        } else {
            self.points
                .iter()
                .tuple_windows()
                .find(|(p0, p1)| v >= p0.value && v <= p1.value)
                .map(|(p0, p1)| {
                    let span = p1.value - p0.value;
                    let w = if span > 0.0 {
                        (v - p0.value) / span
                    } else {
                        0.0
                    };
                    Color::from(p0.color) * (1.0 - w) + Color::from(p1.color) * w
                })
                .unwrap_or_else(|| Color::from(last.color))
        };

        // Opacity outside [0, 1] breaks compositing
        Color::new(color.r, color.g, color.b, color.a.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn point(value: f64, color: [f64; 4]) -> ControlPoint {
        ControlPoint { value, color }
    }

    #[test]
    fn interpolation() {
        // Unsorted on purpose
        let tf = TransferFunction::new(vec![
            point(200.0, [1.0, 1.0, 1.0, 1.0]),
            point(100.0, [0.0, 0.0, 0.0, 0.0]),
        ]);
        assert_eq!(tf.points()[0].value, 100.0);

        assert_relative_eq!(tf.color(0), Color::none());
        assert_relative_eq!(tf.color(100), Color::none());
        assert_relative_eq!(tf.color(150), Color::new(0.5, 0.5, 0.5, 0.5));
        assert_relative_eq!(tf.color(200), Color::white());
        assert_relative_eq!(tf.color(255), Color::white());
    }

    #[test]
    fn empty() {
        let tf = TransferFunction::new(Vec::new());
        assert_eq!(tf.color(42), Color::none());
    }

    #[test]
    fn alpha_clamped() {
        let tf = TransferFunction::new(vec![point(0.0, [1.0, 1.0, 1.0, 2.0])]);
        assert_eq!(tf.color(10).a, 1.0);
    }

    #[test]
    fn threshold() {
        let map = Threshold {
            threshold: 128,
            color: Color::new(1.0, 0.5, 0.25, 0.0),
        };
        assert_eq!(map.color(200), Color::new(1.0, 0.5, 0.25, 1.0));
        assert_eq!(map.color(128).a, 1.0);
        assert_eq!(map.color(127), Color::none());
    }

    #[test]
    fn yaml() {
        let tf: TransferFunction = serde_yaml::from_str(
            "- value: 255\n  color: [1.0, 1.0, 1.0, 1.0]\n- value: 0\n  color: [0.0, 0.0, 0.0, 0.0]\n",
        )
        .unwrap();
        assert_eq!(tf.points().len(), 2);
        assert_eq!(tf.points()[0].value, 0.0);
    }
}
