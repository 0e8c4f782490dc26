mod color;
mod common;
mod ray;
mod vector;

pub use color::Color;
pub use common::FloatValueType;
pub use ray::Ray;
pub use vector::{vec3, Vec3};
