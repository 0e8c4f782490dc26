use std::{path::Path, str::FromStr, sync::Arc};

use super::ShapeError;
use crate::{
    color_map::ColorMap,
    interaction::Intersection,
    materials::Material,
    math::{Color, Ray, Vec3},
    tracer_debug, tracer_warn,
};

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    MissingField(&'static str),
    InvalidValue { field: &'static str, value: String },
    ShortData { expected: usize, found: usize },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(why) => write!(f, "{}", why),
            LoadError::MissingField(field) => write!(f, "Missing field '{}'", field),
            LoadError::InvalidValue { field, value } => {
                write!(f, "Invalid value for '{}': '{}'", field, value)
            }
            LoadError::ShortData { expected, found } => write!(
                f,
                "Expected {} bytes of voxel data, found {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(why) => Some(why),
            _ => None,
        }
    }
}

const RESOLUTION: &str = "Resolution";
const SLICE_THICKNESS: &str = "SliceThickness";

/// A dense grid of 8-bit intensities, x varying fastest.
#[derive(Clone, Debug)]
pub struct VoxelGrid {
    resolution: [usize; 3],
    thickness: Vec3<f64>,
    data: Vec<u8>,
}

impl VoxelGrid {
    /// Loads a grid from a `.dat` descriptor and the raw voxel bytes it describes.
    pub fn load(dat: &Path, raw: &Path) -> Result<Self, LoadError> {
        let descriptor = std::fs::read_to_string(dat).map_err(LoadError::Io)?;
        let (resolution, thickness) = parse_descriptor(&descriptor)?;

        let data = std::fs::read(raw).map_err(LoadError::Io)?;
        let data_len = data.len();

        let grid = Self::from_parts(resolution, thickness, data)?;
        if data_len > grid.data.len() {
            tracer_warn!(
                "Ignoring {} trailing bytes in '{}'",
                data_len - grid.data.len(),
                raw.display()
            );
        }
        tracer_debug!(
            "Loaded {}x{}x{} voxels from '{}'",
            resolution[0],
            resolution[1],
            resolution[2],
            raw.display()
        );

        Ok(grid)
    }

    /// Creates a grid from in-memory data. Bytes beyond the grid are dropped.
    pub fn from_parts(
        resolution: [usize; 3],
        thickness: Vec3<f64>,
        mut data: Vec<u8>,
    ) -> Result<Self, LoadError> {
        let expected = resolution
            .iter()
            .try_fold(1usize, |acc, &r| acc.checked_mul(r))
            .filter(|&n| n > 0)
            .ok_or_else(|| LoadError::InvalidValue {
                field: RESOLUTION,
                value: format!("{} {} {}", resolution[0], resolution[1], resolution[2]),
            })?;

        let valid_thickness = |t: f64| t > 0.0 && t.is_finite();
        if !(valid_thickness(thickness.x)
            && valid_thickness(thickness.y)
            && valid_thickness(thickness.z))
        {
            return Err(LoadError::InvalidValue {
                field: SLICE_THICKNESS,
                value: format!("{} {} {}", thickness.x, thickness.y, thickness.z),
            });
        }

        if data.len() < expected {
            return Err(LoadError::ShortData {
                expected,
                found: data.len(),
            });
        }
        data.truncate(expected);

        Ok(Self {
            resolution,
            thickness,
            data,
        })
    }

    pub fn resolution(&self) -> [usize; 3] {
        self.resolution
    }

    pub fn thickness(&self) -> Vec3<f64> {
        self.thickness
    }

    /// World size of the grid before scaling
    pub fn extent(&self) -> Vec3<f64> {
        Vec3::new(
            self.resolution[0] as f64 * self.thickness.x,
            self.resolution[1] as f64 * self.thickness.y,
            self.resolution[2] as f64 * self.thickness.z,
        )
    }

    /// Returns the intensity at the voxel, 0 outside the grid.
    pub fn value(&self, x: i64, y: i64, z: i64) -> u8 {
        let in_range = |v: i64, res: usize| v >= 0 && (v as usize) < res;
        if !(in_range(x, self.resolution[0])
            && in_range(y, self.resolution[1])
            && in_range(z, self.resolution[2]))
        {
            return 0;
        }

        let (x, y, z) = (x as usize, y as usize, z as usize);
        self.data[z * self.resolution[1] * self.resolution[0] + y * self.resolution[0] + x]
    }
}

/// Parses `Resolution` and `SliceThickness` from a descriptor.
///
/// Keys and values are separated by any run of colons, tabs and spaces. Unknown keys are
/// ignored.
fn parse_descriptor(text: &str) -> Result<([usize; 3], Vec3<f64>), LoadError> {
    let mut resolution = None;
    let mut thickness = None;

    for line in text.lines() {
        let mut tokens = line
            .split(&[':', '\t', ' '][..])
            .filter(|t| !t.is_empty());
        match tokens.next() {
            Some(RESOLUTION) => {
                resolution = Some(parse_triple::<usize>(RESOLUTION, line, tokens)?);
            }
            Some(SLICE_THICKNESS) => {
                thickness = Some(Vec3::from(parse_triple::<f64>(
                    SLICE_THICKNESS,
                    line,
                    tokens,
                )?));
            }
            _ => (),
        }
    }

    match (resolution, thickness) {
        (Some(r), Some(t)) => Ok((r, t)),
        (None, _) => Err(LoadError::MissingField(RESOLUTION)),
        (_, None) => Err(LoadError::MissingField(SLICE_THICKNESS)),
    }
}

fn parse_triple<'a, T: FromStr>(
    field: &'static str,
    line: &str,
    tokens: impl Iterator<Item = &'a str>,
) -> Result<[T; 3], LoadError> {
    let invalid = || LoadError::InvalidValue {
        field,
        value: line.trim().to_string(),
    };

    let values = tokens
        .take(3)
        .map(|t| t.parse::<T>().map_err(|_| invalid()))
        .collect::<Result<Vec<T>, LoadError>>()?;

    let mut values = values.into_iter();
    match (values.next(), values.next(), values.next()) {
        (Some(x), Some(y), Some(z)) => Ok([x, y, z]),
        _ => Err(invalid()),
    }
}

/// A CT scan volume rendered by marching rays through the voxels and compositing the
/// colors its color map gives them.
#[derive(Clone)]
pub struct CtMask {
    grid: VoxelGrid,
    position: Vec3<f64>,
    scale: f64,
    color_map: Arc<dyn ColorMap>,
    // World bounds
    v0: Vec3<f64>,
    v1: Vec3<f64>,
}

impl CtMask {
    /// Creates a new `CtMask` with its minimum corner at `position`.
    ///
    /// `scale` scales the grid and is also the marching step length.
    pub fn new(
        grid: VoxelGrid,
        position: Vec3<f64>,
        scale: f64,
        color_map: Arc<dyn ColorMap>,
    ) -> Result<Self, ShapeError> {
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(ShapeError::InvalidScale(scale));
        }

        let v0 = position;
        let v1 = position + grid.extent() * scale;

        Ok(Self {
            grid,
            position,
            scale,
            color_map,
            v0,
            v1,
        })
    }

    pub fn bounds(&self) -> (Vec3<f64>, Vec3<f64>) {
        (self.v0, self.v1)
    }

    fn voxel_index(&self, p: Vec3<f64>) -> [i64; 3] {
        let local = (p - self.position) / self.grid.thickness / self.scale;
        [
            local.x.floor() as i64,
            local.y.floor() as i64,
            local.z.floor() as i64,
        ]
    }

    fn sample(&self, p: Vec3<f64>) -> Color<f64> {
        let [x, y, z] = self.voxel_index(p);
        self.color_map.color(self.grid.value(x, y, z))
    }

    /// Central difference gradient of the intensities around the voxel containing `p`.
    fn gradient(&self, p: Vec3<f64>) -> Vec3<f64> {
        let [x, y, z] = self.voxel_index(p);
        let v = |x, y, z| self.grid.value(x, y, z) as f64;

        Vec3::new(
            v(x + 1, y, z) - v(x - 1, y, z),
            v(x, y + 1, z) - v(x, y - 1, z),
            v(x, y, z + 1) - v(x, y, z - 1),
        )
    }

    /// Returns the span of `ray` inside the volume bounds, if any.
    fn slabs(&self, ray: &Ray<f64>) -> Option<(f64, f64)> {
        let mut t_near = f64::NEG_INFINITY;
        let mut t_far = f64::INFINITY;

        for i in 0..3 {
            let (o, d) = (ray.o[i], ray.d[i]);
            let (lo, hi) = (self.v0[i], self.v1[i]);

            if d == 0.0 {
                // Parallel to the slab, has to start inside it
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }

            let (t0, t1) = if d < 0.0 {
                ((hi - o) / d, (lo - o) / d)
            } else {
                ((lo - o) / d, (hi - o) / d)
            };
            t_near = t_near.max(t0);
            t_far = t_far.min(t1);
        }

        if t_far <= t_near {
            None
        } else {
            Some((t_near, t_far))
        }
    }

    pub fn intersect(&self, ray: &Ray<f64>, min_dist: f64, max_dist: f64) -> Intersection {
        let (t_near, t_far) = match self.slabs(ray) {
            Some(span) => span,
            None => return Intersection::none(),
        };

        let start = t_near.max(min_dist);
        let end = t_far.min(max_dist);
        if end <= start {
            return Intersection::none();
        }

        // All marches share the same sample positions
        let step = self.scale;
        let sample_count = ((end - start) / step).ceil() as usize;
        let t_at = |k: usize| start + (k as f64) * step;
        let sample_at = |k: usize| self.sample(ray.point(t_at(k)));

        let first = match (0..sample_count).find(|&k| sample_at(k).a > 0.0) {
            Some(k) => k,
            None => return Intersection::none(),
        };

        // Samples up to and including the first opaque one
        let mut samples = Vec::new();
        for k in first..sample_count {
            let s = sample_at(k);
            samples.push(s);
            if s.a >= 1.0 {
                break;
            }
        }

        // Back to front
        let color = samples
            .iter()
            .rev()
            .fold(Color::none(), |acc, &s| acc * (1.0 - s.a) + s * s.a);
        if color.a == 0.0 {
            return Intersection::none();
        }

        let t = t_at(first);
        // Homogeneous regions have no normal, face the viewer
        let normal = self.normal(ray.point(t)).try_normalized().unwrap_or(-ray.d);

        // The hit is inside a voxel, shadow rays have to clear all of it
        let voxel_diagonal = (self.grid.thickness * self.scale).len();

        Intersection::new(ray, t, true, normal, Material::from_color(color), color)
            .with_shadow_bias(voxel_diagonal)
    }

    /// Returns the normalized intensity gradient at `p`, zero in homogeneous regions.
    pub fn normal(&self, p: Vec3<f64>) -> Vec3<f64> {
        self.gradient(p).try_normalized().unwrap_or_else(Vec3::zeros)
    }
}
