use std::path::Path;

use crate::{math::Color, tracer_debug};

#[derive(Debug)]
pub enum FilmError {
    Io(std::io::Error),
    Png(image::ImageError),
    Exr(exr::error::Error),
    UnsupportedFormat(String),
}

impl std::fmt::Display for FilmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilmError::Io(why) => write!(f, "{}", why),
            FilmError::Png(why) => write!(f, "PNG: {}", why),
            FilmError::Exr(why) => write!(f, "EXR: {}", why),
            FilmError::UnsupportedFormat(ext) => write!(f, "Unsupported image format '{}'", ext),
        }
    }
}

impl std::error::Error for FilmError {}

/// Row-major pixel grid of a single frame.
#[derive(Clone, Debug)]
pub struct Film {
    width: usize,
    height: usize,
    pixels: Vec<Color<f64>>,
}

impl Film {
    /// Creates a new `Film` with every pixel set to `clear_color`.
    pub fn new(width: usize, height: usize, clear_color: Color<f64>) -> Self {
        Self {
            width,
            height,
            pixels: vec![clear_color; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Color<f64>] {
        &self.pixels
    }

    /// Returns the pixel in column `i` of row `j`.
    pub fn pixel(&self, i: usize, j: usize) -> Color<f64> {
        self.pixels[self.offset(i, j)]
    }

    pub fn set_pixel(&mut self, i: usize, j: usize, color: Color<f64>) {
        let offset = self.offset(i, j);
        self.pixels[offset] = color;
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.width && j < self.height,
            "Pixel ({}, {}) outside {}x{} film",
            i,
            j,
            self.width,
            self.height
        );
        j * self.width + i
    }

    /// Writes the film to `path`, encoded by its extension.
    ///
    /// `.png` is clamped 8-bit RGBA, `.exr` linear float RGBA.
    pub fn write(&self, path: &Path) -> Result<(), FilmError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "png" => self.write_png(path)?,
            "exr" => self.write_exr(path)?,
            _ => return Err(FilmError::UnsupportedFormat(ext)),
        }

        tracer_debug!("Film written to '{}'", path.to_string_lossy());
        Ok(())
    }

    /// Returns the clamped 8-bit RGBA encoding of the film.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgba8()).collect()
    }

    fn write_png(&self, path: &Path) -> Result<(), FilmError> {
        let (width, height) = self.dimensions_u32()?;
        image::save_buffer_with_format(
            path,
            &self.to_rgba8(),
            width,
            height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(FilmError::Png)
    }

    fn write_exr(&self, path: &Path) -> Result<(), FilmError> {
        exr::prelude::write_rgba_file(path, self.width, self.height, |x, y| {
            let px = self.pixels[y * self.width + x];
            (px.r as f32, px.g as f32, px.b as f32, px.a as f32)
        })
        .map_err(FilmError::Exr)
    }

    fn dimensions_u32(&self) -> Result<(u32, u32), FilmError> {
        match (u32::try_from(self.width), u32::try_from(self.height)) {
            (Ok(w), Ok(h)) => Ok((w, h)),
            _ => Err(FilmError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Film of {}x{} is too large", self.width, self.height),
            ))),
        }
    }
}
