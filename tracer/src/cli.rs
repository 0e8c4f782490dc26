use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use tracer::{integrators::IntegratorType, settings::RenderSettings};

#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser)]
#[command(name = "tracer")]
#[command(about = "Renders an orbit animation around a scene of spheres, ellipsoids and CT scans")]
pub struct Args {
    /// Render settings in YAML, defaults are used if not given
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Directory the frames are written into, old frames in it are removed
    #[arg(short, long, default_value = "frames")]
    pub output: PathBuf,

    /// Number of frames around the orbit
    #[arg(short, long)]
    pub frames: Option<usize>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<usize>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<usize>,

    /// Render threads, 0 for one per core
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Phong, Normals or Flat
    #[arg(short, long)]
    pub integrator: Option<IntegratorType>,

    /// Output image format, png or exr
    #[arg(long)]
    pub format: Option<String>,

    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Overrides `settings` with the values given on the command line.
    pub fn apply(&self, settings: &mut RenderSettings) {
        if let Some(frames) = self.frames {
            settings.frames = frames;
        }
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(threads) = self.threads {
            settings.threads = threads;
        }
        if let Some(integrator) = self.integrator {
            settings.integrator = integrator;
        }
        if let Some(format) = &self.format {
            settings.format = format.to_ascii_lowercase();
        }
    }
}
