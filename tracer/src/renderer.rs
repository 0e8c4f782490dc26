use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use rayon::prelude::*;

use crate::{
    camera::{Camera, CameraError, Orbit},
    film::{Film, FilmError},
    integrators::Integrator,
    scene::Scene,
    settings::RenderSettings,
    tracer_debug, tracer_info,
};

/// Extensions of the frames `prepare_output_dir` cleans up
const FRAME_EXTENSIONS: [&str; 2] = ["png", "exr"];

#[derive(Debug)]
pub enum RenderError {
    Camera(CameraError),
    Film { path: PathBuf, error: FilmError },
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Camera(why) => write!(f, "{}", why),
            RenderError::Film { path, error } => {
                write!(f, "Failed to write '{}': {}", path.to_string_lossy(), error)
            }
            RenderError::ThreadPool(why) => write!(f, "{}", why),
        }
    }
}

impl std::error::Error for RenderError {}

#[derive(Clone, Debug)]
pub struct FrameStats {
    /// 0-based frame index
    pub frame: usize,
    pub path: PathBuf,
    pub secs: f32,
    pub ray_count: usize,
}

/// Renders a single frame of `width` x `height` pixels.
///
/// Also returns the number of rays intersected with `scene`.
pub fn render_frame(
    scene: &Scene,
    camera: &Camera,
    integrator: &dyn Integrator,
    width: usize,
    height: usize,
) -> (Film, usize) {
    let mut film = Film::new(width, height, scene.background);
    let ray_count = integrator.render(scene, camera, &mut film);
    (film, ray_count)
}

/// Returns the path of 0-based `frame`, named by its 1-based number.
pub fn frame_path(output_dir: &Path, frame: usize, extension: &str) -> PathBuf {
    output_dir.join(format!("{:03}.{}", frame + 1, extension))
}

/// Creates `output_dir` and removes frames left over from earlier renders.
///
/// Returns the number of removed files.
pub fn prepare_output_dir(output_dir: &Path) -> std::io::Result<usize> {
    std::fs::create_dir_all(output_dir)?;

    let mut removed = 0;
    for entry in std::fs::read_dir(output_dir)? {
        let path = entry?.path();
        let is_frame = path.is_file()
            && path
                .extension()
                .and_then(|e| e.to_str())
                .map_or(false, |e| FRAME_EXTENSIONS.contains(&e));
        if is_frame {
            std::fs::remove_file(&path)?;
            removed += 1;
        }
    }

    if removed > 0 {
        tracer_debug!(
            "Removed {} old frames from '{}'",
            removed,
            output_dir.to_string_lossy()
        );
    }

    Ok(removed)
}

/// Renders the frames of an orbit animation concurrently, one task per frame.
pub struct Renderer {
    pool: rayon::ThreadPool,
}

impl Renderer {
    /// Creates a new `Renderer` with `threads` workers, 0 picks one per core.
    pub fn new(threads: usize) -> Result<Self, RenderError> {
        let threads = if threads == 0 {
            num_cpus::get()
        } else {
            threads
        };
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("Render thread {}", i))
            .build()
            .map_err(RenderError::ThreadPool)?;

        tracer_info!("Rendering with {} threads", pool.current_num_threads());

        Ok(Self { pool })
    }

    /// Renders `settings.frames` frames around the orbit into `output_dir`.
    ///
    /// The results are in frame order. A failed frame doesn't stop the others.
    pub fn render_animation(
        &self,
        scene: &Scene,
        settings: &RenderSettings,
        output_dir: &Path,
    ) -> Result<Vec<Result<FrameStats, RenderError>>, RenderError> {
        let orbit = Orbit::new(&settings.orbit).map_err(RenderError::Camera)?;
        let integrator = settings.integrator.instantiate();
        let frame_count = settings.frames;

        tracer_info!(
            "Rendering {} frames of {}x{} with {}",
            frame_count,
            settings.width,
            settings.height,
            settings.integrator
        );

        let batch_start = Instant::now();

        let results: Vec<Result<FrameStats, RenderError>> = self.pool.install(|| {
            (0..frame_count)
                .into_par_iter()
                .map(|frame| -> Result<FrameStats, RenderError> {
                    let frame_start = Instant::now();

                    let camera = orbit
                        .camera(frame, frame_count, settings.view)
                        .map_err(RenderError::Camera)?;
                    let (film, ray_count) = render_frame(
                        scene,
                        &camera,
                        integrator.as_ref(),
                        settings.width,
                        settings.height,
                    );

                    let path = frame_path(output_dir, frame, &settings.format);
                    film.write(&path).map_err(|error| RenderError::Film {
                        path: path.clone(),
                        error,
                    })?;

                    let secs = frame_start.elapsed().as_secs_f32();
                    tracer_info!(
                        "Frame {}/{} done in {:.2}s, {:.2} Mrays/s",
                        frame + 1,
                        frame_count,
                        secs,
                        (ray_count as f32 / secs.max(f32::EPSILON)) / 1e6
                    );

                    Ok(FrameStats {
                        frame,
                        path,
                        secs,
                        ray_count,
                    })
                })
                .collect()
        });

        let total_secs = batch_start.elapsed().as_secs_f32();
        let total_rays: usize = results
            .iter()
            .filter_map(|r| r.as_ref().ok())
            .map(|s| s.ray_count)
            .sum();
        let finished = results.iter().filter(|r| r.is_ok()).count();
        tracer_info!(
            "{}/{} frames finished in {:.2}s, {} rays in total",
            finished,
            frame_count,
            total_secs,
            total_rays
        );

        Ok(results)
    }
}
