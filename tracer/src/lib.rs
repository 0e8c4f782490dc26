pub mod camera;
pub mod color_map;
pub mod film;
pub mod integrators;
pub mod interaction;
pub mod lights;
pub mod macros;
pub mod materials;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod shapes;
pub mod visibility;

// Re-exported for the logging macros
pub use log;
