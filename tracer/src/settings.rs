use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    camera::{OrbitParameters, ViewParameters},
    integrators::IntegratorType,
    math::Color,
    scene::SceneSettings,
    tracer_info,
};

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Invalid(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(why) => write!(f, "{}", why),
            SettingsError::Yaml(why) => write!(f, "{}", why),
            SettingsError::Invalid(why) => write!(f, "{}", why),
        }
    }
}

impl std::error::Error for SettingsError {}

/// Everything needed to render an animation
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: usize,
    pub height: usize,
    pub frames: usize,
    /// Render threads, 0 picks one per core
    pub threads: usize,
    /// Output image extension, `png` or `exr`
    pub format: String,
    pub integrator: IntegratorType,
    /// RGBA
    pub background: [f64; 4],
    pub view: ViewParameters,
    pub orbit: OrbitParameters,
    pub scene: SceneSettings,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            frames: 60,
            threads: 0,
            format: "png".into(),
            integrator: IntegratorType::default(),
            background: [0.0; 4],
            view: ViewParameters::default(),
            orbit: OrbitParameters::default(),
            scene: SceneSettings::default(),
        }
    }
}

impl RenderSettings {
    /// Loads settings from a YAML file. Missing fields get their defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(SettingsError::Io)?;
        let settings = Self::from_yaml(&text)?;
        tracer_info!("Loaded settings from '{}'", path.to_string_lossy());
        Ok(settings)
    }

    pub fn from_yaml(text: &str) -> Result<Self, SettingsError> {
        // An empty document is null, not an empty map
        let settings: Self = if text.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(text).map_err(SettingsError::Yaml)?
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.width == 0 || self.height == 0 {
            return Err(SettingsError::Invalid(format!(
                "Resolution {}x{} has no pixels",
                self.width, self.height
            )));
        }
        if self.frames == 0 {
            return Err(SettingsError::Invalid("Zero frames requested".into()));
        }
        if !matches!(self.format.as_str(), "png" | "exr") {
            return Err(SettingsError::Invalid(format!(
                "Unknown output format '{}'",
                self.format
            )));
        }
        if self.view.back_plane_distance < self.view.front_plane_distance {
            return Err(SettingsError::Invalid(format!(
                "Back plane {} is in front of the front plane {}",
                self.view.back_plane_distance, self.view.front_plane_distance
            )));
        }
        Ok(())
    }

    pub fn background(&self) -> Color<f64> {
        Color::from(self.background)
    }
}
