//! Rotation tuning and display preferences
//!
//! Persisted in LocalStorage on the web; read from an optional JSON file on native.

use serde::{Deserialize, Serialize};

use crate::consts::{ROTATE_SPEED, SNAP_SPEED};
use crate::error::SettingsError;
use crate::renderer::Layers;
use crate::sim::Tuning;

/// User-tunable settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Motion ===
    /// Radians per tick while a rotate input is held
    pub rotate_speed: f64,
    /// Snap interpolation factor per tick (0, 1]
    pub snap_speed: f64,

    // === Display ===
    /// Scrolling sine graph
    pub show_sine: bool,
    /// Scrolling cosine graph
    pub show_cosine: bool,
    /// Spokes through the special angles
    pub show_spokes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rotate_speed: ROTATE_SPEED,
            snap_speed: SNAP_SPEED,

            show_sine: true,
            show_cosine: true,
            show_spokes: true,
        }
    }
}

impl Settings {
    /// Check that the speeds can drive the simulation
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.tuning().map(|_| ())
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Speeds for the simulation
    pub fn tuning(&self) -> Result<Tuning, SettingsError> {
        Tuning::new(self.rotate_speed, self.snap_speed)
    }

    /// Flip a display layer by its key binding (`s`, `c`, `g`)
    ///
    /// Returns false for keys with no binding.
    pub fn toggle_layer(&mut self, key: &str) -> bool {
        let layer = match key {
            "s" | "S" => &mut self.show_sine,
            "c" | "C" => &mut self.show_cosine,
            "g" | "G" => &mut self.show_spokes,
            _ => return false,
        };
        *layer = !*layer;
        true
    }

    /// Optional render layers
    pub fn layers(&self) -> Layers {
        Layers {
            sine: self.show_sine,
            cosine: self.show_cosine,
            spokes: self.show_spokes,
        }
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "unit_circle_settings";

    /// Environment variable naming a settings file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub const PATH_ENV: &'static str = "UNIT_CIRCLE_SETTINGS";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from the file named by `UNIT_CIRCLE_SETTINGS`, if set
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::PATH_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Failed to load settings from {}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Read and validate a settings file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
