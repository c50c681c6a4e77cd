use crate::CONFY_APP_NAME;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub show_path: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { show_path: true }
    }
}

impl DisplaySettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "display").unwrap_or_default()
    }

    pub fn save(&self) {
        let _ = confy::store(CONFY_APP_NAME, "display", self);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorSettings {
    pub background_color: [f32; 3],
    pub path_color: [f32; 3],
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0],
            path_color: [214.0 / 255.0, 213.0 / 255.0, 183.0 / 255.0],
        }
    }
}

impl ColorSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "colors").unwrap_or_default()
    }

    pub fn save(&self) {
        let _ = confy::store(CONFY_APP_NAME, "colors", self);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    pub show_controls: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_controls: true,
        }
    }
}

impl UiSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "ui").unwrap_or_default()
    }

    pub fn save(&self) {
        let _ = confy::store(CONFY_APP_NAME, "ui", self);
    }
}

// Aggregate struct for convenience
pub struct Settings {
    pub display: DisplaySettings,
    pub colors: ColorSettings,
    pub ui: UiSettings,
}

impl Settings {
    pub fn load() -> Self {
        Self {
            display: DisplaySettings::load(),
            colors: ColorSettings::load(),
            ui: UiSettings::load(),
        }
    }
}
