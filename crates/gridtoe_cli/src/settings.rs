//! Front-end settings loaded from TOML.

use derive_getters::Getters;
use gridtoe::{ConfigError, HumanMark, Mode};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for an interactive session.
///
/// ```toml
/// mode = "three-by-eight"
/// human = "random"
/// ai = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Board mode the session starts in.
    #[serde(default)]
    mode: Mode,

    /// Mark the human plays.
    #[serde(default)]
    human: HumanMark,

    /// Whether the computer takes the other mark.
    #[serde(default = "default_ai")]
    ai: bool,
}

fn default_ai() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            human: HumanMark::default(),
            ai: default_ai(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(mode = %settings.mode, human = %settings.human, ai = settings.ai, "Loaded settings");
        Ok(settings)
    }

    /// Loads `path` when given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of the loaded values.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, mode: Option<Mode>, human: Option<HumanMark>, no_ai: bool) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(human) = human {
            self.human = human;
        }
        if no_ai {
            self.ai = false;
        }
        self
    }
}
