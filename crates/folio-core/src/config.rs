//! User configuration (`~/.folio/config.toml`)
//!
//! Every field is optional. A missing file yields the defaults; an unreadable
//! or malformed file is logged and also yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::nav::ENTRANCE_DELAY;
use crate::constants::ui::{DEFAULT_THEME, FRAME_INTERVAL, SCROLL_STEP};
use crate::error::ConfigError;
use crate::paths;
use crate::projects::ProjectCatalogue;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme name
    pub theme: String,
    /// Delay before the navbar entrance, in milliseconds
    pub entrance_delay_ms: u64,
    /// Event loop frame interval, in milliseconds
    pub frame_interval_ms: u64,
    /// Rows scrolled per key press or wheel notch
    pub scroll_step: u16,
    /// Optional TOML project list replacing the built-in catalogue
    pub projects_file: Option<PathBuf>,
    /// Where the RESUME button points; the button reports an error when unset
    pub resume_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            entrance_delay_ms: ENTRANCE_DELAY.as_millis() as u64,
            frame_interval_ms: FRAME_INTERVAL.as_millis() as u64,
            scroll_step: SCROLL_STEP,
            projects_file: None,
            resume_url: None,
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        let path = paths::config_file();
        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config file: {}", e);
                Self::default()
            }
        }
    }

    /// Load from a specific path; a missing file is not an error
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }

    /// Load a file named on the command line; it must exist
    pub fn load_explicit(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Missing {
                path: path.to_path_buf(),
            });
        }
        Self::load_from_path(path)
    }

    pub fn entrance_delay(&self) -> Duration {
        Duration::from_millis(self.entrance_delay_ms)
    }

    /// Frame interval, never zero
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }

    /// Scroll step, never zero
    pub fn scroll_step(&self) -> u16 {
        self.scroll_step.max(1)
    }

    /// Catalogue named by `projects_file`, or the built-in one
    ///
    /// A file that cannot be loaded is logged and the built-in list is used.
    pub fn catalogue(&self) -> ProjectCatalogue {
        let Some(path) = &self.projects_file else {
            return ProjectCatalogue::builtin().clone();
        };
        match ProjectCatalogue::load_from_path(path) {
            Ok(catalogue) => catalogue,
            Err(e) => {
                warn!("Falling back to built-in projects: {}", e);
                ProjectCatalogue::builtin().clone()
            }
        }
    }
}
