use checklist_core::{Checklist, ErrorCode};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Errors raised while locating or parsing `todo.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Machine-readable code associated with this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { .. } | Self::Read { .. } => ErrorCode::ConfigNotFound,
            Self::Parse { .. } => ErrorCode::ConfigParseError,
        }
    }
}

/// Settings for one to-do panel, read from `todo.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_checked_icon")]
    pub checked_icon: String,
    #[serde(default = "default_unchecked_icon")]
    pub unchecked_icon: String,
    /// Sort the seeded items by text once at startup.
    #[serde(default)]
    pub sort_on_load: bool,
    #[serde(default)]
    pub items: Vec<SeedItem>,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            checked_icon: default_checked_icon(),
            unchecked_icon: default_unchecked_icon(),
            sort_on_load: false,
            items: Vec::new(),
        }
    }
}

/// An entry placed in the list at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedItem {
    pub text: String,
    #[serde(default)]
    pub checked: bool,
}

fn default_title() -> String {
    "todo".to_string()
}

fn default_checked_icon() -> String {
    "x".to_string()
}

fn default_unchecked_icon() -> String {
    " ".to_string()
}

impl TodoConfig {
    /// Build the panel's checklist from this config.
    ///
    /// Items are added in file order, so the last entry ends up on top.
    #[must_use]
    pub fn build_checklist(&self) -> Checklist {
        let mut list = Checklist::new(self.checked_icon.as_str(), self.unchecked_icon.as_str());
        for seed in &self.items {
            list.add(seed.checked, seed.text.as_str());
        }
        if self.sort_on_load {
            list.sort_stable();
        }
        debug!(items = list.len(), sorted = self.sort_on_load, "checklist seeded");
        list
    }
}

/// Parse a config file.
pub fn load_config(path: &Path) -> Result<TodoConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str::<TodoConfig>(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Default config location: `<config_dir>/checklist/todo.toml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("checklist/todo.toml"))
}

/// Resolve the effective config.
///
/// Precedence:
/// 1. `explicit` (`--config`); a missing file is an error.
/// 2. `fallback` (normally [`default_config_path`]) when that file exists.
/// 3. Built-in defaults.
pub fn resolve_config(
    explicit: Option<&Path>,
    fallback: Option<&Path>,
) -> Result<TodoConfig, ConfigError> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        info!(path = %path.display(), "loading config");
        return load_config(path);
    }

    match fallback {
        Some(path) if path.exists() => {
            info!(path = %path.display(), "loading config");
            load_config(path)
        }
        _ => {
            debug!("no config file, using defaults");
            Ok(TodoConfig::default())
        }
    }
}
