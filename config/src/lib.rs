//! `~/.showcase/config.toml` loading.
//!
//! A missing file is not an error: every field has a default and callers
//! fall back to them. Read and parse failures are returned with the offending
//! path so the caller can tell the user which file to fix.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use showcase_types::UiOptions;

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "SHOWCASE_CONFIG";
/// Forces ASCII markers when set to anything but `0`/`false`/`off`/`no`.
pub const ASCII_ENV: &str = "SHOWCASE_ASCII";

const fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ShowcaseConfig {
    pub app: Option<AppConfig>,
    pub catalog: Option<CatalogConfig>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// ASCII status markers instead of check marks.
    #[serde(default)]
    pub ascii_only: bool,
    #[serde(default)]
    pub high_contrast: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// Include the deliberately failing widgets.
    #[serde(default = "default_true")]
    pub include_faulty: bool,
    /// Section headings to show. Empty shows every section.
    #[serde(default)]
    pub sections: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            include_faulty: true,
            sections: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl ShowcaseConfig {
    /// Loads the config from [`ShowcaseConfig::path`].
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Loads the config at `path`. `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Failed to read config");
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Failed to parse config");
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// `$SHOWCASE_CONFIG`, else `~/.showcase/config.toml`.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        if let Some(custom) = env::var_os(CONFIG_ENV).filter(|value| !value.is_empty()) {
            return Some(PathBuf::from(custom));
        }
        dirs::home_dir().map(|home| home.join(".showcase").join("config.toml"))
    }

    /// Display options from `[app]`, with `$SHOWCASE_ASCII` applied.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options_with(env::var(ASCII_ENV).ok().as_deref())
    }

    fn ui_options_with(&self, ascii_env: Option<&str>) -> UiOptions {
        let app = self.app.clone().unwrap_or_default();
        UiOptions {
            ascii_only: app.ascii_only || ascii_env.is_some_and(env_flag_enabled),
            high_contrast: app.high_contrast,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> CatalogConfig {
        self.catalog.clone().unwrap_or_default()
    }
}

fn env_flag_enabled(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "off" | "no"
    )
}
