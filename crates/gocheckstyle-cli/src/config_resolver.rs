//! Configuration file resolution with global fallback.
//!
//! Resolves the configuration file path using a deterministic priority order:
//!
//! 1. `--config` flag (explicit path)
//! 2. `{dir}/gocheckstyle.json`, `.gocheckstyle.json` or `gocheckstyle.toml`
//! 3. `config.json` or `config.toml` in `$GOCHECKSTYLE_CONFIG_DIR` or
//!    `~/.gocheckstyle/` (global fallback)
//! 4. No config found → built-in default

use anyhow::{Context, Result};
use gocheckstyle::Config;
use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the working directory.
    Project(PathBuf),
    /// Loaded from the global config directory (`~/.gocheckstyle/`).
    Global(PathBuf),
    /// No config found; the built-in default is used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` if the config was loaded from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }

    /// Loads the configuration this source points at.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            tracing::info!("No config file found, using built-in defaults");
            return Ok(gocheckstyle::rules::default_config());
        };

        if self.is_global() {
            tracing::info!("Using global config: {}", path.display());
        } else {
            tracing::info!("Using config: {}", path.display());
        }
        Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// Project-level config file names, checked in order.
pub const PROJECT_CONFIG_NAMES: &[&str] = &[
    "gocheckstyle.json",
    ".gocheckstyle.json",
    "gocheckstyle.toml",
];

/// Config file names within the global config directory, checked in order.
const GLOBAL_CONFIG_NAMES: &[&str] = &["config.json", "config.toml"];

/// Resolves the configuration file path.
///
/// See module-level docs for resolution order.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(project_dir, explicit, global_config_dir().as_deref())
}

fn resolve_inner(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<&Path>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = first_file(project_dir, PROJECT_CONFIG_NAMES) {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    match global_dir.and_then(|dir| first_file(dir, GLOBAL_CONFIG_NAMES)) {
        Some(found) => {
            tracing::debug!("Found global config: {}", found.display());
            ConfigSource::Global(found)
        }
        None => ConfigSource::Default,
    }
}

/// First of `names` inside `dir` that is a regular file.
fn first_file(dir: &Path, names: &[&str]) -> Option<PathBuf> {
    names
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Returns the global config directory path.
///
/// `$GOCHECKSTYLE_CONFIG_DIR` if set, otherwise `~/.gocheckstyle/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    std::env::var_os("GOCHECKSTYLE_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".gocheckstyle")))
}
