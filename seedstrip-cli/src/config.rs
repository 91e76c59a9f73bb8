//! Configuration file loading for seedstrip.
//!
//! Discovers and loads `seedstrip.toml` from the root directory, or from an
//! explicit `--config` path. Falls back to the built-in preset when neither
//! exists.

use crate::preset;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use seedstrip_types::StripConfig;
use std::fmt;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "seedstrip.toml";

/// Where the effective target list came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(Utf8PathBuf),
    Builtin,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path),
            ConfigSource::Builtin => f.write_str("built-in preset"),
        }
    }
}

/// Discover the seedstrip.toml config file.
///
/// Searches for `seedstrip.toml` in the root directory.
/// Returns `None` if no config file is found.
pub fn discover_config(root: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a seedstrip.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<StripConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<StripConfig> {
    let config: StripConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Resolve the effective, validated configuration.
///
/// An explicit path must exist. Otherwise `<root>/seedstrip.toml` is used if
/// present, and the built-in preset if not.
pub fn resolve(
    root: &Utf8Path,
    explicit: Option<&Utf8Path>,
) -> anyhow::Result<(StripConfig, ConfigSource)> {
    let (config, source) = match explicit {
        Some(path) => (load_config(path)?, ConfigSource::File(path.to_path_buf())),
        None => match discover_config(root) {
            Some(path) => (load_config(&path)?, ConfigSource::File(path)),
            None => (preset::crm_demo_data(), ConfigSource::Builtin),
        },
    };

    config
        .validate()
        .with_context(|| format!("invalid target configuration in {}", source))?;

    debug!(
        "using {} with {} targets, {} declarations",
        source,
        config.targets.len(),
        config.declaration_count()
    );
    Ok((config, source))
}
