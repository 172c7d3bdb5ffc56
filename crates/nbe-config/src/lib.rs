use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "nbe.toml";

/// Examples root used when neither `--source` nor `nbe.toml` names one.
pub const DEFAULT_SOURCE: &str = "examples";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to expand source {value:?} in {config_path}: {source}")]
    ExpandError {
        config_path: PathBuf,
        value: String,
        source: shellexpand::LookupError<std::env::VarError>,
    },
}

/// Contents of `nbe.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Examples root as written in the file, before expansion.
    pub source: Option<String>,
}

impl Config {
    /// Reads `config_path`; a missing file is `Ok(None)`.
    pub fn load_from_path(config_path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match std::fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::ConfigReadError {
                    config_path: config_path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })
    }

    /// The configured examples root with `~` and `$VARS` expanded. A relative root is
    /// taken relative to the directory holding `config_path`.
    pub fn source_path(&self, config_path: &Path) -> Result<Option<PathBuf>, ConfigError> {
        let Some(value) = &self.source else {
            return Ok(None);
        };
        let expanded =
            shellexpand::full(value).map_err(|source| ConfigError::ExpandError {
                config_path: config_path.to_path_buf(),
                value: value.clone(),
                source,
            })?;

        let path = PathBuf::from(expanded.into_owned());
        Ok(Some(match config_path.parent() {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path,
        }))
    }
}

/// Where the examples root came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOrigin {
    Flag,
    ConfigFile(PathBuf),
    Default,
}

impl fmt::Display for SourceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceOrigin::Flag => f.write_str("--source"),
            SourceOrigin::ConfigFile(path) => write!(f, "{}", path.display()),
            SourceOrigin::Default => f.write_str("default"),
        }
    }
}

/// The resolved examples root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamplesSource {
    pub path: PathBuf,
    pub origin: SourceOrigin,
}

/// Picks the examples root: the `--source` flag, then `source` in `nbe.toml` found in
/// `dir`, then [`DEFAULT_SOURCE`] under `dir`.
pub fn resolve_source(flag: Option<PathBuf>, dir: &Path) -> Result<ExamplesSource, ConfigError> {
    if let Some(path) = flag {
        return Ok(ExamplesSource {
            path,
            origin: SourceOrigin::Flag,
        });
    }

    let config_path = dir.join(CONFIG_FILE);
    if let Some(config) = Config::load_from_path(&config_path)?
        && let Some(path) = config.source_path(&config_path)?
    {
        return Ok(ExamplesSource {
            path,
            origin: SourceOrigin::ConfigFile(config_path),
        });
    }

    Ok(ExamplesSource {
        path: dir.join(DEFAULT_SOURCE),
        origin: SourceOrigin::Default,
    })
}
