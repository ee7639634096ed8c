//! stepwise configuration.
//!
//! The config file is found through a chain:
//!
//! 1. `--config <path>`: explicit per-command override
//! 2. `STEPWISE_CONFIG` env var
//! 3. `~/.stepwise/config.toml`
//!
//! An explicit or env-provided path must exist. The home file is optional;
//! when it is missing, defaults apply.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// stepwise configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Substitute `${NAME}` placeholders with entry values when displaying.
    pub interpolate: bool,

    /// Markdown converter settings.
    pub markdown: MarkdownConfig,
}

/// Which comrak extensions markdown entries are rendered with.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct MarkdownConfig {
    pub tables: bool,
    pub strikethrough: bool,
    pub autolink: bool,
    pub tasklist: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            autolink: true,
            tasklist: true,
        }
    }
}

impl Config {
    /// Load config through the resolution chain.
    ///
    /// # Errors
    ///
    /// [`Error::ConfigNotFound`] when an explicit or `STEPWISE_CONFIG` path
    /// does not exist, [`Error::Config`] when the file is not valid TOML for
    /// this config, [`Error::Read`] for any other read failure.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let from_env = env::var_os("STEPWISE_CONFIG")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        Self::resolve(explicit, from_env.as_deref(), Self::default_path().as_deref())
    }

    /// Walk the chain with the env value and home path already looked up.
    fn resolve(
        explicit: Option<&Path>,
        from_env: Option<&Path>,
        home: Option<&Path>,
    ) -> Result<Self> {
        if let Some(path) = explicit.or(from_env) {
            return Self::load_from(path);
        }

        match home {
            Some(path) if path.exists() => Self::load_from(path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load config from a specific file, which must exist.
    ///
    /// # Errors
    ///
    /// [`Error::ConfigNotFound`] when the file is missing, [`Error::Config`]
    /// when it does not parse, [`Error::Read`] for any other read failure.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::ConfigNotFound(path.to_path_buf()));
            }
            Err(source) => {
                return Err(Error::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = toml::from_str(&contents).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// The default config file path: `~/.stepwise/config.toml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".stepwise").join("config.toml"))
    }
}
