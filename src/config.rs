use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "safe-arith.toml";

/// Environment variable naming the shared library to load.
pub const LIBRARY_ENV: &str = "SAFE_ARITH_LIB";

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the dynamic variant finds the shared library.
#[derive(Debug, Clone, Deserialize)]
pub struct LibraryConfig {
    /// Explicit path to the shared object. Takes precedence over `SAFE_ARITH_LIB`.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Library stem, turned into the platform file name (`lib<name>.so`, `<name>.dll`).
    #[serde(default = "default_library_name")]
    pub name: String,
    /// Directories searched for the platform file name. The executable's own
    /// directory is always searched last.
    #[serde(default)]
    pub search_dirs: Vec<PathBuf>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            path: None,
            name: default_library_name(),
            search_dirs: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

// Defaults
fn default_library_name() -> String {
    "safe_arith".into()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config {}: {e}", path.display())))?;
        toml::from_str(&content).map_err(|e| Error::config(format!("Failed to parse config: {e}")))
    }

    /// Load `path` if given, otherwise [`DEFAULT_CONFIG_PATH`] when it exists,
    /// otherwise defaults. An explicitly named file must exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    Self::load(default)?
                } else {
                    tracing::debug!("no {DEFAULT_CONFIG_PATH} found, using defaults");
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.library.name.trim().is_empty() {
            return Err(Error::config("library.name must not be empty"));
        }
        if self.library.path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            return Err(Error::config("library.path must not be empty when set"));
        }
        Ok(())
    }
}
