use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Failed to load shared library {}: {source}", .path.display())]
    Library {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("Shared library {name} not found (searched: {})", join_paths(.searched))]
    LibraryNotFound { name: String, searched: Vec<PathBuf> },

    #[error("Symbol `{name}` not found in shared library: {source}")]
    Symbol {
        name: String,
        #[source]
        source: libloading::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn library(path: impl Into<PathBuf>, source: libloading::Error) -> Self {
        Self::Library {
            path: path.into(),
            source,
        }
    }

    /// `name` may carry the trailing NUL used for symbol lookup.
    pub fn symbol(name: &[u8], source: libloading::Error) -> Self {
        let name = name.strip_suffix(b"\0").unwrap_or(name);
        Self::Symbol {
            name: String::from_utf8_lossy(name).into_owned(),
            source,
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nothing".into();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, Error>;
