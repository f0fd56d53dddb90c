use std::path::PathBuf;

use thiserror::Error;

use super::provider::LIBRARY_ENV;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open native library {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },
    #[error("symbol `Q_rsqrt` not found in {}", .path.display())]
    Symbol {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },
    #[error("could not determine the running executable's location")]
    CurrentExe(#[source] std::io::Error),
    #[error(
        "native library not found (searched {searched:?}); set {env} or pass --library",
        env = LIBRARY_ENV
    )]
    NotFound { searched: Vec<PathBuf> },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HarnessError {
    #[error("sample count must be at least 1")]
    EmptyRun,
}
