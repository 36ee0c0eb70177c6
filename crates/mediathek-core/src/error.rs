//! Error types for mediathek-core

use std::path::PathBuf;

use thiserror::Error;

/// Core library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A required directory is missing and could not be created. Fatal for
    /// every caller that depends on settings persistence.
    #[error("could not create directory \"{}\": {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A computed path contains characters the host filesystem cannot
    /// represent.
    #[error("path \"{}\" is not valid on this filesystem", path.display())]
    InvalidPath { path: PathBuf },

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type alias using Error.
pub type Result<T> = std::result::Result<T, Error>;
