use std::path::PathBuf;

/// Alias for `Result<T, ZooError>`.
pub type ZooResult<T> = Result<T, ZooError>;

/// Errors that can occur while configuring or rendering a demo.
#[derive(Debug, thiserror::Error)]
pub enum ZooError {
    /// A defaults file could not be read.
    #[error("cannot read defaults file {}: {source}", path.display())]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A defaults document is not valid JSON or has unknown keys.
    #[error("invalid defaults: {0}")]
    InvalidDefaults(#[source] serde_json::Error),

    /// A printed value could not be rendered as JSON.
    #[error("cannot render output: {0}")]
    Render(#[source] serde_json::Error),

    /// The requested output format is not supported.
    #[error("unknown format: {0} (expected text or json)")]
    UnknownFormat(String),
}
