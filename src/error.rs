use reqwest::StatusCode;
use thiserror::Error;

/// Closed error taxonomy for the download pipeline.
///
/// Every component converts failures into one of these kinds at the boundary
/// nearest their origin; callers decide whether to abort the current request
/// or log and continue with the next track.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure. The transport layer has already exhausted its
    /// retry budget by the time this surfaces.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a status the operation does not accept.
    #[error("unexpected status {0}")]
    Status(StatusCode),

    /// The service definitively has no matching data. Never retried.
    #[error("{0}")]
    Absence(&'static str),

    /// The response arrived but did not have the expected shape.
    #[error("unexpected response shape: {0}")]
    Shape(String),

    /// Local filesystem failure while writing audio, covers or settings.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Tag read/write failure on a downloaded file.
    #[error("tagging failed: {0}")]
    Tag(#[from] lofty::error::LoftyError),

    /// Missing or unusable configuration.
    #[error("configuration error: {0}")]
    Config(String),
}
