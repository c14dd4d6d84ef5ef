use std::path::PathBuf;

/// Errors that can occur while converting a URL or image into menu JSON.
///
/// Carried inside the form state, so every variant is cheap to clone and
/// compare; underlying errors are kept as their messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Neither an image nor a URL was given.
    #[error("no image or URL to convert")]
    NoInputProvided,

    /// A conversion is already running.
    #[error("a conversion is already in progress")]
    InFlight,

    /// The request could not be sent or the response could not be read.
    #[error("conversion request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("conversion service returned HTTP {0}")]
    Status(u16),

    /// The service answered without a `json` payload.
    #[error("conversion service returned no menu data")]
    MissingPayload,

    /// The picked image could not be read from disk.
    #[error("could not read image {path}: {reason}")]
    ImageRead {
        /// The image that failed to load.
        path: PathBuf,
        /// The underlying I/O error message.
        reason: String,
    },
}

impl From<reqwest::Error> for ConversionError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Status(status.as_u16()),
            None => Self::Transport(err.to_string()),
        }
    }
}
