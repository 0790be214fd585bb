use std::fmt;

/// Result type for commentlens-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug)]
pub enum Error {
    /// Export was requested before any payload was stored
    NoData,

    /// Export format outside json / csv / excel
    UnsupportedFormat(String),

    /// JSON encoding failed
    Json(serde_json::Error),

    /// CSV encoding failed
    Csv(csv::Error),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoData => write!(f, "No data to export"),
            Error::UnsupportedFormat(format) => write!(
                f,
                "Unsupported export format: {} (expected json, csv or excel)",
                format
            ),
            Error::Json(err) => write!(f, "JSON encoding error: {}", err),
            Error::Csv(err) => write!(f, "CSV encoding error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::NoData | Error::UnsupportedFormat(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
