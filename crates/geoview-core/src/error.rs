// crates/geoview-core/src/error.rs

use thiserror::Error;

/// Host-level failures: a missing container, unreadable config, a surface that
/// refused a mutation.
#[derive(Debug, Error)]
pub enum GeoViewError {
    /// The page container was not found. This is a startup precondition.
    #[error("container element #{0} not found")]
    MissingContainer(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A host surface failed to apply a mutation (e.g. a DOM call threw).
    #[error("surface error: {0}")]
    Surface(String),

    /// A loader operation was called in the wrong state (loads are one-shot).
    #[error("loader is {actual}, expected {expected}")]
    InvalidState {
        expected: &'static str,
        actual: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, GeoViewError>;

/// Why a GeoJSON load ended in `Failed`.
///
/// A valid JSON document that is not a FeatureCollection is not an error; it
/// takes the fallback path instead.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A response arrived but its status is outside 200–299. The body is
    /// never parsed in this case.
    #[error("Fetch failed: {code} {text}")]
    HttpStatus { code: u16, text: String },

    /// The body arrived but is not valid JSON.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// The request could not complete at all.
    ///
    /// `generic` marks the unspecific "network-type" failure a browser reports
    /// for blocked or unreachable requests (a `TypeError` from `fetch`).
    #[error("{message}")]
    Network { message: String, generic: bool },
}

impl LoadError {
    /// True for the unspecific network failure that, on a file origin,
    /// usually means the request was blocked.
    pub fn is_generic_network(&self) -> bool {
        matches!(self, LoadError::Network { generic: true, .. })
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            LoadError::HttpStatus { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<crate::transport::TransportError> for LoadError {
    fn from(e: crate::transport::TransportError) -> Self {
        LoadError::Network {
            message: e.message,
            generic: e.generic,
        }
    }
}
