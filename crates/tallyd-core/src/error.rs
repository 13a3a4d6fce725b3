//! Shared error type across tallyd crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Metric name missing (routing miss).
    NotFound,
    /// Unknown metric kind or unparseable value.
    BadRequest,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TallydError>;

/// Unified error type used by core and server.
///
/// The update path produces only `NotFound` and `BadRequest`; `Internal` is
/// reserved for server-side wiring (config load, bind) and never surfaces
/// from a store mutation — those are infallible once validation passes.
#[derive(Debug, Error)]
pub enum TallydError {
    #[error("not found")]
    NotFound,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl TallydError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            TallydError::NotFound => ClientCode::NotFound,
            TallydError::BadRequest(_) => ClientCode::BadRequest,
            TallydError::Internal(_) => ClientCode::Internal,
        }
    }
}
