//! Error taxonomy for API calls
//!
//! Every variant is terminal for the call that raised it; nothing is
//! retried internally. Failures are logged at warn level with the request
//! context before being surfaced.

use thiserror::Error;

/// Failure modes of one Skosmos API call.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller supplied a parameter of the wrong type for its schema.
    /// Raised locally, before any request is sent.
    #[error("expected parameter '{name}' value to be of type '{expected}', got '{actual}'")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Sending the HTTP request failed at the connection level
    /// (refused, timed out, malformed response line, ...).
    #[error("{method} request for '{url}' failed")]
    Transport {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server reported 400 Bad Request; carries the response body.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The server reported 404 Not Found; carries the response body.
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success status, or a success response whose body was
    /// not parseable as JSON when JSON was expected. Carries the status
    /// line and body.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The client was constructed without a REST API base URL.
    #[error("missing Skosmos REST API base URL")]
    MissingBaseUrl,

    /// The configured base URL is not a valid absolute URL.
    #[error("invalid Skosmos REST API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The underlying HTTP transport could not be initialized.
    #[error("failed to initialize HTTP transport")]
    TransportInit(#[source] reqwest::Error),
}
