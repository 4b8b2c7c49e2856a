//! # Errors
//!
//! Typed errors returned by the fallible half of the codec. The
//! `Option`-returning entry points ([`crate::encode`], [`crate::decode`]) and
//! the [`crate::validate`] predicate collapse these to "no result".

use thiserror::Error;

/// Result type for `did:web` codec operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised when converting between URLs and `did:web` identifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input could not be parsed as an absolute URL, or it has no host
    /// that can be carried by a `did:web` identifier.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The identifier does not conform to the `did:web` grammar.
    #[error("invalid DID: {0}")]
    InvalidDid(String),

    /// The identifier is a DID, but not a `did:web` one.
    #[error("method not supported: {0}")]
    MethodNotSupported(String),
}

impl Error {
    /// Short, machine-readable code for the error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_) => "invalid_url",
            Self::InvalidDid(_) => "invalid_did",
            Self::MethodNotSupported(_) => "method_not_supported",
        }
    }

    /// Transfer the error to `OAuth2` compatible format.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.code(),
            "error_description": self.to_string(),
        })
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}
