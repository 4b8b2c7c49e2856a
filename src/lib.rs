//! # DID Web Codec
//!
//! Converts HTTPS URLs into `did:web` Decentralized Identifiers and back.
//!
//! The `did:web` method derives an identifier from the host, port and path of
//! a URL:
//!
//! ```text
//! https://example.com:8443/issuers/1  <->  did:web:example.com%3A8443:issuers:1
//! ```
//!
//! The top-level [`encode`], [`decode`] and [`validate`] functions are total:
//! malformed input yields `None` (or `false`) rather than an error. Callers
//! that need to know *why* input was rejected can use the fallible API in the
//! [`web`] module and the [`web::DidWeb`] type.
//!
//! All functions are pure and hold no global state, so they may be called
//! concurrently from any number of threads or tasks.
//!
//! See <https://w3c-ccg.github.io/did-method-web>.

mod error;
mod options;
pub mod web;

pub use self::error::{Error, Result};
pub use self::options::{Options, Strictness};
pub use self::web::{decode, decode_with, document_url, encode, validate, validate_with};
