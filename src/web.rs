//! # DID Web
//!
//! The `did:web` method uses a web domain's reputation to confer trust.
//!
//! See:
//!
//! - <https://w3c-ccg.github.io/did-method-web>
//! - <https://w3c.github.io/did-resolution>

mod did;
mod resolve;
mod url;
mod validate;

pub use self::did::DidWeb;
pub use self::resolve::{decode, decode_with, document_url};
pub use self::url::{default_did, encode, parse_url};
pub use self::validate::{validate, validate_with};

/// Prefix shared by every `did:web` identifier.
pub const PREFIX: &str = "did:web:";

/// Percent-escaped colon separating a host from its port.
pub const PORT_ESCAPE: &str = "%3A";
