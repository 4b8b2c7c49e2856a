//! Convert `did:web` identifiers back into HTTPS URLs.

use super::DidWeb;
use crate::Options;

/// Decode a `did:web` identifier into the HTTPS URL it was derived from.
///
/// The identifier is validated first using the default [`Options`]; `None` is
/// returned if validation fails.
///
/// ```
/// use vercre_didweb::decode;
///
/// let url = decode("did:web:example.com%3A8443:issuers:1");
/// assert_eq!(url.as_deref(), Some("https://example.com:8443/issuers/1"));
/// ```
#[must_use]
pub fn decode(identifier: &str) -> Option<String> {
    decode_with(identifier, &Options::default())
}

/// Decode a `did:web` identifier into an HTTPS URL, validating it with the
/// provided options.
#[must_use]
pub fn decode_with(identifier: &str, options: &Options) -> Option<String> {
    parse(identifier, options).map(|did| did.to_url())
}

/// Location of the DID document for a `did:web` identifier.
///
/// This is `<url>/did.json` when the identifier has a path and
/// `<url>/.well-known/did.json` when it does not.
#[must_use]
pub fn document_url(identifier: &str) -> Option<String> {
    parse(identifier, &Options::default()).map(|did| did.document_url())
}

fn parse(identifier: &str, options: &Options) -> Option<DidWeb> {
    match DidWeb::parse_with(identifier, options) {
        Ok(did) => Some(did),
        Err(e) => {
            tracing::debug!("cannot decode {identifier:?}: {e}");
            None
        }
    }
}
