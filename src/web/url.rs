//! Helper functions for converting HTTP URLs into `did:web` DIDs.

use std::fmt::Write;

use url::{Host, Url};

use super::{DidWeb, PORT_ESCAPE};
use crate::{Error, Result};

/// Encode a URL as a `did:web` identifier.
///
/// Returns `None` when no URL is provided, when the URL is empty or cannot be
/// parsed, or when its host or path cannot be carried by a `did:web`
/// identifier. A path segment containing `:` is rejected since `:` separates
/// segments in the identifier.
///
/// ```
/// use vercre_didweb::encode;
///
/// let did = encode(Some("https://example.com:8443/issuers/1"));
/// assert_eq!(did.as_deref(), Some("did:web:example.com%3A8443:issuers:1"));
/// ```
#[must_use]
pub fn encode(url: Option<&str>) -> Option<String> {
    let url = url.filter(|u| !u.is_empty())?;
    match default_did(url) {
        Ok(did) => Some(did.to_string()),
        Err(e) => {
            tracing::debug!("cannot encode {url:?} as did:web: {e}");
            None
        }
    }
}

/// Convert an HTTP URL into a host and path separated by colons suitable
/// for use in a `did:web` DID.
///
/// Valid examples:
/// - `https://example.com`
/// - `http://example.com/custom/path/`
/// - `https://example.com:8080`
///
/// # Errors
///
/// Will return an error if the url is not a valid URL or a host cannot be
/// parsed.
pub fn parse_url(url: &str) -> Result<String> {
    let did = default_did(url)?;
    let mut id = did.domain().to_string();
    for segment in did.path() {
        let _ = write!(id, ":{segment}");
    }
    Ok(id)
}

/// Construct a default `did:web` DID from a URL.
///
/// The output is a `did:web` DID with the path converted from the provided
/// HTTP URL. See [`parse_url`] for more information.
///
/// # Errors
///
/// Will return an error if the url is not a valid URL or a host cannot be
/// parsed.
pub fn default_did(url: &str) -> Result<DidWeb> {
    let url = Url::parse(url)?;
    from_url(&url)
}

pub(super) fn from_url(url: &Url) -> Result<DidWeb> {
    let host = match url.host() {
        None => return Err(Error::InvalidUrl("no host in url".into())),
        Some(Host::Ipv6(_)) => {
            return Err(Error::InvalidUrl("IPv6 hosts cannot be encoded".into()));
        }
        Some(_) => url.host_str().unwrap_or_default(),
    };
    if host.is_empty() {
        return Err(Error::InvalidUrl("empty host in url".into()));
    }

    let mut domain = host.to_string();
    if let Some(port) = url.port() {
        let _ = write!(domain, "{PORT_ESCAPE}{port}");
    }

    // repeated, leading, and trailing slashes collapse
    let mut path = Vec::new();
    for segment in url.path().split('/').filter(|s| !s.is_empty()) {
        // `:` separates segments in the identifier
        if segment.contains(':') {
            return Err(Error::InvalidUrl(format!("path segment {segment:?} contains ':'")));
        }
        path.push(segment.to_string());
    }

    Ok(DidWeb::from_parts(domain, path))
}
