//! Strongly typed `did:web` identifiers.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use super::validate::method_specific_id;
use super::{PORT_ESCAPE, PREFIX};
use crate::{Error, Options, Result};

/// A validated `did:web` identifier.
///
/// The identifier is held as its domain segment and its path segments:
///
/// `did:web:<domain>[:<segment>]*`
///
/// where `<domain>` is a host optionally followed by `%3A` and a port.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DidWeb {
    domain: String,
    path: Vec<String>,
}

impl DidWeb {
    /// Parse a `did:web` identifier using the default [`Options`].
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier does not conform to the `did:web`
    /// grammar.
    pub fn parse(identifier: &str) -> Result<Self> {
        Self::parse_with(identifier, &Options::default())
    }

    /// Parse a `did:web` identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier does not conform to the `did:web`
    /// grammar under the provided options.
    pub fn parse_with(identifier: &str, options: &Options) -> Result<Self> {
        let id = method_specific_id(identifier, options)?;
        let mut segments = id.split(':');
        let domain = segments.next().unwrap_or_default().to_string();
        let path = segments.map(ToString::to_string).collect();
        Ok(Self { domain, path })
    }

    /// Build an identifier from parts already known to be well formed.
    pub(super) const fn from_parts(domain: String, path: Vec<String>) -> Self {
        Self { domain, path }
    }

    /// The domain segment, including any `%3A<port>` suffix.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The host part of the domain segment.
    #[must_use]
    pub fn host(&self) -> &str {
        self.domain.split_once(PORT_ESCAPE).map_or(self.domain.as_str(), |(host, _)| host)
    }

    /// The port encoded in the domain segment, if any and if numeric.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        let (_, port) = self.domain.split_once(PORT_ESCAPE)?;
        port.parse().ok()
    }

    /// Path segments, in order.
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The HTTPS URL the identifier was derived from.
    ///
    /// The scheme is always `https`. Only the first `%3A` in the domain is
    /// unescaped.
    #[must_use]
    pub fn to_url(&self) -> String {
        let mut url = format!("https://{}", self.domain.replacen(PORT_ESCAPE, ":", 1));
        if !self.path.is_empty() {
            url.push('/');
            url.push_str(&self.path.join("/"));
        }
        url
    }

    /// Location of the DID document for this identifier.
    #[must_use]
    pub fn document_url(&self) -> String {
        // 1. Convert the method-specific id to an HTTPS URL, percent decoding
        //    the port separator.
        let mut url = self.to_url();

        // 2. If no path has been specified, append /.well-known.
        if self.path.is_empty() {
            url.push_str("/.well-known");
        }

        // 3. Append /did.json to complete the URL.
        url.push_str("/did.json");
        url
    }
}

impl Display for DidWeb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{PREFIX}{}", self.domain)?;
        for segment in &self.path {
            write!(f, ":{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for DidWeb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&url::Url> for DidWeb {
    type Error = Error;

    fn try_from(url: &url::Url) -> Result<Self> {
        super::url::from_url(url)
    }
}

impl Serialize for DidWeb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DidWeb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_json_snapshot;

    use super::*;

    #[test]
    fn parse_with_port_and_path() {
        let did = DidWeb::parse("did:web:example.com%3A8443:issuers:1").expect("should parse");
        assert_eq!(did.domain(), "example.com%3A8443");
        assert_eq!(did.host(), "example.com");
        assert_eq!(did.port(), Some(8443));
        assert_eq!(did.path(), ["issuers", "1"]);
        assert_eq!(did.to_url(), "https://example.com:8443/issuers/1");
        assert_eq!(did.to_string(), "did:web:example.com%3A8443:issuers:1");
    }

    #[test]
    fn parse_domain_only() {
        let did: DidWeb = "did:web:example.com".parse().expect("should parse");
        assert_eq!(did.host(), "example.com");
        assert_eq!(did.port(), None);
        assert!(did.path().is_empty());
        assert_eq!(did.to_url(), "https://example.com");
    }

    #[test]
    fn non_numeric_port() {
        let did = DidWeb::parse("did:web:example.com%3Ahttps").expect("should parse");
        assert_eq!(did.host(), "example.com");
        assert_eq!(did.port(), None);
        assert_eq!(did.to_url(), "https://example.com:https");
    }

    #[test]
    fn document_location() {
        let did = DidWeb::parse("did:web:w3c-ccg.github.io").expect("should parse");
        assert_eq!(did.document_url(), "https://w3c-ccg.github.io/.well-known/did.json");

        let did = DidWeb::parse("did:web:w3c-ccg.github.io:user:alice").expect("should parse");
        assert_eq!(did.document_url(), "https://w3c-ccg.github.io/user/alice/did.json");

        let did = DidWeb::parse("did:web:example.com%3A3000:user:alice").expect("should parse");
        assert_eq!(did.document_url(), "https://example.com:3000/user/alice/did.json");
    }

    #[test]
    fn display_reproduces_input() {
        for input in ["did:web:example.com", "did:web:a%3A1:b:c", "did:web:example.com::x"] {
            let did = DidWeb::parse_with(input, &Options::lenient()).expect("should parse");
            assert_eq!(did.to_string(), input);
        }
    }

    #[test]
    fn serde_string_form() {
        #[derive(Serialize, Deserialize)]
        struct Issuer {
            id: DidWeb,
        }

        let issuer: Issuer =
            serde_json::from_str(r#"{"id":"did:web:credibil.io:issuers:example"}"#)
                .expect("should deserialize");
        assert_eq!(issuer.id.path(), ["issuers", "example"]);
        assert_json_snapshot!(issuer, @r#"
        {
          "id": "did:web:credibil.io:issuers:example"
        }
        "#);

        let err = serde_json::from_str::<Issuer>(r#"{"id":"did:key:z6Mk"}"#)
            .err()
            .expect("should fail");
        assert!(err.to_string().starts_with("method not supported: key"));
    }
}
