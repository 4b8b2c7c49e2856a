//! Grammar checks for `did:web` identifiers.

use super::PREFIX;
use crate::{Error, Options, Result, Strictness};

/// Check whether `identifier` is a well-formed `did:web` identifier using the
/// default [`Options`].
///
/// An identifier is accepted when it starts with `did:web:` and the remainder
/// has a non-empty first (domain) segment. Empty interior segments such as in
/// `did:web:example.com::issuers` are accepted unless strict validation is the
/// default (see [`Strictness`]).
#[must_use]
pub fn validate(identifier: &str) -> bool {
    validate_with(identifier, &Options::default())
}

/// Check whether `identifier` is a well-formed `did:web` identifier.
#[must_use]
pub fn validate_with(identifier: &str, options: &Options) -> bool {
    match method_specific_id(identifier, options) {
        Ok(_) => true,
        Err(e) => {
            tracing::trace!("rejected identifier {identifier:?}: {e}");
            false
        }
    }
}

/// Return the method-specific id of a `did:web` identifier (the text after
/// `did:web:`) once it has passed the grammar checks.
pub(super) fn method_specific_id<'a>(identifier: &'a str, options: &Options) -> Result<&'a str> {
    if identifier.is_empty() {
        return Err(Error::InvalidDid("empty identifier".into()));
    }

    let Some(id) = identifier.strip_prefix(PREFIX) else {
        return Err(match identifier.strip_prefix("did:").and_then(|rest| rest.split_once(':')) {
            Some((method, _)) if method != "web" => Error::MethodNotSupported(method.into()),
            _ => Error::InvalidDid(format!("missing `{PREFIX}` prefix")),
        });
    };
    if id.is_empty() {
        return Err(Error::InvalidDid("empty method-specific id".into()));
    }
    if id.starts_with(':') {
        return Err(Error::InvalidDid("empty domain segment".into()));
    }

    if options.strictness == Strictness::Strict {
        if let Some(pos) = id.split(':').position(str::is_empty) {
            return Err(Error::InvalidDid(format!("empty segment at position {pos}")));
        }
    }

    Ok(id)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("did:web:example.com", true)]
    #[case("did:web:example.com%3A8443:issuers:1", true)]
    #[case("did:web:localhost", true)]
    #[case("did:web:", false)]
    #[case("did:web", false)]
    #[case("did:web::issuers", false)]
    #[case("did:key:abc", false)]
    #[case("did:WEB:example.com", false)]
    #[case("DID:web:example.com", false)]
    #[case("https://example.com", false)]
    #[case("", false)]
    fn grammar(#[case] identifier: &str, #[case] expected: bool) {
        assert_eq!(validate_with(identifier, &Options::lenient()), expected);
        assert_eq!(validate_with(identifier, &Options::strict()), expected);
    }

    #[rstest]
    #[case("did:web:example.com::issuers")]
    #[case("did:web:example.com:issuers:")]
    #[case("did:web:example.com:")]
    fn empty_interior_segment(#[case] identifier: &str) {
        assert!(validate_with(identifier, &Options::lenient()));
        assert!(!validate_with(identifier, &Options::strict()));
    }

    #[test]
    fn rejection_reasons() {
        let opts = Options::strict();

        let err = method_specific_id("did:key:z6Mk", &opts).expect_err("should fail");
        assert_eq!(err, Error::MethodNotSupported("key".into()));

        let err = method_specific_id("did:web", &opts).expect_err("should fail");
        assert_eq!(err, Error::InvalidDid("missing `did:web:` prefix".into()));

        let err = method_specific_id("did:web:a::b", &opts).expect_err("should fail");
        assert_eq!(err, Error::InvalidDid("empty segment at position 1".into()));
    }

    #[test]
    fn returns_method_specific_id() {
        let id = method_specific_id("did:web:example.com:a", &Options::default())
            .expect("should validate");
        assert_eq!(id, "example.com:a");
    }
}
