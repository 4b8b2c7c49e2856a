//! # Codec Options
//!
//! Validation behaviour is configured by passing [`Options`] explicitly to the
//! `*_with` variants of the codec functions. There is no process-wide state.

use serde::{Deserialize, Serialize};

/// Options controlling how `did:web` identifiers are validated.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// How empty segments in the method-specific identifier are treated.
    #[serde(default)]
    pub strictness: Strictness,
}

impl Options {
    /// Options that reject any empty segment.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            strictness: Strictness::Strict,
        }
    }

    /// Options that only require a non-empty first segment.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            strictness: Strictness::Lenient,
        }
    }
}

/// Segment checking applied to the method-specific identifier.
///
/// Identifiers such as `did:web:example.com::issuers` have an empty interior
/// segment. [`Strictness::Lenient`] accepts them so that identifiers issued
/// under the lenient grammar keep validating. Switching a deployment to
/// [`Strictness::Strict`] will cause such previously issued identifiers to be
/// rejected.
///
/// The default is lenient unless the `strict` feature is enabled.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Strictness {
    /// Only the first (domain) segment must be non-empty.
    Lenient,

    /// Every segment must be non-empty.
    Strict,
}

impl Default for Strictness {
    fn default() -> Self {
        if cfg!(feature = "strict") { Self::Strict } else { Self::Lenient }
    }
}
