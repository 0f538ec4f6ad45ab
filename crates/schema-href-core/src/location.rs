//! Validated base locations.

use std::fmt;

use crate::config::SchemeCheck;
use crate::engine;
use crate::error::ResolveError;
use crate::reference::scheme_of;

/// Schemes a base location may carry under [`SchemeCheck::Strict`].
const STRICT_SCHEMES: [&str; 3] = ["http", "https", "file"];

/// An absolute location that passed the scheme check.
///
/// Parse once per document, then resolve every import/include of that
/// document against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaseLocation<'a>(&'a str);

impl<'a> BaseLocation<'a> {
    /// Validates `base` under the given scheme policy.
    ///
    /// ## Errors
    ///
    /// Returns [`ResolveError::InvalidBaseLocation`] when the scheme check fails.
    pub fn parse(base: &'a str, check: SchemeCheck) -> Result<Self, ResolveError> {
        if has_allowed_scheme(base, check) {
            Ok(Self(base))
        } else {
            tracing::debug!(base, ?check, "rejected base location");
            Err(ResolveError::invalid_base(base))
        }
    }

    /// Resolves `reference` against this base. Never fails.
    pub fn resolve(&self, reference: &str) -> String {
        engine::resolve_against(self.0, reference)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl fmt::Display for BaseLocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for BaseLocation<'_> {
    fn as_ref(&self) -> &str {
        self.0
    }
}

fn has_allowed_scheme(base: &str, check: SchemeCheck) -> bool {
    match check {
        SchemeCheck::Prefix => base
            .as_bytes()
            .get(..4)
            .is_some_and(|prefix| {
                prefix.eq_ignore_ascii_case(b"http") || prefix.eq_ignore_ascii_case(b"file")
            }),
        SchemeCheck::Strict => scheme_of(base).is_some_and(|scheme| {
            STRICT_SCHEMES
                .iter()
                .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
        }),
    }
}
