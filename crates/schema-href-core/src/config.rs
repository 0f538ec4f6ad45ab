//! Configuration for reference resolution.

use serde::{Deserialize, Serialize};

/// How the base location's scheme is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemeCheck {
    /// Compare the first four characters, case-insensitively, against `http`
    /// and `file`. Accepts `https` and anything else sharing those letters
    /// (e.g. `httpx:`, `files:`, or even `http` with no colon).
    #[default]
    Prefix,
    /// Parse the scheme token up to `:` and accept only `http`, `https`, and
    /// `file`. Behavior change relative to `Prefix`: opt-in only.
    Strict,
}

/// Options for reference resolution.
///
/// ## Serialization Format
///
/// Fields are serialized in `kebab-case` (e.g., `scheme-check`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ResolveOptions {
    /// Base location scheme policy. Default: `Prefix`.
    pub scheme_check: SchemeCheck,
}

impl ResolveOptions {
    /// Options using the given scheme policy.
    pub fn with_scheme_check(scheme_check: SchemeCheck) -> Self {
        Self { scheme_check }
    }
}
