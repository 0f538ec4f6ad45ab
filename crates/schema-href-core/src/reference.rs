//! Reference classification.
//!
//! A reference is sorted into exactly one [`ReferenceKind`]. Rules are tried
//! in declaration order and the first match wins, so `//host` is
//! scheme-relative rather than path-absolute and `http:x` is absolute rather
//! than path-relative.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// RFC 3986 `scheme ":"` prefix.
const SCHEME_PATTERN: &str = r"^([A-Za-z][A-Za-z0-9+.\-]*):";

fn scheme_regex() -> &'static Regex {
    static SCHEME: OnceLock<Regex> = OnceLock::new();
    SCHEME.get_or_init(|| Regex::new(SCHEME_PATTERN).expect("SCHEME_PATTERN is a valid regex"))
}

/// The scheme token of `location`, without the trailing `:`.
pub(crate) fn scheme_of(location: &str) -> Option<&str> {
    scheme_regex()
        .captures(location)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Strips the characters surrounding a reference that carry no meaning:
/// space, `\t`, `\n`, `\r`, NUL and vertical tab. Other Unicode whitespace
/// (e.g. U+00A0) is kept.
pub(crate) fn trim_reference(reference: &str) -> &str {
    reference.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B'))
}

/// Shape of a reference, in classification order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceKind {
    /// Empty or whitespace only.
    Empty,
    /// Carries its own `scheme:`.
    Absolute,
    /// Starts with `#`.
    Anchor,
    /// Starts with `?`.
    Query,
    /// Starts with `//`.
    SchemeRelative,
    /// Starts with a single `/`.
    PathAbsolute,
    /// Anything else.
    PathRelative,
}

impl ReferenceKind {
    /// Classifies `reference` after trimming surrounding whitespace and NULs.
    pub fn classify(reference: &str) -> Self {
        let reference = trim_reference(reference);

        if reference.is_empty() {
            ReferenceKind::Empty
        } else if scheme_regex().is_match(reference) {
            ReferenceKind::Absolute
        } else if reference.starts_with('#') {
            ReferenceKind::Anchor
        } else if reference.starts_with('?') {
            ReferenceKind::Query
        } else if reference.starts_with("//") {
            ReferenceKind::SchemeRelative
        } else if reference.starts_with('/') {
            ReferenceKind::PathAbsolute
        } else {
            ReferenceKind::PathRelative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::Empty => "empty",
            ReferenceKind::Absolute => "absolute",
            ReferenceKind::Anchor => "anchor",
            ReferenceKind::Query => "query",
            ReferenceKind::SchemeRelative => "scheme-relative",
            ReferenceKind::PathAbsolute => "path-absolute",
            ReferenceKind::PathRelative => "path-relative",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
