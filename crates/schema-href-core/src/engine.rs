//! Reference resolution against an already validated base location.
//!
//! Each [`ReferenceKind`] maps to one composition rule:
//!
//! | Kind | Result |
//! |---|---|
//! | `Empty` | base, untouched |
//! | `Absolute` | reference, untouched |
//! | `Anchor`, `Query` | base without query/anchor + reference |
//! | `SchemeRelative` | base scheme (`http:`) + reference |
//! | `PathAbsolute` | base origin (`http://host`) + reference |
//! | `PathRelative` | base origin + canonical(base directory + `/` + reference) |

use crate::canonical::canonicalize_path;
use crate::cleanup::strip_query_and_anchor;
use crate::reference::{trim_reference, ReferenceKind};

/// Resolves `reference` against `base`. The base scheme must already have
/// been checked; see [`crate::BaseLocation`].
pub(crate) fn resolve_against(base: &str, reference: &str) -> String {
    let reference = trim_reference(reference);
    let kind = ReferenceKind::classify(reference);
    tracing::trace!(base, reference, kind = %kind, "classified reference");

    let resolved = match kind {
        ReferenceKind::Empty => base.to_string(),
        ReferenceKind::Absolute => reference.to_string(),
        ReferenceKind::Anchor | ReferenceKind::Query => {
            format!("{}{}", strip_query_and_anchor(base), reference)
        }
        ReferenceKind::SchemeRelative => {
            format!("{}{}", scheme_prefix(strip_query_and_anchor(base)), reference)
        }
        ReferenceKind::PathAbsolute => {
            format!("{}{}", origin(strip_query_and_anchor(base)), reference)
        }
        ReferenceKind::PathRelative => merge_relative(base, reference),
    };

    tracing::trace!(resolved = %resolved, "resolved reference");
    resolved
}

/// `http:` out of `http://host/path`: everything before the first `/`, when
/// that slash opens a `//`. Otherwise the whole location.
fn scheme_prefix(location: &str) -> &str {
    match location.find('/') {
        Some(pos) if location[pos..].starts_with("//") => &location[..pos],
        _ => location,
    }
}

/// `http://host` out of `http://host/path`: the location cut at the first `/`
/// after its `//`. A location without `//` is its own origin.
fn origin(location: &str) -> &str {
    let Some(delim) = location.find("//") else {
        return location;
    };
    let authority_start = delim + 2;
    match location[authority_start..].find('/') {
        Some(pos) => &location[..authority_start + pos],
        None => location,
    }
}

fn merge_relative(base: &str, reference: &str) -> String {
    let origin = origin(strip_query_and_anchor(base));

    // The origin is a prefix of the cleaned base, which is a prefix of base.
    let path = strip_query_and_anchor(&base[origin.len()..]);
    let directory = match path.rfind('/') {
        Some(pos) => &path[..pos],
        None => "",
    };

    let path = canonicalize_path(&format!("{directory}/{reference}"));
    if path.is_empty() || !path.starts_with('/') {
        format!("{origin}/{path}")
    } else {
        format!("{origin}{path}")
    }
}
