//! # schema-href-core
//!
//! Resolves the location references found in schema documents (`import`,
//! `include`, `redefine` targets) against the location of the document that
//! contains them, following the decision rules of RFC 3986 §5.2.
//!
//! ```
//! use schema_href_core::resolve;
//!
//! let base = "http://example.com/schemas/order/order.xsd";
//! assert_eq!(
//!     resolve(base, "../common/types.xsd").unwrap(),
//!     "http://example.com/schemas/common/types.xsd"
//! );
//! assert_eq!(resolve(base, "#Order").unwrap(), format!("{base}#Order"));
//! assert!(resolve("ftp://example.com/x.xsd", "y.xsd").is_err());
//! ```
//!
//! Resolution is plain string manipulation: no I/O, no shared state, no
//! percent-encoding or host normalization. Only the base location is
//! validated; references are resolved best-effort.

pub mod canonical;
pub mod cleanup;
pub mod config;
mod engine;
pub mod error;
pub mod location;
pub mod reference;

pub use canonical::canonicalize_path;
pub use config::{ResolveOptions, SchemeCheck};
pub use error::{ErrorCode, ResolveError};
pub use location::BaseLocation;
pub use reference::ReferenceKind;

/// Resolve `reference` against the absolute location `base` with default
/// options.
///
/// ## Errors
///
/// Returns [`ResolveError::InvalidBaseLocation`] if `base` does not start
/// with `http` or `file` (case-insensitive, first four characters only).
pub fn resolve(base: &str, reference: &str) -> Result<String, ResolveError> {
    resolve_with(base, reference, &ResolveOptions::default())
}

/// Resolve `reference` against `base` using the given options.
pub fn resolve_with(
    base: &str,
    reference: &str,
    options: &ResolveOptions,
) -> Result<String, ResolveError> {
    let base = BaseLocation::parse(base, options.scheme_check)?;
    Ok(base.resolve(reference))
}
