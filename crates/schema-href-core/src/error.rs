//! Error types for reference resolution.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable, machine-readable error codes.
///
/// Variant names and their serialized `snake_case` strings are part of the
/// public contract: batch output and callers match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorCode {
    /// The base location failed the scheme check.
    InvalidBaseLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ResolveError {
    #[error("Current URI must be an absolute URL (\"{base}\")")]
    InvalidBaseLocation { base: String },
}

impl ResolveError {
    pub(crate) fn invalid_base(base: &str) -> Self {
        ResolveError::InvalidBaseLocation {
            base: base.to_string(),
        }
    }

    /// Returns the stable error code for this error variant.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ResolveError::InvalidBaseLocation { .. } => ErrorCode::InvalidBaseLocation,
        }
    }

    /// The base location that was rejected.
    pub fn base(&self) -> &str {
        match self {
            ResolveError::InvalidBaseLocation { base } => base,
        }
    }

    /// Produces a structured JSON error.
    ///
    /// Format: `{"code": "...", "message": "...", "base": "..."}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.error_code(),
            "message": self.to_string(),
            "base": self.base(),
        })
    }
}
