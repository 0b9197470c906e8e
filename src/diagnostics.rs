//! Diagnostics surfaced to the host build pipeline.
//!
//! Malformed input never crashes a generation pass; it becomes a diagnostic
//! attached to the offending declaration while unrelated locators proceed.

#[cfg(feature = "napi")]
use napi_derive::napi;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════════
// INVARIANT CODES
// ═══════════════════════════════════════════════════════════════════════════════

pub const INV_MALFORMED_LOCATOR: &str = "VL001";
pub const INV_DUPLICATE_SOURCE: &str = "VL002";
pub const INV_UNCONSTRUCTIBLE_CANDIDATE: &str = "VL003";
pub const INV_UNEMITTABLE_IDENTIFIER: &str = "VL004";

pub const SEVERITY_ERROR: &str = "error";
pub const SEVERITY_WARNING: &str = "warning";

// ═══════════════════════════════════════════════════════════════════════════════
// GUARANTEES
// ═══════════════════════════════════════════════════════════════════════════════

fn get_guarantee(code: &str) -> &'static str {
    match code {
        INV_MALFORMED_LOCATOR => {
            "A locator declaration is a concrete type open for generation."
        }
        INV_DUPLICATE_SOURCE => {
            "Each source type appears at most once per view table; the first-seen entry wins."
        }
        INV_UNCONSTRUCTIBLE_CANDIDATE => {
            "Every table entry is backed by an accessible parameterless constructor."
        }
        INV_UNEMITTABLE_IDENTIFIER => {
            "Emitted source text contains only well-formed path identifiers."
        }
        _ => "Unknown invariant.",
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// DIAGNOSTIC VALUE
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct LocatorDiagnostic {
    pub code: String,
    /// `error` blocks the build for the declaration it is attached to,
    /// `warning` does not.
    pub severity: String,
    pub message: String,
    pub guarantee: String,
    /// Qualified name of the declaration the diagnostic is attached to.
    pub declaration: String,
    pub hints: Vec<String>,
}

impl LocatorDiagnostic {
    pub fn error(code: &str, message: &str, declaration: &str) -> Self {
        Self::with_details(code, SEVERITY_ERROR, message, declaration, vec![])
    }

    pub fn warning(code: &str, message: &str, declaration: &str) -> Self {
        Self::with_details(code, SEVERITY_WARNING, message, declaration, vec![])
    }

    pub fn with_details(
        code: &str,
        severity: &str,
        message: &str,
        declaration: &str,
        hints: Vec<String>,
    ) -> Self {
        LocatorDiagnostic {
            code: code.to_string(),
            severity: severity.to_string(),
            message: message.to_string(),
            guarantee: get_guarantee(code).to_string(),
            declaration: declaration.to_string(),
            hints,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == SEVERITY_ERROR
    }
}
