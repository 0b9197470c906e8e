//! Discovery Module for the Locator Generator
//!
//! Finds locator declarations in the symbol graph and enumerates the model
//! candidates each one will bind. Purely a function of the snapshot: identical
//! input yields the identical candidate list in the identical order.

use serde::{Deserialize, Serialize};

use crate::diagnostics::{
    LocatorDiagnostic, INV_MALFORMED_LOCATOR, INV_UNCONSTRUCTIBLE_CANDIDATE, SEVERITY_ERROR,
};
use crate::generate::{CancelFlag, GenerateFailure};
use crate::resolve::matches_model_convention;
use crate::symbols::{SymbolGraph, TypeDescriptor};

// ═══════════════════════════════════════════════════════════════════════════════
// POLICY
// ═══════════════════════════════════════════════════════════════════════════════

/// What to do with a convention-matching candidate that lacks an accessible
/// parameterless constructor. It is excluded either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnconstructiblePolicy {
    #[default]
    Silent,
    Diagnose,
}

// ═══════════════════════════════════════════════════════════════════════════════
// LOCATOR DETECTION
// ═══════════════════════════════════════════════════════════════════════════════

/// Every type carrying the binding-table capability, in graph order.
pub fn find_locators(graph: &SymbolGraph) -> Vec<&TypeDescriptor> {
    graph.types().iter().filter(|ty| ty.is_locator()).collect()
}

/// A locator must be concrete and open for generation; anything else is a
/// build-blocking diagnostic and the declaration is skipped.
pub fn validate_locator(locator: &TypeDescriptor) -> Option<LocatorDiagnostic> {
    if locator.is_abstract {
        return Some(LocatorDiagnostic::with_details(
            INV_MALFORMED_LOCATOR,
            SEVERITY_ERROR,
            &format!(
                "{} carries the binding-table capability but is abstract.",
                locator.qualified_name()
            ),
            &locator.qualified_name(),
            vec!["Declare the locator as a concrete type.".to_string()],
        ));
    }
    if !locator.open_for_generation {
        return Some(LocatorDiagnostic::with_details(
            INV_MALFORMED_LOCATOR,
            SEVERITY_ERROR,
            &format!(
                "{} carries the binding-table capability but is not open for generation.",
                locator.qualified_name()
            ),
            &locator.qualified_name(),
            vec![
                "Mark the declaration so the build pipeline can attach generated members."
                    .to_string(),
            ],
        ));
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════════
// CANDIDATE ENUMERATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Enumerates candidates for one locator: concrete, publicly constructible
/// types matching the model convention, restricted to the locator's own
/// compilation unit. The result is sorted by qualified name, byte-wise, so
/// table order never depends on snapshot iteration quirks.
pub fn scan_candidates<'graph>(
    graph: &'graph SymbolGraph,
    locator: &TypeDescriptor,
    policy: UnconstructiblePolicy,
    cancel: &CancelFlag,
    diagnostics: &mut Vec<LocatorDiagnostic>,
) -> Result<Vec<&'graph TypeDescriptor>, GenerateFailure> {
    let mut candidates = Vec::new();

    for ty in graph.types() {
        if cancel.is_cancelled() {
            return Err(GenerateFailure::Cancelled);
        }
        if !ty.from_current_unit || ty.is_abstract || !matches_model_convention(ty) {
            continue;
        }
        if !ty.is_constructible() {
            if policy == UnconstructiblePolicy::Diagnose {
                diagnostics.push(LocatorDiagnostic::warning(
                    INV_UNCONSTRUCTIBLE_CANDIDATE,
                    &format!(
                        "{} matches the model convention but has no accessible parameterless constructor; skipped.",
                        ty.qualified_name()
                    ),
                    &locator.qualified_name(),
                ));
            }
            continue;
        }
        candidates.push(ty);
    }

    // Stable sort: duplicate identities keep their graph order, so the table
    // builder sees the first declaration first.
    candidates.sort_by(|a, b| a.qualified_name().cmp(&b.qualified_name()));
    Ok(candidates)
}
