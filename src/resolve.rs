//! Name and Match Resolution
//!
//! The naming convention is fixed and non-configurable: a model type named
//! `*ViewModel` (or living under a `ViewModels` namespace segment) binds to
//! the display type obtained by substituting `ViewModels` -> `Views` in the
//! namespace path and the trailing `ViewModel` -> `View` in the simple name.

use crate::symbols::{SymbolGraph, TypeDescriptor, TypeKey};
use crate::table::BindingStatus;

// ═══════════════════════════════════════════════════════════════════════════════
// CONVENTION TOKENS
// ═══════════════════════════════════════════════════════════════════════════════

pub const MODEL_SUFFIX: &str = "ViewModel";
pub const VIEW_SUFFIX: &str = "View";
pub const MODEL_NAMESPACE_SEGMENT: &str = "ViewModels";
pub const VIEW_NAMESPACE_SEGMENT: &str = "Views";

/// A type matches the model convention if its simple name ends with the
/// model suffix or it resides under a `ViewModels` namespace segment.
/// Segment comparison is literal; `MyViewModels` does not match.
pub fn matches_model_convention(ty: &TypeDescriptor) -> bool {
    ty.name.ends_with(MODEL_SUFFIX)
        || ty.namespace.iter().any(|segment| segment == MODEL_NAMESPACE_SEGMENT)
}

// ═══════════════════════════════════════════════════════════════════════════════
// NAME RESOLVER
// ═══════════════════════════════════════════════════════════════════════════════

/// Expected identity of a display type, derived from a model type by the
/// substitution rule alone. Carries no information about whether it exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedView {
    pub namespace: Vec<String>,
    pub name: String,
}

impl ExpectedView {
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            return self.name.clone();
        }
        let mut out = self.namespace.join(".");
        out.push('.');
        out.push_str(&self.name);
        out
    }

    pub fn key(&self) -> TypeKey {
        TypeKey::new(self.qualified_name())
    }

    pub fn emit_path(&self) -> String {
        if self.namespace.is_empty() {
            return self.name.clone();
        }
        let mut out = self.namespace.join("::");
        out.push_str("::");
        out.push_str(&self.name);
        out
    }
}

/// Pure identity transform; performs no graph lookup.
pub fn expected_view(model: &TypeDescriptor) -> ExpectedView {
    let namespace = model
        .namespace
        .iter()
        .map(|segment| {
            if segment == MODEL_NAMESPACE_SEGMENT {
                VIEW_NAMESPACE_SEGMENT.to_string()
            } else {
                segment.clone()
            }
        })
        .collect();

    // Only the trailing occurrence of the singular token is substituted.
    let name = match model.name.strip_suffix(MODEL_SUFFIX) {
        Some(stem) => format!("{}{}", stem, VIEW_SUFFIX),
        None => model.name.clone(),
    };

    ExpectedView { namespace, name }
}

// ═══════════════════════════════════════════════════════════════════════════════
// MATCH RESOLVER
// ═══════════════════════════════════════════════════════════════════════════════

/// `Found` only on an exact identity match against a concrete, publicly
/// constructible type; anything else is `Missing` with the expected name.
pub fn resolve_view(graph: &SymbolGraph, expected: &ExpectedView) -> BindingStatus {
    match graph.lookup(&expected.key()) {
        Some(target) if !target.is_abstract && target.is_constructible() => BindingStatus::Found {
            target: target.clone(),
        },
        _ => BindingStatus::Missing {
            expected_name: expected.qualified_name(),
        },
    }
}
