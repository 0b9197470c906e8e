//! Codegen module for the Locator Generator
//!
//! Renders one binding table as source text: an `impl` block on the locator
//! type whose `view_table` initializer builds the ordered mapping. Output is
//! byte-identical across passes over an unchanged snapshot.

use lazy_static::lazy_static;
#[cfg(feature = "napi")]
use napi_derive::napi;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::diagnostics::{LocatorDiagnostic, INV_UNEMITTABLE_IDENTIFIER};
use crate::symbols::TypeDescriptor;
use crate::table::{BindingStatus, BindingTable};

// ═══════════════════════════════════════════════════════════════════════════════
// OUTPUT TYPE
// ═══════════════════════════════════════════════════════════════════════════════

/// One generated source artifact, keyed by a stable hint name so the host
/// pipeline can merge it into the locator's own module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSource {
    pub hint_name: String,
    pub text: String,
}

// ═══════════════════════════════════════════════════════════════════════════════
// IDENTIFIER SAFETY
// ═══════════════════════════════════════════════════════════════════════════════

lazy_static! {
    static ref IDENT_RE: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

fn check_emittable(ty: &TypeDescriptor, locator_name: &str) -> Option<LocatorDiagnostic> {
    let bad = ty
        .namespace
        .iter()
        .chain(std::iter::once(&ty.name))
        .find(|segment| !IDENT_RE.is_match(segment));
    bad.map(|segment| {
        LocatorDiagnostic::error(
            INV_UNEMITTABLE_IDENTIFIER,
            &format!(
                "Segment \"{}\" of {} is not a valid path identifier; nothing emitted for {}.",
                segment,
                ty.qualified_name(),
                locator_name
            ),
            locator_name,
        )
    })
}

// ═══════════════════════════════════════════════════════════════════════════════
// EMITTER
// ═══════════════════════════════════════════════════════════════════════════════

/// Renders the table. On a malformed descriptor the locator emits nothing and
/// the error diagnostic is returned instead.
pub fn emit_view_table(table: &BindingTable) -> Result<GeneratedSource, LocatorDiagnostic> {
    let locator = table.locator();
    let locator_name = locator.qualified_name();

    if let Some(diag) = check_emittable(locator, &locator_name) {
        return Err(diag);
    }
    for entry in table.entries() {
        if let Some(diag) = check_emittable(&entry.source, &locator_name) {
            return Err(diag);
        }
        if let BindingStatus::Found { target } = &entry.status {
            if let Some(diag) = check_emittable(target, &locator_name) {
                return Err(diag);
            }
        }
    }

    let mut text = String::new();
    text.push_str("// <auto-generated/>\n");
    text.push_str(&format!(
        "// View table for {}. Rebuilt on every generation pass; do not edit.\n\n",
        locator_name
    ));
    text.push_str(&format!("impl {} {{\n", locator.emit_path()));
    text.push_str("    pub fn view_table() -> ::locator_native::runtime::ViewTable {\n");
    text.push_str(&format!(
        "        let mut table = ::locator_native::runtime::ViewTable::with_capacity({});\n",
        table.len()
    ));

    for entry in table.entries() {
        let source_path = entry.source.emit_path();
        match &entry.status {
            BindingStatus::Found { target } => {
                text.push_str(&format!(
                    "        table.insert::<{}>(|| ::std::boxed::Box::new(<{} as ::core::default::Default>::default()));\n",
                    source_path,
                    target.emit_path()
                ));
            }
            BindingStatus::Missing { expected_name } => {
                text.push_str(&format!(
                    "        table.insert::<{}>(|| ::std::boxed::Box::new(::locator_native::runtime::NotFoundView::new(\"Not Found: {}\")));\n",
                    source_path, expected_name
                ));
            }
        }
    }

    text.push_str("        table\n");
    text.push_str("    }\n");
    text.push_str("}\n");

    Ok(GeneratedSource {
        hint_name: format!("{}.view_table.g.rs", locator_name),
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{TypeDescriptor, CAP_GENERATES_BINDING_TABLE};
    use std::collections::BTreeSet;

    fn descriptor(namespace: &[&str], name: &str) -> TypeDescriptor {
        TypeDescriptor {
            namespace: namespace.iter().map(|s| s.to_string()).collect(),
            name: name.to_string(),
            is_abstract: false,
            is_public: true,
            has_parameterless_ctor: true,
            open_for_generation: true,
            from_current_unit: true,
            capabilities: BTreeSet::new(),
        }
    }

    fn sample_table() -> BindingTable {
        let mut locator = descriptor(&["App"], "ViewLocator");
        locator
            .capabilities
            .insert(CAP_GENERATES_BINDING_TABLE.to_string());
        let mut table = BindingTable::new(locator);
        table.push(
            descriptor(&["App", "ViewModels"], "MissingViewModel"),
            BindingStatus::Missing {
                expected_name: "App.Views.MissingView".to_string(),
            },
        );
        table.push(
            descriptor(&["App", "ViewModels"], "SampleViewModel"),
            BindingStatus::Found {
                target: descriptor(&["App", "Views"], "SampleView"),
            },
        );
        table
    }

    #[test]
    fn hint_name_is_stable_per_locator() {
        let source = emit_view_table(&sample_table()).unwrap();
        assert_eq!(source.hint_name, "App.ViewLocator.view_table.g.rs");
    }

    #[test]
    fn found_entries_construct_the_target_via_default() {
        let source = emit_view_table(&sample_table()).unwrap();
        assert!(source.text.contains(
            "table.insert::<App::ViewModels::SampleViewModel>(|| ::std::boxed::Box::new(<App::Views::SampleView as ::core::default::Default>::default()));"
        ));
    }

    #[test]
    fn missing_entries_construct_the_placeholder_verbatim() {
        let source = emit_view_table(&sample_table()).unwrap();
        assert!(source.text.contains(
            "::locator_native::runtime::NotFoundView::new(\"Not Found: App.Views.MissingView\")"
        ));
    }

    #[test]
    fn entries_are_emitted_in_table_order() {
        let source = emit_view_table(&sample_table()).unwrap();
        let missing = source.text.find("MissingViewModel").unwrap();
        let sample = source.text.find("SampleViewModel").unwrap();
        assert!(missing < sample);
    }

    #[test]
    fn impl_block_targets_the_locator_path() {
        let source = emit_view_table(&sample_table()).unwrap();
        assert!(source.text.starts_with("// <auto-generated/>\n"));
        assert!(source.text.contains("impl App::ViewLocator {\n"));
        assert!(source
            .text
            .contains("pub fn view_table() -> ::locator_native::runtime::ViewTable {"));
    }

    #[test]
    fn malformed_segments_abort_emission() {
        let mut table = BindingTable::new(descriptor(&["App"], "ViewLocator"));
        table.push(
            descriptor(&["App", "View-Models"], "SampleViewModel"),
            BindingStatus::Missing {
                expected_name: "App.View-Models.SampleView".to_string(),
            },
        );
        let err = emit_view_table(&table).unwrap_err();
        assert_eq!(err.code, INV_UNEMITTABLE_IDENTIFIER);
        assert!(err.is_error());
    }
}
