//! Generation pipeline
//!
//! One pass per locator declaration: scan candidates, resolve each one, build
//! the table, emit the source text. A pass is a pure function of
//! (symbol graph, locator identity, options); nothing is shared or retained
//! between invocations, so the host may run passes in parallel.

#[cfg(feature = "napi")]
use napi_derive::napi;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::codegen::{emit_view_table, GeneratedSource};
use crate::diagnostics::LocatorDiagnostic;
use crate::discovery::{find_locators, scan_candidates, validate_locator, UnconstructiblePolicy};
use crate::resolve::{expected_view, resolve_view};
use crate::symbols::{SymbolGraph, TypeDescriptor, TypeKey};
use crate::table::BindingTable;

// ═══════════════════════════════════════════════════════════════════════════════
// CANCELLATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Cooperative cancellation signal, checked once per candidate. A cancelled
/// pass yields no output at all, never a partial table.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// OPTIONS & RESULTS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateOptions {
    pub unconstructible: UnconstructiblePolicy,
}

/// Outcome of one locator pass. `source` is `None` when the declaration was
/// malformed or unemittable; the reason is in `diagnostics`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatorOutput {
    pub source: Option<GeneratedSource>,
    pub diagnostics: Vec<LocatorDiagnostic>,
}

/// Outcome of a whole-graph pass, locator results flattened in graph order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct GenerateResult {
    pub sources: Vec<GeneratedSource>,
    pub diagnostics: Vec<LocatorDiagnostic>,
}

/// Failures of the pass itself, as opposed to diagnostics about the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateFailure {
    Cancelled,
    UnknownLocator(TypeKey),
}

impl fmt::Display for GenerateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateFailure::Cancelled => write!(f, "generation pass was cancelled"),
            GenerateFailure::UnknownLocator(key) => {
                write!(f, "no locator declaration named {} in the symbol graph", key)
            }
        }
    }
}

impl std::error::Error for GenerateFailure {}

// ═══════════════════════════════════════════════════════════════════════════════
// PIPELINE
// ═══════════════════════════════════════════════════════════════════════════════

/// Generates the view table for one locator declaration identified by key.
pub fn generate(
    graph: &SymbolGraph,
    locator: &TypeKey,
    options: &GenerateOptions,
    cancel: &CancelFlag,
) -> Result<LocatorOutput, GenerateFailure> {
    let declaration = graph
        .lookup(locator)
        .filter(|ty| ty.is_locator())
        .ok_or_else(|| GenerateFailure::UnknownLocator(locator.clone()))?;
    generate_for_locator(graph, declaration, options, cancel)
}

/// Generates view tables for every locator declaration in the graph. Passes
/// run in parallel; results come back in locator graph order regardless of
/// scheduling.
pub fn generate_all(
    graph: &SymbolGraph,
    options: &GenerateOptions,
    cancel: &CancelFlag,
) -> Result<GenerateResult, GenerateFailure> {
    let outputs: Result<Vec<LocatorOutput>, GenerateFailure> = find_locators(graph)
        .par_iter()
        .map(|declaration| generate_for_locator(graph, declaration, options, cancel))
        .collect();

    let mut result = GenerateResult::default();
    for output in outputs? {
        if let Some(source) = output.source {
            result.sources.push(source);
        }
        result.diagnostics.extend(output.diagnostics);
    }
    Ok(result)
}

fn generate_for_locator(
    graph: &SymbolGraph,
    declaration: &TypeDescriptor,
    options: &GenerateOptions,
    cancel: &CancelFlag,
) -> Result<LocatorOutput, GenerateFailure> {
    if let Some(diag) = validate_locator(declaration) {
        return Ok(LocatorOutput {
            source: None,
            diagnostics: vec![diag],
        });
    }

    let mut diagnostics = Vec::new();
    let candidates = scan_candidates(
        graph,
        declaration,
        options.unconstructible,
        cancel,
        &mut diagnostics,
    )?;

    let mut table = BindingTable::new(declaration.clone());
    for candidate in candidates {
        if cancel.is_cancelled() {
            return Err(GenerateFailure::Cancelled);
        }
        let status = resolve_view(graph, &expected_view(candidate));
        if let Some(diag) = table.push(candidate.clone(), status) {
            diagnostics.push(diag);
        }
    }

    match emit_view_table(&table) {
        Ok(source) => Ok(LocatorOutput {
            source: Some(source),
            diagnostics,
        }),
        Err(diag) => {
            diagnostics.push(diag);
            Ok(LocatorOutput {
                source: None,
                diagnostics,
            })
        }
    }
}
