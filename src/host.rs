//! NAPI shim for a JS-driven build pipeline.
//!
//! Thin JSON boundary only; the core stays host-agnostic. Enabled with the
//! `napi` feature.

use napi_derive::napi;

use crate::generate::{generate_all, CancelFlag, GenerateOptions, GenerateResult};
use crate::symbols::SymbolGraph;

#[napi]
pub fn locator_bridge() -> String {
    "Locator Native Bridge Connected".to_string()
}

/// Runs a full generation pass over a serialized symbol graph snapshot.
#[napi]
pub fn generate_view_tables_native(
    graph_json: serde_json::Value,
    options_json: Option<serde_json::Value>,
) -> napi::Result<GenerateResult> {
    let graph: SymbolGraph = serde_json::from_value(graph_json)
        .map_err(|e| napi::Error::from_reason(format!("Invalid symbol graph: {}", e)))?;

    let options: GenerateOptions = match options_json {
        Some(value) => serde_json::from_value(value)
            .map_err(|e| napi::Error::from_reason(format!("Invalid options: {}", e)))?,
        None => GenerateOptions::default(),
    };

    generate_all(&graph, &options, &CancelFlag::new())
        .map_err(|e| napi::Error::from_reason(e.to_string()))
}
