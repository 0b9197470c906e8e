//! # Static View Locator Generator
//!
//! Binds presentation-model types to their display counterparts by naming
//! convention, once, at build time. The host build pipeline hands over a
//! snapshot of every type visible to one compilation; for each declaration
//! carrying the `GeneratesBindingTable` capability this crate emits a static,
//! ordered view table as source text.
//!
//! ## Pipeline Invariants
//!
//! 1. **Determinism**: an unchanged snapshot produces byte-identical output
//!    text on every pass. Table order is the byte-wise lexical order of the
//!    qualified source name.
//! 2. **Uniqueness**: each source type appears at most once per table; on a
//!    duplicate the first-seen entry wins and a `VL002` warning is raised.
//! 3. **Abstract exclusion**: abstract types are never candidates and never
//!    match targets.
//! 4. **Unit boundary**: only types from the locator's own compilation unit
//!    are scanned; referenced modules are visible to match resolution only.
//! 5. **Total fallback**: an unresolved counterpart is not an error. Its
//!    factory constructs a placeholder whose text is exactly
//!    `Not Found: {expected name}`. There is no runtime failure path.
//! 6. **Isolation**: a pass is a pure function of (snapshot, locator,
//!    options). No shared state, no I/O; passes may run in parallel and a
//!    cancelled pass emits nothing at all.

mod codegen;
mod diagnostics;
mod discovery;
mod generate;
mod resolve;
mod symbols;
mod table;

pub mod runtime;

#[cfg(feature = "napi")]
mod host;

pub use codegen::{emit_view_table, GeneratedSource};
pub use diagnostics::{
    LocatorDiagnostic, INV_DUPLICATE_SOURCE, INV_MALFORMED_LOCATOR,
    INV_UNCONSTRUCTIBLE_CANDIDATE, INV_UNEMITTABLE_IDENTIFIER, SEVERITY_ERROR, SEVERITY_WARNING,
};
pub use discovery::{find_locators, scan_candidates, validate_locator, UnconstructiblePolicy};
pub use generate::{
    generate, generate_all, CancelFlag, GenerateFailure, GenerateOptions, GenerateResult,
    LocatorOutput,
};
pub use resolve::{
    expected_view, matches_model_convention, resolve_view, ExpectedView,
    MODEL_NAMESPACE_SEGMENT, MODEL_SUFFIX, VIEW_NAMESPACE_SEGMENT, VIEW_SUFFIX,
};
pub use symbols::{SymbolGraph, TypeDescriptor, TypeKey, CAP_GENERATES_BINDING_TABLE};
pub use table::{BindingEntry, BindingStatus, BindingTable};

#[cfg(feature = "napi")]
pub use host::{generate_view_tables_native, locator_bridge};

#[cfg(test)]
mod generate_tests;
