//! End-to-end generation scenarios: full snapshot in, emitted text out.

use crate::diagnostics::{INV_MALFORMED_LOCATOR, SEVERITY_ERROR};
use crate::generate::{generate, generate_all, CancelFlag, GenerateFailure, GenerateOptions};
use crate::symbols::{SymbolGraph, TypeDescriptor, TypeKey, CAP_GENERATES_BINDING_TABLE};
use std::collections::BTreeSet;

fn descriptor(namespace: &[&str], name: &str) -> TypeDescriptor {
    TypeDescriptor {
        namespace: namespace.iter().map(|s| s.to_string()).collect(),
        name: name.to_string(),
        is_abstract: false,
        is_public: true,
        has_parameterless_ctor: true,
        open_for_generation: false,
        from_current_unit: true,
        capabilities: BTreeSet::new(),
    }
}

fn locator(namespace: &[&str], name: &str) -> TypeDescriptor {
    let mut ty = descriptor(namespace, name);
    ty.open_for_generation = true;
    ty.capabilities
        .insert(CAP_GENERATES_BINDING_TABLE.to_string());
    ty
}

fn abstract_type(namespace: &[&str], name: &str) -> TypeDescriptor {
    let mut ty = descriptor(namespace, name);
    ty.is_abstract = true;
    ty
}

/// The sample/missing snapshot from the runtime tests of the original
/// locator: one bound model, one model without a view.
fn test_app_graph() -> SymbolGraph {
    SymbolGraph::new(vec![
        locator(&["TestApp"], "ViewLocator"),
        descriptor(&["TestApp", "ViewModels"], "SampleViewModel"),
        descriptor(&["TestApp", "ViewModels"], "MissingViewModel"),
        descriptor(&["TestApp", "Views"], "SampleView"),
    ])
}

fn portal_graph() -> SymbolGraph {
    SymbolGraph::new(vec![
        locator(&["Portal"], "PortalViewLocator"),
        abstract_type(&["Portal", "ViewModels"], "ViewModelBase"),
        descriptor(&["Portal", "ViewModels"], "HomeViewModel"),
        descriptor(&["Portal", "ViewModels"], "ReportsViewModel"),
        descriptor(&["Portal", "ViewModels"], "SettingsViewModel"),
        abstract_type(&["Portal", "ViewModels"], "WorkspaceViewModel"),
        descriptor(&["Portal", "Views"], "HomeView"),
        descriptor(&["Portal", "Views"], "ReportsView"),
    ])
}

fn run(graph: &SymbolGraph, locator_name: &str) -> crate::generate::LocatorOutput {
    generate(
        graph,
        &TypeKey::new(locator_name),
        &GenerateOptions::default(),
        &CancelFlag::new(),
    )
    .expect("pass completes")
}

#[test]
fn bound_model_gets_a_factory_for_its_view() {
    let output = run(&test_app_graph(), "TestApp.ViewLocator");
    let source = output.source.expect("emitted");
    assert!(output.diagnostics.is_empty());
    assert_eq!(source.hint_name, "TestApp.ViewLocator.view_table.g.rs");
    assert!(source.text.contains(
        "table.insert::<TestApp::ViewModels::SampleViewModel>(|| ::std::boxed::Box::new(<TestApp::Views::SampleView as ::core::default::Default>::default()));"
    ));
}

#[test]
fn unbound_model_gets_the_exact_fallback_text() {
    let output = run(&test_app_graph(), "TestApp.ViewLocator");
    let source = output.source.expect("emitted");
    assert!(source.text.contains(
        "table.insert::<TestApp::ViewModels::MissingViewModel>(|| ::std::boxed::Box::new(::locator_native::runtime::NotFoundView::new(\"Not Found: TestApp.Views.MissingView\")));"
    ));
}

#[test]
fn repeated_passes_are_byte_identical() {
    let graph = test_app_graph();
    let first = run(&graph, "TestApp.ViewLocator").source.unwrap();
    let second = run(&graph, "TestApp.ViewLocator").source.unwrap();
    assert_eq!(first, second);
}

#[test]
fn table_holds_each_candidate_exactly_once_in_lexical_order() {
    let output = run(&portal_graph(), "Portal.PortalViewLocator");
    let source = output.source.expect("emitted");

    assert_eq!(source.text.matches("table.insert::<").count(), 3);
    assert!(!source.text.contains("WorkspaceViewModel"));
    assert!(!source.text.contains("ViewModelBase"));

    let home = source.text.find("HomeViewModel").unwrap();
    let reports = source.text.find("ReportsViewModel").unwrap();
    let settings = source.text.find("SettingsViewModel").unwrap();
    assert!(home < reports && reports < settings);

    assert!(source
        .text
        .contains("NotFoundView::new(\"Not Found: Portal.Views.SettingsView\")"));
}

#[test]
fn locator_without_candidates_still_emits_an_empty_table() {
    let graph = SymbolGraph::new(vec![locator(&["App"], "ViewLocator")]);
    let output = run(&graph, "App.ViewLocator");
    let source = output.source.expect("emitted");
    assert!(source.text.contains("ViewTable::with_capacity(0)"));
    assert!(!source.text.contains("table.insert"));
}

#[test]
fn malformed_locator_blocks_only_itself() {
    let mut closed = locator(&["App"], "BrokenLocator");
    closed.open_for_generation = false;
    let graph = SymbolGraph::new(vec![
        closed,
        locator(&["App"], "ViewLocator"),
        descriptor(&["App", "ViewModels"], "SampleViewModel"),
    ]);

    let result = generate_all(&graph, &GenerateOptions::default(), &CancelFlag::new()).unwrap();

    assert_eq!(result.sources.len(), 1);
    assert_eq!(result.sources[0].hint_name, "App.ViewLocator.view_table.g.rs");
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].code, INV_MALFORMED_LOCATOR);
    assert_eq!(result.diagnostics[0].severity, SEVERITY_ERROR);
    assert_eq!(result.diagnostics[0].declaration, "App.BrokenLocator");
}

#[test]
fn whole_graph_pass_keeps_locator_graph_order() {
    let graph = SymbolGraph::new(vec![
        locator(&["B"], "ViewLocator"),
        locator(&["A"], "ViewLocator"),
    ]);
    let result = generate_all(&graph, &GenerateOptions::default(), &CancelFlag::new()).unwrap();
    let hints: Vec<&str> = result.sources.iter().map(|s| s.hint_name.as_str()).collect();
    assert_eq!(
        hints,
        vec!["B.ViewLocator.view_table.g.rs", "A.ViewLocator.view_table.g.rs"]
    );
}

#[test]
fn unknown_locator_is_a_failure_not_a_diagnostic() {
    let graph = test_app_graph();
    let result = generate(
        &graph,
        &TypeKey::new("TestApp.NoSuchLocator"),
        &GenerateOptions::default(),
        &CancelFlag::new(),
    );
    assert_eq!(
        result,
        Err(GenerateFailure::UnknownLocator(TypeKey::new(
            "TestApp.NoSuchLocator"
        )))
    );
}

#[test]
fn capability_less_type_is_not_a_valid_target() {
    let graph = test_app_graph();
    let result = generate(
        &graph,
        &TypeKey::new("TestApp.ViewModels.SampleViewModel"),
        &GenerateOptions::default(),
        &CancelFlag::new(),
    );
    assert!(matches!(result, Err(GenerateFailure::UnknownLocator(_))));
}

#[test]
fn cancelled_pass_emits_nothing() {
    let cancel = CancelFlag::new();
    cancel.cancel();
    let result = generate(
        &test_app_graph(),
        &TypeKey::new("TestApp.ViewLocator"),
        &GenerateOptions::default(),
        &cancel,
    );
    assert_eq!(result, Err(GenerateFailure::Cancelled));
}
