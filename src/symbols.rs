//! Symbol Graph Snapshot for the Locator Generator
//!
//! The host build pipeline serializes every type visible to one compilation
//! into this structure. The generator never inspects source text itself; the
//! snapshot is the whole input.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════════════
// CAPABILITIES
// ═══════════════════════════════════════════════════════════════════════════════

/// Capability carried by a locator declaration. A type declaring this
/// capability receives a generated view table.
pub const CAP_GENERATES_BINDING_TABLE: &str = "GeneratesBindingTable";

// ═══════════════════════════════════════════════════════════════════════════════
// TYPE IDENTITY
// ═══════════════════════════════════════════════════════════════════════════════

/// Stable identity of a type: its fully qualified, dot-joined name.
/// Equality is exact; there is no fuzzy matching anywhere in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeKey(String);

impl TypeKey {
    pub fn new(qualified: impl Into<String>) -> Self {
        TypeKey(qualified.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TYPE DESCRIPTOR
// ═══════════════════════════════════════════════════════════════════════════════

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    /// Namespace path, outermost segment first.
    pub namespace: Vec<String>,
    /// Simple (unqualified) type name.
    pub name: String,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default = "default_true")]
    pub is_public: bool,
    #[serde(default)]
    pub has_parameterless_ctor: bool,
    /// Whether the host pipeline may attach generated members to this
    /// declaration. Required for locator declarations.
    #[serde(default)]
    pub open_for_generation: bool,
    /// False for types from referenced-but-not-compiled modules. Those are
    /// visible to match resolution but never scanned as candidates.
    #[serde(default = "default_true")]
    pub from_current_unit: bool,
    #[serde(default)]
    pub capabilities: BTreeSet<String>,
}

impl TypeDescriptor {
    /// Fully qualified name, dot-joined. Used for identity, diagnostics and
    /// the fallback text.
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

    /// Path form used inside emitted source text, `::`-joined.
    pub fn emit_path(&self) -> String {
        if self.namespace.is_empty() {
            return self.name.clone();
        }
        let mut out = self.namespace.join("::");
        out.push_str("::");
        out.push_str(&self.name);
        out
    }

    pub fn has_capability(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }

    pub fn is_locator(&self) -> bool {
        self.has_capability(CAP_GENERATES_BINDING_TABLE)
    }

    /// Publicly constructible via a parameterless constructor.
    pub fn is_constructible(&self) -> bool {
        self.is_public && self.has_parameterless_ctor
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SYMBOL GRAPH
// ═══════════════════════════════════════════════════════════════════════════════

/// Immutable snapshot of all types visible to one compilation, in the
/// declaration order supplied by the host. Lookup is by exact identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "SymbolGraphInput")]
pub struct SymbolGraph {
    types: Vec<TypeDescriptor>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SymbolGraphInput {
    types: Vec<TypeDescriptor>,
}

impl From<SymbolGraphInput> for SymbolGraph {
    fn from(input: SymbolGraphInput) -> Self {
        SymbolGraph::new(input.types)
    }
}

impl SymbolGraph {
    pub fn new(types: Vec<TypeDescriptor>) -> Self {
        let mut index = HashMap::with_capacity(types.len());
        for (position, ty) in types.iter().enumerate() {
            // First declaration wins on a duplicate identity; the table
            // builder reports the duplicate when it is scanned.
            index.entry(ty.qualified_name()).or_insert(position);
        }
        SymbolGraph { types, index }
    }

    pub fn types(&self) -> &[TypeDescriptor] {
        &self.types
    }

    pub fn lookup(&self, key: &TypeKey) -> Option<&TypeDescriptor> {
        self.index.get(key.as_str()).map(|&pos| &self.types[pos])
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
