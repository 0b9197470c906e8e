//! Runtime contract targeted by the emitted source text.
//!
//! The consuming UI runtime needs exactly two things: a zero-argument factory
//! producing a renderable component, and lookup by type identity over an
//! ordered, immutable table. Both live here so generated code has a stable
//! surface to reference.

use std::any::{Any, TypeId};
use std::collections::HashMap;

/// A display component the UI runtime can render. `as_any` exposes the
/// concrete type for identity checks.
pub trait Renderable: Any {
    fn as_any(&self) -> &dyn Any;
}

pub type ViewFactory = fn() -> Box<dyn Renderable>;

// ═══════════════════════════════════════════════════════════════════════════════
// VIEW TABLE
// ═══════════════════════════════════════════════════════════════════════════════

/// Insertion-ordered mapping from model type identity to view factory.
/// Built once by the generated initializer; not mutated afterwards.
#[derive(Default)]
pub struct ViewTable {
    entries: Vec<(TypeId, ViewFactory)>,
    index: HashMap<TypeId, usize>,
}

impl ViewTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ViewTable {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Registers the factory for model type `M`. The first registration for
    /// an identity wins, mirroring the table builder's duplicate rule.
    pub fn insert<M: Any>(&mut self, factory: ViewFactory) {
        let id = TypeId::of::<M>();
        if self.index.contains_key(&id) {
            return;
        }
        self.index.insert(id, self.entries.len());
        self.entries.push((id, factory));
    }

    pub fn get(&self, id: TypeId) -> Option<ViewFactory> {
        self.index.get(&id).map(|&pos| self.entries[pos].1)
    }

    /// Builds the view for a model instance, or `None` when the model type
    /// was never registered.
    pub fn resolve(&self, model: &dyn Any) -> Option<Box<dyn Renderable>> {
        self.get(model.type_id()).map(|factory| factory())
    }

    /// Entries in insertion order, which equals emission order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, ViewFactory)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// FALLBACK VIEW
// ═══════════════════════════════════════════════════════════════════════════════

/// Placeholder rendered for a model whose display counterpart does not exist.
/// Its user-visible text is exactly `Not Found: {expected name}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundView {
    text: String,
}

impl NotFoundView {
    pub fn new(text: impl Into<String>) -> Self {
        NotFoundView { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Renderable for NotFoundView {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
