//! Binding Table
//!
//! Accumulates one entry per candidate in scanner order. Rebuilt from scratch
//! on every generation pass and never mutated after emission.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::diagnostics::{LocatorDiagnostic, INV_DUPLICATE_SOURCE};
use crate::symbols::TypeDescriptor;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum BindingStatus {
    Found { target: TypeDescriptor },
    Missing { expected_name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingEntry {
    pub source: TypeDescriptor,
    pub status: BindingStatus,
    pub order: usize,
}

#[derive(Debug, Clone)]
pub struct BindingTable {
    locator: TypeDescriptor,
    entries: Vec<BindingEntry>,
    seen: HashSet<String>,
}

impl BindingTable {
    pub fn new(locator: TypeDescriptor) -> Self {
        BindingTable {
            locator,
            entries: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Appends an entry, assigning the next order value. A duplicate source
    /// identity keeps the first-seen entry and returns a warning; this is
    /// unreachable from a well-formed symbol graph but defended anyway.
    pub fn push(
        &mut self,
        source: TypeDescriptor,
        status: BindingStatus,
    ) -> Option<LocatorDiagnostic> {
        let identity = source.qualified_name();
        if !self.seen.insert(identity.clone()) {
            return Some(LocatorDiagnostic::warning(
                INV_DUPLICATE_SOURCE,
                &format!(
                    "Duplicate source type {} in the table for {}; keeping the first entry.",
                    identity,
                    self.locator.qualified_name()
                ),
                &self.locator.qualified_name(),
            ));
        }
        let order = self.entries.len();
        self.entries.push(BindingEntry {
            source,
            status,
            order,
        });
        None
    }

    pub fn locator(&self) -> &TypeDescriptor {
        &self.locator
    }

    pub fn entries(&self) -> &[BindingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
