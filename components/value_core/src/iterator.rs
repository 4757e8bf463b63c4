//! Collection iterator values
//!
//! Live iterators cannot be consumed just to print them, so iterator values
//! carry a snapshot of their not-yet-consumed entries - the preview a
//! privileged runtime hook would expose.

use crate::value::JsValue;

/// Which collection an iterator walks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IteratorKind {
    /// Produced by a map
    Map,
    /// Produced by a set
    Set,
}

impl IteratorKind {
    /// The label used in iterator braces (`Map Iterator`, `Set Iterator`)
    pub fn label(&self) -> &'static str {
        match self {
            IteratorKind::Map => "Map",
            IteratorKind::Set => "Set",
        }
    }
}

/// Remaining items of an iterator
#[derive(Debug, Clone)]
pub enum IteratorEntries {
    /// Plain values (`keys()`/`values()` iterators)
    Values(Vec<JsValue>),
    /// Key-value pairs (`entries()` iterators)
    Pairs(Vec<(JsValue, JsValue)>),
}

impl IteratorEntries {
    /// Number of remaining items
    pub fn len(&self) -> usize {
        match self {
            IteratorEntries::Values(v) => v.len(),
            IteratorEntries::Pairs(p) => p.len(),
        }
    }

    /// True when the iterator is exhausted
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Internal iterator data
#[derive(Debug, Clone)]
pub struct IteratorData {
    /// Source collection kind
    pub kind: IteratorKind,
    /// Snapshot of remaining items
    pub entries: IteratorEntries,
}

impl IteratorData {
    /// Snapshot of a map `entries()` iterator
    pub fn map_entries(pairs: Vec<(JsValue, JsValue)>) -> Self {
        IteratorData {
            kind: IteratorKind::Map,
            entries: IteratorEntries::Pairs(pairs),
        }
    }

    /// Snapshot of a map `keys()`/`values()` iterator
    pub fn map_values(values: Vec<JsValue>) -> Self {
        IteratorData {
            kind: IteratorKind::Map,
            entries: IteratorEntries::Values(values),
        }
    }

    /// Snapshot of a set iterator
    pub fn set_values(values: Vec<JsValue>) -> Self {
        IteratorData {
            kind: IteratorKind::Set,
            entries: IteratorEntries::Values(values),
        }
    }

    /// Snapshot of a set `entries()` iterator
    pub fn set_entries(pairs: Vec<(JsValue, JsValue)>) -> Self {
        IteratorData {
            kind: IteratorKind::Set,
            entries: IteratorEntries::Pairs(pairs),
        }
    }
}
