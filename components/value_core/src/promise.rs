//! Promise and module-namespace values

use crate::object::{Prototype, PropertyBag};
use crate::value::JsValue;

/// Settlement state of a promise
#[derive(Debug, Clone)]
pub enum PromiseState {
    /// Not yet settled
    Pending,
    /// Fulfilled with a value
    Fulfilled(JsValue),
    /// Rejected with a reason
    Rejected(JsValue),
}

/// Internal promise data
#[derive(Debug, Clone)]
pub struct PromiseData {
    /// Current settlement state
    pub state: PromiseState,
    /// Additional own properties
    pub extras: PropertyBag,
    /// Prototype link
    pub prototype: Prototype,
}

impl PromiseData {
    /// Create a pending promise
    pub fn pending() -> Self {
        PromiseData {
            state: PromiseState::Pending,
            extras: PropertyBag::new(),
            prototype: Prototype::Ordinary,
        }
    }

    /// Create a fulfilled promise
    pub fn fulfilled(value: JsValue) -> Self {
        PromiseData {
            state: PromiseState::Fulfilled(value),
            extras: PropertyBag::new(),
            prototype: Prototype::Ordinary,
        }
    }

    /// Create a rejected promise
    pub fn rejected(reason: JsValue) -> Self {
        PromiseData {
            state: PromiseState::Rejected(reason),
            extras: PropertyBag::new(),
            prototype: Prototype::Ordinary,
        }
    }
}

/// Internal module-namespace data
///
/// Exports appear in export-name order. An export slot may be uninitialized
/// (temporal dead zone in an unevaluated module); reading it is an error the
/// renderer surfaces as `<uninitialized>`.
#[derive(Debug, Clone, Default)]
pub struct NamespaceData {
    /// Named exports; `None` marks an uninitialized binding
    pub exports: Vec<(String, Option<JsValue>)>,
}

impl NamespaceData {
    /// Create an empty namespace
    pub fn new() -> Self {
        NamespaceData::default()
    }

    /// Add an initialized export
    pub fn export(&mut self, name: impl Into<String>, value: JsValue) {
        self.exports.push((name.into(), Some(value)));
    }

    /// Add an uninitialized export binding
    pub fn export_uninitialized(&mut self, name: impl Into<String>) {
        self.exports.push((name.into(), None));
    }
}
