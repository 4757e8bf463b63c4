//! Map, Set and weak collection data
//!
//! Keyed collections use same-value-zero comparison (NaN equals NaN, -0
//! equals +0) and preserve insertion order. Weak collections are keyed by
//! value identity and are deliberately not enumerable: their entries can only
//! be surfaced through the explicit `preview` escape hatch, mirroring the
//! privileged introspection hook a host runtime would provide.

use crate::error::{JsError, JsResult};
use crate::object::{Prototype, PropertyBag};
use crate::value::JsValue;

/// Internal map data - preserves insertion order
#[derive(Debug, Clone, Default)]
pub struct MapData {
    /// Map entries in insertion order
    pub entries: Vec<(JsValue, JsValue)>,
    /// Additional own properties
    pub extras: PropertyBag,
    /// Prototype link
    pub prototype: Prototype,
}

impl MapData {
    /// Create an empty map
    pub fn new() -> Self {
        MapData::default()
    }

    /// Number of entries
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Set a key-value pair, updating an existing same-value-zero key in
    /// place
    pub fn set(&mut self, key: JsValue, value: JsValue) {
        if let Some(index) = self
            .entries
            .iter()
            .position(|(k, _)| k.same_value_zero(&key))
        {
            self.entries[index].1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Look up a value by key
    pub fn get(&self, key: &JsValue) -> Option<JsValue> {
        self.entries
            .iter()
            .find(|(k, _)| k.same_value_zero(key))
            .map(|(_, v)| v.clone())
    }

    /// True when the key is present
    pub fn has(&self, key: &JsValue) -> bool {
        self.entries.iter().any(|(k, _)| k.same_value_zero(key))
    }

    /// Remove an entry; returns whether it existed
    pub fn delete(&mut self, key: &JsValue) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| !k.same_value_zero(key));
        self.entries.len() != before
    }
}

/// Internal set data - preserves insertion order
#[derive(Debug, Clone, Default)]
pub struct SetData {
    /// Set values in insertion order
    pub values: Vec<JsValue>,
    /// Additional own properties
    pub extras: PropertyBag,
    /// Prototype link
    pub prototype: Prototype,
}

impl SetData {
    /// Create an empty set
    pub fn new() -> Self {
        SetData::default()
    }

    /// Number of values
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Add a value unless a same-value-zero equal one is present
    pub fn add(&mut self, value: JsValue) {
        if !self.has(&value) {
            self.values.push(value);
        }
    }

    /// True when the value is present
    pub fn has(&self, value: &JsValue) -> bool {
        self.values.iter().any(|v| v.same_value_zero(value))
    }

    /// Remove a value; returns whether it existed
    pub fn delete(&mut self, value: &JsValue) -> bool {
        let before = self.values.len();
        self.values.retain(|v| !v.same_value_zero(value));
        self.values.len() != before
    }
}

/// Internal weak map data - keys are held by identity
#[derive(Debug, Clone, Default)]
pub struct WeakMapData {
    /// Entries in insertion order; keys are always identity-bearing values
    pub entries: Vec<(JsValue, JsValue)>,
    /// Escape hatch: allow rendering the entries under `show_hidden`.
    /// Without it the collection reports `<items unknown>`.
    pub preview: bool,
    /// Prototype link
    pub prototype: Prototype,
}

impl WeakMapData {
    /// Create an empty weak map
    pub fn new() -> Self {
        WeakMapData::default()
    }

    /// Set an entry; the key must have object identity
    pub fn set(&mut self, key: JsValue, value: JsValue) -> JsResult<()> {
        let id = key
            .identity()
            .ok_or_else(|| JsError::type_error("Invalid value used as weak map key"))?;
        if let Some(index) = self
            .entries
            .iter()
            .position(|(k, _)| k.identity() == Some(id))
        {
            self.entries[index].1 = value;
        } else {
            self.entries.push((key, value));
        }
        Ok(())
    }

    /// Look up a value by key identity
    pub fn get(&self, key: &JsValue) -> Option<JsValue> {
        let id = key.identity()?;
        self.entries
            .iter()
            .find(|(k, _)| k.identity() == Some(id))
            .map(|(_, v)| v.clone())
    }

    /// True when the key is present
    pub fn has(&self, key: &JsValue) -> bool {
        self.get(key).is_some()
    }
}

/// Internal weak set data - values are held by identity
#[derive(Debug, Clone, Default)]
pub struct WeakSetData {
    /// Values in insertion order; always identity-bearing
    pub values: Vec<JsValue>,
    /// Escape hatch: allow rendering the values under `show_hidden`
    pub preview: bool,
    /// Prototype link
    pub prototype: Prototype,
}

impl WeakSetData {
    /// Create an empty weak set
    pub fn new() -> Self {
        WeakSetData::default()
    }

    /// Add a value; it must have object identity
    pub fn add(&mut self, value: JsValue) -> JsResult<()> {
        let id = value
            .identity()
            .ok_or_else(|| JsError::type_error("Invalid value used in weak set"))?;
        if !self.values.iter().any(|v| v.identity() == Some(id)) {
            self.values.push(value);
        }
        Ok(())
    }

    /// True when the value is present
    pub fn has(&self, value: &JsValue) -> bool {
        match value.identity() {
            Some(id) => self.values.iter().any(|v| v.identity() == Some(id)),
            None => false,
        }
    }
}
