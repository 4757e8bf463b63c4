//! Object data and property storage
//!
//! Own properties are stored as ordered descriptor entries so rendering sees
//! them in insertion order, the same way map entries keep insertion order.
//! A descriptor is either a plain data value or an accessor pair; accessor
//! getters are native closures evaluated on demand.

use std::fmt;
use std::rc::Rc;

use crate::error::JsResult;
use crate::symbol::SymbolValue;
use crate::value::JsValue;

/// A property key: a string name or a symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// String-named property
    String(String),
    /// Symbol-keyed property
    Symbol(SymbolValue),
}

impl PropertyKey {
    /// Create a string key
    pub fn string(name: impl Into<String>) -> Self {
        PropertyKey::String(name.into())
    }

    /// Create a symbol key
    pub fn symbol(sym: SymbolValue) -> Self {
        PropertyKey::Symbol(sym)
    }

    /// True for string-named keys
    pub fn is_string(&self) -> bool {
        matches!(self, PropertyKey::String(_))
    }

    /// The string name, if this is a string key
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyKey::String(s) => Some(s),
            PropertyKey::Symbol(_) => None,
        }
    }
}

/// Native getter signature: receives the holder value
pub type GetterFn = dyn Fn(&JsValue) -> JsResult<JsValue>;

/// The payload of a property descriptor
#[derive(Clone)]
pub enum PropertyKind {
    /// Plain data property
    Data(JsValue),
    /// Accessor property; the setter body is never needed for rendering, only
    /// its presence
    Accessor {
        /// Getter closure, absent for setter-only properties
        get: Option<Rc<GetterFn>>,
        /// Whether a setter is installed
        has_setter: bool,
    },
}

impl fmt::Debug for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKind::Data(v) => f.debug_tuple("Data").field(v).finish(),
            PropertyKind::Accessor { get, has_setter } => f
                .debug_struct("Accessor")
                .field("get", &get.is_some())
                .field("has_setter", has_setter)
                .finish(),
        }
    }
}

/// A property descriptor: payload plus enumerability
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    /// Whether the property shows up in default (non-hidden) key listings
    pub enumerable: bool,
    /// Data or accessor payload
    pub kind: PropertyKind,
}

impl PropertyDescriptor {
    /// An enumerable data property
    pub fn data(value: JsValue) -> Self {
        PropertyDescriptor {
            enumerable: true,
            kind: PropertyKind::Data(value),
        }
    }

    /// A non-enumerable data property
    pub fn hidden_data(value: JsValue) -> Self {
        PropertyDescriptor {
            enumerable: false,
            kind: PropertyKind::Data(value),
        }
    }

    /// An enumerable accessor property
    pub fn getter(get: impl Fn(&JsValue) -> JsResult<JsValue> + 'static) -> Self {
        PropertyDescriptor {
            enumerable: true,
            kind: PropertyKind::Accessor {
                get: Some(Rc::new(get)),
                has_setter: false,
            },
        }
    }

    /// An enumerable accessor property with both getter and setter installed
    pub fn getter_setter(get: impl Fn(&JsValue) -> JsResult<JsValue> + 'static) -> Self {
        PropertyDescriptor {
            enumerable: true,
            kind: PropertyKind::Accessor {
                get: Some(Rc::new(get)),
                has_setter: true,
            },
        }
    }

    /// An enumerable setter-only accessor property
    pub fn setter_only() -> Self {
        PropertyDescriptor {
            enumerable: true,
            kind: PropertyKind::Accessor {
                get: None,
                has_setter: true,
            },
        }
    }

    /// The data value, if this is a data property
    pub fn value(&self) -> Option<&JsValue> {
        match &self.kind {
            PropertyKind::Data(v) => Some(v),
            PropertyKind::Accessor { .. } => None,
        }
    }
}

/// Ordered own-property storage
///
/// Lookup is linear; inspection workloads touch every entry anyway, and the
/// ordered-entry layout matches how map entries are stored.
#[derive(Debug, Clone, Default)]
pub struct PropertyBag {
    entries: Vec<(PropertyKey, PropertyDescriptor)>,
}

impl PropertyBag {
    /// Create an empty bag
    pub fn new() -> Self {
        PropertyBag::default()
    }

    /// Number of own properties
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no own properties exist
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Install a descriptor, replacing an existing entry in place
    pub fn define(&mut self, key: PropertyKey, desc: PropertyDescriptor) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = desc;
        } else {
            self.entries.push((key, desc));
        }
    }

    /// Shorthand: install an enumerable data property under a string name
    pub fn set(&mut self, name: impl Into<String>, value: JsValue) {
        self.define(PropertyKey::string(name), PropertyDescriptor::data(value));
    }

    /// Look up a descriptor
    pub fn get(&self, key: &PropertyKey) -> Option<&PropertyDescriptor> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, d)| d)
    }

    /// Look up a descriptor by string name
    pub fn get_named(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == Some(name))
            .map(|(_, d)| d)
    }

    /// True when the key is present
    pub fn has(&self, key: &PropertyKey) -> bool {
        self.get(key).is_some()
    }

    /// Remove a property by key; returns whether it existed
    pub fn remove(&mut self, key: &PropertyKey) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| k != key);
        self.entries.len() != before
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &(PropertyKey, PropertyDescriptor)> {
        self.entries.iter()
    }

    /// Key listing for rendering: string keys first, then symbol keys, each
    /// group in insertion order. Without `show_hidden` only enumerable keys
    /// are listed.
    pub fn keys(&self, show_hidden: bool) -> Vec<PropertyKey> {
        let mut keys = Vec::with_capacity(self.entries.len());
        for (key, desc) in &self.entries {
            if key.is_string() && (show_hidden || desc.enumerable) {
                keys.push(key.clone());
            }
        }
        for (key, desc) in &self.entries {
            if !key.is_string() && (show_hidden || desc.enumerable) {
                keys.push(key.clone());
            }
        }
        keys
    }
}

/// Prototype link of a composite value
#[derive(Debug, Clone, Default)]
pub enum Prototype {
    /// The ordinary built-in prototype for the value's kind
    #[default]
    Ordinary,
    /// Null prototype (`Object.create(null)` shape)
    Null,
    /// A custom prototype object (class instances, rewired chains)
    Custom(JsValue),
}

impl Prototype {
    /// True for null-prototype values
    pub fn is_null(&self) -> bool {
        matches!(self, Prototype::Null)
    }
}

/// Outcome of a custom inspection hook
#[derive(Debug, Clone)]
pub enum CustomInspectResult {
    /// Use the returned text verbatim (reindented to the call site)
    Text(String),
    /// Format the returned value instead of the original
    Value(JsValue),
    /// The hook returned its receiver; fall through to default rendering
    SelfRef,
}

/// Custom inspection hook signature
///
/// Receives the remaining depth budget (`None` = unbounded) and a snapshot of
/// the effective options as plain script values.
pub type CustomInspectFn =
    dyn Fn(Option<i64>, &[(String, JsValue)]) -> JsResult<CustomInspectResult>;

/// Internal object data
#[derive(Clone, Default)]
pub struct ObjectData {
    /// Own properties
    pub properties: PropertyBag,
    /// Prototype link
    pub prototype: Prototype,
    /// Marks arguments-exotic objects
    pub is_arguments: bool,
    /// Marks values originating from a different execution context
    pub foreign: bool,
    /// Custom inspection hook, if installed
    pub custom_inspect: Option<Rc<CustomInspectFn>>,
}

impl fmt::Debug for ObjectData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectData")
            .field("properties", &self.properties)
            .field("prototype", &self.prototype)
            .field("is_arguments", &self.is_arguments)
            .field("foreign", &self.foreign)
            .field("custom_inspect", &self.custom_inspect.is_some())
            .finish()
    }
}

impl ObjectData {
    /// Create empty object data with the ordinary prototype
    pub fn new() -> Self {
        ObjectData::default()
    }

    /// Create empty object data with a null prototype
    pub fn with_null_prototype() -> Self {
        ObjectData {
            prototype: Prototype::Null,
            ..ObjectData::default()
        }
    }

    /// Create empty object data with a custom prototype object
    pub fn with_prototype(proto: JsValue) -> Self {
        ObjectData {
            prototype: Prototype::Custom(proto),
            ..ObjectData::default()
        }
    }
}
