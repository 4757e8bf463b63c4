//! Safe-capability substrate
//!
//! Every structural operation the engine performs on inspected values goes
//! through an immutable capability record resolved exactly once, before any
//! inspection runs. Inspected values can carry arbitrary native closures
//! (getters, custom hooks, proxy handlers); none of them can reach or
//! replace the operations in this table, and none of them can observe the
//! engine's bookkeeping containers defined here.

use std::rc::Rc;
use std::sync::LazyLock;

use value_core::{
    CustomInspectFn, JsValue, PropertyDescriptor, PropertyKey, Prototype, ValueId,
};

/// Proxy introspection result
#[derive(Debug, Clone)]
pub struct ProxyDetails {
    /// True once the proxy was revoked; target and handler are gone
    pub revoked: bool,
    /// The proxied target
    pub target: JsValue,
    /// The trap handler object
    pub handler: JsValue,
}

/// Weak-collection preview, available only through the explicit escape hatch
#[derive(Debug, Clone)]
pub enum WeakPreview {
    /// Key-value entries of a weak map
    MapEntries(Vec<(JsValue, JsValue)>),
    /// Values of a weak set
    SetValues(Vec<JsValue>),
    /// No preview capability on this collection
    Unknown,
}

/// The capability record: pre-resolved structural operations
///
/// Constructed once at first use and immutable afterwards. The engine never
/// re-resolves any of these through a mutable namespace.
pub struct Primordials {
    /// Own keys of a value's property storage, strings before symbols
    pub own_keys: fn(&JsValue, bool) -> Vec<PropertyKey>,
    /// Own property descriptor lookup
    pub own_descriptor: fn(&JsValue, &PropertyKey) -> Option<PropertyDescriptor>,
    /// Prototype link of a value
    pub prototype_of: fn(&JsValue) -> Prototype,
    /// Custom inspection hook installed on a value
    pub custom_inspect_of: fn(&JsValue) -> Option<Rc<CustomInspectFn>>,
    /// Proxy introspection; `None` for non-proxies
    pub proxy_details: fn(&JsValue) -> Option<ProxyDetails>,
    /// Entry snapshot of a map value
    pub map_entries: fn(&JsValue) -> Option<Vec<(JsValue, JsValue)>>,
    /// Value snapshot of a set value
    pub set_values: fn(&JsValue) -> Option<Vec<JsValue>>,
    /// Weak-collection preview through the escape hatch
    pub weak_preview: fn(&JsValue) -> WeakPreview,
    /// Whether the value originated in another execution context
    pub is_foreign: fn(&JsValue) -> bool,
    /// Structural constructor name, ignoring any user-visible labels
    pub structural_name: fn(&JsValue) -> String,
}

static PRIMORDIALS: LazyLock<Primordials> = LazyLock::new(|| Primordials {
    own_keys,
    own_descriptor,
    prototype_of,
    custom_inspect_of,
    proxy_details,
    map_entries,
    set_values,
    weak_preview,
    is_foreign,
    structural_name,
});

/// The process-wide capability record
pub fn primordials() -> &'static Primordials {
    &PRIMORDIALS
}

fn own_keys(value: &JsValue, show_hidden: bool) -> Vec<PropertyKey> {
    match value {
        JsValue::Object(data) => data.borrow().properties.keys(show_hidden),
        JsValue::Array(data) => data.borrow().extras.keys(show_hidden),
        JsValue::Map(data) => data.borrow().extras.keys(show_hidden),
        JsValue::Set(data) => data.borrow().extras.keys(show_hidden),
        JsValue::TypedArray(data) => data.borrow().extras.keys(show_hidden),
        JsValue::ArrayBuffer(data) => data.borrow().extras.keys(show_hidden),
        JsValue::DataView(data) => data.borrow().extras.keys(show_hidden),
        JsValue::Promise(data) => data.borrow().extras.keys(show_hidden),
        JsValue::Function(data) => data.borrow().extras.keys(show_hidden),
        JsValue::Error(data) => data.borrow().extras.keys(show_hidden),
        JsValue::RegExp(data) => data.borrow().extras.keys(show_hidden),
        JsValue::Date(data) => data.borrow().extras.keys(show_hidden),
        JsValue::Boxed(data) => data.borrow().extras.keys(show_hidden),
        _ => Vec::new(),
    }
}

fn own_descriptor(value: &JsValue, key: &PropertyKey) -> Option<PropertyDescriptor> {
    match value {
        JsValue::Object(data) => data.borrow().properties.get(key).cloned(),
        JsValue::Array(data) => data.borrow().extras.get(key).cloned(),
        JsValue::Map(data) => data.borrow().extras.get(key).cloned(),
        JsValue::Set(data) => data.borrow().extras.get(key).cloned(),
        JsValue::TypedArray(data) => data.borrow().extras.get(key).cloned(),
        JsValue::ArrayBuffer(data) => data.borrow().extras.get(key).cloned(),
        JsValue::DataView(data) => data.borrow().extras.get(key).cloned(),
        JsValue::Promise(data) => data.borrow().extras.get(key).cloned(),
        JsValue::Function(data) => data.borrow().extras.get(key).cloned(),
        JsValue::Error(data) => data.borrow().extras.get(key).cloned(),
        JsValue::RegExp(data) => data.borrow().extras.get(key).cloned(),
        JsValue::Date(data) => data.borrow().extras.get(key).cloned(),
        JsValue::Boxed(data) => data.borrow().extras.get(key).cloned(),
        _ => None,
    }
}

fn prototype_of(value: &JsValue) -> Prototype {
    match value {
        JsValue::Object(data) => data.borrow().prototype.clone(),
        JsValue::Array(data) => data.borrow().prototype.clone(),
        JsValue::Map(data) => data.borrow().prototype.clone(),
        JsValue::Set(data) => data.borrow().prototype.clone(),
        JsValue::WeakMap(data) => data.borrow().prototype.clone(),
        JsValue::WeakSet(data) => data.borrow().prototype.clone(),
        JsValue::TypedArray(data) => data.borrow().prototype.clone(),
        JsValue::ArrayBuffer(data) => data.borrow().prototype.clone(),
        JsValue::DataView(data) => data.borrow().prototype.clone(),
        JsValue::Promise(data) => data.borrow().prototype.clone(),
        JsValue::Function(data) => data.borrow().prototype.clone(),
        JsValue::Error(data) => data.borrow().prototype.clone(),
        JsValue::RegExp(data) => data.borrow().prototype.clone(),
        JsValue::Date(data) => data.borrow().prototype.clone(),
        JsValue::Boxed(data) => data.borrow().prototype.clone(),
        // Namespace objects have no prototype on any real runtime.
        JsValue::ModuleNamespace(_) => Prototype::Null,
        _ => Prototype::Ordinary,
    }
}

fn custom_inspect_of(value: &JsValue) -> Option<Rc<CustomInspectFn>> {
    match value {
        JsValue::Object(data) => data.borrow().custom_inspect.clone(),
        JsValue::Array(data) => data.borrow().custom_inspect.clone(),
        JsValue::Function(data) => data.borrow().custom_inspect.clone(),
        _ => None,
    }
}

fn proxy_details(value: &JsValue) -> Option<ProxyDetails> {
    match value {
        JsValue::Proxy(data) => {
            let data = data.borrow();
            Some(ProxyDetails {
                revoked: data.revoked,
                target: data.target.clone(),
                handler: data.handler.clone(),
            })
        }
        _ => None,
    }
}

fn map_entries(value: &JsValue) -> Option<Vec<(JsValue, JsValue)>> {
    match value {
        JsValue::Map(data) => Some(data.borrow().entries.clone()),
        _ => None,
    }
}

fn set_values(value: &JsValue) -> Option<Vec<JsValue>> {
    match value {
        JsValue::Set(data) => Some(data.borrow().values.clone()),
        _ => None,
    }
}

fn weak_preview(value: &JsValue) -> WeakPreview {
    match value {
        JsValue::WeakMap(data) => {
            let data = data.borrow();
            if data.preview {
                WeakPreview::MapEntries(data.entries.clone())
            } else {
                WeakPreview::Unknown
            }
        }
        JsValue::WeakSet(data) => {
            let data = data.borrow();
            if data.preview {
                WeakPreview::SetValues(data.values.clone())
            } else {
                WeakPreview::Unknown
            }
        }
        _ => WeakPreview::Unknown,
    }
}

fn is_foreign(value: &JsValue) -> bool {
    match value {
        JsValue::Object(data) => data.borrow().foreign,
        _ => false,
    }
}

fn structural_name(value: &JsValue) -> String {
    match value {
        JsValue::Object(_) => "Object".to_string(),
        JsValue::Array(_) => "Array".to_string(),
        JsValue::Map(_) => "Map".to_string(),
        JsValue::Set(_) => "Set".to_string(),
        JsValue::WeakMap(_) => "WeakMap".to_string(),
        JsValue::WeakSet(_) => "WeakSet".to_string(),
        JsValue::TypedArray(data) => data.borrow().kind.name().to_string(),
        JsValue::ArrayBuffer(data) => data.borrow().name().to_string(),
        JsValue::DataView(_) => "DataView".to_string(),
        JsValue::Promise(_) => "Promise".to_string(),
        JsValue::Function(_) => "Function".to_string(),
        JsValue::Error(data) => data.borrow().name.clone(),
        JsValue::RegExp(_) => "RegExp".to_string(),
        JsValue::Date(_) => "Date".to_string(),
        JsValue::CollectionIterator(_) => "Object".to_string(),
        JsValue::Boxed(data) => data.borrow().kind_name().to_string(),
        JsValue::ModuleNamespace(_) => "Module".to_string(),
        JsValue::Proxy(_) => "Object".to_string(),
        JsValue::External(_) => "External".to_string(),
        _ => "Object".to_string(),
    }
}

/// Ancestor stack for cycle detection
///
/// Push before descending into a composite, pop after. Containment checks
/// compare value identity, never user-visible structure.
#[derive(Debug, Default)]
pub struct SeenStack {
    stack: Vec<ValueId>,
}

impl SeenStack {
    /// Create an empty stack
    pub fn new() -> Self {
        SeenStack::default()
    }

    /// Push a value; values without identity are ignored
    pub fn push(&mut self, value: &JsValue) {
        if let Some(id) = value.identity() {
            self.stack.push(id);
        }
    }

    /// Pop the most recent ancestor
    pub fn pop(&mut self) {
        self.stack.pop();
    }

    /// True when the value is an in-progress ancestor
    pub fn contains(&self, value: &JsValue) -> bool {
        match value.identity() {
            Some(id) => self.stack.contains(&id),
            None => false,
        }
    }

    /// Current nesting depth
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// True when no ancestors are being rendered
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

/// Dense circular-reference ids
///
/// Ids start at 1 and are assigned lazily, in the order cycles are first
/// detected, not in ancestor order.
#[derive(Debug, Default)]
pub struct CircularIds {
    ids: Vec<(ValueId, usize)>,
}

impl CircularIds {
    /// Create an empty id map
    pub fn new() -> Self {
        CircularIds::default()
    }

    /// True when no cycle has been detected yet
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Look up the id previously assigned to a value
    pub fn get(&self, value: &JsValue) -> Option<usize> {
        let id = value.identity()?;
        self.ids.iter().find(|(v, _)| *v == id).map(|(_, n)| *n)
    }

    /// Get or assign the dense id for a value
    pub fn assign(&mut self, value: &JsValue) -> usize {
        if let Some(n) = self.get(value) {
            return n;
        }
        let n = self.ids.len() + 1;
        if let Some(id) = value.identity() {
            self.ids.push((id, n));
        }
        n
    }
}
