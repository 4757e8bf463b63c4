//! Dynamic value representation for the embedded scripting environment
//!
//! This module provides the value lattice the inspection engine renders:
//! primitives plus reference-counted composite values with pointer identity.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use num_bigint::BigInt as NumBigInt;

use crate::collections::{MapData, SetData, WeakMapData, WeakSetData};
use crate::date::DateData;
use crate::error::ErrorData;
use crate::function::FunctionData;
use crate::iterator::IteratorData;
use crate::object::{CustomInspectFn, ObjectData, PropertyKey, Prototype, PropertyBag};
use crate::promise::{NamespaceData, PromiseData};
use crate::regexp::RegExpData;
use crate::symbol::SymbolValue;
use crate::typed_array::{ArrayBufferData, DataViewData, TypedArrayData};

/// BigInt value wrapper for arbitrary precision integers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigIntValue {
    inner: NumBigInt,
}

impl BigIntValue {
    /// Create a new BigIntValue from a NumBigInt
    pub fn new(inner: NumBigInt) -> Self {
        BigIntValue { inner }
    }

    /// Create a BigIntValue from an i64
    pub fn from_i64(n: i64) -> Self {
        BigIntValue {
            inner: NumBigInt::from(n),
        }
    }

    /// Get a reference to the inner BigInt
    pub fn inner(&self) -> &NumBigInt {
        &self.inner
    }

    /// Decimal digit string, without the `n` suffix
    pub fn to_digits(&self) -> String {
        self.inner.to_string()
    }
}

impl fmt::Display for BigIntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Internal array data
///
/// Element slots may be holes (sparse arrays); holes are distinct from
/// explicit `undefined` entries.
#[derive(Clone, Default)]
pub struct ArrayData {
    /// Array element slots; `None` is a hole
    pub elements: Vec<Option<JsValue>>,
    /// Own non-index properties
    pub extras: PropertyBag,
    /// Prototype link
    pub prototype: Prototype,
    /// Custom inspection hook, if installed
    pub custom_inspect: Option<Rc<CustomInspectFn>>,
}

impl fmt::Debug for ArrayData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayData")
            .field("elements", &self.elements)
            .field("extras", &self.extras)
            .field("prototype", &self.prototype)
            .finish()
    }
}

impl ArrayData {
    /// Create array data from dense values
    pub fn from_values(values: Vec<JsValue>) -> Self {
        ArrayData {
            elements: values.into_iter().map(Some).collect(),
            ..ArrayData::default()
        }
    }

    /// Array length including holes
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when the array has no element slots
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append a value
    pub fn push(&mut self, value: JsValue) {
        self.elements.push(Some(value));
    }

    /// Append a hole run of the given length
    pub fn push_holes(&mut self, count: usize) {
        self.elements.extend(std::iter::repeat_with(|| None).take(count));
    }
}

/// Boxed primitive wrapper objects (`new Number(3)` shapes)
#[derive(Debug, Clone)]
pub struct BoxedData {
    /// The wrapped primitive
    pub inner: JsValue,
    /// Additional own properties
    pub extras: PropertyBag,
    /// Prototype link
    pub prototype: Prototype,
}

impl BoxedData {
    /// Wrap a primitive value
    pub fn new(inner: JsValue) -> Self {
        debug_assert!(inner.is_primitive());
        BoxedData {
            inner,
            extras: PropertyBag::new(),
            prototype: Prototype::Ordinary,
        }
    }

    /// Constructor name of the wrapped primitive kind
    pub fn kind_name(&self) -> &'static str {
        match self.inner {
            JsValue::Number(_) => "Number",
            JsValue::String(_) => "String",
            JsValue::Boolean(_) => "Boolean",
            JsValue::BigInt(_) => "BigInt",
            JsValue::Symbol(_) => "Symbol",
            _ => "Object",
        }
    }
}

/// Proxy values: target and handler, never unwrapped by default
#[derive(Debug, Clone)]
pub struct ProxyData {
    /// Proxied target value
    pub target: JsValue,
    /// Handler object
    pub handler: JsValue,
    /// True once the proxy has been revoked
    pub revoked: bool,
}

impl ProxyData {
    /// Create a live proxy
    pub fn new(target: JsValue, handler: JsValue) -> Self {
        ProxyData {
            target,
            handler,
            revoked: false,
        }
    }

    /// Create a revoked proxy
    pub fn revoked() -> Self {
        ProxyData {
            target: JsValue::null(),
            handler: JsValue::null(),
            revoked: true,
        }
    }
}

/// Stable identity of a composite value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValueId(usize);

/// Dynamic script value
#[derive(Debug, Clone)]
pub enum JsValue {
    /// undefined
    Undefined,
    /// null
    Null,
    /// Boolean value
    Boolean(bool),
    /// Number (IEEE 754 double)
    Number(f64),
    /// String value
    String(String),
    /// Symbol value
    Symbol(SymbolValue),
    /// BigInt value (arbitrary precision integer)
    BigInt(BigIntValue),
    /// Object with properties
    Object(Rc<RefCell<ObjectData>>),
    /// Array
    Array(Rc<RefCell<ArrayData>>),
    /// Map collection
    Map(Rc<RefCell<MapData>>),
    /// Set collection
    Set(Rc<RefCell<SetData>>),
    /// WeakMap collection
    WeakMap(Rc<RefCell<WeakMapData>>),
    /// WeakSet collection
    WeakSet(Rc<RefCell<WeakSetData>>),
    /// Typed array view
    TypedArray(Rc<RefCell<TypedArrayData>>),
    /// Raw byte buffer
    ArrayBuffer(Rc<RefCell<ArrayBufferData>>),
    /// Byte-level buffer view
    DataView(Rc<RefCell<DataViewData>>),
    /// Promise
    Promise(Rc<RefCell<PromiseData>>),
    /// Function, class or native callable
    Function(Rc<RefCell<FunctionData>>),
    /// Error object
    Error(Rc<RefCell<ErrorData>>),
    /// RegExp object
    RegExp(Rc<RefCell<RegExpData>>),
    /// Date object
    Date(Rc<RefCell<DateData>>),
    /// Map/Set iterator carrying its remaining-entry snapshot
    CollectionIterator(Rc<RefCell<IteratorData>>),
    /// Boxed primitive wrapper object
    Boxed(Rc<RefCell<BoxedData>>),
    /// Module namespace object
    ModuleNamespace(Rc<RefCell<NamespaceData>>),
    /// Proxy object
    Proxy(Rc<RefCell<ProxyData>>),
    /// Opaque host pointer
    External(usize),
}

impl JsValue {
    /// Create undefined value
    pub fn undefined() -> Self {
        JsValue::Undefined
    }

    /// Create null value
    pub fn null() -> Self {
        JsValue::Null
    }

    /// Create boolean value
    pub fn boolean(v: bool) -> Self {
        JsValue::Boolean(v)
    }

    /// Create number value
    pub fn number(v: f64) -> Self {
        JsValue::Number(v)
    }

    /// Create string value
    pub fn string(s: impl Into<String>) -> Self {
        JsValue::String(s.into())
    }

    /// Create a symbol value
    pub fn symbol(sym: SymbolValue) -> Self {
        JsValue::Symbol(sym)
    }

    /// Create a BigInt value
    pub fn bigint(value: BigIntValue) -> Self {
        JsValue::BigInt(value)
    }

    /// Create empty object
    pub fn object() -> Self {
        JsValue::from_object(ObjectData::new())
    }

    /// Create an object from prepared data
    pub fn from_object(data: ObjectData) -> Self {
        JsValue::Object(Rc::new(RefCell::new(data)))
    }

    /// Create empty array
    pub fn array() -> Self {
        JsValue::from_array(ArrayData::default())
    }

    /// Create array from values
    pub fn array_from(values: Vec<JsValue>) -> Self {
        JsValue::from_array(ArrayData::from_values(values))
    }

    /// Create an array from prepared data
    pub fn from_array(data: ArrayData) -> Self {
        JsValue::Array(Rc::new(RefCell::new(data)))
    }

    /// Create an empty Map
    pub fn map() -> Self {
        JsValue::from_map(MapData::new())
    }

    /// Create a map from prepared data
    pub fn from_map(data: MapData) -> Self {
        JsValue::Map(Rc::new(RefCell::new(data)))
    }

    /// Create a map from entries
    pub fn map_from(entries: Vec<(JsValue, JsValue)>) -> Self {
        let mut data = MapData::new();
        for (k, v) in entries {
            data.set(k, v);
        }
        JsValue::from_map(data)
    }

    /// Create an empty Set
    pub fn set_collection() -> Self {
        JsValue::from_set(SetData::new())
    }

    /// Create a set from prepared data
    pub fn from_set(data: SetData) -> Self {
        JsValue::Set(Rc::new(RefCell::new(data)))
    }

    /// Create a set from values
    pub fn set_from(values: Vec<JsValue>) -> Self {
        let mut data = SetData::new();
        for v in values {
            data.add(v);
        }
        JsValue::from_set(data)
    }

    /// Create an empty WeakMap
    pub fn weak_map() -> Self {
        JsValue::WeakMap(Rc::new(RefCell::new(WeakMapData::new())))
    }

    /// Create a weak map from prepared data
    pub fn from_weak_map(data: WeakMapData) -> Self {
        JsValue::WeakMap(Rc::new(RefCell::new(data)))
    }

    /// Create an empty WeakSet
    pub fn weak_set() -> Self {
        JsValue::WeakSet(Rc::new(RefCell::new(WeakSetData::new())))
    }

    /// Create a weak set from prepared data
    pub fn from_weak_set(data: WeakSetData) -> Self {
        JsValue::WeakSet(Rc::new(RefCell::new(data)))
    }

    /// Create a typed array value
    pub fn typed_array(data: TypedArrayData) -> Self {
        JsValue::TypedArray(Rc::new(RefCell::new(data)))
    }

    /// Create an array buffer value
    pub fn array_buffer(data: ArrayBufferData) -> Self {
        JsValue::ArrayBuffer(Rc::new(RefCell::new(data)))
    }

    /// Create a data view value
    pub fn data_view(data: DataViewData) -> Self {
        JsValue::DataView(Rc::new(RefCell::new(data)))
    }

    /// Create a promise value
    pub fn promise(data: PromiseData) -> Self {
        JsValue::Promise(Rc::new(RefCell::new(data)))
    }

    /// Create a function value
    pub fn function(data: FunctionData) -> Self {
        JsValue::Function(Rc::new(RefCell::new(data)))
    }

    /// Create an error value
    pub fn error(data: ErrorData) -> Self {
        JsValue::Error(Rc::new(RefCell::new(data)))
    }

    /// Create a RegExp value
    pub fn regexp(data: RegExpData) -> Self {
        JsValue::RegExp(Rc::new(RefCell::new(data)))
    }

    /// Create a date value
    pub fn date(data: DateData) -> Self {
        JsValue::Date(Rc::new(RefCell::new(data)))
    }

    /// Create a collection iterator value
    pub fn iterator(data: IteratorData) -> Self {
        JsValue::CollectionIterator(Rc::new(RefCell::new(data)))
    }

    /// Create a boxed primitive value
    pub fn boxed(data: BoxedData) -> Self {
        JsValue::Boxed(Rc::new(RefCell::new(data)))
    }

    /// Create a module namespace value
    pub fn module_namespace(data: NamespaceData) -> Self {
        JsValue::ModuleNamespace(Rc::new(RefCell::new(data)))
    }

    /// Create a proxy value
    pub fn proxy(data: ProxyData) -> Self {
        JsValue::Proxy(Rc::new(RefCell::new(data)))
    }

    /// Create an external host-pointer value
    pub fn external(address: usize) -> Self {
        JsValue::External(address)
    }

    /// True for non-composite values
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            JsValue::Undefined
                | JsValue::Null
                | JsValue::Boolean(_)
                | JsValue::Number(_)
                | JsValue::String(_)
                | JsValue::Symbol(_)
                | JsValue::BigInt(_)
        )
    }

    /// Check if value is undefined
    pub fn is_undefined(&self) -> bool {
        matches!(self, JsValue::Undefined)
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, JsValue::Null)
    }

    /// Check if value is a string
    pub fn is_string(&self) -> bool {
        matches!(self, JsValue::String(_))
    }

    /// Check if value is a function
    pub fn is_function(&self) -> bool {
        matches!(self, JsValue::Function(_))
    }

    /// Get as boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            JsValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            JsValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as symbol
    pub fn as_symbol(&self) -> Option<&SymbolValue> {
        match self {
            JsValue::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    /// Get as BigInt
    pub fn as_bigint(&self) -> Option<&BigIntValue> {
        match self {
            JsValue::BigInt(b) => Some(b),
            _ => None,
        }
    }

    /// `typeof` classification string
    pub fn type_of(&self) -> &'static str {
        match self {
            JsValue::Undefined => "undefined",
            JsValue::Boolean(_) => "boolean",
            JsValue::Number(_) => "number",
            JsValue::String(_) => "string",
            JsValue::Symbol(_) => "symbol",
            JsValue::BigInt(_) => "bigint",
            JsValue::Function(_) => "function",
            _ => "object",
        }
    }

    /// Get the pointer identity of a composite value
    ///
    /// Primitives (and external pointers, which have no heap cell in this
    /// model) have no identity; they can never participate in cycles.
    pub fn identity(&self) -> Option<ValueId> {
        match self {
            JsValue::Object(rc) => Some(ValueId(Rc::as_ptr(rc) as usize)),
            JsValue::Array(rc) => Some(ValueId(Rc::as_ptr(rc) as usize)),
            JsValue::Map(rc) => Some(ValueId(Rc::as_ptr(rc) as usize)),
            JsValue::Set(rc) => Some(ValueId(Rc::as_ptr(rc) as usize)),
            JsValue::WeakMap(rc) => Some(ValueId(Rc::as_ptr(rc) as usize)),
            JsValue::WeakSet(rc) => Some(ValueId(Rc::as_ptr(rc) as usize)),
            JsValue::TypedArray(rc) => Some(ValueId(Rc::as_ptr(rc) as usize)),
            JsValue::ArrayBuffer(rc) => Some(ValueId(Rc::as_ptr(rc) as usize)),
            JsValue::DataView(rc) => Some(ValueId(Rc::as_ptr(rc) as usize)),
            JsValue::Promise(rc) => Some(ValueId(Rc::as_ptr(rc) as usize)),
            JsValue::Function(rc) => Some(ValueId(Rc::as_ptr(rc) as usize)),
            JsValue::Error(rc) => Some(ValueId(Rc::as_ptr(rc) as usize)),
            JsValue::RegExp(rc) => Some(ValueId(Rc::as_ptr(rc) as usize)),
            JsValue::Date(rc) => Some(ValueId(Rc::as_ptr(rc) as usize)),
            JsValue::CollectionIterator(rc) => Some(ValueId(Rc::as_ptr(rc) as usize)),
            JsValue::Boxed(rc) => Some(ValueId(Rc::as_ptr(rc) as usize)),
            JsValue::ModuleNamespace(rc) => Some(ValueId(Rc::as_ptr(rc) as usize)),
            JsValue::Proxy(rc) => Some(ValueId(Rc::as_ptr(rc) as usize)),
            JsValue::Undefined
            | JsValue::Null
            | JsValue::Boolean(_)
            | JsValue::Number(_)
            | JsValue::String(_)
            | JsValue::Symbol(_)
            | JsValue::BigInt(_)
            | JsValue::External(_) => None,
        }
    }

    /// SameValueZero comparison: NaN equals NaN, -0 equals +0, composites
    /// compare by identity
    pub fn same_value_zero(&self, other: &JsValue) -> bool {
        match (self, other) {
            (JsValue::Undefined, JsValue::Undefined) => true,
            (JsValue::Null, JsValue::Null) => true,
            (JsValue::Boolean(a), JsValue::Boolean(b)) => a == b,
            (JsValue::Number(a), JsValue::Number(b)) => {
                (a.is_nan() && b.is_nan()) || a == b
            }
            (JsValue::String(a), JsValue::String(b)) => a == b,
            (JsValue::Symbol(a), JsValue::Symbol(b)) => a == b,
            (JsValue::BigInt(a), JsValue::BigInt(b)) => a == b,
            (JsValue::External(a), JsValue::External(b)) => a == b,
            _ => match (self.identity(), other.identity()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }

    /// Set an enumerable data property on an object value
    ///
    /// Convenience for building test fixtures; no-op on non-objects.
    pub fn set(&self, key: &str, value: JsValue) {
        if let JsValue::Object(obj) = self {
            obj.borrow_mut().properties.set(key, value);
        }
    }

    /// Get an own data property of an object value
    pub fn get(&self, key: &str) -> Option<JsValue> {
        match self {
            JsValue::Object(obj) => obj
                .borrow()
                .properties
                .get_named(key)
                .and_then(|d| d.value().cloned()),
            _ => None,
        }
    }

    /// Look up a symbol-keyed own property of an object value
    pub fn get_symbol(&self, sym: &SymbolValue) -> Option<JsValue> {
        match self {
            JsValue::Object(obj) => obj
                .borrow()
                .properties
                .get(&PropertyKey::symbol(sym.clone()))
                .and_then(|d| d.value().cloned()),
            _ => None,
        }
    }
}
