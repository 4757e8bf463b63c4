//! Dynamic value model of the embedded scripting environment
//!
//! This crate provides the value lattice the inspection engine operates on:
//! - primitives (undefined, null, booleans, numbers, strings, symbols,
//!   big integers)
//! - plain objects with ordered property descriptors and prototype links
//! - arrays (including sparse arrays), Maps, Sets, weak collections
//! - typed arrays, array buffers and data views
//! - functions, classes, errors, regexps, dates, promises
//! - proxies, boxed primitives, module namespaces and collection iterators
//!
//! # Example
//!
//! ```
//! use value_core::{JsValue, MapData};
//!
//! let mut map = MapData::new();
//! map.set(JsValue::string("a"), JsValue::number(1.0));
//! let value = JsValue::from_map(map);
//!
//! assert!(value.identity().is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collections;
pub mod date;
pub mod error;
pub mod function;
pub mod iterator;
pub mod object;
pub mod promise;
pub mod regexp;
pub mod symbol;
pub mod typed_array;
pub mod value;

// Re-export main types for convenience
pub use collections::{MapData, SetData, WeakMapData, WeakSetData};
pub use date::DateData;
pub use error::{ErrorData, ErrorKind, JsError, JsResult};
pub use function::{FunctionData, FunctionKind, NativeFn};
pub use iterator::{IteratorData, IteratorEntries, IteratorKind};
pub use object::{
    CustomInspectFn, CustomInspectResult, GetterFn, ObjectData, PropertyBag, PropertyDescriptor,
    PropertyKey, PropertyKind, Prototype,
};
pub use promise::{NamespaceData, PromiseData, PromiseState};
pub use regexp::RegExpData;
pub use symbol::SymbolValue;
pub use typed_array::{
    ArrayBufferData, DataViewData, ElementKind, TypedArrayData, TypedElements,
};
pub use value::{ArrayData, BigIntValue, BoxedData, JsValue, ProxyData, ValueId};
