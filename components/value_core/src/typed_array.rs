//! Typed arrays, array buffers and data views
//!
//! Typed-array elements are stored decoded (f64 for the numeric kinds, big
//! integers for the 64-bit integer kinds) next to a link back to the backing
//! buffer, so rendering never has to re-decode raw bytes. Buffers keep their
//! raw bytes for the hex-preview fast path.

use num_traits::cast::cast;

use crate::object::{Prototype, PropertyBag};
use crate::value::{BigIntValue, JsValue};

/// Element kind of a typed array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 8-bit signed integers
    Int8,
    /// 8-bit unsigned integers
    Uint8,
    /// 8-bit unsigned integers with clamped conversion
    Uint8Clamped,
    /// 16-bit signed integers
    Int16,
    /// 16-bit unsigned integers
    Uint16,
    /// 32-bit signed integers
    Int32,
    /// 32-bit unsigned integers
    Uint32,
    /// 32-bit floats
    Float32,
    /// 64-bit floats
    Float64,
    /// 64-bit signed big integers
    BigInt64,
    /// 64-bit unsigned big integers
    BigUint64,
}

impl ElementKind {
    /// The constructor name for this kind
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Int8 => "Int8Array",
            ElementKind::Uint8 => "Uint8Array",
            ElementKind::Uint8Clamped => "Uint8ClampedArray",
            ElementKind::Int16 => "Int16Array",
            ElementKind::Uint16 => "Uint16Array",
            ElementKind::Int32 => "Int32Array",
            ElementKind::Uint32 => "Uint32Array",
            ElementKind::Float32 => "Float32Array",
            ElementKind::Float64 => "Float64Array",
            ElementKind::BigInt64 => "BigInt64Array",
            ElementKind::BigUint64 => "BigUint64Array",
        }
    }

    /// Bytes per element
    pub fn byte_size(&self) -> usize {
        match self {
            ElementKind::Int8 | ElementKind::Uint8 | ElementKind::Uint8Clamped => 1,
            ElementKind::Int16 | ElementKind::Uint16 => 2,
            ElementKind::Int32 | ElementKind::Uint32 | ElementKind::Float32 => 4,
            ElementKind::Float64 | ElementKind::BigInt64 | ElementKind::BigUint64 => 8,
        }
    }

    /// True for the big-integer element kinds
    pub fn is_bigint(&self) -> bool {
        matches!(self, ElementKind::BigInt64 | ElementKind::BigUint64)
    }
}

/// Decoded typed-array element storage
#[derive(Debug, Clone)]
pub enum TypedElements {
    /// Elements of the numeric kinds
    Number(Vec<f64>),
    /// Elements of the 64-bit integer kinds
    BigInt(Vec<BigIntValue>),
}

impl TypedElements {
    /// Number of elements
    pub fn len(&self) -> usize {
        match self {
            TypedElements::Number(v) => v.len(),
            TypedElements::BigInt(v) => v.len(),
        }
    }

    /// True when no elements exist
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Internal typed array data
#[derive(Debug, Clone)]
pub struct TypedArrayData {
    /// Element kind
    pub kind: ElementKind,
    /// Decoded elements
    pub elements: TypedElements,
    /// Backing buffer value, when one was attached
    pub buffer: Option<JsValue>,
    /// Offset into the backing buffer
    pub byte_offset: usize,
    /// Additional own non-index properties
    pub extras: PropertyBag,
    /// Prototype link
    pub prototype: Prototype,
}

impl TypedArrayData {
    /// Create a numeric typed array from f64 values, converting each through
    /// the kind's integer semantics (wrapping, like a runtime's element
    /// stores)
    pub fn from_numbers(kind: ElementKind, values: &[f64]) -> Self {
        debug_assert!(!kind.is_bigint());
        let elements = values.iter().map(|n| convert_element(kind, *n)).collect();
        TypedArrayData {
            kind,
            elements: TypedElements::Number(elements),
            buffer: None,
            byte_offset: 0,
            extras: PropertyBag::new(),
            prototype: Prototype::Ordinary,
        }
    }

    /// Create a big-integer typed array
    pub fn from_bigints(kind: ElementKind, values: Vec<BigIntValue>) -> Self {
        debug_assert!(kind.is_bigint());
        TypedArrayData {
            kind,
            elements: TypedElements::BigInt(values),
            buffer: None,
            byte_offset: 0,
            extras: PropertyBag::new(),
            prototype: Prototype::Ordinary,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when the array has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Total byte length of the view
    pub fn byte_length(&self) -> usize {
        self.len() * self.kind.byte_size()
    }
}

/// Convert an arbitrary f64 into a given element kind's value range
fn convert_element(kind: ElementKind, n: f64) -> f64 {
    if !n.is_finite() {
        return match kind {
            ElementKind::Float32 | ElementKind::Float64 => n,
            _ => 0.0,
        };
    }
    match kind {
        ElementKind::Int8 => (n as i64 as i8) as f64,
        ElementKind::Uint8 => (n as i64 as u8) as f64,
        ElementKind::Uint8Clamped => {
            let clamped: u8 = cast(n.round().clamp(0.0, 255.0)).unwrap_or(0);
            clamped as f64
        }
        ElementKind::Int16 => (n as i64 as i16) as f64,
        ElementKind::Uint16 => (n as i64 as u16) as f64,
        ElementKind::Int32 => (n as i64 as i32) as f64,
        ElementKind::Uint32 => (n as i64 as u32) as f64,
        ElementKind::Float32 => n as f32 as f64,
        ElementKind::Float64 => n,
        ElementKind::BigInt64 | ElementKind::BigUint64 => unreachable!(),
    }
}

/// Internal array buffer data
#[derive(Debug, Clone, Default)]
pub struct ArrayBufferData {
    /// Raw bytes
    pub data: Vec<u8>,
    /// True for shared buffers
    pub shared: bool,
    /// True once the buffer has been detached; the bytes are gone
    pub detached: bool,
    /// Additional own properties
    pub extras: PropertyBag,
    /// Prototype link
    pub prototype: Prototype,
}

impl ArrayBufferData {
    /// Create a plain buffer over the given bytes
    pub fn new(data: Vec<u8>) -> Self {
        ArrayBufferData {
            data,
            ..ArrayBufferData::default()
        }
    }

    /// Create a shared buffer over the given bytes
    pub fn shared(data: Vec<u8>) -> Self {
        ArrayBufferData {
            data,
            shared: true,
            ..ArrayBufferData::default()
        }
    }

    /// Byte length; zero once detached
    pub fn byte_length(&self) -> usize {
        if self.detached { 0 } else { self.data.len() }
    }

    /// The constructor name for this buffer
    pub fn name(&self) -> &'static str {
        if self.shared {
            "SharedArrayBuffer"
        } else {
            "ArrayBuffer"
        }
    }
}

/// Internal data view data
#[derive(Debug, Clone)]
pub struct DataViewData {
    /// The viewed buffer
    pub buffer: JsValue,
    /// Offset into the buffer
    pub byte_offset: usize,
    /// Length of the view in bytes
    pub byte_length: usize,
    /// Additional own properties
    pub extras: PropertyBag,
    /// Prototype link
    pub prototype: Prototype,
}

impl DataViewData {
    /// Create a view over a buffer value
    pub fn new(buffer: JsValue, byte_offset: usize, byte_length: usize) -> Self {
        DataViewData {
            buffer,
            byte_offset,
            byte_length,
            extras: PropertyBag::new(),
            prototype: Prototype::Ordinary,
        }
    }
}
