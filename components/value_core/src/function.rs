//! Function and class values

use std::fmt;
use std::rc::Rc;

use crate::error::JsResult;
use crate::object::{CustomInspectFn, Prototype, PropertyBag};
use crate::value::JsValue;

/// Native call signature: receives the `this` value and the arguments
pub type NativeFn = dyn Fn(&JsValue, &[JsValue]) -> JsResult<JsValue>;

/// The flavor of a function value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionKind {
    /// Ordinary function
    Normal,
    /// Generator function
    Generator,
    /// Async function
    Async,
    /// Async generator function
    AsyncGenerator,
    /// Class constructor; carries the superclass name when extending
    Class {
        /// Name of the extended class, if any
        super_name: Option<String>,
    },
}

impl FunctionKind {
    /// The bracketed type label used when rendering (`Function`,
    /// `GeneratorFunction`, ...)
    pub fn type_label(&self) -> &'static str {
        match self {
            FunctionKind::Normal | FunctionKind::Class { .. } => "Function",
            FunctionKind::Generator => "GeneratorFunction",
            FunctionKind::Async => "AsyncFunction",
            FunctionKind::AsyncGenerator => "AsyncGeneratorFunction",
        }
    }
}

/// Internal function data
#[derive(Clone)]
pub struct FunctionData {
    /// Function name; empty for anonymous functions
    pub name: String,
    /// Function flavor
    pub kind: FunctionKind,
    /// Native implementation, when invocable from the host
    pub call: Option<Rc<NativeFn>>,
    /// Additional own properties
    pub extras: PropertyBag,
    /// Prototype link
    pub prototype: Prototype,
    /// Custom inspection hook, if installed
    pub custom_inspect: Option<Rc<CustomInspectFn>>,
}

impl fmt::Debug for FunctionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionData")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("call", &self.call.is_some())
            .field("extras", &self.extras)
            .finish()
    }
}

impl FunctionData {
    /// Create a named ordinary function without a body
    pub fn named(name: impl Into<String>) -> Self {
        FunctionData {
            name: name.into(),
            kind: FunctionKind::Normal,
            call: None,
            extras: PropertyBag::new(),
            prototype: Prototype::Ordinary,
            custom_inspect: None,
        }
    }

    /// Create a named function of a given flavor
    pub fn with_kind(name: impl Into<String>, kind: FunctionKind) -> Self {
        FunctionData {
            kind,
            ..FunctionData::named(name)
        }
    }

    /// Create a class constructor
    pub fn class(name: impl Into<String>, super_name: Option<String>) -> Self {
        FunctionData::with_kind(name, FunctionKind::Class { super_name })
    }

    /// Create a callable native function
    pub fn native(
        name: impl Into<String>,
        call: impl Fn(&JsValue, &[JsValue]) -> JsResult<JsValue> + 'static,
    ) -> Self {
        FunctionData {
            call: Some(Rc::new(call)),
            ..FunctionData::named(name)
        }
    }

    /// True for class constructors
    pub fn is_class(&self) -> bool {
        matches!(self.kind, FunctionKind::Class { .. })
    }
}
