//! Value classification
//!
//! A closed renderer-kind set drives formatter dispatch: every composite
//! value maps to exactly one kind, derived from the value's structure alone.
//! The user-visible constructor label is resolved separately by walking the
//! prototype chain for an own `constructor` function property; a deleted or
//! rewritten `constructor` changes the label but never the kind.

use crate::context::{EngineResult, InspectContext};
use crate::engine;
use crate::options::InspectOptions;
use crate::primordials::primordials;
use crate::style;
use value_core::{
    IteratorKind, JsValue, PropertyKey, PropertyKind, Prototype, SymbolValue,
};

/// The closed classification controlling formatter and brace selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererKind {
    /// Terminal primitive rendering
    Primitive,
    /// The null value
    NullValue,
    /// Arrays, including sparse arrays
    Array,
    /// Typed array views
    TypedArray,
    /// Sets
    Set,
    /// Maps
    Map,
    /// Map iterators
    MapIterator,
    /// Set iterators
    SetIterator,
    /// Ordinary objects with the default prototype
    PlainObject,
    /// Functions and classes
    Function,
    /// Regular expressions
    RegExp,
    /// Dates
    Date,
    /// Errors
    Error,
    /// Raw byte buffers
    ArrayBuffer,
    /// Buffer views
    DataView,
    /// Promises
    Promise,
    /// Weak sets
    WeakSet,
    /// Weak maps
    WeakMap,
    /// Module namespace objects
    ModuleNamespace,
    /// Boxed primitive wrappers
    BoxedPrimitive,
    /// Proxies
    Proxy,
    /// Opaque host pointers
    External,
    /// Objects with a rewired or null prototype (class instances included)
    GenericObject,
}

/// Classify a value into its renderer kind
pub fn classify(value: &JsValue) -> RendererKind {
    match value {
        JsValue::Null => RendererKind::NullValue,
        JsValue::Undefined
        | JsValue::Boolean(_)
        | JsValue::Number(_)
        | JsValue::String(_)
        | JsValue::Symbol(_)
        | JsValue::BigInt(_) => RendererKind::Primitive,
        JsValue::Object(data) => match data.borrow().prototype {
            Prototype::Ordinary => RendererKind::PlainObject,
            Prototype::Null | Prototype::Custom(_) => RendererKind::GenericObject,
        },
        JsValue::Array(_) => RendererKind::Array,
        JsValue::Map(_) => RendererKind::Map,
        JsValue::Set(_) => RendererKind::Set,
        JsValue::WeakMap(_) => RendererKind::WeakMap,
        JsValue::WeakSet(_) => RendererKind::WeakSet,
        JsValue::TypedArray(_) => RendererKind::TypedArray,
        JsValue::ArrayBuffer(_) => RendererKind::ArrayBuffer,
        JsValue::DataView(_) => RendererKind::DataView,
        JsValue::Promise(_) => RendererKind::Promise,
        JsValue::Function(_) => RendererKind::Function,
        JsValue::Error(_) => RendererKind::Error,
        JsValue::RegExp(_) => RendererKind::RegExp,
        JsValue::Date(_) => RendererKind::Date,
        JsValue::CollectionIterator(data) => match data.borrow().kind {
            IteratorKind::Map => RendererKind::MapIterator,
            IteratorKind::Set => RendererKind::SetIterator,
        },
        JsValue::Boxed(_) => RendererKind::BoxedPrimitive,
        JsValue::ModuleNamespace(_) => RendererKind::ModuleNamespace,
        JsValue::Proxy(_) => RendererKind::Proxy,
        JsValue::External(_) => RendererKind::External,
    }
}

/// Names treated as built-in global constructors; prototype layers labeled
/// with one of these never contribute prototype properties
const BUILT_IN_OBJECTS: &[&str] = &[
    "Object",
    "Function",
    "Array",
    "Map",
    "Set",
    "WeakMap",
    "WeakSet",
    "Promise",
    "RegExp",
    "Date",
    "Error",
    "TypeError",
    "RangeError",
    "ReferenceError",
    "SyntaxError",
    "EvalError",
    "URIError",
    "AggregateError",
    "Boolean",
    "Number",
    "String",
    "Symbol",
    "BigInt",
    "ArrayBuffer",
    "SharedArrayBuffer",
    "DataView",
    "Int8Array",
    "Uint8Array",
    "Uint8ClampedArray",
    "Int16Array",
    "Uint16Array",
    "Int32Array",
    "Uint32Array",
    "Float32Array",
    "Float64Array",
    "BigInt64Array",
    "BigUint64Array",
    "Proxy",
];

/// True for names of built-in global constructors
pub(crate) fn is_built_in(name: &str) -> bool {
    BUILT_IN_OBJECTS.contains(&name)
}

/// Own `constructor` function property name of a value, if one exists
fn own_constructor_name(value: &JsValue) -> Option<String> {
    let desc = (primordials().own_descriptor)(value, &PropertyKey::string("constructor"))?;
    match desc.value() {
        Some(JsValue::Function(f)) => {
            let name = f.borrow().name.clone();
            if name.is_empty() { None } else { Some(name) }
        }
        _ => None,
    }
}

/// Resolve the constructor label of a composite value.
///
/// Returns `None` for null-prototype values with no resolvable constructor.
/// With `proto_props`, inherited own properties from up to three non-builtin
/// prototype layers are collected as rendered fragments.
pub(crate) fn resolve_constructor(
    ctx: &mut InspectContext,
    value: &JsValue,
    recurse_times: i64,
    mut proto_props: Option<&mut Vec<String>>,
) -> EngineResult<Option<String>> {
    let p = primordials();

    // The value's own `constructor` property wins.
    if let Some(name) = own_constructor_name(value) {
        if let Some(out) = proto_props.as_mut() {
            collect_prototype_properties(ctx, value, value, recurse_times, out)?;
        }
        return Ok(Some(name));
    }

    let first_proto = (p.prototype_of)(value);
    let mut layer = first_proto.clone();
    let mut walked_custom = false;
    loop {
        match layer {
            Prototype::Ordinary => {
                // The built-in prototype carries the built-in constructor.
                if walked_custom {
                    if let Some(out) = proto_props.as_mut() {
                        if let Prototype::Custom(start) = &first_proto {
                            collect_prototype_properties(ctx, value, start, recurse_times, out)?;
                        }
                    }
                }
                return Ok(Some((p.structural_name)(value)));
            }
            Prototype::Null => {
                if !walked_custom {
                    return Ok(None);
                }
                // A rewired chain ending in null: report the structural name
                // together with the unresolvable prototype's own rendering.
                let structural = (p.structural_name)(value);
                if ctx.depth_exceeded(recurse_times) {
                    return Ok(Some(format!("{} <Complex prototype>", structural)));
                }
                let Prototype::Custom(start) = first_proto else {
                    return Ok(Some(structural));
                };
                let summary = prototype_summary(ctx, &start);
                return Ok(Some(format!("{} <{}>", structural, summary)));
            }
            Prototype::Custom(obj) => {
                if let Some(name) = own_constructor_name(&obj) {
                    let skip = !walked_custom && is_built_in(&name);
                    if !skip {
                        if let Some(out) = proto_props.as_mut() {
                            collect_prototype_properties(
                                ctx,
                                value,
                                &obj,
                                recurse_times,
                                out,
                            )?;
                        }
                    }
                    return Ok(Some(name));
                }
                walked_custom = true;
                layer = (p.prototype_of)(&obj);
            }
        }
    }
}

/// Bounded one-line rendering of an unresolvable prototype object
fn prototype_summary(ctx: &InspectContext, proto: &JsValue) -> String {
    let opts = InspectOptions {
        depth: Some(-1),
        custom_inspect: false,
        ..ctx.opts.clone()
    };
    crate::inspect(proto, &opts).unwrap_or_else(|_| "Object".to_string())
}

/// Collect inherited own properties from up to three prototype layers.
///
/// Skips the `constructor` property, keys shadowed by the inspected value,
/// keys seen on earlier layers, function-valued entries and any layer
/// recognized as a built-in constructor's prototype.
fn collect_prototype_properties(
    ctx: &mut InspectContext,
    main: &JsValue,
    start: &JsValue,
    recurse_times: i64,
    output: &mut Vec<String>,
) -> EngineResult<()> {
    let p = primordials();
    let mut obj = start.clone();
    let mut earlier_keys: Vec<PropertyKey> = Vec::new();

    for depth in 0..3 {
        if depth != 0 || main.identity() == obj.identity() {
            let next = match (p.prototype_of)(&obj) {
                Prototype::Custom(next) => next,
                Prototype::Ordinary | Prototype::Null => return Ok(()),
            };
            obj = next;
            if let Some(name) = own_constructor_name(&obj) {
                if is_built_in(&name) {
                    return Ok(());
                }
            }
        }

        let keys = (p.own_keys)(&obj, true);
        ctx.seen.push(main);
        let result = collect_layer(ctx, main, &obj, &keys, &earlier_keys, recurse_times, output);
        ctx.seen.pop();
        result?;
        earlier_keys.extend(keys);
    }
    Ok(())
}

fn collect_layer(
    ctx: &mut InspectContext,
    main: &JsValue,
    obj: &JsValue,
    keys: &[PropertyKey],
    earlier_keys: &[PropertyKey],
    recurse_times: i64,
    output: &mut Vec<String>,
) -> EngineResult<()> {
    let p = primordials();
    for key in keys {
        if key.as_str() == Some("constructor")
            || (p.own_descriptor)(main, key).is_some()
            || earlier_keys.contains(key)
        {
            continue;
        }
        let desc = match (p.own_descriptor)(obj, key) {
            Some(desc) => desc,
            None => continue,
        };
        if matches!(desc.kind, PropertyKind::Data(JsValue::Function(_))) {
            continue;
        }
        let rendered = engine::format_property(
            ctx,
            obj,
            recurse_times,
            key,
            engine::ExtrasKind::Object,
            Some(desc),
            Some(main),
        )?;
        if ctx.opts.colors {
            output.push(style::dim(&rendered));
        } else {
            output.push(rendered);
        }
    }
    Ok(())
}

/// Resolve the constructor tag (`Symbol.toStringTag` equivalent).
///
/// An own tag that would already be printed as a regular property is
/// suppressed; inherited tags always apply.
pub(crate) fn resolve_tag(value: &JsValue, show_hidden: bool) -> String {
    let p = primordials();
    let key = PropertyKey::symbol(SymbolValue::to_string_tag());

    if let Some(desc) = (p.own_descriptor)(value, &key) {
        if let Some(JsValue::String(s)) = desc.value() {
            if s.is_empty() || show_hidden || desc.enumerable {
                return String::new();
            }
            return s.clone();
        }
        return String::new();
    }

    let mut proto = (p.prototype_of)(value);
    while let Prototype::Custom(obj) = proto {
        if let Some(desc) = (p.own_descriptor)(&obj, &key) {
            if let Some(JsValue::String(s)) = desc.value() {
                return s.clone();
            }
            return String::new();
        }
        proto = (p.prototype_of)(&obj);
    }
    String::new()
}

/// Compose the label prefix preceding the opening brace
pub(crate) fn get_prefix(
    constructor: Option<&str>,
    tag: &str,
    fallback: &str,
    size: &str,
) -> String {
    match constructor {
        None => {
            if !tag.is_empty() && fallback != tag {
                format!("[{}{}: null prototype] [{}] ", fallback, size, tag)
            } else {
                format!("[{}{}: null prototype] ", fallback, size)
            }
        }
        Some(ctor) => {
            if !tag.is_empty() && ctor != tag {
                format!("{}{} [{}] ", ctor, size, tag)
            } else {
                format!("{}{} ", ctor, size)
            }
        }
    }
}

/// Prefix for generic objects and depth-limit summaries
pub(crate) fn get_ctx_style(value: &JsValue, constructor: Option<&str>, tag: &str) -> String {
    let fallback = if constructor.is_none() {
        let structural = (primordials().structural_name)(value);
        if structural == tag {
            "Object".to_string()
        } else {
            structural
        }
    } else {
        String::new()
    };
    get_prefix(constructor, tag, &fallback, "")
}
