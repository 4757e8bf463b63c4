//! Kind formatters
//!
//! One fragment builder per renderer kind. Each returns the ordered fragment
//! list for a composite value; the engine appends property entries and the
//! layout reducer merges everything afterwards.

use crate::context::{EngineResult, InspectContext};
use crate::engine::{format_property, format_value, ExtrasKind};
use crate::layout::reduce_to_single_string;
use crate::numbers::{format_bigint, format_number};
use crate::primordials::{primordials, ProxyDetails, WeakPreview};
use crate::strings::format_primitive;
use crate::style::Style;
use value_core::{
    FunctionKind, IteratorEntries, JsValue, PromiseState, PropertyDescriptor, PropertyKey,
    TypedElements,
};

/// Fragment builder selection for one composite value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KindFormatter {
    /// No intrinsic fragments; only property entries follow
    Empty,
    /// Array elements with hole runs and truncation
    Array,
    /// Typed-array elements
    TypedArray,
    /// Set values
    Set,
    /// Map entries
    Map,
    /// Iterator snapshot entries
    Iterator,
    /// Raw byte preview
    ArrayBuffer,
    /// Promise state
    Promise,
    /// Weak-collection preview or placeholder
    WeakCollection,
    /// Module namespace exports
    Namespace,
}

/// Iterator-style entry treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IterState {
    /// Entries from a weak collection: sorted for stable output
    Weak,
    /// Plain iterator values
    Iterator,
    /// Key-value entries rendered as `[ k, v ]` pairs
    MapEntries,
}

/// Run the selected fragment builder
pub(crate) fn run(
    ctx: &mut InspectContext,
    formatter: KindFormatter,
    value: &JsValue,
    recurse_times: i64,
) -> EngineResult<Vec<String>> {
    match formatter {
        KindFormatter::Empty => Ok(Vec::new()),
        KindFormatter::Array => format_array(ctx, value, recurse_times),
        KindFormatter::TypedArray => format_typed_array(ctx, value, recurse_times),
        KindFormatter::Set => format_set(ctx, value, recurse_times),
        KindFormatter::Map => format_map(ctx, value, recurse_times),
        KindFormatter::Iterator => format_iterator(ctx, value, recurse_times),
        KindFormatter::ArrayBuffer => Ok(format_array_buffer(ctx, value)),
        KindFormatter::Promise => format_promise(ctx, value, recurse_times),
        KindFormatter::WeakCollection => format_weak_collection(ctx, value, recurse_times),
        KindFormatter::Namespace => format_namespace(ctx, value, recurse_times),
    }
}

fn more_items(count: usize) -> String {
    format!("... {} more item{}", count, if count > 1 { "s" } else { "" })
}

fn format_array(
    ctx: &mut InspectContext,
    value: &JsValue,
    recurse_times: i64,
) -> EngineResult<Vec<String>> {
    let elements = match value {
        JsValue::Array(data) => data.borrow().elements.clone(),
        _ => unreachable!(),
    };
    let value_len = elements.len();
    let max = ctx.opts.effective_max_array_length();
    let mut output = Vec::new();
    let mut index = 0;

    while index < value_len && output.len() < max {
        match &elements[index] {
            None => {
                // Sparse run: one `<n empty items>` fragment per run.
                let start = index;
                while index < value_len && elements[index].is_none() {
                    index += 1;
                }
                let count = index - start;
                let plural = if count > 1 { "s" } else { "" };
                output.push(ctx.stylize(
                    &format!("<{} empty item{}>", count, plural),
                    Style::Undefined,
                ));
            }
            Some(element) => {
                ctx.indentation_lvl += 2;
                let rendered = format_value(ctx, element, recurse_times, false);
                ctx.indentation_lvl -= 2;
                output.push(rendered?);
                index += 1;
            }
        }
    }
    let remaining = value_len - index;
    if remaining > 0 {
        output.push(more_items(remaining));
    }
    Ok(output)
}

fn format_typed_array(
    ctx: &mut InspectContext,
    value: &JsValue,
    recurse_times: i64,
) -> EngineResult<Vec<String>> {
    let (elements, kind, byte_offset, buffer) = match value {
        JsValue::TypedArray(data) => {
            let data = data.borrow();
            (
                data.elements.clone(),
                data.kind,
                data.byte_offset,
                data.buffer.clone(),
            )
        }
        _ => unreachable!(),
    };
    let length = elements.len();
    let max = usize::min(ctx.opts.effective_max_array_length(), length);
    let remaining = length - max;

    let mut output = Vec::with_capacity(max);
    match &elements {
        TypedElements::Number(values) => {
            for n in values.iter().take(max) {
                output.push(format_number(
                    ctx.opts.colors,
                    *n,
                    ctx.opts.numeric_separator,
                ));
            }
        }
        TypedElements::BigInt(values) => {
            for b in values.iter().take(max) {
                output.push(format_bigint(
                    ctx.opts.colors,
                    b,
                    ctx.opts.numeric_separator,
                ));
            }
        }
    }
    if remaining > 0 {
        output.push(more_items(remaining));
    }

    if ctx.opts.show_hidden {
        // The hidden view extras are getters on a real runtime; `buffer`
        // goes last since it is the only non-primitive.
        ctx.indentation_lvl += 2;
        let hidden: [(&str, JsValue); 5] = [
            (
                "BYTES_PER_ELEMENT",
                JsValue::number(kind.byte_size() as f64),
            ),
            ("length", JsValue::number(length as f64)),
            (
                "byteLength",
                JsValue::number((length * kind.byte_size()) as f64),
            ),
            ("byteOffset", JsValue::number(byte_offset as f64)),
            ("buffer", buffer.unwrap_or_else(JsValue::undefined)),
        ];
        for (name, extra) in hidden {
            let rendered = format_value(ctx, &extra, recurse_times, true);
            match rendered {
                Ok(rendered) => output.push(format!("[{}]: {}", name, rendered)),
                Err(err) => {
                    ctx.indentation_lvl -= 2;
                    return Err(err);
                }
            }
        }
        ctx.indentation_lvl -= 2;
    }
    Ok(output)
}

fn format_set(
    ctx: &mut InspectContext,
    value: &JsValue,
    recurse_times: i64,
) -> EngineResult<Vec<String>> {
    let values = (primordials().set_values)(value).unwrap_or_default();
    let mut output = Vec::with_capacity(values.len());
    ctx.indentation_lvl += 2;
    for v in &values {
        let rendered = format_value(ctx, v, recurse_times, false);
        match rendered {
            Ok(rendered) => output.push(rendered),
            Err(err) => {
                ctx.indentation_lvl -= 2;
                return Err(err);
            }
        }
    }
    ctx.indentation_lvl -= 2;
    Ok(output)
}

fn format_map(
    ctx: &mut InspectContext,
    value: &JsValue,
    recurse_times: i64,
) -> EngineResult<Vec<String>> {
    let entries = (primordials().map_entries)(value).unwrap_or_default();
    let mut output = Vec::with_capacity(entries.len());
    ctx.indentation_lvl += 2;
    for (k, v) in &entries {
        let rendered = format_value(ctx, k, recurse_times, false)
            .and_then(|key| format_value(ctx, v, recurse_times, false).map(|val| (key, val)));
        match rendered {
            Ok((key, val)) => output.push(format!("{} => {}", key, val)),
            Err(err) => {
                ctx.indentation_lvl -= 2;
                return Err(err);
            }
        }
    }
    ctx.indentation_lvl -= 2;
    Ok(output)
}

fn format_set_iter_inner(
    ctx: &mut InspectContext,
    recurse_times: i64,
    entries: &[JsValue],
    state: IterState,
) -> EngineResult<Vec<String>> {
    let max = usize::min(ctx.opts.effective_max_array_length(), entries.len());
    let mut output = Vec::with_capacity(max);
    ctx.indentation_lvl += 2;
    for entry in entries.iter().take(max) {
        let rendered = format_value(ctx, entry, recurse_times, false);
        match rendered {
            Ok(rendered) => output.push(rendered),
            Err(err) => {
                ctx.indentation_lvl -= 2;
                return Err(err);
            }
        }
    }
    ctx.indentation_lvl -= 2;
    if state == IterState::Weak && !ctx.opts.sorted.is_active() {
        // Weak entries have no reliable order; sort for stable output.
        output.sort();
    }
    let remaining = entries.len() - max;
    if remaining > 0 {
        output.push(more_items(remaining));
    }
    Ok(output)
}

fn format_map_iter_inner(
    ctx: &mut InspectContext,
    recurse_times: i64,
    entries: &[(JsValue, JsValue)],
    state: IterState,
) -> EngineResult<Vec<String>> {
    let max = usize::min(ctx.opts.effective_max_array_length(), entries.len());
    let mut output = Vec::with_capacity(max);
    ctx.indentation_lvl += 2;
    for (k, v) in entries.iter().take(max) {
        let rendered = format_value(ctx, k, recurse_times, false)
            .and_then(|key| format_value(ctx, v, recurse_times, false).map(|val| (key, val)));
        let (key, val) = match rendered {
            Ok(pair) => pair,
            Err(err) => {
                ctx.indentation_lvl -= 2;
                return Err(err);
            }
        };
        match state {
            IterState::Weak => output.push(format!("{} => {}", key, val)),
            _ => {
                let braces = ("[".to_string(), "]".to_string());
                output.push(reduce_to_single_string(
                    ctx,
                    vec![key, val],
                    "",
                    &braces,
                    ExtrasKind::ArrayExtras,
                    recurse_times,
                    None,
                ));
            }
        }
    }
    ctx.indentation_lvl -= 2;
    if state == IterState::Weak && !ctx.opts.sorted.is_active() {
        output.sort();
    }
    let remaining = entries.len() - max;
    if remaining > 0 {
        output.push(more_items(remaining));
    }
    Ok(output)
}

fn format_iterator(
    ctx: &mut InspectContext,
    value: &JsValue,
    recurse_times: i64,
) -> EngineResult<Vec<String>> {
    let entries = match value {
        JsValue::CollectionIterator(data) => data.borrow().entries.clone(),
        _ => unreachable!(),
    };
    match entries {
        IteratorEntries::Pairs(pairs) => {
            format_map_iter_inner(ctx, recurse_times, &pairs, IterState::MapEntries)
        }
        IteratorEntries::Values(values) => {
            format_set_iter_inner(ctx, recurse_times, &values, IterState::Iterator)
        }
    }
}

fn format_weak_collection(
    ctx: &mut InspectContext,
    value: &JsValue,
    recurse_times: i64,
) -> EngineResult<Vec<String>> {
    if ctx.opts.show_hidden {
        match (primordials().weak_preview)(value) {
            WeakPreview::MapEntries(entries) => {
                return format_map_iter_inner(ctx, recurse_times, &entries, IterState::Weak);
            }
            WeakPreview::SetValues(values) => {
                return format_set_iter_inner(ctx, recurse_times, &values, IterState::Weak);
            }
            WeakPreview::Unknown => {}
        }
    }
    Ok(vec![ctx.stylize("<items unknown>", Style::Special)])
}

fn format_promise(
    ctx: &mut InspectContext,
    value: &JsValue,
    recurse_times: i64,
) -> EngineResult<Vec<String>> {
    let state = match value {
        JsValue::Promise(data) => data.borrow().state.clone(),
        _ => unreachable!(),
    };
    match state {
        PromiseState::Pending => Ok(vec![ctx.stylize("<pending>", Style::Special)]),
        PromiseState::Fulfilled(inner) => {
            ctx.indentation_lvl += 2;
            let rendered = format_value(ctx, &inner, recurse_times, false);
            ctx.indentation_lvl -= 2;
            Ok(vec![rendered?])
        }
        PromiseState::Rejected(reason) => {
            ctx.indentation_lvl += 2;
            let rendered = format_value(ctx, &reason, recurse_times, false);
            ctx.indentation_lvl -= 2;
            Ok(vec![format!(
                "{} {}",
                ctx.stylize("<rejected>", Style::Special),
                rendered?
            )])
        }
    }
}

fn format_array_buffer(ctx: &mut InspectContext, value: &JsValue) -> Vec<String> {
    let (bytes, detached) = match value {
        JsValue::ArrayBuffer(data) => {
            let data = data.borrow();
            (data.data.clone(), data.detached)
        }
        _ => unreachable!(),
    };
    if detached {
        return vec![ctx.stylize("(detached)", Style::Special)];
    }
    let max = usize::min(ctx.opts.effective_max_array_length(), bytes.len());
    let mut hex = bytes
        .iter()
        .take(max)
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ");
    let remaining = bytes.len() - max;
    if remaining > 0 {
        hex.push_str(&format!(
            " ... {} more byte{}",
            remaining,
            if remaining > 1 { "s" } else { "" }
        ));
    }
    vec![format!(
        "{}: <{}>",
        ctx.stylize("[Uint8Contents]", Style::Special),
        hex
    )]
}

fn format_namespace(
    ctx: &mut InspectContext,
    value: &JsValue,
    recurse_times: i64,
) -> EngineResult<Vec<String>> {
    let exports = match value {
        JsValue::ModuleNamespace(data) => data.borrow().exports.clone(),
        _ => unreachable!(),
    };
    let mut output = Vec::with_capacity(exports.len());
    for (name, slot) in exports {
        match slot {
            Some(export) => {
                let rendered = format_property(
                    ctx,
                    value,
                    recurse_times,
                    &PropertyKey::string(name),
                    ExtrasKind::Object,
                    Some(PropertyDescriptor::data(export)),
                    None,
                )?;
                output.push(rendered);
            }
            None => {
                // Uninitialized binding: reading it would throw, so render
                // the placeholder the runtime shows for dead-zone exports.
                output.push(format!(
                    "{}: {}",
                    name,
                    ctx.stylize("<uninitialized>", Style::Special)
                ));
            }
        }
    }
    Ok(output)
}

/// `Proxy [ target, handler ]` rendering under `show_proxy`
pub(crate) fn format_proxy(
    ctx: &mut InspectContext,
    details: &ProxyDetails,
    recurse_times: i64,
) -> EngineResult<String> {
    if ctx.depth_exceeded(recurse_times) {
        return Ok(ctx.stylize("Proxy [Array]", Style::Special));
    }
    let recurse_times = recurse_times + 1;
    ctx.indentation_lvl += 2;
    let rendered = format_value(ctx, &details.target, recurse_times, false).and_then(|target| {
        format_value(ctx, &details.handler, recurse_times, false)
            .map(|handler| vec![target, handler])
    });
    ctx.indentation_lvl -= 2;
    let braces = ("Proxy [".to_string(), "]".to_string());
    Ok(reduce_to_single_string(
        ctx,
        rendered?,
        "",
        &braces,
        ExtrasKind::ArrayExtras,
        recurse_times,
        None,
    ))
}

/// `[class Foo extends Bar]`-style base label
fn get_class_base(
    name: &str,
    super_name: Option<&str>,
    constructor: Option<&str>,
    tag: &str,
) -> String {
    let shown_name = if name.is_empty() { "(anonymous)" } else { name };
    let mut base = format!("class {}", shown_name);
    if let Some(ctor) = constructor {
        if ctor != "Function" {
            base.push_str(&format!(" [{}]", ctor));
        }
    }
    if !tag.is_empty() && constructor != Some(tag) {
        base.push_str(&format!(" [{}]", tag));
    }
    match constructor {
        Some(_) => {
            if let Some(super_name) = super_name {
                base.push_str(&format!(" extends {}", super_name));
            }
        }
        None => base.push_str(" extends [null prototype]"),
    }
    format!("[{}]", base)
}

/// `[Function: name]`-style base label
pub(crate) fn get_function_base(value: &JsValue, constructor: Option<&str>, tag: &str) -> String {
    let (name, kind) = match value {
        JsValue::Function(data) => {
            let data = data.borrow();
            (data.name.clone(), data.kind.clone())
        }
        _ => return String::new(),
    };

    if let FunctionKind::Class { super_name } = &kind {
        return get_class_base(&name, super_name.as_deref(), constructor, tag);
    }

    let type_label = kind.type_label();
    let mut base = format!("[{}", type_label);
    if constructor.is_none() {
        base.push_str(" (null prototype)");
    }
    if name.is_empty() {
        base.push_str(" (anonymous)");
    } else {
        base.push_str(&format!(": {}", name));
    }
    base.push(']');
    if let Some(ctor) = constructor {
        if ctor != type_label {
            base.push_str(&format!(" {}", ctor));
        }
    }
    if !tag.is_empty() && constructor != Some(tag) {
        base.push_str(&format!(" [{}]", tag));
    }
    base
}

/// `[Number: 3]`-style base label for boxed primitives
pub(crate) fn get_boxed_base(
    ctx: &InspectContext,
    value: &JsValue,
    keys: &[PropertyKey],
    constructor: Option<&str>,
    tag: &str,
) -> String {
    let (inner, type_name) = match value {
        JsValue::Boxed(data) => {
            let data = data.borrow();
            (data.inner.clone(), data.kind_name())
        }
        _ => return String::new(),
    };

    let mut base = format!("[{}", type_name);
    if constructor != Some(type_name) {
        match constructor {
            None => base.push_str(" (null prototype)"),
            Some(ctor) => base.push_str(&format!(" ({})", ctor)),
        }
    }
    // The wrapped primitive is never colored inside the label.
    let plain_opts = crate::options::InspectOptions {
        colors: false,
        ..ctx.opts.clone()
    };
    base.push_str(&format!(": {}]", format_primitive(&plain_opts, &inner, 0)));
    if !tag.is_empty() && constructor != Some(tag) {
        base.push_str(&format!(" [{}]", tag));
    }
    if !keys.is_empty() || !ctx.opts.colors {
        return base;
    }
    let style = match type_name {
        "Number" => Style::Number,
        "String" => Style::String,
        "Boolean" => Style::Boolean,
        "BigInt" => Style::BigInt,
        _ => Style::Symbol,
    };
    ctx.stylize(&base, style)
}
