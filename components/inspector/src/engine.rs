//! Recursive formatter
//!
//! `format_value` is the state machine described by the inspection contract:
//! primitives terminate immediately; proxies, custom hooks, cycles and the
//! depth ceiling each short-circuit; everything else classifies, formats its
//! fragments through the kind formatter, appends property fragments and
//! reduces to a single string. The ancestor stack is strictly push/descend/
//! pop, which is what makes cycle detection sound.

use std::sync::LazyLock;

use regex::Regex;

use crate::classify::{classify, get_ctx_style, get_prefix, resolve_constructor, resolve_tag, RendererKind};
use crate::context::{Abort, EngineResult, InspectContext, RECURSION_SOFT_LIMIT};
use crate::errors::format_error;
use crate::formatters;
use crate::layout::reduce_to_single_string;
use crate::options::{Compact, Getters, Sorted};
use crate::primordials::primordials;
use crate::strings::{escape_inner, format_primitive, str_escape};
use crate::style::Style;
use crate::width::get_string_width;
use value_core::{
    CustomInspectResult, JsValue, PropertyDescriptor, PropertyKey, PropertyKind,
};

/// Identifier-shaped keys render bare; everything else renders quoted
static IDENT_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z_0-9]*$").expect("key pattern"));

/// Shape of the fragment list being built, controlling property rendering
/// and layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExtrasKind {
    /// Ordinary `key: value` entries
    Object,
    /// Pure array elements, rendered without keys
    Array,
    /// Array-shaped output with named extra entries
    ArrayExtras,
}

/// Format one value at the given logical recursion depth
pub(crate) fn format_value(
    ctx: &mut InspectContext,
    value: &JsValue,
    recurse_times: i64,
    from_typed_array: bool,
) -> EngineResult<String> {
    if ctx.recursion_depth >= RECURSION_SOFT_LIMIT {
        return Err(Abort::Overflow);
    }
    ctx.recursion_depth += 1;
    let result = format_value_inner(ctx, value, recurse_times, from_typed_array);
    ctx.recursion_depth -= 1;
    result
}

fn format_value_inner(
    ctx: &mut InspectContext,
    value: &JsValue,
    recurse_times: i64,
    from_typed_array: bool,
) -> EngineResult<String> {
    if value.is_primitive() {
        return Ok(format_primitive(&ctx.opts, value, ctx.indentation_lvl));
    }

    let p = primordials();

    // Proxies are resolved before anything else so that no traps fire.
    let proxy = (p.proxy_details)(value);
    let mut target = value.clone();
    if let Some(details) = &proxy {
        if details.revoked {
            return Ok(ctx.stylize("<Revoked Proxy>", Style::Special));
        }
        if ctx.opts.show_proxy {
            return formatters::format_proxy(ctx, details, recurse_times);
        }
        target = details.target.clone();
    }

    if ctx.opts.custom_inspect {
        if let Some(hook) = (p.custom_inspect_of)(&target) {
            let depth_remaining = ctx.depth.map(|d| d - recurse_times);
            let cross_context = proxy.is_some() || (p.is_foreign)(value);
            let user_options = build_user_options(ctx, cross_context);
            match hook(depth_remaining, &user_options).map_err(Abort::Js)? {
                CustomInspectResult::SelfRef => {}
                CustomInspectResult::Text(text) => {
                    let indentation = " ".repeat(ctx.indentation_lvl);
                    return Ok(text.replace('\n', &format!("\n{}", indentation)));
                }
                CustomInspectResult::Value(replacement) => {
                    // A hook returning its receiver must not recurse forever.
                    if replacement.identity() != target.identity()
                        || replacement.identity().is_none()
                    {
                        return format_value(ctx, &replacement, recurse_times, false);
                    }
                }
            }
        }
    }

    if ctx.seen.contains(&target) {
        let index = ctx.circular.assign(&target);
        return Ok(ctx.stylize(&format!("[Circular *{}]", index), Style::Special));
    }

    format_raw(ctx, &target, recurse_times, from_typed_array)
}

/// Snapshot of the effective options handed to custom inspection hooks.
/// Cross-context targets receive primitives only.
fn build_user_options(ctx: &InspectContext, cross_context: bool) -> Vec<(String, JsValue)> {
    let opts = &ctx.opts;
    let mut out: Vec<(String, JsValue)> = vec![
        ("showHidden".into(), JsValue::boolean(opts.show_hidden)),
        (
            "depth".into(),
            match opts.depth {
                Some(d) => JsValue::number(d as f64),
                None => JsValue::null(),
            },
        ),
        ("colors".into(), JsValue::boolean(opts.colors)),
        ("customInspect".into(), JsValue::boolean(opts.custom_inspect)),
        ("showProxy".into(), JsValue::boolean(opts.show_proxy)),
        (
            "maxArrayLength".into(),
            match opts.max_array_length {
                Some(n) => JsValue::number(n as f64),
                None => JsValue::null(),
            },
        ),
        (
            "maxStringLength".into(),
            match opts.max_string_length {
                Some(n) => JsValue::number(n as f64),
                None => JsValue::null(),
            },
        ),
        ("breakLength".into(), JsValue::number(opts.break_length as f64)),
        (
            "compact".into(),
            match opts.compact {
                Compact::Never => JsValue::boolean(false),
                Compact::Always => JsValue::boolean(true),
                Compact::Limit(n) => JsValue::number(n as f64),
            },
        ),
        (
            "sorted".into(),
            JsValue::boolean(opts.sorted.is_active()),
        ),
        (
            "getters".into(),
            match opts.getters {
                Getters::No => JsValue::boolean(false),
                Getters::All => JsValue::boolean(true),
                Getters::GetOnly => JsValue::string("get"),
                Getters::SetOnly => JsValue::string("set"),
            },
        ),
        (
            "numericSeparator".into(),
            JsValue::boolean(opts.numeric_separator),
        ),
    ];
    for (key, extra) in &opts.extra {
        if cross_context && !extra.is_primitive() {
            continue;
        }
        out.push((key.clone(), extra.clone()));
    }
    out
}

/// Classify a composite value and render it
fn format_raw(
    ctx: &mut InspectContext,
    value: &JsValue,
    recurse_times: i64,
    from_typed_array: bool,
) -> EngineResult<String> {
    let p = primordials();

    let mut proto_props: Option<Vec<String>> =
        if ctx.opts.show_hidden && !ctx.depth_exceeded(recurse_times) {
            Some(Vec::new())
        } else {
            None
        };
    let constructor = resolve_constructor(ctx, value, recurse_times, proto_props.as_mut())?;
    let proto_props = proto_props.filter(|props| !props.is_empty());
    let tag = resolve_tag(value, ctx.opts.show_hidden);

    let kind = classify(value);
    let show_hidden = ctx.opts.show_hidden;
    let ctor = constructor.as_deref();

    let mut base = String::new();
    let mut braces: (String, String);
    let mut keys: Vec<PropertyKey> = (p.own_keys)(value, show_hidden);
    let mut extras_type = ExtrasKind::Object;
    let mut numeric_align: Option<bool> = None;
    let formatter: formatters::KindFormatter;

    match kind {
        RendererKind::Array => {
            let (len, all_numeric) = {
                let data = match value {
                    JsValue::Array(data) => data.borrow(),
                    _ => unreachable!(),
                };
                let all_numeric = !data.elements.is_empty()
                    && data.elements.iter().all(|slot| {
                        matches!(slot, Some(JsValue::Number(_)) | Some(JsValue::BigInt(_)))
                    });
                (data.len(), all_numeric)
            };
            let prefix = if ctor != Some("Array") || !tag.is_empty() {
                get_prefix(ctor, &tag, "Array", &format!("({})", len))
            } else {
                String::new()
            };
            braces = (format!("{}[", prefix), "]".to_string());
            if len == 0 && keys.is_empty() && proto_props.is_none() {
                return Ok(format!("{}]", braces.0));
            }
            extras_type = ExtrasKind::ArrayExtras;
            numeric_align = Some(all_numeric);
            formatter = formatters::KindFormatter::Array;
        }
        RendererKind::Set => {
            let size = match value {
                JsValue::Set(data) => data.borrow().size(),
                _ => unreachable!(),
            };
            let prefix = get_prefix(ctor, &tag, "Set", &format!("({})", size));
            if size == 0 && keys.is_empty() && proto_props.is_none() {
                return Ok(format!("{}{{}}", prefix));
            }
            braces = (format!("{}{{", prefix), "}".to_string());
            formatter = formatters::KindFormatter::Set;
        }
        RendererKind::Map => {
            let size = match value {
                JsValue::Map(data) => data.borrow().size(),
                _ => unreachable!(),
            };
            let prefix = get_prefix(ctor, &tag, "Map", &format!("({})", size));
            if size == 0 && keys.is_empty() && proto_props.is_none() {
                return Ok(format!("{}{{}}", prefix));
            }
            braces = (format!("{}{{", prefix), "}".to_string());
            formatter = formatters::KindFormatter::Map;
        }
        RendererKind::TypedArray => {
            let (len, kind_name) = match value {
                JsValue::TypedArray(data) => {
                    let data = data.borrow();
                    (data.len(), data.kind.name())
                }
                _ => unreachable!(),
            };
            let prefix = get_prefix(ctor, &tag, kind_name, &format!("({})", len));
            braces = (format!("{}[", prefix), "]".to_string());
            if len == 0 && keys.is_empty() && !show_hidden {
                return Ok(format!("{}]", braces.0));
            }
            extras_type = ExtrasKind::ArrayExtras;
            numeric_align = Some(true);
            formatter = formatters::KindFormatter::TypedArray;
        }
        RendererKind::MapIterator | RendererKind::SetIterator => {
            let (label, is_pairs) = match value {
                JsValue::CollectionIterator(data) => {
                    let data = data.borrow();
                    (
                        data.kind.label(),
                        matches!(data.entries, value_core::IteratorEntries::Pairs(_)),
                    )
                }
                _ => unreachable!(),
            };
            braces = get_iterator_braces(label, &tag);
            if is_pairs {
                // Mark entry iterators as such.
                braces.0 = braces.0.replacen(" Iterator] {", " Entries] {", 1);
            }
            formatter = formatters::KindFormatter::Iterator;
        }
        RendererKind::PlainObject | RendererKind::GenericObject => {
            let is_arguments = match value {
                JsValue::Object(data) => data.borrow().is_arguments,
                _ => false,
            };
            braces = ("{".to_string(), "}".to_string());
            if ctor == Some("Object") {
                if is_arguments {
                    braces.0 = "[Arguments] {".to_string();
                } else if !tag.is_empty() {
                    braces.0 = format!("{}{{", get_prefix(ctor, &tag, "Object", ""));
                }
                if keys.is_empty() && proto_props.is_none() {
                    return Ok(format!("{}}}", braces.0));
                }
            } else {
                if keys.is_empty() && proto_props.is_none() {
                    return Ok(format!("{}{{}}", get_ctx_style(value, ctor, &tag)));
                }
                braces.0 = format!("{}{{", get_ctx_style(value, ctor, &tag));
            }
            formatter = formatters::KindFormatter::Empty;
        }
        RendererKind::Function => {
            base = formatters::get_function_base(value, ctor, &tag);
            if keys.is_empty() && proto_props.is_none() {
                return Ok(ctx.stylize(&base, Style::Special));
            }
            braces = ("{".to_string(), "}".to_string());
            formatter = formatters::KindFormatter::Empty;
        }
        RendererKind::RegExp => {
            let pattern = match value {
                JsValue::RegExp(data) => data.borrow().to_pattern_string(),
                _ => unreachable!(),
            };
            let prefix = get_prefix(ctor, &tag, "RegExp", "");
            base = if prefix != "RegExp " {
                format!("{}{}", prefix, pattern)
            } else {
                pattern
            };
            if (keys.is_empty() && proto_props.is_none()) || ctx.depth_exceeded(recurse_times) {
                return Ok(ctx.stylize(&base, Style::Regexp));
            }
            braces = ("{".to_string(), "}".to_string());
            formatter = formatters::KindFormatter::Empty;
        }
        RendererKind::Date => {
            let display = match value {
                JsValue::Date(data) => data.borrow().to_display_string(),
                _ => unreachable!(),
            };
            let prefix = get_prefix(ctor, &tag, "Date", "");
            base = if prefix != "Date " {
                format!("{}{}", prefix, display)
            } else {
                display
            };
            if keys.is_empty() && proto_props.is_none() {
                return Ok(ctx.stylize(&base, Style::Date));
            }
            braces = ("{".to_string(), "}".to_string());
            formatter = formatters::KindFormatter::Empty;
        }
        RendererKind::Error => {
            let err = match value {
                JsValue::Error(data) => data.borrow().clone(),
                _ => unreachable!(),
            };
            base = format_error(ctx, &err, ctor, &tag, &mut keys);
            if keys.is_empty() && proto_props.is_none() {
                return Ok(base);
            }
            braces = ("{".to_string(), "}".to_string());
            formatter = formatters::KindFormatter::Empty;
        }
        RendererKind::ArrayBuffer => {
            let (name, byte_length) = match value {
                JsValue::ArrayBuffer(data) => {
                    let data = data.borrow();
                    (data.name(), data.byte_length())
                }
                _ => unreachable!(),
            };
            let prefix = get_prefix(ctor, &tag, name, "");
            if from_typed_array && keys.is_empty() && proto_props.is_none() {
                return Ok(format!(
                    "{}{{ byteLength: {} }}",
                    prefix,
                    crate::numbers::format_number(ctx.opts.colors, byte_length as f64, false)
                ));
            }
            braces = (format!("{}{{", prefix), "}".to_string());
            keys.insert(0, PropertyKey::string("byteLength"));
            formatter = if from_typed_array {
                formatters::KindFormatter::Empty
            } else {
                formatters::KindFormatter::ArrayBuffer
            };
        }
        RendererKind::DataView => {
            braces = (
                format!("{}{{", get_prefix(ctor, &tag, "DataView", "")),
                "}".to_string(),
            );
            // `buffer` goes last: it is the only entry needing recursion.
            keys.insert(0, PropertyKey::string("byteLength"));
            keys.insert(1, PropertyKey::string("byteOffset"));
            keys.insert(2, PropertyKey::string("buffer"));
            formatter = formatters::KindFormatter::Empty;
        }
        RendererKind::Promise => {
            braces = (
                format!("{}{{", get_prefix(ctor, &tag, "Promise", "")),
                "}".to_string(),
            );
            formatter = formatters::KindFormatter::Promise;
        }
        RendererKind::WeakSet | RendererKind::WeakMap => {
            let fallback = if kind == RendererKind::WeakSet {
                "WeakSet"
            } else {
                "WeakMap"
            };
            braces = (
                format!("{}{{", get_prefix(ctor, &tag, fallback, "")),
                "}".to_string(),
            );
            formatter = formatters::KindFormatter::WeakCollection;
        }
        RendererKind::ModuleNamespace => {
            braces = (
                format!("{}{{", get_prefix(ctor, &tag, "Module", "")),
                "}".to_string(),
            );
            formatter = formatters::KindFormatter::Namespace;
        }
        RendererKind::BoxedPrimitive => {
            base = formatters::get_boxed_base(ctx, value, &keys, ctor, &tag);
            if keys.is_empty() && proto_props.is_none() {
                return Ok(base);
            }
            braces = ("{".to_string(), "}".to_string());
            formatter = formatters::KindFormatter::Empty;
        }
        RendererKind::External => {
            let address = match value {
                JsValue::External(address) => *address,
                _ => unreachable!(),
            };
            if keys.is_empty() && proto_props.is_none() {
                return Ok(
                    ctx.stylize(&format!("[External: 0x{:x}]", address), Style::Special)
                );
            }
            braces = (
                format!("{}{{", get_ctx_style(value, ctor, &tag)),
                "}".to_string(),
            );
            formatter = formatters::KindFormatter::Empty;
        }
        RendererKind::Proxy => {
            // Reached only when details were consumed above; render opaque.
            braces = ("Proxy {".to_string(), "}".to_string());
            formatter = formatters::KindFormatter::Empty;
        }
        RendererKind::Primitive | RendererKind::NullValue => {
            unreachable!("primitives never reach format_raw")
        }
    }

    if ctx.depth_exceeded(recurse_times) {
        let mut constructor_name = trimmed_ctx_style(value, ctor, &tag);
        if constructor.is_some() {
            constructor_name = format!("[{}]", constructor_name);
        }
        return Ok(ctx.stylize(&constructor_name, Style::Special));
    }
    let recurse_times = recurse_times + 1;

    ctx.seen.push(value);
    ctx.current_depth = recurse_times;
    let indentation_lvl = ctx.indentation_lvl;

    let assembled = assemble_fragments(
        ctx,
        value,
        recurse_times,
        formatter,
        &keys,
        extras_type,
        proto_props,
    );
    let mut output = match assembled {
        Ok(output) => output,
        Err(Abort::Overflow) => {
            // Recover the one sanctioned failure: recursion exhaustion inside
            // this subtree. Everything else unwinds the whole call.
            ctx.seen.pop();
            ctx.indentation_lvl = indentation_lvl;
            let constructor_name = trimmed_ctx_style(value, ctor, &tag);
            return Ok(ctx.stylize(
                &format!(
                    "[{}: Inspection interrupted prematurely. Maximum call stack size exceeded.]",
                    constructor_name
                ),
                Style::Special,
            ));
        }
        Err(err) => {
            ctx.seen.pop();
            return Err(err);
        }
    };

    if !ctx.circular.is_empty() {
        if let Some(index) = ctx.circular.get(value) {
            let reference = ctx.stylize(&format!("<ref *{}>", index), Style::Special);
            // The back-reference always leads the rendered output.
            if ctx.opts.compact != Compact::Always {
                base = if base.is_empty() {
                    reference
                } else {
                    format!("{} {}", reference, base)
                };
            } else {
                braces.0 = format!("{} {}", reference, braces.0);
            }
        }
    }
    ctx.seen.pop();

    match &ctx.opts.sorted {
        Sorted::No => {}
        Sorted::Yes => sort_output(&mut output, &keys, extras_type, |a, b| a.cmp(b)),
        Sorted::With(comparator) => {
            let comparator = comparator.clone();
            sort_output(&mut output, &keys, extras_type, move |a, b| comparator(a, b));
        }
    }

    let result = reduce_to_single_string(
        ctx,
        output,
        &base,
        &braces,
        extras_type,
        recurse_times,
        numeric_align,
    );
    ctx.charge_budget(result.len());
    Ok(result)
}

fn assemble_fragments(
    ctx: &mut InspectContext,
    value: &JsValue,
    recurse_times: i64,
    formatter: formatters::KindFormatter,
    keys: &[PropertyKey],
    extras_type: ExtrasKind,
    proto_props: Option<Vec<String>>,
) -> EngineResult<Vec<String>> {
    let mut output = formatters::run(ctx, formatter, value, recurse_times)?;
    for key in keys {
        output.push(format_property(
            ctx,
            value,
            recurse_times,
            key,
            extras_type,
            None,
            None,
        )?);
    }
    if let Some(props) = proto_props {
        output.extend(props);
    }
    Ok(output)
}

fn sort_output<F>(
    output: &mut [String],
    keys: &[PropertyKey],
    extras_type: ExtrasKind,
    compare: F,
) where
    F: Fn(&str, &str) -> std::cmp::Ordering,
{
    if extras_type == ExtrasKind::Object {
        output.sort_by(|a, b| compare(a, b));
    } else if keys.len() > 1 {
        let tail = output.len().saturating_sub(keys.len());
        output[tail..].sort_by(|a, b| compare(a, b));
    }
}

fn trimmed_ctx_style(value: &JsValue, constructor: Option<&str>, tag: &str) -> String {
    let mut style = get_ctx_style(value, constructor, tag);
    while style.ends_with(' ') {
        style.pop();
    }
    style
}

fn get_iterator_braces(label: &str, tag: &str) -> (String, String) {
    let iterator_tag = format!("{} Iterator", label);
    let mut shown = tag.to_string();
    if shown != iterator_tag {
        if !shown.is_empty() {
            shown.push_str("] [");
        }
        shown.push_str(&iterator_tag);
    }
    (format!("[{}] {{", shown), "}".to_string())
}

/// Synthesized descriptors for keys that live outside property storage
fn synthesize_descriptor(value: &JsValue, key: &PropertyKey) -> Option<PropertyDescriptor> {
    let name = key.as_str()?;
    match value {
        JsValue::Error(data) => {
            if name == "cause" {
                return data
                    .borrow()
                    .cause
                    .clone()
                    .map(PropertyDescriptor::hidden_data);
            }
            None
        }
        JsValue::ArrayBuffer(data) => {
            if name == "byteLength" {
                return Some(PropertyDescriptor::data(JsValue::number(
                    data.borrow().byte_length() as f64,
                )));
            }
            None
        }
        JsValue::DataView(data) => {
            let data = data.borrow();
            match name {
                "byteLength" => Some(PropertyDescriptor::data(JsValue::number(
                    data.byte_length as f64,
                ))),
                "byteOffset" => Some(PropertyDescriptor::data(JsValue::number(
                    data.byte_offset as f64,
                ))),
                "buffer" => Some(PropertyDescriptor::data(data.buffer.clone())),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Render one `key: value` entry (or a bare element for array positions)
pub(crate) fn format_property(
    ctx: &mut InspectContext,
    value: &JsValue,
    recurse_times: i64,
    key: &PropertyKey,
    extras_type: ExtrasKind,
    desc: Option<PropertyDescriptor>,
    receiver: Option<&JsValue>,
) -> EngineResult<String> {
    let p = primordials();
    let desc = desc
        .or_else(|| (p.own_descriptor)(value, key))
        .or_else(|| synthesize_descriptor(value, key))
        .unwrap_or_else(|| PropertyDescriptor::data(JsValue::undefined()));

    // `None` means the plain one-space separator; a long value under legacy
    // compact layout gets a line break at the raised indentation instead.
    let mut separator: Option<String> = None;
    let str_value;

    match &desc.kind {
        PropertyKind::Data(data_value) => {
            let diff = if ctx.opts.compact != Compact::Always || extras_type != ExtrasKind::Object
            {
                2
            } else {
                3
            };
            ctx.indentation_lvl += diff;
            let rendered = format_value(ctx, data_value, recurse_times, false);
            if let Ok(rendered_text) = &rendered {
                if diff == 3
                    && ctx.opts.break_length
                        < get_string_width(rendered_text, ctx.opts.colors)
                {
                    separator = Some(format!("\n{}", " ".repeat(ctx.indentation_lvl)));
                }
            }
            ctx.indentation_lvl -= diff;
            str_value = rendered?;
        }
        PropertyKind::Accessor {
            get: Some(getter),
            has_setter,
        } => {
            let label = if *has_setter { "Getter/Setter" } else { "Getter" };
            let evaluate = match ctx.opts.getters {
                Getters::All => true,
                Getters::GetOnly => !*has_setter,
                Getters::SetOnly => *has_setter,
                Getters::No => false,
            };
            if evaluate {
                let holder = receiver.unwrap_or(value);
                // The preview path is the one place a throwing getter is
                // contained instead of propagated.
                match getter(holder) {
                    Ok(result) => {
                        ctx.indentation_lvl += 2;
                        let rendered = if result.is_null() {
                            format!(
                                "{} {}{}",
                                ctx.stylize(&format!("[{}:", label), Style::Special),
                                ctx.stylize("null", Style::Null),
                                ctx.stylize("]", Style::Special)
                            )
                        } else if result.is_primitive() {
                            let primitive =
                                format_primitive(&ctx.opts, &result, ctx.indentation_lvl);
                            format!(
                                "{} {}{}",
                                ctx.stylize(&format!("[{}:", label), Style::Special),
                                primitive,
                                ctx.stylize("]", Style::Special)
                            )
                        } else {
                            let inner = format_value(ctx, &result, recurse_times, false);
                            match inner {
                                Ok(inner) => format!(
                                    "{} {}",
                                    ctx.stylize(&format!("[{}]", label), Style::Special),
                                    inner
                                ),
                                Err(err) => {
                                    ctx.indentation_lvl -= 2;
                                    return Err(err);
                                }
                            }
                        };
                        ctx.indentation_lvl -= 2;
                        str_value = rendered;
                    }
                    Err(err) => {
                        str_value = format!(
                            "{} <Inspection threw ({})>{}",
                            ctx.stylize(&format!("[{}:", label), Style::Special),
                            err.message,
                            ctx.stylize("]", Style::Special)
                        );
                    }
                }
            } else {
                str_value = ctx.stylize(&format!("[{}]", label), Style::Special);
            }
        }
        PropertyKind::Accessor {
            get: None,
            has_setter: true,
        } => {
            str_value = ctx.stylize("[Setter]", Style::Special);
        }
        PropertyKind::Accessor { .. } => {
            str_value = ctx.stylize("undefined", Style::Undefined);
        }
    }

    if extras_type == ExtrasKind::Array {
        return Ok(str_value);
    }

    let name = match key {
        PropertyKey::Symbol(sym) => {
            let escaped = escape_inner(&sym.to_symbol_string());
            format!("[{}]", ctx.stylize(&escaped, Style::Symbol))
        }
        PropertyKey::String(key_name) if key_name == "__proto__" => "['__proto__']".to_string(),
        PropertyKey::String(key_name) if !desc.enumerable => {
            format!("[{}]", escape_inner(key_name))
        }
        PropertyKey::String(key_name) if IDENT_KEY.is_match(key_name) => {
            ctx.stylize(key_name, Style::Name)
        }
        PropertyKey::String(key_name) => ctx.stylize(&str_escape(key_name), Style::String),
    };

    match separator {
        Some(separator) => Ok(format!("{}:{}{}", name, separator, str_value)),
        None => Ok(format!("{}: {}", name, str_value)),
    }
}
