//! Placeholder templating
//!
//! `format` scans a leading template string for `%`-placeholders, consuming
//! one positional argument per placeholder (`%c` consumes and discards,
//! `%%` consumes none). Unmatched placeholders stay verbatim; surplus
//! arguments are inspected and space-joined after the templated prefix.

use std::collections::HashSet;

use serde_json::{Map as JsonMap, Number as JsonNumber, Value as JsonValue};

use crate::numbers::{format_bigint_text, format_number_text};
use crate::options::{Compact, InspectOptions};
use crate::primordials::primordials;
use value_core::{JsError, JsResult, JsValue, PropertyKey, ValueId};

/// Printf-style formatting with default inspection options
pub fn format(args: &[JsValue]) -> JsResult<String> {
    format_with_options_internal(&InspectOptions::default(), args)
}

/// Printf-style formatting with explicit inspection options
pub fn format_with_options(options: &InspectOptions, args: &[JsValue]) -> JsResult<String> {
    options
        .validate()
        .map_err(|err| JsError::type_error(err.to_string()))?;
    format_with_options_internal(options, args)
}

/// Space-joined batch rendering: strings verbatim, everything else inspected
pub fn inspect_multiple(options: &InspectOptions, args: &[JsValue]) -> JsResult<String> {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        match arg {
            JsValue::String(s) => out.push_str(s),
            other => out.push_str(&crate::inspect(other, options)?),
        }
        if i + 1 < args.len() {
            out.push(' ');
        }
    }
    Ok(out)
}

/// Script `Number(value)` coercion, as far as rendering needs it
fn to_number(value: &JsValue) -> f64 {
    match value {
        JsValue::Number(n) => *n,
        JsValue::Boolean(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        JsValue::Null => 0.0,
        JsValue::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        _ => f64::NAN,
    }
}

/// `String(value)` for primitives and toString-less objects
fn to_display_string(value: &JsValue) -> String {
    match value {
        JsValue::Undefined => "undefined".to_string(),
        JsValue::Null => "null".to_string(),
        JsValue::Boolean(b) => b.to_string(),
        JsValue::Number(n) => crate::numbers::js_number_to_string(*n),
        JsValue::String(s) => s.clone(),
        JsValue::Symbol(sym) => sym.to_symbol_string(),
        JsValue::BigInt(b) => b.to_digits(),
        _ => "[object Object]".to_string(),
    }
}

/// `parseInt` coercion on the display string: leading integer or NaN
fn js_parse_int(value: &JsValue) -> f64 {
    let text = to_display_string(value);
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let run: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    if run.is_empty() {
        f64::NAN
    } else {
        sign * run.parse::<f64>().unwrap_or(f64::NAN)
    }
}

/// `parseFloat` coercion on the display string: leading float or NaN
fn js_parse_float(value: &JsValue) -> f64 {
    let text = to_display_string(value);
    let trimmed = text.trim_start();
    let mut end = 0;
    let bytes = trimmed.as_bytes();
    let mut seen_dot = false;
    let mut seen_exp = false;
    while end < bytes.len() {
        let b = bytes[end];
        let ok = b.is_ascii_digit()
            || (end == 0 && (b == b'-' || b == b'+'))
            || (b == b'.' && !seen_dot && !seen_exp)
            || ((b == b'e' || b == b'E') && !seen_exp && end > 0)
            || ((b == b'-' || b == b'+') && end > 0 && (bytes[end - 1] == b'e' || bytes[end - 1] == b'E'));
        if !ok {
            break;
        }
        seen_dot |= b == b'.';
        seen_exp |= b == b'e' || b == b'E';
        end += 1;
    }
    trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Whether `%s` may call the value's own `toString` instead of inspecting
fn own_to_string(value: &JsValue) -> Option<String> {
    let desc = (primordials().own_descriptor)(value, &PropertyKey::string("toString"))?;
    match desc.value() {
        Some(JsValue::Function(f)) => {
            let call = f.borrow().call.clone()?;
            match call(value, &[]) {
                Ok(JsValue::String(s)) => Some(s),
                _ => None,
            }
        }
        _ => None,
    }
}

fn format_s(options: &InspectOptions, arg: &JsValue) -> JsResult<String> {
    match arg {
        JsValue::Number(n) => Ok(format_number_text(*n, options.numeric_separator)),
        JsValue::BigInt(b) => Ok(format_bigint_text(b, options.numeric_separator)),
        value if value.is_primitive() => Ok(to_display_string(value)),
        value => {
            if let Some(text) = own_to_string(value) {
                return Ok(text);
            }
            let opts = InspectOptions {
                compact: Compact::Limit(3),
                colors: false,
                depth: Some(0),
                ..options.clone()
            };
            crate::inspect(value, &opts)
        }
    }
}

fn format_with_options_internal(options: &InspectOptions, args: &[JsValue]) -> JsResult<String> {
    let mut out = String::new();
    let mut join = "";
    let mut a = 0;

    if let Some(JsValue::String(first)) = args.first() {
        if args.len() == 1 {
            return Ok(first.clone());
        }
        let chars: Vec<char> = first.chars().collect();
        let mut last_pos = 0usize;
        let mut i = 0usize;

        while i + 1 < chars.len() {
            if chars[i] != '%' {
                i += 1;
                continue;
            }
            i += 1;
            let placeholder = chars[i];
            if a + 1 != args.len() {
                let rendered: Option<String> = match placeholder {
                    's' => {
                        a += 1;
                        Some(format_s(options, &args[a])?)
                    }
                    'j' => {
                        a += 1;
                        Some(try_stringify(&args[a])?)
                    }
                    'd' => {
                        a += 1;
                        Some(match &args[a] {
                            JsValue::BigInt(b) => {
                                format_bigint_text(b, options.numeric_separator)
                            }
                            JsValue::Symbol(_) => "NaN".to_string(),
                            other => {
                                format_number_text(to_number(other), options.numeric_separator)
                            }
                        })
                    }
                    'O' => {
                        a += 1;
                        Some(crate::inspect(&args[a], options)?)
                    }
                    'o' => {
                        a += 1;
                        let opts = InspectOptions {
                            show_hidden: true,
                            show_proxy: true,
                            depth: Some(4),
                            ..options.clone()
                        };
                        Some(crate::inspect(&args[a], &opts)?)
                    }
                    'i' => {
                        a += 1;
                        Some(match &args[a] {
                            JsValue::BigInt(b) => {
                                format_bigint_text(b, options.numeric_separator)
                            }
                            JsValue::Symbol(_) => "NaN".to_string(),
                            other => {
                                format_number_text(js_parse_int(other), options.numeric_separator)
                            }
                        })
                    }
                    'f' => {
                        a += 1;
                        Some(match &args[a] {
                            JsValue::Symbol(_) => "NaN".to_string(),
                            other => format_number_text(
                                js_parse_float(other),
                                options.numeric_separator,
                            ),
                        })
                    }
                    'c' => {
                        // CSS directives have no terminal rendering; consume
                        // and drop the argument.
                        a += 1;
                        Some(String::new())
                    }
                    '%' => {
                        out.extend(&chars[last_pos..i]);
                        last_pos = i + 1;
                        i += 1;
                        continue;
                    }
                    _ => None,
                };
                match rendered {
                    Some(rendered) => {
                        if last_pos != i - 1 {
                            out.extend(&chars[last_pos..i - 1]);
                        }
                        out.push_str(&rendered);
                        last_pos = i + 1;
                    }
                    // Any other character is not a correct placeholder.
                    None => {}
                }
            } else if placeholder == '%' {
                out.extend(&chars[last_pos..i]);
                last_pos = i + 1;
            }
            i += 1;
        }

        if last_pos != 0 {
            a += 1;
            join = " ";
            if last_pos < chars.len() {
                out.extend(&chars[last_pos..]);
            }
        }
    }

    while a < args.len() {
        out.push_str(join);
        match &args[a] {
            JsValue::String(s) => out.push_str(s),
            other => out.push_str(&crate::inspect(other, options)?),
        }
        join = " ";
        a += 1;
    }
    Ok(out)
}

enum StringifyError {
    Circular,
    Js(JsError),
}

/// JSON-style stringification for `%j`: circular structures collapse to the
/// fixed `[Circular]` marker, any other failure propagates
pub fn try_stringify(value: &JsValue) -> JsResult<String> {
    if value.is_undefined() {
        return Ok("undefined".to_string());
    }
    let mut seen = HashSet::new();
    match to_json(value, &mut seen) {
        Ok(Some(json)) => Ok(serde_json::to_string(&json)
            .unwrap_or_else(|_| "null".to_string())),
        Ok(None) => Ok("undefined".to_string()),
        Err(StringifyError::Circular) => Ok("[Circular]".to_string()),
        Err(StringifyError::Js(err)) => Err(err),
    }
}

/// Convert a script value into a JSON value; `None` means the slot is
/// omitted (undefined, functions, symbols)
fn to_json(
    value: &JsValue,
    seen: &mut HashSet<ValueId>,
) -> Result<Option<JsonValue>, StringifyError> {
    match value {
        JsValue::Undefined | JsValue::Function(_) | JsValue::Symbol(_) => Ok(None),
        JsValue::Null => Ok(Some(JsonValue::Null)),
        JsValue::Boolean(b) => Ok(Some(JsonValue::Bool(*b))),
        JsValue::Number(n) => {
            // Integral doubles serialize without a decimal point.
            if n.fract() == 0.0 && n.abs() < 9.007_199_254_740_992e15 {
                return Ok(Some(JsonValue::Number(JsonNumber::from(*n as i64))));
            }
            Ok(Some(match JsonNumber::from_f64(*n) {
                Some(number) => JsonValue::Number(number),
                None => JsonValue::Null,
            }))
        }
        JsValue::String(s) => Ok(Some(JsonValue::String(s.clone()))),
        JsValue::BigInt(_) => Err(StringifyError::Js(JsError::type_error(
            "Do not know how to serialize a BigInt",
        ))),
        JsValue::Date(data) => Ok(Some(JsonValue::String(data.borrow().to_display_string()))),
        JsValue::Boxed(data) => {
            let inner = data.borrow().inner.clone();
            to_json(&inner, seen)
        }
        JsValue::Array(data) => {
            let id = value.identity().expect("arrays have identity");
            if !seen.insert(id) {
                return Err(StringifyError::Circular);
            }
            let elements = data.borrow().elements.clone();
            let mut items = Vec::with_capacity(elements.len());
            for slot in &elements {
                let json = match slot {
                    Some(element) => to_json(element, seen)?,
                    None => None,
                };
                items.push(json.unwrap_or(JsonValue::Null));
            }
            seen.remove(&id);
            Ok(Some(JsonValue::Array(items)))
        }
        JsValue::Object(data) => {
            let id = value.identity().expect("objects have identity");
            if !seen.insert(id) {
                return Err(StringifyError::Circular);
            }
            let mut map = JsonMap::new();
            let entries: Vec<_> = data
                .borrow()
                .properties
                .iter()
                .map(|(k, d)| (k.clone(), d.clone()))
                .collect();
            for (key, desc) in entries {
                let PropertyKey::String(name) = key else {
                    continue;
                };
                if !desc.enumerable {
                    continue;
                }
                let entry_value = match desc.value() {
                    Some(v) => v.clone(),
                    None => continue,
                };
                if let Some(json) = to_json(&entry_value, seen)? {
                    map.insert(name, json);
                }
            }
            seen.remove(&id);
            Ok(Some(JsonValue::Object(map)))
        }
        // Collections and the remaining exotic kinds have no enumerable own
        // properties; they stringify as empty objects.
        _ => Ok(Some(JsonValue::Object(JsonMap::new()))),
    }
}
