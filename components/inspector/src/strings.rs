//! String escaping and primitive fragment rendering
//!
//! Escaping is minimal, similar to JSON stringify escaping: control
//! characters, the backslash and the chosen quote character. Quote selection
//! prefers single quotes, switches to double quotes when the string contains
//! a single quote but no double quote, and to backticks when both plain
//! quotes occur but no backtick or template substitution marker does.

use crate::numbers::{format_bigint, format_number};
use crate::options::{Compact, InspectOptions};
use crate::style::{stylize, Style};
use value_core::JsValue;

/// Strings shorter than this are never split across lines
const MIN_LINE_LENGTH: usize = 16;

/// Escape a control character code to its mnemonic or `\xNN` form
fn escape_code(code: u32) -> String {
    match code {
        8 => "\\b".to_string(),
        9 => "\\t".to_string(),
        10 => "\\n".to_string(),
        12 => "\\f".to_string(),
        13 => "\\r".to_string(),
        _ => format!("\\x{:02X}", code),
    }
}

/// Pick the quote character for a string
fn select_quote(s: &str) -> char {
    if s.contains('\'') {
        if !s.contains('"') {
            return '"';
        }
        if !s.contains('`') && !s.contains("${") {
            return '`';
        }
    }
    '\''
}

/// Escape a string and wrap it in the selected quotes
pub fn str_escape(s: &str) -> String {
    let quote = select_quote(s);
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for ch in s.chars() {
        let code = ch as u32;
        if ch == quote || ch == '\\' {
            out.push('\\');
            out.push(ch);
        } else if code < 32 || (127..160).contains(&code) {
            out.push_str(&escape_code(code));
        } else {
            out.push(ch);
        }
    }
    out.push(quote);
    out
}

/// Escape without quoting; used for symbol descriptions and bracketed keys
pub fn escape_inner(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        let code = ch as u32;
        if ch == '\'' || ch == '\\' {
            out.push('\\');
            out.push(ch);
        } else if code < 32 || (127..160).contains(&code) {
            out.push_str(&escape_code(code));
        } else {
            out.push(ch);
        }
    }
    out
}

/// Render a string primitive: quoting, truncation and long-line splitting
pub fn format_string(opts: &InspectOptions, s: &str, indentation_lvl: usize) -> String {
    let max = opts.effective_max_string_length();
    let char_count = s.chars().count();

    let (body, trailer) = if char_count > max {
        let cut = s
            .char_indices()
            .nth(max)
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        let remaining = char_count - max;
        let plural = if remaining > 1 { "s" } else { "" };
        (
            &s[..cut],
            format!("... {} more character{}", remaining, plural),
        )
    } else {
        (s, String::new())
    };

    // Multi-line strings wider than the remaining line budget are split at
    // their newlines, one quoted segment per line joined with ` +`.
    let body_len = body.chars().count();
    if opts.compact != Compact::Always
        && body_len > MIN_LINE_LENGTH
        && body_len + indentation_lvl + 4 > opts.break_length
        && body.contains('\n')
    {
        let mut segments = Vec::new();
        let mut rest = body;
        while let Some(pos) = rest.find('\n') {
            segments.push(&rest[..=pos]);
            rest = &rest[pos + 1..];
        }
        if !rest.is_empty() {
            segments.push(rest);
        }
        let joiner = format!(" +\n{}", " ".repeat(indentation_lvl + 2));
        let joined = segments
            .iter()
            .map(|seg| stylize(opts.colors, &str_escape(seg), Style::String))
            .collect::<Vec<_>>()
            .join(&joiner);
        return format!("{}{}", joined, trailer);
    }

    format!(
        "{}{}",
        stylize(opts.colors, &str_escape(body), Style::String),
        trailer
    )
}

/// Render any primitive value as a terminal fragment
pub fn format_primitive(opts: &InspectOptions, value: &JsValue, indentation_lvl: usize) -> String {
    match value {
        JsValue::Undefined => stylize(opts.colors, "undefined", Style::Undefined),
        JsValue::Null => stylize(opts.colors, "null", Style::Null),
        JsValue::Boolean(b) => stylize(
            opts.colors,
            if *b { "true" } else { "false" },
            Style::Boolean,
        ),
        JsValue::Number(n) => format_number(opts.colors, *n, opts.numeric_separator),
        JsValue::BigInt(b) => format_bigint(opts.colors, b, opts.numeric_separator),
        JsValue::String(s) => format_string(opts, s, indentation_lvl),
        JsValue::Symbol(sym) => stylize(opts.colors, &sym.to_symbol_string(), Style::Symbol),
        _ => unreachable!("format_primitive called with a composite value"),
    }
}
