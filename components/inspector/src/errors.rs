//! Error rendering
//!
//! Errors render through their captured stack text. The declared error name
//! and the resolved constructor label are reconciled into the first line,
//! own keys whose content is already visible in the stack are dropped, and
//! frames duplicated from the cause chain collapse into an elision marker.

use std::sync::LazyLock;

use regex::Regex;

use crate::classify::get_prefix;
use crate::context::InspectContext;
use crate::style::Style;
use value_core::{ErrorData, JsValue, PropertyKey};

/// Leading `Name:`-shaped line of a stack with no recognizable error name
static STACK_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][a-z_ A-Z0-9\[\]()-]+)(?::|\n {4}at)").expect("stack-name pattern")
});

/// A bare `SomethingError` line
static BARE_ERROR_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z_A-Z0-9-]*Error)$").expect("bare-name pattern"));

/// Longest common contiguous frame run between two stacks.
///
/// Only runs longer than three frames count; shorter overlaps are
/// coincidental.
pub(crate) fn identical_sequence_range(a: &[String], b: &[String]) -> (usize, usize) {
    if a.len() < 4 {
        return (0, 0);
    }
    for i in 0..a.len() - 3 {
        if let Some(pos) = b.iter().position(|frame| *frame == a[i]) {
            let rest = b.len() - pos;
            if rest > 3 {
                let mut len = 1;
                let max_len = usize::min(a.len() - i, rest);
                while max_len > len && a[i + len] == b[pos + len] {
                    len += 1;
                }
                if len > 3 {
                    return (len, i);
                }
            }
        }
    }
    (0, 0)
}

/// Drop `name`/`message`/`stack` own keys whose content the stack already
/// shows
fn remove_duplicate_error_keys(
    ctx: &InspectContext,
    keys: &mut Vec<PropertyKey>,
    err: &ErrorData,
    stack: &str,
) {
    if ctx.opts.show_hidden || keys.is_empty() {
        return;
    }
    for field in ["name", "message", "stack"] {
        let Some(index) = keys.iter().position(|k| k.as_str() == Some(field)) else {
            continue;
        };
        let content = match err.extras.get_named(field).and_then(|d| d.value()) {
            Some(JsValue::String(s)) => Some(s.clone()),
            _ => match field {
                "name" => Some(err.name.clone()),
                "message" => Some(err.message.clone()),
                _ => None,
            },
        };
        if let Some(content) = content {
            if stack.contains(&content) {
                keys.remove(index);
            }
        }
    }
}

/// Reconcile the declared name with the resolved constructor label
fn improve_stack(stack: String, constructor: Option<&str>, name: &str, tag: &str) -> String {
    let mut len = name.len();

    let looks_regular = name.ends_with("Error")
        && stack.starts_with(name)
        && (stack.len() == len || stack[len..].starts_with(':') || stack[len..].starts_with('\n'));

    if constructor.is_none() || looks_regular {
        let mut fallback = "Error".to_string();
        if constructor.is_none() {
            let captured = STACK_NAME
                .captures(&stack)
                .or_else(|| BARE_ERROR_NAME.captures(&stack))
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            len = captured.len();
            fallback = if captured.is_empty() {
                "Error".to_string()
            } else {
                captured
            };
        }
        let prefix = get_prefix(constructor, tag, &fallback, "");
        let prefix = prefix.trim_end();
        if name != prefix {
            if prefix.contains(name) {
                if len == 0 {
                    return format!("{}: {}", prefix, stack);
                }
                return format!("{}{}", prefix, &stack[len..]);
            }
            return format!("{} [{}]{}", prefix, name, &stack[len..]);
        }
    }
    stack
}

/// Split trailing frames, collapsing runs shared with the cause's stack
fn get_stack_frames(ctx: &InspectContext, err: &ErrorData, stack: &str) -> Vec<String> {
    let mut frames: Vec<String> = stack.split('\n').map(|s| s.to_string()).collect();

    if let Some(JsValue::Error(cause)) = &err.cause {
        let cause_stack = cause.borrow().stack_string();
        if let Some(start) = cause_stack.find("\n    at") {
            let cause_frames: Vec<String> = cause_stack[start + 1..]
                .split('\n')
                .map(|s| s.to_string())
                .collect();
            let (len, offset) = identical_sequence_range(&frames, &cause_frames);
            if len > 0 {
                let skipped = len - 2;
                let marker = ctx.stylize(
                    &format!("    ... {} lines matching cause stack trace ...", skipped),
                    Style::Undefined,
                );
                frames.splice(offset + 1..offset + 1 + skipped, [marker]);
            }
        }
    }
    frames
}

/// Render an error value's base text.
///
/// `keys` is the pending own-key list; duplicated keys are removed and a
/// `cause` key is appended when the error carries one.
pub(crate) fn format_error(
    ctx: &InspectContext,
    err: &ErrorData,
    constructor: Option<&str>,
    tag: &str,
    keys: &mut Vec<PropertyKey>,
) -> String {
    let name = if err.name.is_empty() {
        "Error".to_string()
    } else {
        err.name.clone()
    };
    let mut stack = err.stack_string();

    remove_duplicate_error_keys(ctx, keys, err, &stack);

    if err.cause.is_some() && !keys.iter().any(|k| k.as_str() == Some("cause")) {
        keys.push(PropertyKey::string("cause"));
    }

    stack = improve_stack(stack, constructor, &name, tag);

    // Frames begin after the message; a stack without frames renders
    // bracketed.
    let mut pos = if err.message.is_empty() {
        0
    } else {
        stack
            .find(&err.message)
            .map(|p| p + err.message.len())
            .unwrap_or(0)
    };
    if pos > stack.len() {
        pos = stack.len();
    }
    match stack[pos..].find("\n    at") {
        None => {
            stack = format!("[{}]", stack);
        }
        Some(rel_start) => {
            let stack_start = pos + rel_start;
            let head = stack[..stack_start].to_string();
            let frames = get_stack_frames(ctx, err, &stack[stack_start + 1..]);
            stack = format!("{}\n{}", head, frames.join("\n"));
        }
    }

    if ctx.indentation_lvl != 0 {
        let indentation = " ".repeat(ctx.indentation_lvl);
        stack = stack.replace('\n', &format!("\n{}", indentation));
    }
    stack
}
