//! Value inspection engine
//!
//! Renders arbitrary script values into readable strings: recursive
//! classification and formatting, circular-reference markers, width/length
//! budgets, column grouping, and printf-style templating on top.
//!
//! The engine consumes the safe-capability substrate exclusively: every
//! structural decision (cycle detection, kind classification, key listing)
//! goes through the immutable [`primordials::Primordials`] table, never
//! through anything an inspected value could have tampered with.
//!
//! # Example
//!
//! ```
//! use inspector::{inspect, InspectOptions};
//! use value_core::JsValue;
//!
//! let map = JsValue::map_from(vec![(JsValue::string("a"), JsValue::number(1.0))]);
//! let rendered = inspect(&map, &InspectOptions::default()).unwrap();
//! assert_eq!(rendered, "Map(1) { 'a' => 1 }");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
mod context;
mod engine;
mod errors;
mod formatters;
pub mod numbers;
pub mod options;
pub mod primordials;
pub mod strings;
pub mod style;
mod templating;
pub mod width;

mod layout;

// Re-export the user-facing surface
pub use classify::{classify, RendererKind};
pub use options::{Compact, Getters, InspectOptions, OptionError, Sorted};
pub use templating::{format, format_with_options, inspect_multiple};

use context::{Abort, InspectContext};
use value_core::{JsError, JsResult, JsValue};

/// Render a value into a readable string.
///
/// Errors raised by user code during traversal (property getters on the
/// default path, custom inspection hooks) propagate; the engine's own
/// limits never fail — worst case is a truncated or marker-laden string.
pub fn inspect(value: &JsValue, options: &InspectOptions) -> JsResult<String> {
    options
        .validate()
        .map_err(|err| JsError::type_error(err.to_string()))?;
    let mut ctx = InspectContext::new(options.clone());
    match engine::format_value(&mut ctx, value, 0, false) {
        Ok(rendered) => Ok(rendered),
        Err(Abort::Js(err)) => Err(err),
        // The soft recursion cap is always recovered at a composite
        // boundary before it can reach the top-level call.
        Err(Abort::Overflow) => Ok(ctx.stylize(
            "[Inspection interrupted prematurely. Maximum call stack size exceeded.]",
            style::Style::Special,
        )),
    }
}

/// Legacy-compatible shorthand: a boolean is the `show_hidden` flag
pub fn inspect_legacy(value: &JsValue, show_hidden: bool) -> JsResult<String> {
    inspect(value, &InspectOptions::legacy(show_hidden))
}
