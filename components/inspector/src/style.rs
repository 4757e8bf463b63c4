//! Output styling
//!
//! Each rendered fragment carries a semantic category; with colors enabled
//! the category maps to an SGR pair. The exact codes are behavioral, not a
//! byte-for-byte reproduction of any particular host terminal palette.

/// Semantic category of a rendered fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Engine-inserted markers (`[Circular *1]`, `<ref *1>`, `[Getter]`, ...)
    Special,
    /// Numbers
    Number,
    /// BigInts
    BigInt,
    /// Booleans
    Boolean,
    /// `undefined` and dimmed informational text
    Undefined,
    /// `null`
    Null,
    /// Strings
    String,
    /// Symbols
    Symbol,
    /// Dates
    Date,
    /// Regular expressions
    Regexp,
    /// Module path highlighting inside stack frames
    Module,
    /// Property names; intentionally unstyled
    Name,
}

/// SGR open/close pair for a category, or `None` for unstyled categories
fn sgr_pair(style: Style) -> Option<(u8, u8)> {
    match style {
        Style::Special => Some((36, 39)),
        Style::Number | Style::BigInt | Style::Boolean => Some((33, 39)),
        Style::Undefined => Some((90, 39)),
        Style::Null => Some((1, 22)),
        Style::String | Style::Symbol => Some((32, 39)),
        Style::Date => Some((35, 39)),
        Style::Regexp => Some((31, 39)),
        Style::Module => Some((4, 24)),
        Style::Name => None,
    }
}

/// Stylize a fragment according to the category; identity without colors
pub fn stylize(colors: bool, text: &str, style: Style) -> String {
    if !colors {
        return text.to_string();
    }
    match sgr_pair(style) {
        Some((open, close)) => format!("\x1b[{}m{}\x1b[{}m", open, text, close),
        None => text.to_string(),
    }
}

/// Wrap already-rendered text in the faint/dim SGR pair (prototype
/// properties)
pub fn dim(text: &str) -> String {
    format!("\x1b[2m{}\x1b[22m", text)
}
