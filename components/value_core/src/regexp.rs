//! RegExp values
//!
//! Pattern values carry their source text and flags plus a best-effort
//! compiled pattern. Source text is authoritative for rendering; the compiled
//! form exists so hosts can actually execute the pattern.

use regex::Regex;

use crate::error::{JsError, JsResult};
use crate::object::{Prototype, PropertyBag};

/// Internal RegExp data
#[derive(Debug, Clone)]
pub struct RegExpData {
    /// Pattern source text (without delimiters)
    pub source: String,
    /// Flag characters (`gimsuy` subset)
    pub flags: String,
    /// Compiled pattern; absent when the source uses syntax the regex
    /// engine cannot express
    pub compiled: Option<Regex>,
    /// Additional own properties
    pub extras: PropertyBag,
    /// Prototype link
    pub prototype: Prototype,
}

impl RegExpData {
    /// Create a pattern value, compiling the source on a best-effort basis
    pub fn new(source: impl Into<String>, flags: impl Into<String>) -> JsResult<Self> {
        let source = source.into();
        let flags = flags.into();
        if source.is_empty() {
            return Err(JsError::new("Invalid regular expression: empty pattern"));
        }
        for flag in flags.chars() {
            if !"dgimsuvy".contains(flag) {
                return Err(JsError::new(format!(
                    "Invalid regular expression flags: '{}'",
                    flags
                )));
            }
        }
        let mut builder = String::new();
        if flags.contains('i') {
            builder.push_str("(?i)");
        }
        if flags.contains('s') {
            builder.push_str("(?s)");
        }
        if flags.contains('m') {
            builder.push_str("(?m)");
        }
        builder.push_str(&source);
        let compiled = Regex::new(&builder).ok();
        Ok(RegExpData {
            source,
            flags,
            compiled,
            extras: PropertyBag::new(),
            prototype: Prototype::Ordinary,
        })
    }

    /// `/source/flags` rendering
    pub fn to_pattern_string(&self) -> String {
        format!("/{}/{}", self.source, self.flags)
    }

    /// Test the pattern against input when it compiled
    pub fn is_match(&self, haystack: &str) -> bool {
        self.compiled
            .as_ref()
            .map(|re| re.is_match(haystack))
            .unwrap_or(false)
    }
}
