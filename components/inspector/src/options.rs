//! Inspection options
//!
//! The user-facing knob set. Every option is independently overridable; the
//! defaults match the values callers rely on in logging output (depth 2,
//! 80-column break length, 100-element array previews).

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;
use value_core::JsValue;

/// Layout policy: how many nesting levels may merge onto one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compact {
    /// Always one fragment per line
    Never,
    /// Greedy single-line layout whenever the budget allows
    Always,
    /// Merge up to this many innermost nesting levels (the default is 3)
    Limit(u32),
}

impl Compact {
    /// The grouping multiplier used by column layout (`compact * 4`)
    pub fn grouping_limit(&self) -> usize {
        match self {
            Compact::Never => 0,
            Compact::Always => usize::MAX,
            Compact::Limit(n) => *n as usize * 4,
        }
    }
}

/// Property ordering policy
#[derive(Clone, Default)]
pub enum Sorted {
    /// Keep insertion order
    #[default]
    No,
    /// Sort rendered entries lexicographically
    Yes,
    /// Sort rendered entries with a caller-supplied comparator
    With(Rc<dyn Fn(&str, &str) -> Ordering>),
}

impl fmt::Debug for Sorted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sorted::No => write!(f, "No"),
            Sorted::Yes => write!(f, "Yes"),
            Sorted::With(_) => write!(f, "With(<comparator>)"),
        }
    }
}

impl Sorted {
    /// True when any sorting is requested
    pub fn is_active(&self) -> bool {
        !matches!(self, Sorted::No)
    }
}

/// Accessor evaluation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Getters {
    /// Never evaluate accessors; render `[Getter]`/`[Setter]` markers
    #[default]
    No,
    /// Evaluate every getter
    All,
    /// Evaluate only getter-only accessors
    GetOnly,
    /// Evaluate only accessors that also have a setter
    SetOnly,
}

/// Full option set for one inspection call
#[derive(Debug, Clone)]
pub struct InspectOptions {
    /// List non-enumerable properties and symbol keys, weak-collection
    /// previews and prototype properties
    pub show_hidden: bool,
    /// Maximum recursion depth; `None` is unbounded
    pub depth: Option<i64>,
    /// Emit ANSI color sequences
    pub colors: bool,
    /// Honor custom inspection hooks on values
    pub custom_inspect: bool,
    /// Render proxies as `Proxy [ target, handler ]` instead of following
    /// the target transparently
    pub show_proxy: bool,
    /// Maximum rendered array/collection entries; `None` is unbounded
    pub max_array_length: Option<usize>,
    /// Maximum rendered string length; `None` is unbounded
    pub max_string_length: Option<usize>,
    /// Line budget for single-line layouts
    pub break_length: usize,
    /// Layout policy
    pub compact: Compact,
    /// Property ordering policy
    pub sorted: Sorted,
    /// Accessor evaluation policy
    pub getters: Getters,
    /// Insert `_` digit grouping into rendered numbers
    pub numeric_separator: bool,
    /// Unrecognized caller options, passed through verbatim to custom
    /// inspection hooks
    pub extra: Vec<(String, JsValue)>,
}

impl Default for InspectOptions {
    fn default() -> Self {
        InspectOptions {
            show_hidden: false,
            depth: Some(2),
            colors: false,
            custom_inspect: true,
            show_proxy: false,
            max_array_length: Some(100),
            max_string_length: Some(10_000),
            break_length: 80,
            compact: Compact::Limit(3),
            sorted: Sorted::No,
            getters: Getters::No,
            numeric_separator: false,
            extra: Vec::new(),
        }
    }
}

impl InspectOptions {
    /// Legacy boolean form: the flag is `show_hidden`
    pub fn legacy(show_hidden: bool) -> Self {
        InspectOptions {
            show_hidden,
            ..InspectOptions::default()
        }
    }

    /// Builder-style depth override
    pub fn with_depth(mut self, depth: Option<i64>) -> Self {
        self.depth = depth;
        self
    }

    /// Builder-style colors override
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Validate option combinations that cannot be expressed as types
    pub fn validate(&self) -> Result<(), OptionError> {
        if self.break_length == 0 {
            return Err(OptionError::InvalidBreakLength);
        }
        if let Compact::Limit(0) = self.compact {
            return Err(OptionError::InvalidCompactLimit);
        }
        Ok(())
    }

    /// Effective maximum array length as a number
    pub fn effective_max_array_length(&self) -> usize {
        self.max_array_length.unwrap_or(usize::MAX)
    }

    /// Effective maximum string length as a number
    pub fn effective_max_string_length(&self) -> usize {
        self.max_string_length.unwrap_or(usize::MAX)
    }
}

/// Programmer-misuse errors for the options surface
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// `break_length` must be positive
    #[error("The \"breakLength\" option must be a positive number")]
    InvalidBreakLength,
    /// `Compact::Limit(0)` is not a meaningful layout policy
    #[error("The \"compact\" option limit must be at least 1")]
    InvalidCompactLimit,
}
