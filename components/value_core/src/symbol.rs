//! Symbol primitive values
//!
//! Symbols are unique, immutable values usable as property keys. This module
//! implements:
//! - unique symbol creation with optional description
//! - a global registry for shared symbols
//! - the well-known symbols the inspection engine relies on
//!   (`Symbol.toStringTag`, `Symbol.iterator`, the custom-inspect symbol)

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{LazyLock, Mutex};

/// Global counter for generating unique symbol IDs
static SYMBOL_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Global registry for shared symbols
static SYMBOL_REGISTRY: LazyLock<Mutex<HashMap<String, SymbolValue>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Well-known symbol storage
static WELL_KNOWN_SYMBOLS: LazyLock<WellKnownSymbols> = LazyLock::new(|| WellKnownSymbols {
    iterator: SymbolValue::create_well_known("Symbol.iterator"),
    async_iterator: SymbolValue::create_well_known("Symbol.asyncIterator"),
    to_string_tag: SymbolValue::create_well_known("Symbol.toStringTag"),
    custom_inspect: SymbolValue::create_well_known("Symbol.customInspect"),
});

/// Storage for well-known symbols
struct WellKnownSymbols {
    iterator: SymbolValue,
    async_iterator: SymbolValue,
    to_string_tag: SymbolValue,
    custom_inspect: SymbolValue,
}

/// A unique symbol value
///
/// Each symbol has a unique internal ID and an optional description. Equality
/// is identity equality on the ID, never on the description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolValue {
    id: u64,
    description: Option<String>,
}

impl SymbolValue {
    /// Create a new unique symbol with an optional description
    pub fn new(description: Option<String>) -> Self {
        SymbolValue {
            id: SYMBOL_COUNTER.fetch_add(1, Ordering::Relaxed),
            description,
        }
    }

    fn create_well_known(description: &str) -> Self {
        SymbolValue::new(Some(description.to_string()))
    }

    /// Look up or create a shared symbol for `key`
    pub fn for_key(key: &str) -> Self {
        let mut registry = SYMBOL_REGISTRY.lock().unwrap();
        registry
            .entry(key.to_string())
            .or_insert_with(|| SymbolValue::new(Some(key.to_string())))
            .clone()
    }

    /// The unique internal ID
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The symbol's description, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The well-known iteration-protocol symbol
    pub fn iterator() -> Self {
        WELL_KNOWN_SYMBOLS.iterator.clone()
    }

    /// The well-known async-iteration symbol
    pub fn async_iterator() -> Self {
        WELL_KNOWN_SYMBOLS.async_iterator.clone()
    }

    /// The well-known tag symbol consulted for constructor-tag labels
    pub fn to_string_tag() -> Self {
        WELL_KNOWN_SYMBOLS.to_string_tag.clone()
    }

    /// The well-known symbol keying a value's custom inspection hook
    pub fn custom_inspect() -> Self {
        WELL_KNOWN_SYMBOLS.custom_inspect.clone()
    }

    /// `Symbol(description)` rendering
    pub fn to_symbol_string(&self) -> String {
        match &self.description {
            Some(desc) => format!("Symbol({})", desc),
            None => "Symbol()".to_string(),
        }
    }
}

impl std::fmt::Display for SymbolValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_symbol_string())
    }
}
