//! Per-call inspection state
//!
//! One context is created per top-level inspect call and threaded by
//! reference through the whole recursive descent. Re-entrant calls from user
//! hooks allocate their own fresh context, so no state is shared between
//! logical inspections.

use std::collections::HashMap;

use crate::options::InspectOptions;
use crate::primordials::{CircularIds, SeenStack};
use crate::style::{stylize, Style};
use value_core::JsError;

/// Explicit recursion ceiling standing in for native stack exhaustion.
///
/// Crossing it aborts the current subtree with an inline marker instead of
/// overflowing the real stack; a genuine overflow inside user getters is not
/// recoverable and remains fatal.
pub(crate) const RECURSION_SOFT_LIMIT: usize = 500;

/// Total output budget; once any indentation level accumulates more than
/// this, remaining work is downgraded to summary depth.
pub(crate) const TOTAL_OUTPUT_BUDGET: usize = 1 << 27;

/// Abort channel of the recursive formatter
#[derive(Debug, Clone)]
pub(crate) enum Abort {
    /// Recursion ceiling crossed; recovered at the enclosing composite
    Overflow,
    /// User code raised; propagates out of the whole call
    Js(JsError),
}

impl From<JsError> for Abort {
    fn from(err: JsError) -> Self {
        Abort::Js(err)
    }
}

pub(crate) type EngineResult<T> = Result<T, Abort>;

/// Mutable state of one inspection call
pub(crate) struct InspectContext {
    /// Resolved options
    pub opts: InspectOptions,
    /// Effective depth ceiling; downgraded when the output budget is hit
    pub depth: Option<i64>,
    /// Current column offset for wrapping
    pub indentation_lvl: usize,
    /// Deepest recursion level reached in the currently rendered subtree
    pub current_depth: i64,
    /// Ancestor stack for cycle detection
    pub seen: SeenStack,
    /// Dense circular-reference ids
    pub circular: CircularIds,
    /// Output-length accounting per indentation level
    pub budget: HashMap<usize, usize>,
    /// Native-recursion guard counter
    pub recursion_depth: usize,
}

impl InspectContext {
    pub fn new(opts: InspectOptions) -> Self {
        let depth = opts.depth;
        InspectContext {
            opts,
            depth,
            indentation_lvl: 0,
            current_depth: 0,
            seen: SeenStack::new(),
            circular: CircularIds::new(),
            budget: HashMap::new(),
            recursion_depth: 0,
        }
    }

    /// Stylize a fragment with the call's color setting
    pub fn stylize(&self, text: &str, style: Style) -> String {
        stylize(self.opts.colors, text, style)
    }

    /// True once `recurse_times` exceeds the depth ceiling
    pub fn depth_exceeded(&self, recurse_times: i64) -> bool {
        match self.depth {
            Some(depth) => recurse_times > depth,
            None => false,
        }
    }

    /// Record rendered output length and downgrade the whole call to summary
    /// depth once the total budget is exhausted
    pub fn charge_budget(&mut self, rendered_len: usize) {
        let entry = self.budget.entry(self.indentation_lvl).or_insert(0);
        *entry += rendered_len;
        if *entry > TOTAL_OUTPUT_BUDGET {
            self.depth = Some(-1);
        }
    }
}
