//! Output layout
//!
//! Reduces a composite's rendered fragment list into one string: single-line
//! when the compact policy and line budget allow it, otherwise one indented
//! fragment per line. Array-shaped outputs with more than six fragments
//! additionally attempt aligned column grouping.

use crate::context::InspectContext;
use crate::engine::ExtrasKind;
use crate::options::Compact;
use crate::width::{get_string_width, strip_vt_control_characters};

/// Pad on the left to a target display column count
fn pad_start(s: &str, target: usize) -> String {
    let len = s.chars().count();
    if len >= target {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(target - len), s)
    }
}

/// Pad on the right to a target display column count
fn pad_end(s: &str, target: usize) -> String {
    let len = s.chars().count();
    if len >= target {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(target - len))
    }
}

/// Whether the joined fragments fit under the line budget.
///
/// Each fragment is separated by at least a comma, so the total starts at
/// the fragment count plus the caller's fixed overhead. A base label
/// containing line breaks always vetoes single-line layout.
pub(crate) fn is_below_break_length(
    ctx: &InspectContext,
    output: &[String],
    start: usize,
    base: &str,
) -> bool {
    let mut total_length = output.len() + start;
    if total_length + output.len() > ctx.opts.break_length {
        return false;
    }
    for fragment in output {
        if ctx.opts.colors {
            total_length += strip_vt_control_characters(fragment).chars().count();
        } else {
            total_length += fragment.chars().count();
        }
        if total_length > ctx.opts.break_length {
            return false;
        }
    }
    base.is_empty() || !base.contains('\n')
}

/// Lay array-shaped fragments out in aligned columns.
///
/// Returns the input unchanged when grouping would not produce at least two
/// columns or when entry widths vary too much to group pleasantly.
pub(crate) fn group_array_elements(
    ctx: &InspectContext,
    output: Vec<String>,
    numeric_align: Option<bool>,
) -> Vec<String> {
    let mut total_length = 0usize;
    let mut max_length = 0usize;
    let mut output_length = output.len();
    if ctx.opts.effective_max_array_length() < output.len() {
        // Keep the "... n more items" tail out of the grouping math.
        output_length -= 1;
    }
    if output_length == 0 {
        return output;
    }

    let separator_space = 2; // One space plus one comma between entries.
    let mut data_len = vec![0usize; output_length];
    for i in 0..output_length {
        let len = get_string_width(&output[i], ctx.opts.colors);
        data_len[i] = len;
        total_length += len + separator_space;
        if max_length < len {
            max_length = len;
        }
    }
    let actual_max = max_length + separator_space;

    // Require at least three entries per row, and skip grouping when a
    // single entry dominates the total width.
    if actual_max * 3 + ctx.indentation_lvl < ctx.opts.break_length
        && (total_length as f64 / actual_max as f64 > 5.0 || max_length <= 6)
    {
        let approx_char_heights = 2.5;
        let average_bias =
            ((actual_max as f64) - (total_length as f64 / output.len() as f64)).sqrt();
        let biased_max = f64::max(actual_max as f64 - 3.0 - average_bias, 1.0);
        // Aim for a roughly square block of character cells, bounded by the
        // line budget, the compact-mode multiplier and fifteen columns.
        let columns = [
            ((approx_char_heights * biased_max * output_length as f64).sqrt() / biased_max)
                .round() as usize,
            (ctx.opts.break_length - ctx.indentation_lvl) / actual_max,
            ctx.opts.compact.grouping_limit(),
            15,
        ]
        .into_iter()
        .min()
        .unwrap_or(1);

        if columns <= 1 {
            return output;
        }

        let mut max_line_length = Vec::with_capacity(columns);
        for i in 0..columns {
            let mut line_max = 0;
            let mut j = i;
            while j < output_length {
                if data_len[j] > line_max {
                    line_max = data_len[j];
                }
                j += columns;
            }
            max_line_length.push(line_max + separator_space);
        }

        // Numeric entries right-align; everything else left-aligns.
        let use_pad_start = numeric_align.unwrap_or(true);

        let mut grouped = Vec::new();
        let mut i = 0;
        while i < output_length {
            let row_end = usize::min(i + columns, output_length);
            let mut line = String::new();
            let mut j = i;
            while j < row_end - 1 {
                // Colored entries are wider in chars than in display cells;
                // pad targets must account for the difference per entry.
                let padding = max_line_length[j - i] + output[j].chars().count() - data_len[j];
                let entry = format!("{}, ", output[j]);
                if use_pad_start {
                    line.push_str(&pad_start(&entry, padding));
                } else {
                    line.push_str(&pad_end(&entry, padding));
                }
                j += 1;
            }
            if use_pad_start {
                let padding = max_line_length[j - i] + output[j].chars().count()
                    - data_len[j]
                    - separator_space;
                line.push_str(&pad_start(&output[j], padding));
            } else {
                line.push_str(&output[j]);
            }
            grouped.push(line);
            i += columns;
        }
        if ctx.opts.effective_max_array_length() < output.len() {
            grouped.push(output[output_length].clone());
        }
        return grouped;
    }
    output
}

/// Merge a fragment list, base label and braces into the final rendering
pub(crate) fn reduce_to_single_string(
    ctx: &mut InspectContext,
    mut output: Vec<String>,
    base: &str,
    braces: &(String, String),
    extras_type: ExtrasKind,
    recurse_times: i64,
    numeric_align: Option<bool>,
) -> String {
    if output.is_empty() {
        // Exhausted iterators and empty namespaces reach here.
        let lead = if base.is_empty() {
            String::new()
        } else {
            format!("{} ", base)
        };
        return format!("{}{}{}", lead, braces.0, braces.1);
    }
    if ctx.opts.compact != Compact::Always {
        if let Compact::Limit(limit) = ctx.opts.compact {
            let entries = output.len();
            if extras_type == ExtrasKind::ArrayExtras && entries > 6 {
                output = group_array_elements(ctx, output, numeric_align);
            }
            // Merge only the innermost `limit` nesting levels, and only when
            // grouping above did not already reshape the fragments.
            if ctx.current_depth - recurse_times < limit as i64 && entries == output.len() {
                let start =
                    output.len() + ctx.indentation_lvl + braces.0.len() + base.len() + 10;
                if is_below_break_length(ctx, &output, start, base) {
                    let joined = output.join(", ");
                    if !joined.contains('\n') {
                        let lead = if base.is_empty() {
                            String::new()
                        } else {
                            format!("{} ", base)
                        };
                        return format!("{}{} {} {}", lead, braces.0, joined, braces.1);
                    }
                }
            }
        }
        // One fragment per line, indented two spaces past the braces.
        let indentation = format!("\n{}", " ".repeat(ctx.indentation_lvl));
        let lead = if base.is_empty() {
            String::new()
        } else {
            format!("{} ", base)
        };
        return format!(
            "{}{}{}  {}{}{}",
            lead,
            braces.0,
            indentation,
            output.join(&format!(",{}  ", indentation)),
            indentation,
            braces.1
        );
    }

    // Greedy mode: one line whenever the budget allows.
    if is_below_break_length(ctx, &output, 0, base) {
        let base_part = if base.is_empty() {
            String::new()
        } else {
            format!(" {}", base)
        };
        return format!(
            "{}{} {} {}",
            braces.0,
            base_part,
            output.join(", "),
            braces.1
        );
    }
    let indentation = " ".repeat(ctx.indentation_lvl);
    // A wide opening brace (`Set {`) forces the first fragment onto its own
    // line so the entries line up.
    let ln = if base.is_empty() && braces.0.len() == 1 {
        " ".to_string()
    } else {
        let base_part = if base.is_empty() {
            String::new()
        } else {
            format!(" {}", base)
        };
        format!("{}\n{}  ", base_part, indentation)
    };
    format!(
        "{}{}{} {}",
        braces.0,
        ln,
        output.join(&format!(",\n{}  ", indentation)),
        braces.1
    )
}
