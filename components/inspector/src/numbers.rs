//! Number and BigInt rendering
//!
//! Numbers render with the scripting language's `Number`-to-string
//! semantics: plain decimal notation between 1e-6 and 1e21, exponential
//! outside, shortest round-trip digits. `-0` is rendered distinctly. The
//! optional numeric separator inserts `_` every three digits on both sides
//! of the decimal point, never into non-finite or exponential forms.

use crate::style::{stylize, Style};
use value_core::BigIntValue;

/// Render an f64 with script `Number`-to-string semantics.
///
/// Note `-0` renders as `"0"` here; the distinct `-0` form is applied by
/// [`format_number`], matching how the value itself stringifies versus how
/// it is inspected.
pub fn js_number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let negative = n < 0.0;
    let (digits, point) = shortest_digits(n.abs());
    let k = digits.len() as i32;

    let mut out = String::new();
    if negative {
        out.push('-');
    }

    if k <= point && point <= 21 {
        // Integer with trailing zeros: 123000
        out.push_str(&digits);
        for _ in 0..(point - k) {
            out.push('0');
        }
    } else if 0 < point && point <= 21 {
        // Decimal point inside the digits: 123.45
        out.push_str(&digits[..point as usize]);
        out.push('.');
        out.push_str(&digits[point as usize..]);
    } else if -6 < point && point <= 0 {
        // Leading zeros: 0.00123
        out.push_str("0.");
        for _ in 0..-point {
            out.push('0');
        }
        out.push_str(&digits);
    } else {
        // Exponential: 1.23e+25 / 1e-7
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        let exp = point - 1;
        if exp >= 0 {
            out.push('+');
        }
        out.push_str(&exp.to_string());
    }
    out
}

/// Shortest round-trip digit string and decimal-point position.
///
/// The returned pair `(digits, point)` satisfies
/// `value = 0.digits * 10^point` with no leading or trailing zero digits.
fn shortest_digits(abs: f64) -> (String, i32) {
    let mut buffer = ryu::Buffer::new();
    let repr = buffer.format_finite(abs);

    let (mantissa, exp10) = match repr.split_once(['e', 'E']) {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (repr, 0),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa, ""),
    };

    let mut digits: String = String::with_capacity(int_part.len() + frac_part.len());
    digits.push_str(int_part);
    digits.push_str(frac_part);

    let mut point = int_part.len() as i32 + exp10;

    let leading = digits.chars().take_while(|c| *c == '0').count();
    digits.drain(..leading);
    point -= leading as i32;
    while digits.ends_with('0') {
        digits.pop();
    }

    (digits, point)
}

/// Insert `_` separators right-to-left into an integer digit string
fn add_numeric_separator(integer: &str) -> String {
    let start = if integer.starts_with('-') { 1 } else { 0 };
    let mut result = String::new();
    let mut i = integer.len();
    while i >= start + 4 {
        result = format!("_{}{}", &integer[i - 3..i], result);
        i -= 3;
    }
    if i == integer.len() {
        integer.to_string()
    } else {
        format!("{}{}", &integer[..i], result)
    }
}

/// Insert `_` separators left-to-right into a fraction digit string
fn add_numeric_separator_end(fraction: &str) -> String {
    let mut result = String::new();
    let mut i = 0;
    while i + 3 < fraction.len() {
        result.push_str(&fraction[i..i + 3]);
        result.push('_');
        i += 3;
    }
    if i == 0 {
        fraction.to_string()
    } else {
        format!("{}{}", result, &fraction[i..])
    }
}

/// Render a number fragment, stylized as a number
pub fn format_number(colors: bool, n: f64, numeric_separator: bool) -> String {
    let text = format_number_text(n, numeric_separator);
    stylize(colors, &text, Style::Number)
}

/// Render a number without styling
pub fn format_number_text(n: f64, numeric_separator: bool) -> String {
    // -0 is indistinguishable from 0 once stringified, so check the sign bit.
    if n == 0.0 && n.is_sign_negative() {
        return "-0".to_string();
    }
    if !numeric_separator {
        return js_number_to_string(n);
    }
    let string = js_number_to_string(n);
    if !n.is_finite() || string.contains('e') {
        return string;
    }
    match string.split_once('.') {
        Some((int_part, frac_part)) => format!(
            "{}.{}",
            add_numeric_separator(int_part),
            add_numeric_separator_end(frac_part)
        ),
        None => add_numeric_separator(&string),
    }
}

/// Render a BigInt fragment, stylized as a bigint
pub fn format_bigint(colors: bool, b: &BigIntValue, numeric_separator: bool) -> String {
    let text = format_bigint_text(b, numeric_separator);
    stylize(colors, &text, Style::BigInt)
}

/// Render a BigInt without styling
pub fn format_bigint_text(b: &BigIntValue, numeric_separator: bool) -> String {
    let digits = b.to_digits();
    if numeric_separator {
        format!("{}n", add_numeric_separator(&digits))
    } else {
        format!("{}n", digits)
    }
}
