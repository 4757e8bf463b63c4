//! Display-width measurement
//!
//! Column layout needs display width, not character count: east-asian
//! full-width code points occupy two terminal cells and combining marks
//! occupy none. ANSI sequences are stripped before measuring when colors are
//! active.

use std::sync::LazyLock;

use regex::Regex;

/// Matcher for terminal control sequences
static ANSI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "[\u{001B}\u{009B}][\\[\\]()#;?]*\
         (?:(?:(?:(?:;[-a-zA-Z\\d/#&.:=?%@~_]+)*\
         |[a-zA-Z\\d]+(?:;[-a-zA-Z\\d/#&.:=?%@~_]*)*)?\u{0007})\
         |(?:(?:\\d{1,4}(?:;\\d{0,4})*)?[\\dA-PR-TZcf-ntqry=><~]))",
    )
    .expect("ANSI pattern must compile")
});

/// Remove all terminal control sequences
pub fn strip_vt_control_characters(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// Number of terminal columns required to display `s`
pub fn get_string_width(s: &str, strip_controls: bool) -> usize {
    let stripped;
    let s = if strip_controls {
        stripped = strip_vt_control_characters(s);
        stripped.as_str()
    } else {
        s
    };

    let mut width = 0;
    for ch in s.chars() {
        let code = ch as u32;
        if is_full_width_code_point(code) {
            width += 2;
        } else if !is_zero_width_code_point(code) {
            width += 1;
        }
    }
    width
}

/// True when the code point occupies two terminal cells.
/// Ranges are partially derived from the Unicode EastAsianWidth table.
fn is_full_width_code_point(code: u32) -> bool {
    code >= 0x1100
        && (code <= 0x115f // Hangul Jamo
            || code == 0x2329 // LEFT-POINTING ANGLE BRACKET
            || code == 0x232a // RIGHT-POINTING ANGLE BRACKET
            // CJK Radicals Supplement .. Enclosed CJK Letters and Months
            || (0x2e80..=0x3247).contains(&code) && code != 0x303f
            // Enclosed CJK Letters and Months .. CJK Unified Ideographs Extension A
            || (0x3250..=0x4dbf).contains(&code)
            // CJK Unified Ideographs .. Yi Radicals
            || (0x4e00..=0xa4c6).contains(&code)
            // Hangul Jamo Extended-A
            || (0xa960..=0xa97c).contains(&code)
            // Hangul Syllables
            || (0xac00..=0xd7a3).contains(&code)
            // CJK Compatibility Ideographs
            || (0xf900..=0xfaff).contains(&code)
            // Vertical Forms
            || (0xfe10..=0xfe19).contains(&code)
            // CJK Compatibility Forms .. Small Form Variants
            || (0xfe30..=0xfe6b).contains(&code)
            // Halfwidth and Fullwidth Forms
            || (0xff01..=0xff60).contains(&code)
            || (0xffe0..=0xffe6).contains(&code)
            // Kana Supplement
            || (0x1b000..=0x1b001).contains(&code)
            // Enclosed Ideographic Supplement
            || (0x1f200..=0x1f251).contains(&code)
            // Miscellaneous Symbols and Pictographs .. Emoticons
            || (0x1f300..=0x1f64f).contains(&code)
            // CJK Unified Ideographs Extension B .. Tertiary Ideographic Plane
            || (0x20000..=0x3fffd).contains(&code))
}

/// True when the code point occupies no terminal cell
fn is_zero_width_code_point(code: u32) -> bool {
    code <= 0x1f // C0 control codes
        || (0x7f..=0x9f).contains(&code) // C1 control codes
        || (0x300..=0x36f).contains(&code) // Combining Diacritical Marks
        || (0x200b..=0x200f).contains(&code) // Modifying Invisible Characters
        // Combining Diacritical Marks for Symbols
        || (0x20d0..=0x20ff).contains(&code)
        || (0xfe00..=0xfe0f).contains(&code) // Variation Selectors
        || (0xfe20..=0xfe2f).contains(&code) // Combining Half Marks
        || (0xe0100..=0xe01ef).contains(&code) // Variation Selectors Supplement
}
