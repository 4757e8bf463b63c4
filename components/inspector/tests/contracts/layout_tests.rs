//! Contract tests for layout: line wrapping, indentation and column
//! grouping

use inspector::{inspect, Compact, InspectOptions};
use value_core::JsValue;

fn render(value: &JsValue) -> String {
    inspect(value, &InspectOptions::default()).unwrap()
}

#[test]
fn test_short_array_stays_on_one_line() {
    let arr = JsValue::array_from(vec![
        JsValue::number(1.0),
        JsValue::number(2.0),
        JsValue::number(3.0),
    ]);
    assert_eq!(render(&arr), "[ 1, 2, 3 ]");
}

#[test]
fn test_ten_digits_group_into_columns() {
    let arr = JsValue::array_from((0..10).map(|i| JsValue::number(i as f64)).collect());
    assert_eq!(render(&arr), "[\n  0, 1, 2, 3, 4,\n  5, 6, 7, 8, 9\n]");
}

#[test]
fn test_grouping_respects_column_cap() {
    let arr = JsValue::array_from((0..100).map(|i| JsValue::number(i as f64)).collect());
    let out = render(&arr);
    for line in out.lines().filter(|l| l.contains(',')) {
        let entries = line.matches(|c: char| c.is_ascii_digit()).count();
        assert!(entries <= 15 * 2, "too many entries in: {}", line);
    }
}

#[test]
fn test_non_numeric_entries_left_align() {
    let arr = JsValue::array_from(
        ["a", "bb", "ccc", "dddd", "e", "ff", "g", "hh"]
            .iter()
            .map(|s| JsValue::string(*s))
            .collect(),
    );
    let out = render(&arr);
    // Left-aligned columns pad after the separator, so no line starts with
    // leading spaces beyond the two-space indent.
    for line in out.lines().skip(1) {
        if line.len() > 2 && line != "]" {
            assert!(!line.starts_with("    "), "unexpected padding in {:?}", line);
        }
    }
}

#[test]
fn test_long_object_wraps_with_two_space_indent() {
    let obj = JsValue::object();
    for key in ["alpha", "bravo", "charlie", "delta", "echo"] {
        obj.set(key, JsValue::string("some moderately long value"));
    }
    let out = render(&obj);
    assert!(out.starts_with("{\n  alpha: "), "got: {}", out);
    assert!(out.ends_with("\n}"));
    for line in out.lines().skip(1).take(4) {
        assert!(line.starts_with("  "), "bad indent: {:?}", line);
        assert!(line.ends_with(','));
    }
}

#[test]
fn test_nested_indentation_accumulates() {
    let inner = JsValue::object();
    for key in ["one", "two", "three", "four"] {
        inner.set(key, JsValue::string("a long filler value for wrapping"));
    }
    let outer = JsValue::object();
    outer.set("inner", inner);
    let out = render(&outer);
    assert!(out.contains("\n  inner: {"), "got: {}", out);
    assert!(out.contains("\n    one: "), "got: {}", out);
}

#[test]
fn test_break_length_controls_wrapping() {
    let obj = JsValue::object();
    obj.set("a", JsValue::number(1.0));
    obj.set("b", JsValue::number(2.0));

    let wide = InspectOptions {
        break_length: 120,
        ..InspectOptions::default()
    };
    assert_eq!(inspect(&obj, &wide).unwrap(), "{ a: 1, b: 2 }");

    let narrow = InspectOptions {
        break_length: 8,
        ..InspectOptions::default()
    };
    assert_eq!(inspect(&obj, &narrow).unwrap(), "{\n  a: 1,\n  b: 2\n}");
}

#[test]
fn test_compact_never_is_always_multiline() {
    let obj = JsValue::object();
    obj.set("a", JsValue::number(1.0));
    let opts = InspectOptions {
        compact: Compact::Never,
        ..InspectOptions::default()
    };
    assert_eq!(inspect(&obj, &opts).unwrap(), "{\n  a: 1\n}");
}

#[test]
fn test_compact_limit_merges_inner_levels_only() {
    // Depth-3 nesting with compact=1: only the innermost level merges.
    let innermost = JsValue::object();
    innermost.set("x", JsValue::number(1.0));
    let middle = JsValue::object();
    middle.set("inner", innermost);
    let outer = JsValue::object();
    outer.set("mid", middle);

    let opts = InspectOptions {
        compact: Compact::Limit(1),
        ..InspectOptions::default()
    };
    let out = inspect(&outer, &opts).unwrap();
    assert!(out.contains("{ x: 1 }"), "got: {}", out);
    assert!(out.contains("\n  mid: "), "got: {}", out);
}

#[test]
fn test_compact_always_single_line() {
    let obj = JsValue::object();
    obj.set("a", JsValue::number(1.0));
    obj.set("b", JsValue::number(2.0));
    let opts = InspectOptions {
        compact: Compact::Always,
        ..InspectOptions::default()
    };
    assert_eq!(inspect(&obj, &opts).unwrap(), "{ a: 1, b: 2 }");
}

#[test]
fn test_wide_unicode_entries_measure_display_width() {
    // Full-width glyphs occupy two columns; the grouping math must not
    // produce lines past breakLength because of byte-length confusion.
    let arr = JsValue::array_from(
        (0..12)
            .map(|_| JsValue::string("你好"))
            .collect::<Vec<_>>(),
    );
    let out = render(&arr);
    assert!(out.contains("你好"));
    for line in out.lines() {
        assert!(
            inspector::width::get_string_width(line, false) <= 80,
            "line too wide: {:?}",
            line
        );
    }
}
