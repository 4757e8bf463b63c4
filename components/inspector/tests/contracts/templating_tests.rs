//! Contract tests for printf-style templating and batch inspection

use inspector::{format, format_with_options, inspect_multiple, InspectOptions};
use value_core::{BigIntValue, JsValue};

#[test]
fn test_spec_examples() {
    assert_eq!(
        format(&[
            JsValue::string("%s has %d items"),
            JsValue::string("cart"),
            JsValue::number(3.0),
        ])
        .unwrap(),
        "cart has 3 items"
    );
    assert_eq!(format(&[JsValue::string("%%")]).unwrap(), "%");
}

#[test]
fn test_s_inspects_objects_shallowly() {
    let obj = JsValue::object();
    obj.set("a", JsValue::number(1.0));
    let out = format(&[JsValue::string("%s"), obj]).unwrap();
    assert_eq!(out, "{ a: 1 }");

    let nested = JsValue::object();
    let inner = JsValue::object();
    inner.set("x", JsValue::number(1.0));
    nested.set("inner", inner);
    let out = format(&[JsValue::string("%s"), nested]).unwrap();
    assert_eq!(out, "{ inner: [Object] }");
}

#[test]
fn test_capital_o_uses_full_options() {
    let nested = JsValue::object();
    let inner = JsValue::object();
    inner.set("x", JsValue::number(1.0));
    nested.set("inner", inner);
    let out = format(&[JsValue::string("%O"), nested]).unwrap();
    assert_eq!(out, "{ inner: { x: 1 } }");
}

#[test]
fn test_j_round_trip() {
    let obj = JsValue::object();
    obj.set("n", JsValue::number(1.5));
    obj.set("s", JsValue::string("t"));
    assert_eq!(
        format(&[JsValue::string("%j"), obj]).unwrap(),
        "{\"n\":1.5,\"s\":\"t\"}"
    );
}

#[test]
fn test_j_circular_marker() {
    let arr = JsValue::array();
    if let JsValue::Array(data) = &arr {
        data.borrow_mut().push(arr.clone());
    }
    assert_eq!(format(&[JsValue::string("%j"), arr]).unwrap(), "[Circular]");
}

#[test]
fn test_bigint_placeholders() {
    let big = JsValue::bigint(BigIntValue::from_i64(123));
    assert_eq!(format(&[JsValue::string("%d"), big]).unwrap(), "123n");
}

#[test]
fn test_extra_arguments_joined() {
    let out = format(&[
        JsValue::string("prefix"),
        JsValue::string("plain"),
        JsValue::array_from(vec![JsValue::number(1.0)]),
    ])
    .unwrap();
    assert_eq!(out, "prefix plain [ 1 ]");
}

#[test]
fn test_template_with_no_placeholder_consumption() {
    // Too few arguments: placeholders past the supply stay verbatim.
    let out = format(&[JsValue::string("a %s b %s"), JsValue::string("one")]).unwrap();
    assert_eq!(out, "a one b %s");
}

#[test]
fn test_format_with_options_numeric_separator() {
    let opts = InspectOptions {
        numeric_separator: true,
        ..InspectOptions::default()
    };
    let out = format_with_options(&opts, &[JsValue::string("%d"), JsValue::number(1_000_000.0)])
        .unwrap();
    assert_eq!(out, "1_000_000");
}

#[test]
fn test_inspect_multiple_mixes_strings_and_values() {
    let out = inspect_multiple(
        &InspectOptions::default(),
        &[
            JsValue::string("ready:"),
            JsValue::boolean(true),
            JsValue::map_from(vec![(JsValue::string("k"), JsValue::number(1.0))]),
        ],
    )
    .unwrap();
    assert_eq!(out, "ready: true Map(1) { 'k' => 1 }");
}

#[test]
fn test_invalid_options_error() {
    let opts = InspectOptions {
        break_length: 0,
        ..InspectOptions::default()
    };
    assert!(format_with_options(&opts, &[JsValue::string("%s"), JsValue::null()]).is_err());
}
