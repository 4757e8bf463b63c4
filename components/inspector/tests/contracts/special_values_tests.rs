//! Contract tests for the non-plain renderer kinds: functions, errors,
//! dates, regexps, buffers, promises, proxies, namespaces and iterators

use inspector::{inspect, InspectOptions};
use value_core::{
    ArrayBufferData, BoxedData, DataViewData, DateData, ElementKind, ErrorData, ErrorKind,
    FunctionData, FunctionKind, IteratorData, JsValue, NamespaceData, PromiseData, ProxyData,
    RegExpData, TypedArrayData, WeakSetData,
};

fn render(value: &JsValue) -> String {
    inspect(value, &InspectOptions::default()).unwrap()
}

mod function_tests {
    use super::*;

    #[test]
    fn test_named_function() {
        let f = JsValue::function(FunctionData::named("add"));
        assert_eq!(render(&f), "[Function: add]");
    }

    #[test]
    fn test_anonymous_function() {
        let f = JsValue::function(FunctionData::named(""));
        assert_eq!(render(&f), "[Function (anonymous)]");
    }

    #[test]
    fn test_generator_and_async_labels() {
        let gen = JsValue::function(FunctionData::with_kind("gen", FunctionKind::Generator));
        assert_eq!(render(&gen), "[GeneratorFunction: gen]");

        let async_fn = JsValue::function(FunctionData::with_kind("load", FunctionKind::Async));
        assert_eq!(render(&async_fn), "[AsyncFunction: load]");

        let async_gen = JsValue::function(FunctionData::with_kind(
            "stream",
            FunctionKind::AsyncGenerator,
        ));
        assert_eq!(render(&async_gen), "[AsyncGeneratorFunction: stream]");
    }

    #[test]
    fn test_class_labels() {
        let plain = JsValue::function(FunctionData::class("Foo", None));
        assert_eq!(render(&plain), "[class Foo]");

        let derived = JsValue::function(FunctionData::class("Foo", Some("Bar".into())));
        assert_eq!(render(&derived), "[class Foo extends Bar]");
    }

    #[test]
    fn test_function_with_properties() {
        let mut data = FunctionData::named("f");
        data.extras.set("version", JsValue::number(2.0));
        let f = JsValue::function(data);
        assert_eq!(render(&f), "[Function: f] { version: 2 }");
    }
}

mod error_tests {
    use super::*;

    #[test]
    fn test_stackless_error() {
        let err = JsValue::error(ErrorData::new(ErrorKind::Error, "boom"));
        assert_eq!(render(&err), "[Error: boom]");
    }

    #[test]
    fn test_error_with_stack() {
        let mut data = ErrorData::new(ErrorKind::TypeError, "bad input");
        data.set_stack("TypeError: bad input\n    at parse (app.js:10:3)");
        let out = render(&JsValue::error(data));
        assert_eq!(out, "TypeError: bad input\n    at parse (app.js:10:3)");
    }

    #[test]
    fn test_error_extra_properties() {
        let mut data = ErrorData::new(ErrorKind::Error, "io");
        data.extras.set("code", JsValue::string("EIO"));
        let out = render(&JsValue::error(data));
        assert_eq!(out, "[Error: io] { code: 'EIO' }");
    }

    #[test]
    fn test_error_cause_is_rendered() {
        let mut inner = ErrorData::new(ErrorKind::Error, "root");
        let mut outer = ErrorData::new(ErrorKind::Error, "wrapper");
        inner.set_stack("Error: root");
        outer.set_stack("Error: wrapper");
        outer.set_cause(JsValue::error(inner));
        let out = render(&JsValue::error(outer));
        assert!(out.contains("[cause]"), "got: {}", out);
        assert!(out.contains("[Error: root]"), "got: {}", out);
    }

    #[test]
    fn test_error_nested_in_object_is_indented() {
        let mut data = ErrorData::new(ErrorKind::Error, "deep");
        data.set_stack("Error: deep\n    at f (x.js:1:1)");
        let holder = JsValue::object();
        holder.set("err", JsValue::error(data));
        let out = render(&holder);
        // Stack continuation lines carry the holder's indentation.
        assert!(out.contains("\n      at f"), "got: {}", out);
    }
}

mod date_and_regexp_tests {
    use super::*;

    #[test]
    fn test_date_renders_iso() {
        let d = JsValue::date(DateData::from_millis(0));
        assert_eq!(render(&d), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_invalid_date() {
        let d = JsValue::date(DateData::invalid());
        assert_eq!(render(&d), "Invalid Date");
    }

    #[test]
    fn test_regexp_renders_pattern() {
        let re = JsValue::regexp(RegExpData::new("ab+c", "gi").unwrap());
        assert_eq!(render(&re), "/ab+c/gi");
    }

    #[test]
    fn test_regexp_with_extra_property() {
        let mut data = RegExpData::new("x", "").unwrap();
        data.extras.set("uses", JsValue::number(3.0));
        assert_eq!(render(&JsValue::regexp(data)), "/x/ { uses: 3 }");
    }
}

mod boxed_tests {
    use super::*;

    #[test]
    fn test_boxed_number() {
        let boxed = JsValue::boxed(BoxedData::new(JsValue::number(3.0)));
        assert_eq!(render(&boxed), "[Number: 3]");
    }

    #[test]
    fn test_boxed_string() {
        let boxed = JsValue::boxed(BoxedData::new(JsValue::string("hey")));
        assert_eq!(render(&boxed), "[String: 'hey']");
    }

    #[test]
    fn test_boxed_with_extra_property() {
        let mut data = BoxedData::new(JsValue::boolean(false));
        data.extras.set("why", JsValue::string("flag"));
        assert_eq!(
            render(&JsValue::boxed(data)),
            "[Boolean: false] { why: 'flag' }"
        );
    }
}

mod buffer_tests {
    use super::*;

    #[test]
    fn test_typed_array() {
        let arr = JsValue::typed_array(TypedArrayData::from_numbers(
            ElementKind::Uint8,
            &[1.0, 2.0, 3.0],
        ));
        assert_eq!(render(&arr), "Uint8Array(3) [ 1, 2, 3 ]");
    }

    #[test]
    fn test_empty_typed_array() {
        let arr = JsValue::typed_array(TypedArrayData::from_numbers(ElementKind::Float64, &[]));
        assert_eq!(render(&arr), "Float64Array(0) []");
    }

    #[test]
    fn test_typed_array_truncation() {
        let values = vec![9.0; 120];
        let arr =
            JsValue::typed_array(TypedArrayData::from_numbers(ElementKind::Int32, &values));
        let out = render(&arr);
        assert!(out.contains("... 20 more items"));
    }

    #[test]
    fn test_array_buffer_hex_preview() {
        let buf = JsValue::array_buffer(ArrayBufferData::new(vec![0x01, 0xab, 0xff]));
        assert_eq!(
            render(&buf),
            "ArrayBuffer { [Uint8Contents]: <01 ab ff>, byteLength: 3 }"
        );
    }

    #[test]
    fn test_detached_array_buffer() {
        let mut data = ArrayBufferData::new(vec![1, 2, 3]);
        data.detached = true;
        let out = render(&JsValue::array_buffer(data));
        assert_eq!(out, "ArrayBuffer { (detached), byteLength: 0 }");
    }

    #[test]
    fn test_shared_array_buffer_label() {
        let buf = JsValue::array_buffer(ArrayBufferData::shared(vec![0x00]));
        assert!(render(&buf).starts_with("SharedArrayBuffer {"));
    }

    #[test]
    fn test_data_view() {
        let buf = JsValue::array_buffer(ArrayBufferData::new(vec![0xab, 0xcd]));
        let view = JsValue::data_view(DataViewData::new(buf, 0, 2));
        let out = render(&view);
        assert!(out.starts_with("DataView {"), "got: {}", out);
        assert!(out.contains("byteLength: 2"));
        assert!(out.contains("byteOffset: 0"));
        assert!(out.contains("buffer: ArrayBuffer"));
    }
}

mod promise_tests {
    use super::*;

    #[test]
    fn test_promise_states() {
        assert_eq!(
            render(&JsValue::promise(PromiseData::pending())),
            "Promise { <pending> }"
        );
        assert_eq!(
            render(&JsValue::promise(PromiseData::fulfilled(JsValue::number(
                42.0
            )))),
            "Promise { 42 }"
        );
        let rejected = JsValue::promise(PromiseData::rejected(JsValue::error(ErrorData::new(
            ErrorKind::Error,
            "nope",
        ))));
        assert_eq!(render(&rejected), "Promise { <rejected> [Error: nope] }");
    }
}

mod weak_collection_tests {
    use super::*;

    #[test]
    fn test_weak_set_defaults_to_unknown() {
        let ws = JsValue::weak_set();
        assert_eq!(render(&ws), "WeakSet { <items unknown> }");
    }

    #[test]
    fn test_weak_set_preview_requires_show_hidden() {
        let mut data = WeakSetData::new();
        data.preview = true;
        data.add(JsValue::array_from(vec![JsValue::number(1.0)]))
            .unwrap();
        let ws = JsValue::from_weak_set(data);

        assert_eq!(render(&ws), "WeakSet { <items unknown> }");

        let opts = InspectOptions {
            show_hidden: true,
            ..InspectOptions::default()
        };
        assert_eq!(inspect(&ws, &opts).unwrap(), "WeakSet { [ 1 ] }");
    }
}

mod namespace_and_iterator_tests {
    use super::*;

    #[test]
    fn test_module_namespace() {
        let mut ns = NamespaceData::new();
        ns.export("answer", JsValue::number(42.0));
        ns.export_uninitialized("lazy");
        let out = render(&JsValue::module_namespace(ns));
        assert_eq!(
            out,
            "[Module: null prototype] { answer: 42, lazy: <uninitialized> }"
        );
    }

    #[test]
    fn test_set_iterator() {
        let it = JsValue::iterator(IteratorData::set_values(vec![
            JsValue::number(1.0),
            JsValue::number(2.0),
        ]));
        assert_eq!(render(&it), "[Set Iterator] { 1, 2 }");
    }

    #[test]
    fn test_map_entries_iterator() {
        let it = JsValue::iterator(IteratorData::map_entries(vec![(
            JsValue::string("k"),
            JsValue::number(1.0),
        )]));
        assert_eq!(render(&it), "[Map Entries] { [ 'k', 1 ] }");
    }

    #[test]
    fn test_map_keys_iterator() {
        let it = JsValue::iterator(IteratorData::map_values(vec![JsValue::string("k")]));
        assert_eq!(render(&it), "[Map Iterator] { 'k' }");
    }
}

mod proxy_tests {
    use super::*;

    #[test]
    fn test_proxy_is_transparent_by_default() {
        let target = JsValue::object();
        target.set("a", JsValue::number(1.0));
        let proxy = JsValue::proxy(ProxyData::new(target, JsValue::object()));
        assert_eq!(render(&proxy), "{ a: 1 }");
    }

    #[test]
    fn test_show_proxy() {
        let target = JsValue::object();
        target.set("a", JsValue::number(1.0));
        let proxy = JsValue::proxy(ProxyData::new(target, JsValue::object()));
        let opts = InspectOptions {
            show_proxy: true,
            ..InspectOptions::default()
        };
        assert_eq!(inspect(&proxy, &opts).unwrap(), "Proxy [ { a: 1 }, {} ]");
    }

    #[test]
    fn test_revoked_proxy() {
        let proxy = JsValue::proxy(ProxyData::revoked());
        assert_eq!(render(&proxy), "<Revoked Proxy>");
    }
}

mod external_tests {
    use super::*;

    #[test]
    fn test_external_pointer() {
        let ext = JsValue::external(0xdeadbeef);
        assert_eq!(render(&ext), "[External: 0xdeadbeef]");
    }
}
