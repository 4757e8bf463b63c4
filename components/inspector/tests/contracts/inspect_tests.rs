//! Contract tests for core rendering: primitives, cycles, depth and
//! collection shapes

use inspector::{inspect, InspectOptions};
use value_core::{ArrayData, JsValue, ObjectData};

fn render(value: &JsValue) -> String {
    inspect(value, &InspectOptions::default()).unwrap()
}

mod primitive_tests {
    use super::*;

    #[test]
    fn test_negative_zero_is_distinct() {
        assert_eq!(render(&JsValue::number(-0.0)), "-0");
        assert_eq!(render(&JsValue::number(0.0)), "0");
    }

    #[test]
    fn test_special_numbers() {
        assert_eq!(render(&JsValue::number(f64::NAN)), "NaN");
        assert_eq!(render(&JsValue::number(f64::INFINITY)), "Infinity");
        assert_eq!(render(&JsValue::number(1e21)), "1e+21");
    }

    #[test]
    fn test_numeric_separator() {
        let opts = InspectOptions {
            numeric_separator: true,
            ..InspectOptions::default()
        };
        assert_eq!(
            inspect(&JsValue::number(1_000_000.0), &opts).unwrap(),
            "1_000_000"
        );
    }

    #[test]
    fn test_quote_selection() {
        assert_eq!(render(&JsValue::string("it's")), "\"it's\"");
        assert_eq!(
            render(&JsValue::string("he said \"hi\"")),
            "'he said \"hi\"'"
        );
        assert_eq!(render(&JsValue::string("both ' and \"")), "`both ' and \"`");
    }

    #[test]
    fn test_undefined_null_booleans() {
        assert_eq!(render(&JsValue::undefined()), "undefined");
        assert_eq!(render(&JsValue::null()), "null");
        assert_eq!(render(&JsValue::boolean(true)), "true");
    }

    #[test]
    fn test_bigint_and_symbol() {
        assert_eq!(
            render(&JsValue::bigint(value_core::BigIntValue::from_i64(42))),
            "42n"
        );
        assert_eq!(
            render(&JsValue::symbol(value_core::SymbolValue::new(Some(
                "tag".into()
            )))),
            "Symbol(tag)"
        );
    }
}

mod cycle_tests {
    use super::*;

    #[test]
    fn test_self_reference() {
        let obj = JsValue::object();
        obj.set("self", obj.clone());
        let out = render(&obj);
        assert_eq!(out, "<ref *1> { self: [Circular *1] }");
        assert_eq!(out.matches("<ref *1>").count(), 1);
        assert_eq!(out.matches("[Circular *1]").count(), 1);
    }

    #[test]
    fn test_two_node_cycle() {
        let a = JsValue::object();
        let b = JsValue::object();
        a.set("b", b.clone());
        b.set("a", a.clone());
        let out = render(&a);
        assert_eq!(out, "<ref *1> { b: { a: [Circular *1] } }");
    }

    #[test]
    fn test_longer_cycles_terminate() {
        // Cycle lengths 1..6 must all terminate with matching markers.
        for len in 1..=6 {
            let nodes: Vec<JsValue> = (0..len).map(|_| JsValue::object()).collect();
            for i in 0..len {
                nodes[i].set("next", nodes[(i + 1) % len].clone());
            }
            let out = inspect(
                &nodes[0],
                &InspectOptions {
                    depth: None,
                    ..InspectOptions::default()
                },
            )
            .unwrap();
            assert!(out.contains("[Circular *1]"), "cycle length {}", len);
            assert!(out.contains("<ref *1>"), "cycle length {}", len);
        }
    }

    #[test]
    fn test_shared_value_is_not_a_cycle() {
        // The same value appearing twice as a sibling is not circular.
        let shared = JsValue::object();
        shared.set("x", JsValue::number(1.0));
        let holder = JsValue::object();
        holder.set("a", shared.clone());
        holder.set("b", shared);
        let out = render(&holder);
        assert!(!out.contains("Circular"));
        assert_eq!(out, "{ a: { x: 1 }, b: { x: 1 } }");
    }
}

mod depth_tests {
    use super::*;

    #[test]
    fn test_depth_bound_renders_summary() {
        let l3 = JsValue::object();
        l3.set("x", JsValue::number(1.0));
        let l2 = JsValue::object();
        l2.set("l3", l3);
        let l1 = JsValue::object();
        l1.set("l2", l2);
        let root = JsValue::object();
        root.set("l1", l1);

        let out = render(&root);
        assert_eq!(out, "{ l1: { l2: { l3: [Object] } } }");
    }

    #[test]
    fn test_unbounded_depth() {
        let l3 = JsValue::object();
        l3.set("x", JsValue::number(1.0));
        let l2 = JsValue::object();
        l2.set("l3", l3);
        let l1 = JsValue::object();
        l1.set("l2", l2);
        let root = JsValue::object();
        root.set("l1", l1);

        let opts = InspectOptions {
            depth: None,
            ..InspectOptions::default()
        };
        let out = inspect(&root, &opts).unwrap();
        assert_eq!(out, "{ l1: { l2: { l3: { x: 1 } } } }");
    }

    #[test]
    fn test_depth_summary_keeps_class_label() {
        let proto = JsValue::object();
        proto.set(
            "constructor",
            JsValue::function(value_core::FunctionData::named("Widget")),
        );
        let inner = JsValue::from_object(ObjectData::with_prototype(proto));
        inner.set("x", JsValue::number(1.0));

        let l2 = JsValue::object();
        l2.set("inner", inner);
        let l1 = JsValue::object();
        l1.set("l2", l2);
        let root = JsValue::object();
        root.set("l1", l1);

        let out = render(&root);
        assert!(out.contains("[Widget]"), "got: {}", out);
    }
}

mod recursion_guard_tests {
    use super::*;

    #[test]
    fn test_very_deep_chain_is_interrupted_not_crashed() {
        let root = JsValue::object();
        let mut current = root.clone();
        for _ in 0..600 {
            let next = JsValue::object();
            current.set("next", next.clone());
            current = next;
        }
        current.set("leaf", JsValue::number(1.0));

        let opts = InspectOptions {
            depth: None,
            ..InspectOptions::default()
        };
        let out = inspect(&root, &opts).unwrap();
        assert!(
            out.contains("Inspection interrupted prematurely"),
            "expected interruption marker"
        );
        // The shallow part of the structure still rendered.
        assert!(out.starts_with("{\n  next: "));
    }
}

mod collection_tests {
    use super::*;

    #[test]
    fn test_map_rendering() {
        let map = JsValue::map_from(vec![(JsValue::string("a"), JsValue::number(1.0))]);
        assert_eq!(render(&map), "Map(1) { 'a' => 1 }");
    }

    #[test]
    fn test_set_rendering() {
        let set = JsValue::set_from(vec![
            JsValue::number(1.0),
            JsValue::number(2.0),
            JsValue::number(3.0),
        ]);
        assert_eq!(render(&set), "Set(3) { 1, 2, 3 }");
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(render(&JsValue::map()), "Map(0) {}");
        assert_eq!(render(&JsValue::set_collection()), "Set(0) {}");
        assert_eq!(render(&JsValue::weak_map()), "WeakMap { <items unknown> }");
    }

    #[test]
    fn test_nested_composites_one_line_when_short() {
        let root = JsValue::object();
        root.set(
            "first",
            JsValue::array_from(vec![
                JsValue::number(1.0),
                JsValue::number(2.0),
                JsValue::number(3.0),
            ]),
        );
        let out = render(&root);
        assert_eq!(out, "{ first: [ 1, 2, 3 ] }");
    }

    #[test]
    fn test_array_truncation() {
        let arr = JsValue::array_from(vec![JsValue::number(7.0); 150]);
        let out = render(&arr);
        assert!(out.contains("... 50 more items"));
        assert_eq!(out.matches('7').count(), 100);
    }

    #[test]
    fn test_sparse_array_holes() {
        let mut data = ArrayData::default();
        data.push(JsValue::number(1.0));
        data.push_holes(2);
        data.push(JsValue::number(4.0));
        let out = render(&JsValue::from_array(data));
        assert_eq!(out, "[ 1, <2 empty items>, 4 ]");
    }

    #[test]
    fn test_map_with_composite_keys() {
        let key = JsValue::array_from(vec![JsValue::number(1.0)]);
        let map = JsValue::map_from(vec![(key, JsValue::string("v"))]);
        assert_eq!(render(&map), "Map(1) { [ 1 ] => 'v' }");
    }
}

mod label_tests {
    use super::*;

    #[test]
    fn test_null_prototype_object() {
        let obj = JsValue::from_object(ObjectData::with_null_prototype());
        obj.set("a", JsValue::number(1.0));
        assert_eq!(render(&obj), "[Object: null prototype] { a: 1 }");
    }

    #[test]
    fn test_class_instance_label() {
        let proto = JsValue::object();
        proto.set(
            "constructor",
            JsValue::function(value_core::FunctionData::named("Point")),
        );
        let obj = JsValue::from_object(ObjectData::with_prototype(proto));
        obj.set("x", JsValue::number(1.0));
        assert_eq!(render(&obj), "Point { x: 1 }");
    }

    #[test]
    fn test_tag_annotation() {
        let obj = JsValue::object();
        if let JsValue::Object(data) = &obj {
            data.borrow_mut().properties.define(
                value_core::PropertyKey::symbol(value_core::SymbolValue::to_string_tag()),
                value_core::PropertyDescriptor::hidden_data(JsValue::string("Custom")),
            );
        }
        obj.set("a", JsValue::number(1.0));
        assert_eq!(render(&obj), "Object [Custom] { a: 1 }");
    }

    #[test]
    fn test_enumerable_tag_is_suppressed() {
        let obj = JsValue::object();
        if let JsValue::Object(data) = &obj {
            data.borrow_mut().properties.define(
                value_core::PropertyKey::symbol(value_core::SymbolValue::to_string_tag()),
                value_core::PropertyDescriptor::data(JsValue::string("Custom")),
            );
        }
        let out = render(&obj);
        assert!(!out.starts_with("Object [Custom]"), "got: {}", out);
        assert!(out.contains("Symbol(Symbol.toStringTag)"), "got: {}", out);
    }

    #[test]
    fn test_arguments_object() {
        let mut data = ObjectData::new();
        data.is_arguments = true;
        let obj = JsValue::from_object(data);
        obj.set("0", JsValue::string("x"));
        assert_eq!(render(&obj), "[Arguments] { '0': 'x' }");
    }
}
