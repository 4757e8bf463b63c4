//! Contract tests for the options surface: hidden properties, getters,
//! sorting, colors and custom inspection hooks

use std::rc::Rc;

use inspector::{inspect, inspect_legacy, Getters, InspectOptions, Sorted};
use value_core::{
    CustomInspectResult, JsError, JsValue, ObjectData, PropertyDescriptor, PropertyKey,
    SymbolValue,
};

fn render(value: &JsValue) -> String {
    inspect(value, &InspectOptions::default()).unwrap()
}

mod hidden_tests {
    use super::*;

    #[test]
    fn test_non_enumerable_requires_show_hidden() {
        let obj = JsValue::object();
        if let JsValue::Object(data) = &obj {
            data.borrow_mut().properties.define(
                PropertyKey::string("secret"),
                PropertyDescriptor::hidden_data(JsValue::number(1.0)),
            );
        }
        assert_eq!(render(&obj), "{}");

        let opts = InspectOptions {
            show_hidden: true,
            ..InspectOptions::default()
        };
        assert_eq!(inspect(&obj, &opts).unwrap(), "{ [secret]: 1 }");
    }

    #[test]
    fn test_legacy_boolean_is_show_hidden() {
        let obj = JsValue::object();
        if let JsValue::Object(data) = &obj {
            data.borrow_mut().properties.define(
                PropertyKey::string("hidden"),
                PropertyDescriptor::hidden_data(JsValue::boolean(true)),
            );
        }
        assert_eq!(inspect_legacy(&obj, false).unwrap(), "{}");
        assert_eq!(inspect_legacy(&obj, true).unwrap(), "{ [hidden]: true }");
    }

    #[test]
    fn test_symbol_keys_render_bracketed() {
        let obj = JsValue::object();
        if let JsValue::Object(data) = &obj {
            data.borrow_mut().properties.define(
                PropertyKey::symbol(SymbolValue::new(Some("marker".into()))),
                PropertyDescriptor::data(JsValue::number(5.0)),
            );
        }
        assert_eq!(render(&obj), "{ [Symbol(marker)]: 5 }");
    }

    #[test]
    fn test_quoted_keys() {
        let obj = JsValue::object();
        obj.set("valid_name", JsValue::number(1.0));
        obj.set("needs quoting", JsValue::number(2.0));
        assert_eq!(
            render(&obj),
            "{ valid_name: 1, 'needs quoting': 2 }"
        );
    }
}

mod getter_tests {
    use super::*;

    fn with_getter(throws: bool) -> JsValue {
        let obj = JsValue::object();
        if let JsValue::Object(data) = &obj {
            data.borrow_mut().properties.define(
                PropertyKey::string("computed"),
                PropertyDescriptor::getter(move |_| {
                    if throws {
                        Err(JsError::new("boom"))
                    } else {
                        Ok(JsValue::number(42.0))
                    }
                }),
            );
        }
        obj
    }

    #[test]
    fn test_getters_render_marker_by_default() {
        assert_eq!(render(&with_getter(false)), "{ computed: [Getter] }");
    }

    #[test]
    fn test_getters_evaluate_when_requested() {
        let opts = InspectOptions {
            getters: Getters::All,
            ..InspectOptions::default()
        };
        assert_eq!(
            inspect(&with_getter(false), &opts).unwrap(),
            "{ computed: [Getter: 42] }"
        );
    }

    #[test]
    fn test_throwing_getter_is_contained_inline() {
        let opts = InspectOptions {
            getters: Getters::All,
            ..InspectOptions::default()
        };
        assert_eq!(
            inspect(&with_getter(true), &opts).unwrap(),
            "{ computed: [Getter: <Inspection threw (boom)>] }"
        );
    }

    #[test]
    fn test_getter_setter_label() {
        let obj = JsValue::object();
        if let JsValue::Object(data) = &obj {
            data.borrow_mut().properties.define(
                PropertyKey::string("both"),
                PropertyDescriptor::getter_setter(|_| Ok(JsValue::null())),
            );
            data.borrow_mut().properties.define(
                PropertyKey::string("only_set"),
                PropertyDescriptor::setter_only(),
            );
        }
        assert_eq!(
            render(&obj),
            "{ both: [Getter/Setter], only_set: [Setter] }"
        );
    }

    #[test]
    fn test_get_only_mode_skips_pairs() {
        let obj = JsValue::object();
        if let JsValue::Object(data) = &obj {
            data.borrow_mut().properties.define(
                PropertyKey::string("pair"),
                PropertyDescriptor::getter_setter(|_| Ok(JsValue::number(1.0))),
            );
            data.borrow_mut().properties.define(
                PropertyKey::string("lone"),
                PropertyDescriptor::getter(|_| Ok(JsValue::number(2.0))),
            );
        }
        let opts = InspectOptions {
            getters: Getters::GetOnly,
            ..InspectOptions::default()
        };
        assert_eq!(
            inspect(&obj, &opts).unwrap(),
            "{ pair: [Getter/Setter], lone: [Getter: 2] }"
        );
    }
}

mod sorted_tests {
    use super::*;

    #[test]
    fn test_sorted_orders_entries() {
        let obj = JsValue::object();
        obj.set("zeta", JsValue::number(1.0));
        obj.set("alpha", JsValue::number(2.0));
        let opts = InspectOptions {
            sorted: Sorted::Yes,
            ..InspectOptions::default()
        };
        assert_eq!(inspect(&obj, &opts).unwrap(), "{ alpha: 2, zeta: 1 }");
    }

    #[test]
    fn test_custom_comparator() {
        let obj = JsValue::object();
        obj.set("a", JsValue::number(1.0));
        obj.set("b", JsValue::number(2.0));
        let opts = InspectOptions {
            sorted: Sorted::With(Rc::new(|a: &str, b: &str| b.cmp(a))),
            ..InspectOptions::default()
        };
        assert_eq!(inspect(&obj, &opts).unwrap(), "{ b: 2, a: 1 }");
    }
}

mod color_tests {
    use super::*;

    #[test]
    fn test_colors_wrap_primitives() {
        let opts = InspectOptions {
            colors: true,
            ..InspectOptions::default()
        };
        assert_eq!(
            inspect(&JsValue::number(7.0), &opts).unwrap(),
            "\x1b[33m7\x1b[39m"
        );
        assert_eq!(
            inspect(&JsValue::string("x"), &opts).unwrap(),
            "\x1b[32m'x'\x1b[39m"
        );
    }

    #[test]
    fn test_colored_output_still_fits_line_budget() {
        let arr = JsValue::array_from(vec![JsValue::number(1.0), JsValue::number(2.0)]);
        let opts = InspectOptions {
            colors: true,
            ..InspectOptions::default()
        };
        let out = inspect(&arr, &opts).unwrap();
        // The escape sequences must not push short arrays onto several lines.
        assert!(!out.contains('\n'), "got: {:?}", out);
    }
}

mod string_limit_tests {
    use super::*;

    #[test]
    fn test_max_string_length() {
        let opts = InspectOptions {
            max_string_length: Some(4),
            ..InspectOptions::default()
        };
        assert_eq!(
            inspect(&JsValue::string("abcdefgh"), &opts).unwrap(),
            "'abcd'... 4 more characters"
        );
    }

    #[test]
    fn test_unbounded_string_length() {
        let opts = InspectOptions {
            max_string_length: None,
            ..InspectOptions::default()
        };
        let long = "x".repeat(20_000);
        let out = inspect(&JsValue::string(&long), &opts).unwrap();
        assert!(!out.contains("more characters"));
    }
}

mod custom_inspect_tests {
    use super::*;

    fn with_hook(
        hook: impl Fn(Option<i64>, &[(String, JsValue)]) -> Result<CustomInspectResult, JsError>
            + 'static,
    ) -> JsValue {
        let mut data = ObjectData::new();
        data.custom_inspect = Some(Rc::new(hook));
        let obj = JsValue::from_object(data);
        obj.set("ignored", JsValue::number(1.0));
        obj
    }

    #[test]
    fn test_text_result_is_used_verbatim() {
        let obj = with_hook(|_, _| Ok(CustomInspectResult::Text("Custom<3>".into())));
        assert_eq!(render(&obj), "Custom<3>");
    }

    #[test]
    fn test_hook_receives_remaining_depth() {
        let obj = with_hook(|depth, _| {
            Ok(CustomInspectResult::Text(format!("depth={:?}", depth)))
        });
        assert_eq!(render(&obj), "depth=Some(2)");
    }

    #[test]
    fn test_hook_receives_user_options() {
        let obj = with_hook(|_, options| {
            let found = options
                .iter()
                .any(|(key, value)| key == "flavor" && value.as_str() == Some("plain"));
            Ok(CustomInspectResult::Text(format!("flavor={}", found)))
        });
        let opts = InspectOptions {
            extra: vec![("flavor".into(), JsValue::string("plain"))],
            ..InspectOptions::default()
        };
        assert_eq!(inspect(&obj, &opts).unwrap(), "flavor=true");
    }

    #[test]
    fn test_value_result_is_reformatted() {
        let obj = with_hook(|_, _| {
            Ok(CustomInspectResult::Value(JsValue::array_from(vec![
                JsValue::number(1.0),
            ])))
        });
        assert_eq!(render(&obj), "[ 1 ]");
    }

    #[test]
    fn test_self_return_falls_through() {
        let obj = with_hook(|_, _| Ok(CustomInspectResult::SelfRef));
        assert_eq!(render(&obj), "{ ignored: 1 }");
    }

    #[test]
    fn test_hook_disabled_by_option() {
        let obj = with_hook(|_, _| Ok(CustomInspectResult::Text("nope".into())));
        let opts = InspectOptions {
            custom_inspect: false,
            ..InspectOptions::default()
        };
        assert_eq!(inspect(&obj, &opts).unwrap(), "{ ignored: 1 }");
    }

    #[test]
    fn test_hook_error_propagates() {
        let obj = with_hook(|_, _| Err(JsError::new("hook failed")));
        assert!(inspect(&obj, &InspectOptions::default()).is_err());
    }

    #[test]
    fn test_multiline_text_is_reindented() {
        let obj = with_hook(|_, _| Ok(CustomInspectResult::Text("line1\nline2".into())));
        let holder = JsValue::object();
        holder.set("custom", obj);
        let out = render(&holder);
        assert!(out.contains("line1\n  line2"), "got: {}", out);
    }

    #[test]
    fn test_foreign_object_gets_primitives_only() {
        let mut data = ObjectData::new();
        data.foreign = true;
        data.custom_inspect = Some(Rc::new(|_, options: &[(String, JsValue)]| {
            let has_composite = options.iter().any(|(_, v)| !v.is_primitive());
            Ok(CustomInspectResult::Text(format!(
                "composites={}",
                has_composite
            )))
        }));
        let obj = JsValue::from_object(data);
        let opts = InspectOptions {
            extra: vec![("payload".into(), JsValue::object())],
            ..InspectOptions::default()
        };
        assert_eq!(inspect(&obj, &opts).unwrap(), "composites=false");
    }
}
