//! Contract tests for value semantics: identity, same-value-zero,
//! descriptors and weak collections

use value_core::{
    ErrorData, ErrorKind, JsValue, MapData, PropertyDescriptor, PropertyKey, SetData,
    WeakMapData,
};

mod identity_tests {
    use super::*;

    #[test]
    fn test_clones_share_identity() {
        let obj = JsValue::object();
        let alias = obj.clone();
        assert_eq!(obj.identity(), alias.identity());
    }

    #[test]
    fn test_primitives_have_no_identity() {
        assert!(JsValue::number(1.0).identity().is_none());
        assert!(JsValue::string("x").identity().is_none());
        assert!(JsValue::null().identity().is_none());
    }

    #[test]
    fn test_distinct_composites_differ() {
        assert_ne!(JsValue::map().identity(), JsValue::map().identity());
    }
}

mod same_value_zero_tests {
    use super::*;

    #[test]
    fn test_nan_equals_nan() {
        let mut map = MapData::new();
        map.set(JsValue::number(f64::NAN), JsValue::string("found"));
        assert!(map.get(&JsValue::number(f64::NAN)).is_some());
    }

    #[test]
    fn test_zero_signs_collapse() {
        let mut set = SetData::new();
        set.add(JsValue::number(0.0));
        set.add(JsValue::number(-0.0));
        assert_eq!(set.size(), 1);
    }

    #[test]
    fn test_composites_compare_by_identity() {
        let key = JsValue::array();
        let mut map = MapData::new();
        map.set(key.clone(), JsValue::number(1.0));
        assert!(map.has(&key));
        assert!(!map.has(&JsValue::array()));
    }
}

mod descriptor_tests {
    use super::*;

    #[test]
    fn test_getter_descriptors_evaluate_against_holder() {
        let obj = JsValue::object();
        obj.set("base", JsValue::number(10.0));
        if let JsValue::Object(data) = &obj {
            data.borrow_mut().properties.define(
                PropertyKey::string("doubled"),
                PropertyDescriptor::getter(|holder| {
                    let base = holder
                        .get("base")
                        .and_then(|v| v.as_number())
                        .unwrap_or(0.0);
                    Ok(JsValue::number(base * 2.0))
                }),
            );
        }
        if let JsValue::Object(data) = &obj {
            let data = data.borrow();
            let desc = data.properties.get_named("doubled").unwrap();
            if let value_core::PropertyKind::Accessor { get: Some(get), .. } = &desc.kind {
                assert_eq!(get(&obj).unwrap().as_number(), Some(20.0));
            } else {
                panic!("expected accessor");
            }
        }
    }

    #[test]
    fn test_key_listing_order() {
        let obj = JsValue::object();
        obj.set("second", JsValue::number(2.0));
        obj.set("first", JsValue::number(1.0));
        if let JsValue::Object(data) = &obj {
            let keys = data.borrow().properties.keys(false);
            assert_eq!(keys[0].as_str(), Some("second"));
            assert_eq!(keys[1].as_str(), Some("first"));
        }
    }
}

mod weak_collection_tests {
    use super::*;

    #[test]
    fn test_weak_map_keyed_by_identity() {
        let mut weak = WeakMapData::new();
        let key = JsValue::error(ErrorData::new(ErrorKind::Error, "k"));
        weak.set(key.clone(), JsValue::string("v")).unwrap();

        assert!(weak.has(&key));
        assert!(weak.get(&key.clone()).is_some());
        assert!(!weak.has(&JsValue::error(ErrorData::new(ErrorKind::Error, "k"))));
    }

    #[test]
    fn test_weak_map_rejects_primitive_keys() {
        let mut weak = WeakMapData::new();
        assert!(weak.set(JsValue::string("nope"), JsValue::null()).is_err());
    }
}
