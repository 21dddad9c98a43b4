//! Unit tests for realms and cross-realm values

use core_types::{Intrinsic, JsValue, PromiseState, Realm, TypedArrayKind};

#[cfg(test)]
mod cross_realm_tests {
    use super::*;

    #[test]
    fn test_foreign_values_have_foreign_prototypes() {
        let main = Realm::new();
        let frame = Realm::new();
        let foreign = frame.object();
        let proto = foreign.as_object().unwrap().prototype().unwrap();

        assert!(proto.is_intrinsic(Intrinsic::ObjectPrototype));
        assert!(!proto.ptr_eq(&main.intrinsic(Intrinsic::ObjectPrototype)));
    }

    #[test]
    fn test_tags_agree_across_realms() {
        let main = Realm::new();
        let frame = Realm::new();
        let pairs = [
            (main.array(vec![]), frame.array(vec![])),
            (main.map(vec![]), frame.map(vec![])),
            (main.promise(PromiseState::Pending), frame.promise(PromiseState::Pending)),
            (
                main.typed_array(TypedArrayKind::Int8, 0),
                frame.typed_array(TypedArrayKind::Int8, 0),
            ),
        ];
        for (local, foreign) in pairs {
            assert_eq!(local.object_to_string(), foreign.object_to_string());
        }
    }

    #[test]
    fn test_buffer_constructor_is_per_realm() {
        let main = Realm::new();
        let frame = Realm::new();
        let is_buffer = main.buffer_constructor().get("isBuffer");
        let is_buffer = is_buffer.as_object().unwrap();

        let foreign_buffer = frame.buffer_from(&[1, 2, 3]);
        let result = is_buffer.call(&JsValue::Undefined, &[foreign_buffer]).unwrap();
        assert_eq!(result, JsValue::Boolean(false));
    }
}

#[cfg(test)]
mod weak_ref_tests {
    use super::*;
    use core_types::ObjectSlots;

    #[test]
    fn test_weak_ref_target_lifetime() {
        let realm = Realm::new();
        let target = realm.object();
        let weak = realm.weak_ref(target.as_object().unwrap());

        let alive = match &*weak.as_object().unwrap().slots() {
            ObjectSlots::WeakRef(target) => target.upgrade().is_some(),
            _ => false,
        };
        assert!(alive);

        drop(target);
        let alive = match &*weak.as_object().unwrap().slots() {
            ObjectSlots::WeakRef(target) => target.upgrade().is_some(),
            _ => false,
        };
        assert!(!alive);
    }
}
