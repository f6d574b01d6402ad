//! Schema-driven resolution of field paths.
//!
//! A [`FieldResolver`] walks the selectors of a parsed [`Path`] against a
//! [`Message`] tree. Each selector is interpreted according to the role of
//! the current position:
//!
//! | role      | selector      | next role                                   |
//! |-----------|---------------|---------------------------------------------|
//! | `Message` | field name    | `Message`, `Array`, `Map` or `Scalar`       |
//! | `Array`   | element index | `Message` or `Scalar`, by element kind      |
//! | `Map`     | any           | rejected as unsupported                     |
//! | `Scalar`  | any           | rejected: scalars have no children          |
//!
//! Resolution may grow the tree: unset singular message fields along the path
//! are materialized unless [`ResolveOptions::create_missing`] is disabled.
//!
//! [`Path`]: fieldpath_path::Path
//! [`Message`]: fieldpath_schema::Message

pub mod error;
pub mod field_ref;
pub mod options;
pub mod resolver;
pub mod role;

// --- Public API ---
pub use error::ResolveError;
pub use field_ref::FieldRef;
pub use options::ResolveOptions;
pub use resolver::{FieldResolver, resolve};
pub use role::ParentRole;

#[cfg(test)]
mod tests {
    use super::*;
    use fieldpath_path::Path;
    use fieldpath_schema::{
        DescriptorPool, DynamicMessage, FieldDescriptor, FieldKind, Message, MessageDescriptor,
        SchemaError, Value,
    };
    use std::sync::Arc;

    fn pool() -> Arc<DescriptorPool> {
        let person = MessageDescriptor::builder("Person")
            .field(FieldDescriptor::singular("name", 1, FieldKind::String))
            .field(FieldDescriptor::singular("count", 2, FieldKind::Int32))
            .field(FieldDescriptor::singular(
                "home",
                3,
                FieldKind::Message("Address".to_string()),
            ))
            .field(FieldDescriptor::repeated(
                "addresses",
                4,
                FieldKind::Message("Address".to_string()),
            ))
            .field(FieldDescriptor::repeated("scores", 5, FieldKind::Int64))
            .field(FieldDescriptor::map("tags", 6, FieldKind::String, FieldKind::Int32))
            .field(FieldDescriptor::singular("status", 7, FieldKind::Enum))
            .build()
            .unwrap();
        let address = MessageDescriptor::builder("Address")
            .field(FieldDescriptor::singular("city", 1, FieldKind::String))
            .field(FieldDescriptor::singular(
                "geo",
                2,
                FieldKind::Message("Geo".to_string()),
            ))
            .build()
            .unwrap();
        let geo = MessageDescriptor::builder("Geo")
            .field(FieldDescriptor::singular("lat", 1, FieldKind::Double))
            .build()
            .unwrap();
        Arc::new(DescriptorPool::from_descriptors([person, address, geo]).unwrap())
    }

    fn person() -> DynamicMessage {
        pool().new_message("Person").unwrap()
    }

    fn path(raw: &str) -> Path {
        Path::parse(raw).unwrap()
    }

    fn field(msg: &DynamicMessage, name: &str) -> Arc<FieldDescriptor> {
        msg.descriptor().field_by_name(name).cloned().unwrap()
    }

    #[test]
    fn test_type_gate() {
        let mut msg = person();
        let err = resolve(&mut msg, &path("Address[city]")).unwrap_err();
        assert_eq!(
            err,
            ResolveError::TypeMismatch {
                expected: "Address".to_string(),
                actual: "Person".to_string(),
            }
        );
        assert!(resolve(&mut msg, &path("Other")).is_err());
        assert_eq!(msg.set_field_count(), 0);
    }

    #[test]
    fn test_root_path_addresses_whole_message() {
        let mut msg = person();
        let resolved = resolve(&mut msg, &path("Person")).unwrap();
        assert_eq!(resolved.role(), ParentRole::Message);
        assert!(resolved.is_root());
        assert!(resolved.field().is_none());
        assert_eq!(resolved.array_index(), None);
        assert_eq!(resolved.kind().unwrap_err(), ResolveError::NoFieldSpecified);
        assert_eq!(resolved.message().type_name(), "Person");
    }

    #[test]
    fn test_scalar_field_read_write() {
        let mut msg = person();
        {
            let mut resolved = resolve(&mut msg, &path("Person[name]")).unwrap();
            assert_eq!(resolved.role(), ParentRole::Scalar);
            assert_eq!(resolved.kind().unwrap(), &FieldKind::String);
            assert_eq!(resolved.get().unwrap(), Value::from(""));
            resolved.set(Value::from("Ada")).unwrap();
        }
        assert_eq!(msg.get(&field(&msg, "name")).unwrap(), Value::from("Ada"));
    }

    #[test]
    fn test_materialization_is_idempotent() {
        let mut msg = person();
        let city = path("Person[home][city]");

        resolve(&mut msg, &city)
            .unwrap()
            .set(Value::from("Oslo"))
            .unwrap();
        let again = resolve(&mut msg, &city).unwrap();
        assert_eq!(again.get().unwrap(), Value::from("Oslo"));

        assert_eq!(msg.set_field_count(), 1);
        let home = msg.message(&field(&msg, "home")).unwrap();
        assert_eq!(home.set_field_count(), 1);
    }

    #[test]
    fn test_nested_message_terminal() {
        let mut msg = person();
        let resolved = resolve(&mut msg, &path("Person[home][geo]")).unwrap();
        assert_eq!(resolved.role(), ParentRole::Message);
        assert_eq!(resolved.message().type_name(), "Geo");
        assert_eq!(
            resolved.kind().unwrap(),
            &FieldKind::Message("Geo".to_string())
        );
    }

    #[test]
    fn test_whole_array_and_bounds() {
        let mut msg = person();
        {
            let mut scores = resolve(&mut msg, &path("Person[scores]")).unwrap();
            assert_eq!(scores.role(), ParentRole::Array);
            assert_eq!(scores.array_index(), None);
            assert_eq!(scores.size().unwrap(), 0);
            for v in [10i64, 20, 30] {
                scores.append(Value::from(v)).unwrap();
            }
            assert_eq!(scores.size().unwrap(), 3);
        }

        let last = resolve(&mut msg, &path("Person[scores][2]")).unwrap();
        assert_eq!(last.role(), ParentRole::Scalar);
        assert_eq!(last.array_index(), Some(2));
        assert_eq!(last.get().unwrap(), Value::I64(30));

        assert_eq!(
            resolve(&mut msg, &path("Person[scores][3]")).unwrap_err(),
            ResolveError::IndexOutOfRange {
                field: "scores".to_string(),
                index: 3,
                size: 3,
            }
        );
        for bad in ["Person[scores][-1]", "Person[scores][abc]"] {
            assert!(matches!(
                resolve(&mut msg, &path(bad)),
                Err(ResolveError::InvalidIndex { .. })
            ));
        }
    }

    #[test]
    fn test_repeated_scalar_element_write() {
        let mut msg = person();
        let scores = field(&msg, "scores");
        msg.add(&scores, Value::I64(1)).unwrap();

        resolve(&mut msg, &path("Person[scores][0]"))
            .unwrap()
            .set(Value::I64(7))
            .unwrap();
        assert_eq!(msg.get_repeated(&scores, 0).unwrap(), Value::I64(7));
    }

    #[test]
    fn test_repeated_message_elements() {
        let mut msg = person();
        {
            let mut addresses = resolve(&mut msg, &path("Person[addresses]")).unwrap();
            addresses.append_message().unwrap();
            addresses.append_message().unwrap();
        }

        let element = resolve(&mut msg, &path("Person[addresses][1]")).unwrap();
        assert_eq!(element.role(), ParentRole::Message);
        assert_eq!(element.array_index(), Some(1));
        assert_eq!(element.message().type_name(), "Address");

        resolve(&mut msg, &path("Person[addresses][1][city]"))
            .unwrap()
            .set(Value::from("Bergen"))
            .unwrap();
        let addresses = field(&msg, "addresses");
        let second = msg.repeated_message(&addresses, 1).unwrap();
        assert_eq!(
            second.get(&field(second, "city")).unwrap(),
            Value::from("Bergen")
        );

        // Elements are never created implicitly.
        assert!(matches!(
            resolve(&mut msg, &path("Person[addresses][2][city]")),
            Err(ResolveError::IndexOutOfRange { index: 2, size: 2, .. })
        ));
    }

    #[test]
    fn test_selector_after_scalar_is_invalid() {
        let mut msg = person();
        assert!(matches!(
            resolve(&mut msg, &path("Person[count][0]")),
            Err(ResolveError::InvalidPath { .. })
        ));
        assert!(matches!(
            resolve(&mut msg, &path("Person[name][x][y]")),
            Err(ResolveError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_unknown_field() {
        let mut msg = person();
        assert_eq!(
            resolve(&mut msg, &path("Person[nope]")).unwrap_err(),
            ResolveError::FieldNotFound {
                message: "Person".to_string(),
                field: "nope".to_string(),
            }
        );
    }

    #[test]
    fn test_map_fields_are_reserved() {
        let mut msg = person();
        let tags = resolve(&mut msg, &path("Person[tags]")).unwrap();
        assert_eq!(tags.role(), ParentRole::Map);
        assert_eq!(tags.size().unwrap(), 0);

        assert_eq!(
            resolve(&mut msg, &path("Person[tags][red]")).unwrap_err(),
            ResolveError::Unsupported {
                field: "tags".to_string(),
                selector: "red".to_string(),
            }
        );
    }

    #[test]
    fn test_read_only_does_not_grow_tree() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut msg = person();
        let read_only = FieldResolver::new(ResolveOptions::read_only());
        let city = path("Person[home][city]");

        assert_eq!(
            read_only.resolve(&mut msg, &city).unwrap_err(),
            ResolveError::FieldNotSet {
                field: "home".to_string()
            }
        );
        assert_eq!(msg.set_field_count(), 0);

        resolve(&mut msg, &city).unwrap();
        assert!(read_only.resolve(&mut msg, &city).is_ok());
    }

    #[test]
    fn test_failed_resolution_keeps_materialized_messages() {
        let mut msg = person();
        let err = resolve(&mut msg, &path("Person[home][geo][nope]")).unwrap_err();
        assert!(matches!(err, ResolveError::FieldNotFound { .. }));

        let home = msg.message(&field(&msg, "home")).unwrap();
        assert!(home.message(&field(home, "geo")).is_some());
    }

    #[test]
    fn test_accessor_role_checks() {
        let mut msg = person();

        let scores = resolve(&mut msg, &path("Person[scores]")).unwrap();
        assert!(matches!(scores.get(), Err(ResolveError::InvalidPath { .. })));

        let mut home = resolve(&mut msg, &path("Person[home]")).unwrap();
        assert!(matches!(
            home.set(Value::from("x")),
            Err(ResolveError::InvalidPath { .. })
        ));
        assert!(matches!(home.size(), Err(ResolveError::InvalidPath { .. })));

        let mut name = resolve(&mut msg, &path("Person[name]")).unwrap();
        assert!(matches!(
            name.append(Value::from("x")),
            Err(ResolveError::InvalidPath { .. })
        ));
        assert_eq!(
            name.set(Value::I32(1)).unwrap_err(),
            ResolveError::Schema(SchemaError::ValueMismatch {
                field: "name".to_string(),
                expected: "string".to_string(),
                actual: "int32".to_string(),
            })
        );

        let mut addresses = resolve(&mut msg, &path("Person[addresses]")).unwrap();
        assert!(matches!(
            addresses.append(Value::from("x")),
            Err(ResolveError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_clear() {
        let mut msg = person();
        resolve(&mut msg, &path("Person[home][city]"))
            .unwrap()
            .set(Value::from("Oslo"))
            .unwrap();

        resolve(&mut msg, &path("Person[home]")).unwrap().clear().unwrap();
        let home = msg.message(&field(&msg, "home")).unwrap();
        assert_eq!(home.set_field_count(), 0);

        resolve(&mut msg, &path("Person[count]"))
            .unwrap()
            .set(Value::I32(3))
            .unwrap();
        resolve(&mut msg, &path("Person[count]")).unwrap().clear().unwrap();
        assert!(!msg.has_field(&field(&msg, "count")));

        let scores = field(&msg, "scores");
        msg.add(&scores, Value::I64(5)).unwrap();
        let err = resolve(&mut msg, &path("Person[scores][0]"))
            .unwrap()
            .clear()
            .unwrap_err();
        assert!(matches!(err, ResolveError::InvalidPath { .. }));
        assert_eq!(msg.field_size(&scores), 1);
        assert_eq!(msg.get_repeated(&scores, 0).unwrap(), Value::I64(5));
    }

    #[test]
    fn test_message_handles_reach_addressed_message() {
        let mut msg = person();
        {
            let mut home = resolve(&mut msg, &path("Person[home]")).unwrap();
            let city = field(home.message(), "city");
            home.message_mut().set(&city, Value::from("Tromsø")).unwrap();
        }
        assert_eq!(
            resolve(&mut msg, &path("Person[home][city]"))
                .unwrap()
                .get()
                .unwrap(),
            Value::from("Tromsø")
        );

        resolve(&mut msg, &path("Person[addresses]"))
            .unwrap()
            .append_message()
            .unwrap();
        let element = resolve(&mut msg, &path("Person[addresses][0]"))
            .unwrap()
            .into_message();
        assert_eq!(element.type_name(), "Address");
        let city = field(element, "city");
        element.set(&city, Value::from("Bodø")).unwrap();

        let addresses = field(&msg, "addresses");
        let first = msg.repeated_message(&addresses, 0).unwrap();
        assert_eq!(first.get(&field(first, "city")).unwrap(), Value::from("Bodø"));
    }

    #[test]
    fn test_kind_reports_declared_kind() {
        let mut msg = person();
        assert_eq!(
            resolve(&mut msg, &path("Person[status]")).unwrap().kind().unwrap(),
            &FieldKind::Enum
        );
        assert_eq!(
            resolve(&mut msg, &path("Person[addresses]"))
                .unwrap()
                .kind()
                .unwrap(),
            &FieldKind::Message("Address".to_string())
        );
    }

    #[test]
    fn test_path_reused_across_messages() {
        let pool = pool();
        let count = path("Person[count]");
        let mut first = pool.new_message("Person").unwrap();
        let mut second = pool.new_message("Person").unwrap();

        resolve(&mut first, &count).unwrap().set(Value::I32(1)).unwrap();
        resolve(&mut second, &count).unwrap().set(Value::I32(2)).unwrap();

        assert_eq!(resolve(&mut first, &count).unwrap().get().unwrap(), Value::I32(1));
        assert_eq!(resolve(&mut second, &count).unwrap().get().unwrap(), Value::I32(2));
    }
}
