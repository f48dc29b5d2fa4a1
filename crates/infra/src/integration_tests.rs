//! Integration tests for the insert lifecycle.
//!
//! Tests: Record → RecordStore::insert → before_create → stored row → uuid()
//!
//! Verifies:
//! - Keys are generated once, right before the first insert
//! - Caller-supplied keys are respected
//! - A failing hook aborts the insert

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;
    use uuid::{Uuid, Variant, Version};
    use uuidkey_core::{
        BeforeCreate, HasUuidKey, IdGenerator, KeyError, KeyResult, UuidKey,
    };

    use crate::store::{InMemoryRecordStore, RecordStore, StoreError};

    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    struct Person {
        id: UuidKey,
        name: String,
    }

    uuidkey_core::impl_uuid_key!(Person, id);

    /// Record whose hook draws from a broken generator.
    #[derive(Debug, Clone, Default)]
    struct Broken {
        id: UuidKey,
    }

    struct NoEntropy;

    impl IdGenerator for NoEntropy {
        fn generate(&self) -> KeyResult<Uuid> {
            Err(KeyError::generation("no entropy"))
        }
    }

    impl HasUuidKey for Broken {
        fn uuid_key(&self) -> &UuidKey {
            &self.id
        }

        fn uuid_key_mut(&mut self) -> &mut UuidKey {
            &mut self.id
        }
    }

    impl BeforeCreate for Broken {
        fn before_create(&mut self) -> KeyResult<()> {
            self.id.before_create_with(&NoEntropy)
        }
    }

    fn setup() -> Arc<InMemoryRecordStore<Person>> {
        uuidkey_observability::init_with_filter("debug");
        Arc::new(InMemoryRecordStore::new())
    }

    #[test]
    fn new_record_gets_v4_key_on_first_insert() {
        let store = setup();
        let mut frank = Person {
            name: "Frank".to_string(),
            ..Person::default()
        };
        assert_eq!(frank.uuid(), Err(KeyError::NoIdentifier));

        let id = store.insert(&mut frank).unwrap();

        assert_eq!(frank.uuid_key().len(), 16);
        assert_eq!(id.get_version(), Some(Version::Random));
        assert_eq!(id.get_variant(), Variant::RFC4122);
        assert_eq!(store.get(&id).unwrap().uuid().unwrap(), id);
    }

    #[test]
    fn stored_row_keeps_the_raw_bytes() {
        let store = setup();
        let mut ada = Person {
            name: "Ada".to_string(),
            ..Person::default()
        };
        let id = store.insert(&mut ada).unwrap();

        let row = store.get(&id).unwrap();
        assert_eq!(row.id.as_bytes(), id.as_bytes());
    }

    #[test]
    fn failing_hook_aborts_insert() {
        let store: InMemoryRecordStore<Broken> = InMemoryRecordStore::new();
        let mut record = Broken::default();

        let err = store.insert(&mut record).unwrap_err();

        assert!(matches!(err, StoreError::Hook(KeyError::Generation(_))));
        assert!(store.is_empty());
        assert!(record.id.is_empty());
    }

    #[test]
    fn broken_generator_is_not_consulted_for_supplied_key() {
        let store: InMemoryRecordStore<Broken> = InMemoryRecordStore::new();
        let chosen = Uuid::new_v4();
        let mut record = Broken {
            id: UuidKey::from(chosen),
        };

        assert_eq!(store.insert(&mut record).unwrap(), chosen);
    }

    #[test]
    fn shared_store_across_threads() {
        let store = setup();
        let handles: Vec<_> = (0..4)
            .map(|n| {
                let store = store.clone();
                std::thread::spawn(move || {
                    let mut p = Person {
                        name: format!("worker-{n}"),
                        ..Person::default()
                    };
                    store.insert(&mut p).unwrap()
                })
            })
            .collect();

        let ids: Vec<Uuid> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(store.len(), 4);
        for id in ids {
            assert!(store.get(&id).is_some());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 64,
            ..ProptestConfig::default()
        })]

        /// Property: every record inserted without a key ends up with a
        /// distinct stored key.
        #[test]
        fn generated_keys_are_distinct(count in 1usize..32) {
            let store: InMemoryRecordStore<Person> = InMemoryRecordStore::new();
            for _ in 0..count {
                store.insert(&mut Person::default()).unwrap();
            }
            prop_assert_eq!(store.len(), count);
        }
    }
}
