use super::{ContactMap, DataStore};
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    contacts: ContactMap,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn contacts(&self) -> &ContactMap {
        &self.contacts
    }

    fn contacts_mut(&mut self) -> &mut ContactMap {
        &mut self.contacts
    }

    fn persist(&mut self) -> Result<()> {
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Identifier, Record};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, surname: &str, phone: &str, dob: &str) -> Self {
            let id = Identifier::new(name, surname).unwrap();
            let record = Record::new(phone, dob).unwrap();
            self.store.put(id, record).unwrap();
            self
        }

        /// Adds `count` contacts named `Contact1 Test` .. `ContactN Test`.
        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Contact{}", i + 1);
                let phone = format!("8{:010}", i + 1);
                self = self.with_contact(&name, "Test", &phone, "");
            }
            self
        }
    }
}
