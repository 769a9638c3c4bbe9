use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    directory::{Contact, PhoneTrie},
    error::{DirectoryError, DirectoryResult},
    key::{PhoneNumber, DEFAULT_MAX_KEY_LEN},
};

/// Shared handle to a single [`PhoneTrie`].
///
/// Every operation takes the one lock around the whole trie; clones share it.
#[derive(Clone)]
pub struct ContactStore {
    contacts: Arc<Mutex<PhoneTrie>>,
    max_key_len: usize,
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_KEY_LEN, false)
    }
}

impl ContactStore {
    pub fn new(max_key_len: usize, prune_on_delete: bool) -> Self {
        Self {
            contacts: Arc::new(Mutex::new(PhoneTrie::with_pruning(prune_on_delete))),
            max_key_len,
        }
    }

    fn key(&self, phone_number: &str) -> DirectoryResult<PhoneNumber> {
        PhoneNumber::parse(phone_number, self.max_key_len)
    }

    pub async fn create(&self, phone_number: &str, contact_name: &str) -> DirectoryResult<()> {
        if contact_name.is_empty() {
            return Err(DirectoryError::MissingField("contactName"));
        }
        let key = self.key(phone_number)?;
        self.contacts.lock().await.insert(&key, contact_name);
        Ok(())
    }

    pub async fn lookup(&self, phone_number: &str) -> DirectoryResult<Option<String>> {
        let key = self.key(phone_number)?;
        let contacts = self.contacts.lock().await;
        Ok(contacts.search(&key).map(str::to_string))
    }

    pub async fn list(&self) -> Vec<Contact> {
        self.contacts.lock().await.enumerate()
    }

    pub async fn delete(&self, phone_number: &str) -> DirectoryResult<bool> {
        let key = self.key(phone_number)?;
        Ok(self.contacts.lock().await.delete(&key))
    }

    pub async fn clear(&self) {
        self.contacts.lock().await.clear()
    }

    pub async fn len(&self) -> usize {
        self.contacts.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.contacts.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_lookup_delete() {
        let store = ContactStore::default();

        store.create("5551234", "Alice").await.unwrap();
        store.create("5556789", "Bob").await.unwrap();

        assert_eq!(store.lookup("5551234").await.unwrap().as_deref(), Some("Alice"));
        assert!(store.delete("5551234").await.unwrap());
        assert_eq!(store.lookup("5551234").await.unwrap(), None);
        assert_eq!(store.list().await, vec![Contact::new("5556789", "Bob")]);
    }

    #[tokio::test]
    async fn test_rejects_invalid_keys() {
        let store = ContactStore::new(4, false);

        assert!(matches!(
            store.create("12ab", "X").await,
            Err(DirectoryError::InvalidKey { .. })
        ));
        assert!(matches!(
            store.create("12345", "X").await,
            Err(DirectoryError::KeyTooLong { .. })
        ));
        assert!(matches!(
            store.create("1234", "").await,
            Err(DirectoryError::MissingField("contactName"))
        ));
        assert!(matches!(
            store.lookup("").await,
            Err(DirectoryError::MissingField("phoneNumber"))
        ));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = ContactStore::default();
        let other = store.clone();

        let tasks = (0..10)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(&format!("{i}{i}"), "X").await })
            })
            .collect::<Vec<_>>();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(other.len().await, 10);
        other.clear().await;
        assert!(store.list().await.is_empty());
    }
}
