use serde::Serialize;
use tracing::debug;

use crate::{key::PhoneNumber, trie::DigitTrie};

/// One live entry, as produced by [`PhoneTrie::enumerate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub phone_number: String,
    pub contact_name: String,
}

impl Contact {
    pub fn new(phone_number: impl Into<String>, contact_name: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            contact_name: contact_name.into(),
        }
    }
}

/// Contact names keyed by phone number.
///
/// Deleting a contact leaves the digit path in place unless the directory
/// was built `with_pruning(true)`.
pub struct PhoneTrie {
    trie: DigitTrie<String>,
    prune_on_delete: bool,
}

impl Default for PhoneTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneTrie {
    pub fn new() -> Self {
        Self::with_pruning(false)
    }

    pub fn with_pruning(prune_on_delete: bool) -> Self {
        Self {
            trie: DigitTrie::new(),
            prune_on_delete,
        }
    }

    /// Stores `contact_name` under `phone_number`, overwriting any previous name.
    pub fn insert(&mut self, phone_number: &PhoneNumber, contact_name: &str) {
        match self.trie.insert(phone_number.as_bytes(), contact_name.to_string()) {
            Some(prev) => debug!(%phone_number, %prev, "Overwrote contact"),
            None => debug!(%phone_number, "New contact"),
        }
    }

    /// Exact-match lookup.
    pub fn search(&self, phone_number: &PhoneNumber) -> Option<&str> {
        self.trie.get(phone_number.as_bytes()).map(String::as_str)
    }

    /// Returns whether a live contact was found and removed.
    pub fn delete(&mut self, phone_number: &PhoneNumber) -> bool {
        let removed = self
            .trie
            .remove(phone_number.as_bytes(), self.prune_on_delete);
        debug!(%phone_number, found = removed.is_some(), "Delete contact");
        removed.is_some()
    }

    pub fn enumerate(&self) -> Vec<Contact> {
        self.trie
            .entries()
            .into_iter()
            .map(|(digits, name)| Contact {
                phone_number: PhoneNumber::from_digits(digits).into(),
                contact_name: name.clone(),
            })
            .collect()
    }

    pub fn clear(&mut self) {
        debug!(discarded = self.trie.len(), "Clearing all contacts");
        self.trie.clear();
    }

    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.trie.node_count()
    }
}
