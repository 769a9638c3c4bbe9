use std::collections::BTreeMap;

use proptest::prelude::*;

use crate::{
    directory::{Contact, PhoneTrie},
    key::{PhoneNumber, DEFAULT_MAX_KEY_LEN},
};

#[derive(Debug, Clone)]
enum Op {
    Insert(String, String),
    Delete(String),
    Clear,
}

fn number() -> impl Strategy<Value = String> {
    // short alphabet so that prefixes and collisions are common
    "[0-3]{1,5}"
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (number(), "[a-z]{1,8}").prop_map(|(k, v)| Op::Insert(k, v)),
        3 => number().prop_map(Op::Delete),
        1 => Just(Op::Clear),
    ]
}

fn key(raw: &str) -> PhoneNumber {
    PhoneNumber::parse(raw, DEFAULT_MAX_KEY_LEN).unwrap()
}

fn model_contacts(model: &BTreeMap<String, String>) -> Vec<Contact> {
    model
        .iter()
        .map(|(k, v)| Contact::new(k.as_str(), v.as_str()))
        .collect()
}

proptest! {
    #[test]
    fn insert_then_search(number in "[0-9]{1,20}", name in ".{1,16}") {
        let mut contacts = PhoneTrie::new();
        contacts.insert(&key(&number), &name);
        prop_assert_eq!(contacts.search(&key(&number)), Some(name.as_str()));
    }

    #[test]
    fn matches_ordered_map(ops in prop::collection::vec(op(), 0..64), prune in any::<bool>()) {
        let mut contacts = PhoneTrie::with_pruning(prune);
        let mut model = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    contacts.insert(&key(&k), &v);
                    model.insert(k, v);
                }
                Op::Delete(k) => {
                    prop_assert_eq!(contacts.delete(&key(&k)), model.remove(&k).is_some());
                }
                Op::Clear => {
                    contacts.clear();
                    model.clear();
                }
            }
        }

        prop_assert_eq!(contacts.len(), model.len());
        prop_assert_eq!(contacts.enumerate(), model_contacts(&model));
        for k in model.keys() {
            prop_assert_eq!(contacts.search(&key(k)), model.get(k).map(String::as_str));
        }
    }

    #[test]
    fn pruned_tree_has_no_dead_nodes(numbers in prop::collection::btree_set(number(), 1..32)) {
        let mut contacts = PhoneTrie::with_pruning(true);
        let fresh_root = contacts.node_count();

        for n in &numbers {
            contacts.insert(&key(n), "x");
        }
        for n in &numbers {
            prop_assert!(contacts.delete(&key(n)));
        }

        prop_assert!(contacts.is_empty());
        prop_assert_eq!(contacts.node_count(), fresh_root);
    }
}
