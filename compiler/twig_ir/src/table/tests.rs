use super::*;

#[test]
fn test_put_then_get() {
    let mut table = Table::new();
    assert_eq!(table.put("x", 1), None);
    assert_eq!(table.get("x"), Some(&1));
    assert_eq!(table.get("y"), None);
    assert_eq!(table.len(), 1);
}

#[test]
fn test_overwrite_returns_previous() {
    let mut table = Table::new();
    table.put("x", "old");
    assert_eq!(table.put("x", "new"), Some("old"));
    assert_eq!(table.get("x"), Some(&"new"));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_grows_past_three_quarters() {
    let mut table = Table::with_capacity(4);
    table.put("a", 1);
    table.put("b", 2);
    table.put("c", 3);
    // 3/4 is not over the threshold
    assert_eq!(table.capacity(), 4);

    table.put("d", 4);
    assert_eq!(table.capacity(), 8);
    for (key, value) in [("a", 1), ("b", 2), ("c", 3), ("d", 4)] {
        assert_eq!(table.get(key), Some(&value));
    }
}

#[test]
fn test_zero_capacity_is_usable() {
    let mut table = Table::with_capacity(0);
    table.put("k", ());
    assert!(table.contains_key("k"));
}

#[test]
fn test_iter_visits_every_entry() {
    let mut table = Table::new();
    for (i, key) in ["one", "two", "three"].iter().enumerate() {
        table.put(key, i);
    }
    let mut keys: Vec<&str> = table.iter().map(|(key, _)| key).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["one", "three", "two"]);
}

#[test]
fn test_clear_drops_entries() {
    let mut table = Table::new();
    table.put("a", String::from("x"));
    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.get("a"), None);
}

#[test]
fn test_equality_ignores_layout() {
    let mut small = Table::with_capacity(1);
    let mut large = Table::with_capacity(64);
    for key in ["p", "q", "r"] {
        small.put(key, key.len());
        large.put(key, key.len());
    }
    assert_eq!(small, large);

    large.put("p", 9);
    assert_ne!(small, large);
}

mod proptest_model {
    use super::super::Table;
    use proptest::prelude::*;
    use std::collections::HashMap;

    proptest! {
        #[test]
        fn matches_hashmap_model(ops in proptest::collection::vec(("[a-e]{1,3}", any::<i32>()), 0..200)) {
            let mut table = Table::with_capacity(2);
            let mut model = HashMap::new();

            for (key, value) in &ops {
                let previous = table.put(key, *value);
                prop_assert_eq!(previous, model.insert(key.clone(), *value));
                prop_assert!(table.len() * 4 <= table.capacity() * 3);
            }

            prop_assert_eq!(table.len(), model.len());
            for (key, value) in &model {
                prop_assert_eq!(table.get(key), Some(value));
            }
        }
    }
}

#[test]
fn test_drain_yields_values_and_empties() {
    let mut table = Table::with_capacity(2);
    for (i, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
        table.put(key, i);
    }
    let capacity = table.capacity();

    let mut values: Vec<usize> = table.drain().collect();
    values.sort_unstable();
    assert_eq!(values, [0, 1, 2, 3]);
    assert!(table.is_empty());
    assert_eq!(table.get("a"), None);
    assert_eq!(table.capacity(), capacity);
}
