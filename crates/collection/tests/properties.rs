//! Black-box properties of `OrderedCollection`, checked against a plain `Vec`
//! model.

use armory_collection::{INITIAL_CAPACITY, OrderedCollection};
use armory_core::{DomainError, Item, ItemRef};
use proptest::prelude::*;

fn pool(n: usize) -> Vec<ItemRef> {
    (0..n)
        .map(|i| ItemRef::new(Item::new(format!("Item {i}"), i as f64, 10.0).unwrap()))
        .collect()
}

/// A length and an index in `0..=len`.
fn len_and_insert_index() -> impl Strategy<Value = (usize, usize)> {
    (0usize..50).prop_flat_map(|len| (Just(len), 0..=len))
}

/// A length of at least one and an index in `0..len`.
fn len_and_live_index() -> impl Strategy<Value = (usize, usize)> {
    (1usize..50).prop_flat_map(|len| (Just(len), 0..len))
}

/// A length and a valid `from..to` range.
fn len_and_range() -> impl Strategy<Value = (usize, usize, usize)> {
    (0usize..50).prop_flat_map(|len| {
        (Just(len), 0..=len).prop_flat_map(|(len, from)| (Just(len), Just(from), from..=len))
    })
}

#[test]
fn empty_collection_scenario() {
    let mut list = OrderedCollection::new();
    assert!(matches!(list.remove_at(0), Err(DomainError::IndexOutOfRange(_))));
    assert!(matches!(list.get(0), Err(DomainError::IndexOutOfRange(_))));
    assert!(list.is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: the last appended item is always at `len - 1`.
    #[test]
    fn append_then_get_last(count in 1usize..60) {
        let mut list = OrderedCollection::new();
        for item in pool(count) {
            list.append(item.clone());
            prop_assert_eq!(list.get(list.len() - 1).unwrap(), &item);
        }
        prop_assert_eq!(list.len(), count);
    }

    /// Property: `insert_at(i, x)` puts `x` at `i` and shifts the tail by one.
    #[test]
    fn insert_at_shifts_tail((len, index) in len_and_insert_index()) {
        let items = pool(len);
        let extra = ItemRef::new(Item::new("Extra", 1.0, 1.0).unwrap());
        let mut list = OrderedCollection::from_items(&items);

        list.insert_at(index, extra.clone()).unwrap();

        let mut model = items.clone();
        model.insert(index, extra.clone());
        prop_assert_eq!(list.len(), len + 1);
        prop_assert_eq!(list.get(index).unwrap(), &extra);
        prop_assert_eq!(list.to_vec(), model);
    }

    /// Property: removing at `i` and re-inserting at `i` restores the sequence.
    #[test]
    fn remove_then_reinsert_round_trips((len, index) in len_and_live_index()) {
        let items = pool(len);
        let mut list = OrderedCollection::from_items(&items);

        let removed = list.remove_at(index).unwrap();
        prop_assert_eq!(&removed, &items[index]);
        prop_assert_eq!(list.len(), len - 1);

        list.insert_at(index, removed).unwrap();
        prop_assert_eq!(list.to_vec(), items);
    }

    /// Property: `index_of`/`last_index_of` agree with a linear scan, including
    /// for items that are absent.
    #[test]
    fn searches_match_linear_scan(picks in prop::collection::vec(0usize..5, 0..40)) {
        let candidates = pool(6);
        let contents: Vec<ItemRef> = picks.iter().map(|&i| candidates[i].clone()).collect();
        let list = OrderedCollection::from_items(&contents);

        // candidates[5] is never picked, so it is always absent.
        for probe in &candidates {
            let first = contents.iter().position(|item| item == probe);
            let last = contents.iter().rposition(|item| item == probe);
            prop_assert_eq!(list.index_of(probe), first);
            prop_assert_eq!(list.last_index_of(probe), last);
            prop_assert_eq!(list.contains(probe), first.is_some());
        }
    }

    /// Property: a subrange copies `[from, to)` and is independent of its
    /// source.
    #[test]
    fn subrange_is_an_independent_slice((len, from, to) in len_and_range()) {
        let items = pool(len);
        let list = OrderedCollection::from_items(&items);

        let mut sub = list.subrange(from, to).unwrap();
        prop_assert_eq!(sub.len(), to - from);
        prop_assert_eq!(sub.to_vec(), items[from..to].to_vec());

        sub.clear();
        sub.append(ItemRef::new(Item::new("Extra", 1.0, 1.0).unwrap()));
        prop_assert_eq!(list.to_vec(), items);
    }

    /// Property: no element is lost or misplaced when the buffer grows.
    #[test]
    fn growth_preserves_contents(extra in 1usize..80) {
        let count = INITIAL_CAPACITY + extra;
        let items = pool(count);
        let mut list = OrderedCollection::new();
        for item in &items {
            list.append(item.clone());
        }
        prop_assert!(list.capacity() >= count);

        for (i, item) in items.iter().enumerate() {
            prop_assert_eq!(list.get(i).unwrap(), item);
        }

        let replacements = pool(count);
        for (i, item) in replacements.iter().enumerate() {
            let previous = list.set(i, item.clone()).unwrap();
            prop_assert_eq!(&previous, &items[i]);
        }
        prop_assert_eq!(list.to_vec(), replacements);
    }

    /// Property: removing through a cursor matches `retain` with the inverse
    /// predicate.
    #[test]
    fn cursor_removal_matches_retain(mask in prop::collection::vec(any::<bool>(), 0..40)) {
        let items = pool(mask.len());
        let mut via_cursor = OrderedCollection::from_items(&items);
        let mut via_retain = via_cursor.clone();

        let mut cursor = via_cursor.cursor();
        let mut index = 0;
        while cursor.next().is_some() {
            if mask[index] {
                cursor.remove().unwrap();
            }
            index += 1;
        }
        drop(cursor);

        let mut flags = mask.iter();
        via_retain.retain(|_| !flags.next().copied().unwrap_or(false));
        prop_assert_eq!(via_cursor, via_retain);
    }
}
