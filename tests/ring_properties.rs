use std::collections::VecDeque;

use anchor_ring::Ring;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_behaves_like_vecdeque(ops in prop::collection::vec(
        (0u8..6, -20i32..20), 0..200
    )) {
        let mut ring = Ring::new();
        let mut model = VecDeque::new();

        for (op, value) in ops {
            match op {
                0 => { // push at the tail
                    ring.push_back(value);
                    model.push_back(value);
                }
                1 => { // push at the head
                    ring.push_front(value);
                    model.push_front(value);
                }
                2 => { // pop at the tail
                    prop_assert_eq!(ring.pop_back(), model.pop_back());
                }
                3 => { // pop at the head
                    prop_assert_eq!(ring.pop_front(), model.pop_front());
                }
                4 => { // remove the first occurrence of a value
                    let expected = model
                        .iter()
                        .position(|x| *x == value)
                        .and_then(|i| model.remove(i));
                    prop_assert_eq!(ring.remove(&value), expected);
                }
                5 => { // look a value up
                    let expected = model.iter().position(|x| *x == value);
                    prop_assert_eq!(ring.position(&value), expected);
                    prop_assert_eq!(ring.contains(&value), expected.is_some());
                }
                _ => unreachable!(),
            }

            prop_assert_eq!(ring.len(), model.len());
            prop_assert_eq!(ring.front(), model.front());
            prop_assert_eq!(ring.back(), model.back());
            prop_assert!(ring.validate_invariants().is_ok());
        }

        let ring_items: Vec<_> = ring.iter().copied().collect();
        let model_items: Vec<_> = model.into_iter().collect();
        prop_assert_eq!(ring_items, model_items);
    }
}

proptest! {
    #[test]
    fn prop_backward_walk_mirrors_forward(values in prop::collection::vec(-1000i32..1000, 0..100)) {
        let ring: Ring<i32> = values.iter().copied().collect();

        let forward: Vec<_> = ring.iter().copied().collect();
        let mut backward: Vec<_> = ring.iter().rev().copied().collect();
        backward.reverse();

        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(&forward, &values);
        prop_assert!(ring.validate_invariants().is_ok());
    }
}

proptest! {
    #[test]
    fn prop_push_pop_round_trips(values in prop::collection::vec(-1000i32..1000, 0..100),
                                 extra in -1000i32..1000) {
        let mut ring: Ring<i32> = values.iter().copied().collect();

        ring.push_back(extra);
        prop_assert_eq!(ring.pop_back(), Some(extra));
        prop_assert_eq!(ring.len(), values.len());
        prop_assert!(ring.validate_invariants().is_ok());

        ring.push_front(extra);
        prop_assert_eq!(ring.pop_front(), Some(extra));
        let items: Vec<_> = ring.into_iter().collect();
        prop_assert_eq!(items, values);
    }
}

proptest! {
    #[test]
    fn prop_clone_is_equivalent_and_independent(values in prop::collection::vec(-1000i32..1000, 0..100)) {
        let original: Ring<i32> = values.iter().copied().collect();
        let mut copy = original.clone();

        prop_assert_eq!(&original, &copy);
        prop_assert!(copy.validate_invariants().is_ok());

        copy.push_back(i32::MAX);
        copy.pop_front();
        prop_assert_eq!(original.len(), values.len());
        let original_items: Vec<_> = original.into_iter().collect();
        prop_assert_eq!(original_items, values);
    }
}

proptest! {
    #[test]
    fn prop_map_transforms_every_position(values in prop::collection::vec(-1000i32..1000, 0..100)) {
        let ring: Ring<i32> = values.iter().copied().collect();
        let mapped = ring.map(|x| i64::from(*x) * 3);

        prop_assert_eq!(mapped.len(), ring.len());
        prop_assert!(mapped.validate_invariants().is_ok());
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(mapped.get(i), Some(&(i64::from(*value) * 3)));
        }
    }
}

proptest! {
    #[test]
    fn prop_append_concatenates(left in prop::collection::vec(-1000i32..1000, 0..50),
                                right in prop::collection::vec(-1000i32..1000, 0..50)) {
        let mut ring: Ring<i32> = left.iter().copied().collect();
        let mut other: Ring<i32> = right.iter().copied().collect();

        ring.append(&mut other);
        prop_assert!(other.is_empty());
        prop_assert!(ring.validate_invariants().is_ok());

        let expected: Vec<_> = left.iter().chain(right.iter()).copied().collect();
        let items: Vec<_> = ring.into_iter().collect();
        prop_assert_eq!(items, expected);
    }
}
