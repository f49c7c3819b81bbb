//! Integration test: container laws over generated inputs.

use proptest::prelude::*;
use strata::prelude::*;
use strata_test_utils::strategies::{arb_elements, arb_user};
use strata_test_utils::User;

proptest! {
    #[test]
    fn every_push_is_retrievable((size, elements) in arb_elements(64, 40)) {
        let mut array = RawArray::new(size).unwrap();
        for e in &elements {
            array.push(e).unwrap();
        }
        prop_assert_eq!(array.len(), elements.len());
        for (i, e) in elements.iter().enumerate() {
            prop_assert_eq!(array.element_at(i).unwrap(), e.as_slice());
        }
        let collected: Vec<Vec<u8>> = array.iter().map(<[u8]>::to_vec).collect();
        prop_assert_eq!(collected, elements);
    }

    #[test]
    fn user_records_round_trip(users in proptest::collection::vec(arb_user(), 1..30)) {
        let mut array = TypedArray::<User>::new().unwrap();
        for u in &users {
            array.push(u).unwrap();
        }
        prop_assert!(array.capacity() >= users.len());
        let last = users.last().copied();
        prop_assert_eq!(array.pop(), last);
        prop_assert_eq!(array.len(), users.len() - 1);
        for (i, u) in users.iter().take(users.len() - 1).enumerate() {
            prop_assert_eq!(array.get(i).unwrap(), *u);
        }
    }

    #[test]
    fn list_tail_tracks_latest_append(values in proptest::collection::vec(any::<i64>(), 1..100)) {
        let mut list = LinkedList::new();
        for &v in &values {
            list.append(v);
            prop_assert_eq!(list.tail().map(|n| *n.value()), Some(v));
            prop_assert!(list.tail().unwrap().is_last());
        }
        let visited: Vec<i64> = list.nodes().map(|n| *n.value()).collect();
        prop_assert_eq!(visited, values);
    }
}
