use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_push_within_capacity_keeps_capacity() {
    let mut vec = GrowVec::with_capacity(4);
    vec.push(1);
    vec.push(2);
    assert_eq!(vec.len(), 2);
    assert_eq!(vec.capacity(), 4);
}

#[test]
fn test_capacity_doubles_when_full() {
    let mut vec = GrowVec::with_capacity(2);
    vec.push('a');
    vec.push('b');
    assert_eq!(vec.capacity(), 2);

    vec.push('c');
    assert_eq!(vec.capacity(), 4);
    assert_eq!(vec.as_slice(), &['a', 'b', 'c']);
}

#[test]
fn test_zero_capacity_grows_to_one() {
    let mut vec = GrowVec::with_capacity(0);
    vec.push("only");
    assert_eq!(vec.capacity(), 1);
    vec.push("next");
    assert_eq!(vec.capacity(), 2);
}

#[test]
fn test_element_size() {
    assert_eq!(GrowVec::<u64>::new().element_size(), 8);
    assert_eq!(GrowVec::<u8>::new().element_size(), 1);
}

#[test]
fn test_get_and_iter() {
    let vec: GrowVec<i32> = (1..=3).collect();
    assert_eq!(vec.get(0), Some(&1));
    assert_eq!(vec.get(3), None);
    assert_eq!(vec.iter().sum::<i32>(), 6);
    assert!(!vec.is_empty());
}

#[test]
fn test_clone_keeps_capacity() {
    let mut vec = GrowVec::with_capacity(8);
    vec.push(String::from("x"));
    let copy = vec.clone();
    assert_eq!(copy.capacity(), 8);
    assert_eq!(copy, vec);
}

mod proptest_growth {
    use super::super::GrowVec;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn capacity_is_smallest_doubling_that_fits(start in 0usize..8, count in 0usize..200) {
            let mut vec = GrowVec::with_capacity(start);
            for i in 0..count {
                vec.push(i);
            }

            let mut expected = start;
            while expected < count {
                expected = (expected * 2).max(1);
            }
            prop_assert_eq!(vec.capacity(), expected);
            prop_assert_eq!(vec.len(), count);
            prop_assert!(vec.iter().copied().eq(0..count));
        }
    }
}
