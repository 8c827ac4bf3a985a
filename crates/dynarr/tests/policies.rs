//! Behavior every growth policy has to share.

use dynarr::{DynamicArray, CapacityPolicy, Doubling, Incremental, CapacityError};

fn filled<P: CapacityPolicy>(n: i32) -> DynamicArray<i32, P> {
    let mut arr = DynamicArray::new();
    for value in 0..n {
        arr.push_back(value).unwrap();
        assert!(arr.capacity() >= arr.size());
    }
    arr
}

macro_rules! policy_tests {
    ($($policy:ident),+ $(,)?) => {
        paste::paste! {
            $(
                mod [<$policy:snake>] {

                    use super::*;

                    #[test]
                    fn appends_keep_order() {
                        let arr = filled::<$policy>(100);
                        assert_eq!(arr.size(), 100);
                        for i in 0..100 {
                            assert_eq!(arr[i], i as i32);
                        }
                    }

                    #[test]
                    fn first_push_allocates_one_slot() {
                        let mut arr = DynamicArray::<i32, $policy>::new();
                        arr.push_back(1).unwrap();
                        assert_eq!(arr.capacity(), 1);
                    }

                    #[test]
                    fn preallocated_slots_are_used_first() {
                        let mut arr = DynamicArray::<i32, $policy>::with_capacity(3).unwrap();
                        let block = arr.as_ptr();
                        arr.extend([1, 2, 3]);
                        assert_eq!(arr.as_ptr(), block);
                        assert_eq!(arr.capacity(), 3);
                    }

                    #[test]
                    fn assign_reads_back() {
                        let mut arr = filled::<$policy>(5);
                        arr.assign(8, -1).unwrap();
                        assert_eq!(arr.size(), 8);
                        assert!((0..8).all(|i| arr.at(i) == Ok(&-1)));
                        assert_eq!(arr.at(8), Err(CapacityError::IndexOutOfBounds { index: 8, len: 8 }));
                    }

                    #[test]
                    fn cleared_array_starts_over() {
                        let mut arr = filled::<$policy>(10);
                        arr.clear();
                        assert_eq!((arr.size(), arr.capacity()), (0, 0));
                        arr.push_back(42).unwrap();
                        assert_eq!((arr.size(), arr.capacity()), (1, 1));
                        assert_eq!(arr.front(), Ok(&42));
                    }

                    #[test]
                    fn cursors_span_len() {
                        let arr = filled::<$policy>(7);
                        let mut sum = 0;
                        let mut cursor = arr.begin();
                        while cursor < arr.end() {
                            sum += *cursor.post_inc().get().unwrap();
                        }
                        assert_eq!(sum, 21);
                        assert_eq!(arr.end() - arr.begin(), 7);
                    }
                }
            )+
        }
    };
}

policy_tests!(Doubling, Incremental);

#[test]
fn growth_sequences_differ() {
    let mut doubling = DynamicArray::<u8, Doubling>::new();
    let mut incremental = DynamicArray::<u8, Incremental>::new();
    let mut seen = (Vec::new(), Vec::new());
    for value in 0..6 {
        doubling.push_back(value).unwrap();
        incremental.push_back(value).unwrap();
        seen.0.push(doubling.capacity());
        seen.1.push(incremental.capacity());
    }
    assert_eq!(seen.0, [1, 2, 4, 4, 8, 8]);
    assert_eq!(seen.1, [1, 2, 3, 4, 5, 6]);
    assert_eq!(doubling.as_slice(), incremental.as_slice());
}
