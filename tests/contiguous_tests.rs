use cow_stack::Stack;
use std::panic::{self, AssertUnwindSafe};

#[test]
fn test_contiguous_read_matches_as_slices() {
    let mut stack = Stack::from([1, 2, 3, 4]);
    stack.push(0);
    let (_, back) = stack.as_slices();
    let sum = stack.with_contiguous_storage_if_available(|s| s.iter().sum::<i32>());
    if back.is_empty() {
        assert_eq!(sum, Some(10));
    } else {
        assert_eq!(sum, None);
    }

    stack.make_contiguous();
    assert_eq!(
        stack.with_contiguous_storage_if_available(|s| s.to_vec()),
        Some(vec![0, 1, 2, 3, 4])
    );
}

#[test]
fn test_contiguous_read_on_empty() {
    let stack: Stack<i32> = Stack::new();
    assert_eq!(stack.with_contiguous_storage_if_available(|s| s.len()), Some(0));
}

#[test]
fn test_contiguous_read_does_not_copy() {
    let stack = Stack::from([1, 2, 3]);
    let copy = stack.clone();
    assert_eq!(copy.with_contiguous_storage_if_available(|s| s[1]), Some(2));
    assert!(copy.ptr_eq(&stack));
}

#[test]
fn test_make_contiguous() {
    let mut stack = Stack::new();
    stack.push_all([3, 2, 1]);
    assert_eq!(stack.make_contiguous(), &mut [1, 2, 3]);
    assert!(stack.as_slices().1.is_empty());

    let mut empty: Stack<i32> = Stack::new();
    assert!(empty.make_contiguous().is_empty());
    assert!(!empty.is_allocated());
}

#[test]
fn test_with_contiguous_mut_sorts_in_place() {
    let mut stack = Stack::new();
    stack.push_all([5, 1, 4, 2, 3]);
    let len = stack.with_contiguous_mut(|slice| {
        slice.sort_unstable();
        slice.len()
    });
    assert_eq!(len, 5);
    assert_eq!(stack, [1, 2, 3, 4, 5]);
}

#[test]
fn test_with_contiguous_mut_on_empty() {
    let mut stack: Stack<i32> = Stack::new();
    let called = stack.with_contiguous_mut(|slice| slice.is_empty());
    assert!(called);
    assert!(!stack.is_allocated());
}

#[test]
fn test_with_contiguous_mut_detaches_shared_storage() {
    let mut stack = Stack::from([3, 1, 2]);
    let snapshot = stack.clone();
    stack.with_contiguous_mut(|slice| slice.sort());
    assert_eq!(stack, [1, 2, 3]);
    assert_eq!(snapshot, [3, 1, 2]);
    assert!(!stack.ptr_eq(&snapshot));
}

#[test]
fn test_with_contiguous_mut_restores_storage_after_panic() {
    let mut stack = Stack::from([1, 2, 3]);
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        stack.with_contiguous_mut(|slice| {
            slice[0] = 10;
            panic!("callback failed");
        })
    }));
    assert!(result.is_err());
    assert!(stack.is_allocated());
    assert_eq!(stack, [10, 2, 3]);

    stack.push(0);
    assert_eq!(stack, [0, 10, 2, 3]);
}

#[test]
fn test_slice_contiguous_read() {
    let stack = Stack::from([1, 2, 3, 4, 5]);
    let view = stack.slice(1..4);
    assert_eq!(
        view.with_contiguous_storage_if_available(|s| s.iter().sum::<i32>()),
        Some(9)
    );
}

#[test]
fn test_slice_with_contiguous_mut() {
    let stack = Stack::from([1, 2, 3, 4, 5]);
    let mut view = stack.slice(1..4);
    view.with_contiguous_mut(|slice| {
        assert_eq!(slice, [2, 3, 4]);
        slice.reverse();
    });
    assert_eq!(view, [4, 3, 2]);
    assert_eq!(view.base(), &[1, 4, 3, 2, 5][..]);
    assert_eq!(stack, [1, 2, 3, 4, 5]);
}

#[test]
fn test_slice_with_contiguous_mut_after_wraparound() {
    let mut stack = Stack::from([3, 4, 5]);
    stack.push_all([2, 1]);
    let mut view = stack.slice(..);
    view.with_contiguous_mut(|slice| slice.iter_mut().for_each(|x| *x *= 2));
    assert_eq!(view, [2, 4, 6, 8, 10]);
    assert_eq!(stack, [1, 2, 3, 4, 5]);
}
