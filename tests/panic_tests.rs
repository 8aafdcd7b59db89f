//! Tests for violated preconditions and their panic messages

use cow_stack::Stack;

fn numbers() -> Stack<i32> {
    Stack::from([1, 2, 3, 4, 5])
}

// ==================== Stack Index Panic Tests ====================

#[test]
#[should_panic(expected = "index out of bounds: the len is 3 but the index is 3")]
fn test_index_out_of_bounds_panics() {
    let stack = Stack::from([1, 2, 3]);
    let _value = stack[3];
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_index_mut_out_of_bounds_panics() {
    let mut stack = Stack::from([1, 2, 3]);
    stack[7] = 0;
}

#[test]
#[should_panic(expected = "index out of bounds: the len is 0 but the index is 0")]
fn test_index_empty_panics() {
    let stack: Stack<i32> = Stack::new();
    let _value = stack[0];
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_swap_out_of_bounds_panics() {
    let mut stack = Stack::from([1, 2]);
    stack.swap(0, 2);
}

// ==================== Stack Insert/Remove Panic Tests ====================

#[test]
#[should_panic(expected = "index out of bounds: the len is 3 but the index is 4")]
fn test_insert_out_of_bounds_panics() {
    let mut stack = Stack::from([1, 2, 3]);
    stack.insert(4, 0);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_insert_all_out_of_bounds_panics() {
    let mut stack = Stack::from([1, 2, 3]);
    stack.insert_all(5, [0, 0]);
}

#[test]
#[should_panic(expected = "index out of bounds: the len is 3 but the index is 5")]
fn test_remove_out_of_bounds_panics() {
    let mut stack = Stack::from([1, 2, 3]);
    stack.remove(5);
}

#[test]
#[should_panic(expected = "cannot remove from an empty stack")]
fn test_remove_first_empty_panics() {
    let mut stack: Stack<i32> = Stack::new();
    stack.remove_first();
}

#[test]
#[should_panic(expected = "cannot remove from an empty stack")]
fn test_remove_last_empty_panics() {
    let mut stack: Stack<i32> = Stack::new();
    stack.remove_last();
}

#[test]
#[should_panic(expected = "cannot remove 4 elements from a stack of length 3")]
fn test_remove_first_n_too_many_panics() {
    let mut stack = Stack::from([1, 2, 3]);
    stack.remove_first_n(4);
}

#[test]
#[should_panic(expected = "cannot remove 2 elements from a stack of length 0")]
fn test_remove_last_n_empty_panics() {
    let mut stack: Stack<i32> = Stack::new();
    stack.remove_last_n(2);
}

// ==================== Range Panic Tests ====================

#[test]
#[should_panic(expected = "range 2..9 out of bounds for stack of length 5")]
fn test_slice_out_of_bounds_panics() {
    numbers().slice(2..9);
}

#[test]
#[should_panic(expected = "range start 3 is greater than range end 1")]
#[allow(clippy::reversed_empty_ranges)]
fn test_slice_inverted_range_panics() {
    numbers().slice(3..1);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_remove_range_out_of_bounds_panics() {
    numbers().remove_range(4..=5);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_replace_range_out_of_bounds_panics() {
    numbers().replace_range(2..6, [1]);
}

// ==================== Slice Panic Tests ====================

#[test]
#[should_panic(expected = "index out of bounds: the slice bounds are 1..4 but the index is 0")]
fn test_slice_index_below_bounds_panics() {
    let view = numbers().slice(1..4);
    let _value = view[0];
}

#[test]
#[should_panic(expected = "the slice bounds are 1..4 but the index is 4")]
fn test_slice_index_mut_above_bounds_panics() {
    let mut view = numbers().slice(1..4);
    view[4] = 0;
}

#[test]
#[should_panic(expected = "range 0..3 is not within slice bounds 1..4")]
fn test_reslice_outside_bounds_panics() {
    let view = numbers().slice(1..4);
    view.slice(0..3);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_slice_insert_outside_bounds_panics() {
    let mut view = numbers().slice(1..4);
    view.insert(5, 0);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_slice_remove_at_end_index_panics() {
    let mut view = numbers().slice(1..4);
    view.remove(4);
}

#[test]
#[should_panic(expected = "is not within slice bounds")]
fn test_slice_replace_range_outside_bounds_panics() {
    let mut view = numbers().slice(1..4);
    view.replace_range(3..5, [0]);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_slice_distance_outside_bounds_panics() {
    let view = numbers().slice(1..4);
    view.distance(0, 2);
}

// ==================== Contiguous Access Panic Tests ====================

#[test]
#[should_panic(expected = "callback failed")]
fn test_contiguous_callback_panic_propagates() {
    let mut stack = numbers();
    stack.with_contiguous_mut(|_| panic!("callback failed"));
}
