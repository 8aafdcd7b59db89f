use bytes::Bytes;
use cow_stack::Stack;
use std::collections::VecDeque;

/// Replays `data` as a sequence of edits on a stack, a clone of it and a
/// plain `VecDeque`, checking after every step that they agree.
pub fn test_operations(data: &[u8]) {
    let mut stack: Stack<u8> = Stack::new();
    let mut model: VecDeque<u8> = VecDeque::new();
    let mut snapshot = (stack.clone(), model.clone());
    let mut reserved = false;

    for chunk in data.chunks(3) {
        let [op, a, b] = match *chunk {
            [op, a, b] => [op, a, b],
            [op, a] => [op, a, 0],
            [op] => [op, 0, 0],
            _ => break,
        };
        let len = model.len();
        let (a_index, b_index) = (usize::from(a) % (len + 1), usize::from(b) % (len + 1));

        match op % 15 {
            0 => {
                stack.push(a);
                model.push_front(a);
            }
            1 => assert_eq!(stack.pop(), model.pop_front()),
            2 => assert_eq!(stack.pop_last(), model.pop_back()),
            3 => {
                stack.insert(a_index, b);
                model.insert(a_index, b);
            }
            4 if len > 0 => {
                let index = usize::from(a) % len;
                assert_eq!(stack.remove(index), model.remove(index).unwrap());
            }
            5 => {
                let range = a_index.min(b_index)..a_index.max(b_index);
                stack.remove_range(range.clone());
                model.drain(range);
            }
            6 => {
                let range = a_index.min(b_index)..a_index.max(b_index);
                let replacement = vec![a; usize::from(b % 4)];
                stack.replace_range(range.clone(), replacement.iter().copied());
                let tail = model.split_off(range.end);
                model.truncate(range.start);
                model.extend(replacement);
                model.extend(tail);
            }
            7 => {
                stack.remove_first_n(a_index);
                model.drain(..a_index);
            }
            8 => {
                stack.remove_last_n(a_index);
                model.truncate(len - a_index);
            }
            9 if len > 0 => {
                let index = usize::from(a) % len;
                stack[index] = b;
                model[index] = b;
            }
            10 => {
                let divisor = a % 5 + 2;
                stack.retain(|x| x % divisor != 0);
                model.retain(|x| x % divisor != 0);
            }
            11 => {
                stack.reserve(usize::from(a % 16));
                reserved = true;
            }
            12 => {
                stack.with_contiguous_mut(|slice| slice.reverse());
                model.make_contiguous().reverse();
            }
            13 => {
                let range = a_index.min(b_index)..a_index.max(b_index);
                let mut view = stack.slice(range.clone());
                view.push(b);
                assert_eq!(view.len(), range.len() + 1);
                assert_eq!(view[range.start], b);
                stack.replace_range(range, view);
                model.insert(a_index.min(b_index), b);
            }
            _ => {
                snapshot = (stack.clone(), model.clone());
            }
        }

        assert!(stack.iter().eq(model.iter()));
        assert_eq!(stack.len(), model.len());
        if !model.is_empty() {
            reserved = false;
        } else if !reserved {
            assert!(!stack.is_allocated());
        }
        assert!(snapshot.0.iter().eq(snapshot.1.iter()));
    }
}

/// Checks byte conversions and JSON decoding against `Vec`.
pub fn test_conversions(data: &[u8]) {
    let stack = Stack::from(Bytes::copy_from_slice(data));
    assert!(stack.iter().eq(data.iter()));
    assert_eq!(Bytes::from(stack.clone()), data);

    if let Ok(text) = std::str::from_utf8(data) {
        let decoded: Result<Stack<i64>, _> = serde_json::from_str(text);
        let expected: Result<Vec<i64>, _> = serde_json::from_str(text);
        match (decoded, expected) {
            (Ok(decoded), Ok(expected)) => {
                assert_eq!(decoded, expected);
                let encoded = serde_json::to_string(&decoded).unwrap();
                assert_eq!(encoded, serde_json::to_string(&expected).unwrap());
            }
            (Err(_), Err(_)) => {}
            (decoded, expected) => panic!("disagreement: {decoded:?} vs {expected:?}"),
        }
    }
}

pub fn test(data: &[u8]) {
    test_operations(data);
    test_conversions(data);
}
