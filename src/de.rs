//! Serde deserialization for [`Stack`] and [`StackSlice`].
//!
//! Both read a sequence whose first element becomes the top. An empty
//! sequence produces a stack with no storage.
//!
//! ```
//! use cow_stack::Stack;
//!
//! let stack: Stack<i32> = serde_json::from_str("[3,2,1]").unwrap();
//! assert_eq!(stack.peek(), Some(&3));
//!
//! let empty: Stack<i32> = serde_json::from_str("[]").unwrap();
//! assert!(!empty.is_allocated());
//! ```

use std::{collections::VecDeque, fmt, marker::PhantomData};

use serde::{
    Deserialize, Deserializer,
    de::{SeqAccess, Visitor},
};

use crate::{Stack, StackSlice};

/// Upper bound on the capacity preallocated from an untrusted size hint.
const MAX_PREALLOCATED: usize = 4096;

struct StackVisitor<T> {
    marker: PhantomData<T>,
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for StackVisitor<T> {
    type Value = Stack<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of stack elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATED);
        let mut deque = VecDeque::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            deque.push_back(element);
        }
        Ok(Stack::from(deque))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Stack<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(StackVisitor {
            marker: PhantomData,
        })
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for StackSlice<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Stack::deserialize(deserializer).map(StackSlice::from)
    }
}
