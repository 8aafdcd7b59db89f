//! Serde serialization for [`Stack`] and [`StackSlice`].
//!
//! Both serialize as a plain sequence of their elements, from top to bottom,
//! so any self-describing format can read them back as a list.
//!
//! ```
//! use cow_stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(serde_json::to_string(&stack).unwrap(), "[2,1]");
//! ```

use serde::{Serialize, Serializer};

use crate::{Stack, StackSlice};

impl<T: Serialize> Serialize for Stack<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<T: Serialize> Serialize for StackSlice<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}
