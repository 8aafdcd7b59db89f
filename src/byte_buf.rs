//! Conversions between byte stacks and [`Bytes`].

use bytes::Bytes;

use crate::{Stack, StackSlice};

/// Copies the bytes in order; the first byte becomes the top.
impl From<Bytes> for Stack<u8> {
    fn from(bytes: Bytes) -> Self {
        Stack::from(Vec::from(bytes))
    }
}

impl From<&Bytes> for Stack<u8> {
    fn from(bytes: &Bytes) -> Self {
        Stack::from(bytes.as_ref())
    }
}

/// Reuses the stack's buffer when the stack held its storage alone.
impl From<Stack<u8>> for Bytes {
    fn from(stack: Stack<u8>) -> Self {
        Bytes::from(Vec::from(stack))
    }
}

impl From<StackSlice<u8>> for Bytes {
    fn from(slice: StackSlice<u8>) -> Self {
        Bytes::from(slice.into_iter().collect::<Vec<u8>>())
    }
}
