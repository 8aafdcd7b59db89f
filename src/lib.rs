//! A last-in-first-out stack with value semantics and copy-on-write storage.
//!
//! [`Stack`] clones in O(1) by sharing one reference-counted ring buffer
//! between copies. The first mutation of a shared copy gives it a private
//! buffer, so no copy ever observes another's edits. An empty stack holds no
//! allocation at all.
//!
//! [`StackSlice`] is a view over a range of a stack that keeps the stack's
//! indices and shares its storage until either side is mutated.
//!
//! # Features
//!
//! | Feature | Default | Provides |
//! |---------|---------|----------|
//! | `serde` | yes | `Serialize`/`Deserialize` as a plain sequence |
//! | `bytes` | no | conversions between `Stack<u8>` and `bytes::Bytes` |
//! | `tracing` | no | trace events for storage allocation, copy and release |

#[cfg(feature = "bytes")]
mod byte_buf;
#[cfg(feature = "serde")]
mod de;
mod error;
#[cfg(feature = "serde")]
mod ser;
mod slice;
mod stack;
mod storage;
mod traits;
mod util;

pub use error::*;
pub use slice::StackSlice;
pub use stack::{IntoIter, Iter, IterMut, Stack};
pub use traits::{Lifo, RangeReplaceable};
