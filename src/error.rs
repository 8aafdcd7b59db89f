//! Error types for checked stack operations.
//!
//! Most operations on [`Stack`](crate::Stack) and [`StackSlice`](crate::StackSlice)
//! treat out-of-range arguments as programmer errors and panic. The `try_*`
//! variants report the same conditions as an [`Error`] instead, and the panic
//! messages are the `Display` output of these variants.
//!
//! # Example
//!
//! ```
//! use cow_stack::{Error, Stack};
//!
//! let mut stack = Stack::from([1, 2, 3]);
//! match stack.try_remove(5) {
//!     Err(Error::IndexOutOfBounds { index, len }) => {
//!         assert_eq!((index, len), (5, 3));
//!     }
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

use std::{
    collections::TryReserveError,
    fmt::{self, Display},
};

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// All the ways a checked stack operation can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An element index was outside the valid positions.
    ///
    /// For reads and removals the valid positions are `0..len`; for
    /// insertions they are `0..=len`.
    IndexOutOfBounds { index: usize, len: usize },

    /// An element index was outside a slice's bounds.
    IndexOutsideBounds {
        index: usize,
        lower: usize,
        upper: usize,
    },

    /// A range reached past the end of the collection.
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    /// A range was not contained in a slice's bounds.
    RangeOutsideBounds {
        start: usize,
        end: usize,
        lower: usize,
        upper: usize,
    },

    /// A range started after it ended.
    InvertedRange { start: usize, end: usize },

    /// An inclusive range ended at `usize::MAX`.
    RangeOverflow,

    /// The operation needs at least `requested` elements but only `len` exist.
    NotEnoughElements { requested: usize, len: usize },

    /// The storage engine could not grow.
    CapacityOverflow(TryReserveError),
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IndexOutOfBounds { index, len } => write!(
                formatter,
                "index out of bounds: the len is {len} but the index is {index}"
            ),
            Error::IndexOutsideBounds {
                index,
                lower,
                upper,
            } => write!(
                formatter,
                "index out of bounds: the slice bounds are {lower}..{upper} but the index is {index}"
            ),
            Error::RangeOutOfBounds { start, end, len } => write!(
                formatter,
                "range {start}..{end} out of bounds for stack of length {len}"
            ),
            Error::RangeOutsideBounds {
                start,
                end,
                lower,
                upper,
            } => write!(
                formatter,
                "range {start}..{end} is not within slice bounds {lower}..{upper}"
            ),
            Error::InvertedRange { start, end } => {
                write!(formatter, "range start {start} is greater than range end {end}")
            }
            Error::RangeOverflow => formatter.write_str("range end overflows usize"),
            Error::NotEnoughElements { requested, len } => {
                if *len == 0 && *requested == 1 {
                    formatter.write_str("cannot remove from an empty stack")
                } else {
                    write!(
                        formatter,
                        "cannot remove {requested} elements from a stack of length {len}"
                    )
                }
            }
            Error::CapacityOverflow(error) => write!(formatter, "capacity overflow: {error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::CapacityOverflow(error) => Some(error),
            _ => None,
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(error: TryReserveError) -> Self {
        Error::CapacityOverflow(error)
    }
}
