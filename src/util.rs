use std::ops::{Bound, Range, RangeBounds};

use crate::{Error, Result};

#[inline(always)]
#[cold]
pub(crate) fn cold_path() {}

/// Panics with the message of a violated precondition.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn fail(error: Error) -> ! {
    panic!("{error}")
}

/// Resolves any range expression against a collection of length `len`.
pub(crate) fn resolve_range<R: RangeBounds<usize>>(range: R, len: usize) -> Result<Range<usize>> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.checked_add(1).ok_or(Error::RangeOverflow)?,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1).ok_or(Error::RangeOverflow)?,
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };
    if start > end {
        cold_path();
        return Err(Error::InvertedRange { start, end });
    }
    if end > len {
        cold_path();
        return Err(Error::RangeOutOfBounds { start, end, len });
    }
    Ok(start..end)
}

/// Like [`resolve_range`] but checked against `bounds` instead of `0..len`.
pub(crate) fn resolve_range_within<R: RangeBounds<usize>>(
    range: R,
    bounds: &Range<usize>,
) -> Result<Range<usize>> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.checked_add(1).ok_or(Error::RangeOverflow)?,
        Bound::Unbounded => bounds.start,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1).ok_or(Error::RangeOverflow)?,
        Bound::Excluded(&end) => end,
        Bound::Unbounded => bounds.end,
    };
    if start > end {
        cold_path();
        return Err(Error::InvertedRange { start, end });
    }
    if start < bounds.start || end > bounds.end {
        cold_path();
        return Err(Error::RangeOutsideBounds {
            start,
            end,
            lower: bounds.start,
            upper: bounds.end,
        });
    }
    Ok(start..end)
}

#[cfg(feature = "tracing")]
macro_rules! trace_storage {
    ($($arg:tt)+) => {
        tracing::trace!(target: "cow_stack::storage", $($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_storage {
    ($($arg:tt)+) => {};
}

pub(crate) use trace_storage;
