use std::{
    any,
    collections::VecDeque,
    fmt,
    hash::{Hash, Hasher},
    ops::{Index, IndexMut, RangeBounds},
};

use crate::{
    Error, IntoIter, Iter, IterMut, Lifo, RangeReplaceable, Stack, StackSlice,
    util::{cold_path, fail},
};

impl<T> Clone for StackSlice<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_parts(self.base().clone(), self.bounds())
    }
}

impl<T> Default for StackSlice<T> {
    #[inline]
    fn default() -> Self {
        Self::from_parts(Stack::new(), 0..0)
    }
}

// ============ Indexing ============

impl<T> Index<usize> for StackSlice<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => {
                cold_path();
                fail(Error::IndexOutsideBounds {
                    index,
                    lower: self.start_index(),
                    upper: self.end_index(),
                })
            }
        }
    }
}

impl<T: Clone> IndexMut<usize> for StackSlice<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let (lower, upper) = (self.start_index(), self.end_index());
        match self.get_mut(index) {
            Some(value) => value,
            None => {
                cold_path();
                fail(Error::IndexOutsideBounds {
                    index,
                    lower,
                    upper,
                })
            }
        }
    }
}

// ============ Comparison and hashing ============

impl<T: PartialEq> PartialEq for StackSlice<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<Stack<T>> for StackSlice<T> {
    fn eq(&self, other: &Stack<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<StackSlice<T>> for Stack<T> {
    fn eq(&self, other: &StackSlice<T>) -> bool {
        other == self
    }
}

impl<T: PartialEq> PartialEq<[T]> for StackSlice<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<&[T]> for StackSlice<T> {
    fn eq(&self, other: &&[T]) -> bool {
        *self == **other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for StackSlice<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for StackSlice<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

impl<T: Eq> Eq for StackSlice<T> {}

impl<T: Hash> Hash for StackSlice<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for StackSlice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(any::type_name::<Self>())?;
        f.debug_list().entries(self.iter()).finish()
    }
}

// ============ Iteration ============

impl<'a, T> IntoIterator for &'a StackSlice<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Clone> IntoIterator for &'a mut StackSlice<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Yields the covered elements, moving them out of the base when it was not
/// shared.
impl<T: Clone> IntoIterator for StackSlice<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let bounds = self.bounds();
        let mut deque = self.into_base().into_deque();
        deque.truncate(bounds.end);
        deque.drain(..bounds.start);
        IntoIter {
            inner: deque.into_iter(),
        }
    }
}

/// Appends after `end_index()`.
impl<T: Clone> Extend<T> for StackSlice<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let end = self.end_index();
        self.insert_all(end, iter);
    }
}

// ============ Conversions ============

impl<T> FromIterator<T> for StackSlice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Stack<T>>())
    }
}

/// A slice covering the whole stack.
impl<T> From<Stack<T>> for StackSlice<T> {
    fn from(base: Stack<T>) -> Self {
        let len = base.len();
        Self::from_parts(base, 0..len)
    }
}

impl<T> From<Vec<T>> for StackSlice<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::from(Stack::from(vec))
    }
}

impl<T> From<VecDeque<T>> for StackSlice<T> {
    fn from(deque: VecDeque<T>) -> Self {
        Self::from(Stack::from(deque))
    }
}

// ============ Capability traits ============

impl<T: Clone> Lifo<T> for StackSlice<T> {
    #[inline]
    fn push(&mut self, value: T) {
        StackSlice::push(self, value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        StackSlice::pop(self)
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        StackSlice::peek(self)
    }
}

impl<T: Clone> RangeReplaceable<T> for StackSlice<T> {
    #[inline]
    fn start_index(&self) -> usize {
        StackSlice::start_index(self)
    }

    #[inline]
    fn end_index(&self) -> usize {
        StackSlice::end_index(self)
    }

    #[inline]
    fn replace_range<R, I>(&mut self, range: R, elements: I)
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
    {
        StackSlice::replace_range(self, range, elements);
    }

    #[inline]
    fn insert_at(&mut self, index: usize, value: T) {
        self.insert(index, value);
    }

    #[inline]
    fn insert_contents<I: IntoIterator<Item = T>>(&mut self, index: usize, elements: I) {
        self.insert_all(index, elements);
    }

    #[inline]
    fn remove_subrange<R: RangeBounds<usize>>(&mut self, range: R) {
        self.remove_range(range);
    }
}
