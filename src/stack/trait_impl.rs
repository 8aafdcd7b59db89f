use std::{
    any,
    cmp::Ordering,
    collections::VecDeque,
    fmt,
    hash::{Hash, Hasher},
    ops::{Index, IndexMut, RangeBounds},
};

use crate::{
    Error, IntoIter, Iter, IterMut, Lifo, RangeReplaceable, Stack,
    storage::SharedStorage,
    util::{cold_path, fail},
};

// ============ Indexing ============

impl<T> Index<usize> for Stack<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => {
                cold_path();
                fail(Error::IndexOutOfBounds {
                    index,
                    len: self.len(),
                })
            }
        }
    }
}

impl<T: Clone> IndexMut<usize> for Stack<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.check_index(index);
        &mut self.ensure_unique(0)[index]
    }
}

// ============ Comparison and hashing ============

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<[T]> for Stack<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<&[T]> for Stack<T> {
    fn eq(&self, other: &&[T]) -> bool {
        *self == **other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Stack<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Stack<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: PartialOrd> PartialOrd for Stack<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for Stack<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for Stack<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for element in self {
            element.hash(state);
        }
    }
}

// ============ Formatting ============

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Stack[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(element, f)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(any::type_name::<Self>())?;
        f.debug_list().entries(self.iter()).finish()
    }
}

// ============ Iteration ============

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Clone> IntoIterator for &'a mut Stack<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Clone> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_deque().into_iter(),
        }
    }
}

/// Appends after the current bottom, keeping iteration order.
impl<T: Clone> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let len = self.len();
        self.insert_all(len, iter);
    }
}

impl<'a, T: Clone + 'a> Extend<&'a T> for Stack<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        let len = self.len();
        self.insert_all(len, iter.into_iter().cloned());
    }
}

// ============ Conversions ============

/// Collects in iteration order: the first element yielded becomes the top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<VecDeque<T>>())
    }
}

impl<T> From<VecDeque<T>> for Stack<T> {
    fn from(deque: VecDeque<T>) -> Self {
        if deque.is_empty() {
            return Self::new();
        }
        Self {
            storage: Some(SharedStorage::from_deque(deque)),
        }
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::from(VecDeque::from(vec))
    }
}

impl<T, const N: usize> From<[T; N]> for Stack<T> {
    fn from(array: [T; N]) -> Self {
        Self::from(VecDeque::from(array))
    }
}

impl<T: Clone> From<&[T]> for Stack<T> {
    fn from(slice: &[T]) -> Self {
        slice.iter().cloned().collect()
    }
}

impl<T: Clone> From<Stack<T>> for VecDeque<T> {
    fn from(stack: Stack<T>) -> Self {
        stack.into_deque()
    }
}

impl<T: Clone> From<Stack<T>> for Vec<T> {
    fn from(stack: Stack<T>) -> Self {
        Vec::from(stack.into_deque())
    }
}

// ============ Capability traits ============

impl<T: Clone> Lifo<T> for Stack<T> {
    #[inline]
    fn push(&mut self, value: T) {
        Stack::push(self, value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Stack::pop(self)
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        Stack::peek(self)
    }
}

impl<T: Clone> RangeReplaceable<T> for Stack<T> {
    #[inline]
    fn start_index(&self) -> usize {
        0
    }

    #[inline]
    fn end_index(&self) -> usize {
        self.len()
    }

    #[inline]
    fn replace_range<R, I>(&mut self, range: R, elements: I)
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
    {
        Stack::replace_range(self, range, elements);
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

    #[inline]
    fn remove_all(&mut self) {
        self.clear();
    }
}
