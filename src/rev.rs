//! Back-to-front iterators over a vector's live elements.
//!
//! Both iterators hold a window of the live prefix; the element they point
//! at is the last one of that window, and stepping forward moves that
//! position one slot down in memory. Beyond plain iteration they support
//! the random-access operations of a position: O(1) `nth`, indexing
//! relative to the current position, signed distances and ordering.
//!
//! A position only moves forward. `next_back` trims the far end of the
//! window and leaves the position where it is.

use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::mem;
use core::ops::{Index, IndexMut};

#[cold]
#[inline(never)]
#[track_caller]
fn offset_out_of_range(offset: usize, len: usize) -> ! {
    if len == 0 {
        panic!("reverse iterator dereferenced while empty (offset {offset})");
    }
    panic!("reverse offset out of range: the len is {len} but the offset is {offset}");
}

/// Slot of the element `offset` steps ahead of the position, in a window of
/// `len` elements.
#[inline]
fn slot(offset: usize, len: usize) -> Option<usize> {
    (offset < len).then(|| len - 1 - offset)
}

/// Where an iterator stands: the address its traversal started below and
/// the number of steps `next`/`nth` have taken since.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Position {
    origin: usize,
    steps: usize,
}

impl Position {
    fn start<T>(slice: &[T]) -> Self {
        Self {
            origin: slice.as_ptr_range().end as usize,
            steps: 0,
        }
    }

    fn distance_to(self, other: Self) -> isize {
        other.steps as isize - self.steps as isize
    }

    /// `None` for traversals that started at different addresses.
    fn order(self, other: Self) -> Option<Ordering> {
        (self.origin == other.origin).then(|| self.steps.cmp(&other.steps))
    }
}

/// Immutable back-to-front iterator, returned by
/// [`StaticVector::rev_iter`](crate::StaticVector::rev_iter).
///
/// ```
/// use static_vector::StaticVector;
///
/// let v = StaticVector::<i32, 4>::from([1, 2, 3]);
/// let mut it = v.rev_iter();
///
/// assert_eq!(it[0], 3);
/// assert_eq!(it[2], 1);
/// assert_eq!(it.next(), Some(&3));
/// assert_eq!(it.as_slice(), &[1, 2]);
/// ```
pub struct RevIter<'a, T> {
    slice: &'a [T],
    position: Position,
}

impl<'a, T> RevIter<'a, T> {
    pub(crate) fn new(slice: &'a [T]) -> Self {
        Self {
            slice,
            position: Position::start(slice),
        }
    }

    /// The elements not yet yielded, in forward (memory) order.
    pub const fn as_slice(&self) -> &'a [T] {
        self.slice
    }

    /// The element `offset` steps ahead, without advancing.
    ///
    /// `get(0)` is the element `next()` would return.
    pub fn get(&self, offset: usize) -> Option<&'a T> {
        let slice = self.slice;
        slot(offset, slice.len()).map(|index| &slice[index])
    }

    /// Signed number of steps from `self` to `other`.
    ///
    /// Positive when `other` is further along the traversal, which is lower
    /// in memory. Only meaningful for iterators started from the same
    /// vector state.
    pub fn distance_to(&self, other: &Self) -> isize {
        self.position.distance_to(other.position)
    }
}

impl<T> Clone for RevIter<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RevIter<'_, T> {}

impl<T> Default for RevIter<'_, T> {
    fn default() -> Self {
        Self {
            slice: &[],
            position: Position::default(),
        }
    }
}

impl<T> fmt::Debug for RevIter<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RevIter").field(&self.slice).finish()
    }
}

impl<'a, T> From<RevIterMut<'a, T>> for RevIter<'a, T> {
    fn from(iter: RevIterMut<'a, T>) -> Self {
        Self {
            slice: iter.slice,
            position: iter.position,
        }
    }
}

impl<'a, T> Iterator for RevIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let (last, rest) = self.slice.split_last()?;
        self.slice = rest;
        self.position.steps += 1;
        Some(last)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        match slot(n, self.slice.len()) {
            Some(index) => {
                let element = &self.slice[index];
                self.slice = &self.slice[..index];
                self.position.steps += n + 1;
                Some(element)
            }
            None => {
                self.position.steps += self.slice.len();
                self.slice = &self.slice[..0];
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.slice.len(), Some(self.slice.len()))
    }

    fn count(self) -> usize {
        self.slice.len()
    }

    fn last(self) -> Option<Self::Item> {
        self.slice.first()
    }
}

impl<T> DoubleEndedIterator for RevIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (first, rest) = self.slice.split_first()?;
        self.slice = rest;
        Some(first)
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.slice.len() {
            self.slice = &self.slice[self.slice.len()..];
            return None;
        }

        let element = &self.slice[n];
        self.slice = &self.slice[n + 1..];
        Some(element)
    }
}

impl<T> ExactSizeIterator for RevIter<'_, T> {
    fn len(&self) -> usize {
        self.slice.len()
    }
}

impl<T> FusedIterator for RevIter<'_, T> {}

impl<T> Index<usize> for RevIter<'_, T> {
    type Output = T;

    #[track_caller]
    fn index(&self, offset: usize) -> &Self::Output {
        match self.get(offset) {
            Some(element) => element,
            None => offset_out_of_range(offset, self.slice.len()),
        }
    }
}

/// Equal when both stand at the same position of the same traversal.
impl<T> PartialEq for RevIter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<T> Eq for RevIter<'_, T> {}

/// Orders by traversal position: the iterator further along is greater.
/// Traversals started at different addresses are unordered.
impl<T> PartialOrd for RevIter<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.position.order(other.position)
    }
}

// ---

/// Mutable back-to-front iterator, returned by
/// [`StaticVector::rev_iter_mut`](crate::StaticVector::rev_iter_mut).
///
/// Offsets count from the back: writing through offset `k` changes the
/// element at forward index `len - 1 - k`.
///
/// ```
/// use static_vector::StaticVector;
///
/// let mut v = StaticVector::<i32, 8>::from([3, 1, 2]);
/// v.rev_iter_mut()[0] = 20;
/// assert_eq!(v, [3, 1, 20]);
///
/// v.rev_iter_mut().sort_unstable();
/// assert_eq!(v, [20, 3, 1]);
/// ```
pub struct RevIterMut<'a, T> {
    slice: &'a mut [T],
    position: Position,
}

impl<'a, T> RevIterMut<'a, T> {
    pub(crate) fn new(slice: &'a mut [T]) -> Self {
        let position = Position::start(slice);
        Self { slice, position }
    }

    /// The elements not yet yielded, in forward (memory) order.
    pub fn as_slice(&self) -> &[T] {
        self.slice
    }

    /// Consumes the iterator, keeping the borrow of the unyielded elements.
    pub fn into_slice(self) -> &'a mut [T] {
        self.slice
    }

    /// The element `offset` steps ahead, without advancing.
    pub fn get(&self, offset: usize) -> Option<&T> {
        slot(offset, self.slice.len()).map(|index| &self.slice[index])
    }

    /// Mutable access to the element `offset` steps ahead.
    pub fn get_mut(&mut self, offset: usize) -> Option<&mut T> {
        slot(offset, self.slice.len()).map(|index| &mut self.slice[index])
    }

    /// Signed number of steps from `self` to `other`. See
    /// [`RevIter::distance_to`].
    pub fn distance_to(&self, other: &Self) -> isize {
        self.position.distance_to(other.position)
    }

    /// Swaps the elements at two offsets.
    ///
    /// # Panics
    /// Panics if either offset is out of range.
    #[track_caller]
    pub fn swap(&mut self, a: usize, b: usize) {
        let len = self.slice.len();
        let a = slot(a, len).unwrap_or_else(|| offset_out_of_range(a, len));
        let b = slot(b, len).unwrap_or_else(|| offset_out_of_range(b, len));
        self.slice.swap(a, b);
    }

    /// Overwrites every remaining element with clones of `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.slice.fill(value);
    }

    /// Sorts the remaining elements so they ascend in traversal order,
    /// which leaves them descending in memory.
    pub fn sort_unstable(&mut self)
    where
        T: Ord,
    {
        self.slice.sort_unstable_by(|a, b| b.cmp(a));
    }

    /// Sorts in traversal order with a comparator.
    pub fn sort_unstable_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.slice.sort_unstable_by(|a, b| compare(b, a));
    }

    /// Sorts in traversal order by a key.
    pub fn sort_unstable_by_key<K, F>(&mut self, mut key: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        self.slice.sort_unstable_by(|a, b| key(b).cmp(&key(a)));
    }
}

impl<T> Default for RevIterMut<'_, T> {
    fn default() -> Self {
        Self {
            slice: &mut [],
            position: Position::default(),
        }
    }
}

impl<T> fmt::Debug for RevIterMut<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RevIterMut").field(&self.slice).finish()
    }
}

impl<'a, T> Iterator for RevIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.slice.is_empty() {
            return None;
        }

        let (last, rest) = mem::take(&mut self.slice).split_last_mut()?;
        self.slice = rest;
        self.position.steps += 1;
        Some(last)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let slice = mem::take(&mut self.slice);
        let Some(index) = slot(n, slice.len()) else {
            // Exhausted, the window stays at the lowest slot
            self.position.steps += slice.len();
            self.slice = &mut slice[..0];
            return None;
        };
        let (rest, tail) = slice.split_at_mut(index);
        self.slice = rest;
        self.position.steps += n + 1;
        tail.first_mut()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.slice.len(), Some(self.slice.len()))
    }

    fn count(self) -> usize {
        self.slice.len()
    }
}

impl<T> DoubleEndedIterator for RevIterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.slice.is_empty() {
            return None;
        }

        let (first, rest) = mem::take(&mut self.slice).split_first_mut()?;
        self.slice = rest;
        Some(first)
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        let slice = mem::take(&mut self.slice);
        if n >= slice.len() {
            let len = slice.len();
            self.slice = &mut slice[len..];
            return None;
        }

        let (head, rest) = slice.split_at_mut(n + 1);
        self.slice = rest;
        head.last_mut()
    }
}

impl<T> ExactSizeIterator for RevIterMut<'_, T> {
    fn len(&self) -> usize {
        self.slice.len()
    }
}

impl<T> FusedIterator for RevIterMut<'_, T> {}

impl<T> Index<usize> for RevIterMut<'_, T> {
    type Output = T;

    #[track_caller]
    fn index(&self, offset: usize) -> &Self::Output {
        let len = self.slice.len();
        match slot(offset, len) {
            Some(index) => &self.slice[index],
            None => offset_out_of_range(offset, len),
        }
    }
}

impl<T> IndexMut<usize> for RevIterMut<'_, T> {
    #[track_caller]
    fn index_mut(&mut self, offset: usize) -> &mut Self::Output {
        let len = self.slice.len();
        match slot(offset, len) {
            Some(index) => &mut self.slice[index],
            None => offset_out_of_range(offset, len),
        }
    }
}

impl<T> PartialEq for RevIterMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<T> Eq for RevIterMut<'_, T> {}

impl<T> PartialOrd for RevIterMut<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.position.order(other.position)
    }
}
