use core::fmt;
use core::iter::FusedIterator;
use core::ops::Range;

use crate::storage::RawStorage;

/// By-value iterator over a [`StaticVector`](crate::StaticVector).
///
/// Owns the vector's storage; elements not yet yielded are dropped with the
/// iterator.
pub struct IntoIter<T, const N: usize> {
    storage: RawStorage<T, N>,
    alive: Range<usize>,
}

impl<T, const N: usize> IntoIter<T, N> {
    /// # Safety
    /// Slots `[0, len)` of `storage` must be live.
    pub(crate) unsafe fn new(storage: RawStorage<T, N>, len: usize) -> Self {
        Self {
            storage,
            alive: 0..len,
        }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        unsafe { self.storage.slice(self.alive.clone()) }
    }

    /// The elements not yet yielded, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { self.storage.slice_mut(self.alive.clone()) }
    }
}

impl<T, const N: usize> Default for IntoIter<T, N> {
    fn default() -> Self {
        Self {
            storage: RawStorage::new(),
            alive: 0..0,
        }
    }
}

impl<T, const N: usize> fmt::Debug for IntoIter<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.alive.next()?;
        Some(unsafe { self.storage.read(index) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.alive.size_hint()
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.alive.next_back()?;
        Some(unsafe { self.storage.read(index) })
    }
}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {
    fn len(&self) -> usize {
        self.alive.len()
    }
}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let alive = core::mem::replace(&mut self.alive, 0..0);
        unsafe { self.storage.drop_range(alive) };
    }
}
