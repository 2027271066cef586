//! Inline, uninitialized backing storage.

use core::mem::MaybeUninit;
use core::ops::Range;

/// An inline block of `N` uninitialized slots for `T`.
///
/// `RawStorage` knows nothing about which slots are live: it never
/// constructs or drops an element unless one of its slot primitives is
/// called, and those primitives trust the caller about slot state. The
/// owning container is the only thing that tracks that.
pub(crate) struct RawStorage<T, const N: usize> {
    slots: [MaybeUninit<T>; N],
}

impl<T, const N: usize> RawStorage<T, N> {
    /// `true` when dropping a `T` has no observable effect.
    pub(crate) const TRIVIAL: bool = !core::mem::needs_drop::<T>();

    pub(crate) const fn new() -> Self {
        Self {
            slots: [const { MaybeUninit::uninit() }; N],
        }
    }

    /// Pointer to slot 0, aligned for `T`.
    #[inline]
    pub(crate) const fn as_ptr(&self) -> *const T {
        self.slots.as_ptr().cast()
    }

    /// Mutable pointer to slot 0, aligned for `T`.
    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr().cast()
    }

    /// Constructs `value` in slot `index` and returns a reference to it.
    ///
    /// # Safety
    /// `index < N` and the slot must be raw; a live element there would be
    /// overwritten without being dropped.
    #[inline]
    pub(crate) unsafe fn write(&mut self, index: usize, value: T) -> &mut T {
        debug_assert!(index < N);
        unsafe { self.slots.get_unchecked_mut(index).write(value) }
    }

    /// Moves the element out of slot `index`, leaving the slot raw.
    ///
    /// # Safety
    /// `index < N` and the slot must be live. The caller must stop treating
    /// the slot as live.
    #[inline]
    pub(crate) unsafe fn read(&mut self, index: usize) -> T {
        debug_assert!(index < N);
        unsafe { self.slots.get_unchecked(index).assume_init_read() }
    }

    /// Drops the live elements in `range`, lowest index first.
    ///
    /// # Safety
    /// Every slot in `range` must be live, and the caller must treat them as
    /// raw afterwards.
    pub(crate) unsafe fn drop_range(&mut self, range: Range<usize>) {
        debug_assert!(range.start <= range.end && range.end <= N);
        if Self::TRIVIAL {
            return;
        }

        for slot in &mut self.slots[range] {
            unsafe { slot.assume_init_drop() };
        }
    }

    /// The slots in `range` viewed as elements.
    ///
    /// # Safety
    /// Every slot in `range` must be live.
    #[inline]
    pub(crate) unsafe fn slice(&self, range: Range<usize>) -> &[T] {
        debug_assert!(range.start <= range.end && range.end <= N);
        unsafe { core::slice::from_raw_parts(self.as_ptr().add(range.start), range.len()) }
    }

    /// The slots in `range` viewed as mutable elements.
    ///
    /// # Safety
    /// Every slot in `range` must be live.
    #[inline]
    pub(crate) unsafe fn slice_mut(&mut self, range: Range<usize>) -> &mut [T] {
        debug_assert!(range.start <= range.end && range.end <= N);
        let len = range.len();
        unsafe { core::slice::from_raw_parts_mut(self.as_mut_ptr().add(range.start), len) }
    }
}
