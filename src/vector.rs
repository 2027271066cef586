use core::fmt;
use core::hash::Hash;
use core::mem;
use core::ops::{Deref, DerefMut, Range};
use core::slice::{Iter, IterMut};

use crate::error::CapacityError;
use crate::into_iter::IntoIter;
use crate::rev::{RevIter, RevIterMut};
use crate::storage::RawStorage;
use crate::trace::{debug_event, trace_event};

#[cold]
#[inline(never)]
#[track_caller]
fn capacity_exceeded(requested: usize, capacity: usize) -> ! {
    panic!("capacity exceeded: requested {requested} elements, capacity is {capacity}");
}

#[cold]
#[inline(never)]
#[track_caller]
fn empty_vector(operation: &str) -> ! {
    panic!("`{operation}` called on an empty vector");
}

/// An inline, fixed-capacity, variable-size array.
///
/// `StaticVector` is similar to `Vec`, except:
/// - The **capacity** is fixed and known at compile time.
/// - The elements live **inline**, inside the `StaticVector` value itself;
///   nothing is ever allocated.
/// - No reallocation or growth occurs once the capacity is reached.
///
/// Slots `[0, len)` hold live elements, slots `[len, N)` are uninitialized.
/// Exceeding the capacity, or reading from an empty vector through
/// [`front`](Self::front), [`back`](Self::back) or
/// [`pop_back`](Self::pop_back), is a caller bug and panics. The `try_*` and
/// `Option` returning methods are the recoverable counterparts.
pub struct StaticVector<T, const N: usize> {
    storage: RawStorage<T, N>,
    len: usize,
}

impl<T, const N: usize> StaticVector<T, N> {
    /// `true` when dropping a `T` has no observable effect. Destroying the
    /// elements of such a vector, on `clear`, `truncate` or drop, is a no-op.
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// const _: () = assert!(StaticVector::<i32, 8>::TRIVIAL);
    /// assert!(!StaticVector::<String, 8>::TRIVIAL);
    /// ```
    pub const TRIVIAL: bool = RawStorage::<T, N>::TRIVIAL;

    /// Creates a new, empty `StaticVector` with capacity `N`.
    /// No element is constructed.
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let v = StaticVector::<i32, 8>::new();
    /// assert_eq!(v.capacity(), 8);
    /// assert_eq!(v.len(), 0);
    /// assert!(v.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self {
            storage: RawStorage::new(),
            len: 0,
        }
    }

    /// Creates a vector holding `count` clones of `value`.
    ///
    /// # Panics
    /// Panics if `count` exceeds the capacity.
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let v = StaticVector::<&str, 16>::from_elem(10, "filler");
    /// assert_eq!(v.len(), 10);
    /// assert!(v.iter().all(|e| *e == "filler"));
    /// ```
    #[track_caller]
    pub fn from_elem(count: usize, value: T) -> Self
    where
        T: Clone,
    {
        if count > N {
            capacity_exceeded(count, N);
        }

        let mut vector = Self::new();
        if count > 0 {
            for _ in 1..count {
                unsafe { vector.push_unchecked(value.clone()) };
            }
            unsafe { vector.push_unchecked(value) };
        }

        vector
    }

    /// Creates a vector holding `count` default-constructed elements.
    ///
    /// # Panics
    /// Panics if `count` exceeds the capacity.
    #[track_caller]
    pub fn with_len(count: usize) -> Self
    where
        T: Default,
    {
        if count > N {
            capacity_exceeded(count, N);
        }

        let mut vector = Self::new();
        for _ in 0..count {
            unsafe { vector.push_unchecked(T::default()) };
        }

        vector
    }

    /// Creates a vector holding clones of every element of `elements`.
    ///
    /// # Panics
    /// Panics if `elements` is longer than the capacity.
    #[track_caller]
    pub fn from_slice(elements: &[T]) -> Self
    where
        T: Clone,
    {
        if elements.len() > N {
            capacity_exceeded(elements.len(), N);
        }

        let mut vector = Self::new();
        for element in elements {
            unsafe { vector.push_unchecked(element.clone()) };
        }

        vector
    }

    /// Copies another vector, of any capacity, converting each element.
    ///
    /// The length is only checked when `M > N`; a source whose capacity
    /// fits can never overflow this one.
    ///
    /// # Panics
    /// Panics if `other` holds more than `N` elements.
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let small = StaticVector::<u8, 4>::from([1, 2, 3]);
    /// let wide = StaticVector::<u32, 8>::cloned_from(&small);
    /// assert_eq!(wide, [1, 2, 3]);
    /// assert_eq!(small, [1, 2, 3]);
    /// ```
    #[track_caller]
    pub fn cloned_from<U, const M: usize>(other: &StaticVector<U, M>) -> Self
    where
        U: Clone,
        T: From<U>,
    {
        Self::check_source_len::<M>(other.len());

        let mut vector = Self::new();
        for element in other {
            unsafe { vector.push_unchecked(T::from(element.clone())) };
        }

        vector
    }

    /// Moves the elements of another vector, of any capacity, converting
    /// each one.
    ///
    /// # Panics
    /// Panics if `other` holds more than `N` elements.
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let big = StaticVector::<String, 32>::from(["a".to_string(), "b".to_string()]);
    /// let small = StaticVector::<String, 2>::converted_from(big);
    /// assert_eq!(small, ["a", "b"]);
    /// ```
    #[track_caller]
    pub fn converted_from<U, const M: usize>(other: StaticVector<U, M>) -> Self
    where
        T: From<U>,
    {
        Self::check_source_len::<M>(other.len());

        let mut vector = Self::new();
        for element in other {
            unsafe { vector.push_unchecked(T::from(element)) };
        }

        vector
    }

    /// Replaces the contents with converted clones of `other`'s elements.
    ///
    /// The current elements are dropped first.
    ///
    /// # Panics
    /// Panics if `other` holds more than `N` elements; `self` is left
    /// untouched in that case.
    #[track_caller]
    pub fn clone_assign_from<U, const M: usize>(&mut self, other: &StaticVector<U, M>)
    where
        U: Clone,
        T: From<U>,
    {
        Self::check_source_len::<M>(other.len());

        self.clear();
        for element in other {
            unsafe { self.push_unchecked(T::from(element.clone())) };
        }
    }

    /// Replaces the contents with the converted elements of `other`.
    ///
    /// The current elements are dropped first.
    ///
    /// # Panics
    /// Panics if `other` holds more than `N` elements; `self` is left
    /// untouched in that case.
    #[track_caller]
    pub fn assign_from<U, const M: usize>(&mut self, other: StaticVector<U, M>)
    where
        T: From<U>,
    {
        Self::check_source_len::<M>(other.len());

        self.clear();
        for element in other {
            unsafe { self.push_unchecked(T::from(element)) };
        }
    }

    #[inline]
    #[track_caller]
    fn check_source_len<const M: usize>(len: usize) {
        if M > N && len > N {
            capacity_exceeded(len, N);
        }

        if M != N {
            debug_event!(from = M, to = N, len, "converting between capacities");
        }
    }

    /// Appends an element to the back of the collection.
    ///
    /// # Panics
    /// Panics if the vector is already full.
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v = StaticVector::<i32, 2>::new();
    /// v.push(10);
    /// v.push(20);
    /// assert_eq!(v, [10, 20]);
    /// ```
    #[track_caller]
    pub fn push(&mut self, element: T) {
        if self.len >= N {
            capacity_exceeded(self.len + 1, N);
        }

        unsafe { self.push_unchecked(element) };
    }

    /// Appends an element to the end of the collection.
    /// Returns `Ok(())` on success, or the element wrapped in a
    /// [`CapacityError`] if the vector is already full.
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v = StaticVector::<i32, 2>::new();
    /// v.try_push(10).unwrap();
    /// v.try_push(20).unwrap();
    /// assert_eq!(v.try_push(30).unwrap_err().into_inner(), 30); // full
    /// ```
    pub fn try_push(&mut self, element: T) -> Result<(), CapacityError<T>> {
        if self.len >= N {
            trace_event!(capacity = N, "try_push rejected: vector is full");
            return Err(CapacityError::new(element, N));
        }

        unsafe { self.push_unchecked(element) };
        Ok(())
    }

    /// Appends the value produced by `f` and returns a reference to it.
    ///
    /// The capacity is checked before `f` runs, so a full vector never
    /// constructs the element.
    ///
    /// # Panics
    /// Panics if the vector is already full.
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v = StaticVector::<[f32; 2], 4>::new();
    /// let slot = v.push_with(|| [1.0, 2.0]);
    /// slot[1] = 3.0;
    /// assert_eq!(v[0], [1.0, 3.0]);
    /// ```
    #[track_caller]
    pub fn push_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.len >= N {
            capacity_exceeded(self.len + 1, N);
        }

        unsafe { self.push_unchecked(f()) }
    }

    /// # Safety
    /// `self.len < N`.
    #[inline]
    unsafe fn push_unchecked(&mut self, element: T) -> &mut T {
        debug_assert!(self.len < N);
        let index = self.len;
        self.len += 1;
        unsafe { self.storage.write(index, element) }
    }

    /// Extends the `StaticVector` with elements from an iterator, up to its capacity.
    /// Returns the remaining iterator once the vector is full or the iterator ends.
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v = StaticVector::<u8, 3>::new();
    /// let mut leftover = v.extend([1, 2, 3, 4]);
    ///
    /// assert_eq!(v.as_slice(), &[1, 2, 3]);
    /// assert_eq!(leftover.next(), Some(4)); // one element not consumed
    /// ```
    pub fn extend<I>(&mut self, iter: I) -> I::IntoIter
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();

        for _ in 0..N - self.len {
            match iter.next() {
                Some(element) => unsafe { self.push_unchecked(element) },
                None => return iter,
            };
        }

        trace_event!(capacity = N, "extend stopped: vector is full");
        iter
    }

    /// Removes the last element and returns it, or `None` if the vector is empty.
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v = StaticVector::<u8, 4>::from([1, 2, 3]);
    /// assert_eq!(v.pop(), Some(3));
    /// assert_eq!(v.as_slice(), &[1, 2]);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        // Decrement the len first: the slot is raw from here on
        self.len -= 1;
        Some(unsafe { self.storage.read(self.len) })
    }

    /// Removes the last element and hands it to the caller.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v = StaticVector::<i32, 8>::from([1, 2, 3, 4, 5, 6, 7, 8]);
    /// assert_eq!(v.pop_back(), 8);
    /// assert_eq!(v.len(), 7);
    /// ```
    #[track_caller]
    pub fn pop_back(&mut self) -> T {
        match self.pop() {
            Some(element) => element,
            None => empty_vector("pop_back"),
        }
    }

    /// Shortens the vector to `len` elements, dropping the rest in index
    /// order. Does nothing if `len` is not below the current length.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        // Shrink first so a panicking destructor cannot cause a double drop
        let tail = len..self.len;
        self.len = len;
        unsafe { self.storage.drop_range(tail) };
    }

    /// Drops all elements and resets the vector to an empty state.
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let mut v = StaticVector::<i32, 4>::from([1, 2, 3]);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// The first element.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(element) => element,
            None => empty_vector("front"),
        }
    }

    /// The first element, mutably.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(element) => element,
            None => empty_vector("front_mut"),
        }
    }

    /// The last element.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(element) => element,
            None => empty_vector("back"),
        }
    }

    /// The last element, mutably.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(element) => element,
            None => empty_vector("back_mut"),
        }
    }

    /// Returns a shared slice over the live elements.
    pub fn as_slice(&self) -> &[T] {
        unsafe { self.storage.slice(0..self.len) }
    }

    /// Returns a mutable slice over the live elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { self.storage.slice_mut(0..self.len) }
    }

    /// Raw pointer to the first slot. Valid for reads of `len()` elements.
    pub const fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Mutable raw pointer to the first slot.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_ptr()
    }

    /// The half-open pointer range spanning the live elements.
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.as_slice().as_ptr_range()
    }

    /// Returns the compile-time capacity of the vector.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the current number of live elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if no further element fits.
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// How many more elements fit.
    pub const fn remaining_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns an iterator over immutable references to the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over mutable references to the elements.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Back-to-front iterator, starting at the last element.
    ///
    /// ```
    /// use static_vector::StaticVector;
    ///
    /// let v = StaticVector::<i32, 4>::from([1, 2, 3]);
    /// assert!(v.rev_iter().eq(v.iter().rev()));
    /// ```
    pub fn rev_iter(&self) -> RevIter<'_, T> {
        RevIter::new(self.as_slice())
    }

    /// Mutable back-to-front iterator, starting at the last element.
    pub fn rev_iter_mut(&mut self) -> RevIterMut<'_, T> {
        RevIterMut::new(self.as_mut_slice())
    }
}

impl<T, const N: usize> Default for StaticVector<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a vector from an array literal. Fails to compile when the array
/// is longer than the capacity.
impl<T, const N: usize, const M: usize> From<[T; M]> for StaticVector<T, N> {
    fn from(value: [T; M]) -> Self {
        const { assert!(M <= N, "array is longer than the vector's capacity") };

        let mut vector = Self::new();
        for element in value {
            unsafe { vector.push_unchecked(element) };
        }

        vector
    }
}

impl<T, const N: usize> Clone for StaticVector<T, N>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut vector = Self::new();
        for element in self {
            unsafe { vector.push_unchecked(element.clone()) };
        }

        vector
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        for element in source {
            unsafe { self.push_unchecked(element.clone()) };
        }
    }
}

impl<T, const N: usize> FromIterator<T> for StaticVector<T, N> {
    /// # Panics
    /// Panics if the iterator yields more than `N` elements.
    #[track_caller]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vector = Self::new();
        for element in iter {
            vector.push(element);
        }

        vector
    }
}

impl<T, const N: usize> Deref for StaticVector<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, const N: usize> DerefMut for StaticVector<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for StaticVector<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> AsMut<[T]> for StaticVector<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> IntoIterator for StaticVector<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(mut self) -> Self::IntoIter {
        // `self` is dropped empty; the iterator takes over the live slots
        let len = mem::take(&mut self.len);
        let storage = mem::replace(&mut self.storage, RawStorage::new());
        unsafe { IntoIter::new(storage, len) }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a StaticVector<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut StaticVector<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<StaticVector<U, M>> for StaticVector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &StaticVector<U, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for StaticVector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, const N: usize> PartialEq<&[U]> for StaticVector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<[U; M]> for StaticVector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; M]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<&[U; M]> for StaticVector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U; M]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, const N: usize> Eq for StaticVector<T, N> where T: Eq {}

impl<T, const N: usize> PartialOrd for StaticVector<T, N>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T, const N: usize> Ord for StaticVector<T, N>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T, const N: usize> Hash for StaticVector<T, N>
where
    T: Hash,
{
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, const N: usize> fmt::Debug for StaticVector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T, const N: usize> Drop for StaticVector<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}
