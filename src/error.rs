//! Error returned by the fallible insertion methods.

use core::fmt;

/// The vector was already full when an insertion was attempted.
///
/// Carries the rejected element back to the caller, so nothing is lost.
///
/// ```
/// use static_vector::StaticVector;
///
/// let mut v = StaticVector::<i32, 1>::new();
/// v.try_push(1).unwrap();
///
/// let err = v.try_push(2).unwrap_err();
/// assert_eq!(err.capacity(), 1);
/// assert_eq!(err.into_inner(), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CapacityError<T> {
    element: T,
    capacity: usize,
}

impl<T> CapacityError<T> {
    pub(crate) const fn new(element: T, capacity: usize) -> Self {
        Self { element, capacity }
    }

    /// The capacity of the vector that rejected the element.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Borrows the rejected element.
    pub const fn element(&self) -> &T {
        &self.element
    }

    /// Takes the rejected element back.
    pub fn into_inner(self) -> T {
        self.element
    }
}

// No `T: Debug` bound, the element is not printed.
impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapacityError")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "capacity exceeded: vector is full at {} elements", self.capacity)
    }
}

impl<T> core::error::Error for CapacityError<T> {}
