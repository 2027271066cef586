#![no_std]

//! An **inline**, **fixed-capacity**, **variable-size** array, `no_std` compatible.
//!
//! `StaticVector<T, N>` stores up to `N` elements of type `T` contiguously,
//! inside the value itself. Nothing is ever allocated: the storage is an
//! uninitialized block sized and aligned for `N` elements, and elements are
//! only constructed when they are pushed.
//! The capacity is **fixed at compile-time** and cannot grow; the length
//! (`len`) varies between `0` and `N`.
//!
//! This type is ideal for cases where:
//! - You're working in `no_std` environments, with or without an allocator.
//! - You want a `Vec`-like API with deterministic memory use.
//! - Heap allocation is too slow or unavailable (real-time, embedded).
//!
//! ```rust
//! use static_vector::{static_vector, StaticVector};
//!
//! let mut v: StaticVector<i32, 4> = static_vector![10, 20];
//! v.push(30);
//! assert_eq!(v.len(), 3);
//!
//! assert_eq!(v.front(), &10);
//! assert_eq!(v[1], 20);
//! assert_eq!(v.back(), &30);
//!
//! // Back to front, with random access relative to the current position.
//! let mut rev = v.rev_iter();
//! assert_eq!(rev[0], 30);
//! assert_eq!(rev.nth(1), Some(&20));
//!
//! assert_eq!(v.pop_back(), 30);
//! assert_eq!(v.pop(), Some(20));
//! assert!(v.try_push(1).is_ok());
//! assert_eq!(&v[..], &[10, 1]);
//! ```
//!
//! # Contract violations
//!
//! Pushing into a full vector, reading `front`/`back` of an empty one, or
//! popping with [`StaticVector::pop_back`] from an empty one are caller bugs
//! and panic, like out-of-range slice indexing does. Use
//! [`StaticVector::try_push`] and [`StaticVector::pop`] when running out of
//! room is an expected outcome.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` as a sequence. Deserializing more
//!   than `N` elements fails with an `invalid_length` error.
//! - `tracing`: emits `tracing` events on the recoverable failure paths.

#[cfg(test)]
extern crate alloc;
#[cfg(test)]
extern crate std;

mod error;
mod into_iter;
mod rev;
mod storage;
mod trace;
mod vector;

#[cfg(feature = "serde")]
mod serde_impl;

pub use error::CapacityError;
pub use into_iter::IntoIter;
pub use rev::{RevIter, RevIterMut};
pub use vector::StaticVector;

/// Creates a [`StaticVector`], in the manner of `vec!`.
///
/// The capacity comes from the surrounding type annotation.
///
/// ```
/// use static_vector::{static_vector, StaticVector};
///
/// let empty: StaticVector<u8, 4> = static_vector![];
/// let listed: StaticVector<u8, 4> = static_vector![1, 2, 3];
/// let filled: StaticVector<u8, 4> = static_vector![7; 2];
///
/// assert!(empty.is_empty());
/// assert_eq!(listed, [1, 2, 3]);
/// assert_eq!(filled, [7, 7]);
/// ```
#[macro_export]
macro_rules! static_vector {
    () => {
        $crate::StaticVector::new()
    };
    ($element:expr; $count:expr) => {
        $crate::StaticVector::from_elem($count, $element)
    };
    ($($element:expr),+ $(,)?) => {
        $crate::StaticVector::from([$($element),+])
    };
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;

    use crate::StaticVector;

    #[test]
    fn test_macro_forms() {
        let sut: StaticVector<i32, 8> = static_vector![];
        assert!(sut.is_empty());

        let sut: StaticVector<i32, 8> = static_vector![1, 2, 3,];
        assert_eq!(sut, [1, 2, 3]);

        let handle = Rc::new(());
        let sut: StaticVector<Rc<()>, 8> = static_vector![Rc::clone(&handle); 3];
        assert_eq!(sut.len(), 3);
        assert_eq!(Rc::strong_count(&handle), 4);
    }

    #[test]
    fn test_send_sync_follow_element() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<StaticVector<i32, 4>>();
        assert_send_sync::<crate::IntoIter<i32, 4>>();
        assert_send_sync::<crate::RevIter<'static, i32>>();
    }
}
