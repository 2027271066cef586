//! `Serialize`/`Deserialize` as a plain sequence.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, Error, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::trace::trace_event;
use crate::StaticVector;

impl<T, const N: usize> Serialize for StaticVector<T, N>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self)
    }
}

/// Rejects sequences longer than `N` with `invalid_length` instead of
/// panicking.
impl<'de, T, const N: usize> Deserialize<'de> for StaticVector<T, N>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StaticVectorVisitor<T, const N: usize>(PhantomData<T>);

        impl<'de, T, const N: usize> Visitor<'de> for StaticVectorVisitor<T, N>
        where
            T: Deserialize<'de>,
        {
            type Value = StaticVector<T, N>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(formatter, "a sequence of at most {N} elements")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                if let Some(hint) = seq.size_hint() {
                    if hint > N {
                        trace_event!(len = hint, capacity = N, "deserialize rejected: sequence too long");
                        return Err(A::Error::invalid_length(hint, &self));
                    }
                }

                let mut vector = StaticVector::new();
                while let Some(element) = seq.next_element()? {
                    if vector.try_push(element).is_err() {
                        trace_event!(capacity = N, "deserialize rejected: sequence too long");
                        return Err(A::Error::invalid_length(N + 1, &self));
                    }
                }

                Ok(vector)
            }
        }

        deserializer.deserialize_seq(StaticVectorVisitor::<T, N>(PhantomData))
    }
}
