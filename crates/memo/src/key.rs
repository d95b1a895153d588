//! Conversion of memoized arguments into cache keys.
//!
//! Keys have to be hashable and reflexively equal. Most argument types qualify as they are; the
//! floating-point types only qualify after normalisation, and NaN never does.

use std::hash::Hash;

use crate::errors::{MemoError, MemoResult};

/// An argument type that can be used to look up a memoized result.
pub trait MemoKey {
    /// The hashable stand-in for the argument.
    type Key: Hash + Eq;

    /// Derives the key. Equal arguments must produce equal keys.
    fn memo_key(&self) -> MemoResult<Self::Key>;
}

macro_rules! impl_memo_key_identity {
    ($($t:ty),* $(,)?) => {
        $(
            impl MemoKey for $t {
                type Key = $t;

                fn memo_key(&self) -> MemoResult<Self::Key> {
                    Ok(self.clone())
                }
            }
        )*
    };
}

impl_memo_key_identity!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    String,
);

macro_rules! impl_memo_key_float {
    ($($t:ty => $bits:ty),* $(,)?) => {
        $(
            impl MemoKey for $t {
                type Key = $bits;

                fn memo_key(&self) -> MemoResult<Self::Key> {
                    if self.is_nan() {
                        return Err(MemoError::type_kind::<$t>("NaN is not equal to itself"));
                    }
                    // -0.0 == 0.0 but their bit patterns differ.
                    let normalised = if *self == 0.0 { 0.0 } else { *self };
                    Ok(normalised.to_bits())
                }
            }
        )*
    };
}

impl_memo_key_float!(f32 => u32, f64 => u64);

impl MemoKey for &str {
    type Key = String;

    fn memo_key(&self) -> MemoResult<Self::Key> {
        Ok((*self).to_owned())
    }
}

impl<T: MemoKey> MemoKey for Option<T> {
    type Key = Option<T::Key>;

    fn memo_key(&self) -> MemoResult<Self::Key> {
        self.as_ref().map(MemoKey::memo_key).transpose()
    }
}

impl<T: MemoKey> MemoKey for Vec<T> {
    type Key = Vec<T::Key>;

    fn memo_key(&self) -> MemoResult<Self::Key> {
        self.iter().map(MemoKey::memo_key).collect()
    }
}

impl<A: MemoKey, B: MemoKey> MemoKey for (A, B) {
    type Key = (A::Key, B::Key);

    fn memo_key(&self) -> MemoResult<Self::Key> {
        Ok((self.0.memo_key()?, self.1.memo_key()?))
    }
}

impl<A: MemoKey, B: MemoKey, C: MemoKey> MemoKey for (A, B, C) {
    type Key = (A::Key, B::Key, C::Key);

    fn memo_key(&self) -> MemoResult<Self::Key> {
        Ok((self.0.memo_key()?, self.1.memo_key()?, self.2.memo_key()?))
    }
}
