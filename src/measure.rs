//! Size accounting for keys and values.
//!
//! The skip list keeps a running byte count of everything it stores. How many
//! bytes a key or a value "weighs" is decided by a [`Measure`]. The default,
//! [`ByteLen`], asks the types themselves through [`ByteSize`]: strings and byte
//! buffers report their length, fixed-width numbers report their width.

use std::mem::size_of;

/// Byte length of a value as counted by the skip list's size accounting.
pub trait ByteSize {
    fn byte_size(&self) -> usize;
}

impl ByteSize for str {
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl ByteSize for String {
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl ByteSize for Box<str> {
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl ByteSize for [u8] {
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl ByteSize for Vec<u8> {
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl ByteSize for Box<[u8]> {
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl<T: ByteSize + ?Sized> ByteSize for &T {
    fn byte_size(&self) -> usize {
        (**self).byte_size()
    }
}

macro_rules! fixed_width {
    ($($t:ty),*) => {
        $(
            impl ByteSize for $t {
                #[inline]
                fn byte_size(&self) -> usize {
                    size_of::<$t>()
                }
            }
        )*
    };
}

fixed_width!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char);

/// Strategy the skip list uses to weigh keys and values.
pub trait Measure<K, V> {
    fn key_size(&self, key: &K) -> usize;
    fn value_size(&self, value: &V) -> usize;
}

/// Measures keys and values through their [`ByteSize`] implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct ByteLen;

impl<K: ByteSize, V: ByteSize> Measure<K, V> for ByteLen {
    #[inline]
    fn key_size(&self, key: &K) -> usize {
        key.byte_size()
    }

    #[inline]
    fn value_size(&self, value: &V) -> usize {
        value.byte_size()
    }
}

/// A pair of closures, `(key_size, value_size)`.
impl<K, V, FK, FV> Measure<K, V> for (FK, FV)
where
    FK: Fn(&K) -> usize,
    FV: Fn(&V) -> usize,
{
    fn key_size(&self, key: &K) -> usize {
        (self.0)(key)
    }

    fn value_size(&self, value: &V) -> usize {
        (self.1)(value)
    }
}
