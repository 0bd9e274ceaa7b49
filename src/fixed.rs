//! Fixed-layout composite values, encoded as their raw in-memory image.
//!
//! A type opts in by deriving zerocopy's layout traits and implementing [`FixedLayout`]:
//!
//! ```
//! use datastream_io::{FixedLayout, ReadStream, WriteStream};
//! use zerocopy::{FromBytes, Immutable, IntoBytes};
//!
//! #[derive(FromBytes, IntoBytes, Immutable, Clone, Copy, Debug, PartialEq)]
//! #[repr(C)]
//! struct Rgba8 {
//!     r: u8,
//!     g: u8,
//!     b: u8,
//!     a: u8,
//! }
//!
//! impl FixedLayout for Rgba8 {}
//!
//! let color = Rgba8 { r: 51, g: 65, b: 129, a: 254 };
//! let mut w = WriteStream::new();
//! w.write_fixed(&color).unwrap();
//! let bytes = w.snapshot();
//! assert_eq!(ReadStream::new(&bytes).read_fixed::<Rgba8>(), Ok(color));
//! ```
//!
//! The derives reject types with padding or with bit patterns that are not valid values, so the
//! byte image is always fully defined.
//!
//! Nothing on this path is byte-swapped. A `#[repr(C)] struct { v: u32 }` is written in host
//! order, unlike [`WriteStream::write_u32`](crate::WriteStream::write_u32). The encoding is only
//! portable between hosts with the same endianness. Types that have to cross architectures
//! should be written field by field with the scalar methods instead.

use crate::SizeError;
use half::f16;
use zerocopy::{FromBytes, Immutable, IntoBytes};

/// A value that is serialized by copying its in-memory representation verbatim.
pub trait FixedLayout: FromBytes + IntoBytes + Immutable + Sized {
    /// Number of bytes in the encoded form.
    const SIZE: usize = core::mem::size_of::<Self>();
}

impl<const N: usize> FixedLayout for [u8; N] {}

impl FixedLayout for f16 {}

/// Returns the host-order byte image of `value`.
pub fn encode_fixed<T: FixedLayout>(value: &T) -> Vec<u8> {
    value.as_bytes().to_vec()
}

/// Decodes a `T` from the first `T::SIZE` bytes of `bytes`. Any bytes past that are ignored.
pub fn decode_fixed<T: FixedLayout>(bytes: &[u8]) -> Result<T, SizeError> {
    match T::read_from_prefix(bytes) {
        Ok((value, _rest)) => Ok(value),
        Err(_) => {
            log::trace!(
                "fixed-layout decode needs {} bytes, buffer has {}",
                T::SIZE,
                bytes.len()
            );
            Err(SizeError {
                needed: T::SIZE,
                available: bytes.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zerocopy::{FromBytes, Immutable, IntoBytes};

    #[derive(FromBytes, IntoBytes, Immutable, Clone, Copy, Debug, PartialEq)]
    #[repr(C)]
    struct Word {
        v: u32,
    }

    impl FixedLayout for Word {}

    #[test]
    fn word_is_not_swapped() {
        let w = Word { v: 0x1122_3344 };
        assert_eq!(encode_fixed(&w), 0x1122_3344u32.to_ne_bytes());
    }

    #[test]
    fn decode_uses_prefix() {
        let bytes = [1, 2, 3, 4, 5, 6];
        let arr: [u8; 4] = decode_fixed(&bytes).unwrap();
        assert_eq!(arr, [1, 2, 3, 4]);
    }

    #[test]
    fn decode_too_small() {
        assert_eq!(
            decode_fixed::<Word>(&[1, 2, 3]),
            Err(SizeError {
                needed: 4,
                available: 3
            })
        );
    }

    #[test]
    fn f16_is_host_order() {
        let pi = f16::PI;
        assert_eq!(<f16 as FixedLayout>::SIZE, 2);
        assert_eq!(encode_fixed(&pi), pi.to_bits().to_ne_bytes());
        let back: f16 = decode_fixed(&pi.to_bits().to_ne_bytes()).unwrap();
        assert_eq!(back.to_bits(), pi.to_bits());
    }

    #[test]
    fn zero_sized_array() {
        assert_eq!(<[u8; 0] as FixedLayout>::SIZE, 0);
        assert_eq!(decode_fixed::<[u8; 0]>(&[]), Ok([]));
        assert!(encode_fixed(&[0u8; 0]).is_empty());
    }
}
