/// A scalar value with a fixed-width wire encoding.
///
/// This is the type-indexed dispatch used by [`ReadStream::read`](crate::ReadStream::read) and
/// [`WriteStream::write`](crate::WriteStream::write). Integers and the IEEE-754 single and
/// double types are encoded big-endian, bit-exact. `bool` is one byte: `0xFF` for `true` and
/// `0x00` for `false`; any nonzero byte decodes as `true`.
///
/// `f16` is not a `WireScalar`. It is stored as its raw host-order bit pattern, through
/// [`FixedLayout`](crate::FixedLayout).
pub trait WireScalar: Copy {
    /// Number of bytes this type occupies on the wire.
    const WIDTH: usize;

    /// The encoded form, always a `[u8; WIDTH]`.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    /// Encodes `self`.
    fn to_wire(self) -> Self::Bytes;

    /// Decodes a value from its wire form.
    fn from_wire(bytes: Self::Bytes) -> Self;
}

macro_rules! big_endian_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl WireScalar for $t {
                const WIDTH: usize = core::mem::size_of::<$t>();
                type Bytes = [u8; core::mem::size_of::<$t>()];

                #[inline(always)]
                fn to_wire(self) -> Self::Bytes {
                    self.to_be_bytes()
                }

                #[inline(always)]
                fn from_wire(bytes: Self::Bytes) -> Self {
                    <$t>::from_be_bytes(bytes)
                }
            }
        )*
    };
}

// For f32/f64, to_be_bytes/from_be_bytes go through to_bits/from_bits, so NaN payloads and the
// sign of zero survive.
big_endian_scalar!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

impl WireScalar for bool {
    const WIDTH: usize = 1;
    type Bytes = [u8; 1];

    #[inline(always)]
    fn to_wire(self) -> Self::Bytes {
        [if self { 0xff } else { 0x00 }]
    }

    #[inline(always)]
    fn from_wire(bytes: Self::Bytes) -> Self {
        bytes[0] != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_match_encodings() {
        assert_eq!(<i8 as WireScalar>::WIDTH, 1);
        assert_eq!(<u16 as WireScalar>::WIDTH, 2);
        assert_eq!(<i32 as WireScalar>::WIDTH, 4);
        assert_eq!(<u64 as WireScalar>::WIDTH, 8);
        assert_eq!(<f32 as WireScalar>::WIDTH, 4);
        assert_eq!(<f64 as WireScalar>::WIDTH, 8);
        assert_eq!(<bool as WireScalar>::WIDTH, 1);
        assert_eq!(0xabcd9876u32.to_wire().as_ref().len(), 4);
    }

    #[test]
    fn signed_values_are_twos_complement() {
        assert_eq!((-2i16).to_wire(), [0xff, 0xfe]);
        assert_eq!(i32::from_wire([0x80, 0, 0, 0]), i32::MIN);
        assert_eq!(i8::from_wire([0x88]), -120);
    }

    #[test]
    fn bool_decode_is_lenient() {
        assert!(!bool::from_wire([0x00]));
        for b in 1..=0xffu8 {
            assert!(bool::from_wire([b]), "byte {b:#04x}");
        }
    }
}
