use crate::fixed::{decode_fixed, FixedLayout};
use crate::{ReadError, SizeError, WireScalar};
use half::f16;

pub type Result<T> = core::result::Result<T, ReadError>;

/// Reads values from a slice of bytes, in the encoding produced by [`WriteStream`].
///
/// The stream borrows its input and keeps a cursor into it. Each successful read advances the
/// cursor by exactly the number of bytes the value occupies; a read that fails leaves the cursor
/// where it was. The cursor never runs past the end of the input.
///
/// There is no length-prefixed string or sequence type. Variable-length data is framed by the
/// caller, typically by reading an explicit length and then calling [`Self::read_raw`].
///
/// [`WriteStream`]: crate::WriteStream
#[derive(Clone, Debug)]
pub struct ReadStream<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ReadStream<'a> {
    /// Constructor
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Total length of the input.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the input was empty to begin with.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes left to read.
    #[inline(always)]
    pub fn bytes_available(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns `true` if at least one byte is left to read.
    #[inline(always)]
    pub fn has_bytes_available(&self) -> bool {
        self.bytes_available() > 0
    }

    /// The unread part of the input.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Reads a slice of bytes whose length is `count`. This function returns a slice reference
    /// to the bytes; it does not copy them.
    pub fn read_raw(&mut self, count: usize) -> Result<&'a [u8]> {
        let available = self.bytes_available();
        if available < count {
            log::trace!("read of {count} bytes with only {available} remaining");
            return Err(ReadError::NeedsMoreData {
                needed: count,
                available,
            });
        }

        let start = self.pos;
        self.pos += count;
        Ok(&self.data[start..self.pos])
    }

    /// Reads `count` bytes and returns them as a `bstr::BStr`.
    #[cfg(feature = "bstr")]
    pub fn read_raw_bstr(&mut self, count: usize) -> Result<&'a bstr::BStr> {
        Ok(bstr::BStr::new(self.read_raw(count)?))
    }

    /// Reads a small array of bytes, with a constant length.
    #[inline(always)]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_raw(N)?);
        Ok(out)
    }

    /// Advances past `count` bytes without looking at them.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.read_raw(count).map(|_| ())
    }

    /// Reads any [`WireScalar`] type.
    #[inline(always)]
    pub fn read<T: WireScalar>(&mut self) -> Result<T> {
        let mut bytes = T::Bytes::default();
        bytes.as_mut().copy_from_slice(self.read_raw(T::WIDTH)?);
        Ok(T::from_wire(bytes))
    }

    /// Reads a single `u8` value.
    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read()
    }

    /// Reads a single `i8` value.
    #[inline(always)]
    pub fn read_i8(&mut self) -> Result<i8> {
        self.read()
    }

    /// Reads a `u16` in big-endian byte order.
    #[inline(always)]
    pub fn read_u16(&mut self) -> Result<u16> {
        self.read()
    }

    /// Reads a `u32` in big-endian byte order.
    #[inline(always)]
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read()
    }

    /// Reads a `u64` in big-endian byte order.
    #[inline(always)]
    pub fn read_u64(&mut self) -> Result<u64> {
        self.read()
    }

    /// Reads a `i16` in big-endian byte order.
    #[inline(always)]
    pub fn read_i16(&mut self) -> Result<i16> {
        self.read()
    }

    /// Reads a `i32` in big-endian byte order.
    #[inline(always)]
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read()
    }

    /// Reads a `i64` in big-endian byte order.
    #[inline(always)]
    pub fn read_i64(&mut self) -> Result<i64> {
        self.read()
    }

    /// Reads an `f32` from its big-endian IEEE-754 bit pattern. The bits are preserved exactly,
    /// including NaN payloads and the sign of zero.
    #[inline(always)]
    pub fn read_f32(&mut self) -> Result<f32> {
        self.read()
    }

    /// Reads an `f64` from its big-endian IEEE-754 bit pattern. The bits are preserved exactly,
    /// including NaN payloads and the sign of zero.
    #[inline(always)]
    pub fn read_f64(&mut self) -> Result<f64> {
        self.read()
    }

    /// Reads an `f16` from its 2-byte host-order bit pattern, through the same path as
    /// [`Self::read_fixed`].
    #[inline(always)]
    pub fn read_f16(&mut self) -> Result<f16> {
        self.read_fixed()
    }

    /// Reads a `bool`. Zero is `false`; every other byte value is `true`.
    #[inline(always)]
    pub fn read_bool(&mut self) -> Result<bool> {
        self.read()
    }

    /// Reads a [`FixedLayout`] value from its raw in-memory image. No byte swapping is done.
    ///
    /// Fails with [`ReadError::Size`] if fewer than `T::SIZE` bytes remain.
    pub fn read_fixed<T: FixedLayout>(&mut self) -> Result<T> {
        let available = self.bytes_available();
        if available < T::SIZE {
            log::trace!(
                "fixed-layout read needs {} bytes with only {available} remaining",
                T::SIZE
            );
            return Err(SizeError {
                needed: T::SIZE,
                available,
            }
            .into());
        }

        Ok(decode_fixed(self.read_raw(T::SIZE)?)?)
    }
}
