use crate::fixed::FixedLayout;
use crate::{WireScalar, WriteError};
use half::f16;
use std::io::Write;

pub type Result<T> = core::result::Result<T, WriteError>;

/// Encodes binary values in the format read by [`ReadStream`](crate::ReadStream).
///
/// Values are appended to the sink in call order. Each successful write is visible in the sink
/// immediately; nothing is buffered by the stream itself.
#[derive(Debug)]
pub struct WriteStream<W = Vec<u8>> {
    out: W,
    written: usize,
}

impl<W: Write> WriteStream<W> {
    /// Creates a stream that appends to an existing sink. [`Self::len`] counts only the bytes
    /// written through the stream, not anything already in `out`; the same goes for
    /// `as_bytes` and `snapshot` on a `Vec<u8>` sink.
    pub fn wrap(out: W) -> Self {
        Self { out, written: 0 }
    }

    /// Extracts the inner sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Accesses the inner sink
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Number of bytes written through this stream.
    pub fn len(&self) -> usize {
        self.written
    }

    /// Returns `true` if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.written == 0
    }

    /// Writes `bytes` to the output verbatim, with no length prefix.
    ///
    /// A `Vec<u8>` sink always accepts the whole write. Other sinks may fail partway through, in
    /// which case some of `bytes` can already be in the sink even though [`Self::len`] is not
    /// advanced. Discard the stream after a `WriteError`.
    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        if let Err(err) = self.out.write_all(bytes) {
            log::trace!("sink rejected {}-byte write: {err}", bytes.len());
            return Err(WriteError::Sink(err));
        }
        self.written += bytes.len();
        Ok(())
    }

    /// Writes a small, fixed-size array of bytes.
    pub fn write_array<const N: usize>(&mut self, value: [u8; N]) -> Result<()> {
        self.write_raw(&value)
    }

    /// Writes any [`WireScalar`] type.
    #[inline(always)]
    pub fn write<T: WireScalar>(&mut self, value: T) -> Result<()> {
        self.write_raw(value.to_wire().as_ref())
    }

    /// Writes a single `u8` value
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write(value)
    }

    /// Writes a single `i8` value
    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.write(value)
    }

    /// Writes a single `u16` value, big-endian
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.write(value)
    }

    /// Writes a single `u32` value, big-endian
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write(value)
    }

    /// Writes a single `u64` value, big-endian
    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        self.write(value)
    }

    /// Writes a single `i16` value, big-endian
    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        self.write(value)
    }

    /// Writes a single `i32` value, big-endian
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.write(value)
    }

    /// Writes a single `i64` value, big-endian
    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        self.write(value)
    }

    /// Writes an `f32` value using the big-endian form of its IEEE-754 bit pattern. NaN payloads
    /// are not canonicalized.
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        self.write(value)
    }

    /// Writes an `f64` value using the big-endian form of its IEEE-754 bit pattern. NaN payloads
    /// are not canonicalized.
    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        self.write(value)
    }

    /// Writes an `f16` value as its 2-byte host-order bit pattern, through the same path as
    /// [`Self::write_fixed`].
    pub fn write_f16(&mut self, value: f16) -> Result<()> {
        self.write_fixed(&value)
    }

    /// Writes a `bool` value. True is encoded as 0xFF. False is encoded as 0.
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write(value)
    }

    /// Writes the raw in-memory image of a [`FixedLayout`] value, `T::SIZE` bytes, in host byte
    /// order.
    pub fn write_fixed<T: FixedLayout>(&mut self, value: &T) -> Result<()> {
        self.write_raw(value.as_bytes())
    }
}

impl WriteStream<Vec<u8>> {
    /// Creates a new `WriteStream` over a `Vec<u8>`
    pub fn new() -> Self {
        Self::wrap(Vec::new())
    }

    /// Creates a new `WriteStream` over a `Vec<u8>` with the given capacity.
    pub fn with_capacity(len: usize) -> Self {
        Self::wrap(Vec::with_capacity(len))
    }

    /// The bytes written through this stream so far. Bytes the `Vec` held before it was
    /// wrapped are not included; `into_inner` returns those too.
    pub fn as_bytes(&self) -> &[u8] {
        &self.out[self.out.len() - self.written..]
    }

    /// Returns a copy of [`Self::as_bytes`]. The stream is left as it was and can keep accepting
    /// writes.
    pub fn snapshot(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl Default for WriteStream<Vec<u8>> {
    fn default() -> Self {
        Self::new()
    }
}
