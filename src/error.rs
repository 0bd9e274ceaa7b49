use thiserror::Error;

/// Error type for `ReadStream`
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum ReadError {
    /// A `read_*` method reached the end of the input data before it could read the whole value.
    ///
    /// The stream position is not advanced by a read that fails this way. Callers should still
    /// treat the stream as unusable, since the input is truncated.
    #[error("needed {needed} bytes but only {available} remain")]
    NeedsMoreData {
        /// Number of bytes the read required.
        needed: usize,
        /// Number of bytes that were left in the stream.
        available: usize,
    },

    /// A fixed-layout read found fewer bytes than the size of the target type.
    #[error(transparent)]
    Size(#[from] SizeError),
}

/// A buffer is smaller than the fixed-layout type being decoded from it.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
#[error("buffer of {available} bytes is too small for a {needed}-byte value")]
pub struct SizeError {
    /// Size of the target type, in bytes.
    pub needed: usize,
    /// Length of the buffer that was supplied.
    pub available: usize,
}

/// Error type for `WriteStream`.
///
/// Writes into a `Vec<u8>` never fail. This is only returned when a stream wraps some other
/// [`std::io::Write`] sink that rejects data.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The sink did not accept all of the bytes. Its contents are unspecified afterwards.
    #[error("sink rejected write")]
    Sink(#[from] std::io::Error),
}
