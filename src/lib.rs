//! Reads and writes byte buffers using a canonical, fixed-width binary encoding.
//!
//! Every multi-byte integer and float written by [`WriteStream`] is stored in big-endian byte
//! order, so a buffer produced on one host decodes identically on any other. Booleans occupy one
//! byte (`0xFF` or `0x00`), and raw byte runs are stored verbatim with no length prefix.
//!
//! There is one deliberate exception to the byte-order rule. Values that go through the
//! fixed-layout path ([`FixedLayout`], [`WriteStream::write_fixed`], [`ReadStream::read_fixed`])
//! and half-precision floats are copied as their in-memory image, in host byte order. Such data
//! only round-trips between hosts that share the same endianness. Changing this would change the
//! wire format, so it is kept as-is.
//!
//! ```
//! use datastream_io::{ReadStream, WriteStream};
//!
//! let mut w = WriteStream::new();
//! w.write_u16(0x1234).unwrap();
//! w.write_bool(true).unwrap();
//! assert_eq!(w.as_bytes(), [0x12, 0x34, 0xff]);
//!
//! let bytes = w.snapshot();
//! let mut r = ReadStream::new(&bytes);
//! assert_eq!(r.read_u16(), Ok(0x1234));
//! assert_eq!(r.read_bool(), Ok(true));
//! assert!(!r.has_bytes_available());
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

mod error;
pub mod fixed;
pub mod geometry;
mod reader;
mod scalar;
mod writer;


pub use error::{ReadError, SizeError, WriteError};
pub use fixed::FixedLayout;
pub use half::f16;
pub use reader::ReadStream;
pub use scalar::WireScalar;
pub use writer::WriteStream;
