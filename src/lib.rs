//! # vlq
//!
//! Variable-length quantities for fixed-width unsigned integers: each byte carries
//! seven data bits plus a continuation flag in bit 7 (set = more bytes follow).
//!
//! Two orientations share the byte format but group bits from opposite ends:
//!
//! - [`left`]: groups cut from the MSB, trailing zero groups dropped, written
//!   lowest-retained-group first. Cheap for values whose bits sit high.
//! - [`right`]: groups cut from the LSB, leading zero groups dropped, written
//!   highest-group first. The familiar streaming VLQ (MIDI delta-times).
//!
//! Both expose the same three functions, generic over [`Width`] (`u32`, `u64`, and
//! `u128` behind the default `u128` feature):
//!
//! - `encoded_size(value) -> usize`
//! - `encode(value, &mut buf) -> Result<usize, Error>`
//! - `decode(&mut acc, &buf) -> Result<usize, Error>`
//!
//! ## Scope (deliberate)
//!
//! - No allocation, no retained state. Buffers and accumulators belong to the caller.
//! - Decoding can resume across buffer boundaries: an unterminated run reports
//!   [`Error::Unterminated`] and leaves the accumulator ready for the next chunk.
//!
//! ## Non-goals
//!
//! - Signed integers (no zigzag)
//! - `Read`/`Write` stream adapters
//!
//! ```
//! use vlq::{right, Error};
//!
//! let mut buf = [0u8; 4];
//! let n = right::encode(2_000_000u32, &mut buf)?;
//! assert_eq!(&buf[..n], &[0xfa, 0x89, 0x00]);
//!
//! // Split across two reads.
//! let mut value = 0u32;
//! assert_eq!(right::decode(&mut value, &buf[..2]), Err(Error::Unterminated { consumed: 2 }));
//! assert_eq!(right::decode(&mut value, &buf[2..n]), Ok(1));
//! assert_eq!(value, 2_000_000);
//! # Ok::<(), Error>(())
//! ```

#![warn(missing_docs)]

pub mod left;
pub mod right;
pub mod width;

pub use width::Width;

/// Errors returned by `vlq` codecs.
///
/// Neither is fatal: retry with a larger buffer or more input.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The output buffer cannot hold the whole encoding; nothing was written.
    #[error("buffer too small for vlq: need {needed} bytes, have {capacity}")]
    InsufficientCapacity {
        /// Bytes the encoding requires.
        needed: usize,
        /// Bytes available in the buffer.
        capacity: usize,
    },
    /// Input ended before a byte with the continuation bit clear.
    ///
    /// The accumulator holds the partial value; decode the next chunk into it.
    #[error("vlq not terminated after {consumed} bytes")]
    Unterminated {
        /// Bytes consumed (always the whole input).
        consumed: usize,
    },
}

/// Bit-grouping orientation, for callers that pick the wire format at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Groups from the MSB, little-endian group order ([`left`]).
    Left,
    /// Groups from the LSB, big-endian group order ([`right`]).
    Right,
}

impl Orientation {
    /// Bytes needed to encode `value` in this orientation.
    pub fn encoded_size<T: Width>(self, value: T) -> usize {
        match self {
            Orientation::Left => left::encoded_size(value),
            Orientation::Right => right::encoded_size(value),
        }
    }

    /// Encode `value` into the front of `buf`. See [`left::encode`] / [`right::encode`].
    pub fn encode<T: Width>(self, value: T, buf: &mut [u8]) -> Result<usize, Error> {
        match self {
            Orientation::Left => left::encode(value, buf),
            Orientation::Right => right::encode(value, buf),
        }
    }

    /// Decode one value from the front of `buf` into `acc`.
    /// See [`left::decode`] / [`right::decode`].
    pub fn decode<T: Width>(self, acc: &mut T, buf: &[u8]) -> Result<usize, Error> {
        match self {
            Orientation::Left => left::decode(acc, buf),
            Orientation::Right => right::decode(acc, buf),
        }
    }
}
