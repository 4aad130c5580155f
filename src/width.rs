//! Bit-group arithmetic shared by both orientations.
//!
//! A `W`-bit value splits into `W / 7` full 7-bit groups plus one partial group of
//! `W % 7` bits. Which end the partial group sits on depends on the orientation:
//!
//! - left-grouped: groups are cut from the MSB, so the partial group holds the
//!   value's lowest bits (left-aligned inside its 7-bit slot)
//! - right-grouped: groups are cut from the LSB, so the partial group holds the
//!   value's highest bits
//!
//! Everything here is generic over [`Width`]; the per-type impls are one macro line each.

use std::fmt::Debug;
use std::ops::{BitOr, Shl, Shr};

use crate::Error;

/// Continuation flag: set on every encoded byte except the terminal one.
pub const CONTINUATION: u8 = 0x80;

/// Mask for the 7 data bits of an encoded byte.
pub const GROUP_MASK: u8 = 0x7f;

/// Bits carried by one group.
pub const GROUP_BITS: u32 = 7;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width unsigned integer that can be VLQ-encoded.
///
/// Sealed: implemented for `u32`, `u64`, and (with the `u128` feature) `u128`.
pub trait Width:
    sealed::Sealed
    + Copy
    + Eq
    + Default
    + Debug
    + Send
    + Sync
    + 'static
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + BitOr<Output = Self>
{
    /// Total bits in the type (`W`).
    const BITS: u32;

    /// Number of full 7-bit groups (`W / 7`).
    const GROUP_COUNT: u32 = Self::BITS / GROUP_BITS;

    /// Bits left over in the partial group (`W % 7`).
    const EXTRA_BITS: u32 = Self::BITS % GROUP_BITS;

    /// Longest possible encoding of a value of this width, in bytes.
    const MAX_ENCODED_LEN: usize = Self::BITS.div_ceil(GROUP_BITS) as usize;

    /// Zero; also the starting accumulator for a fresh decode.
    const ZERO: Self;

    /// Widen a byte.
    fn from_byte(byte: u8) -> Self;

    /// Truncate to the low 8 bits.
    fn low_byte(self) -> u8;

    /// Count of zero bits above the highest set bit (`W` for zero).
    fn leading_zeros(self) -> u32;

    /// Count of zero bits below the lowest set bit (`W` for zero).
    fn trailing_zeros(self) -> u32;
}

macro_rules! impl_width {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Width for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;

                #[inline]
                fn from_byte(byte: u8) -> Self {
                    byte as $t
                }

                #[inline]
                fn low_byte(self) -> u8 {
                    self as u8
                }

                #[inline]
                fn leading_zeros(self) -> u32 {
                    <$t>::leading_zeros(self)
                }

                #[inline]
                fn trailing_zeros(self) -> u32 {
                    <$t>::trailing_zeros(self)
                }
            }
        )*
    };
}

impl_width!(u32, u64);

#[cfg(feature = "u128")]
impl_width!(u128);

/// Groups needed to carry `significant_bits` bits; never less than one.
#[inline]
pub(crate) fn groups_for(significant_bits: u32) -> usize {
    significant_bits.div_ceil(GROUP_BITS).max(1) as usize
}

/// The `index`-th group counted from the MSB side.
///
/// `index == GROUP_COUNT` yields the partial group: the value's low `EXTRA_BITS`
/// bits, left-aligned in the 7-bit slot.
#[inline]
pub(crate) fn left_group<T: Width>(value: T, index: u32) -> u8 {
    debug_assert!(index * GROUP_BITS < T::BITS);
    ((value << (index * GROUP_BITS)) >> (T::BITS - GROUP_BITS)).low_byte() & GROUP_MASK
}

/// The `index`-th group counted from the LSB side.
///
/// `index == GROUP_COUNT` yields the partial group holding the top `EXTRA_BITS` bits.
#[inline]
pub(crate) fn right_group<T: Width>(value: T, index: u32) -> u8 {
    debug_assert!(index * GROUP_BITS < T::BITS);
    (value >> (index * GROUP_BITS)).low_byte() & GROUP_MASK
}

/// Borrow exactly `needed` bytes of `buf`, or refuse without touching it.
pub(crate) fn reserve<T: Width>(buf: &mut [u8], needed: usize) -> Result<&mut [u8], Error> {
    let capacity = buf.len();
    buf.get_mut(..needed).ok_or_else(|| {
        tracing::trace!(bits = T::BITS, needed, capacity, "vlq encode refused: buffer too small");
        Error::InsufficientCapacity { needed, capacity }
    })
}

/// Fill `out` with groups `out.len() - 1` down to `0`, flagging all but the last byte.
pub(crate) fn write_groups(out: &mut [u8], group: impl Fn(u32) -> u8) {
    let last = out.len().saturating_sub(1);
    for (i, slot) in out.iter_mut().enumerate() {
        let g = group((last - i) as u32);
        *slot = if i < last { g | CONTINUATION } else { g };
    }
}

/// Feed bytes through `step` until one arrives without the continuation flag.
///
/// The accumulator is written back on every byte, so an unterminated run leaves it
/// ready for the next buffer.
pub(crate) fn decode_with<T: Width>(
    acc: &mut T,
    buf: &[u8],
    step: impl Fn(T, u8) -> T,
) -> Result<usize, Error> {
    for (i, &byte) in buf.iter().enumerate() {
        *acc = step(*acc, byte);
        if byte & CONTINUATION == 0 {
            return Ok(i + 1);
        }
    }
    tracing::trace!(
        bits = T::BITS,
        consumed = buf.len(),
        "vlq decode ran out of input before terminator"
    );
    Err(Error::Unterminated {
        consumed: buf.len(),
    })
}
