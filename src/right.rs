//! Right-grouped VLQ ("RVLQ"), the classic streaming form used for MIDI delta-times.
//!
//! Grouping starts at the least-significant bit, zero groups are dropped from the
//! most-significant side, and groups are written in big-endian order:
//!
//! ```text
//! value:   [partial] ... [0000000] [0000000] [abcdefg] [abcdefg]
//! encoded: highest retained group first, group 0 last (terminator)
//! ```
//!
//! A reader does not need to know the width up front: it shifts left and ORs in
//! seven bits per byte until the terminator.

use crate::width::{self, Width, GROUP_BITS, GROUP_MASK};
use crate::Error;

/// Bytes needed to encode `value`: one for anything up to `0x7f`, then one more per
/// seven significant bits.
pub fn encoded_size<T: Width>(value: T) -> usize {
    width::groups_for(T::BITS - value.leading_zeros())
}

/// Encode `value` into the front of `buf`, returning the number of bytes written.
///
/// Fails with [`Error::InsufficientCapacity`] when `buf` is shorter than
/// [`encoded_size`]; in that case `buf` is not modified.
///
/// ```
/// let mut buf = [0u8; 10];
/// let n = vlq::right::encode(0x4a_a61f_24f4u64, &mut buf).unwrap();
/// assert_eq!(&buf[..n], &[0x89, 0xaa, 0xb0, 0xfc, 0xc9, 0x74]);
/// ```
pub fn encode<T: Width>(value: T, buf: &mut [u8]) -> Result<usize, Error> {
    let size = encoded_size(value);
    let out = width::reserve::<T>(buf, size)?;
    width::write_groups(out, |index| width::right_group(value, index));
    Ok(size)
}

/// Decode one value from the front of `buf` into `acc`.
///
/// Each byte shifts the accumulator up one group and ORs in its seven data bits.
/// Returns the number of bytes consumed, up to and including the terminator.
/// Sequences longer than [`Width::MAX_ENCODED_LEN`] are not rejected; the excess high
/// bits are shifted out of the accumulator.
///
/// If `buf` ends before a terminator, returns [`Error::Unterminated`] with `acc`
/// holding the partial value: call again with the same `acc` and the following bytes.
/// Start each new value with `acc` at zero.
///
/// ```
/// let mut value = 0u64;
/// assert_eq!(vlq::right::decode(&mut value, &[0x86, 0xd2, 0x17]), Ok(3));
/// assert_eq!(value, 0x1a917);
/// ```
pub fn decode<T: Width>(acc: &mut T, buf: &[u8]) -> Result<usize, Error> {
    width::decode_with(acc, buf, |acc, byte| {
        (acc << GROUP_BITS) | T::from_byte(byte & GROUP_MASK)
    })
}
