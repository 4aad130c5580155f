//! Left-grouped VLQ ("LVLQ").
//!
//! Grouping starts at the most-significant bit, zero groups are dropped from the
//! least-significant side, and groups are written in little-endian order:
//!
//! ```text
//! value:   [abcdefg] [abcdefg] [0000000] [0000000] ... [partial]
//! encoded: lowest retained group first, the top group last (terminator)
//! ```
//!
//! This suits values whose information sits in the high bits (e.g. fractions or
//! left-justified mantissas): `0x8000_0000_0000_0000u64` is a single byte.

use crate::width::{self, Width, GROUP_BITS};
use crate::Error;

/// Bytes needed to encode `value`.
///
/// This is the number of 7-bit groups, counted from the MSB, up to and including the
/// last non-zero one. Zero needs one byte.
pub fn encoded_size<T: Width>(value: T) -> usize {
    width::groups_for(T::BITS - value.trailing_zeros())
}

/// Encode `value` into the front of `buf`, returning the number of bytes written.
///
/// Fails with [`Error::InsufficientCapacity`] when `buf` is shorter than
/// [`encoded_size`]; in that case `buf` is not modified.
///
/// ```
/// let mut buf = [0u8; 10];
/// let n = vlq::left::encode(0x8000_0000_0000_0000u64, &mut buf).unwrap();
/// assert_eq!(&buf[..n], &[0x40]);
/// ```
pub fn encode<T: Width>(value: T, buf: &mut [u8]) -> Result<usize, Error> {
    let size = encoded_size(value);
    let out = width::reserve::<T>(buf, size)?;
    width::write_groups(out, |index| width::left_group(value, index));
    Ok(size)
}

/// Decode one value from the front of `buf` into `acc`.
///
/// Each byte shifts the accumulator down one group and inserts its bits at the top;
/// the continuation flag falls off past bit `W - 1`. Returns the number of bytes
/// consumed, up to and including the terminator.
///
/// If `buf` ends before a terminator, returns [`Error::Unterminated`] with `acc`
/// holding the partial value: call again with the same `acc` and the following bytes.
/// Start each new value with `acc` at zero.
pub fn decode<T: Width>(acc: &mut T, buf: &[u8]) -> Result<usize, Error> {
    let shift = T::BITS - GROUP_BITS;
    width::decode_with(acc, buf, |acc, byte| {
        (acc >> GROUP_BITS) | (T::from_byte(byte) << shift)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn check<T: Width>(value: T, expected: &[u8]) {
        assert_eq!(encoded_size(value), expected.len(), "size of {value:?}");

        let mut buf = [0u8; 20];
        let n = encode(value, &mut buf).unwrap();
        assert_eq!(&buf[..n], expected, "encoding of {value:?}");

        let mut acc = T::ZERO;
        assert_eq!(decode(&mut acc, expected), Ok(n));
        assert_eq!(acc, value);
    }

    #[test]
    fn vectors_u64() {
        check(0u64, &[0x00]);
        check(
            1u64,
            &[0xc0, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00],
        );
        check(2u64, &[0x81, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00]);
        check(0x8000_0000_0000_0000u64, &[0x40]);
        check(0x4000_0000_0000_0000u64, &[0x20]);
        check(0x2000_0000_0000_0000u64, &[0x10]);
        check(0x1000_0000_0000_0000u64, &[0x08]);
        check(
            0x1234_5678_1234_5678u64,
            &[0xbc, 0xd6, 0xe8, 0xc8, 0xc0, 0xe7, 0x8a, 0x8d, 0x09],
        );
    }

    #[test]
    fn vectors_u32() {
        check(0u32, &[0x00]);
        check(0x1940_0000u32, &[0xd0, 0x0c]);
        check(0xb549_a000u32, &[0xb4, 0xd2, 0x5a]);
        check(1u32, &[0x88, 0x80, 0x80, 0x80, 0x00]);
    }

    #[cfg(feature = "u128")]
    #[test]
    fn vectors_u128() {
        check(0u128, &[0x00]);
        check(1u128 << 127, &[0x40]);
        // Two extra bits: the lowest bit lands at slot bit 5.
        let mut expected = vec![0xa0];
        expected.extend(std::iter::repeat(0x80).take(17));
        expected.push(0x00);
        check(1u128, &expected);
    }

    #[test]
    fn decode_continues_from_accumulator() {
        let mut acc = 0x80u32;
        assert_eq!(decode(&mut acc, &[0x01]), Ok(1));
        assert_eq!(acc, 0x0200_0001);

        let mut acc = 0x80u64;
        assert_eq!(decode(&mut acc, &[0x01]), Ok(1));
        assert_eq!(acc, 0x0200_0000_0000_0001);
    }

    #[test]
    fn decode_stops_at_terminator() {
        let mut acc = 0u64;
        assert_eq!(decode(&mut acc, &[0x40, 0xff, 0xff]), Ok(1));
        assert_eq!(acc, 0x8000_0000_0000_0000);
    }

    #[test]
    fn decode_unterminated_reports_consumed() {
        let mut acc = 0u64;
        assert_eq!(
            decode(&mut acc, &[0xc0, 0x80]),
            Err(Error::Unterminated { consumed: 2 })
        );
        assert_eq!(decode(&mut 0u32, &[]), Err(Error::Unterminated { consumed: 0 }));
    }

    #[test]
    fn encode_refuses_short_buffer() {
        let mut buf = [0xeeu8; 9];
        assert_eq!(
            encode(1u64, &mut buf),
            Err(Error::InsufficientCapacity {
                needed: 10,
                capacity: 9
            })
        );
        assert_eq!(buf, [0xee; 9]);
        assert_eq!(
            encode(0u32, &mut []),
            Err(Error::InsufficientCapacity {
                needed: 1,
                capacity: 0
            })
        );
    }

    #[test]
    fn only_terminal_byte_lacks_continuation() {
        let mut buf = [0u8; 10];
        let n = encode(0x0123_4567_89ab_cdefu64, &mut buf).unwrap();
        let (last, rest) = buf[..n].split_last().unwrap();
        assert!(rest.iter().all(|b| b & width::CONTINUATION != 0));
        assert_eq!(last & width::CONTINUATION, 0);
    }

    proptest! {
        #[test]
        fn roundtrip_u32(v in any::<u32>()) {
            let mut buf = [0u8; u32::MAX_ENCODED_LEN];
            let n = encode(v, &mut buf).unwrap();
            prop_assert_eq!(n, encoded_size(v));
            let mut acc = 0u32;
            prop_assert_eq!(decode(&mut acc, &buf[..n]), Ok(n));
            prop_assert_eq!(acc, v);
        }

        #[test]
        fn roundtrip_u64(v in any::<u64>()) {
            let mut buf = [0u8; u64::MAX_ENCODED_LEN];
            let n = encode(v, &mut buf).unwrap();
            prop_assert_eq!(n, encoded_size(v));
            let mut acc = 0u64;
            prop_assert_eq!(decode(&mut acc, &buf[..n]), Ok(n));
            prop_assert_eq!(acc, v);
        }

        #[test]
        fn high_bits_only_stay_short(top in any::<u8>()) {
            // Anything confined to the top 7 bits is one byte.
            let v = (top as u64 & 0x7f) << 57;
            prop_assert_eq!(encoded_size(v), 1);
        }
    }
}
