//! Unsigned integer to decimal ASCII, without `core::fmt`

/// Enough digits for `u64::MAX`
const SCRATCH_LEN: usize = 20;

/// Write `z` as decimal ASCII into `buf`, followed by a NUL.
///
/// Returns the written text (without the NUL). An empty `buf` yields `None`
/// and nothing is written. When `buf` is too small the most significant
/// `buf.len() - 1` digits are kept, so a one-byte buffer holds only the NUL.
pub fn format_decimal(buf: &mut [u8], mut z: u64) -> Option<&[u8]> {
    if buf.is_empty() {
        return None;
    }

    let mut scratch = [0u8; SCRATCH_LEN];
    let mut digits = 0;

    // Least significant first; zero still produces one digit
    loop {
        scratch[digits] = b'0' + (z % 10) as u8;
        digits += 1;
        z /= 10;
        if z == 0 {
            break;
        }
    }

    let len = digits.min(buf.len() - 1);
    for (dst, src) in buf[..len].iter_mut().zip(scratch[..digits].iter().rev()) {
        *dst = *src;
    }
    buf[len] = 0;

    Some(&buf[..len])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &[u8]) -> u64 {
        core::str::from_utf8(text).unwrap().parse().unwrap()
    }

    #[test]
    fn zero_is_single_digit() {
        let mut buf = [0xAAu8; 8];
        assert_eq!(format_decimal(&mut buf, 0), Some(&b"0"[..]));
        assert_eq!(&buf[..2], b"0\0");
    }

    #[test]
    fn parses_back_to_same_value() {
        let values = [
            1,
            9,
            10,
            42,
            99,
            100,
            12_345,
            u64::from(u32::MAX),
            1_000_000_000_000,
            u64::MAX - 1,
            u64::MAX,
        ];
        for z in values {
            let mut buf = [0u8; 32];
            let text = format_decimal(&mut buf, z).unwrap();
            assert_eq!(parse(text), z);
            assert_eq!(buf[text_len(&buf)], 0);
        }
    }

    #[test]
    fn every_digit_count_boundary_round_trips() {
        let mut power: u64 = 1;
        loop {
            for z in [power - 1, power, power + 1] {
                let mut buf = [0u8; 21];
                let text = format_decimal(&mut buf, z).unwrap();
                assert_eq!(parse(text), z);
                assert_eq!(text, z.to_string().as_bytes());
            }
            match power.checked_mul(10) {
                Some(next) => power = next,
                None => break,
            }
        }

        for z in [u64::MAX - 1, u64::MAX] {
            let mut buf = [0u8; 21];
            assert_eq!(parse(format_decimal(&mut buf, z).unwrap()), z);
        }
    }

    fn text_len(buf: &[u8]) -> usize {
        buf.iter().position(|&b| b == 0).unwrap()
    }

    #[test]
    fn max_value_fills_scratch() {
        let mut buf = [0u8; 21];
        let text = format_decimal(&mut buf, u64::MAX).unwrap();
        assert_eq!(text, b"18446744073709551615");
        assert_eq!(buf[20], 0);
    }

    #[test]
    fn capacity_one_is_empty_string() {
        let mut buf = [0xAAu8; 1];
        assert_eq!(format_decimal(&mut buf, 12345), Some(&b""[..]));
        assert_eq!(buf, [0]);
    }

    #[test]
    fn empty_buffer_is_rejected() {
        let mut buf: [u8; 0] = [];
        assert_eq!(format_decimal(&mut buf, 7), None);
    }

    #[test]
    fn truncates_to_leading_digits() {
        let mut buf = [0xAAu8; 4];
        assert_eq!(format_decimal(&mut buf, 123_456), Some(&b"123"[..]));
        assert_eq!(buf, *b"123\0");
    }

    #[test]
    fn exact_fit_keeps_every_digit() {
        let mut buf = [0xAAu8; 6];
        assert_eq!(format_decimal(&mut buf, 54_321), Some(&b"54321"[..]));
        assert_eq!(buf[5], 0);
    }
}
