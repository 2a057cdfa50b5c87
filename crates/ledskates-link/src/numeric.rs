//! Lenient decimal parsing for command values
//!
//! Values are parsed the way existing clients expect from a C `strtol`
//! with a 32-bit `long`: leading whitespace is skipped, an optional sign is
//! accepted, digits are consumed up to the first non-digit and the result
//! saturates at the 32-bit bounds. No digits yields 0.
//!
//! Callers narrow the result to the width they need with `as`, which gives
//! the same two's-complement truncation the wire format relies on.

/// Parse the leading decimal integer of `value`
#[allow(clippy::cast_possible_truncation)]
pub fn parse_long(value: &str) -> i32 {
    let bytes = value.trim_start_matches(is_c_space).as_bytes();

    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    let mut acc: i64 = 0;
    for &byte in digits.iter().take_while(|byte| byte.is_ascii_digit()) {
        acc = acc * 10 + i64::from(byte - b'0');
        // Past this point the result saturates either way
        if acc > i64::from(i32::MAX) + 1 {
            break;
        }
    }

    let signed = if negative { -acc } else { acc };
    signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Parse `value` as a 24-bit-capable unsigned integer
#[allow(clippy::cast_sign_loss)]
pub fn parse_u32(value: &str) -> u32 {
    parse_long(value) as u32
}

/// Parse `value` as an unsigned 16-bit integer, wrapping on overflow
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_u16(value: &str) -> u16 {
    parse_long(value) as u16
}

/// Parse `value` as an unsigned 8-bit integer, wrapping on overflow
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_u8(value: &str) -> u8 {
    parse_long(value) as u8
}

const fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_long("0"), 0);
        assert_eq!(parse_long("42"), 42);
        assert_eq!(parse_long("16777215"), 0xFF_FFFF);
    }

    #[test]
    fn stops_at_first_non_digit() {
        assert_eq!(parse_long("12abc"), 12);
        assert_eq!(parse_long("7.5"), 7);
        assert_eq!(parse_long("abc"), 0);
        assert_eq!(parse_long(""), 0);
        assert_eq!(parse_long("-"), 0);
    }

    #[test]
    fn skips_leading_whitespace_and_sign() {
        assert_eq!(parse_long("  \t15"), 15);
        assert_eq!(parse_long("+9"), 9);
        assert_eq!(parse_long("-9"), -9);
        assert_eq!(parse_long("- 9"), 0);
    }

    #[test]
    fn saturates_at_32_bit_bounds() {
        assert_eq!(parse_long("99999999999999999999"), i32::MAX);
        assert_eq!(parse_long("-99999999999999999999"), i32::MIN);
        assert_eq!(parse_long("2147483648"), i32::MAX);
        assert_eq!(parse_long("-2147483648"), i32::MIN);
    }

    #[test]
    fn narrowing_wraps() {
        assert_eq!(parse_u8("300"), 44);
        assert_eq!(parse_u8("256"), 0);
        assert_eq!(parse_u16("65537"), 1);
        assert_eq!(parse_u32("-1"), u32::MAX);
        assert_eq!(parse_u8("99999999999"), 255);
    }
}
