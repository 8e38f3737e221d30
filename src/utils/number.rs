//! Loose integer parsing for query and path values.

/// Reads the leading integer of `raw`, ignoring whatever follows it.
///
/// Leading whitespace and one optional `+`/`-` sign are accepted, so
/// `"30abc"` is 30 and `"25.9"` is 25. Returns `None` when no digit follows
/// the sign. Values outside the `i32` range saturate.
pub fn parse_int_prefix(raw: &str) -> Option<i32> {
    let rest = raw.trim_start();
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = (value * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1);
    }
    if !seen {
        return None;
    }

    let value = if negative { -value } else { value };
    Some(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reads_leading_integer() {
        assert_eq!(parse_int_prefix("30"), Some(30));
        assert_eq!(parse_int_prefix("30abc"), Some(30));
        assert_eq!(parse_int_prefix("25.9"), Some(25));
        assert_eq!(parse_int_prefix("  -4x"), Some(-4));
        assert_eq!(parse_int_prefix("+7"), Some(7));
        assert_eq!(parse_int_prefix("007"), Some(7));
    }

    #[test]
    fn test_no_leading_digits() {
        for raw in ["", "   ", "abc", "-", "+", "x30", "- 3", ".5"] {
            assert_eq!(parse_int_prefix(raw), None, "input {:?}", raw);
        }
    }

    #[test]
    fn test_saturates_out_of_range() {
        assert_eq!(parse_int_prefix("99999999999999999999"), Some(i32::MAX));
        assert_eq!(parse_int_prefix("-99999999999999999999"), Some(i32::MIN));
        assert_eq!(parse_int_prefix("-2147483648"), Some(i32::MIN));
    }

    proptest! {
        #[test]
        fn prop_matches_std_parse_with_suffix(n in any::<i32>(), suffix in "[a-z. ]{0,4}") {
            let raw = format!("{}{}", n, suffix);
            prop_assert_eq!(parse_int_prefix(&raw), Some(n));
        }
    }
}
