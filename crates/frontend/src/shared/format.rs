//! Number formatting for monetary display.
//!
//! Amounts are whole currency units; grouping uses a non-breaking space so
//! values never wrap mid-number.

/// Group an integer amount into thousands: 12345 -> "12 345"
pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(12345), "12\u{00a0}345");
        assert_eq!(format_thousands(1234567), "1\u{00a0}234\u{00a0}567");
    }

    #[test]
    fn test_negative_amounts_keep_the_sign() {
        assert_eq!(format_thousands(-12345), "-12\u{00a0}345");
    }
}
