//! Lexical checks applied to trimmed answers before they are parsed.

/// True when `s` consists of one or more ASCII digits.
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|ch| ch.is_ascii_digit())
}

/// True when `s` is the string form of an integer: an optional leading `-`
/// followed by digits.
pub fn is_int_string(s: &str) -> bool {
    is_digits(strip_sign(s))
}

/// True when `s` is a decimal: an optional leading `-`, digits and at most
/// one `.` anywhere among them.
pub fn is_decimal_string(s: &str) -> bool {
    let unsigned = strip_sign(s);
    match unsigned.find('.') {
        Some(i) => is_digits(&format!("{}{}", &unsigned[..i], &unsigned[i + 1..])),
        None => is_digits(unsigned),
    }
}

fn strip_sign(s: &str) -> &str {
    s.strip_prefix('-').unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_digits() {
        assert!(is_digits("0"));
        assert!(is_digits("0123456789"));
        assert!(!is_digits(""));
        assert!(!is_digits("12a"));
        assert!(!is_digits(" 1"));
        assert!(!is_digits("-1"));
        assert!(!is_digits("١٢"));
    }

    #[test]
    fn test_is_int_string() {
        assert!(is_int_string("123"));
        assert!(is_int_string("-5"));
        assert!(is_int_string("007"));
        assert!(!is_int_string("-"));
        assert!(!is_int_string(""));
        assert!(!is_int_string("12a"));
        assert!(!is_int_string("1-2"));
        assert!(!is_int_string("--1"));
        assert!(!is_int_string("+1"));
        assert!(!is_int_string("1.0"));
    }

    #[test]
    fn test_is_decimal_string() {
        assert!(is_decimal_string("3.14"));
        assert!(is_decimal_string("-0.5"));
        assert!(is_decimal_string("5"));
        assert!(is_decimal_string(".5"));
        assert!(is_decimal_string("5."));
        assert!(is_decimal_string("-.5"));
        assert!(!is_decimal_string("."));
        assert!(!is_decimal_string("-."));
        assert!(!is_decimal_string("-"));
        assert!(!is_decimal_string(""));
        assert!(!is_decimal_string("1.2.3"));
        assert!(!is_decimal_string("1..2"));
        assert!(!is_decimal_string("1e5"));
        assert!(!is_decimal_string("1-.2"));
    }

    #[test]
    fn test_classifiers_are_pure() {
        for s in ["", "-", "12", "-1.5", "x"] {
            assert_eq!(is_int_string(s), is_int_string(s));
            assert_eq!(is_decimal_string(s), is_decimal_string(s));
        }
    }
}
