//! Number constants and the numeric conversions the reflection layer needs
//!
//! The `Number.is*` checks take a raw `f64`; callers decide whether a value
//! is a primitive number before asking. `parse_float` and `string_to_number`
//! follow the global `parseFloat` and `ToNumber(string)` grammars.

/// Number object with static properties and methods
pub struct NumberObject;

impl NumberObject {
    /// Number.MAX_SAFE_INTEGER
    pub const MAX_SAFE_INTEGER: f64 = 9007199254740991.0;

    /// Number.MIN_SAFE_INTEGER
    pub const MIN_SAFE_INTEGER: f64 = -9007199254740991.0;

    /// 2^53, the first integer a double cannot distinguish from its successor
    pub const TWO_POW_53: f64 = 9007199254740992.0;

    /// Number.isNaN(value)
    pub fn is_nan(value: f64) -> bool {
        value.is_nan()
    }

    /// Number.isFinite(value)
    pub fn is_finite(value: f64) -> bool {
        value.is_finite()
    }

    /// Number.isInteger(value)
    pub fn is_integer(value: f64) -> bool {
        value.is_finite() && value.trunc() == value
    }

    /// Number.isSafeInteger(value)
    pub fn is_safe_integer(value: f64) -> bool {
        Self::is_integer(value) && value.abs() <= Self::MAX_SAFE_INTEGER
    }

    /// Number.parseFloat(string) - same as global parseFloat
    ///
    /// Skips leading whitespace, then parses the longest prefix that forms a
    /// decimal literal (or `Infinity`). Anything without such a prefix is NaN.
    pub fn parse_float(s: &str) -> f64 {
        let trimmed = s.trim_start_matches(is_js_whitespace);
        let bytes = trimmed.as_bytes();
        let len = bytes.len();

        let mut end = 0;
        if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
            end = 1;
        }

        if trimmed[end..].starts_with("Infinity") {
            return if bytes.first() == Some(&b'-') {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
        }

        let mut int_digits = 0;
        while end < len && bytes[end].is_ascii_digit() {
            end += 1;
            int_digits += 1;
        }

        let mut frac_digits = 0;
        if end < len && bytes[end] == b'.' {
            let mut probe = end + 1;
            while probe < len && bytes[probe].is_ascii_digit() {
                probe += 1;
                frac_digits += 1;
            }
            if int_digits > 0 || frac_digits > 0 {
                end = probe;
            }
        }

        if int_digits == 0 && frac_digits == 0 {
            return f64::NAN;
        }

        if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
            let mut probe = end + 1;
            if probe < len && (bytes[probe] == b'+' || bytes[probe] == b'-') {
                probe += 1;
            }
            let exponent_start = probe;
            while probe < len && bytes[probe].is_ascii_digit() {
                probe += 1;
            }
            if probe > exponent_start {
                end = probe;
            }
        }

        trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
    }
}

/// WhiteSpace and LineTerminator code points as JavaScript defines them
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// ToNumber applied to a string
///
/// Unlike `parse_float`, the whole string (after trimming) must be a numeric
/// literal: `"12px"` is NaN, `""` is 0.
pub fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return radix_literal_to_number(&trimmed[2..], radix);
    }

    let is_decimal_literal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !is_decimal_literal {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Digits after a `0x`/`0o`/`0b` prefix. Signs are not allowed there, and
/// literals too long for `u128` are accumulated in floating point.
fn radix_literal_to_number(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return f64::NAN;
    }
    match u128::from_str_radix(digits, radix) {
        Ok(n) => n as f64,
        Err(_) => digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d)),
    }
}

/// Number::toString for radix 10
pub fn number_to_string(num: f64) -> String {
    if num.is_nan() {
        "NaN".to_string()
    } else if num.is_infinite() {
        if num > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if num == num.trunc() && num.abs() < 1e15 {
        // Integer-valued doubles (including -0) display without decimal point
        format!("{}", num as i64)
    } else {
        num.to_string()
    }
}
