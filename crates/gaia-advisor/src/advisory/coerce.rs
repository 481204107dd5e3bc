//! Lenient readers for wizard input.
//!
//! Form fields are read the way a browser reads them: only the leading numeric prefix of the
//! text counts. A reading that is absent or zero falls back to the field's default.

use super::domain::FieldValue;

/// Float reading of an optional field; `default` when nothing parses or the value is zero.
pub fn parse_with_default(raw: Option<&FieldValue>, default: f64) -> f64 {
    match raw.and_then(FieldValue::as_float) {
        Some(value) if value != 0.0 => value,
        _ => default,
    }
}

/// Integer counterpart of [`parse_with_default`].
pub fn parse_int_with_default(raw: Option<&FieldValue>, default: i64) -> i64 {
    match raw.and_then(FieldValue::as_integer) {
        Some(value) if value != 0 => value,
        _ => default,
    }
}

pub(crate) fn float_prefix(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub(crate) fn integer_prefix(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    // Only overflow can fail past this point; clamp like a float reading would.
    let saturated = if bytes[0] == b'-' { i64::MIN } else { i64::MAX };
    Some(text[..end].parse::<i64>().unwrap_or(saturated))
}

pub(crate) fn is_affirmative_text(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "yes" | "true" | "y" | "on" | "1"
    )
}
