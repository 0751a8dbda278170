//! Thousands separators for on-screen editing of the value column.
//!
//! Display only: a value must go through [`remove_thousands_separator`]
//! before it reaches the CSV codec.

/// Groups the integer part of a plain decimal in threes with `,`.
///
/// Blank input yields `""` and a lone `-` is kept as typed. Anything that is
/// not `[-]digits[.digits]` is returned unchanged.
pub fn format_with_thousands_separator(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return trimmed.to_string();
    }

    let (sign, magnitude) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };

    let mut parts = magnitude.split('.');
    let integer = parts.next().unwrap_or_default();
    let fraction = parts.next();
    if parts.next().is_some() {
        return value.to_string();
    }

    if !is_digits(integer) {
        return value.to_string();
    }
    if let Some(fraction) = fraction {
        if !fraction.is_empty() && !is_digits(fraction) {
            return value.to_string();
        }
    }

    let mut out = String::with_capacity(trimmed.len() + integer.len() / 3);
    out.push_str(sign);
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

pub fn remove_thousands_separator(value: &str) -> String {
    value.replace(',', "")
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// Input is ASCII digits only, so byte length equals char count.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
