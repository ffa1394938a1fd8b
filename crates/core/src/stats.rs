//! Small numeric helpers: inequality measurement and lenient parsing.

use crate::error::{Error, Result};

/// Gini coefficient of a set of non-negative values.
///
/// Returns 0 for a perfectly even distribution and approaches 1 as the
/// distribution concentrates. Empty input and negative values are
/// rejected; an all-zero input is treated as perfectly even.
pub fn gini(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::Format("gini of empty input".to_string()));
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
        return Err(Error::Format(format!("gini requires non-negative values, got {}", bad)));
    }

    let total: f64 = values.iter().sum();
    if total == 0.0 {
        return Ok(0.0);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len() as f64;
    let weighted: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, v)| (2.0 * (i as f64 + 1.0) - n - 1.0) * v)
        .sum();
    Ok(weighted / (n * total))
}

/// Parse an integer out of loosely formatted text.
///
/// Tolerates surrounding whitespace, thousands separators (comma,
/// underscore, thin space) and a single leading currency symbol:
/// `" $1,234 "` parses to `1234`.
pub fn parse_int(text: &str) -> Result<i64> {
    let mut trimmed = text.trim();
    if let Some(stripped) = trimmed
        .strip_prefix(['$', '€', '£', '¥'])
        .map(str::trim_start)
    {
        trimmed = stripped;
    }

    let (sign, digits_part) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let mut digits = String::with_capacity(digits_part.len());
    for c in digits_part.chars() {
        match c {
            '0'..='9' => digits.push(c),
            ',' | '_' | ' ' | '\u{2009}' => {}
            _ => {
                return Err(Error::Format(format!("not an integer: {:?}", text)));
            }
        }
    }
    if digits.is_empty() {
        return Err(Error::Format(format!("not an integer: {:?}", text)));
    }

    let magnitude: i64 = digits
        .parse()
        .map_err(|_| Error::Format(format!("integer out of range: {:?}", text)))?;
    Ok(sign * magnitude)
}
