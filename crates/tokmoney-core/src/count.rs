//! Suffix-aware parsing of human-readable count strings.
//!
//! Profile pages render counts as `"1.2M"`, `"12,3K vues"` or plain `"950"`.
//! [`parse_count`] turns any of these into an `f64` and never fails: text
//! without a recognizable number yields `0.0`.

use std::sync::LazyLock;

use regex::Regex;

/// First run of digits with an optional decimal separator and an optional
/// magnitude suffix. ASCII digits only.
static COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+[.,]?[0-9]*\s*[KMBkmb]?").expect("valid count regex"));

pub const THOUSAND: f64 = 1_000.0;
pub const MILLION: f64 = 1_000_000.0;
pub const BILLION: f64 = 1_000_000_000.0;

/// Magnitude suffixes in detection order. `K` wins over `M` wins over `B`
/// when malformed input carries more than one.
const SUFFIXES: [(char, f64); 3] = [('k', THOUSAND), ('m', MILLION), ('b', BILLION)];

/// Parses the first count found in `text`.
///
/// A comma is always read as a decimal separator (`"1,2M"` → `1_200_000`),
/// so `"12,345"` parses as `12.345`.
///
/// Returns `0.0` for empty text, text without digits, or a value that does
/// not parse. The result is never `NaN`.
#[must_use]
pub fn parse_count(text: &str) -> f64 {
    let Some(found) = COUNT_RE.find(text) else {
        return 0.0;
    };

    let mut numeric: String = found
        .as_str()
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, 'K' | 'M' | 'B' | 'k' | 'm' | 'b' | '.' | ','))
        .collect::<String>()
        .replacen(',', ".", 1);

    let mut multiplier = 1.0;
    for (suffix, factor) in SUFFIXES {
        if numeric.chars().any(|c| c.eq_ignore_ascii_case(&suffix)) {
            multiplier = factor;
            numeric.retain(|c| !c.eq_ignore_ascii_case(&suffix));
            break;
        }
    }

    match numeric.parse::<f64>() {
        Ok(value) if value.is_finite() => value * multiplier,
        _ => 0.0,
    }
}

/// Formats a count rounded to the nearest integer with `,` thousands
/// grouping, e.g. `1234567.4` → `"1,234,567"`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_count(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
#[path = "count_test.rs"]
mod tests;
