//! Line-limit text normalization (pure).
//!
//! Two independent readings of the same raw text live here:
//!
//! - [`normalize`] decides what gets stored on the query.
//! - [`enter_triggers_run`] decides whether Enter re-runs the query.
//!
//! They intentionally disagree on inputs like `"-5"` or `"abc"`: the
//! normalizer stores `0`, the Enter guard refuses to run.

/// Result of normalizing line-limit text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NormalizedMaxLines {
    /// Empty input: defer to the datasource default line cap.
    Unset,
    /// Explicit cap. Always finite and non-negative.
    Lines(f64),
}

impl NormalizedMaxLines {
    /// Value to store in `LokiQuery::max_lines`.
    pub fn into_option(self) -> Option<f64> {
        match self {
            NormalizedMaxLines::Unset => None,
            NormalizedMaxLines::Lines(n) => Some(n),
        }
    }
}

/// Convert arbitrary user text into a value safe to store on the query.
///
/// Total: every input maps to exactly one outcome.
///
/// - `""` -> [`NormalizedMaxLines::Unset`]
/// - non-numeric or negative -> `Lines(0.0)`
/// - numeric and non-negative -> `Lines(value)`, fractions kept as-is
///
/// ```
/// use lokiq::state::max_lines::{normalize, NormalizedMaxLines};
///
/// assert_eq!(normalize(""), NormalizedMaxLines::Unset);
/// assert_eq!(normalize("abc"), NormalizedMaxLines::Lines(0.0));
/// assert_eq!(normalize("-3"), NormalizedMaxLines::Lines(0.0));
/// assert_eq!(normalize("3.5"), NormalizedMaxLines::Lines(3.5));
/// ```
pub fn normalize(raw: &str) -> NormalizedMaxLines {
    if raw.is_empty() {
        return NormalizedMaxLines::Unset;
    }

    match to_number(raw) {
        // Non-finite values (e.g. "Infinity", "1e400") would break the
        // finite-cap invariant; treat them like garbage.
        Some(value) if value.is_finite() && value >= 0.0 => {
            // Collapse -0 to 0.
            NormalizedMaxLines::Lines(if value == 0.0 { 0.0 } else { value })
        }
        _ => NormalizedMaxLines::Lines(0.0),
    }
}

/// Whether pressing Enter with `raw` in the line-limit field should re-run.
///
/// Uses leading-integer parsing, not [`normalize`]: `"5"` and `"5abc"` run,
/// `"0"`, `"-1"`, `"abc"` and `""` do not.
pub fn enter_triggers_run(raw: &str) -> bool {
    matches!(parse_leading_int(raw), Some(n) if n > 0)
}

/// Loose numeric conversion of free-form text.
///
/// Surrounding whitespace is ignored and whitespace-only text is `0`. Accepts
/// an optional sign, decimal and exponent notation, `Infinity`, and unsigned
/// `0x`/`0o`/`0b` integers. Returns `None` for anything else.
pub fn to_number(raw: &str) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    if let Some(value) = parse_radix_literal(text) {
        return Some(value);
    }

    let (sign, unsigned) = match text.as_bytes()[0] {
        b'-' => (-1.0, &text[1..]),
        b'+' => (1.0, &text[1..]),
        _ => (1.0, text),
    };

    if unsigned == "Infinity" {
        return Some(sign * f64::INFINITY);
    }

    if !is_decimal_literal(unsigned) {
        return None;
    }

    unsigned.parse::<f64>().ok().map(|v| sign * v)
}

/// Leading base-10 integer of `raw`, ignoring leading whitespace and any
/// trailing garbage. `None` if no digit follows the optional sign.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let (negative, rest) = match text.chars().next() {
        Some('-') => (true, &text[1..]),
        Some('+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits: Vec<i64> = rest
        .chars()
        .map_while(|c| c.to_digit(10))
        .map(i64::from)
        .collect();

    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .into_iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(d));

    Some(if negative { -magnitude } else { magnitude })
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let mut value = 0.0f64;
    for c in text[2..].chars() {
        let digit = c.to_digit(radix)?;
        value = value * f64::from(radix) + f64::from(digit);
    }
    Some(value)
}

/// `digits [ "." digits? ] exponent?` or `"." digits exponent?`
fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

#[cfg(test)]
#[path = "max_lines_tests.rs"]
mod tests;
