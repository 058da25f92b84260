//! Numeric interpretation of human-formatted monetary strings.
//!
//! Statement values arrive as display text ("AED 1,250,000", "$3.2M",
//! "(2,500)") and must become signed magnitudes before they can be charted.

/// Converts a formatted value string into a signed magnitude.
///
/// Handles currency markers (`$`, the `AED` token), thousands separators,
/// accounting-style parenthesized negatives, and a trailing `K`/`M`/`B`
/// magnitude suffix (case-insensitive).
///
/// This is a total function: any input that does not yield a numeral maps to
/// `0.0`. A genuine zero value and an unparseable string are therefore
/// indistinguishable; both are treated downstream as "not chartable". This
/// conflation is a known limitation kept for compatibility with the upstream
/// report format.
///
/// # Examples
/// ```
/// use financial_statement_analyzer::parse_value;
///
/// assert_eq!(parse_value("$1,234"), 1234.0);
/// assert_eq!(parse_value("(2,500)"), -2500.0);
/// assert_eq!(parse_value("1.5M"), 1_500_000.0);
/// assert_eq!(parse_value("N/A"), 0.0);
/// ```
pub fn parse_value(raw: &str) -> f64 {
    let mut cleaned = String::with_capacity(raw.len());
    for ch in raw.replace("AED", "").chars() {
        match ch {
            '$' | ',' | ')' => {}
            c if c.is_whitespace() => {}
            // Accounting convention: "(1,234)" reads as -1234. Substitution is
            // per-character, so unbalanced parentheses are not rejected.
            '(' => cleaned.push('-'),
            c => cleaned.push(c),
        }
    }

    let multiplier = match cleaned.chars().last() {
        Some(c) => match c.to_ascii_uppercase() {
            'K' => 1e3,
            'M' => 1e6,
            'B' => 1e9,
            _ => 1.0,
        },
        None => return 0.0,
    };

    match leading_decimal(&cleaned) {
        Some(num) => num * multiplier,
        None => 0.0,
    }
}

/// Parses the longest leading decimal numeral (optional sign, optional
/// decimal point) and ignores whatever trails it, e.g. an unstripped
/// magnitude suffix. Returns `None` when no digit is found.
fn leading_decimal(input: &str) -> Option<f64> {
    let bytes = input.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let mut seen_digit = false;
    let mut seen_point = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_point => seen_point = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return None;
    }

    input[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_currency_values() {
        assert_eq!(parse_value("$1,234"), 1234.0);
        assert_eq!(parse_value("AED 500"), 500.0);
        assert_eq!(parse_value("1 250 000"), 1_250_000.0);
        assert_eq!(parse_value("AED 1,250,000"), 1_250_000.0);
    }

    #[test]
    fn test_parenthesized_negatives() {
        assert_eq!(parse_value("(2,500)"), -2500.0);
        assert_eq!(parse_value("AED (750)"), -750.0);
        assert_eq!(parse_value("(2.3M)"), -2_300_000.0);
    }

    #[test]
    fn test_magnitude_suffixes() {
        assert_eq!(parse_value("1.5M"), 1_500_000.0);
        assert_eq!(parse_value("3K"), 3000.0);
        assert_eq!(parse_value("2B"), 2_000_000_000.0);
        assert_eq!(parse_value("4.2b"), 4_200_000_000.0);
        assert_eq!(parse_value("$1.5m"), 1_500_000.0);
    }

    #[test]
    fn test_explicit_signs() {
        assert_eq!(parse_value("-1,200"), -1200.0);
        assert_eq!(parse_value("+300"), 300.0);
    }

    #[test]
    fn test_unparseable_input_degrades_to_zero() {
        assert_eq!(parse_value("N/A"), 0.0);
        assert_eq!(parse_value(""), 0.0);
        assert_eq!(parse_value("See appendix"), 0.0);
        assert_eq!(parse_value("-"), 0.0);
        assert_eq!(parse_value("$"), 0.0);
        assert_eq!(parse_value("M"), 0.0);
    }

    #[test]
    fn test_trailing_text_after_numeral_is_ignored() {
        assert_eq!(parse_value("1,234 approx"), 1234.0);
        assert_eq!(parse_value("1.2.3"), 1.2);
    }

    #[test]
    fn test_mismatched_parentheses_are_not_validated() {
        assert_eq!(parse_value("(500"), -500.0);
        assert_eq!(parse_value("500)"), 500.0);
    }

    #[test]
    fn test_zero_and_failure_are_conflated() {
        assert_eq!(parse_value("0"), 0.0);
        assert_eq!(parse_value("AED 0.00"), 0.0);
        assert_eq!(parse_value("not a number"), 0.0);
    }
}
