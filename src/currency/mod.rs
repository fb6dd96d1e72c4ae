//! Balance text normalization and cent-amount formatting.
//!
//! Form input arrives locale-ambiguous: users mix "." and "," as decimal
//! and grouping separators. Normalization resolves the ambiguity and
//! yields exact integer cents; all downstream arithmetic stays integral.

use crate::errors::BalanceInputError;

/// Parses free-form balance text into signed integer cents.
///
/// When both separators appear, the rightmost one is the decimal
/// separator and the other is grouping. A lone separator is treated as
/// grouping only when the digits match strict thousands grouping
/// ("1.234" or "1,234,567"); otherwise it is the decimal point.
pub fn parse_current_balance_value(raw: &str) -> Result<i64, BalanceInputError> {
    let compact: String = raw.trim().chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(BalanceInputError::Required);
    }

    let last_dot = compact.rfind('.');
    let last_comma = compact.rfind(',');

    let normalized = match (last_dot, last_comma) {
        (Some(dot), Some(comma)) => {
            if comma > dot {
                compact.replace('.', "").replace(',', ".")
            } else {
                compact.replace(',', "")
            }
        }
        (None, Some(_)) => {
            if is_thousands_grouped(&compact, ',') {
                compact.replace(',', "")
            } else {
                compact.replace(',', ".")
            }
        }
        (Some(_), None) => {
            if is_thousands_grouped(&compact, '.') {
                compact.replace('.', "")
            } else {
                compact
            }
        }
        (None, None) => compact,
    };

    let value = normalized
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .ok_or_else(|| BalanceInputError::Invalid(raw.to_string()))?;

    Ok((value * 100.0).round() as i64)
}

/// Change against the last snapshot balance, or `None` when the account
/// has no prior snapshot.
pub fn calculate_snapshot_delta(current_cents: i64, snapshot_cents: Option<i64>) -> Option<i64> {
    snapshot_cents.map(|snapshot| current_cents - snapshot)
}

/// Formats cents in the app's display locale: dot grouping, comma
/// decimals, always two fraction digits ("1.234,56").
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let whole = (abs / 100).to_string();
    let fraction = abs % 100;
    let mut grouped = String::new();
    for (count, ch) in whole.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, '.');
        }
        grouped.insert(0, ch);
    }
    format!("{sign}{grouped},{fraction:02}")
}

/// Strict thousands grouping: an optional sign, one to three leading
/// digits, then groups of exactly three digits each preceded by the
/// separator. At least one group must be present.
fn is_thousands_grouped(text: &str, separator: char) -> bool {
    let unsigned = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);
    let mut groups = unsigned.split(separator);
    let head = match groups.next() {
        Some(head) => head,
        None => return false,
    };
    if head.is_empty() || head.len() > 3 || !head.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let mut seen_group = false;
    for group in groups {
        if group.len() != 3 || !group.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        seen_group = true;
    }
    seen_group
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_decimal_with_either_separator() {
        assert_eq!(parse_current_balance_value("12.34"), Ok(1_234));
        assert_eq!(parse_current_balance_value("12,34"), Ok(1_234));
    }

    #[test]
    fn rightmost_separator_wins_when_both_present() {
        assert_eq!(parse_current_balance_value("1.234,56"), Ok(123_456));
        assert_eq!(parse_current_balance_value("1,234.56"), Ok(123_456));
    }

    #[test]
    fn lone_separator_matching_grouping_is_removed() {
        assert_eq!(parse_current_balance_value("1.234"), Ok(123_400));
        assert_eq!(parse_current_balance_value("1,234"), Ok(123_400));
        assert_eq!(parse_current_balance_value("1,234,567"), Ok(123_456_700));
    }

    #[test]
    fn lone_separator_not_matching_grouping_is_decimal() {
        assert_eq!(parse_current_balance_value("1234,5"), Ok(123_450));
        assert_eq!(parse_current_balance_value("0,5"), Ok(50));
        assert_eq!(parse_current_balance_value("12.3456"), Ok(1_235));
    }

    #[test]
    fn whitespace_is_stripped_before_parsing() {
        assert_eq!(parse_current_balance_value("  1 234,56 "), Ok(123_456));
    }

    #[test]
    fn empty_input_is_required_error() {
        assert_eq!(
            parse_current_balance_value(""),
            Err(BalanceInputError::Required)
        );
        assert_eq!(
            parse_current_balance_value("   "),
            Err(BalanceInputError::Required)
        );
    }

    #[test]
    fn non_numeric_input_quotes_the_original_text() {
        let err = parse_current_balance_value("abc").unwrap_err();
        assert_eq!(err, BalanceInputError::Invalid("abc".into()));
        assert_eq!(err.to_string(), "Invalid balance value: abc");
    }

    #[test]
    fn negative_amounts_parse_with_sign() {
        assert_eq!(parse_current_balance_value("-1.234,56"), Ok(-123_456));
        assert_eq!(parse_current_balance_value("-12,34"), Ok(-1_234));
    }

    #[test]
    fn snapshot_delta_requires_a_prior_snapshot() {
        assert_eq!(calculate_snapshot_delta(150_000, Some(120_000)), Some(30_000));
        assert_eq!(calculate_snapshot_delta(150_000, Some(180_000)), Some(-30_000));
        assert_eq!(calculate_snapshot_delta(150_000, None), None);
    }

    #[test]
    fn format_cents_groups_and_reparses() {
        assert_eq!(format_cents(123_456), "1.234,56");
        assert_eq!(format_cents(-7_500), "-75,00");
        assert_eq!(format_cents(5), "0,05");
        assert_eq!(parse_current_balance_value(&format_cents(123_456)), Ok(123_456));
    }
}
