use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::row::Row;

/// Parses a value cell. Blank text, non-numbers and non-finite results
/// (`Infinity`, `-inf`, `NaN`, overflow) are all rejected.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Sum of every row's value; blank or non-numeric cells count as zero.
///
/// Plain decimal cells are summed exactly, so `0.1 + 0.2` totals `0.3`.
/// A cell that has no `Decimal` form (exponent notation, out of range)
/// switches the whole sum to floating point.
pub fn column_total(rows: &[Row]) -> f64 {
    let mut exact = Some(Decimal::ZERO);
    let mut approx = 0.0;

    for row in rows {
        let Some(number) = parse_value(&row.value) else {
            continue;
        };
        approx += number;
        exact = exact.and_then(|sum| {
            Decimal::from_str(row.value.trim())
                .ok()
                .and_then(|d| sum.checked_add(d))
        });
    }

    exact.and_then(|sum| sum.to_f64()).unwrap_or(approx)
}

/// Canonical text of a total: no decimal point for whole numbers, otherwise
/// the shortest round-tripping form without trailing fractional zeros.
/// `f64` display never uses exponent notation, so very large or very small
/// totals come out as plain digits (`1e21` is `1000000000000000000000`).
pub fn format_total(total: f64) -> String {
    if total.fract() == 0.0 {
        // Negative zero would otherwise print as "-0".
        if total == 0.0 {
            return "0".to_string();
        }
        return format!("{total}");
    }

    trim_fraction_zeros(&total.to_string()).to_string()
}

fn trim_fraction_zeros(text: &str) -> &str {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── format_total ──────────────────────────────────────────────────────────

    #[test]
    fn whole_numbers_have_no_decimal_point() {
        assert_eq!(format_total(100.0), "100");
        assert_eq!(format_total(0.0), "0");
        assert_eq!(format_total(-250.0), "-250");
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(format_total(-0.0), "0");
    }

    #[test]
    fn fractions_keep_shortest_form() {
        assert_eq!(format_total(350.5), "350.5");
        assert_eq!(format_total(99.99), "99.99");
        assert_eq!(format_total(-0.25), "-0.25");
    }

    #[test]
    fn no_forced_rounding() {
        assert_eq!(format_total(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn large_whole_numbers_are_not_exponential() {
        assert_eq!(format_total(1e21), "1000000000000000000000");
    }

    #[test]
    fn tiny_fractions_are_not_exponential() {
        assert_eq!(format_total(1.5e-7), "0.00000015");
    }

    #[test]
    fn trim_only_touches_fractions() {
        assert_eq!(trim_fraction_zeros("1.500"), "1.5");
        assert_eq!(trim_fraction_zeros("2.000"), "2");
        assert_eq!(trim_fraction_zeros("100"), "100");
    }

    // ── parse_value ───────────────────────────────────────────────────────────

    #[test]
    fn parse_value_accepts_decimals() {
        assert_eq!(parse_value("100"), Some(100.0));
        assert_eq!(parse_value(" -50.5 "), Some(-50.5));
        assert_eq!(parse_value("007.50"), Some(7.5));
        assert_eq!(parse_value("1e3"), Some(1000.0));
    }

    #[test]
    fn parse_value_rejects_non_finite() {
        assert_eq!(parse_value("Infinity"), None);
        assert_eq!(parse_value("-Infinity"), None);
        assert_eq!(parse_value("inf"), None);
        assert_eq!(parse_value("NaN"), None);
        assert_eq!(parse_value("1e400"), None);
    }

    #[test]
    fn parse_value_rejects_garbage_and_blank() {
        assert_eq!(parse_value("abc"), None);
        assert_eq!(parse_value("12abc"), None);
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("   "), None);
    }

    // ── column_total ──────────────────────────────────────────────────────────

    #[test]
    fn column_total_sums_values() {
        let rows = vec![
            Row::new("Item 1", "100"),
            Row::new("Item 2", "200"),
            Row::new("Item 3", "50.5"),
        ];
        assert_eq!(column_total(&rows), 350.5);
    }

    #[test]
    fn column_total_is_exact_for_decimals() {
        let rows = vec![Row::new("a", "0.1"), Row::new("b", "0.2")];
        assert_eq!(column_total(&rows), 0.3);
    }

    #[test]
    fn column_total_skips_blank_and_invalid() {
        let rows = vec![
            Row::new("a", "10"),
            Row::new("b", ""),
            Row::new("c", "abc"),
            Row::empty(),
        ];
        assert_eq!(column_total(&rows), 10.0);
    }

    #[test]
    fn column_total_falls_back_for_exponent_values() {
        let rows = vec![Row::new("a", "1e3"), Row::new("b", "0.5")];
        assert_eq!(column_total(&rows), 1000.5);
    }

    #[test]
    fn column_total_of_nothing_is_zero() {
        assert_eq!(column_total(&[]), 0.0);
    }
}
