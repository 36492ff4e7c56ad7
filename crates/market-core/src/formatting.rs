use chrono::NaiveDate;

use crate::models::Money;

/// Format a monetary amount as a USD string with two decimal places and
/// thousands separators.
///
/// Formatting goes through whole cents, so no floating-point rounding is
/// involved.
///
/// # Examples
///
/// ```
/// use market_core::formatting::format_currency;
/// use market_core::models::Money;
///
/// assert_eq!(format_currency(Money::from_cents(123_456)), "$1,234.56");
/// assert_eq!(format_currency(Money::ZERO), "$0.00");
/// ```
pub fn format_currency(amount: Money) -> String {
    let cents = amount.cents();
    format!(
        "${}.{:02}",
        group_thousands(&(cents / 100).to_string()),
        cents % 100
    )
}

/// Render a 0–5 rating as five star glyphs followed by the numeric value,
/// e.g. `"★★★★☆ 4.8"`. Partial stars are floored, matching the quick-view
/// star row.
pub fn format_rating(rating: f64) -> String {
    let clamped = rating.clamp(0.0, 5.0);
    let full = clamped.floor() as usize;
    format!("{}{} {:.1}", "★".repeat(full), "☆".repeat(5 - full), clamped)
}

/// `"1 item"` / `"3 items"`.
pub fn format_item_count(count: u32) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}

/// Blog-style date, e.g. `"Oct 12, 2023"`.
pub fn format_post_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── format_currency ──────────────────────────────────────────────────────

    #[test]
    fn test_format_currency_cents() {
        assert_eq!(format_currency(Money::from_cents(29_999)), "$299.99");
        assert_eq!(format_currency(Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_format_currency_zero() {
        assert_eq!(format_currency(Money::ZERO), "$0.00");
    }

    #[test]
    fn test_format_currency_large() {
        assert_eq!(format_currency(Money::from_cents(100_000_000)), "$1,000,000.00");
    }

    // ── format_rating ────────────────────────────────────────────────────────

    #[test]
    fn test_format_rating_floors_partial_stars() {
        assert_eq!(format_rating(4.8), "★★★★☆ 4.8");
        assert_eq!(format_rating(5.0), "★★★★★ 5.0");
        assert_eq!(format_rating(0.0), "☆☆☆☆☆ 0.0");
    }

    #[test]
    fn test_format_rating_clamps_out_of_range() {
        assert_eq!(format_rating(7.2), "★★★★★ 5.0");
        assert_eq!(format_rating(-1.0), "☆☆☆☆☆ 0.0");
    }

    // ── format_item_count / format_post_date ─────────────────────────────────

    #[test]
    fn test_format_item_count() {
        assert_eq!(format_item_count(0), "0 items");
        assert_eq!(format_item_count(1), "1 item");
        assert_eq!(format_item_count(12), "12 items");
    }

    #[test]
    fn test_format_post_date() {
        let date = NaiveDate::from_ymd_opt(2023, 11, 5).unwrap();
        assert_eq!(format_post_date(date), "Nov 05, 2023");
    }

    // ── group_thousands ──────────────────────────────────────────────────────

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("5"), "5");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
