//! # Price Formatting
//!
//! Locale price formatting for display. Prices are integer cents everywhere
//! in the core; floating point never touches money.
//!
//! The storefront displays rupee amounts with Indian digit grouping, matching
//! what the catalog serves:
//!
//! ```text
//! ┌──────────────┬────────────────┐
//! │ cents        │ display        │
//! ├──────────────┼────────────────┤
//! │ 0            │ ₹0.00          │
//! │ 99_900       │ ₹999.00        │
//! │ 123_456_789  │ ₹12,34,567.89  │
//! └──────────────┴────────────────┘
//! ```
//!
//! Indian grouping: the last three integer digits form one group, every group
//! above that has two digits.

/// Currency symbol used by the storefront.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Formats a cent amount with Indian digit grouping.
///
/// ## Example
/// ```rust
/// use shopfront_core::price::format_inr;
///
/// assert_eq!(format_inr(123_456_789), "₹12,34,567.89");
/// assert_eq!(format_inr(-50_000), "-₹500.00");
/// ```
pub fn format_inr(cents: i64) -> String {
    let negative = cents < 0;
    let cents = cents.unsigned_abs();
    let whole = cents / 100;
    let frac = cents % 100;

    format!(
        "{}{}{}.{:02}",
        if negative { "-" } else { "" },
        CURRENCY_SYMBOL,
        group_indian(whole),
        frac
    )
}

/// Groups an unsigned integer's digits Indian-style (3, then 2s).
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let bytes = head.as_bytes();

    // Walk the remaining digits from the right in chunks of two.
    let mut end = bytes.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts() {
        assert_eq!(format_inr(0), "₹0.00");
        assert_eq!(format_inr(1), "₹0.01");
        assert_eq!(format_inr(99_900), "₹999.00");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_inr(100_000), "₹1,000.00");
        assert_eq!(format_inr(12_345_600), "₹1,23,456.00");
        assert_eq!(format_inr(123_456_789), "₹12,34,567.89");
        assert_eq!(format_inr(10_000_000_000), "₹10,00,00,000.00");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_inr(-50_000), "-₹500.00");
        assert_eq!(format_inr(-123_456_789), "-₹12,34,567.89");
    }
}
