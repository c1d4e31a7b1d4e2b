//! Budget Tracker
//!
//! Pure derivation over the list and the raw budget text.

use crate::list::GroceryList;

/// Derived budget figures, recomputed whenever the list or budget changes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BudgetSummary {
    pub estimated_total: f64,
    pub budget: f64,
    pub is_over_budget: bool,
    /// Percentage of budget used, clamped to 0..=100
    pub progress: f64,
    /// `budget - total`, only meaningful when a budget is set
    pub remaining: Option<f64>,
}

impl BudgetSummary {
    pub fn compute(list: &GroceryList, budget_raw: &str) -> Self {
        let estimated_total: f64 = list
            .shopping_items()
            .map(|item| parse_amount(&item.estimated_price))
            .sum();
        let budget = parse_amount(budget_raw);

        if budget > 0.0 {
            Self {
                estimated_total,
                budget,
                is_over_budget: estimated_total > budget,
                progress: (estimated_total / budget * 100.0).min(100.0),
                remaining: Some(budget - estimated_total),
            }
        } else {
            Self {
                estimated_total,
                budget,
                ..Self::default()
            }
        }
    }
}

/// Lenient decimal parse: the longest numeric prefix wins, anything else is 0
pub fn parse_amount(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
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
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0.0;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
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

    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with_prices(prices: &[(&str, bool)]) -> GroceryList {
        let mut list = GroceryList::new();
        for (i, (price, in_pantry)) in prices.iter().enumerate() {
            let id = list.add_item(&format!("item {}", i)).unwrap();
            list.update_price(id, price);
            if *in_pantry {
                list.toggle_pantry(id);
            }
        }
        list
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("2.50"), 2.5);
        assert_eq!(parse_amount("  3"), 3.0);
        assert_eq!(parse_amount("4.75 each"), 4.75);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("5."), 5.0);
        assert_eq!(parse_amount("-1.5"), -1.5);
        assert_eq!(parse_amount("1e2"), 100.0);
        assert_eq!(parse_amount("2e"), 2.0);
        assert_eq!(parse_amount("bad"), 0.0);
        assert_eq!(parse_amount("$3"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("."), 0.0);
        assert_eq!(parse_amount("1e999"), 0.0);
    }

    #[test]
    fn test_total_skips_pantry_and_invalid() {
        let list = list_with_prices(&[("2.50", false), ("bad", false), ("", false), ("3", false), ("10", true)]);
        let summary = BudgetSummary::compute(&list, "");
        assert_eq!(summary.estimated_total, 5.5);
    }

    #[test]
    fn test_over_budget_clamps_progress() {
        let list = list_with_prices(&[("12.5", false)]);
        let summary = BudgetSummary::compute(&list, "10");
        assert!(summary.is_over_budget);
        assert_eq!(summary.progress, 100.0);
        assert_eq!(summary.remaining, Some(-2.5));
    }

    #[test]
    fn test_under_budget_progress() {
        let list = list_with_prices(&[("2.5", false)]);
        let summary = BudgetSummary::compute(&list, "10");
        assert!(!summary.is_over_budget);
        assert_eq!(summary.progress, 25.0);
        assert_eq!(summary.remaining, Some(7.5));
    }

    #[test]
    fn test_no_budget() {
        let list = list_with_prices(&[("50", false)]);
        for raw in ["", "0", "abc", "-5"] {
            let summary = BudgetSummary::compute(&list, raw);
            assert!(!summary.is_over_budget);
            assert_eq!(summary.progress, 0.0);
            assert_eq!(summary.remaining, None);
            assert_eq!(summary.estimated_total, 50.0);
        }
    }

    #[test]
    fn test_exact_budget_is_not_over() {
        let list = list_with_prices(&[("10", false)]);
        let summary = BudgetSummary::compute(&list, "10");
        assert!(!summary.is_over_budget);
        assert_eq!(summary.progress, 100.0);
    }
}
