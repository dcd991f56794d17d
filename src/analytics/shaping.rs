//! Converts aggregation results into the ordered records the front end charts.

use serde::Serialize;

use crate::analytics::aggregation::{CategoryTotals, MonthlyTotals, month_label};

/// How much was spent in a category and its share of all expenses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpending {
    /// The category name, e.g. "food".
    pub category: String,
    /// The total spent in the category.
    pub amount: f64,
    /// The category's share of total expenses as a whole percentage.
    pub percentage: u32,
}

/// How much was spent in a month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSpending {
    /// Three-letter month abbreviation, e.g. "Jan".
    pub month: &'static str,
    /// The total spent in the month.
    pub amount: f64,
}

/// Pair each category total with its percentage of `total_expenses`.
///
/// Percentages are rounded to the nearest whole number. They are all zero if
/// `total_expenses` is zero.
pub fn category_spending(totals: &CategoryTotals, total_expenses: f64) -> Vec<CategorySpending> {
    totals
        .iter()
        .map(|(category, amount)| CategorySpending {
            category: category.to_owned(),
            amount,
            percentage: percentage_of(amount, total_expenses),
        })
        .collect()
}

/// One record per month, from January to December.
pub fn month_spending(totals: &MonthlyTotals) -> Vec<MonthSpending> {
    totals
        .iter()
        .map(|(month, amount)| MonthSpending {
            month: month_label(month),
            amount,
        })
        .collect()
}

fn percentage_of(amount: f64, total: f64) -> u32 {
    if total > 0.0 {
        (100.0 * amount / total).round() as u32
    } else {
        0
    }
}
