//! Transaction aggregation for the dashboard and analytics.
//!
//! Provides functions to total income and expenses, calculate the balance,
//! group expenses by category and bucket expenses by calendar month.
//!
//! These functions never fail: empty input gives zero totals, no categories
//! and twelve zero-valued months.

use std::collections::HashMap;

use time::Month;

use crate::transaction::Transaction;

/// The months of the year in calendar order.
const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Sum of the amounts of all income transactions.
pub fn total_income(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.is_income())
        .map(|transaction| transaction.amount)
        .sum()
}

/// Sum of the amounts of all expense transactions.
pub fn total_expenses(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.is_expense())
        .map(|transaction| transaction.amount)
        .sum()
}

/// Total income minus total expenses.
pub fn balance(transactions: &[Transaction]) -> f64 {
    total_income(transactions) - total_expenses(transactions)
}

/// Expense totals grouped by category, in the order each category was first seen.
///
/// Only categories with at least one expense are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals(Vec<(String, f64)>);

impl CategoryTotals {
    /// The total for `category`, or `None` if no expense had that category.
    pub fn get(&self, category: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, total)| *total)
    }

    /// Iterate over `(category, total)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, total)| (name.as_str(), *total))
    }

    /// The number of categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no categories, i.e. there were no expenses.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Groups expense transactions by category and sums the amounts of each group.
pub fn spending_by_category(transactions: &[Transaction]) -> CategoryTotals {
    let mut totals: Vec<(String, f64)> = Vec::new();
    let mut index_by_category: HashMap<&str, usize> = HashMap::new();

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        match index_by_category.get(transaction.category.as_str()) {
            Some(&index) => totals[index].1 += transaction.amount,
            None => {
                index_by_category.insert(&transaction.category, totals.len());
                totals.push((transaction.category.clone(), transaction.amount));
            }
        }
    }

    CategoryTotals(totals)
}

/// Expense totals for each of the twelve months of a year.
///
/// Every month is always present, months without expenses are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MonthlyTotals([f64; 12]);

impl MonthlyTotals {
    /// The total for `month`.
    pub fn get(&self, month: Month) -> f64 {
        self.0[month_index(month)]
    }

    /// Iterate over `(month, total)` pairs from January to December.
    pub fn iter(&self) -> impl Iterator<Item = (Month, f64)> + '_ {
        MONTHS.iter().map(|&month| (month, self.get(month)))
    }

    fn add(&mut self, month: Month, amount: f64) {
        self.0[month_index(month)] += amount;
    }
}

fn month_index(month: Month) -> usize {
    u8::from(month) as usize - 1
}

/// Sums the expenses in `year` by the month they occurred in.
///
/// `year` is required so that the result does not depend on when it is
/// called. Callers that want the current year should work it out themselves.
pub fn monthly_spending(transactions: &[Transaction], year: i32) -> MonthlyTotals {
    let mut totals = MonthlyTotals::default();

    for transaction in transactions
        .iter()
        .filter(|t| t.is_expense() && t.date.year() == year)
    {
        totals.add(transaction.date.month(), transaction.amount);
    }

    totals
}

/// Formats a month as a three-letter abbreviation, e.g. "Jan".
pub fn month_label(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
