//! Analytics module
//!
//! Aggregates transactions into totals, per-category and per-month spending,
//! and serves them to the analytics page.

mod aggregation;
mod handlers;
mod models;
mod shaping;

pub use aggregation::{
    CategoryTotals, MonthlyTotals, balance, monthly_spending, spending_by_category,
    total_expenses, total_income,
};
pub use handlers::get_analytics;
pub use models::SavingsGoal;
