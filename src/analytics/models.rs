use serde::{Deserialize, Serialize};

use crate::analytics::shaping::{CategorySpending, MonthSpending};

/// Progress towards a savings target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    /// The amount saved so far.
    pub current: f64,
    /// The amount the user wants to save.
    pub target: f64,
    /// `current` as a percentage of `target`.
    pub percentage: f64,
}

/// The data for the analytics page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    /// Expenses for each month of the requested year.
    pub monthly_spending: Vec<MonthSpending>,
    /// Expenses grouped by category with each category's share of the total.
    pub spending_by_category: Vec<CategorySpending>,
    /// The user's savings goal.
    pub savings_goal: SavingsGoal,
}
