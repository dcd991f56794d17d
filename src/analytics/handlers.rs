//! Analytics HTTP handler.

use std::sync::Arc;

use axum::{
    Extension,
    extract::{FromRef, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::{
    AppState, Error,
    analytics::{
        aggregation::{monthly_spending, spending_by_category, total_expenses},
        models::{Analytics, SavingsGoal},
        shaping::{category_spending, month_spending},
    },
    api_response::ApiResponse,
    store::InMemoryStore,
    timezone::current_year,
    transaction::Transaction,
    user::{CurrentUser, filter_by_user},
};

/// The state needed for the analytics endpoint.
#[derive(Debug, Clone)]
pub struct AnalyticsState {
    /// The store holding the transactions and savings goals.
    pub store: Arc<InMemoryStore>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for AnalyticsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Query parameters for the analytics endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsQuery {
    /// The calendar year to chart monthly spending for. Defaults to the current
    /// year in the server's local timezone.
    pub year: Option<i32>,
}

/// Get monthly spending, spending by category and the savings goal for the
/// current user.
pub async fn get_analytics(
    State(state): State<AnalyticsState>,
    Extension(user): Extension<CurrentUser>,
    query: Result<Query<AnalyticsQuery>, QueryRejection>,
) -> Result<ApiResponse<Analytics>, Error> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!("Rejecting analytics query: {rejection}");
        Error::InvalidQuery(rejection.body_text())
    })?;

    let year = match query.year {
        Some(year) => year,
        None => current_year(&state.local_timezone)?,
    };

    let transactions = filter_by_user(state.store.transactions()?, user.email());
    let savings_goal = state.store.savings_goal(user.email())?;

    Ok(ApiResponse::new(build_analytics(
        &transactions,
        year,
        savings_goal,
    )))
}

/// Aggregate `transactions` into the analytics page data.
///
/// Monthly spending only counts expenses dated in `year`. Spending by category
/// counts expenses from every year.
fn build_analytics(transactions: &[Transaction], year: i32, savings_goal: SavingsGoal) -> Analytics {
    let category_totals = spending_by_category(transactions);

    Analytics {
        monthly_spending: month_spending(&monthly_spending(transactions, year)),
        spending_by_category: category_spending(&category_totals, total_expenses(transactions)),
        savings_goal,
    }
}

#[cfg(test)]
mod build_analytics_tests {
    use time::macros::datetime;

    use crate::{
        analytics::{handlers::build_analytics, models::SavingsGoal},
        test_utils::create_test_transaction,
        transaction::TransactionType,
    };

    #[test]
    fn empty_transactions_give_zeroed_months_and_no_categories() {
        let got = build_analytics(&[], 2023, SavingsGoal::default());

        assert_eq!(got.monthly_spending.len(), 12);
        assert!(got.monthly_spending.iter().all(|month| month.amount == 0.0));
        assert!(got.spending_by_category.is_empty());
    }

    #[test]
    fn monthly_spending_only_counts_requested_year() {
        let transactions = vec![
            create_test_transaction(
                "t1",
                TransactionType::Expense,
                40.0,
                datetime!(2023-03-01 12:00:00),
                "food",
                None,
            ),
            create_test_transaction(
                "t2",
                TransactionType::Expense,
                60.0,
                datetime!(2022-03-01 12:00:00),
                "food",
                None,
            ),
        ];

        let got = build_analytics(&transactions, 2023, SavingsGoal::default());

        assert_eq!(got.monthly_spending[2].month, "Mar");
        assert_eq!(got.monthly_spending[2].amount, 40.0);
        assert_eq!(got.spending_by_category[0].amount, 100.0);
        assert_eq!(got.spending_by_category[0].percentage, 100);
    }
}
