//! The account summary shown at the top of the dashboard.

use std::sync::Arc;

use axum::{Extension, extract::State};
use serde::Serialize;

use crate::{
    Error,
    analytics::{balance, total_expenses, total_income},
    api_response::ApiResponse,
    store::InMemoryStore,
    user::{CurrentUser, filter_by_user},
};

/// Income, expenses and their difference over every visible transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// The sum of all income.
    pub income: f64,
    /// The sum of all expenses.
    pub expenses: f64,
    /// Income minus expenses.
    pub balance: f64,
}

/// Get the income, expense and balance totals for the current user.
pub async fn get_dashboard(
    State(store): State<Arc<InMemoryStore>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<ApiResponse<DashboardSummary>, Error> {
    let transactions = filter_by_user(store.transactions()?, user.email());

    Ok(ApiResponse::new(DashboardSummary {
        income: total_income(&transactions),
        expenses: total_expenses(&transactions),
        balance: balance(&transactions),
    }))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use time::macros::datetime;

    use crate::{
        auth::USER_EMAIL_HEADER,
        endpoints,
        store::{Dataset, InMemoryStore},
        test_utils::{authorized_get, create_test_transaction, get_test_server},
        transaction::TransactionType,
    };

    fn get_test_store() -> InMemoryStore {
        InMemoryStore::new(Dataset {
            transactions: vec![
                create_test_transaction(
                    "t1",
                    TransactionType::Income,
                    1000.0,
                    datetime!(2023-05-01 09:00:00),
                    "salary",
                    None,
                ),
                create_test_transaction(
                    "t2",
                    TransactionType::Expense,
                    250.0,
                    datetime!(2023-05-02 09:00:00),
                    "food",
                    None,
                ),
                create_test_transaction(
                    "t3",
                    TransactionType::Income,
                    500.0,
                    datetime!(2023-05-03 09:00:00),
                    "bonus",
                    Some("test@example.com"),
                ),
                create_test_transaction(
                    "t4",
                    TransactionType::Expense,
                    100.0,
                    datetime!(2023-05-04 09:00:00),
                    "health",
                    Some("test@example.com"),
                ),
            ],
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn summary_for_shared_view() {
        let server = get_test_server(get_test_store());

        let response = authorized_get(&server, endpoints::DASHBOARD)
            .add_header(USER_EMAIL_HEADER, "someone@example.com")
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "success": true,
            "data": {"income": 1000.0, "expenses": 250.0, "balance": 750.0}
        }));
    }

    #[tokio::test]
    async fn user_header_changes_totals() {
        let server = get_test_server(get_test_store());

        let response = authorized_get(&server, endpoints::DASHBOARD)
            .add_header(USER_EMAIL_HEADER, "test@example.com")
            .await;

        let body: Value = response.json();
        assert_eq!(
            body["data"],
            json!({"income": 1500.0, "expenses": 350.0, "balance": 1150.0})
        );
    }

    #[tokio::test]
    async fn empty_store_has_zero_totals() {
        let server = get_test_server(InMemoryStore::new(Dataset::default()));

        let body: Value = authorized_get(&server, endpoints::DASHBOARD).await.json();

        assert_eq!(
            body["data"],
            json!({"income": 0.0, "expenses": 0.0, "balance": 0.0})
        );
    }

    #[tokio::test]
    async fn dashboard_requires_bearer_token() {
        let server = get_test_server(get_test_store());

        server
            .get(endpoints::DASHBOARD)
            .add_header("Authorization", "Basic abc")
            .await
            .assert_status_unauthorized();
    }
}
