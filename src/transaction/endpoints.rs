//! Route handlers for listing transactions and fetching a single transaction.

use std::sync::Arc;

use axum::{
    Extension,
    extract::{Path, State},
};

use crate::{
    Error,
    api_response::ApiResponse,
    store::InMemoryStore,
    transaction::Transaction,
    user::{CurrentUser, filter_by_user},
};

/// List the transactions visible to the current user.
pub async fn get_transactions(
    State(store): State<Arc<InMemoryStore>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<ApiResponse<Vec<Transaction>>, Error> {
    let transactions = filter_by_user(store.transactions()?, user.email());

    Ok(ApiResponse::list(transactions))
}

/// Get a transaction by its ID.
///
/// Transactions belonging to other users are reported as not found.
pub async fn get_transaction(
    State(store): State<Arc<InMemoryStore>>,
    Extension(user): Extension<CurrentUser>,
    Path(transaction_id): Path<String>,
) -> Result<ApiResponse<Transaction>, Error> {
    filter_by_user(store.transactions()?, user.email())
        .into_iter()
        .find(|transaction| transaction.id == transaction_id)
        .map(ApiResponse::new)
        .ok_or(Error::TransactionNotFound)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use time::macros::datetime;

    use crate::{
        auth::USER_EMAIL_HEADER,
        endpoints::{self, format_endpoint},
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
                    100.0,
                    datetime!(2023-05-15 10:30:00),
                    "salary",
                    None,
                ),
                create_test_transaction(
                    "t2",
                    TransactionType::Expense,
                    20.0,
                    datetime!(2023-05-16 10:30:00),
                    "food",
                    Some("test@example.com"),
                ),
            ],
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn lists_all_transactions_without_user() {
        let server = get_test_server(get_test_store());

        let response = authorized_get(&server, endpoints::TRANSACTIONS).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 2);
    }

    #[tokio::test]
    async fn lists_only_visible_transactions_for_user() {
        let server = get_test_server(get_test_store());

        let response = authorized_get(&server, endpoints::TRANSACTIONS)
            .add_header(USER_EMAIL_HEADER, "someone@example.com")
            .await;

        let body: Value = response.json();
        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["id"], "t1");
    }

    #[tokio::test]
    async fn gets_transaction_by_id() {
        let server = get_test_server(get_test_store());

        let response = authorized_get(&server, &format_endpoint(endpoints::TRANSACTION, "t2"))
            .add_header(USER_EMAIL_HEADER, "test@example.com")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["id"], "t2");
        assert_eq!(body["data"]["type"], "expense");
        assert_eq!(body["data"]["user"], "test@example.com");
        assert!(body.get("count").is_none());
    }

    #[tokio::test]
    async fn other_users_transaction_is_not_found() {
        let server = get_test_server(get_test_store());

        let response = authorized_get(&server, &format_endpoint(endpoints::TRANSACTION, "t2"))
            .add_header(USER_EMAIL_HEADER, "someone@example.com")
            .await;

        response.assert_status_not_found();
        response.assert_json(&json!({"success": false, "message": "Transaction not found"}));
    }

    #[tokio::test]
    async fn missing_transaction_is_not_found() {
        let server = get_test_server(get_test_store());

        authorized_get(&server, &format_endpoint(endpoints::TRANSACTION, "t404"))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn transactions_require_bearer_token() {
        let server = get_test_server(get_test_store());

        server
            .get(endpoints::TRANSACTIONS)
            .await
            .assert_status_unauthorized();
    }

    #[tokio::test]
    async fn reused_id_finds_the_visible_transaction() {
        let server = get_test_server(InMemoryStore::new(Dataset {
            transactions: vec![
                create_test_transaction(
                    "t1",
                    TransactionType::Expense,
                    20.0,
                    datetime!(2023-05-16 10:30:00),
                    "food",
                    Some("other@example.com"),
                ),
                create_test_transaction(
                    "t1",
                    TransactionType::Income,
                    100.0,
                    datetime!(2023-05-15 10:30:00),
                    "salary",
                    Some("test@example.com"),
                ),
            ],
            ..Default::default()
        }));

        let response = authorized_get(&server, &format_endpoint(endpoints::TRANSACTION, "t1"))
            .add_header(USER_EMAIL_HEADER, "test@example.com")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["category"], "salary");
        assert_eq!(body["data"]["user"], "test@example.com");
    }
}
