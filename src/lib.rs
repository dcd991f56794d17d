//! BankDash is a demonstration personal-finance dashboard.
//!
//! This library provides a JSON REST API over mock, in-memory financial data:
//! an account summary, transactions, cards, spending analytics and messages.
//! A static front end is served alongside the API.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod analytics;
mod api_response;
mod app_state;
mod auth;
mod card;
mod dashboard;
mod datetime;
mod endpoints;
mod logging;
mod message;
mod not_found;
mod routing;
mod store;
mod timezone;
mod transaction;
mod user;

#[cfg(test)]
mod test_utils;

pub use analytics::{
    CategoryTotals, MonthlyTotals, SavingsGoal, balance, monthly_spending, spending_by_category,
    total_expenses, total_income,
};
pub use app_state::AppState;
pub use card::{Card, CardNetwork};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use message::Message;
pub use routing::build_router;
pub use store::{Dataset, InMemoryStore};
pub use transaction::{Transaction, TransactionStatus, TransactionType};
pub use user::{Owned, UserEmail, filter_by_user, is_visible_to};

use crate::api_response::error_response;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request did not include a bearer token in the `Authorization` header.
    ///
    /// The token is never checked against anything. Its presence is all
    /// that is required.
    #[error("missing or malformed bearer token")]
    Unauthorized,

    /// The user tried to log in with an e-mail that is marked as invalid.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No transaction with the requested ID is visible to the user.
    #[error("the transaction could not be found")]
    TransactionNotFound,

    /// No card with the requested ID is visible to the user.
    #[error("the card could not be found")]
    CardNotFound,

    /// No message with the requested ID exists.
    #[error("the message could not be found")]
    MessageNotFound,

    /// Could not acquire the store lock.
    #[error("could not acquire the store lock")]
    StoreLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The dataset file could not be read.
    ///
    /// Callers should pass in the original error as a string.
    #[error("could not read the dataset file: {0}")]
    DatasetReadError(String),

    /// The dataset was not valid JSON, or contained records of the wrong shape,
    /// e.g. a transaction type other than "income" or "expense".
    #[error("could not parse the dataset: {0}")]
    DatasetParseError(String),

    /// The query string could not be parsed, e.g. a year that is not a number.
    ///
    /// Callers should pass in the rejection as a string.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The body of a request or response could not be read.
    #[error("could not read the message body: {0}")]
    BodyReadError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Unauthorized => error_response(StatusCode::UNAUTHORIZED, "Unauthorized"),
            Error::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, "Invalid credentials")
            }
            Error::TransactionNotFound => {
                error_response(StatusCode::NOT_FOUND, "Transaction not found")
            }
            Error::CardNotFound => error_response(StatusCode::NOT_FOUND, "Card not found"),
            Error::MessageNotFound => error_response(StatusCode::NOT_FOUND, "Message not found"),
            Error::InvalidQuery(reason) => error_response(StatusCode::BAD_REQUEST, &reason),
            Error::InvalidTimezoneError(timezone) => {
                tracing::error!("Could not get local timezone \"{timezone}\"");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                )
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong")
            }
        }
    }
}
