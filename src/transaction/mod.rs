//! Transactions: the record type the dashboard and analytics are computed from,
//! and the endpoints for listing them.

mod endpoints;
mod models;

pub use endpoints::{get_transaction, get_transactions};
pub use models::{Transaction, TransactionStatus, TransactionType};
