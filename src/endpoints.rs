//! The API endpoints URIs.
//!
//! Endpoints that take a parameter, e.g., '/api/cards/{card_id}', are filled
//! in by `format_endpoint` in tests.

/// The prefix shared by every API route.
pub const API: &str = "/api";
/// The route for the income, expense and balance summary.
pub const DASHBOARD: &str = "/api/dashboard";
/// The route for listing transactions.
pub const TRANSACTIONS: &str = "/api/transactions";
/// The route for a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";
/// The route for listing cards.
pub const CARDS: &str = "/api/cards";
/// The route for a single card.
pub const CARD: &str = "/api/cards/{card_id}";
/// The route for monthly and per-category spending.
pub const ANALYTICS: &str = "/api/analytics";
/// The route for listing messages.
pub const MESSAGES: &str = "/api/messages";
/// The route for a single message.
pub const MESSAGE: &str = "/api/messages/{message_id}";
/// The route for marking a message as read.
pub const MESSAGE_READ: &str = "/api/messages/{message_id}/read";
/// The route for registering a user.
pub const REGISTER: &str = "/api/auth/register";
/// The route for logging in a user.
pub const LOG_IN: &str = "/api/auth/login";
/// The route to request a cup of coffee (experimental).
pub const COFFEE: &str = "/api/coffee";
/// Catches every API route not listed above.
pub const API_FALLBACK: &str = "/api/{*path}";

/// Replace the first parameter in `endpoint_path` with `id`.
///
/// If there is no parameter, `endpoint_path` is returned unchanged.
#[cfg(test)]
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
