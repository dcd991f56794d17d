//! Application router configuration with protected and unprotected route definitions.

use std::path::Path;

use axum::{
    Router,
    http::StatusCode,
    middleware,
    response::Response,
    routing::{any, get, patch, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    analytics::get_analytics,
    api_response::error_response,
    auth::{auth_guard, log_in, register},
    card::{get_card, get_cards},
    dashboard::get_dashboard,
    endpoints,
    message::{get_message, get_messages, mark_message_read},
    not_found::get_api_not_found,
    transaction::{get_transaction, get_transactions},
};

/// Return a router with all the app's routes.
///
/// Paths outside of `/api` are served from the files in `static_dir`.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let unprotected_routes = Router::new()
        .route(endpoints::COFFEE, get(get_coffee))
        .route(endpoints::REGISTER, post(register))
        .route(endpoints::LOG_IN, post(log_in));

    let protected_routes = Router::new()
        .route(endpoints::DASHBOARD, get(get_dashboard))
        .route(endpoints::TRANSACTIONS, get(get_transactions))
        .route(endpoints::TRANSACTION, get(get_transaction))
        .route(endpoints::CARDS, get(get_cards))
        .route(endpoints::CARD, get(get_card))
        .route(endpoints::ANALYTICS, get(get_analytics))
        .route(endpoints::MESSAGES, get(get_messages))
        .route(endpoints::MESSAGE, get(get_message))
        .route(endpoints::MESSAGE_READ, patch(mark_message_read))
        .route_layer(middleware::from_fn(auth_guard));

    protected_routes
        .merge(unprotected_routes)
        .route(endpoints::API, any(get_api_not_found))
        .route(endpoints::API_FALLBACK, any(get_api_not_found))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}

/// Attempt to get a cup of coffee from the server.
async fn get_coffee() -> Response {
    error_response(StatusCode::IM_A_TEAPOT, "I'm a teapot")
}
