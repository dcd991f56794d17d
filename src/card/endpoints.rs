use std::sync::Arc;

use axum::{
    Extension,
    extract::{Path, State},
};

use crate::{
    Error,
    api_response::ApiResponse,
    card::Card,
    store::InMemoryStore,
    user::{CurrentUser, filter_by_user},
};

/// List the cards visible to the current user.
pub async fn get_cards(
    State(store): State<Arc<InMemoryStore>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<ApiResponse<Vec<Card>>, Error> {
    let cards = filter_by_user(store.cards()?, user.email());

    Ok(ApiResponse::list(cards))
}

/// Get a card by its ID.
///
/// Cards belonging to other users are reported as not found.
pub async fn get_card(
    State(store): State<Arc<InMemoryStore>>,
    Extension(user): Extension<CurrentUser>,
    Path(card_id): Path<String>,
) -> Result<ApiResponse<Card>, Error> {
    filter_by_user(store.cards()?, user.email())
        .into_iter()
        .find(|card| card.id == card_id)
        .map(ApiResponse::new)
        .ok_or(Error::CardNotFound)
}
