use std::sync::Arc;

use axum::extract::{Path, State};

use crate::{Error, api_response::ApiResponse, message::Message, store::InMemoryStore};

/// List every message in the inbox.
pub async fn get_messages(
    State(store): State<Arc<InMemoryStore>>,
) -> Result<ApiResponse<Vec<Message>>, Error> {
    store.messages().map(ApiResponse::list)
}

/// Get a message by its ID.
pub async fn get_message(
    State(store): State<Arc<InMemoryStore>>,
    Path(message_id): Path<String>,
) -> Result<ApiResponse<Message>, Error> {
    store.message(&message_id).map(ApiResponse::new)
}

/// Mark a message as read and return the updated message.
pub async fn mark_message_read(
    State(store): State<Arc<InMemoryStore>>,
    Path(message_id): Path<String>,
) -> Result<ApiResponse<Message>, Error> {
    let message = store.mark_message_read(&message_id)?;
    tracing::debug!("Marked message {} as read", message.id);

    Ok(ApiResponse::new(message))
}
