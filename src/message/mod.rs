//! The user's inbox of notifications.

mod endpoints;
mod models;

pub use endpoints::{get_message, get_messages, mark_message_read};
pub use models::Message;
