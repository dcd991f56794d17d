//! Payment cards and the endpoints for listing them.

mod endpoints;
mod models;

pub use endpoints::{get_card, get_cards};
pub use models::{Card, CardNetwork};
