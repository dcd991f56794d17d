//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{Error, store::InMemoryStore, timezone::get_local_offset};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store holding every record the API serves.
    pub store: Arc<InMemoryStore>,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] that serves the records in `store`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(store: InMemoryStore, local_timezone: &str) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            store: Arc::new(store),
            local_timezone: local_timezone.to_owned(),
        })
    }
}

impl FromRef<AppState> for Arc<InMemoryStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

#[cfg(test)]
mod tests {
    use crate::{AppState, Error, store::InMemoryStore};

    #[test]
    fn accepts_canonical_timezone() {
        let state = AppState::new(InMemoryStore::with_sample_data(), "Pacific/Auckland");

        assert!(state.is_ok());
    }

    #[test]
    fn rejects_unknown_timezone() {
        let state = AppState::new(InMemoryStore::with_sample_data(), "Not/A_Timezone");

        assert_eq!(
            state.map(|_| ()),
            Err(Error::InvalidTimezoneError("Not/A_Timezone".to_owned()))
        );
    }
}
