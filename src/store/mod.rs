//! The in-memory store that owns every record the API serves.
//!
//! Handlers get the store from the app state. Reads return snapshots, so the
//! store lock is only held while copying records, never while aggregating.

use std::{
    path::Path,
    sync::{Mutex, MutexGuard},
};

mod dataset;
mod sample_data;

pub use dataset::Dataset;
pub(crate) use sample_data::TEST_USER_EMAIL;

use crate::{
    Error,
    analytics::SavingsGoal,
    card::Card,
    message::Message,
    transaction::Transaction,
    user::UserEmail,
};

/// Holds transactions, cards, messages and savings goals in memory.
#[derive(Debug)]
pub struct InMemoryStore {
    dataset: Mutex<Dataset>,
}

impl InMemoryStore {
    /// Create a store that owns `dataset`.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Mutex::new(dataset),
        }
    }

    /// Create a store with the built-in demo data.
    pub fn with_sample_data() -> Self {
        Self::new(sample_data::sample_dataset())
    }

    /// Create a store from the dataset in the JSON file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid dataset.
    pub fn from_json_file(path: &Path) -> Result<Self, Error> {
        Dataset::from_json_file(path).map(Self::new)
    }

    /// Create a store from a JSON dataset.
    ///
    /// # Errors
    /// Returns an error if `json` is not a valid dataset.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        Dataset::from_json_str(json).map(Self::new)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Dataset>, Error> {
        self.dataset
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
            .map_err(|_| Error::StoreLockError)
    }

    /// A snapshot of every transaction, shared and per-user.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if the store lock is poisoned.
    pub fn transactions(&self) -> Result<Vec<Transaction>, Error> {
        Ok(self.lock()?.transactions.clone())
    }

    /// The transaction with the ID `id`.
    ///
    /// # Errors
    /// Returns [Error::TransactionNotFound] if there is no such transaction, or
    /// [Error::StoreLockError] if the store lock is poisoned.
    pub fn transaction(&self, id: &str) -> Result<Transaction, Error> {
        self.lock()?
            .transactions
            .iter()
            .find(|transaction| transaction.id == id)
            .cloned()
            .ok_or(Error::TransactionNotFound)
    }

    /// A snapshot of every card, shared and per-user.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if the store lock is poisoned.
    pub fn cards(&self) -> Result<Vec<Card>, Error> {
        Ok(self.lock()?.cards.clone())
    }

    /// The card with the ID `id`.
    ///
    /// # Errors
    /// Returns [Error::CardNotFound] if there is no such card, or
    /// [Error::StoreLockError] if the store lock is poisoned.
    pub fn card(&self, id: &str) -> Result<Card, Error> {
        self.lock()?
            .cards
            .iter()
            .find(|card| card.id == id)
            .cloned()
            .ok_or(Error::CardNotFound)
    }

    /// A snapshot of every message.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if the store lock is poisoned.
    pub fn messages(&self) -> Result<Vec<Message>, Error> {
        Ok(self.lock()?.messages.clone())
    }

    /// The message with the ID `id`.
    ///
    /// # Errors
    /// Returns [Error::MessageNotFound] if there is no such message, or
    /// [Error::StoreLockError] if the store lock is poisoned.
    pub fn message(&self, id: &str) -> Result<Message, Error> {
        self.lock()?
            .messages
            .iter()
            .find(|message| message.id == id)
            .cloned()
            .ok_or(Error::MessageNotFound)
    }

    /// Mark the message with the ID `id` as read and return the updated message.
    ///
    /// Marking a message that has already been read is not an error.
    ///
    /// # Errors
    /// Returns [Error::MessageNotFound] if there is no such message, or
    /// [Error::StoreLockError] if the store lock is poisoned.
    pub fn mark_message_read(&self, id: &str) -> Result<Message, Error> {
        let mut dataset = self.lock()?;
        let message = dataset
            .messages
            .iter_mut()
            .find(|message| message.id == id)
            .ok_or(Error::MessageNotFound)?;

        message.is_read = true;

        Ok(message.clone())
    }

    /// The savings goal for `user`.
    ///
    /// Falls back to the default goal when `user` is `None` or has no goal of
    /// their own.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if the store lock is poisoned.
    pub fn savings_goal(&self, user: Option<&UserEmail>) -> Result<SavingsGoal, Error> {
        let dataset = self.lock()?;

        let goal = user
            .and_then(|user| dataset.user_savings_goals.get(user))
            .unwrap_or(&dataset.savings_goal);

        Ok(goal.clone())
    }
}
