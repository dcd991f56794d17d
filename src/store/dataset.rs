//! The collection of records a store is created from, and how to read one
//! from JSON.

use std::{collections::HashMap, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Error, analytics::SavingsGoal, card::Card, message::Message, transaction::Transaction,
    user::UserEmail,
};

/// Every record the application serves.
///
/// In JSON the keys are camelCase and every field is optional:
///
/// ```json
/// {
///     "transactions": [...],
///     "cards": [...],
///     "messages": [...],
///     "savingsGoal": {"current": 5000, "target": 10000, "percentage": 50},
///     "userSavingsGoals": {"test@example.com": {...}}
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Income and expense records, shared and per-user.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// Payment cards, shared and per-user.
    #[serde(default)]
    pub cards: Vec<Card>,
    /// The inbox shared by every user.
    #[serde(default)]
    pub messages: Vec<Message>,
    /// The savings goal for users without their own goal.
    #[serde(default)]
    pub savings_goal: SavingsGoal,
    /// Savings goals that replace [Dataset::savings_goal] for specific users.
    #[serde(default)]
    pub user_savings_goals: HashMap<UserEmail, SavingsGoal>,
}

impl Dataset {
    /// Parse a dataset from a JSON string.
    ///
    /// # Errors
    /// Returns [Error::DatasetParseError] if `json` is not a JSON object of the
    /// right shape, including when a transaction's type is neither "income" nor
    /// "expense".
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|error| Error::DatasetParseError(error.to_string()))
    }

    /// Read and parse a dataset from the JSON file at `path`.
    ///
    /// # Errors
    /// Returns [Error::DatasetReadError] if the file cannot be read, or
    /// [Error::DatasetParseError] if it does not contain a valid dataset.
    pub fn from_json_file(path: &Path) -> Result<Self, Error> {
        let json = fs::read_to_string(path).map_err(|error| {
            Error::DatasetReadError(format!("{}: {error}", path.display()))
        })?;

        Self::from_json_str(&json)
    }
}
