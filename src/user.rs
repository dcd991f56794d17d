//! User identities and the per-user view of shared records.
//!
//! Records may carry an owner. A record without an owner is shared data that
//! every user can see.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A newtype wrapper for the e-mail address that identifies a user.
///
/// This helps disambiguate user e-mails from other strings such as record IDs
/// and category names.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserEmail(String);

impl UserEmail {
    /// Create a new user e-mail.
    pub fn new(email: &str) -> Self {
        Self(email.to_owned())
    }

    /// The e-mail address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The user a request is made on behalf of.
///
/// Placed into the request extensions by the auth middleware. `None` means no
/// user was specified and the request sees every record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurrentUser(pub Option<UserEmail>);

impl CurrentUser {
    /// The user's e-mail, if one was specified.
    pub fn email(&self) -> Option<&UserEmail> {
        self.0.as_ref()
    }
}

/// A record that may belong to a single user.
pub trait Owned {
    /// The owner of the record, or `None` for shared records.
    fn owner(&self) -> Option<&UserEmail>;
}

/// Keep the records that `user` may see.
///
/// A record is kept if it belongs to `user` or has no owner. If `user` is
/// `None`, every record is kept.
pub fn filter_by_user<T: Owned>(records: Vec<T>, user: Option<&UserEmail>) -> Vec<T> {
    if user.is_none() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| is_visible_to(record, user))
        .collect()
}

/// Whether `user` may see `record`.
pub fn is_visible_to<T: Owned>(record: &T, user: Option<&UserEmail>) -> bool {
    match (record.owner(), user) {
        (Some(owner), Some(user)) => owner == user,
        _ => true,
    }
}
