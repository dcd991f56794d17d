use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

/// A notification sent to the user, e.g. a security alert.
///
/// Messages are not user-specific: every user sees the same inbox.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique identifier, e.g. "m1".
    pub id: String,
    /// Who sent the message, e.g. "Security Team".
    pub sender: String,
    /// The subject line.
    pub subject: String,
    /// The message body.
    pub content: String,
    /// When the message was sent, in local time.
    #[serde(with = "crate::datetime")]
    pub date: PrimitiveDateTime,
    /// Whether the user has opened the message.
    #[serde(default)]
    pub is_read: bool,
}
