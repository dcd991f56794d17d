//! The transaction record and its enumerations.

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use crate::user::{Owned, UserEmail};

/// Whether money came in or went out.
///
/// The amount of a transaction is always non-negative, the direction of the
/// money comes from this type alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money received, e.g. a salary payment.
    Income,
    /// Money spent, e.g. a grocery bill.
    Expense,
}

/// How far along the payment is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// The payment has cleared.
    #[default]
    Completed,
    /// The payment has been made but has not cleared.
    Pending,
    /// The payment did not go through.
    Failed,
}

/// An income or expense event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, e.g. "t1".
    pub id: String,
    /// Income or expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Text describing the transaction, e.g. "Grocery Shopping".
    pub name: String,
    /// The value of the transaction in dollars. Never negative.
    pub amount: f64,
    /// When the transaction happened, in local time.
    #[serde(with = "crate::datetime")]
    pub date: PrimitiveDateTime,
    /// Whether the payment has cleared. Defaults to completed.
    #[serde(default)]
    pub status: TransactionStatus,
    /// The label expenses are grouped by, e.g. "shopping".
    pub category: String,
    /// The icon the front end should display.
    #[serde(default)]
    pub icon: String,
    /// The user the transaction belongs to. Shared if `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserEmail>,
}

impl Transaction {
    /// Whether this transaction is income.
    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    /// Whether this transaction is an expense.
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}

impl Owned for Transaction {
    fn owner(&self) -> Option<&UserEmail> {
        self.user.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::datetime;

    use crate::{
        transaction::{Transaction, TransactionStatus, TransactionType},
        user::UserEmail,
    };

    #[test]
    fn deserialises_shared_transaction() {
        let json = json!({
            "id": "t1",
            "type": "income",
            "name": "Salary Payment",
            "amount": 2850.0,
            "date": "2023-05-15T10:30:00",
            "status": "completed",
            "category": "salary",
            "icon": "salary"
        });

        let transaction: Transaction = serde_json::from_value(json).unwrap();

        assert_eq!(transaction.transaction_type, TransactionType::Income);
        assert_eq!(transaction.date, datetime!(2023-05-15 10:30:00));
        assert_eq!(transaction.status, TransactionStatus::Completed);
        assert_eq!(transaction.user, None);
    }

    #[test]
    fn rejects_unknown_transaction_type() {
        let json = json!({
            "id": "t1",
            "type": "transfer",
            "name": "Savings",
            "amount": 100.0,
            "date": "2023-05-15T10:30:00",
            "category": "savings"
        });

        let result = serde_json::from_value::<Transaction>(json);

        assert!(result.is_err());
    }

    #[test]
    fn omits_missing_user_when_serialising() {
        let transaction = Transaction {
            id: "t2".to_owned(),
            transaction_type: TransactionType::Expense,
            name: "Coffee".to_owned(),
            amount: 4.5,
            date: datetime!(2023-05-15 09:20:00),
            status: TransactionStatus::Pending,
            category: "food".to_owned(),
            icon: "food".to_owned(),
            user: None,
        };

        let value = serde_json::to_value(&transaction).unwrap();

        assert_eq!(value["type"], "expense");
        assert_eq!(value["status"], "pending");
        assert_eq!(value["date"], "2023-05-15T09:20:00");
        assert!(value.get("user").is_none());
    }

    #[test]
    fn keeps_user_when_serialising() {
        let transaction = Transaction {
            id: "t9".to_owned(),
            transaction_type: TransactionType::Income,
            name: "Bonus".to_owned(),
            amount: 1200.0,
            date: datetime!(2023-05-20 09:45:00),
            status: TransactionStatus::Completed,
            category: "bonus".to_owned(),
            icon: "salary".to_owned(),
            user: Some(UserEmail::new("test@example.com")),
        };

        let value = serde_json::to_value(&transaction).unwrap();

        assert_eq!(value["user"], "test@example.com");
    }
}
