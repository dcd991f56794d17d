use time::PrimitiveDateTime;

use crate::{
    message::Message,
    transaction::{Transaction, TransactionStatus, TransactionType},
    user::UserEmail,
};

pub(crate) fn create_test_transaction(
    id: &str,
    transaction_type: TransactionType,
    amount: f64,
    date: PrimitiveDateTime,
    category: &str,
    user: Option<&str>,
) -> Transaction {
    Transaction {
        id: id.to_owned(),
        transaction_type,
        name: format!("{category} {id}"),
        amount,
        date,
        status: TransactionStatus::Completed,
        category: category.to_owned(),
        icon: category.to_owned(),
        user: user.map(UserEmail::new),
    }
}

pub(crate) fn test_message(id: &str, is_read: bool, date: PrimitiveDateTime) -> Message {
    Message {
        id: id.to_owned(),
        sender: "Support".to_owned(),
        subject: format!("Subject {id}"),
        content: format!("Content {id}"),
        date,
        is_read,
    }
}
