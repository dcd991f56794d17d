//! The demo dataset served when no dataset file is given.
//!
//! Transactions and cards without a user are shared by everyone. The records
//! for "test@example.com" show how the per-user view differs.

use std::collections::HashMap;

use time::{PrimitiveDateTime, macros::datetime};

use crate::{
    analytics::SavingsGoal,
    card::{Card, CardNetwork},
    message::Message,
    store::Dataset,
    transaction::{Transaction, TransactionStatus, TransactionType},
    user::UserEmail,
};

/// The e-mail of the demo user that owns the per-user sample records.
pub const TEST_USER_EMAIL: &str = "test@example.com";

/// Build the demo dataset.
pub fn sample_dataset() -> Dataset {
    Dataset {
        transactions: sample_transactions(),
        cards: sample_cards(),
        messages: sample_messages(),
        savings_goal: SavingsGoal {
            current: 5000.0,
            target: 10000.0,
            percentage: 50.0,
        },
        user_savings_goals: HashMap::from([(
            UserEmail::new(TEST_USER_EMAIL),
            SavingsGoal {
                current: 3500.0,
                target: 8000.0,
                percentage: 43.75,
            },
        )]),
    }
}

struct SampleTransaction {
    id: &'static str,
    transaction_type: TransactionType,
    name: &'static str,
    amount: f64,
    date: PrimitiveDateTime,
    category: &'static str,
    icon: &'static str,
    user: Option<&'static str>,
}

impl From<SampleTransaction> for Transaction {
    fn from(sample: SampleTransaction) -> Self {
        Transaction {
            id: sample.id.to_owned(),
            transaction_type: sample.transaction_type,
            name: sample.name.to_owned(),
            amount: sample.amount,
            date: sample.date,
            status: TransactionStatus::Completed,
            category: sample.category.to_owned(),
            icon: sample.icon.to_owned(),
            user: sample.user.map(UserEmail::new),
        }
    }
}

fn sample_transactions() -> Vec<Transaction> {
    use TransactionType::{Expense, Income};

    let samples = [
        SampleTransaction {
            id: "t1",
            transaction_type: Income,
            name: "Salary Payment",
            amount: 2850.00,
            date: datetime!(2023-05-15 10:30:00),
            category: "salary",
            icon: "salary",
            user: None,
        },
        SampleTransaction {
            id: "t2",
            transaction_type: Expense,
            name: "Grocery Shopping",
            amount: 120.50,
            date: datetime!(2023-05-14 15:45:00),
            category: "shopping",
            icon: "shopping",
            user: None,
        },
        SampleTransaction {
            id: "t3",
            transaction_type: Expense,
            name: "Netflix Subscription",
            amount: 14.99,
            date: datetime!(2023-05-10 08:00:00),
            category: "entertainment",
            icon: "entertainment",
            user: None,
        },
        SampleTransaction {
            id: "t4",
            transaction_type: Expense,
            name: "Electricity Bill",
            amount: 85.75,
            date: datetime!(2023-05-05 09:15:00),
            category: "utilities",
            icon: "utilities",
            user: None,
        },
        SampleTransaction {
            id: "t5",
            transaction_type: Income,
            name: "Freelance Payment",
            amount: 450.00,
            date: datetime!(2023-05-03 14:20:00),
            category: "freelance",
            icon: "freelance",
            user: None,
        },
        SampleTransaction {
            id: "t6",
            transaction_type: Expense,
            name: "Restaurant Dinner",
            amount: 65.30,
            date: datetime!(2023-05-01 20:30:00),
            category: "food",
            icon: "food",
            user: None,
        },
        SampleTransaction {
            id: "t7",
            transaction_type: Expense,
            name: "Gas Station",
            amount: 45.00,
            date: datetime!(2023-04-28 12:15:00),
            category: "transportation",
            icon: "transportation",
            user: None,
        },
        SampleTransaction {
            id: "t8",
            transaction_type: Income,
            name: "Tax Refund",
            amount: 750.25,
            date: datetime!(2023-04-25 11:00:00),
            category: "tax",
            icon: "tax",
            user: None,
        },
        SampleTransaction {
            id: "t9",
            transaction_type: Income,
            name: "Bonus Payment",
            amount: 1200.00,
            date: datetime!(2023-05-20 09:45:00),
            category: "bonus",
            icon: "salary",
            user: Some(TEST_USER_EMAIL),
        },
        SampleTransaction {
            id: "t10",
            transaction_type: Expense,
            name: "Amazon Purchase",
            amount: 89.99,
            date: datetime!(2023-05-19 16:30:00),
            category: "shopping",
            icon: "shopping",
            user: Some(TEST_USER_EMAIL),
        },
        SampleTransaction {
            id: "t11",
            transaction_type: Expense,
            name: "Gym Membership",
            amount: 49.99,
            date: datetime!(2023-05-18 08:15:00),
            category: "health",
            icon: "health",
            user: Some(TEST_USER_EMAIL),
        },
        SampleTransaction {
            id: "t12",
            transaction_type: Expense,
            name: "Internet Bill",
            amount: 79.99,
            date: datetime!(2023-05-17 10:00:00),
            category: "utilities",
            icon: "utilities",
            user: Some(TEST_USER_EMAIL),
        },
        SampleTransaction {
            id: "t13",
            transaction_type: Income,
            name: "Consulting Fee",
            amount: 850.00,
            date: datetime!(2023-05-16 14:30:00),
            category: "freelance",
            icon: "freelance",
            user: Some(TEST_USER_EMAIL),
        },
        SampleTransaction {
            id: "t14",
            transaction_type: Expense,
            name: "Coffee Shop",
            amount: 12.50,
            date: datetime!(2023-05-15 09:20:00),
            category: "food",
            icon: "food",
            user: Some(TEST_USER_EMAIL),
        },
        SampleTransaction {
            id: "t15",
            transaction_type: Expense,
            name: "Uber Ride",
            amount: 24.75,
            date: datetime!(2023-05-14 19:45:00),
            category: "transportation",
            icon: "transportation",
            user: Some(TEST_USER_EMAIL),
        },
        SampleTransaction {
            id: "t16",
            transaction_type: Expense,
            name: "Movie Tickets",
            amount: 32.00,
            date: datetime!(2023-05-13 20:15:00),
            category: "entertainment",
            icon: "entertainment",
            user: Some(TEST_USER_EMAIL),
        },
    ];

    samples.into_iter().map(Transaction::from).collect()
}

#[allow(clippy::too_many_arguments)]
fn card(
    id: &str,
    network: CardNetwork,
    number: &str,
    holder_name: &str,
    expiry_date: &str,
    balance: f64,
    color: &str,
    is_default: bool,
    user: Option<&str>,
) -> Card {
    let cvv = if network == CardNetwork::Amex {
        "****"
    } else {
        "***"
    };

    Card {
        id: id.to_owned(),
        network,
        number: number.to_owned(),
        holder_name: holder_name.to_owned(),
        expiry_date: expiry_date.to_owned(),
        cvv: cvv.to_owned(),
        balance,
        color: color.to_owned(),
        is_default,
        user: user.map(UserEmail::new),
    }
}

fn sample_cards() -> Vec<Card> {
    use CardNetwork::{Amex, Discover, Mastercard, Visa};

    let test_user = Some(TEST_USER_EMAIL);

    vec![
        card(
            "c1",
            Visa,
            "4111 **** **** 1234",
            "John Doe",
            "05/25",
            3500.75,
            "purple",
            true,
            None,
        ),
        card(
            "c2",
            Mastercard,
            "5555 **** **** 5678",
            "John Doe",
            "08/24",
            1250.50,
            "blue",
            false,
            None,
        ),
        card(
            "c3",
            Amex,
            "3782 **** **** 9012",
            "John Doe",
            "12/26",
            5200.25,
            "green",
            false,
            None,
        ),
        card(
            "c4",
            Visa,
            "4222 **** **** 5678",
            "Test User",
            "09/26",
            4250.50,
            "orange",
            true,
            test_user,
        ),
        card(
            "c5",
            Mastercard,
            "5333 **** **** 9012",
            "Test User",
            "11/25",
            2800.75,
            "red",
            false,
            test_user,
        ),
        card(
            "c6",
            Discover,
            "6011 **** **** 3456",
            "Test User",
            "03/27",
            1750.25,
            "teal",
            false,
            test_user,
        ),
    ]
}

fn message(
    id: &str,
    sender: &str,
    subject: &str,
    content: &str,
    date: PrimitiveDateTime,
    is_read: bool,
) -> Message {
    Message {
        id: id.to_owned(),
        sender: sender.to_owned(),
        subject: subject.to_owned(),
        content: content.to_owned(),
        date,
        is_read,
    }
}

fn sample_messages() -> Vec<Message> {
    vec![
        message(
            "m1",
            "BankDash Support",
            "Welcome to BankDash",
            "Welcome to BankDash! We're excited to have you on board. \
            If you have any questions, feel free to reach out to our support team.",
            datetime!(2023-05-15 09:00:00),
            true,
        ),
        message(
            "m2",
            "Security Team",
            "Security Alert: New Login",
            "We detected a new login to your account from a new device. \
            If this was you, you can ignore this message. \
            If not, please contact our security team immediately.",
            datetime!(2023-05-14 15:30:00),
            true,
        ),
        message(
            "m3",
            "Transactions Team",
            "Large Transaction Notification",
            "A transaction of $450.00 was processed on your account. \
            This is an automated notification for transactions over $400.",
            datetime!(2023-05-03 14:25:00),
            false,
        ),
        message(
            "m4",
            "Card Services",
            "Your New Card is Ready",
            "Your new card has been processed and will be delivered within 3-5 business days. \
            Please activate it as soon as you receive it.",
            datetime!(2023-04-28 11:15:00),
            false,
        ),
        message(
            "m5",
            "BankDash Offers",
            "Special Offer: Upgrade Your Account",
            "Based on your account activity, you're eligible for our premium account \
            with additional benefits. Click here to learn more.",
            datetime!(2023-04-20 10:00:00),
            false,
        ),
    ]
}
