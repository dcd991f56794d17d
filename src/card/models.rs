use serde::{Deserialize, Serialize};

use crate::user::{Owned, UserEmail};

/// The payment network that issued a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardNetwork {
    /// Visa.
    Visa,
    /// Mastercard.
    Mastercard,
    /// American Express.
    Amex,
    /// Discover.
    Discover,
}

/// A payment card.
///
/// The card number and CVV are stored masked, e.g. "4111 **** **** 1234".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique identifier, e.g. "c1".
    pub id: String,
    /// The network that issued the card.
    #[serde(rename = "type")]
    pub network: CardNetwork,
    /// The masked card number.
    pub number: String,
    /// The name printed on the card.
    pub holder_name: String,
    /// Expiry as "MM/YY".
    pub expiry_date: String,
    /// The masked card verification value.
    pub cvv: String,
    /// The amount available on the card.
    pub balance: f64,
    /// The colour the front end renders the card in.
    pub color: String,
    /// Whether this is the user's default card.
    #[serde(default)]
    pub is_default: bool,
    /// The user the card belongs to. Shared if `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserEmail>,
}

impl Owned for Card {
    fn owner(&self) -> Option<&UserEmail> {
        self.user.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::card::{Card, CardNetwork};

    #[test]
    fn uses_camel_case_keys() {
        let json = json!({
            "id": "c4",
            "type": "visa",
            "number": "4222 **** **** 5678",
            "holderName": "Test User",
            "expiryDate": "09/26",
            "cvv": "***",
            "balance": 4250.5,
            "color": "orange",
            "isDefault": true,
            "user": "test@example.com"
        });

        let card: Card = serde_json::from_value(json.clone()).unwrap();

        assert_eq!(card.network, CardNetwork::Visa);
        assert_eq!(card.holder_name, "Test User");
        assert!(card.is_default);
        assert_eq!(serde_json::to_value(&card).unwrap(), json);
    }
}
