// crates/types/src/account.rs
//! Account wire types for `/finance/accounts/`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bank account as returned by the backend.
///
/// `current_balance` is a decimal string exactly as the backend sends it
/// (e.g. `"1234.56"`); it is never reparsed on the wire path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    pub name: String,
    pub current_balance: String,
    /// Currently always `"checking"` server-side.
    pub account_type: String,
    /// Currently always `"BRL"` server-side.
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Create/update body for an account (POST and PUT share the shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountPayload {
    pub name: String,
    pub current_balance: String,
    pub account_type: String,
    pub currency: String,
    pub is_active: bool,
}

/// Server-side list filters for accounts.
#[derive(Debug, Clone, Default)]
pub struct AccountQuery {
    pub account_type: Option<String>,
    pub currency: Option<String>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn account_deserializes_backend_shape() {
        let json = r#"{
            "id": 3,
            "name": "Nubank",
            "current_balance": "1500.25",
            "account_type": "checking",
            "currency": "BRL",
            "created_at": "2025-06-01T12:30:00-03:00",
            "updated_at": "2025-06-02T08:00:00Z",
            "is_active": true
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.id, 3);
        assert_eq!(account.current_balance, "1500.25");
        assert!(account.is_active);
    }
}
