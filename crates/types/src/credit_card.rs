// crates/types/src/credit_card.rs
//! Credit card wire types for `/finance/credit-cards/`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A credit card. `close_date` and `due_date` are days of the month (1-31).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCard {
    pub id: u64,
    pub name: String,
    pub close_date: u8,
    pub due_date: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Create/update body for a credit card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditCardPayload {
    pub name: String,
    pub close_date: u8,
    pub due_date: u8,
    pub is_active: bool,
}

/// Server-side list filters for credit cards.
#[derive(Debug, Clone, Default)]
pub struct CreditCardQuery {
    pub close_date: Option<u8>,
    pub due_date: Option<u8>,
    pub is_active: Option<bool>,
}
