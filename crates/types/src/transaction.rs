// crates/types/src/transaction.rs
//! Transaction wire types for `/finance/transactions/`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{Account, Category, CreditCard};

/// Kind of a transaction. Uppercase on the wire, unlike [`crate::CategoryKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Income,
    Expense,
    Transfer,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
            Self::Transfer => "TRANSFER",
        }
    }
}

/// A user-defined tag attached to transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A transaction as returned by the backend.
///
/// The nested `account`/`credit_card`/`category`/`subcategory` objects are
/// optional: a card purchase has no account, an income has no card, and
/// uncategorized imports have neither category nor subcategory.
/// `amount` is a decimal string as sent by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub user: u64,
    pub transaction_type: TransactionKind,
    pub amount: String,
    #[serde(default)]
    pub description: Option<String>,
    pub occurred_at: NaiveDate,
    #[serde(default)]
    pub charge_at_card: Option<NaiveDate>,
    pub installments_total: u32,
    pub installment_number: u32,
    #[serde(default)]
    pub installment_group_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub account: Option<Account>,
    #[serde(default)]
    pub account_id: Option<u64>,
    #[serde(default)]
    pub credit_card: Option<CreditCard>,
    #[serde(default)]
    pub credit_card_id: Option<u64>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub category_id: Option<u64>,
    #[serde(default)]
    pub subcategory: Option<Category>,
    #[serde(default)]
    pub subcategory_id: Option<u64>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub tag_ids: Option<Vec<u64>>,
}

/// Create/update body for a transaction.
///
/// The `*_id` fields are serialized even when `None`: the backend reads an
/// explicit `null` as "detach", which is how edits clear an account or
/// category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionPayload {
    pub transaction_type: TransactionKind,
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub occurred_at: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_at_card: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installments_total: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment_number: Option<u32>,
    pub account_id: Option<u64>,
    pub credit_card_id: Option<u64>,
    pub category_id: Option<u64>,
    pub subcategory_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<u64>>,
}

/// Server-side list filters for transactions.
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    pub account_id: Option<u64>,
    pub category_id: Option<u64>,
    pub credit_card_id: Option<u64>,
    pub occurred_at: Option<NaiveDate>,
    pub transaction_type: Option<TransactionKind>,
}
