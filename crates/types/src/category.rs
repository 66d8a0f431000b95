// crates/types/src/category.rs
//! Category and subcategory wire types.
//!
//! Categories carry a lowercase `transaction_type` (`income`/`expense`);
//! this is distinct from the uppercase [`crate::TransactionKind`] on
//! transactions themselves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of money flow a category applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
}

impl CategoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

/// Category in list shape (`GET /finance/categories/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub transaction_type: CategoryKind,
    #[serde(default)]
    pub parent: Option<u64>,
    pub is_active: bool,
}

/// Category in detail shape (`GET /finance/categories/{id}/`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub id: u64,
    pub name: String,
    pub transaction_type: CategoryKind,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
    pub user: u64,
    #[serde(default)]
    pub parent: Option<u64>,
    /// Nested subcategory objects; shape is owned by the backend.
    #[serde(default)]
    pub subcategories: Vec<serde_json::Value>,
}

/// Create/update body for a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    pub transaction_type: CategoryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parent: Option<u64>,
    pub is_active: bool,
}

/// Server-side list filters for categories.
#[derive(Debug, Clone, Default)]
pub struct CategoryQuery {
    pub transaction_type: Option<CategoryKind>,
    pub parent: Option<u64>,
}

/// Subcategory in list shape (`GET /finance/subcategories/`).
///
/// `transaction_type` is inherited from the parent category and read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: u64,
    pub name: String,
    pub category: u64,
    pub transaction_type: CategoryKind,
    pub is_active: bool,
}

/// Create/update body for a subcategory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubcategoryPayload {
    pub name: String,
    pub category: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
}

/// Server-side list filters for subcategories.
#[derive(Debug, Clone, Default)]
pub struct SubcategoryQuery {
    pub category: Option<u64>,
}
