// crates/client/src/categories.rs
//! `/finance/categories/` operations.

use finview_types::{Category, CategoryDetail, CategoryPayload, CategoryQuery};

use crate::{ApiError, FinanceClient};

impl FinanceClient {
    pub async fn list_categories(&self, query: &CategoryQuery) -> Result<Vec<Category>, ApiError> {
        let mut params = Vec::new();
        if let Some(kind) = query.transaction_type {
            params.push(("transaction_type", kind.as_str().to_string()));
        }
        if let Some(parent) = query.parent {
            params.push(("parent", parent.to_string()));
        }
        self.get_json("/finance/categories/", &params).await
    }

    pub async fn get_category(&self, id: u64) -> Result<CategoryDetail, ApiError> {
        self.get_json(&format!("/finance/categories/{id}/"), &[]).await
    }

    pub async fn create_category(&self, payload: &CategoryPayload) -> Result<Category, ApiError> {
        self.post_json("/finance/categories/", payload).await
    }

    pub async fn update_category(&self, id: u64, payload: &CategoryPayload) -> Result<Category, ApiError> {
        self.put_json(&format!("/finance/categories/{id}/"), payload).await
    }

    pub async fn delete_category(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/finance/categories/{id}/")).await
    }
}
