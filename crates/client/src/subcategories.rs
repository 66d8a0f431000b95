// crates/client/src/subcategories.rs
//! `/finance/subcategories/` operations.

use finview_types::{ListResponse, Subcategory, SubcategoryPayload, SubcategoryQuery};

use crate::{ApiError, FinanceClient};

impl FinanceClient {
    /// List subcategories. The backend has returned both a bare array and a
    /// paginated envelope for this endpoint; both parse.
    pub async fn list_subcategories(
        &self,
        query: &SubcategoryQuery,
    ) -> Result<Vec<Subcategory>, ApiError> {
        let mut params = Vec::new();
        if let Some(category) = query.category {
            params.push(("category", category.to_string()));
        }
        let response: ListResponse<Subcategory> =
            self.get_json("/finance/subcategories/", &params).await?;
        Ok(response.into_results())
    }

    pub async fn get_subcategory(&self, id: u64) -> Result<Subcategory, ApiError> {
        self.get_json(&format!("/finance/subcategories/{id}/"), &[]).await
    }

    pub async fn create_subcategory(
        &self,
        payload: &SubcategoryPayload,
    ) -> Result<Subcategory, ApiError> {
        self.post_json("/finance/subcategories/", payload).await
    }

    pub async fn update_subcategory(
        &self,
        id: u64,
        payload: &SubcategoryPayload,
    ) -> Result<Subcategory, ApiError> {
        self.put_json(&format!("/finance/subcategories/{id}/"), payload).await
    }

    pub async fn delete_subcategory(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/finance/subcategories/{id}/")).await
    }
}
