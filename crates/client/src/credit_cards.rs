// crates/client/src/credit_cards.rs
//! `/finance/credit-cards/` operations.

use finview_types::{CreditCard, CreditCardPayload, CreditCardQuery};

use crate::{ApiError, FinanceClient};

impl FinanceClient {
    pub async fn list_credit_cards(
        &self,
        query: &CreditCardQuery,
    ) -> Result<Vec<CreditCard>, ApiError> {
        let mut params = Vec::new();
        if let Some(close_date) = query.close_date {
            params.push(("close_date", close_date.to_string()));
        }
        if let Some(due_date) = query.due_date {
            params.push(("due_date", due_date.to_string()));
        }
        if let Some(is_active) = query.is_active {
            params.push(("is_active", is_active.to_string()));
        }
        self.get_json("/finance/credit-cards/", &params).await
    }

    pub async fn get_credit_card(&self, id: u64) -> Result<CreditCard, ApiError> {
        self.get_json(&format!("/finance/credit-cards/{id}/"), &[]).await
    }

    pub async fn create_credit_card(
        &self,
        payload: &CreditCardPayload,
    ) -> Result<CreditCard, ApiError> {
        self.post_json("/finance/credit-cards/", payload).await
    }

    pub async fn update_credit_card(
        &self,
        id: u64,
        payload: &CreditCardPayload,
    ) -> Result<CreditCard, ApiError> {
        self.put_json(&format!("/finance/credit-cards/{id}/"), payload).await
    }

    pub async fn delete_credit_card(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/finance/credit-cards/{id}/")).await
    }
}
