// crates/client/src/accounts.rs
//! `/finance/accounts/` operations.

use finview_types::{Account, AccountPayload, AccountQuery};

use crate::{ApiError, FinanceClient};

impl FinanceClient {
    /// List accounts, optionally filtered server-side.
    pub async fn list_accounts(&self, query: &AccountQuery) -> Result<Vec<Account>, ApiError> {
        let mut params = Vec::new();
        if let Some(account_type) = &query.account_type {
            params.push(("account_type", account_type.clone()));
        }
        if let Some(currency) = &query.currency {
            params.push(("currency", currency.clone()));
        }
        if let Some(is_active) = query.is_active {
            params.push(("is_active", is_active.to_string()));
        }
        self.get_json("/finance/accounts/", &params).await
    }

    pub async fn get_account(&self, id: u64) -> Result<Account, ApiError> {
        self.get_json(&format!("/finance/accounts/{id}/"), &[]).await
    }

    pub async fn create_account(&self, payload: &AccountPayload) -> Result<Account, ApiError> {
        self.post_json("/finance/accounts/", payload).await
    }

    pub async fn update_account(&self, id: u64, payload: &AccountPayload) -> Result<Account, ApiError> {
        self.put_json(&format!("/finance/accounts/{id}/"), payload).await
    }

    pub async fn delete_account(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/finance/accounts/{id}/")).await
    }
}
