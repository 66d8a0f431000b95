// crates/client/src/transactions.rs
//! `/finance/transactions/` operations.

use finview_types::{Transaction, TransactionPayload, TransactionQuery};

use crate::{ApiError, FinanceClient};

impl FinanceClient {
    /// List transactions, optionally filtered server-side.
    pub async fn list_transactions(
        &self,
        query: &TransactionQuery,
    ) -> Result<Vec<Transaction>, ApiError> {
        let mut params = Vec::new();
        if let Some(account_id) = query.account_id {
            params.push(("account_id", account_id.to_string()));
        }
        if let Some(category_id) = query.category_id {
            params.push(("category_id", category_id.to_string()));
        }
        if let Some(credit_card_id) = query.credit_card_id {
            params.push(("credit_card_id", credit_card_id.to_string()));
        }
        if let Some(occurred_at) = query.occurred_at {
            params.push(("occurred_at", occurred_at.to_string()));
        }
        if let Some(kind) = query.transaction_type {
            params.push(("transaction_type", kind.as_str().to_string()));
        }
        self.get_json("/finance/transactions/", &params).await
    }

    pub async fn get_transaction(&self, id: u64) -> Result<Transaction, ApiError> {
        self.get_json(&format!("/finance/transactions/{id}/"), &[]).await
    }

    pub async fn create_transaction(
        &self,
        payload: &TransactionPayload,
    ) -> Result<Transaction, ApiError> {
        self.post_json("/finance/transactions/", payload).await
    }

    pub async fn update_transaction(
        &self,
        id: u64,
        payload: &TransactionPayload,
    ) -> Result<Transaction, ApiError> {
        self.put_json(&format!("/finance/transactions/{id}/"), payload).await
    }

    pub async fn delete_transaction(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/finance/transactions/{id}/")).await
    }
}
