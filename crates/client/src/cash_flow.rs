// crates/client/src/cash_flow.rs
//! `/finance/cash-flow-views/` operations.

use finview_types::{CashFlowReport, CashFlowView, CashFlowViewPayload, Paginated};

use crate::{ApiError, FinanceClient};

impl FinanceClient {
    /// List saved cash-flow views. This endpoint is always paginated.
    pub async fn list_cash_flow_views(&self) -> Result<Vec<CashFlowView>, ApiError> {
        let page: Paginated<CashFlowView> =
            self.get_json("/finance/cash-flow-views/", &[]).await?;
        Ok(page.results)
    }

    pub async fn get_cash_flow_view(&self, id: u64) -> Result<CashFlowView, ApiError> {
        self.get_json(&format!("/finance/cash-flow-views/{id}/"), &[]).await
    }

    pub async fn create_cash_flow_view(
        &self,
        payload: &CashFlowViewPayload,
    ) -> Result<CashFlowView, ApiError> {
        self.post_json("/finance/cash-flow-views/", payload).await
    }

    /// Fetch the yearly report computed server-side for one view.
    pub async fn get_cash_flow_report(
        &self,
        view_id: u64,
        year: i32,
    ) -> Result<CashFlowReport, ApiError> {
        self.get_json(
            &format!("/finance/cash-flow-views/{view_id}/report/"),
            &[("year", year.to_string())],
        )
        .await
    }
}
