// crates/store/src/cash_flow.rs
//! Cached cash-flow views and the currently loaded yearly report.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use finview_client::{ApiError, FinanceClient};
use finview_types::{CashFlowReport, CashFlowReportItem, CashFlowView, CashFlowViewPayload};

/// Month names as rendered in report headers (the product is pt-BR).
const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Display name for a 1-based month index, as used in report column keys.
pub fn month_name(month: u8) -> Option<&'static str> {
    match month {
        1..=12 => Some(MONTH_NAMES[(month - 1) as usize]),
        _ => None,
    }
}

/// Find a report row (group or result line) by its display name.
pub fn find_report_item<'a>(
    report: &'a CashFlowReport,
    name: &str,
) -> Option<&'a CashFlowReportItem> {
    report.items.iter().find(|item| item.name() == name)
}

/// Monthly total for a row; absent months mean zero activity.
pub fn monthly_total(item: &CashFlowReportItem, month: u8) -> Option<&str> {
    let totals = match item {
        CashFlowReportItem::Group { monthly_totals, .. }
        | CashFlowReportItem::Result { monthly_totals, .. } => monthly_totals,
    };
    totals.get(&month.to_string()).map(String::as_str)
}

/// Holds the saved view definitions and at most one loaded report. Loading
/// a report replaces the previous one; views and report track errors
/// separately so a failed report load keeps the view list usable.
pub struct CashFlowStore {
    client: Arc<FinanceClient>,
    views: RwLock<Vec<CashFlowView>>,
    report: RwLock<Option<CashFlowReport>>,
    loading: AtomicBool,
    report_loading: AtomicBool,
    last_error: RwLock<Option<String>>,
    report_error: RwLock<Option<String>>,
}

impl CashFlowStore {
    pub fn new(client: Arc<FinanceClient>) -> Self {
        Self {
            client,
            views: RwLock::new(Vec::new()),
            report: RwLock::new(None),
            loading: AtomicBool::new(false),
            report_loading: AtomicBool::new(false),
            last_error: RwLock::new(None),
            report_error: RwLock::new(None),
        }
    }

    pub async fn refresh_views(&self) -> Result<Vec<CashFlowView>, ApiError> {
        self.loading.store(true, Ordering::Relaxed);
        self.set_error(None);
        let result = self.client.list_cash_flow_views().await;
        self.loading.store(false, Ordering::Relaxed);
        match result {
            Ok(views) => {
                if let Ok(mut cache) = self.views.write() {
                    *cache = views.clone();
                }
                Ok(views)
            }
            Err(e) => {
                self.set_error(Some(e.to_string()));
                Err(e)
            }
        }
    }

    pub async fn get_view(&self, id: u64) -> Result<CashFlowView, ApiError> {
        let result = self.client.get_cash_flow_view(id).await;
        if let Err(e) = &result {
            self.set_error(Some(e.to_string()));
        }
        result
    }

    pub async fn create_view(&self, payload: &CashFlowViewPayload) -> Result<CashFlowView, ApiError> {
        let result = self.client.create_cash_flow_view(payload).await;
        match result {
            Ok(view) => {
                self.refresh_views().await?;
                Ok(view)
            }
            Err(e) => {
                self.set_error(Some(e.to_string()));
                Err(e)
            }
        }
    }

    /// Load the yearly report for one view and keep it as the current one.
    pub async fn load_report(&self, view_id: u64, year: i32) -> Result<CashFlowReport, ApiError> {
        self.report_loading.store(true, Ordering::Relaxed);
        if let Ok(mut slot) = self.report_error.write() {
            *slot = None;
        }
        let result = self.client.get_cash_flow_report(view_id, year).await;
        self.report_loading.store(false, Ordering::Relaxed);
        match result {
            Ok(report) => {
                if let Ok(mut slot) = self.report.write() {
                    *slot = Some(report.clone());
                }
                Ok(report)
            }
            Err(e) => {
                if let Ok(mut slot) = self.report_error.write() {
                    *slot = Some(e.to_string());
                }
                Err(e)
            }
        }
    }

    pub fn views(&self) -> Vec<CashFlowView> {
        self.views.read().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn current_report(&self) -> Option<CashFlowReport> {
        self.report.read().ok().and_then(|r| r.clone())
    }

    pub fn clear_report(&self) {
        if let Ok(mut slot) = self.report.write() {
            *slot = None;
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Relaxed)
    }

    pub fn is_report_loading(&self) -> bool {
        self.report_loading.load(Ordering::Relaxed)
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.read().ok().and_then(|e| e.clone())
    }

    pub fn report_error(&self) -> Option<String> {
        self.report_error.read().ok().and_then(|e| e.clone())
    }

    fn set_error(&self, message: Option<String>) {
        if let Ok(mut slot) = self.last_error.write() {
            *slot = message;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn month_names_cover_the_year() {
        assert_eq!(month_name(1), Some("Janeiro"));
        assert_eq!(month_name(3), Some("Março"));
        assert_eq!(month_name(12), Some("Dezembro"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn report_rows_are_found_by_name() {
        let report: CashFlowReport = serde_json::from_str(
            r#"{
                "view_id": 1, "view_name": "Anual", "year": 2025,
                "items": [
                    {"type": "group", "name": "Receitas", "position": 0,
                     "categories": [], "monthly_totals": {"3": "5000.00"},
                     "annual_total": "5000.00"},
                    {"type": "result", "name": "Saldo", "position": 1,
                     "monthly_totals": {}, "annual_total": "5000.00"}
                ]
            }"#,
        )
        .unwrap();

        let row = find_report_item(&report, "Receitas").unwrap();
        assert_eq!(monthly_total(row, 3), Some("5000.00"));
        assert_eq!(monthly_total(row, 4), None);
        assert!(find_report_item(&report, "Despesas").is_none());
    }
}
