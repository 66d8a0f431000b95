// crates/types/src/cash_flow.rs
//! Cash-flow view and report wire types for `/finance/cash-flow-views/`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Month index (`"1"`..`"12"`) to amount string, e.g. `{"3": "5000.00"}`.
pub type MonthlyTotals = BTreeMap<String, String>;

/// Category reference inside a cash-flow group definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowGroupCategory {
    pub id: u64,
    pub name: String,
}

/// A group of categories inside a cash-flow view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowGroup {
    pub id: u64,
    pub name: String,
    pub position: u32,
    pub categories: Vec<CashFlowGroupCategory>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A computed result line (subtotal) inside a cash-flow view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowResult {
    pub id: u64,
    pub name: String,
    pub position: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A saved cash-flow view definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowView {
    pub id: u64,
    pub name: String,
    pub groups: Vec<CashFlowGroup>,
    pub results: Vec<CashFlowResult>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Group definition sent when creating a view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowGroupPayload {
    pub name: String,
    pub position: u32,
    pub category_ids: Vec<u64>,
}

/// Result definition sent when creating a view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowResultPayload {
    pub name: String,
    pub position: u32,
}

/// Create body for a cash-flow view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowViewPayload {
    pub name: String,
    pub groups: Vec<CashFlowGroupPayload>,
    pub results: Vec<CashFlowResultPayload>,
}

/// Subcategory row in a yearly report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowReportSubcategory {
    pub id: u64,
    pub name: String,
    pub monthly_totals: MonthlyTotals,
    pub annual_total: String,
}

/// Category row in a yearly report, with its subcategory breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowReportCategory {
    pub id: u64,
    pub name: String,
    pub monthly_totals: MonthlyTotals,
    pub annual_total: String,
    #[serde(default)]
    pub subcategories: Vec<CashFlowReportSubcategory>,
}

/// One row of a yearly report: either a category group or a result line,
/// discriminated by the `type` field on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CashFlowReportItem {
    Group {
        name: String,
        position: u32,
        categories: Vec<CashFlowReportCategory>,
        monthly_totals: MonthlyTotals,
        annual_total: String,
    },
    Result {
        name: String,
        position: u32,
        monthly_totals: MonthlyTotals,
        annual_total: String,
    },
}

impl CashFlowReportItem {
    pub fn name(&self) -> &str {
        match self {
            Self::Group { name, .. } | Self::Result { name, .. } => name,
        }
    }

    pub fn annual_total(&self) -> &str {
        match self {
            Self::Group { annual_total, .. } | Self::Result { annual_total, .. } => annual_total,
        }
    }
}

/// Yearly cash-flow report for one view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowReport {
    pub view_id: u64,
    pub view_name: String,
    pub year: i32,
    pub items: Vec<CashFlowReportItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn report_items_discriminate_on_type() {
        let json = r#"{
            "view_id": 1, "view_name": "Anual", "year": 2025,
            "items": [
                {"type": "group", "name": "Receitas", "position": 0,
                 "categories": [], "monthly_totals": {"1": "100.00"}, "annual_total": "100.00"},
                {"type": "result", "name": "Saldo", "position": 1,
                 "monthly_totals": {}, "annual_total": "100.00"}
            ]
        }"#;
        let report: CashFlowReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.items.len(), 2);
        assert!(matches!(report.items[0], CashFlowReportItem::Group { .. }));
        assert_eq!(report.items[1].name(), "Saldo");
        assert_eq!(report.items[0].annual_total(), "100.00");
    }
}
