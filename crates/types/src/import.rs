// crates/types/src/import.rs
//! CSV import job wire types for `/finance/import-reports/`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a CSV import job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImportStatus {
    Sent,
    Processing,
    Imported,
    Failed,
}

impl ImportStatus {
    /// A terminal job never changes status again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Imported | Self::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sent => "SENT",
            Self::Processing => "PROCESSING",
            Self::Imported => "IMPORTED",
            Self::Failed => "FAILED",
        }
    }
}

/// Snapshot of a CSV import job. Owned by the backend; the poller only ever
/// holds a transient read-only copy per tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    pub id: u64,
    pub status: ImportStatus,
    pub file_name: String,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub handler_type: Option<String>,
    #[serde(default)]
    pub failed_reason: Option<String>,
    pub success_count: u64,
    pub error_count: u64,
    #[serde(default)]
    pub errors: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,
}

/// Response to `POST /finance/transactions/import-csv/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvUploadResponse {
    pub report_id: u64,
    pub status: String,
    pub status_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_imported_and_failed_are_terminal() {
        assert!(!ImportStatus::Sent.is_terminal());
        assert!(!ImportStatus::Processing.is_terminal());
        assert!(ImportStatus::Imported.is_terminal());
        assert!(ImportStatus::Failed.is_terminal());
    }

    #[test]
    fn report_deserializes_with_null_processed_at() {
        let json = r#"{
            "id": 7, "status": "PROCESSING", "file_name": "extrato.csv",
            "file_path": "/uploads/extrato.csv", "handler_type": null,
            "failed_reason": null, "success_count": 0, "error_count": 0,
            "errors": [], "created_at": "2025-05-01T00:00:00Z",
            "updated_at": "2025-05-01T00:00:05Z", "processed_at": null
        }"#;
        let report: ImportReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.status, ImportStatus::Processing);
        assert!(report.processed_at.is_none());
    }
}
