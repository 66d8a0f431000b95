// crates/client/src/import.rs
//! CSV upload and import-report operations.

use std::path::Path;

use finview_types::{CsvUploadResponse, ImportReport, ListResponse};
use reqwest::multipart::{Form, Part};

use crate::{ApiError, FinanceClient};

/// True when `name` carries a `.csv` extension, case-insensitive.
fn is_csv_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".csv")
}

impl FinanceClient {
    /// Upload a CSV for import. The file name is validated *before* any
    /// request is built; a bad extension never reaches the network.
    pub async fn upload_csv(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<CsvUploadResponse, ApiError> {
        if !is_csv_name(file_name) {
            return Err(ApiError::InvalidFile {
                name: file_name.to_string(),
            });
        }

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("text/csv")?;
        let form = Form::new().part("file", part);
        self.post_multipart("/finance/transactions/import-csv/", form)
            .await
    }

    /// Read a file from disk and upload it. Validation still happens first,
    /// so a non-CSV path fails without touching the file.
    pub async fn upload_csv_path(&self, path: &Path) -> Result<CsvUploadResponse, ApiError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !is_csv_name(&file_name) {
            return Err(ApiError::InvalidFile { name: file_name });
        }
        let bytes = tokio::fs::read(path).await?;
        self.upload_csv(&file_name, bytes).await
    }

    /// List all import reports for the user.
    pub async fn list_import_reports(&self) -> Result<Vec<ImportReport>, ApiError> {
        let response: ListResponse<ImportReport> =
            self.get_json("/finance/import-reports/", &[]).await?;
        Ok(response.into_results())
    }

    /// Fetch one import report by id. This is the poller's tick fetch.
    pub async fn get_import_report(&self, id: u64) -> Result<ImportReport, ApiError> {
        self.get_json(&format!("/finance/import-reports/{id}/"), &[]).await
    }
}
