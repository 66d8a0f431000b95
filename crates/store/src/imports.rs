// crates/store/src/imports.rs
//! CSV uploads, the import-report list, and report watching.
//!
//! The store owns an [`ImportPoller`], so every watch started through it is
//! cancelled when the store is dropped.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use finview_client::{ApiError, FinanceClient};
use finview_types::{CsvUploadResponse, ImportReport};

use crate::poller::{ImportPoller, PollerConfig, StopHandle};

pub struct ImportStore {
    client: Arc<FinanceClient>,
    poller: ImportPoller,
    reports: RwLock<Vec<ImportReport>>,
    loading: AtomicBool,
    uploading: AtomicBool,
    last_error: RwLock<Option<String>>,
}

impl ImportStore {
    pub fn new(client: Arc<FinanceClient>) -> Self {
        Self::with_poller_config(client, PollerConfig::default())
    }

    pub fn with_poller_config(client: Arc<FinanceClient>, config: PollerConfig) -> Self {
        let poller = ImportPoller::with_config(client.clone(), config);
        Self {
            client,
            poller,
            reports: RwLock::new(Vec::new()),
            loading: AtomicBool::new(false),
            uploading: AtomicBool::new(false),
            last_error: RwLock::new(None),
        }
    }

    pub async fn refresh(&self) -> Result<Vec<ImportReport>, ApiError> {
        self.loading.store(true, Ordering::Relaxed);
        self.set_error(None);
        let result = self.client.list_import_reports().await;
        self.loading.store(false, Ordering::Relaxed);
        match result {
            Ok(reports) => {
                if let Ok(mut cache) = self.reports.write() {
                    *cache = reports.clone();
                }
                Ok(reports)
            }
            Err(e) => {
                self.set_error(Some(e.to_string()));
                Err(e)
            }
        }
    }

    pub async fn get(&self, id: u64) -> Result<ImportReport, ApiError> {
        self.record(self.client.get_import_report(id).await)
    }

    pub async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<CsvUploadResponse, ApiError> {
        self.uploading.store(true, Ordering::Relaxed);
        self.set_error(None);
        let result = self.client.upload_csv(file_name, bytes).await;
        self.uploading.store(false, Ordering::Relaxed);
        self.record(result)
    }

    pub async fn upload_path(&self, path: &Path) -> Result<CsvUploadResponse, ApiError> {
        self.uploading.store(true, Ordering::Relaxed);
        self.set_error(None);
        let result = self.client.upload_csv_path(path).await;
        self.uploading.store(false, Ordering::Relaxed);
        self.record(result)
    }

    /// Start polling one report until it finishes. See
    /// [`ImportPoller::start_polling`] for callback semantics.
    pub fn watch<U, C>(&self, report_id: u64, on_update: U, on_complete: C) -> StopHandle
    where
        U: FnMut(&ImportReport) + Send + 'static,
        C: FnOnce(ImportReport) + Send + 'static,
    {
        self.poller.start_polling(report_id, on_update, on_complete)
    }

    pub fn stop_watching(&self, report_id: u64) {
        self.poller.stop_polling(report_id);
    }

    pub fn stop_all_watches(&self) {
        self.poller.shutdown();
    }

    pub fn active_watch_count(&self) -> usize {
        self.poller.active_count()
    }

    pub fn snapshot(&self) -> Vec<ImportReport> {
        self.reports.read().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Relaxed)
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading.load(Ordering::Relaxed)
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.read().ok().and_then(|e| e.clone())
    }

    pub fn clear_error(&self) {
        self.set_error(None);
    }

    fn set_error(&self, message: Option<String>) {
        if let Ok(mut slot) = self.last_error.write() {
            *slot = message;
        }
    }

    fn record<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(e) = &result {
            self.set_error(Some(e.to_string()));
        }
        result
    }
}
