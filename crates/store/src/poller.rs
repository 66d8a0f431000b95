// crates/store/src/poller.rs
//! Background polling for CSV import jobs.
//!
//! The backend processes uploaded CSVs asynchronously, so the only way to
//! learn the outcome is to re-fetch the import report until its status goes
//! terminal. [`ImportPoller`] owns one polling task per report id: each task
//! fetches on a fixed cadence, forwards every report to an `on_update`
//! callback, and fires `on_complete` exactly once when the import lands on
//! `IMPORTED` or `FAILED`. A fetch error or the max-duration deadline ends
//! the task without completing it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use finview_client::{ApiError, FinanceClient};
use finview_types::ImportReport;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Source of import reports for the poller. Implemented by
/// [`FinanceClient`]; tests swap in scripted fetchers.
#[async_trait]
pub trait ReportFetcher: Send + Sync + 'static {
    async fn fetch_report(&self, report_id: u64) -> Result<ImportReport, ApiError>;
}

#[async_trait]
impl ReportFetcher for FinanceClient {
    async fn fetch_report(&self, report_id: u64) -> Result<ImportReport, ApiError> {
        self.get_import_report(report_id).await
    }
}

/// Cadence and safety limit for a polling session.
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Fixed delay between poll ticks.
    pub interval: Duration,
    /// A session that has run longer than this stops silently; the import
    /// may still finish server-side, it just stops being watched.
    pub max_duration: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            max_duration: Duration::from_secs(300),
        }
    }
}

struct PollSession {
    seq: u64,
    token: CancellationToken,
}

/// Registry of active polling sessions, one per import report id.
///
/// Starting a second session for a report id cancels the first. Dropping the
/// poller cancels every session, so callbacks never outlive the owner.
pub struct ImportPoller {
    fetcher: Arc<dyn ReportFetcher>,
    config: PollerConfig,
    next_seq: AtomicU64,
    sessions: Arc<Mutex<HashMap<u64, PollSession>>>,
}

impl ImportPoller {
    pub fn new(fetcher: Arc<dyn ReportFetcher>) -> Self {
        Self::with_config(fetcher, PollerConfig::default())
    }

    pub fn with_config(fetcher: Arc<dyn ReportFetcher>, config: PollerConfig) -> Self {
        Self {
            fetcher,
            config,
            next_seq: AtomicU64::new(0),
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Start watching an import report. The first fetch happens immediately,
    /// later ones every `interval`. Returns a handle that stops the session;
    /// stopping is idempotent and safe after the session already ended.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_polling<U, C>(&self, report_id: u64, on_update: U, on_complete: C) -> StopHandle
    where
        U: FnMut(&ImportReport) + Send + 'static,
        C: FnOnce(ImportReport) + Send + 'static,
    {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let token = CancellationToken::new();

        match self.sessions.lock() {
            Ok(mut sessions) => {
                let session = PollSession {
                    seq,
                    token: token.clone(),
                };
                if let Some(old) = sessions.insert(report_id, session) {
                    old.token.cancel();
                    tracing::warn!(report_id, "replacing an active polling session");
                }
            }
            Err(e) => tracing::error!("poller registry lock poisoned: {}", e),
        }

        let fetcher = Arc::clone(&self.fetcher);
        let sessions = Arc::clone(&self.sessions);
        let config = self.config.clone();
        let task_token = token.clone();

        tokio::spawn(async move {
            run_session(fetcher, report_id, config, task_token, on_update, on_complete).await;

            // Remove our own registry entry. The seq check keeps a finished
            // session from evicting a newer one started for the same id.
            if let Ok(mut sessions) = sessions.lock() {
                if sessions.get(&report_id).is_some_and(|s| s.seq == seq) {
                    sessions.remove(&report_id);
                }
            }
        });

        StopHandle { report_id, token }
    }

    /// Cancel the active session for one report id, if any.
    pub fn stop_polling(&self, report_id: u64) {
        if let Ok(mut sessions) = self.sessions.lock() {
            if let Some(session) = sessions.remove(&report_id) {
                session.token.cancel();
                tracing::debug!(report_id, "polling session stopped");
            }
        }
    }

    /// Cancel every active session. Leaves the registry empty.
    pub fn shutdown(&self) {
        if let Ok(mut sessions) = self.sessions.lock() {
            for (report_id, session) in sessions.drain() {
                session.token.cancel();
                tracing::debug!(report_id, "polling session stopped");
            }
        }
    }

    pub fn active_count(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }
}

impl Drop for ImportPoller {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Cancels one polling session. Cloneable; all clones refer to the same
/// session, and `stop` can be called any number of times.
#[derive(Clone)]
pub struct StopHandle {
    report_id: u64,
    token: CancellationToken,
}

impl StopHandle {
    pub fn stop(&self) {
        self.token.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn report_id(&self) -> u64 {
        self.report_id
    }
}

async fn run_session<U, C>(
    fetcher: Arc<dyn ReportFetcher>,
    report_id: u64,
    config: PollerConfig,
    token: CancellationToken,
    mut on_update: U,
    on_complete: C,
) where
    U: FnMut(&ImportReport) + Send + 'static,
    C: FnOnce(ImportReport) + Send + 'static,
{
    let started = Instant::now();
    let mut ticker = tokio::time::interval_at(started + config.interval, config.interval);
    // Fixed-rate cadence; a slow fetch skips ticks instead of bursting.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut on_complete = Some(on_complete);

    loop {
        // The first fetch runs unconditionally, even if stop raced the
        // start. A fetch in flight when the session is cancelled completes,
        // and its result is discarded below.
        let fetched = fetcher.fetch_report(report_id).await;

        if token.is_cancelled() {
            tracing::debug!(report_id, "session cancelled; discarding in-flight result");
            return;
        }

        let report = match fetched {
            Ok(report) => report,
            Err(e) => {
                // No retries: a single fetch failure ends the session
                // without completing it.
                tracing::warn!(report_id, error = %e, "import status fetch failed; polling stopped");
                return;
            }
        };

        let status = report.status;
        on_update(&report);

        if status.is_terminal() {
            tracing::debug!(report_id, status = status.as_str(), "import reached terminal status");
            if let Some(complete) = on_complete.take() {
                complete(report);
            }
            return;
        }

        if started.elapsed() >= config.max_duration {
            tracing::warn!(
                report_id,
                elapsed_secs = started.elapsed().as_secs(),
                "polling deadline reached before the import finished"
            );
            return;
        }

        tokio::select! {
            _ = token.cancelled() => {
                tracing::debug!(report_id, "polling session stopped");
                return;
            }
            _ = ticker.tick() => {}
        }
    }
}
