// crates/store/tests/store_tests.rs
//! Store behavior against a mock backend: cache refresh, error capture,
//! and watching an import through the real HTTP client.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use finview_client::{ClientConfig, FinanceClient};
use finview_store::{AccountsStore, ImportStore, PollerConfig};
use finview_types::{AccountQuery, ImportStatus};
use pretty_assertions::assert_eq;

fn client_for(server: &mockito::ServerGuard) -> Arc<FinanceClient> {
    Arc::new(FinanceClient::new(ClientConfig::new(server.url())).unwrap())
}

const ACCOUNT_JSON: &str = r#"{
    "id": 1, "name": "Itaú", "current_balance": "250.00",
    "account_type": "checking", "currency": "BRL",
    "created_at": "2025-01-01T00:00:00Z", "updated_at": "2025-01-01T00:00:00Z",
    "is_active": true
}"#;

fn report_json(status: &str) -> String {
    format!(
        r#"{{
            "id": 42, "status": "{status}", "file_name": "extrato.csv",
            "success_count": 10, "error_count": 0,
            "created_at": "2025-03-01T00:00:00Z", "updated_at": "2025-03-01T00:00:00Z"
        }}"#
    )
}

#[tokio::test]
async fn refresh_fills_the_cache_and_clears_the_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/finance/accounts/")
        .with_status(200)
        .with_body(format!("[{ACCOUNT_JSON}]"))
        .create_async()
        .await;

    let store = AccountsStore::new(client_for(&server));
    assert!(store.snapshot().is_empty());

    let accounts = store.refresh(&AccountQuery::default()).await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(store.snapshot().len(), 1);
    assert!(store.last_error().is_none());
    assert!(!store.is_loading());
    assert_eq!(store.stats().total_balance, "250.00");
}

#[tokio::test]
async fn failed_refresh_keeps_the_old_cache_and_records_the_error() {
    let mut server = mockito::Server::new_async().await;
    let ok = server
        .mock("GET", "/finance/accounts/")
        .with_status(200)
        .with_body(format!("[{ACCOUNT_JSON}]"))
        .expect(1)
        .create_async()
        .await;

    let store = AccountsStore::new(client_for(&server));
    store.refresh(&AccountQuery::default()).await.unwrap();
    ok.remove_async().await;

    server
        .mock("GET", "/finance/accounts/")
        .with_status(500)
        .with_body(r#"{"detail": "server exploded"}"#)
        .create_async()
        .await;

    let err = store.refresh(&AccountQuery::default()).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    // Cache still holds the last good fetch.
    assert_eq!(store.snapshot().len(), 1);
    let message = store.last_error().unwrap();
    assert!(message.contains("server exploded"), "{message}");

    store.clear_error();
    assert!(store.last_error().is_none());
}

#[tokio::test]
async fn watch_polls_the_report_endpoint_until_imported() {
    let mut server = mockito::Server::new_async().await;
    let processing = server
        .mock("GET", "/finance/import-reports/42/")
        .with_status(200)
        .with_body(report_json("PROCESSING"))
        .expect(1)
        .create_async()
        .await;

    let store = ImportStore::with_poller_config(
        client_for(&server),
        PollerConfig {
            interval: Duration::from_millis(50),
            max_duration: Duration::from_secs(10),
        },
    );

    let updates = Arc::new(Mutex::new(Vec::new()));
    let completions = Arc::new(AtomicUsize::new(0));
    let on_update = {
        let updates = Arc::clone(&updates);
        move |r: &finview_types::ImportReport| updates.lock().unwrap().push(r.status)
    };
    let on_complete = {
        let completions = Arc::clone(&completions);
        move |_| {
            completions.fetch_add(1, Ordering::SeqCst);
        }
    };

    store.watch(42, on_update, on_complete);
    tokio::time::sleep(Duration::from_millis(25)).await;
    assert_eq!(store.active_watch_count(), 1);

    processing.remove_async().await;
    server
        .mock("GET", "/finance/import-reports/42/")
        .with_status(200)
        .with_body(report_json("IMPORTED"))
        .create_async()
        .await;

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(completions.load(Ordering::SeqCst), 1);
    assert_eq!(
        updates.lock().unwrap().clone(),
        vec![ImportStatus::Processing, ImportStatus::Imported]
    );
    assert_eq!(store.active_watch_count(), 0);
}

#[tokio::test]
async fn stop_watching_removes_the_session() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/finance/import-reports/7/")
        .with_status(200)
        .with_body(report_json("PROCESSING"))
        .create_async()
        .await;

    let store = ImportStore::with_poller_config(
        client_for(&server),
        PollerConfig {
            interval: Duration::from_millis(30),
            max_duration: Duration::from_secs(10),
        },
    );

    store.watch(7, |_| {}, |_| {});
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(store.active_watch_count(), 1);

    store.stop_watching(7);
    assert_eq!(store.active_watch_count(), 0);
}
