// crates/cli/src/main.rs
//! `finview` — list Fin Manager resources and run CSV imports from the
//! terminal.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use finview_client::{ClientConfig, FinanceClient};
use finview_store::{transaction_stats, ImportStore};
use finview_types::{
    AccountQuery, ImportStatus, TransactionKind, TransactionQuery,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "finview", about = "Fin Manager command-line client", version)]
struct Cli {
    /// API base URL. Overrides FINVIEW_API_BASE.
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List accounts with their balances.
    Accounts {
        /// Only active accounts.
        #[arg(long)]
        active: bool,
    },
    /// List transactions.
    Transactions {
        #[arg(long)]
        account_id: Option<u64>,
        #[arg(long)]
        category_id: Option<u64>,
        /// INCOME, EXPENSE or TRANSFER.
        #[arg(long, value_parser = parse_kind)]
        kind: Option<TransactionKind>,
    },
    /// List CSV import reports.
    Reports,
    /// Upload a CSV and follow the import until it finishes.
    Import {
        /// Path to the CSV file.
        file: PathBuf,
    },
}

fn parse_kind(raw: &str) -> Result<TransactionKind, String> {
    match raw.to_uppercase().as_str() {
        "INCOME" => Ok(TransactionKind::Income),
        "EXPENSE" => Ok(TransactionKind::Expense),
        "TRANSFER" => Ok(TransactionKind::Transfer),
        other => Err(format!("unknown transaction kind: {other}")),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn,finview=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.api_base {
        Some(base) => ClientConfig::new(base.clone()),
        None => ClientConfig::default(),
    };
    let client = Arc::new(FinanceClient::new(config).context("building HTTP client")?);

    match cli.command {
        Command::Accounts { active } => list_accounts(&client, active).await,
        Command::Transactions {
            account_id,
            category_id,
            kind,
        } => list_transactions(&client, account_id, category_id, kind).await,
        Command::Reports => list_reports(&client).await,
        Command::Import { file } => run_import(client, &file).await,
    }
}

async fn list_accounts(client: &FinanceClient, active: bool) -> anyhow::Result<()> {
    let query = AccountQuery {
        is_active: active.then_some(true),
        ..Default::default()
    };
    let accounts = client.list_accounts(&query).await?;
    for account in &accounts {
        let marker = if account.is_active { "" } else { " (inactive)" };
        println!(
            "{:>4}  {:<30} {:>12} {}{}",
            account.id, account.name, account.current_balance, account.currency, marker
        );
    }
    println!("{} account(s)", accounts.len());
    Ok(())
}

async fn list_transactions(
    client: &FinanceClient,
    account_id: Option<u64>,
    category_id: Option<u64>,
    kind: Option<TransactionKind>,
) -> anyhow::Result<()> {
    let query = TransactionQuery {
        account_id,
        category_id,
        transaction_type: kind,
        ..Default::default()
    };
    let transactions = client.list_transactions(&query).await?;
    for tx in &transactions {
        println!(
            "{:>6}  {}  {:<8} {:>12}  {}",
            tx.id,
            tx.occurred_at,
            tx.transaction_type.as_str(),
            tx.amount,
            tx.description.as_deref().unwrap_or("-")
        );
    }
    let stats = transaction_stats(&transactions);
    println!(
        "{} transaction(s)  income {}  expenses {}  transfers {}",
        stats.total, stats.total_income, stats.total_expenses, stats.total_transfers
    );
    Ok(())
}

async fn list_reports(client: &FinanceClient) -> anyhow::Result<()> {
    let reports = client.list_import_reports().await?;
    for report in &reports {
        println!(
            "{:>4}  {:<10}  {:<30}  ok {} / err {}",
            report.id,
            report.status.as_str(),
            report.file_name,
            report.success_count,
            report.error_count
        );
    }
    println!("{} report(s)", reports.len());
    Ok(())
}

async fn run_import(client: Arc<FinanceClient>, file: &std::path::Path) -> anyhow::Result<()> {
    let store = ImportStore::new(client);
    let upload = store
        .upload_path(file)
        .await
        .with_context(|| format!("uploading {}", file.display()))?;
    println!("uploaded; report {}", upload.report_id);

    // The completion callback hands the terminal report back over a oneshot
    // channel. If the poller stops without completing (fetch error or
    // deadline), the sender is dropped and the receive fails.
    let (tx, rx) = tokio::sync::oneshot::channel();
    store.watch(
        upload.report_id,
        |report| println!("status: {}", report.status.as_str()),
        move |report| {
            let _ = tx.send(report);
        },
    );

    let report = match rx.await {
        Ok(report) => report,
        Err(_) => bail!("polling stopped before the import finished"),
    };

    match report.status {
        ImportStatus::Imported => {
            println!(
                "imported {} row(s), {} error(s)",
                report.success_count, report.error_count
            );
            Ok(())
        }
        _ => {
            let reason = report.failed_reason.as_deref().unwrap_or("no reason given");
            bail!("import failed: {reason}");
        }
    }
}
