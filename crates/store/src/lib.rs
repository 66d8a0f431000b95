// crates/store/src/lib.rs
//! Client-side state stores over [`finview_client::FinanceClient`].
//!
//! Each store caches one resource collection, tracks a loading flag and the
//! last error, and refreshes its cache after writes. The pure filter, sort
//! and stats helpers next to each store operate on plain slices, so they
//! are usable (and testable) without a backend.

pub mod accounts;
pub mod cash_flow;
pub mod categories;
pub mod classifier;
pub mod credit_cards;
pub mod imports;
pub mod money;
pub mod poller;
pub mod subcategories;
pub mod transactions;

pub use accounts::{
    account_stats, filter_accounts, sort_accounts, AccountFilter, AccountSortKey, AccountStats,
    AccountsStore,
};
pub use cash_flow::{find_report_item, month_name, monthly_total, CashFlowStore};
pub use categories::{categories_of_kind, CategoriesStore};
pub use classifier::ClassifierStore;
pub use credit_cards::{
    credit_card_stats, filter_credit_cards, sort_credit_cards, CreditCardFilter, CreditCardStats,
    CreditCardsStore,
};
pub use imports::ImportStore;
pub use poller::{ImportPoller, PollerConfig, ReportFetcher, StopHandle};
pub use subcategories::{subcategories_of, SubcategoriesStore};
pub use transactions::{
    filter_transactions, sort_transactions, transaction_stats, SortDirection, TransactionFilter,
    TransactionSort, TransactionSortKey, TransactionStats, TransactionsStore,
};
