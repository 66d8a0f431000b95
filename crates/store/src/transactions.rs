// crates/store/src/transactions.rs
//! Cached transaction collection with client-side filtering, sorting and
//! aggregates.
//!
//! Server-side filters ([`TransactionQuery`]) narrow what gets fetched;
//! [`TransactionFilter`] then narrows the cached rows further without a
//! round trip, which is what table search boxes want.

use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use finview_client::{ApiError, FinanceClient};
use finview_types::{Transaction, TransactionKind, TransactionPayload, TransactionQuery};
use serde::Serialize;

use crate::money::{format_amount, parse_amount};

/// Client-side row filter. All present fields must match.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Case-insensitive substring match on the description or any linked
    /// account, card, category, or subcategory name.
    pub search: Option<String>,
    pub transaction_type: Option<TransactionKind>,
    pub account_id: Option<u64>,
    pub credit_card_id: Option<u64>,
    pub category_id: Option<u64>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub amount_min: Option<f64>,
    pub amount_max: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionSortKey {
    OccurredAt,
    Amount,
    Description,
    CreatedAt,
}

/// Sort order for transaction tables. Defaults to newest first.
#[derive(Debug, Clone, Copy)]
pub struct TransactionSort {
    pub key: TransactionSortKey,
    pub direction: SortDirection,
}

impl Default for TransactionSort {
    fn default() -> Self {
        Self {
            key: TransactionSortKey::OccurredAt,
            direction: SortDirection::Desc,
        }
    }
}

/// Search covers the description plus the names of whatever the row links
/// to, so "nubank" finds card purchases the description never mentions.
fn matches_search(tx: &Transaction, needle: &str) -> bool {
    let description = tx.description.as_deref().unwrap_or("");
    if description.to_lowercase().contains(needle) {
        return true;
    }
    let linked_names = [
        tx.account.as_ref().map(|a| a.name.as_str()),
        tx.credit_card.as_ref().map(|c| c.name.as_str()),
        tx.category.as_ref().map(|c| c.name.as_str()),
        tx.subcategory.as_ref().map(|s| s.name.as_str()),
    ];
    linked_names
        .into_iter()
        .flatten()
        .any(|name| name.to_lowercase().contains(needle))
}

/// Keep rows matching every present field of `filter`.
pub fn filter_transactions(items: &[Transaction], filter: &TransactionFilter) -> Vec<Transaction> {
    items
        .iter()
        .filter(|tx| {
            if let Some(search) = &filter.search {
                let needle = search.to_lowercase();
                if !matches_search(tx, &needle) {
                    return false;
                }
            }
            if let Some(kind) = filter.transaction_type {
                if tx.transaction_type != kind {
                    return false;
                }
            }
            if let Some(id) = filter.account_id {
                if tx.account_id != Some(id) {
                    return false;
                }
            }
            if let Some(id) = filter.credit_card_id {
                if tx.credit_card_id != Some(id) {
                    return false;
                }
            }
            if let Some(id) = filter.category_id {
                if tx.category_id != Some(id) {
                    return false;
                }
            }
            if let Some(from) = filter.date_from {
                if tx.occurred_at < from {
                    return false;
                }
            }
            if let Some(to) = filter.date_to {
                if tx.occurred_at > to {
                    return false;
                }
            }
            let amount = parse_amount(&tx.amount);
            if let Some(min) = filter.amount_min {
                if amount < min {
                    return false;
                }
            }
            if let Some(max) = filter.amount_max {
                if amount > max {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

/// Sort rows in place. Amount compares numerically, description
/// case-insensitively; ties keep their relative order.
pub fn sort_transactions(items: &mut [Transaction], sort: TransactionSort) {
    items.sort_by(|a, b| {
        let ordering = match sort.key {
            TransactionSortKey::OccurredAt => a.occurred_at.cmp(&b.occurred_at),
            TransactionSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            TransactionSortKey::Amount => parse_amount(&a.amount)
                .partial_cmp(&parse_amount(&b.amount))
                .unwrap_or(CmpOrdering::Equal),
            TransactionSortKey::Description => {
                let a = a.description.as_deref().unwrap_or("").to_lowercase();
                let b = b.description.as_deref().unwrap_or("").to_lowercase();
                a.cmp(&b)
            }
        };
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Per-kind counts and totals over a transaction list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionStats {
    pub total: usize,
    pub income_count: usize,
    pub expense_count: usize,
    pub transfer_count: usize,
    pub total_income: String,
    pub total_expenses: String,
    pub total_transfers: String,
}

pub fn transaction_stats(items: &[Transaction]) -> TransactionStats {
    let mut counts = [0usize; 3];
    let mut sums = [0f64; 3];
    for tx in items {
        let slot = match tx.transaction_type {
            TransactionKind::Income => 0,
            TransactionKind::Expense => 1,
            TransactionKind::Transfer => 2,
        };
        counts[slot] += 1;
        sums[slot] += parse_amount(&tx.amount);
    }
    TransactionStats {
        total: items.len(),
        income_count: counts[0],
        expense_count: counts[1],
        transfer_count: counts[2],
        total_income: format_amount(sums[0]),
        total_expenses: format_amount(sums[1]),
        total_transfers: format_amount(sums[2]),
    }
}

/// Caches the transaction list for one server-side query and layers a
/// client-side filter and sort on top.
pub struct TransactionsStore {
    client: Arc<FinanceClient>,
    transactions: RwLock<Vec<Transaction>>,
    query: RwLock<TransactionQuery>,
    filter: RwLock<TransactionFilter>,
    sort: RwLock<TransactionSort>,
    loading: AtomicBool,
    last_error: RwLock<Option<String>>,
}

impl TransactionsStore {
    pub fn new(client: Arc<FinanceClient>) -> Self {
        Self {
            client,
            transactions: RwLock::new(Vec::new()),
            query: RwLock::new(TransactionQuery::default()),
            filter: RwLock::new(TransactionFilter::default()),
            sort: RwLock::new(TransactionSort::default()),
            loading: AtomicBool::new(false),
            last_error: RwLock::new(None),
        }
    }

    /// Fetch transactions for `query`, remember it for post-write
    /// refreshes, and replace the cache.
    pub async fn refresh(&self, query: TransactionQuery) -> Result<Vec<Transaction>, ApiError> {
        if let Ok(mut current) = self.query.write() {
            *current = query.clone();
        }
        self.reload().await
    }

    /// Re-fetch with the remembered query.
    pub async fn reload(&self) -> Result<Vec<Transaction>, ApiError> {
        let query = self.query.read().map(|q| q.clone()).unwrap_or_default();
        self.loading.store(true, Ordering::Relaxed);
        self.set_error(None);
        let result = self.client.list_transactions(&query).await;
        self.loading.store(false, Ordering::Relaxed);
        match result {
            Ok(transactions) => {
                if let Ok(mut cache) = self.transactions.write() {
                    *cache = transactions.clone();
                }
                Ok(transactions)
            }
            Err(e) => {
                self.set_error(Some(e.to_string()));
                Err(e)
            }
        }
    }

    pub async fn create(&self, payload: &TransactionPayload) -> Result<Transaction, ApiError> {
        let tx = self.record(self.client.create_transaction(payload).await)?;
        self.reload().await?;
        Ok(tx)
    }

    pub async fn update(
        &self,
        id: u64,
        payload: &TransactionPayload,
    ) -> Result<Transaction, ApiError> {
        let tx = self.record(self.client.update_transaction(id, payload).await)?;
        self.reload().await?;
        Ok(tx)
    }

    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.record(self.client.delete_transaction(id).await)?;
        self.reload().await?;
        Ok(())
    }

    pub fn set_filter(&self, filter: TransactionFilter) {
        if let Ok(mut current) = self.filter.write() {
            *current = filter;
        }
    }

    pub fn clear_filter(&self) {
        self.set_filter(TransactionFilter::default());
    }

    pub fn set_sort(&self, sort: TransactionSort) {
        if let Ok(mut current) = self.sort.write() {
            *current = sort;
        }
    }

    /// Cached rows with the current filter and sort applied.
    pub fn filtered(&self) -> Vec<Transaction> {
        let cache = self
            .transactions
            .read()
            .map(|c| c.clone())
            .unwrap_or_default();
        let filter = self.filter.read().map(|f| f.clone()).unwrap_or_default();
        let sort = self.sort.read().map(|s| *s).unwrap_or_default();
        let mut rows = filter_transactions(&cache, &filter);
        sort_transactions(&mut rows, sort);
        rows
    }

    /// Stats over the filtered rows, matching what the table shows.
    pub fn stats(&self) -> TransactionStats {
        transaction_stats(&self.filtered())
    }

    pub fn snapshot(&self) -> Vec<Transaction> {
        self.transactions
            .read()
            .map(|c| c.clone())
            .unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Relaxed)
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use finview_types::{Account, Category, CategoryKind};
    use pretty_assertions::assert_eq;

    fn tx(id: u64, kind: TransactionKind, amount: &str, desc: &str, date: &str) -> Transaction {
        Transaction {
            id,
            user: 1,
            transaction_type: kind,
            amount: amount.into(),
            description: Some(desc.into()),
            occurred_at: date.parse().unwrap(),
            charge_at_card: None,
            installments_total: 1,
            installment_number: 1,
            installment_group_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            account: None,
            account_id: Some(1),
            credit_card: None,
            credit_card_id: None,
            category: None,
            category_id: None,
            subcategory: None,
            subcategory_id: None,
            tags: Vec::new(),
            tag_ids: None,
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx(1, TransactionKind::Income, "5000.00", "Salario", "2025-03-01"),
            tx(2, TransactionKind::Expense, "42.90", "Mercado", "2025-03-02"),
            tx(3, TransactionKind::Expense, "120.00", "mercado livre", "2025-03-10"),
            tx(4, TransactionKind::Transfer, "300.00", "Poupanca", "2025-03-15"),
        ]
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let filter = TransactionFilter {
            search: Some("MERCA".into()),
            ..Default::default()
        };
        let rows = filter_transactions(&sample(), &filter);
        assert_eq!(rows.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn search_matches_linked_names_too() {
        let mut rows = sample();
        rows[1].account = Some(Account {
            id: 1,
            name: "Nubank".into(),
            current_balance: "100.00".into(),
            account_type: "checking".into(),
            currency: "BRL".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            is_active: true,
        });
        rows[2].category = Some(Category {
            id: 9,
            name: "Alimentação".into(),
            transaction_type: CategoryKind::Expense,
            parent: None,
            is_active: true,
        });

        // "nubank" is nowhere in the description; the account name matches.
        let filter = TransactionFilter {
            search: Some("nubank".into()),
            ..Default::default()
        };
        let hits = filter_transactions(&rows, &filter);
        assert_eq!(hits.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);

        let filter = TransactionFilter {
            search: Some("alimenta".into()),
            ..Default::default()
        };
        let hits = filter_transactions(&rows, &filter);
        assert_eq!(hits.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3]);

        // No linked object carries the term either.
        let filter = TransactionFilter {
            search: Some("itau".into()),
            ..Default::default()
        };
        assert!(filter_transactions(&rows, &filter).is_empty());
    }

    #[test]
    fn filters_combine_with_and() {
        let filter = TransactionFilter {
            transaction_type: Some(TransactionKind::Expense),
            amount_min: Some(100.0),
            ..Default::default()
        };
        let rows = filter_transactions(&sample(), &filter);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 3);
    }

    #[test]
    fn date_range_is_inclusive() {
        let filter = TransactionFilter {
            date_from: Some("2025-03-02".parse().unwrap()),
            date_to: Some("2025-03-10".parse().unwrap()),
            ..Default::default()
        };
        let rows = filter_transactions(&sample(), &filter);
        assert_eq!(rows.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn amount_sort_is_numeric_not_lexicographic() {
        let mut rows = vec![
            tx(1, TransactionKind::Expense, "9.00", "a", "2025-01-01"),
            tx(2, TransactionKind::Expense, "100.00", "b", "2025-01-02"),
            tx(3, TransactionKind::Expense, "20.00", "c", "2025-01-03"),
        ];
        sort_transactions(
            &mut rows,
            TransactionSort {
                key: TransactionSortKey::Amount,
                direction: SortDirection::Asc,
            },
        );
        assert_eq!(rows.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3, 2]);
    }

    #[test]
    fn default_sort_is_newest_first() {
        let mut rows = sample();
        sort_transactions(&mut rows, TransactionSort::default());
        assert_eq!(rows[0].id, 4);
        assert_eq!(rows.last().unwrap().id, 1);
    }

    #[test]
    fn stats_split_by_kind() {
        let stats = transaction_stats(&sample());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.income_count, 1);
        assert_eq!(stats.expense_count, 2);
        assert_eq!(stats.transfer_count, 1);
        assert_eq!(stats.total_income, "5000.00");
        assert_eq!(stats.total_expenses, "162.90");
        assert_eq!(stats.total_transfers, "300.00");
    }
}
