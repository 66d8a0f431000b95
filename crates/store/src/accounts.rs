// crates/store/src/accounts.rs
//! Cached account collection plus aggregate helpers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use finview_client::{ApiError, FinanceClient};
use finview_types::{Account, AccountPayload, AccountQuery};
use serde::Serialize;

use crate::money::{format_amount, parse_amount};
use crate::transactions::SortDirection;

/// Caches the account list and refreshes it after every write, so reads
/// between writes never hit the network.
pub struct AccountsStore {
    client: Arc<FinanceClient>,
    accounts: RwLock<Vec<Account>>,
    loading: AtomicBool,
    last_error: RwLock<Option<String>>,
}

impl AccountsStore {
    pub fn new(client: Arc<FinanceClient>) -> Self {
        Self {
            client,
            accounts: RwLock::new(Vec::new()),
            loading: AtomicBool::new(false),
            last_error: RwLock::new(None),
        }
    }

    /// Fetch accounts matching `query` and replace the cache.
    pub async fn refresh(&self, query: &AccountQuery) -> Result<Vec<Account>, ApiError> {
        self.loading.store(true, Ordering::Relaxed);
        self.set_error(None);
        let result = self.client.list_accounts(query).await;
        self.loading.store(false, Ordering::Relaxed);
        match result {
            Ok(accounts) => {
                if let Ok(mut cache) = self.accounts.write() {
                    *cache = accounts.clone();
                }
                Ok(accounts)
            }
            Err(e) => {
                self.set_error(Some(e.to_string()));
                Err(e)
            }
        }
    }

    pub async fn create(&self, payload: &AccountPayload) -> Result<Account, ApiError> {
        let account = self.record(self.client.create_account(payload).await)?;
        self.refresh(&AccountQuery::default()).await?;
        Ok(account)
    }

    pub async fn update(&self, id: u64, payload: &AccountPayload) -> Result<Account, ApiError> {
        let account = self.record(self.client.update_account(id, payload).await)?;
        self.refresh(&AccountQuery::default()).await?;
        Ok(account)
    }

    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.record(self.client.delete_account(id).await)?;
        self.refresh(&AccountQuery::default()).await?;
        Ok(())
    }

    /// Current cache contents.
    pub fn snapshot(&self) -> Vec<Account> {
        self.accounts.read().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn stats(&self) -> AccountStats {
        account_stats(&self.snapshot())
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

/// Client-side row filter for account tables.
#[derive(Debug, Clone, Default)]
pub struct AccountFilter {
    /// Case-insensitive substring match on the name.
    pub search: Option<String>,
    pub account_type: Option<String>,
    pub currency: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountSortKey {
    Name,
    Balance,
    CreatedAt,
}

pub fn filter_accounts(items: &[Account], filter: &AccountFilter) -> Vec<Account> {
    items
        .iter()
        .filter(|a| {
            if let Some(search) = &filter.search {
                if !a.name.to_lowercase().contains(&search.to_lowercase()) {
                    return false;
                }
            }
            if let Some(kind) = &filter.account_type {
                if &a.account_type != kind {
                    return false;
                }
            }
            if let Some(currency) = &filter.currency {
                if &a.currency != currency {
                    return false;
                }
            }
            if let Some(active) = filter.is_active {
                if a.is_active != active {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

/// Sort accounts in place. Name compares case-insensitively, balance
/// numerically.
pub fn sort_accounts(items: &mut [Account], key: AccountSortKey, direction: SortDirection) {
    items.sort_by(|a, b| {
        let ordering = match key {
            AccountSortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            AccountSortKey::Balance => parse_amount(&a.current_balance)
                .partial_cmp(&parse_amount(&b.current_balance))
                .unwrap_or(std::cmp::Ordering::Equal),
            AccountSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Aggregates over an account list. `total_balance` sums active accounts
/// only; inactive ones are closed and kept for history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub total_balance: String,
}

pub fn account_stats(accounts: &[Account]) -> AccountStats {
    let active = accounts.iter().filter(|a| a.is_active).count();
    let total_balance: f64 = accounts
        .iter()
        .filter(|a| a.is_active)
        .map(|a| parse_amount(&a.current_balance))
        .sum();
    AccountStats {
        total: accounts.len(),
        active,
        inactive: accounts.len() - active,
        total_balance: format_amount(total_balance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn account(id: u64, balance: &str, is_active: bool) -> Account {
        Account {
            id,
            name: format!("Conta {id}"),
            current_balance: balance.into(),
            account_type: "checking".into(),
            currency: "BRL".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            is_active,
        }
    }

    #[test]
    fn stats_sum_active_balances_only() {
        let accounts = vec![
            account(1, "100.00", true),
            account(2, "250.50", true),
            account(3, "999.99", false),
        ];
        let stats = account_stats(&accounts);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.inactive, 1);
        assert_eq!(stats.total_balance, "350.50");
    }

    #[test]
    fn stats_on_empty_list_are_zero() {
        let stats = account_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.total_balance, "0.00");
    }

    #[test]
    fn filter_matches_name_substring_and_flags() {
        let mut itau = account(1, "100.00", true);
        itau.name = "Itaú Corrente".into();
        let mut nubank = account(2, "50.00", false);
        nubank.name = "Nubank".into();
        let accounts = vec![itau, nubank];

        let filter = AccountFilter {
            search: Some("nu".into()),
            ..Default::default()
        };
        assert_eq!(filter_accounts(&accounts, &filter).len(), 1);

        let filter = AccountFilter {
            is_active: Some(true),
            ..Default::default()
        };
        let rows = filter_accounts(&accounts, &filter);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
    }

    #[test]
    fn balance_sort_is_numeric() {
        let mut accounts = vec![
            account(1, "9.00", true),
            account(2, "100.00", true),
            account(3, "20.00", true),
        ];
        sort_accounts(&mut accounts, AccountSortKey::Balance, SortDirection::Desc);
        assert_eq!(accounts.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2, 3, 1]);
    }
}
