// crates/store/src/credit_cards.rs
//! Cached credit-card collection plus due/close-date histograms.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use finview_client::{ApiError, FinanceClient};
use finview_types::{CreditCard, CreditCardPayload, CreditCardQuery};
use serde::Serialize;

use crate::transactions::SortDirection;

pub struct CreditCardsStore {
    client: Arc<FinanceClient>,
    cards: RwLock<Vec<CreditCard>>,
    loading: AtomicBool,
    last_error: RwLock<Option<String>>,
}

impl CreditCardsStore {
    pub fn new(client: Arc<FinanceClient>) -> Self {
        Self {
            client,
            cards: RwLock::new(Vec::new()),
            loading: AtomicBool::new(false),
            last_error: RwLock::new(None),
        }
    }

    pub async fn refresh(&self, query: &CreditCardQuery) -> Result<Vec<CreditCard>, ApiError> {
        self.loading.store(true, Ordering::Relaxed);
        self.set_error(None);
        let result = self.client.list_credit_cards(query).await;
        self.loading.store(false, Ordering::Relaxed);
        match result {
            Ok(cards) => {
                if let Ok(mut cache) = self.cards.write() {
                    *cache = cards.clone();
                }
                Ok(cards)
            }
            Err(e) => {
                self.set_error(Some(e.to_string()));
                Err(e)
            }
        }
    }

    pub async fn create(&self, payload: &CreditCardPayload) -> Result<CreditCard, ApiError> {
        let card = self.record(self.client.create_credit_card(payload).await)?;
        self.refresh(&CreditCardQuery::default()).await?;
        Ok(card)
    }

    pub async fn update(&self, id: u64, payload: &CreditCardPayload) -> Result<CreditCard, ApiError> {
        let card = self.record(self.client.update_credit_card(id, payload).await)?;
        self.refresh(&CreditCardQuery::default()).await?;
        Ok(card)
    }

    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.record(self.client.delete_credit_card(id).await)?;
        self.refresh(&CreditCardQuery::default()).await?;
        Ok(())
    }

    pub fn snapshot(&self) -> Vec<CreditCard> {
        self.cards.read().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn stats(&self) -> CreditCardStats {
        credit_card_stats(&self.snapshot())
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

/// Client-side row filter for card tables.
#[derive(Debug, Clone, Default)]
pub struct CreditCardFilter {
    /// Case-insensitive substring match on the name.
    pub search: Option<String>,
    pub close_date: Option<u8>,
    pub due_date: Option<u8>,
    pub is_active: Option<bool>,
}

pub fn filter_credit_cards(items: &[CreditCard], filter: &CreditCardFilter) -> Vec<CreditCard> {
    items
        .iter()
        .filter(|c| {
            if let Some(search) = &filter.search {
                if !c.name.to_lowercase().contains(&search.to_lowercase()) {
                    return false;
                }
            }
            if let Some(day) = filter.close_date {
                if c.close_date != day {
                    return false;
                }
            }
            if let Some(day) = filter.due_date {
                if c.due_date != day {
                    return false;
                }
            }
            if let Some(active) = filter.is_active {
                if c.is_active != active {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

/// Sort cards by name in place, case-insensitive.
pub fn sort_credit_cards(items: &mut [CreditCard], direction: SortDirection) {
    items.sort_by(|a, b| {
        let ordering = a.name.to_lowercase().cmp(&b.name.to_lowercase());
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Counts plus day-of-month histograms for statement close and payment due
/// dates. Every card feeds the histograms, active or not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditCardStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub cards_by_close_date: BTreeMap<u8, usize>,
    pub cards_by_due_date: BTreeMap<u8, usize>,
}

pub fn credit_card_stats(cards: &[CreditCard]) -> CreditCardStats {
    let active = cards.iter().filter(|c| c.is_active).count();
    let mut by_close = BTreeMap::new();
    let mut by_due = BTreeMap::new();
    for card in cards {
        *by_close.entry(card.close_date).or_insert(0) += 1;
        *by_due.entry(card.due_date).or_insert(0) += 1;
    }
    CreditCardStats {
        total: cards.len(),
        active,
        inactive: cards.len() - active,
        cards_by_close_date: by_close,
        cards_by_due_date: by_due,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn card(id: u64, close: u8, due: u8, is_active: bool) -> CreditCard {
        CreditCard {
            id,
            name: format!("Cartao {id}"),
            close_date: close,
            due_date: due,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            is_active,
        }
    }

    #[test]
    fn histograms_group_every_card_by_day() {
        let cards = vec![
            card(1, 5, 12, true),
            card(2, 5, 15, true),
            card(3, 20, 12, true),
            card(4, 5, 12, false),
        ];
        let stats = credit_card_stats(&cards);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 3);
        assert_eq!(stats.inactive, 1);
        // Inactive cards still count toward the day groupings.
        assert_eq!(stats.cards_by_close_date.get(&5), Some(&3));
        assert_eq!(stats.cards_by_close_date.get(&20), Some(&1));
        assert_eq!(stats.cards_by_due_date.get(&12), Some(&3));
        assert_eq!(stats.cards_by_due_date.get(&15), Some(&1));
    }

    #[test]
    fn filter_matches_days_and_name() {
        let cards = vec![card(1, 5, 12, true), card(2, 20, 12, true), card(3, 5, 15, false)];

        let filter = CreditCardFilter {
            close_date: Some(5),
            ..Default::default()
        };
        assert_eq!(filter_credit_cards(&cards, &filter).len(), 2);

        let filter = CreditCardFilter {
            due_date: Some(12),
            is_active: Some(true),
            ..Default::default()
        };
        let rows = filter_credit_cards(&cards, &filter);
        assert_eq!(rows.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut cards = vec![card(1, 1, 1, true), card(2, 1, 1, true)];
        cards[0].name = "visa".into();
        cards[1].name = "Amex".into();
        sort_credit_cards(&mut cards, SortDirection::Asc);
        assert_eq!(cards[0].name, "Amex");
    }
}
