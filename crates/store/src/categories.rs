// crates/store/src/categories.rs
//! Cached category collection.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use finview_client::{ApiError, FinanceClient};
use finview_types::{Category, CategoryDetail, CategoryKind, CategoryPayload, CategoryQuery};

/// Active categories of one kind, the set selection dropdowns offer.
pub fn categories_of_kind(items: &[Category], kind: CategoryKind) -> Vec<Category> {
    items
        .iter()
        .filter(|c| c.transaction_type == kind && c.is_active)
        .cloned()
        .collect()
}

pub struct CategoriesStore {
    client: Arc<FinanceClient>,
    categories: RwLock<Vec<Category>>,
    loading: AtomicBool,
    last_error: RwLock<Option<String>>,
}

impl CategoriesStore {
    pub fn new(client: Arc<FinanceClient>) -> Self {
        Self {
            client,
            categories: RwLock::new(Vec::new()),
            loading: AtomicBool::new(false),
            last_error: RwLock::new(None),
        }
    }

    pub async fn refresh(&self, query: &CategoryQuery) -> Result<Vec<Category>, ApiError> {
        self.loading.store(true, Ordering::Relaxed);
        self.set_error(None);
        let result = self.client.list_categories(query).await;
        self.loading.store(false, Ordering::Relaxed);
        match result {
            Ok(categories) => {
                if let Ok(mut cache) = self.categories.write() {
                    *cache = categories.clone();
                }
                Ok(categories)
            }
            Err(e) => {
                self.set_error(Some(e.to_string()));
                Err(e)
            }
        }
    }

    /// Detail shape with nested subcategories; not cached.
    pub async fn get_detail(&self, id: u64) -> Result<CategoryDetail, ApiError> {
        self.record(self.client.get_category(id).await)
    }

    pub async fn create(&self, payload: &CategoryPayload) -> Result<Category, ApiError> {
        let category = self.record(self.client.create_category(payload).await)?;
        self.refresh(&CategoryQuery::default()).await?;
        Ok(category)
    }

    pub async fn update(&self, id: u64, payload: &CategoryPayload) -> Result<Category, ApiError> {
        let category = self.record(self.client.update_category(id, payload).await)?;
        self.refresh(&CategoryQuery::default()).await?;
        Ok(category)
    }

    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.record(self.client.delete_category(id).await)?;
        self.refresh(&CategoryQuery::default()).await?;
        Ok(())
    }

    pub fn snapshot(&self) -> Vec<Category> {
        self.categories.read().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn of_kind(&self, kind: CategoryKind) -> Vec<Category> {
        categories_of_kind(&self.snapshot(), kind)
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
    use pretty_assertions::assert_eq;

    fn category(id: u64, kind: CategoryKind, is_active: bool) -> Category {
        Category {
            id,
            name: format!("Categoria {id}"),
            transaction_type: kind,
            parent: None,
            is_active,
        }
    }

    #[test]
    fn of_kind_keeps_active_matches_only() {
        let items = vec![
            category(1, CategoryKind::Expense, true),
            category(2, CategoryKind::Income, true),
            category(3, CategoryKind::Expense, false),
        ];
        let rows = categories_of_kind(&items, CategoryKind::Expense);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
    }
}
