// crates/store/src/subcategories.rs
//! Cached subcategory collection.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use finview_client::{ApiError, FinanceClient};
use finview_types::{Subcategory, SubcategoryPayload, SubcategoryQuery};

/// Active subcategories under one parent category.
pub fn subcategories_of(items: &[Subcategory], category_id: u64) -> Vec<Subcategory> {
    items
        .iter()
        .filter(|s| s.category == category_id && s.is_active)
        .cloned()
        .collect()
}

pub struct SubcategoriesStore {
    client: Arc<FinanceClient>,
    subcategories: RwLock<Vec<Subcategory>>,
    loading: AtomicBool,
    last_error: RwLock<Option<String>>,
}

impl SubcategoriesStore {
    pub fn new(client: Arc<FinanceClient>) -> Self {
        Self {
            client,
            subcategories: RwLock::new(Vec::new()),
            loading: AtomicBool::new(false),
            last_error: RwLock::new(None),
        }
    }

    pub async fn refresh(&self, query: &SubcategoryQuery) -> Result<Vec<Subcategory>, ApiError> {
        self.loading.store(true, Ordering::Relaxed);
        self.set_error(None);
        let result = self.client.list_subcategories(query).await;
        self.loading.store(false, Ordering::Relaxed);
        match result {
            Ok(subcategories) => {
                if let Ok(mut cache) = self.subcategories.write() {
                    *cache = subcategories.clone();
                }
                Ok(subcategories)
            }
            Err(e) => {
                self.set_error(Some(e.to_string()));
                Err(e)
            }
        }
    }

    pub async fn create(&self, payload: &SubcategoryPayload) -> Result<Subcategory, ApiError> {
        let subcategory = self.record(self.client.create_subcategory(payload).await)?;
        self.refresh(&SubcategoryQuery::default()).await?;
        Ok(subcategory)
    }

    pub async fn update(
        &self,
        id: u64,
        payload: &SubcategoryPayload,
    ) -> Result<Subcategory, ApiError> {
        let subcategory = self.record(self.client.update_subcategory(id, payload).await)?;
        self.refresh(&SubcategoryQuery::default()).await?;
        Ok(subcategory)
    }

    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.record(self.client.delete_subcategory(id).await)?;
        self.refresh(&SubcategoryQuery::default()).await?;
        Ok(())
    }

    pub fn snapshot(&self) -> Vec<Subcategory> {
        self.subcategories
            .read()
            .map(|c| c.clone())
            .unwrap_or_default()
    }

    pub fn of_category(&self, category_id: u64) -> Vec<Subcategory> {
        subcategories_of(&self.snapshot(), category_id)
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
