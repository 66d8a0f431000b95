// crates/store/src/classifier.rs
//! Cached AI classifier instruction (at most one per user).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use finview_client::{ApiError, FinanceClient};
use finview_types::ClassifierInstruction;

pub struct ClassifierStore {
    client: Arc<FinanceClient>,
    instruction: RwLock<Option<ClassifierInstruction>>,
    loading: AtomicBool,
    last_error: RwLock<Option<String>>,
}

impl ClassifierStore {
    pub fn new(client: Arc<FinanceClient>) -> Self {
        Self {
            client,
            instruction: RwLock::new(None),
            loading: AtomicBool::new(false),
            last_error: RwLock::new(None),
        }
    }

    /// Fetch the instruction. No instruction existing yet is a normal
    /// state, not an error.
    pub async fn refresh(&self) -> Result<Option<ClassifierInstruction>, ApiError> {
        self.loading.store(true, Ordering::Relaxed);
        self.set_error(None);
        let result = self.client.get_classifier_instruction().await;
        self.loading.store(false, Ordering::Relaxed);
        match result {
            Ok(instruction) => {
                if let Ok(mut cache) = self.instruction.write() {
                    *cache = instruction.clone();
                }
                Ok(instruction)
            }
            Err(e) => {
                self.set_error(Some(e.to_string()));
                Err(e)
            }
        }
    }

    /// Create or update based on whether an instruction is cached.
    pub async fn save(&self, instructions: &str) -> Result<ClassifierInstruction, ApiError> {
        let existing_id = self
            .instruction
            .read()
            .ok()
            .and_then(|i| i.as_ref().map(|i| i.id));
        let result = self
            .client
            .save_classifier_instruction(existing_id, instructions)
            .await;
        match result {
            Ok(saved) => {
                if let Ok(mut cache) = self.instruction.write() {
                    *cache = Some(saved.clone());
                }
                Ok(saved)
            }
            Err(e) => {
                self.set_error(Some(e.to_string()));
                Err(e)
            }
        }
    }

    pub fn current(&self) -> Option<ClassifierInstruction> {
        self.instruction.read().ok().and_then(|i| i.clone())
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
}
