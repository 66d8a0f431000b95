// crates/client/src/classifier.rs
//! `/ai/classifier-instructions/` operations.
//!
//! The backend keeps at most one instruction per user, so the surface is
//! get / create / update plus a create-or-update convenience.

use finview_types::{ClassifierInstruction, ClassifierInstructionPayload};

use crate::{ApiError, FinanceClient};

impl FinanceClient {
    /// Fetch the user's instruction. A 404 means none exists yet and is not
    /// an error.
    pub async fn get_classifier_instruction(
        &self,
    ) -> Result<Option<ClassifierInstruction>, ApiError> {
        match self.get_json("/ai/classifier-instructions/", &[]).await {
            Ok(instruction) => Ok(Some(instruction)),
            Err(ApiError::Api { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn create_classifier_instruction(
        &self,
        instructions: &str,
    ) -> Result<ClassifierInstruction, ApiError> {
        let payload = ClassifierInstructionPayload {
            instructions: instructions.to_string(),
        };
        self.post_json("/ai/classifier-instructions/", &payload).await
    }

    pub async fn update_classifier_instruction(
        &self,
        id: u64,
        instructions: &str,
    ) -> Result<ClassifierInstruction, ApiError> {
        let payload = ClassifierInstructionPayload {
            instructions: instructions.to_string(),
        };
        self.put_json(&format!("/ai/classifier-instructions/{id}/"), &payload)
            .await
    }

    /// Create the instruction if `existing_id` is `None`, update otherwise.
    pub async fn save_classifier_instruction(
        &self,
        existing_id: Option<u64>,
        instructions: &str,
    ) -> Result<ClassifierInstruction, ApiError> {
        match existing_id {
            Some(id) => self.update_classifier_instruction(id, instructions).await,
            None => self.create_classifier_instruction(instructions).await,
        }
    }
}
