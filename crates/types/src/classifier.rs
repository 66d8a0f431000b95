// crates/types/src/classifier.rs
//! AI classifier instruction wire types for `/ai/classifier-instructions/`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Free-text instructions the backend feeds to its transaction classifier.
/// The backend keeps at most one per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierInstruction {
    pub id: u64,
    pub instructions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update body for the classifier instruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierInstructionPayload {
    pub instructions: String,
}
