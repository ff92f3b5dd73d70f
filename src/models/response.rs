use serde::{Deserialize, Serialize};

/// Transient outcome message returned by mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub message: String,
}

impl ActionResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
