use serde::{Deserialize, Serialize};

/// Uniform failure body the backend attaches to every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
