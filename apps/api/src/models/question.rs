use serde::{Deserialize, Serialize};

/// Fallback category for question objects the model leaves uncategorized.
pub const DEFAULT_CATEGORY: &str = "General";

/// A single generated interview question.
///
/// `category` is an open set — the prompt asks for "Technical",
/// "Behavioral", or "Role-Specific", but any string the model returns is
/// preserved; a missing category falls back to [`DEFAULT_CATEGORY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default = "default_category")]
    pub category: String,
    pub question: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}
