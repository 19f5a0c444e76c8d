use models::book;
use serde::{Deserialize, Serialize};

/// Creation input; every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub description: String,
    pub rating: i32,
}

/// Partial update input. `None` (absent or JSON `null`) keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
}

impl BookPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.rating.is_none()
    }

    /// Full record to write back: supplied fields win, the rest come from `existing`.
    pub fn merge_into(self, existing: book::Model) -> book::Model {
        book::Model {
            id: existing.id,
            title: self.title.unwrap_or(existing.title),
            description: self.description.unwrap_or(existing.description),
            rating: self.rating.unwrap_or(existing.rating),
        }
    }
}
