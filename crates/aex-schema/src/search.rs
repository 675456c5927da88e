//! Search request shape (API 5, 6).

use serde::{Deserialize, Serialize};

/// Form body of `POST /searchProduct`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchProductRequest {
    pub search_product: String,
}

impl SearchProductRequest {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            search_product: term.into(),
        }
    }
}
