//! Brand catalogue shapes (API 3).

use serde::{Deserialize, Serialize};

/// A brand as listed by `GET /brandsList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(deserialize_with = "crate::number::integral")]
    pub id: u64,
    pub brand: String,
}

/// `GET /brandsList` success body. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandsListResponse {
    #[serde(deserialize_with = "crate::number::integral")]
    pub response_code: u16,
    pub brands: Vec<Brand>,
}
