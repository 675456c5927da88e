//! Product catalogue shapes (API 1, 5).

use serde::{Deserialize, Serialize};

/// Audience a product category belongs to (`Women`, `Men`, `Kids`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserType {
    pub usertype: String,
}

/// Category of a product, nested under its audience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub usertype: UserType,
    pub category: String,
}

/// A product as listed by the catalogue endpoints.
///
/// `price` is display text (`"Rs. 500"`), not a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "crate::number::integral")]
    pub id: u64,
    pub name: String,
    pub price: String,
    pub brand: String,
    pub category: Category,
}

/// `GET /productsList` success body. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsListResponse {
    #[serde(deserialize_with = "crate::number::integral")]
    pub response_code: u16,
    pub products: Vec<Product>,
}

/// `POST /searchProduct` success body. May be empty when nothing matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchProductResponse {
    #[serde(deserialize_with = "crate::number::integral")]
    pub response_code: u16,
    pub products: Vec<Product>,
}
