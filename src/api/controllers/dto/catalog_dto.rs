use crate::data::models::page::PageMeta;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: BigDecimal,
    pub discount_price: BigDecimal,
    pub discount_percentage: u32,
    pub is_new: bool,
    pub image: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub in_stock: bool,
    pub quantity: i32,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingState {
    Loaded,
    Empty,
    Error,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ActiveFilter {
    pub label: String,
    pub name: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub state: ListingState,
    pub items: Vec<ProductResponse>,
    pub meta: PageMeta,
    pub pages: Vec<u32>,
    pub filters: Vec<ActiveFilter>,
    pub sort: String,
    pub search: String,
}

/// Body returned when the catalog could not be reached; the shopper is offered a reload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListingErrorResponse {
    pub state: ListingState,
    pub message: String,
    pub retry: bool,
}
