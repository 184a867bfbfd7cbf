use crate::data::models::product::Product;
use serde::{Deserialize, Serialize};

/// Pagination descriptors returned alongside a catalog result set.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_page: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub result: Vec<Product>,
    pub meta: PageMeta,
}

/// `{ data: ... }` wrapper used by every catalog response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub data: T,
}
