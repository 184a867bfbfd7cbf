use crate::api::controllers::dto::catalog_dto::ProductResponse;
use crate::data::models::cart::CartLine;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

fn one() -> i32 {
    1
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: String,
    #[serde(default = "one")]
    pub quantity: i32,
}

#[derive(Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub user_id: String,
    pub items: Vec<CartLine>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartRowResponse {
    pub product: ProductResponse,
    pub quantity: i32,
    pub line_total: BigDecimal,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartSummaryResponse {
    pub rows: Vec<CartRowResponse>,
    pub item_count: i32,
    pub subtotal: BigDecimal,
    pub shipping: BigDecimal,
    pub total: BigDecimal,
}
