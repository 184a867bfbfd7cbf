use crate::api::controllers::dto::cart_dto::{CartResponse, CartRowResponse, CartSummaryResponse};
use crate::api::controllers::dto::catalog_dto::{ActiveFilter, ProductResponse};
use crate::data::models::cart::Cart;
use crate::data::models::product::Product;
use crate::services::cart_service::{CartRow, CartSummary};
use crate::services::filter_service::{FilterSet, label_for};
use crate::services::listing_service::{discount_percentage, discount_price, is_new};
use chrono::Utc;

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let compare_at = discount_price(&product.price);
        let percentage = discount_percentage(&compare_at, &product.price);

        ProductResponse {
            is_new: is_new(product.created_at, Utc::now()),
            id: product.id,
            name: product.name,
            price: product.price,
            discount_price: compare_at,
            discount_percentage: percentage,
            image: product.image,
            brand: product.brand,
            category: product.category,
            in_stock: product.in_stock,
            quantity: product.quantity,
            description: product.description,
            created_at: product.created_at.map(|d| d.to_rfc3339()),
            updated_at: product.updated_at.map(|d| d.to_rfc3339()),
        }
    }
}

impl From<CartRow> for CartRowResponse {
    fn from(row: CartRow) -> Self {
        CartRowResponse {
            product: ProductResponse::from(row.product),
            quantity: row.quantity,
            line_total: row.line_total,
        }
    }
}

impl From<CartSummary> for CartSummaryResponse {
    fn from(summary: CartSummary) -> Self {
        CartSummaryResponse {
            item_count: summary.rows.iter().map(|r| r.quantity).sum(),
            rows: summary.rows.into_iter().map(CartRowResponse::from).collect(),
            subtotal: summary.subtotal,
            shipping: summary.shipping,
            total: summary.total,
        }
    }
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        CartResponse {
            user_id: cart.user_id,
            items: cart.items,
        }
    }
}

/// Active-filter chips for the listing response; managed keys never show up.
pub fn active_filters(filters: &FilterSet) -> Vec<ActiveFilter> {
    filters
        .user_filters()
        .map(|(key, value)| ActiveFilter {
            name: key.as_str().to_string(),
            value: value.to_string(),
            label: label_for(key, value),
        })
        .collect()
}
