#![allow(dead_code)]

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{Duration, Utc};
use std::sync::{Arc, Mutex};
use storefront_lib::api::state::AppState;
use storefront_lib::data::models::page::{PageMeta, ProductPage};
use storefront_lib::data::models::product::Product;
use storefront_lib::data::repos::implementors::memory_cart_store::MemoryCartStore;
use storefront_lib::security::jwt::JwtService;
use storefront_lib::services::catalog_client::{CatalogClient, CatalogError};
use storefront_lib::services::filter_service::FilterParam;

pub const TEST_SECRET: &str = "test-secret";

/// Stand-in for the remote catalog. Records every listing query it receives.
#[derive(Default)]
pub struct FakeCatalog {
    pub products: Vec<Product>,
    pub fail: bool,
    pub queries: Mutex<Vec<Vec<FilterParam>>>,
}

impl FakeCatalog {
    pub fn with_products(products: Vec<Product>) -> Self {
        FakeCatalog {
            products,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        FakeCatalog {
            fail: true,
            ..Default::default()
        }
    }

    pub fn last_query(&self) -> Vec<FilterParam> {
        self.queries
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap_or_default()
    }
}

fn param(params: &[FilterParam], name: &str) -> Option<u32> {
    params
        .iter()
        .find(|p| p.name == name)
        .and_then(|p| p.value.parse().ok())
}

#[async_trait]
impl CatalogClient for FakeCatalog {
    async fn query_products(&self, params: &[FilterParam]) -> Result<ProductPage, CatalogError> {
        self.queries.lock().unwrap().push(params.to_vec());

        if self.fail {
            return Err(CatalogError::NetworkError {
                status_code: 503,
                message: "catalog down".to_string(),
            });
        }

        let page = param(params, "page").unwrap_or(1);
        let limit = param(params, "limit").unwrap_or(8);
        let total = self.products.len() as u32;

        Ok(ProductPage {
            result: self.products.clone(),
            meta: PageMeta {
                page,
                limit,
                total: total as u64,
                total_page: total.div_ceil(limit),
            },
        })
    }

    async fn get_products_by_ids(&self, ids: &[String]) -> Result<Vec<Product>, CatalogError> {
        if self.fail {
            return Err(CatalogError::NetworkError {
                status_code: 503,
                message: "catalog down".to_string(),
            });
        }

        // reversed so callers cannot rely on input order
        Ok(self
            .products
            .iter()
            .rev()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }
}

pub fn product(id: &str, price: i64) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {}", id),
        price: BigDecimal::from(price),
        image: None,
        brand: Some("Inkwell".to_string()),
        category: Some("Pens".to_string()),
        in_stock: true,
        quantity: 10,
        created_at: Some(Utc::now() - Duration::days(30)),
        updated_at: None,
        description: Some("Test Description".to_string()),
    }
}

pub fn app_state(catalog: Arc<FakeCatalog>) -> AppState {
    AppState::new(
        catalog,
        Arc::new(MemoryCartStore::new()),
        JwtService::new(TEST_SECRET, 60),
        8,
    )
}

pub fn token_for(user_id: &str) -> String {
    JwtService::new(TEST_SECRET, 60)
        .generate_token(user_id)
        .expect("Failed to generate token")
}
