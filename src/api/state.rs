use crate::api::config::{CartBackend, Config, ConfigError};
use crate::data::database::Database;
use crate::data::repos::implementors::cart_repo::CartRepo;
use crate::data::repos::implementors::memory_cart_store::MemoryCartStore;
use crate::data::repos::traits::cart_store::CartStore;
use crate::security::jwt::JwtService;
use crate::services::catalog_client::{CatalogClient, HttpCatalogClient};
use std::sync::Arc;

/// Shared handles passed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogClient>,
    pub carts: Arc<dyn CartStore>,
    pub jwt: JwtService,
    pub default_page_size: u32,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn CatalogClient>,
        carts: Arc<dyn CartStore>,
        jwt: JwtService,
        default_page_size: u32,
    ) -> Self {
        AppState {
            catalog,
            carts,
            jwt,
            default_page_size,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let catalog = HttpCatalogClient::new(config.catalog_url.clone(), config.catalog_timeout)?;

        let carts: Arc<dyn CartStore> = match config.cart_backend {
            CartBackend::Memory => Arc::new(MemoryCartStore::new()),
            CartBackend::Mysql => {
                let url = config
                    .database_url
                    .as_deref()
                    .filter(|url| !url.trim().is_empty())
                    .ok_or(ConfigError::Missing("DATABASE_URL"))?;
                Arc::new(CartRepo::new(Database::connect(url)?))
            }
        };

        tracing::info!("Using {:?} cart store", config.cart_backend);

        Ok(AppState::new(
            Arc::new(catalog),
            carts,
            JwtService::new(config.jwt_secret.clone(), config.jwt_expiration_minutes),
            config.default_page_size,
        ))
    }
}
