use crate::services::filter_service::DEFAULT_PAGE_SIZE;
use dotenvy::dotenv;
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartBackend {
    Memory,
    Mysql,
}

impl FromStr for CartBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(CartBackend::Memory),
            "mysql" => Ok(CartBackend::Mysql),
            other => Err(format!("unknown cart backend {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub catalog_url: String,
    pub catalog_timeout: Duration,
    pub jwt_secret: String,
    pub jwt_expiration_minutes: u64,
    pub default_page_size: u32,
    pub cart_backend: CartBackend,
    pub database_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        dotenv().ok();

        let cart_backend: CartBackend = try_load("CART_BACKEND", "memory")?;
        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());
        if cart_backend == CartBackend::Mysql && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let config = Config {
            bind_address: try_load("BIND_ADDRESS", "127.0.0.1:3000")?,
            catalog_url: try_load("CATALOG_URL", "http://localhost:5000/api/v1")?,
            catalog_timeout: Duration::from_secs(try_load("CATALOG_TIMEOUT_SECS", "10")?),
            jwt_secret: env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?,
            jwt_expiration_minutes: try_load("JWT_EXPIRATION_MINUTES", "60")?,
            default_page_size: try_load("DEFAULT_PAGE_SIZE", &DEFAULT_PAGE_SIZE.to_string())?,
            cart_backend,
            database_url,
        };

        tracing::info!("Config loaded");

        Ok(config)
    }
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            tracing::info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: e.to_string(),
        })
}
