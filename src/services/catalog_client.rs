use crate::data::models::page::{Envelope, ProductPage};
use crate::data::models::product::Product;
use crate::services::filter_service::FilterParam;
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::Serialize;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("network error: {status_code} {message}")]
    NetworkError { status_code: u16, message: String },
}

/// Remote product catalog.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Runs a listing query built from an ordered `(name, value)` list.
    async fn query_products(&self, params: &[FilterParam]) -> Result<ProductPage, CatalogError>;

    /// Fetches the records for `ids`. Unknown ids are simply absent and the
    /// result order is unspecified.
    async fn get_products_by_ids(&self, ids: &[String]) -> Result<Vec<Product>, CatalogError>;
}

#[derive(Clone)]
pub struct HttpCatalogClient {
    url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct BulkProductsRequest<'a> {
    ids: &'a [String],
}

impl HttpCatalogClient {
    pub fn new(url: String, timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

async fn map_client_error(response: Response) -> Result<Response, CatalogError> {
    match response.status() {
        StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => Ok(response),
        status => Err(CatalogError::NetworkError {
            status_code: status.as_u16(),
            message: response.text().await.unwrap_or_default(),
        }),
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    #[tracing::instrument(skip(self), err)]
    async fn query_products(&self, params: &[FilterParam]) -> Result<ProductPage, CatalogError> {
        let pairs: Vec<(&str, &str)> = params
            .iter()
            .map(|p| (p.name.as_str(), p.value.as_str()))
            .collect();

        let response = self
            .client
            .get(format!("{}/products", self.url))
            .query(&pairs)
            .send()
            .await?;

        let envelope: Envelope<ProductPage> = map_client_error(response).await?.json().await?;
        Ok(envelope.data)
    }

    #[tracing::instrument(skip(self), err)]
    async fn get_products_by_ids(&self, ids: &[String]) -> Result<Vec<Product>, CatalogError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .client
            .post(format!("{}/products/bulk", self.url))
            .json(&BulkProductsRequest { ids })
            .send()
            .await?;

        let envelope: Envelope<Vec<Product>> = map_client_error(response).await?.json().await?;
        Ok(envelope.data)
    }
}
