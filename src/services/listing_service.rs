use crate::data::models::page::{PageMeta, ProductPage};
use crate::services::catalog_client::CatalogClient;
use crate::services::filter_service::ListingQuery;
use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive, Zero};
use chrono::{DateTime, Duration, Utc};

/// Products created within this many days are flagged as new.
pub const NEW_PRODUCT_DAYS: i64 = 7;
/// Maximum number of page links shown around the current page.
pub const PAGE_WINDOW: u32 = 5;

#[derive(Debug)]
pub enum ListingOutcome {
    Loaded(ProductPage),
    Empty(PageMeta),
    Error(String),
}

/// Compare-at price displayed struck through next to the selling price.
pub fn discount_price(price: &BigDecimal) -> BigDecimal {
    price * BigDecimal::from(2)
}

/// Whole-number percentage saved against `original`, or 0 when there is no original price.
pub fn discount_percentage(original: &BigDecimal, price: &BigDecimal) -> u32 {
    if original.is_zero() || price >= original {
        return 0;
    }

    let pct = (original - price) * BigDecimal::from(100) / original.clone();
    pct.with_scale_round(0, RoundingMode::HalfUp)
        .to_u32()
        .unwrap_or(0)
}

pub fn is_new(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match created_at {
        Some(created) => now.signed_duration_since(created) <= Duration::days(NEW_PRODUCT_DAYS),
        None => false,
    }
}

/// Page numbers to render as links, at most [`PAGE_WINDOW`] wide and
/// shifted so the current page stays inside it.
pub fn page_window(current: u32, total_pages: u32) -> Vec<u32> {
    if total_pages == 0 {
        return Vec::new();
    }

    let current = current.clamp(1, total_pages);
    let half = PAGE_WINDOW / 2;

    let mut start = current.saturating_sub(half).max(1);
    let end = start.saturating_add(PAGE_WINDOW - 1).min(total_pages);
    if end - start + 1 < PAGE_WINDOW {
        start = end.saturating_sub(PAGE_WINDOW - 1).max(1);
    }

    (start..=end).collect()
}

pub struct ListingService;

impl ListingService {
    pub fn new() -> Self {
        ListingService
    }

    /// Runs the composed query and sorts the reply into loaded, empty or failed.
    pub async fn fetch(&self, catalog: &dyn CatalogClient, query: &ListingQuery) -> ListingOutcome {
        let params = query.compose();

        match catalog.query_products(&params).await {
            Ok(page) if page.result.is_empty() => ListingOutcome::Empty(page.meta),
            Ok(page) => ListingOutcome::Loaded(page),
            Err(e) => {
                tracing::error!("Catalog query failed: {}", e);
                ListingOutcome::Error(e.to_string())
            }
        }
    }

}

impl Default for ListingService {
    fn default() -> Self {
        Self::new()
    }
}
