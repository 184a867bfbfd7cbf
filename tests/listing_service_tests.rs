mod common;

use bigdecimal::BigDecimal;
use chrono::{Duration, Utc};
use common::{FakeCatalog, product};
use std::str::FromStr;
use storefront_lib::services::filter_service::{FilterKey, ListingQuery, SortOrder};
use storefront_lib::services::listing_service::{
    ListingOutcome, ListingService, PAGE_WINDOW, discount_percentage, discount_price, is_new,
    page_window,
};

#[test]
fn test_discount_price_doubles_price() {
    let price = BigDecimal::from_str("12.50").unwrap();
    assert_eq!(discount_price(&price), BigDecimal::from(25));
}

#[test]
fn test_discount_percentage() {
    let price = BigDecimal::from_str("12.50").unwrap();
    assert_eq!(discount_percentage(&discount_price(&price), &price), 50);

    assert_eq!(
        discount_percentage(&BigDecimal::from(3), &BigDecimal::from(2)),
        33
    );
    assert_eq!(
        discount_percentage(&BigDecimal::from(0), &BigDecimal::from(0)),
        0
    );
    assert_eq!(
        discount_percentage(&BigDecimal::from(5), &BigDecimal::from(8)),
        0
    );
}

#[test]
fn test_is_new_within_seven_days() {
    let now = Utc::now();

    assert!(is_new(Some(now - Duration::days(2)), now));
    assert!(is_new(Some(now - Duration::days(7)), now));
    assert!(!is_new(Some(now - Duration::days(8)), now));
    assert!(is_new(Some(now + Duration::days(1)), now));
    assert!(!is_new(None, now));
}

#[test]
fn test_page_window_small_catalog() {
    assert_eq!(page_window(1, 3), vec![1, 2, 3]);
    assert_eq!(page_window(1, 0), Vec::<u32>::new());
}

#[test]
fn test_page_window_slides_with_current_page() {
    assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
    assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
    assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
    assert_eq!(page_window(42, 10), vec![6, 7, 8, 9, 10]);
}

#[test]
fn test_page_window_always_contains_current() {
    for total in 1..=12u32 {
        for current in 1..=total {
            let window = page_window(current, total);
            assert!(window.len() as u32 <= PAGE_WINDOW);
            assert!(window.contains(&current));
        }
    }
}

#[test]
fn test_page_window_at_u32_max() {
    assert_eq!(
        page_window(u32::MAX, u32::MAX),
        vec![u32::MAX - 4, u32::MAX - 3, u32::MAX - 2, u32::MAX - 1, u32::MAX]
    );
    assert_eq!(page_window(u32::MAX - 1, u32::MAX).len(), PAGE_WINDOW as usize);
}

#[tokio::test]
async fn test_fetch_loaded() {
    let catalog = FakeCatalog::with_products(vec![product("a", 4), product("b", 6)]);
    let service = ListingService::new();

    let mut query = ListingQuery::new(8);
    query.filters.set(FilterKey::Category, "Pens").unwrap();
    query.sort = SortOrder::PriceLow;

    match service.fetch(&catalog, &query).await {
        ListingOutcome::Loaded(page) => {
            assert_eq!(page.result.len(), 2);
            assert_eq!(page.meta.total_page, 1);
        }
        other => panic!("unexpected outcome {:?}", other),
    }

    let sent = catalog.last_query();
    assert!(sent.iter().any(|p| p.name == "sortBy" && p.value == "price:asc"));
}

#[tokio::test]
async fn test_fetch_empty_is_not_an_error() {
    let catalog = FakeCatalog::default();
    let service = ListingService::new();

    let outcome = service.fetch(&catalog, &ListingQuery::new(8)).await;
    assert!(matches!(outcome, ListingOutcome::Empty(_)));
}

#[tokio::test]
async fn test_fetch_error() {
    let catalog = FakeCatalog::failing();
    let service = ListingService::new();

    let outcome = service.fetch(&catalog, &ListingQuery::new(8)).await;
    assert!(matches!(outcome, ListingOutcome::Error(_)));
}
