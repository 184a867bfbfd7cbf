use crate::api::controllers::dto::catalog_dto::{
    ListingErrorResponse, ListingResponse, ListingState, ProductResponse,
};
use crate::api::state::AppState;
use crate::services::filter_service::ListingQuery;
use crate::services::listing_service::{ListingOutcome, ListingService, page_window};
use crate::utils::mappers::active_filters;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// List products matching the query-string filters
pub async fn list_products(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    let service = ListingService::new();
    let query = ListingQuery::from_pairs(pairs, state.default_page_size);

    let outcome = service.fetch(state.catalog.as_ref(), &query).await;
    let (listing_state, items, meta): (ListingState, Vec<ProductResponse>, _) = match outcome {
        ListingOutcome::Loaded(page) => (
            ListingState::Loaded,
            page.result.into_iter().map(ProductResponse::from).collect(),
            page.meta,
        ),
        ListingOutcome::Empty(meta) => (ListingState::Empty, Vec::new(), meta),
        ListingOutcome::Error(_) => {
            let body = ListingErrorResponse {
                state: ListingState::Error,
                message: "We couldn't load products right now. Please reload the page.".to_string(),
                retry: true,
            };
            return (StatusCode::BAD_GATEWAY, Json(body)).into_response();
        }
    };

    let response = ListingResponse {
        state: listing_state,
        items,
        pages: page_window(meta.page, meta.total_page),
        meta,
        filters: active_filters(&query.filters),
        sort: query.sort.as_str().to_string(),
        search: query.search_input.clone(),
    };

    (StatusCode::OK, Json(response)).into_response()
}
