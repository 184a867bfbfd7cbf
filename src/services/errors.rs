use crate::services::catalog_client::CatalogError;

#[derive(Debug, PartialEq, Eq)]
pub enum FilterError {
    EmptyValue,
    UnknownKey(String),
}

impl std::error::Error for FilterError {}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterError::EmptyValue => write!(f, "Filter value must not be empty"),
            FilterError::UnknownKey(key) => write!(f, "Unknown filter key: {}", key),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum CartStoreError {
    ConnectionFailed,
    QueryFailed,
}

impl std::error::Error for CartStoreError {}

impl std::fmt::Display for CartStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartStoreError::ConnectionFailed => write!(f, "Cart store unavailable"),
            CartStoreError::QueryFailed => write!(f, "Cart store query failed"),
        }
    }
}

#[derive(Debug)]
pub enum CartServiceError {
    InvalidQuantity,
    LineNotFound,
    StoreError(CartStoreError),
    CatalogUnavailable(CatalogError),
}

impl std::error::Error for CartServiceError {}

impl From<CartStoreError> for CartServiceError {
    fn from(e: CartStoreError) -> Self {
        CartServiceError::StoreError(e)
    }
}

impl From<CatalogError> for CartServiceError {
    fn from(e: CatalogError) -> Self {
        CartServiceError::CatalogUnavailable(e)
    }
}

impl std::fmt::Display for CartServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartServiceError::InvalidQuantity => write!(f, "Quantity must be at least 1"),
            CartServiceError::LineNotFound => write!(f, "Product is not in the cart"),
            CartServiceError::StoreError(e) => write!(f, "{}", e),
            CartServiceError::CatalogUnavailable(e) => write!(f, "Catalog unavailable: {}", e),
        }
    }
}
