pub mod cart_service;
pub mod catalog_client;
pub mod errors;
pub mod filter_service;
pub mod listing_service;
