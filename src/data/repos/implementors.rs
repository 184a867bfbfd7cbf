pub mod cart_repo;
pub mod memory_cart_store;
