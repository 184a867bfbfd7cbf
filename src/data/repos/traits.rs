pub mod cart_store;
