pub mod auth_routes;
pub mod cart_routes;
pub mod catalog_routes;
