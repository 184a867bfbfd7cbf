pub mod cart;
pub mod page;
pub mod product;
pub mod schema;
