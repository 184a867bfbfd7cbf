pub mod cart_dto;
pub mod catalog_dto;
