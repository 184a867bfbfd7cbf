pub mod auth_controller;
pub mod cart_controller;
pub mod catalog_controller;
pub mod dto;
