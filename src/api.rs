pub mod config;
pub mod controllers;
pub mod errors;
pub mod extractors;
pub mod routes;
pub mod server;
pub mod state;
