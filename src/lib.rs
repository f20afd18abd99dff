pub mod config;
pub mod databases;
pub mod models;
pub mod routes;
pub mod store;
pub mod utils;
