pub mod analyzer;
pub mod error;
pub mod extract;
pub mod render;
pub mod routes;
pub mod types;
