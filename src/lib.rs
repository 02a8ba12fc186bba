pub mod config;
pub mod error;
pub mod models;
pub mod page;
pub mod probe;
pub mod render;
