pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod gateway;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod prompt;
pub mod providers;
pub mod render;
pub mod routes;
