pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod interactive;
pub mod render;
pub mod search;
