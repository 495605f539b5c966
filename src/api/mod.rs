// API module for ratatui_dex-compare
// Talks to the catalog and detail endpoints

mod client;
pub mod models;

pub use client::{ApiError, DexClient};
