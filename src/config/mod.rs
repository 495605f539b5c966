// Config module for ratatui_dex-compare
// Resolves API endpoints and catalog size from the environment

mod config;

pub use config::ApiConfig;
