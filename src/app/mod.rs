// App module for ratatui_dex-compare
// Handles application state and business logic

pub mod actions;
pub mod filter;
pub mod input;
pub mod selection;
pub mod state;

pub use input::handle_input;
pub use state::{App, AppEvent, AppScreen, RenderPhase};
