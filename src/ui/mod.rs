// UI module for ratatui_dex-compare
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &mut App, f: &mut Frame<'_>) {
    match app.screen {
        AppScreen::Browse => screens::browse::render_browse(app, f),
        AppScreen::Help => screens::help::render_help(f),
    }
}
