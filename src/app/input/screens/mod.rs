pub mod browse;
pub mod help;

use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    match app.screen {
        AppScreen::Browse => browse::handle_browse_input(app, key),
        AppScreen::Help => help::handle_help_input(app, key),
    }
}
