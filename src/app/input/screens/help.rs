use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_help_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') => {
            app.screen = AppScreen::Browse;
        }
        _ => {}
    }
}
