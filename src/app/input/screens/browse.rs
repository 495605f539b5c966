use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

const PAGE_JUMP: isize = 5;

pub fn handle_browse_input(app: &mut App, key: KeyCode) {
    // A capacity warning blocks everything else until dismissed.
    if app.capacity_warning {
        app.capacity_warning = false;
        return;
    }

    match key {
        KeyCode::Up => app.move_cursor(-1),
        KeyCode::Down => app.move_cursor(1),
        KeyCode::PageUp => app.move_cursor(-PAGE_JUMP),
        KeyCode::PageDown => app.move_cursor(PAGE_JUMP),
        KeyCode::Home => app.cursor_to_start(),
        KeyCode::End => app.cursor_to_end(),
        KeyCode::Enter => app.toggle_under_cursor(),
        KeyCode::F(1) => app.screen = AppScreen::Help,
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.apply_filter();
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.apply_filter();
        }
        KeyCode::Esc => {
            if app.search_input.is_empty() {
                app.running = false;
            } else {
                app.search_input.clear();
                app.apply_filter();
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DexClient;
    use crate::app::actions::AppActions;
    use crate::config::ApiConfig;
    use crate::domain::CatalogEntry;

    fn test_app() -> App {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:0".to_string(),
            sprite_base_url: "http://127.0.0.1:0".to_string(),
            catalog_limit: 3,
        };
        let (mut app, _rx) = App::new(AppActions::new(DexClient::new(config)));
        app.catalog = vec![
            CatalogEntry::new(1, "bulbasaur", "u1"),
            CatalogEntry::new(2, "charmander", "u2"),
            CatalogEntry::new(3, "squirtle", "u3"),
        ];
        app.apply_filter();
        app
    }

    #[test]
    fn typing_narrows_the_list() {
        let mut app = test_app();
        for c in "char".chars() {
            handle_browse_input(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.filtered.len(), 1);
        assert_eq!(app.filtered[0].name, "charmander");
    }

    #[test]
    fn escape_clears_the_search_before_quitting() {
        let mut app = test_app();
        handle_browse_input(&mut app, KeyCode::Char('x'));
        assert!(app.filtered.is_empty());

        handle_browse_input(&mut app, KeyCode::Esc);
        assert!(app.running);
        assert!(app.search_input.is_empty());
        assert_eq!(app.filtered.len(), 3);

        handle_browse_input(&mut app, KeyCode::Esc);
        assert!(!app.running);
    }

    #[test]
    fn any_key_dismisses_the_capacity_warning() {
        let mut app = test_app();
        app.capacity_warning = true;

        handle_browse_input(&mut app, KeyCode::Char('z'));

        assert!(!app.capacity_warning);
        // The keystroke itself is swallowed by the popup.
        assert!(app.search_input.is_empty());
    }

    #[test]
    fn cursor_stays_inside_the_filtered_list() {
        let mut app = test_app();
        handle_browse_input(&mut app, KeyCode::End);
        handle_browse_input(&mut app, KeyCode::Down);
        assert_eq!(app.list_index, 2);

        handle_browse_input(&mut app, KeyCode::PageUp);
        assert_eq!(app.list_index, 0);
    }
}
