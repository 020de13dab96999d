use crossterm::event::{KeyCode, KeyEvent};

use crate::net::worker::NetRequest;
use crate::tui::app::{App, Mode};

pub(super) fn handle_browse(app: &mut App, key: KeyEvent) -> Option<NetRequest> {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            None
        }

        KeyCode::Char('i') | KeyCode::Tab => {
            app.mode = Mode::Capture;
            None
        }
        KeyCode::Char('a') | KeyCode::Char('/') => {
            app.mode = Mode::Ask;
            None
        }

        // Manual refresh
        KeyCode::Char('r') => Some(NetRequest::FetchItems),

        KeyCode::Up | KeyCode::Char('k') => {
            app.move_list_cursor(-1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_list_cursor(1);
            None
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.list_cursor = 0;
            None
        }
        KeyCode::End | KeyCode::Char('G') => {
            if !app.items.is_empty() {
                app.list_cursor = app.items.len() - 1;
            }
            None
        }

        _ => None,
    }
}
