use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::net::worker::NetRequest;
use crate::tui::app::{App, Mode};

pub(super) fn handle_capture(app: &mut App, key: KeyEvent) -> Option<NetRequest> {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.mode = Mode::Browse;
            None
        }
        (_, KeyCode::Tab) => {
            app.mode = Mode::Ask;
            None
        }

        // Submit; a whitespace-only draft is a no-op
        (_, KeyCode::Enter) => app.submit_capture(),

        (_, KeyCode::Backspace) => {
            app.content_draft.backspace();
            None
        }
        (_, KeyCode::Delete) => {
            app.content_draft.delete();
            None
        }
        (_, KeyCode::Left) => {
            app.content_draft.move_left();
            None
        }
        (_, KeyCode::Right) => {
            app.content_draft.move_right();
            None
        }
        (_, KeyCode::Home) => {
            app.content_draft.move_home();
            None
        }
        (_, KeyCode::End) => {
            app.content_draft.move_end();
            None
        }

        // Type character (the live badge follows on the next draw)
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.content_draft.insert_char(c);
            None
        }

        _ => None,
    }
}
