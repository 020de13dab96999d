use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::net::worker::NetRequest;
use crate::tui::app::{App, Mode};

pub(super) fn handle_ask(app: &mut App, key: KeyEvent) -> Option<NetRequest> {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.mode = Mode::Browse;
            None
        }
        (_, KeyCode::Tab) => {
            app.mode = Mode::Capture;
            None
        }

        // Ask; the question is sent as-is and the draft stays
        (_, KeyCode::Enter) => Some(app.submit_question()),

        (_, KeyCode::Backspace) => {
            app.question_draft.backspace();
            None
        }
        (_, KeyCode::Delete) => {
            app.question_draft.delete();
            None
        }
        (_, KeyCode::Left) => {
            app.question_draft.move_left();
            None
        }
        (_, KeyCode::Right) => {
            app.question_draft.move_right();
            None
        }
        (_, KeyCode::Home) => {
            app.question_draft.move_home();
            None
        }
        (_, KeyCode::End) => {
            app.question_draft.move_end();
            None
        }

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.question_draft.insert_char(c);
            None
        }

        _ => None,
    }
}
