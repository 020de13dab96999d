mod ask;
mod browse;
mod capture;

use crossterm::event::{KeyCode, KeyEvent};

use crate::net::worker::NetRequest;

use super::app::{App, Mode};

/// Handle a key event in the current mode. Returns a network request when
/// the key triggers one of the flows.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<NetRequest> {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return None;
    }

    match app.mode {
        Mode::Capture => capture::handle_capture(app, key),
        Mode::Browse => browse::handle_browse(app, key),
        Mode::Ask => ask::handle_ask(app, key),
    }
}
