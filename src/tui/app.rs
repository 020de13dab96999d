use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::log::EventLog;
use crate::model::answer::SourceSnippet;
use crate::model::classify::classify;
use crate::model::config::Config;
use crate::model::item::Item;
use crate::net::client::{ApiClient, ApiError};
use crate::net::worker::{NetEvent, NetRequest, Worker};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Typing into the capture input
    Capture,
    /// Navigating the item list
    Browse,
    /// Typing into the question input
    Ask,
}

/// A single-line text input: draft buffer plus byte cursor.
///
/// Cursor movement and deletion step by grapheme, so a combining sequence or
/// emoji behaves as one character.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    pub buffer: String,
    pub cursor: usize,
}

impl InputState {
    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            let next = next_grapheme_boundary(&self.buffer, self.cursor).unwrap_or(self.buffer.len());
            self.buffer.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = next_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }
}

/// Main application state.
///
/// `items` and the `answer`/`sources` pair are each mutated only by applying
/// their own flow's completion event; the drafts belong to the view and are
/// only touched by key handlers and the ingest success path.
pub struct App {
    /// Local cache of the server's item collection, replaced wholesale by
    /// each successful refresh
    pub items: Vec<Item>,
    /// Pending note/URL text
    pub content_draft: InputState,
    /// Pending question text (persists after asking)
    pub question_draft: InputState,
    pub answer: Option<String>,
    pub sources: Vec<SourceSnippet>,
    pub mode: Mode,
    /// Cursor index into the item list
    pub list_cursor: usize,
    /// Scroll offset for the item list (first visible row)
    pub list_scroll: usize,
    pub should_quit: bool,
    pub theme: Theme,
    /// Most recent flow failure, shown on the status row until the next
    /// submission
    pub status: Option<String>,
    log: EventLog,
}

impl App {
    pub fn new(theme: Theme, log: EventLog) -> Self {
        App {
            items: Vec::new(),
            content_draft: InputState::default(),
            question_draft: InputState::default(),
            answer: None,
            sources: Vec::new(),
            mode: Mode::Capture,
            list_cursor: 0,
            list_scroll: 0,
            should_quit: false,
            theme,
            status: None,
            log,
        }
    }

    /// Submit the capture input. Whitespace-only drafts never reach the
    /// backend; the draft itself is left untouched until the persist is
    /// confirmed (see `apply_net_event`).
    pub fn submit_capture(&mut self) -> Option<NetRequest> {
        let trimmed = self.content_draft.buffer.trim();
        if trimmed.is_empty() {
            return None;
        }
        let kind = classify(trimmed);
        self.status = None;
        Some(NetRequest::Ingest {
            kind,
            content: trimmed.to_string(),
        })
    }

    /// Submit the question input as-is. Empty questions are allowed; the
    /// backend decides what a valid question is.
    pub fn submit_question(&mut self) -> NetRequest {
        self.status = None;
        NetRequest::Query {
            question: self.question_draft.buffer.clone(),
        }
    }

    /// Apply one completed request to the state. Returns a follow-up request
    /// when the completion triggers another flow (ingest success refreshes
    /// the listing).
    pub fn apply_net_event(&mut self, event: NetEvent) -> Option<NetRequest> {
        match event {
            NetEvent::ItemsFetched(Ok(items)) => {
                self.items = items;
                self.clamp_list_cursor();
                None
            }
            NetEvent::ItemsFetched(Err(e)) => {
                self.flow_failure("refresh", &e);
                None
            }
            NetEvent::IngestFinished(Ok(())) => {
                self.content_draft.clear();
                Some(NetRequest::FetchItems)
            }
            NetEvent::IngestFinished(Err(e)) => {
                self.flow_failure("ingest", &e);
                None
            }
            NetEvent::AnswerArrived(Ok(result)) => {
                self.answer = Some(result.answer);
                self.sources = result.sources;
                None
            }
            NetEvent::AnswerArrived(Err(e)) => {
                self.flow_failure("ask", &e);
                None
            }
        }
    }

    fn flow_failure(&mut self, flow: &str, err: &ApiError) {
        self.log
            .append(err.category(), &format!("{}: {}", flow, err));
        self.status = Some(format!("{} failed: {}", flow, err));
    }

    fn clamp_list_cursor(&mut self) {
        if self.items.is_empty() {
            self.list_cursor = 0;
        } else if self.list_cursor >= self.items.len() {
            self.list_cursor = self.items.len() - 1;
        }
    }

    /// Move the item-list cursor by `delta`, clamped to the collection.
    pub fn move_list_cursor(&mut self, delta: isize) {
        if self.items.is_empty() {
            return;
        }
        let len = self.items.len() as isize;
        let next = (self.list_cursor as isize + delta).clamp(0, len - 1);
        self.list_cursor = next as usize;
    }
}

/// Run the TUI application
pub fn run(config: Config, log: EventLog) -> Result<(), Box<dyn std::error::Error>> {
    let client = ApiClient::new(&config.base_url);
    let worker = Worker::start(client)?;

    let mut app = App::new(Theme::from_config(&config.ui), log);

    // Initial listing
    worker.dispatch(NetRequest::FetchItems);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, &worker);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    worker: &Worker,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // Completed requests apply in completion order; a follow-up (the
        // refresh after a confirmed ingest) goes straight back out.
        for event in worker.poll() {
            if let Some(follow_up) = app.apply_net_event(event) {
                worker.dispatch(follow_up);
            }
        }

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(request) = input::handle_key(app, key)
        {
            worker.dispatch(request);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::ItemKind;

    fn test_app() -> (App, tempfile::TempDir) {
        let dir = tempfile::TempDir::new().unwrap();
        let log = EventLog::new(dir.path().join("events.log"));
        (App::new(Theme::default(), log), dir)
    }

    fn item(id: i64, kind: ItemKind, content: &str) -> Item {
        Item {
            id,
            kind,
            content: content.to_string(),
            created_at: Some("2026-08-07T10:00:00Z".to_string()),
        }
    }

    fn decode_error() -> ApiError {
        serde_json::from_str::<i64>("not json").unwrap_err().into()
    }

    #[test]
    fn empty_capture_is_a_no_op() {
        let (mut app, _dir) = test_app();
        assert_eq!(app.submit_capture(), None);

        app.content_draft.buffer = "   \t ".to_string();
        assert_eq!(app.submit_capture(), None);
    }

    #[test]
    fn capture_classifies_trimmed_content() {
        let (mut app, _dir) = test_app();
        app.content_draft.buffer = "  https://example.com  ".to_string();
        assert_eq!(
            app.submit_capture(),
            Some(NetRequest::Ingest {
                kind: ItemKind::Url,
                content: "https://example.com".to_string(),
            })
        );

        app.content_draft.buffer = "Buy milk".to_string();
        assert_eq!(
            app.submit_capture(),
            Some(NetRequest::Ingest {
                kind: ItemKind::Note,
                content: "Buy milk".to_string(),
            })
        );
    }

    #[test]
    fn capture_submission_keeps_the_draft() {
        let (mut app, _dir) = test_app();
        app.content_draft.buffer = "Buy milk".to_string();
        app.submit_capture();
        assert_eq!(app.content_draft.buffer, "Buy milk");
    }

    #[test]
    fn ingest_success_clears_draft_and_refreshes() {
        let (mut app, _dir) = test_app();
        app.content_draft.buffer = "Buy milk".to_string();
        app.content_draft.cursor = 8;

        let follow_up = app.apply_net_event(NetEvent::IngestFinished(Ok(())));
        assert_eq!(follow_up, Some(NetRequest::FetchItems));
        assert_eq!(app.content_draft.buffer, "");
        assert_eq!(app.content_draft.cursor, 0);
    }

    #[test]
    fn ingest_failure_retains_draft_and_items() {
        let (mut app, _dir) = test_app();
        app.items = vec![item(1, ItemKind::Note, "existing")];
        app.content_draft.buffer = "Buy milk".to_string();

        let follow_up = app.apply_net_event(NetEvent::IngestFinished(Err(decode_error())));
        assert_eq!(follow_up, None);
        assert_eq!(app.content_draft.buffer, "Buy milk");
        assert_eq!(app.items.len(), 1);
        assert!(app.status.as_deref().unwrap().starts_with("ingest failed"));
    }

    #[test]
    fn refresh_replaces_items_wholesale() {
        let (mut app, _dir) = test_app();
        app.items = vec![item(1, ItemKind::Note, "old")];

        let fresh = vec![
            item(3, ItemKind::Url, "https://example.com"),
            item(2, ItemKind::Note, "newer"),
        ];
        app.apply_net_event(NetEvent::ItemsFetched(Ok(fresh.clone())));
        assert_eq!(app.items, fresh);
    }

    #[test]
    fn refresh_failure_keeps_previous_items() {
        let (mut app, _dir) = test_app();
        app.items = vec![item(1, ItemKind::Note, "keep me")];

        app.apply_net_event(NetEvent::ItemsFetched(Err(decode_error())));
        assert_eq!(app.items.len(), 1);
        assert_eq!(app.items[0].content, "keep me");
    }

    #[test]
    fn refresh_is_idempotent() {
        let (mut app, _dir) = test_app();
        let listing = vec![item(2, ItemKind::Note, "b"), item(1, ItemKind::Note, "a")];
        app.apply_net_event(NetEvent::ItemsFetched(Ok(listing.clone())));
        let first = app.items.clone();
        app.apply_net_event(NetEvent::ItemsFetched(Ok(listing)));
        assert_eq!(app.items, first);
    }

    #[test]
    fn overlapping_refreshes_last_completion_wins() {
        let (mut app, _dir) = test_app();
        // Two refreshes in flight; the one completing second wins regardless
        // of dispatch order.
        app.apply_net_event(NetEvent::ItemsFetched(Ok(vec![item(
            1,
            ItemKind::Note,
            "first to complete",
        )])));
        app.apply_net_event(NetEvent::ItemsFetched(Ok(vec![item(
            2,
            ItemKind::Note,
            "second to complete",
        )])));
        assert_eq!(app.items[0].id, 2);
    }

    #[test]
    fn answer_replaces_wholesale_and_preserves_source_order() {
        let (mut app, _dir) = test_app();
        app.answer = Some("old".to_string());
        app.sources = vec![SourceSnippet {
            text: "stale".to_string(),
            item_id: None,
        }];

        let result = crate::model::answer::QueryResult {
            answer: "42".to_string(),
            sources: vec![
                SourceSnippet {
                    text: "doc1".to_string(),
                    item_id: Some(1),
                },
                SourceSnippet {
                    text: "doc2".to_string(),
                    item_id: Some(2),
                },
            ],
        };
        app.apply_net_event(NetEvent::AnswerArrived(Ok(result)));

        assert_eq!(app.answer.as_deref(), Some("42"));
        let texts: Vec<&str> = app.sources.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["doc1", "doc2"]);
    }

    #[test]
    fn ask_failure_keeps_previous_answer() {
        let (mut app, _dir) = test_app();
        app.answer = Some("prior".to_string());
        app.sources = vec![SourceSnippet {
            text: "prior source".to_string(),
            item_id: None,
        }];

        app.apply_net_event(NetEvent::AnswerArrived(Err(decode_error())));
        assert_eq!(app.answer.as_deref(), Some("prior"));
        assert_eq!(app.sources.len(), 1);
    }

    #[test]
    fn question_draft_survives_asking() {
        let (mut app, _dir) = test_app();
        app.question_draft.buffer = "what did I save?".to_string();
        let request = app.submit_question();
        assert_eq!(
            request,
            NetRequest::Query {
                question: "what did I save?".to_string()
            }
        );
        assert_eq!(app.question_draft.buffer, "what did I save?");
    }

    #[test]
    fn empty_question_is_sent() {
        let (mut app, _dir) = test_app();
        assert_eq!(
            app.submit_question(),
            NetRequest::Query {
                question: String::new()
            }
        );
    }

    #[test]
    fn refresh_clamps_list_cursor() {
        let (mut app, _dir) = test_app();
        app.items = vec![
            item(3, ItemKind::Note, "a"),
            item(2, ItemKind::Note, "b"),
            item(1, ItemKind::Note, "c"),
        ];
        app.list_cursor = 2;

        app.apply_net_event(NetEvent::ItemsFetched(Ok(vec![item(3, ItemKind::Note, "a")])));
        assert_eq!(app.list_cursor, 0);
    }

    #[test]
    fn input_state_editing() {
        let mut input = InputState::default();
        for c in "milk".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.buffer, "milk");
        input.move_left();
        input.backspace();
        assert_eq!(input.buffer, "mik");
        input.move_home();
        input.delete();
        assert_eq!(input.buffer, "ik");
        input.move_end();
        assert_eq!(input.cursor, input.buffer.len());
    }

    #[test]
    fn input_state_handles_multibyte() {
        let mut input = InputState::default();
        input.insert_char('日');
        input.insert_char('本');
        assert_eq!(input.cursor, 6);
        input.backspace();
        assert_eq!(input.buffer, "日");
        assert_eq!(input.cursor, 3);
    }
}
