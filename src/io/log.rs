use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Append-only log of client-side events, mainly failed request flows.
///
/// The TUI owns the terminal, so failures cannot go to stderr while it runs;
/// they are appended here and surfaced on the status row instead. A log that
/// cannot be written must never take the app down with it.
pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    pub fn new(path: PathBuf) -> Self {
        EventLog { path }
    }

    /// Append one timestamped entry. Write failures degrade to a stderr
    /// warning.
    pub fn append(&self, category: &str, message: &str) {
        let line = format!(
            "[{}] {}: {}\n",
            chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
            category,
            message
        );
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut f| f.write_all(line.as_bytes()));
        if let Err(e) = result {
            eprintln!("warning: could not write to event log: {}", e);
        }
    }
}
