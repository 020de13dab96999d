use std::sync::mpsc;

use crate::model::answer::QueryResult;
use crate::model::item::{Item, ItemKind};

use super::client::{ApiClient, ApiError};

/// A request one of the three flows wants performed.
#[derive(Debug, Clone, PartialEq)]
pub enum NetRequest {
    FetchItems,
    Ingest { kind: ItemKind, content: String },
    Query { question: String },
}

/// Completion of a previously dispatched request.
#[derive(Debug)]
pub enum NetEvent {
    ItemsFetched(Result<Vec<Item>, ApiError>),
    IngestFinished(Result<(), ApiError>),
    AnswerArrived(Result<QueryResult, ApiError>),
}

/// Runs the HTTP flows off the UI thread.
///
/// Each dispatched request becomes one task on a background tokio runtime
/// and produces exactly one `NetEvent` on the channel. `poll()` is drained
/// by the TUI event loop every tick, so events apply in completion order,
/// which is the ordering guarantee the flows rely on (last response to
/// complete wins). Nothing here cancels anything: a request that never
/// resolves simply never sends its event.
pub struct Worker {
    runtime: tokio::runtime::Runtime,
    client: ApiClient,
    tx: mpsc::Sender<NetEvent>,
    rx: mpsc::Receiver<NetEvent>,
}

impl Worker {
    pub fn start(client: ApiClient) -> Result<Self, std::io::Error> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::channel();
        Ok(Worker {
            runtime,
            client,
            tx,
            rx,
        })
    }

    /// Fire off a request. Returns immediately; the result arrives via
    /// `poll()`.
    pub fn dispatch(&self, request: NetRequest) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let event = match request {
                NetRequest::FetchItems => NetEvent::ItemsFetched(client.fetch_items().await),
                NetRequest::Ingest { kind, content } => {
                    NetEvent::IngestFinished(client.ingest(kind, &content).await)
                }
                NetRequest::Query { question } => {
                    NetEvent::AnswerArrived(client.query(&question).await)
                }
            };
            let _ = tx.send(event);
        });
    }

    /// Non-blocking poll for completed requests, in completion order.
    pub fn poll(&self) -> Vec<NetEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }
}
