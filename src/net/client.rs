use serde::Serialize;

use crate::model::answer::QueryResult;
use crate::model::item::{Item, ItemKind};

/// Failure of one request flow.
///
/// `Transport` and `Status` cover connection problems and non-success HTTP
/// responses; `Decode` covers a response body that does not match the wire
/// contract. The distinction only matters for the log; either way the flow
/// is over and the displayed state stays where it was.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Log category for this failure.
    pub fn category(&self) -> &'static str {
        match self {
            ApiError::Transport(_) | ApiError::Status(_) => "transport",
            ApiError::Decode(_) => "parse",
        }
    }
}

#[derive(Debug, Serialize)]
struct IngestRequest<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    question: &'a str,
}

/// HTTP client for the capture/retrieval backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Fetch the full item listing (`GET /items`), newest first.
    pub async fn fetch_items(&self) -> Result<Vec<Item>, ApiError> {
        let response = self.http.get(self.endpoint("items")).send().await?;
        let response = check_status(response)?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Persist one item (`POST /ingest`). Only HTTP success is consumed from
    /// the acknowledgement.
    pub async fn ingest(&self, kind: ItemKind, content: &str) -> Result<(), ApiError> {
        let body = IngestRequest {
            kind: kind.as_wire(),
            content,
        };
        let response = self
            .http
            .post(self.endpoint("ingest"))
            .json(&body)
            .send()
            .await?;
        check_status(response)?;
        Ok(())
    }

    /// Ask a question (`POST /query`).
    pub async fn query(&self, question: &str) -> Result<QueryResult, ApiError> {
        let response = self
            .http
            .post(self.endpoint("query"))
            .json(&QueryRequest { question })
            .send()
            .await?;
        let response = check_status(response)?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}
