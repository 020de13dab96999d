use serde::Deserialize;

/// One supporting fragment returned alongside an answer. Order within the
/// response is the backend's relevance order and is preserved as-is.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceSnippet {
    pub text: String,
    /// The stored item the snippet came from, when the backend reports it.
    #[serde(default)]
    pub item_id: Option<i64>,
}

/// The response to a question. Ephemeral: replaced wholesale by the next
/// successful query, never merged.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryResult {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<SourceSnippet>,
}
