use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::questions::chunker::ChunkerConfig;
use crate::questions::scorer::SelectorConfig;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is immutable per request — no cross-request shared mutable state.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    /// Chunk-size tiers. Explicit so tests can exercise the pipeline with
    /// non-default thresholds.
    pub chunker: ChunkerConfig,
    /// Keyword-selection thresholds (top-K, minimum token length).
    pub selector: SelectorConfig,
}
