//! Application state for the API server.

use std::sync::Arc;

use tabletalk::{ChatProvider, SummaryOptions};

/// Shared application state.
///
/// Everything here is fixed at startup; request handlers only read it,
/// so there are no locks to take.
#[derive(Clone)]
pub struct AppState {
    /// Provider used to answer questions.
    pub provider: Arc<dyn ChatProvider>,
    /// Summarization settings applied to uploaded datasets.
    pub options: SummaryOptions,
}

impl AppState {
    /// Create new application state.
    pub fn new(provider: Arc<dyn ChatProvider>, options: SummaryOptions) -> Self {
        Self { provider, options }
    }
}
