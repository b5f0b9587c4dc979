//! Application state for the HTTP server.

use crate::db::repository::PlayerRepository;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for storage operations
    pub repository: Arc<dyn PlayerRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn PlayerRepository>) -> Self {
        Self { repository }
    }
}
