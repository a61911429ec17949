//! Shared application state for handlers.

use std::sync::Arc;

use crate::bootstrap::AxumContext;

/// Shared state passed to every handler.
pub type AppState = Arc<AxumContext>;
