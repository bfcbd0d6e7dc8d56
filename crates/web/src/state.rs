use std::sync::Arc;

use kinoteka_source::LibrarySource;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn LibrarySource>,
    pub library_limit: u32,
}
