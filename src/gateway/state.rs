use crate::backend::BackendClient;

/// Gateway shared state.
#[derive(Clone)]
pub struct AppState {
    /// Client for the private sheet-data API
    pub backend: BackendClient,
}

impl AppState {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}
