// src/state.rs
use std::sync::Arc;

use crate::services::provider::TextGenerator;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub provider: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(provider: Arc<dyn TextGenerator>) -> Self {
        Self { provider }
    }

    pub fn shared(provider: Arc<dyn TextGenerator>) -> SharedState {
        Arc::new(Self::new(provider))
    }
}
