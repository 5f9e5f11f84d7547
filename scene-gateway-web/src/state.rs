//! Shared application state

use std::sync::Arc;

use scene_gateway_core::ImageryService;
use scene_gateway_provider::ImageryProvider;

/// Read-only state shared by all workers.
pub struct AppState {
    pub imagery: ImageryService,
}

impl AppState {
    pub fn new(provider: Arc<dyn ImageryProvider>) -> Self {
        Self {
            imagery: ImageryService::new(provider),
        }
    }
}
