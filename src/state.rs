//! Shared application state.

use std::sync::Arc;

use crate::services::TemplateService;

#[derive(Clone)]
pub struct AppState {
    pub templates: Arc<TemplateService>,
}

impl AppState {
    pub fn new(templates: TemplateService) -> Self {
        Self {
            templates: Arc::new(templates),
        }
    }
}
