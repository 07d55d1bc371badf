use std::sync::Arc;

use crate::application::services::AnalysisPipeline;
use crate::presentation::config::Settings;

/// Process-wide handles shared by every request.
pub struct AppState {
    pub pipeline: Arc<AnalysisPipeline>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(pipeline: Arc<AnalysisPipeline>, settings: Settings) -> Self {
        Self {
            pipeline,
            settings: Arc::new(settings),
        }
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
            settings: Arc::clone(&self.settings),
        }
    }
}
