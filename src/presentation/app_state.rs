// Application state for HTTP handlers
use crate::application::builder_service::BuilderService;
use tokio::sync::Mutex;

pub struct AppState {
    pub builder: Mutex<BuilderService>,
}

impl AppState {
    pub fn new(builder: BuilderService) -> Self {
        Self {
            builder: Mutex::new(builder),
        }
    }
}
