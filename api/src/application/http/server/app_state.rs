use std::sync::Arc;

use tasktrack_core::application::TaskTrackService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: TaskTrackService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: TaskTrackService) -> Self {
        Self { args, service }
    }
}
