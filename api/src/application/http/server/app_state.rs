use std::sync::Arc;

use ferrisfit_core::application::FerrisfitService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FerrisfitService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FerrisfitService) -> Self {
        Self { args, service }
    }
}
