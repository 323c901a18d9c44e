use digsip_application::ports::ProgressReporter;
use tracing::{error, info, warn};

/// Sends resolution narration to the installed `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for TracingReporter {
    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn warn(&self, message: &str) {
        warn!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }
}
