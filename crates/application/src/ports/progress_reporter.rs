/// Receives the human-readable narration of a resolution run.
pub trait ProgressReporter: Send + Sync {
    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    fn error(&self, message: &str);
}
