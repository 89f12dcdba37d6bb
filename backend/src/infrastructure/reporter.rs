use async_trait::async_trait;
use relpack_core::ports::ProgressReporter;
use tracing::{error, info};

/// A `ProgressReporter` that turns pipeline progress into tracing events.
///
/// Whatever subscriber the binary installs decides where they end up.
#[derive(Clone, Debug, Default)]
pub struct TracingReporter;

impl TracingReporter {
  pub fn new() -> Self {
    Self
  }
}

#[async_trait]
impl ProgressReporter for TracingReporter {
  async fn start(&self, operation: &str) {
    info!(target: "relpack::progress", operation, "started");
  }

  async fn on_progress(&self, percent: u8, message: &str) {
    info!(target: "relpack::progress", percent, "{message}");
  }

  async fn on_error(&self, error: &str) {
    error!(target: "relpack::progress", error, "failed");
  }

  async fn finish(&self) {
    info!(target: "relpack::progress", "finished");
  }
}
