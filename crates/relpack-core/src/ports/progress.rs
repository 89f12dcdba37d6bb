use async_trait::async_trait;

/// Puerto de progreso de los pipelines de exportación e importación.
///
/// Los porcentajes son monótonos dentro de un pipeline. Es informativo: el
/// pipeline nunca decide nada en función de lo que haga el reporter.
#[async_trait]
pub trait ProgressReporter: Send + Sync + Clone {
  async fn start(&self, operation: &str);
  async fn on_progress(&self, percent: u8, message: &str);
  async fn on_error(&self, error: &str);
  async fn finish(&self);
}

/// Reporter que descarta todos los eventos.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

#[async_trait]
impl ProgressReporter for NoopReporter {
  async fn start(&self, _operation: &str) {}
  async fn on_progress(&self, _percent: u8, _message: &str) {}
  async fn on_error(&self, _error: &str) {}
  async fn finish(&self) {}
}
