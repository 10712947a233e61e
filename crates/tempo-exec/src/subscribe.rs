use tempo_model::Event;

/// Receives lifecycle events emitted by the runner.
///
/// Events are delivered synchronously on the caller's thread, so
/// implementations must be cheap and non-blocking.
pub trait Subscribe: Send + Sync {
    fn on_event(&self, event: &Event);
}
