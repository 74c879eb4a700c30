//! Logging capability injected into the handler.

/// Sink for the handler's informational messages.
///
/// Passed to `GreetingHandler::new` so the host decides where log lines go.
/// Implementations must be shareable across concurrent invocations.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
}

/// Forwards messages to the `tracing` subscriber installed by the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn info(&self, message: &str) {
        (**self).info(message)
    }
}

impl<L: Logger + ?Sized> Logger for std::sync::Arc<L> {
    fn info(&self, message: &str) {
        (**self).info(message)
    }
}
