// lazy_log.rs - Debug logging that only builds its message when enabled

/// Gate in front of `tracing::debug!` that takes the message as a closure.
#[derive(Clone, Copy, Debug)]
pub struct LazyLogger {
    pub enabled: bool,
}

impl LazyLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Calls `message` and logs the result only when enabled.
    /// Returns whether anything was emitted.
    pub fn debug(&self, message: impl FnOnce() -> String) -> bool {
        if !self.enabled {
            return false;
        }
        let message = message();
        tracing::debug!("{message}");
        true
    }
}
