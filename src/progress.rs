/// Lightweight progress reporting for a lookup (search → detail).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once with the trimmed query.
    fn begin(&mut self, _query: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when the search step produced `count` candidates.
    fn candidates(&mut self, _count: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
