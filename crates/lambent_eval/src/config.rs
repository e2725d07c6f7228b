//! Evaluator configuration.

/// Default maximum evaluation depth. Sized to fit a 2 MB thread stack in an
/// unoptimized build.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration for the evaluator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Number of nested forms being evaluated at which evaluation fails
    /// with a limit error.
    pub max_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EvalConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the maximum evaluation depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
