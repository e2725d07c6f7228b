//! Compiler configuration.

/// Default maximum number of nested forms compiled at once. Sized to fit a
/// 2 MB thread stack in an unoptimized build.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// When to emit the symbol interning table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SymbolTablePolicy {
    /// Only when a quoted symbol occurs in the program.
    #[default]
    Auto,
    /// Always, even when nothing uses it.
    Always,
}

/// Configuration for the compiler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Indentation added per function nesting level.
    pub indent: String,
    /// Symbol table emission policy.
    pub symbol_table: SymbolTablePolicy,
    /// Nested form depth at which compilation fails with a limit error.
    pub max_depth: usize,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            symbol_table: SymbolTablePolicy::Auto,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CompilerConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the indentation unit.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Builder method to set the symbol table policy.
    #[must_use]
    pub fn with_symbol_table(mut self, policy: SymbolTablePolicy) -> Self {
        self.symbol_table = policy;
        self
    }

    /// Builder method to set the maximum compilation depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
