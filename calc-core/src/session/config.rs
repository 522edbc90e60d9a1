pub use crate::parser::prelude::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_OPERATORS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Maximum number of parentheses open at once in one line.
    pub max_depth: usize,
    /// Maximum number of binary operators in one line.
    pub max_operators: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_operators: DEFAULT_MAX_OPERATORS,
        }
    }
}

impl SessionConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_operators(mut self, max_operators: usize) -> Self {
        self.max_operators = max_operators;
        self
    }
}
