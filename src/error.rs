//! Error types shared by the expander, the interpreter and the render shell.

use thiserror::Error;

/// Which ceiling a [`FractalError::ResourceExhaustion`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    /// Length of the expanded instruction string, in symbols.
    InstructionLength,
    /// Depth of the turtle's push/pop stack.
    StackDepth,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InstructionLength => f.write_str("instruction length"),
            Self::StackDepth => f.write_str("stack depth"),
        }
    }
}

#[derive(Debug, Error)]
pub enum FractalError {
    /// A rule is declared for a symbol that is not part of the grammar's alphabet.
    #[error("grammar declares a rule for undeclared symbol {symbol:?}")]
    Configuration { symbol: char },

    /// `]` was interpreted while the state stack was empty.
    #[error("unbalanced ']' at instruction {index}: state stack is empty")]
    State { index: usize },

    /// A configured ceiling would be exceeded.
    #[error("{resource} limit exceeded: requested {requested}, limit {limit}")]
    ResourceExhaustion {
        resource: Resource,
        requested: usize,
        limit: usize,
    },

    #[error("invalid configuration file: {0}")]
    Config(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FractalError>;
