//! Error types for the CLI

use core_types::SyntaxError;
use interpreter::EvalError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Tokenizing or parsing failed
    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    /// The stack machine rejected the compiled program
    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),

    /// File I/O error
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON dump could not be rendered
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// REPL error
    #[error("REPL error: {0}")]
    Repl(String),
}

impl CliError {
    /// Whether more input could turn this failure into a valid program
    pub fn is_incomplete(&self) -> bool {
        matches!(self, CliError::Syntax(err) if err.is_incomplete())
    }

    /// Full diagnostic text, including the source excerpt when there is one
    pub fn report(&self) -> String {
        match self {
            CliError::Syntax(err) => format!("Syntax error: {}", err.report()),
            other => other.to_string(),
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
