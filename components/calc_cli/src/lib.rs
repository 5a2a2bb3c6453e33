//! Arithmetic Calculator CLI Library
//!
//! Provides the Runtime struct and supporting modules for the `calc` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod repl;
pub mod runtime;

pub use cli::{Cli, GrammarArg};
pub use error::{CliError, CliResult};
pub use runtime::{format_value, Runtime, Trace};
