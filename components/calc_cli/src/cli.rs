//! Command-line argument definitions

use clap::{Parser, ValueEnum};
use parser::Grammar;

/// Compile and evaluate arithmetic expressions
#[derive(Debug, Parser)]
#[command(name = "calc", version)]
pub struct Cli {
    /// Evaluate an inline expression
    #[arg(short, long, value_name = "EXPR")]
    pub eval: Option<String>,

    /// Evaluate the expressions in a file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<String>,

    /// Start the interactive REPL
    #[arg(short, long)]
    pub repl: bool,

    /// Operator semantics used by the parser
    #[arg(long, value_enum, default_value_t = GrammarArg::Precedence)]
    pub grammar: GrammarArg,

    /// Print the token stream before parsing
    #[arg(long)]
    pub print_tokens: bool,

    /// Print the AST before lowering
    #[arg(long)]
    pub print_ast: bool,

    /// Print the postfix instructions before evaluation
    #[arg(long)]
    pub print_postfix: bool,

    /// Render dumps and results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Grammar names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GrammarArg {
    /// Standard precedence, left-associative
    Precedence,
    /// Precedence-blind, right-associative
    #[value(name = "right", alias = "right-recursive")]
    Right,
}

impl From<GrammarArg> for Grammar {
    fn from(arg: GrammarArg) -> Self {
        match arg {
            GrammarArg::Precedence => Grammar::Precedence,
            GrammarArg::Right => Grammar::RightRecursive,
        }
    }
}

impl From<Grammar> for GrammarArg {
    fn from(grammar: Grammar) -> Self {
        match grammar {
            Grammar::Precedence => GrammarArg::Precedence,
            Grammar::RightRecursive => GrammarArg::Right,
        }
    }
}
