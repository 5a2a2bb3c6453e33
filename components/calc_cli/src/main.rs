//! Arithmetic Calculator CLI
//!
//! Entry point for `calc`. Parses CLI arguments and delegates to the
//! Runtime for execution.

use clap::Parser as ClapParser;
use calc_cli::{Cli, CliError, Runtime};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut runtime = Runtime::new(cli.grammar.into())
        .with_print_tokens(cli.print_tokens)
        .with_print_ast(cli.print_ast)
        .with_print_postfix(cli.print_postfix)
        .with_json(cli.json);

    let outcome = if let Some(file) = &cli.file {
        match runtime.execute_file(file) {
            Err(CliError::Io(e)) => {
                eprintln!("Error: Could not read file '{}': {}", file, e);
                std::process::exit(1);
            }
            other => other,
        }
    } else if let Some(source) = &cli.eval {
        runtime.execute_string(source)
    } else if cli.repl {
        runtime.repl()?;
        return Ok(());
    } else {
        println!("calc {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Usage:");
        println!("  calc --eval <EXPR>     Evaluate an inline expression");
        println!("  calc --file <FILE>     Evaluate the expressions in a file");
        println!("  calc --repl            Start interactive REPL");
        println!();
        println!("Run 'calc --help' for more options.");
        return Ok(());
    };

    match outcome.and_then(|values| runtime.format_results(&values)) {
        Ok(text) => {
            if !text.is_empty() {
                println!("{}", text);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e.report());
            std::process::exit(1);
        }
    }
}
