//! REPL (Read-Eval-Print Loop) implementation

use clap::ValueEnum;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::cli::GrammarArg;
use crate::error::{CliError, CliResult};
use crate::runtime::Runtime;

/// Run the interactive REPL
///
/// Input is buffered across lines while parentheses are unbalanced or the
/// parser reports that the input ended early. A blank line submits whatever
/// is buffered.
pub fn run_repl(runtime: &mut Runtime) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Repl(format!("Failed to initialize editor: {}", e)))?;

    println!("calc {}", env!("CARGO_PKG_VERSION"));
    println!("Type an expression, .help for commands, or .exit to quit.");
    println!();

    let mut line_buffer = String::new();
    let mut in_multiline = false;

    loop {
        let prompt = if in_multiline { "... " } else { "> " };

        match editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if !in_multiline {
                    if trimmed.is_empty() {
                        continue;
                    }
                    if trimmed == ".exit" {
                        println!("Goodbye!");
                        break;
                    }
                    if trimmed.starts_with('.') {
                        println!("{}", handle_repl_command(trimmed, runtime));
                        continue;
                    }
                }

                let submit_anyway = in_multiline && trimmed.is_empty();
                if in_multiline {
                    line_buffer.push('\n');
                }
                line_buffer.push_str(&line);

                if !submit_anyway && !is_input_complete(&line_buffer) {
                    in_multiline = true;
                    continue;
                }

                match runtime.execute_string(&line_buffer) {
                    Ok(values) => match runtime.format_results(&values) {
                        Ok(text) if !text.is_empty() => println!("{}", text),
                        Ok(_) => {}
                        Err(e) => eprintln!("{}", e.report()),
                    },
                    Err(e) if e.is_incomplete() && !submit_anyway => {
                        in_multiline = true;
                        continue;
                    }
                    Err(e) => eprintln!("{}", e.report()),
                }

                let _ = editor.add_history_entry(line_buffer.trim());
                line_buffer.clear();
                in_multiline = false;
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C
                if in_multiline {
                    println!("^C");
                    line_buffer.clear();
                    in_multiline = false;
                } else {
                    println!("Press Ctrl-D or type .exit to quit");
                }
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                return Err(CliError::Repl(format!("Readline error: {}", err)));
            }
        }
    }

    Ok(())
}

/// Handle a dot command and return the text to show
fn handle_repl_command(command: &str, runtime: &mut Runtime) -> String {
    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    match (name, arg) {
        (".help", _) => [
            "REPL Commands:",
            "  .help              - Show this help message",
            "  .grammar           - Show the active grammar",
            "  .grammar <name>    - Switch grammar (precedence, right)",
            "  .exit              - Exit the REPL",
        ]
        .join("\n"),
        (".grammar", None) => format!("Grammar: {}", grammar_name(runtime)),
        (".grammar", Some(value)) => match GrammarArg::from_str(value, true) {
            Ok(arg) => {
                runtime.set_grammar(arg.into());
                format!("Grammar: {}", grammar_name(runtime))
            }
            Err(_) => format!("Unknown grammar: {} (expected precedence or right)", value),
        },
        _ => format!(
            "Unknown command: {}\nType .help for available commands",
            command
        ),
    }
}

fn grammar_name(runtime: &Runtime) -> String {
    GrammarArg::from(runtime.grammar())
        .to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_default()
}

/// Check if the input appears to be complete
///
/// Only parenthesis balance is considered; an excess of `)` counts as
/// complete so the parser can report it.
fn is_input_complete(input: &str) -> bool {
    let mut paren_count: i64 = 0;

    for c in input.chars() {
        match c {
            '(' => paren_count += 1,
            ')' => paren_count -= 1,
            _ => {}
        }
    }

    paren_count <= 0
}
