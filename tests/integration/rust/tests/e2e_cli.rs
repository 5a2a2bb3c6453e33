//! End-to-End CLI Integration Tests
//!
//! Tests the whole calculator through the calc_cli Runtime API.
//! This is the highest level integration test - source text to final result.

use calc_cli::{format_value, CliError, Runtime};
use parser::Grammar;

/// Test: Addition
#[test]
fn test_e2e_addition() {
    let mut runtime = Runtime::new(Grammar::Precedence);
    let result = runtime.execute_string("1 + 2").expect("Execution failed");
    assert_eq!(result, vec![3.0]);
}

/// Test: Complex arithmetic
#[test]
fn test_e2e_complex_arithmetic() {
    let mut runtime = Runtime::new(Grammar::Precedence);
    let result = runtime
        .execute_string("(10 + 20) * 2 - 18")
        .expect("Execution failed");
    assert_eq!(result, vec![42.0]);
}

/// Test: Runtime is reusable across inputs and grammars
#[test]
fn test_e2e_runtime_reuse() {
    let mut runtime = Runtime::new(Grammar::Precedence);
    assert_eq!(runtime.execute_string("8 / 4 / 2").unwrap(), vec![1.0]);

    assert!(runtime.execute_string("8 / ").is_err());

    runtime.set_grammar(Grammar::RightRecursive);
    assert_eq!(runtime.execute_string("8 / 4 / 2").unwrap(), vec![4.0]);
}

/// Test: Results render like the binary prints them
#[test]
fn test_e2e_result_rendering() {
    let mut runtime = Runtime::new(Grammar::Precedence);
    let values = runtime.execute_string("1 / 4 (2 * 3 1 / 0)").unwrap();
    assert_eq!(runtime.format_results(&values).unwrap(), "0.25\n6\nInfinity");
    assert_eq!(format_value(values[0]), "0.25");
}

/// Test: Syntax errors carry a caret excerpt
#[test]
fn test_e2e_syntax_error_excerpt() {
    let mut runtime = Runtime::new(Grammar::Precedence);
    let err = runtime.execute_string("12 + 3 ? 4").unwrap_err();

    assert!(matches!(err, CliError::Syntax(_)));
    let report = err.report();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "12 + 3 ? 4");
    assert_eq!(lines[2], "       ^");
}

/// Test: Stage dumps line up with the trace
#[test]
fn test_e2e_dumps() {
    let mut runtime = Runtime::new(Grammar::RightRecursive)
        .with_print_ast(true)
        .with_print_postfix(true);
    let trace = runtime.trace("1 - 2 - 3").unwrap();

    let dumps = runtime.dumps(&trace).unwrap();
    assert_eq!(dumps, vec!["AST: (1 - (2 - 3))", "Postfix: 1 2 3 - -"]);
    assert_eq!(trace.values, vec![2.0]);
}
