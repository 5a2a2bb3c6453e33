//! Full Pipeline Integration Tests
//!
//! Tests the complete flow: Source -> Lexer -> Parser -> AST -> Transformer -> Postfix -> Vm -> Result

use core_types::ErrorKind;
use interpreter::Vm;
use parser::{compile, Grammar};

/// Helper function to evaluate source text to a single value
fn execute(source: &str, grammar: Grammar) -> Result<f64, String> {
    let chunk = compile(source, grammar).map_err(|e| format!("Parse error: {}", e))?;
    Vm::new()
        .evaluate(&chunk)
        .map_err(|e| format!("Execution error: {}", e))
}

fn precedence(source: &str) -> f64 {
    execute(source, Grammar::Precedence).expect("Execution failed")
}

fn right(source: &str) -> f64 {
    execute(source, Grammar::RightRecursive).expect("Execution failed")
}

/// Test: Addition expression
#[test]
fn test_full_pipeline_addition() {
    assert_eq!(precedence("1 + 2"), 3.0);
    assert_eq!(right("1 + 2"), 3.0);
}

/// Test: Chained addition is the same under both grammars
#[test]
fn test_full_pipeline_chained_addition() {
    assert_eq!(precedence("1 + 2 + 3"), 6.0);
    assert_eq!(right("1 + 2 + 3"), 6.0);
}

/// Test: Subtraction chain separates the grammars
#[test]
fn test_full_pipeline_subtraction_chain() {
    assert_eq!(precedence("1 - 2 - 3"), -4.0);
    assert_eq!(right("1 - 2 - 3"), 2.0);
}

/// Test: Mixed precedence separates the grammars
#[test]
fn test_full_pipeline_mixed_precedence() {
    assert_eq!(precedence("2 * 3 + 4"), 10.0);
    assert_eq!(right("2 * 3 + 4"), 14.0);
}

/// Test: Grouping on the right
#[test]
fn test_full_pipeline_grouping() {
    assert_eq!(precedence("10 - (4 - 1)"), 7.0);
    assert_eq!(right("10 - (4 - 1)"), 7.0);
    assert_eq!(precedence("(10 + 20) * 2 - 18"), 42.0);
}

/// Test: Decimal arithmetic
#[test]
fn test_full_pipeline_decimals() {
    assert_eq!(precedence("0.5 * 4"), 2.0);
    assert_eq!(precedence("1.5 + 1.5 / 3"), 2.0);
}

/// Test: Division by zero follows IEEE-754
#[test]
fn test_full_pipeline_division_by_zero() {
    assert_eq!(precedence("1 / 0"), f64::INFINITY);
    assert_eq!(precedence("0 - 1 / 0"), f64::NEG_INFINITY);
}

/// Test: Whitespace and line breaks are insignificant
#[test]
fn test_full_pipeline_whitespace() {
    assert_eq!(precedence("\t1\n+\r\n2  "), 3.0);
}

/// Test: Syntax errors stop the pipeline before evaluation
#[test]
fn test_full_pipeline_syntax_errors() {
    let cases = [
        ("1 +", ErrorKind::UnexpectedEnding),
        ("+ 1", ErrorKind::UnexpectedToken),
        ("(1 + 2", ErrorKind::UnexpectedEnding),
        ("1.2.3 + 1", ErrorKind::LexicalAmbiguity),
        ("1 + a", ErrorKind::UnexpectedToken),
    ];
    for (source, kind) in cases {
        for grammar in [Grammar::Precedence, Grammar::RightRecursive] {
            let err = compile(source, grammar).unwrap_err();
            assert_eq!(err.kind, kind, "source {:?} under {:?}", source, grammar);
        }
    }
}

/// Test: Several statements need `run`, not `evaluate`
#[test]
fn test_full_pipeline_multiple_statements() {
    let err = execute("1 + 1 2 + 2", Grammar::Precedence).unwrap_err();
    assert!(err.starts_with("Execution error"));

    let chunk = compile("1 + 1 2 + 2", Grammar::Precedence).unwrap();
    assert_eq!(Vm::new().run(&chunk).unwrap(), vec![2.0, 4.0]);
}

/// Test: Independent pipelines run on separate threads
#[test]
fn test_full_pipeline_parallel() {
    let handles: Vec<_> = (1..=8)
        .map(|n| {
            std::thread::spawn(move || {
                let source = format!("{} * ({} + 1)", n, n);
                let chunk = compile(&source, Grammar::Precedence).unwrap();
                Vm::new().evaluate(&chunk).unwrap()
            })
        })
        .collect();

    let results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let expected: Vec<f64> = (1..=8).map(|n| (n * (n + 1)) as f64).collect();
    assert_eq!(results, expected);
}

/// Test: Long addition chains evaluate, and runaway ones fail cleanly
#[test]
fn test_full_pipeline_long_chain() {
    let source = vec!["1"; 200].join(" + ");
    assert_eq!(precedence(&source), 200.0);

    let source = vec!["1"; 1000].join(" + ");
    for grammar in [Grammar::Precedence, Grammar::RightRecursive] {
        let err = compile(&source, grammar).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NestingTooDeep);
    }
}
