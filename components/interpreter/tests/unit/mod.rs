//! Unit tests for interpreter components

use core_types::Operator;
use interpreter::{EvalError, Vm};
use parser::{compile, Grammar};
use postfix_system::{Instruction, PostfixChunk};

fn eval(source: &str) -> f64 {
    eval_with(source, Grammar::Precedence)
}

fn eval_with(source: &str, grammar: Grammar) -> f64 {
    let chunk = compile(source, grammar).unwrap();
    Vm::new().evaluate(&chunk).unwrap()
}

fn chunk_of(instructions: Vec<Instruction>) -> PostfixChunk {
    instructions.into_iter().collect()
}

fn num(text: &str) -> Instruction {
    Instruction::Number(text.to_string())
}

// ============================================================================
// VM Tests
// ============================================================================

#[test]
fn test_vm_single_expression() {
    assert_eq!(eval("1+2"), 3.0);
    assert_eq!(eval("7 * 6"), 42.0);
}

#[test]
fn test_vm_decimal_literals() {
    assert_eq!(eval("0.5 + 0.25"), 0.75);
    assert_eq!(eval("3. * 2"), 6.0);
}

#[test]
fn test_vm_precedence_grammar() {
    assert_eq!(eval("1-2-3"), -4.0);
    assert_eq!(eval("2*3+4"), 10.0);
    assert_eq!(eval("2+3*4"), 14.0);
    assert_eq!(eval("8/2/2"), 2.0);
}

#[test]
fn test_vm_right_recursive_grammar() {
    assert_eq!(eval_with("1-2-3", Grammar::RightRecursive), 2.0);
    assert_eq!(eval_with("2*3+4", Grammar::RightRecursive), 14.0);
    assert_eq!(eval_with("8/2/2", Grammar::RightRecursive), 8.0);
}

#[test]
fn test_vm_groupings() {
    assert_eq!(eval("(1 + 2) * 3"), 9.0);
    assert_eq!(eval("10 - (4 - 1)"), 7.0);
    assert_eq!(eval("((2 * 5)) - (6 / (1 + 2))"), 8.0);
}

#[test]
fn test_vm_division_by_zero_is_infinite() {
    assert_eq!(eval("1/0"), f64::INFINITY);
    assert!(eval("0/0").is_nan());
}

#[test]
fn test_vm_run_returns_each_statement() {
    let chunk = compile("1+2 (3*4 5-6) 2/4", Grammar::Precedence).unwrap();
    let values = Vm::new().run(&chunk).unwrap();
    assert_eq!(values, vec![3.0, 12.0, -1.0, 0.5]);
}

#[test]
fn test_vm_run_empty_chunk() {
    let mut vm = Vm::new();
    assert_eq!(vm.run(&PostfixChunk::new()), Ok(Vec::new()));
    assert_eq!(
        vm.evaluate(&PostfixChunk::new()),
        Err(EvalError::UnbalancedStack { remaining: 0 })
    );
}

#[test]
fn test_vm_evaluate_rejects_several_results() {
    let chunk = compile("1+1 2+2", Grammar::Precedence).unwrap();
    assert_eq!(
        Vm::new().evaluate(&chunk),
        Err(EvalError::UnbalancedStack { remaining: 2 })
    );
}

#[test]
fn test_vm_stack_underflow() {
    let chunk = chunk_of(vec![num("1"), Instruction::Operator(Operator::Sub)]);
    let err = Vm::new().run(&chunk).unwrap_err();
    assert!(matches!(
        err,
        EvalError::StackUnderflow {
            index: 1,
            operator: Operator::Sub
        }
    ));
}

#[test]
fn test_vm_invalid_number() {
    let chunk = chunk_of(vec![num("1.2.3"), num("1"), Instruction::Operator(Operator::Add)]);
    let err = Vm::new().run(&chunk).unwrap_err();
    assert_eq!(
        err,
        EvalError::InvalidNumber {
            index: 0,
            literal: "1.2.3".to_string()
        }
    );
}

#[test]
fn test_vm_reusable_after_error() {
    let mut vm = Vm::new();
    let bad = chunk_of(vec![Instruction::Operator(Operator::Add)]);
    assert!(vm.run(&bad).is_err());

    let good = compile("4*5", Grammar::Precedence).unwrap();
    assert_eq!(vm.evaluate(&good), Ok(20.0));
}
