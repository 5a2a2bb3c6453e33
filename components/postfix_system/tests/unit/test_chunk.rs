//! Tests for PostfixChunk

use core_types::Operator;
use postfix_system::{Instruction, PostfixChunk};

fn one_plus_two() -> PostfixChunk {
    let mut chunk = PostfixChunk::new();
    chunk.emit_number("1");
    chunk.emit_number("2");
    chunk.emit_operator(Operator::Add);
    chunk
}

#[test]
fn test_chunk_emit_order() {
    let chunk = one_plus_two();
    assert_eq!(chunk.len(), 3);
    assert_eq!(
        chunk.instructions,
        vec![
            Instruction::Number("1".to_string()),
            Instruction::Number("2".to_string()),
            Instruction::Operator(Operator::Add),
        ]
    );
}

#[test]
fn test_chunk_display_space_separated() {
    assert_eq!(one_plus_two().to_string(), "1 2 +");
    assert_eq!(PostfixChunk::new().to_string(), "");
}

#[test]
fn test_chunk_max_stack_depth_nested() {
    // 1 2 3 - -  is  1 - (2 - 3)
    let chunk: PostfixChunk = vec![
        Instruction::Number("1".to_string()),
        Instruction::Number("2".to_string()),
        Instruction::Number("3".to_string()),
        Instruction::Operator(Operator::Sub),
        Instruction::Operator(Operator::Sub),
    ]
    .into_iter()
    .collect();
    assert_eq!(chunk.max_stack_depth(), Some(3));
    assert_eq!(chunk.result_count(), Some(1));
}

#[test]
fn test_chunk_result_count_for_several_statements() {
    let mut chunk = one_plus_two();
    chunk.extend(one_plus_two());
    assert_eq!(chunk.result_count(), Some(2));
    assert_eq!(chunk.to_string(), "1 2 + 1 2 +");
}

#[test]
fn test_chunk_underflow_is_none() {
    let mut chunk = PostfixChunk::new();
    chunk.emit_operator(Operator::Mul);
    assert_eq!(chunk.max_stack_depth(), None);
}

#[test]
fn test_chunk_iterates_by_reference() {
    let chunk = one_plus_two();
    let operators = (&chunk).into_iter().filter(|i| i.is_operator()).count();
    assert_eq!(operators, 1);
    assert_eq!(chunk.iter().count(), 3);
}

#[test]
fn test_chunk_serializes_as_array() {
    let json = serde_json::to_string(&one_plus_two()).unwrap();
    assert_eq!(json, r#"[{"number":"1"},{"number":"2"},{"operator":"+"}]"#);
}
