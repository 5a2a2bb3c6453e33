//! Unit tests for SyntaxError and ErrorKind

use core_types::{ErrorKind, SourcePosition, SyntaxError};

#[cfg(test)]
mod error_kind_tests {
    use super::*;

    #[test]
    fn test_error_kind_variants_are_distinct() {
        assert_ne!(ErrorKind::LexicalAmbiguity, ErrorKind::UnexpectedToken);
        assert_ne!(ErrorKind::UnexpectedToken, ErrorKind::UnexpectedEnding);
        assert_ne!(ErrorKind::LexicalAmbiguity, ErrorKind::UnexpectedEnding);
    }

    #[test]
    fn test_nesting_too_deep_display() {
        assert_eq!(ErrorKind::NestingTooDeep.to_string(), "nesting too deep");
        assert_ne!(ErrorKind::NestingTooDeep, ErrorKind::UnexpectedEnding);
    }

    #[test]
    fn test_error_kind_is_copy() {
        let kind = ErrorKind::UnexpectedToken;
        let copied = kind;
        assert_eq!(kind, copied);
    }
}

#[cfg(test)]
mod syntax_error_tests {
    use super::*;

    fn error_at(kind: ErrorKind, source: &str, offset: usize) -> SyntaxError {
        SyntaxError {
            kind,
            message: "test".to_string(),
            offset,
            position: Some(SourcePosition::from_offset(source, offset)),
            excerpt: None,
        }
    }

    #[test]
    fn test_syntax_error_creation() {
        let error = error_at(ErrorKind::UnexpectedToken, "+1", 0);
        assert!(matches!(error.kind, ErrorKind::UnexpectedToken));
        assert_eq!(error.offset, 0);
        assert_eq!(error.position.map(|p| p.column), Some(1));
    }

    #[test]
    fn test_syntax_error_display_without_position() {
        let error = SyntaxError {
            kind: ErrorKind::LexicalAmbiguity,
            message: "numeric literal `1.2.3` has more than one decimal point".to_string(),
            offset: 4,
            position: None,
            excerpt: None,
        };
        assert_eq!(
            error.to_string(),
            "lexical ambiguity: numeric literal `1.2.3` has more than one decimal point at offset 4"
        );
    }

    #[test]
    fn test_syntax_error_is_std_error() {
        let error = error_at(ErrorKind::UnexpectedEnding, "1+", 2);
        let boxed: Box<dyn std::error::Error> = Box::new(error);
        assert!(boxed.to_string().starts_with("unexpected ending"));
    }

    #[test]
    fn test_only_unexpected_ending_is_incomplete() {
        assert!(error_at(ErrorKind::UnexpectedEnding, "1+", 2).is_incomplete());
        assert!(!error_at(ErrorKind::UnexpectedToken, "+1", 0).is_incomplete());
        assert!(!error_at(ErrorKind::LexicalAmbiguity, "1..", 0).is_incomplete());
    }

    #[test]
    fn test_report_appends_excerpt() {
        let mut error = error_at(ErrorKind::UnexpectedToken, "+1", 0);
        error.excerpt = Some("+1\n^".to_string());
        assert_eq!(error.report(), "unexpected token: test at line 1, column 1\n+1\n^");
    }

    #[test]
    fn test_report_without_excerpt_is_display() {
        let error = error_at(ErrorKind::UnexpectedToken, "+1", 0);
        assert_eq!(error.report(), error.to_string());
    }
}
