//! Unit tests for SourcePosition and source excerpts

use core_types::{excerpt, SourcePosition};

#[cfg(test)]
mod source_position_tests {
    use super::*;

    #[test]
    fn test_source_position_creation() {
        let pos = SourcePosition {
            line: 10,
            column: 5,
            offset: 150,
        };

        assert_eq!(pos.line, 10);
        assert_eq!(pos.column, 5);
        assert_eq!(pos.offset, 150);
    }

    #[test]
    fn test_from_offset_start_of_source() {
        let pos = SourcePosition::from_offset("1+2", 0);
        assert_eq!(pos, SourcePosition { line: 1, column: 1, offset: 0 });
    }

    #[test]
    fn test_from_offset_counts_newlines() {
        let source = "1 +\n\n  2";
        let pos = SourcePosition::from_offset(source, 7);
        assert_eq!(pos.line, 3);
        assert_eq!(pos.column, 3);
    }

    #[test]
    fn test_from_offset_counts_characters_not_bytes() {
        let source = "é+1";
        let pos = SourcePosition::from_offset(source, 2);
        assert_eq!(pos.column, 3);
    }

    #[test]
    fn test_source_position_display() {
        let pos = SourcePosition {
            line: 2,
            column: 7,
            offset: 12,
        };
        assert_eq!(pos.to_string(), "line 2, column 7");
    }

    #[test]
    fn test_source_position_serializes_all_fields() {
        let pos = SourcePosition::from_offset("1+2", 2);
        let json = serde_json::to_string(&pos).unwrap();
        assert_eq!(json, r#"{"line":1,"column":3,"offset":2}"#);
    }
}

#[cfg(test)]
mod excerpt_tests {
    use super::*;

    #[test]
    fn test_excerpt_marks_token() {
        assert_eq!(excerpt("(1 + 2", 0, 1), "(1 + 2\n^");
    }

    #[test]
    fn test_excerpt_marks_multi_character_token() {
        assert_eq!(excerpt("1 + 2.3.4", 4, 5), "1 + 2.3.4\n    ^^^^^");
    }

    #[test]
    fn test_excerpt_flattens_line_breaks() {
        assert_eq!(excerpt("1 +\n$", 4, 1), "1 + $\n    ^");
    }

    #[test]
    fn test_excerpt_offset_clamped_to_source() {
        assert_eq!(excerpt("1", 40, 0), "1\n ^");
    }
}
