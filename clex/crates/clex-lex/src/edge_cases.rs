//! Edge case tests for clex-lex

#[cfg(test)]
mod tests {
    use crate::{Input, LexError, Token, TokenKind, Tokenizer};

    fn lex_all(source: impl Into<Vec<u8>>) -> Vec<Token> {
        let mut tokens = Tokenizer::new().tokenize(Input::new(source)).unwrap();
        let end = tokens.pop().unwrap();
        assert!(end.is_end());
        tokens
    }

    fn lex_err(source: impl Into<Vec<u8>>) -> LexError {
        Tokenizer::new().tokenize(Input::new(source)).unwrap_err()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_end_position_of_empty_source() {
        let tokens = Tokenizer::new().tokenize(Input::new("")).unwrap();
        assert_eq!((tokens[0].line, tokens[0].col, tokens[0].offset), (1, 1, 0));
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[0].lexeme, b"x");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(format!("  {}  ", name));
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].lexeme.len(), 10000);
    }

    #[test]
    fn test_edge_underscore_alone() {
        let t = lex_all("_");
        assert_eq!(t[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_edge_identifier_after_number() {
        let t = lex_all("12abc");
        assert_eq!(t[0].lexeme, b"12");
        assert_eq!(t[1].lexeme, b"abc");
    }

    #[test]
    fn test_edge_suffix_letters_join_number() {
        let t = lex_all("1ul 2.0fl");
        assert_eq!(t[0].lexeme, b"1ul");
        assert_eq!(t[1].lexeme, b"2.0fl");
    }

    #[test]
    fn test_edge_lone_dot_is_float() {
        let t = lex_all(".");
        assert_eq!(t[0].kind, TokenKind::FloatingConstant);
        assert_eq!(t[0].lexeme, b".");
    }

    #[test]
    fn test_edge_exponent_without_digits() {
        let t = lex_all("1e");
        assert_eq!(t[0].kind, TokenKind::FloatingConstant);
        assert_eq!(t[0].lexeme, b"1e");
    }

    #[test]
    fn test_edge_double_sign() {
        let t = lex_all("--1");
        assert_eq!(t[0].kind, TokenKind::Begin);
        assert_eq!(t[1].kind, TokenKind::IntegerConstant);
        assert_eq!(t[1].lexeme, b"-1");
    }

    #[test]
    fn test_edge_sign_at_end() {
        let t = lex_all("x-");
        assert_eq!(t[1].kind, TokenKind::Begin);
        assert_eq!(t[1].lexeme, b"-");
    }

    #[test]
    fn test_edge_empty_string() {
        let t = lex_all("\"\"");
        assert_eq!(t[0].kind, TokenKind::StringLiteral);
        assert_eq!(t[0].lexeme, b"\"\"");
    }

    #[test]
    fn test_edge_empty_char_constant() {
        let t = lex_all("''");
        assert_eq!(t[0].kind, TokenKind::CharConstant);
    }

    #[test]
    fn test_edge_string_with_invalid_utf8_is_kept() {
        let t = lex_all(vec![b'"', 0xC3, b'"']);
        assert_eq!(t[0].kind, TokenKind::StringLiteral);
        assert_eq!(t[0].lexeme, vec![b'"', 0xC3, b'"']);
    }

    #[test]
    fn test_edge_utf8_identifiers() {
        let t = lex_all("变量 café Ωmega");
        assert_eq!(t.len(), 3);
        assert!(t.iter().all(|t| t.kind == TokenKind::Identifier));
        assert_eq!(t[1].lexeme_str(), "café");
        // Columns count bytes.
        assert_eq!(t[1].col, 8);
    }

    #[test]
    fn test_edge_line_and_column_tracking() {
        let t = lex_all("a\n  bb\n\n\tccc");
        assert_eq!((t[0].line, t[0].col), (1, 1));
        assert_eq!((t[1].line, t[1].col), (2, 3));
        assert_eq!((t[2].line, t[2].col), (4, 2));
        assert_eq!(t[2].offset, 9);
    }

    #[test]
    fn test_edge_string_advances_lines() {
        let t = lex_all("\"a\nb\" c");
        assert_eq!((t[1].line, t[1].col), (2, 4));
    }

    #[test]
    fn test_edge_unterminated_string() {
        match lex_err("x \"abc") {
            LexError::UnterminatedLiteral { kind, span } => {
                assert_eq!(kind, TokenKind::StringLiteral);
                assert_eq!(span.column, 3);
            },
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_edge_unterminated_char() {
        assert!(matches!(
            lex_err("'a"),
            LexError::UnterminatedLiteral { kind: TokenKind::CharConstant, .. }
        ));
    }

    #[test]
    fn test_edge_escaped_quote_at_end() {
        assert!(matches!(lex_err("\"abc\\\""), LexError::UnterminatedLiteral { .. }));
    }

    #[test]
    fn test_edge_empty_hex_escape() {
        assert!(matches!(lex_err("'\\x'"), LexError::EmptyHexEscape { .. }));
    }

    #[test]
    fn test_edge_bad_chars() {
        for source in ["$", "@", "`", "(", "\r", "\x0b", "\x7f"] {
            assert!(
                matches!(lex_err(source), LexError::BadChar { .. }),
                "{:?}",
                source
            );
        }
    }

    #[test]
    fn test_edge_stray_continuation_byte() {
        match lex_err(vec![b'a', b' ', 0x80]) {
            LexError::BadChar { byte, span } => {
                assert_eq!(byte, 0x80);
                assert_eq!(span.start, 2);
            },
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_edge_truncated_utf8_identifier() {
        assert!(matches!(lex_err(vec![b'a', 0xE4, 0xB8]), LexError::InvalidUtf8 { .. }));
        assert!(matches!(lex_err(vec![0xE4, 0xB8]), LexError::InvalidUtf8 { .. }));
    }

    #[test]
    fn test_edge_sentinel_bytes_in_source() {
        assert!(matches!(lex_err(vec![0xFF]), LexError::InvalidUtf8 { .. }));
        assert!(matches!(lex_err(vec![b'x', b' ', 0xFE]), LexError::InvalidUtf8 { .. }));
    }

    #[test]
    fn test_edge_keyword_prefix_is_identifier() {
        let mut tokenizer = Tokenizer::new();
        tokenizer.set_keywords(["int"].into_iter().collect());
        let t = tokenizer.tokenize(Input::new("int integer in")).unwrap();
        assert_eq!(t[0].kind, TokenKind::Keyword);
        assert_eq!(t[1].kind, TokenKind::Identifier);
        assert_eq!(t[2].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_edge_empty_keyword_list() {
        let mut tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.load_keywords_from(Input::new(" \n\t")).unwrap(), 0);
        assert!(tokenizer.keywords().unwrap().is_empty());
    }
}
