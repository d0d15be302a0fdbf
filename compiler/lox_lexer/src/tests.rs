use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

#[test]
fn scans_expression_and_drops_trailing_comment() {
    assert_eq!(
        scan("(1.5 and hello) //  comment ").unwrap(),
        vec!["(", "1.5", "and", "hello", ")"]
    );
}

#[test]
fn comment_only_line_scans_to_nothing() {
    assert_eq!(scan("//1.5 and hello //  comment ").unwrap(), Vec::<&str>::new());
}

#[test]
fn empty_input_scans_to_nothing() {
    assert_eq!(scan("").unwrap(), Vec::<&str>::new());
    assert_eq!(scan(" \t\r\n").unwrap(), Vec::<&str>::new());
}

#[test]
fn stray_symbol_is_an_error_with_location() {
    let err = scan("1 and 2.7 @ // comment").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('@'));
    assert_eq!(err.span, Span::new(10, 11));
    assert_eq!((err.line, err.column), (1, 11));
}

#[test]
fn unterminated_string_is_an_error() {
    let err = scan("\"1.5 and hello //  comment ").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.span, Span::new(0, 27));
}

#[test]
fn error_on_a_later_line_reports_that_line() {
    let err = scan("print 1;\nprint \"a;\n").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!((err.line, err.column), (2, 7));
}

#[test]
fn keywords_and_keyword_prefixed_identifiers() {
    assert_eq!(
        scan("and android or orchid nil nilly").unwrap(),
        vec!["and", "android", "or", "orchid", "nil", "nilly"]
    );
}

#[test]
fn number_takes_a_single_fraction() {
    assert_eq!(scan("1.2.3").unwrap(), vec!["1.2", ".", "3"]);
    assert_eq!(scan("12.").unwrap(), vec!["12", "."]);
}

#[test]
fn string_is_greedy_to_last_quote_on_its_line() {
    assert_eq!(
        scan("\"a\" + \"b\"\n\"c\"").unwrap(),
        vec!["\"a\" + \"b\"", "\"c\""]
    );
}

#[test]
fn scan_line_ignores_one_trailing_newline() {
    assert_eq!(scan_line("var x = 1;\n").unwrap(), vec!["var", "x", "=", "1", ";"]);
    assert_eq!(scan_line("x // y\r\n").unwrap(), vec!["x"]);
    assert_eq!(scan_line("").unwrap(), Vec::<&str>::new());
}

#[test]
fn scan_line_and_scan_agree_on_a_single_line() {
    let line = "(1.5 and hello) //  comment ";
    assert_eq!(scan_line(line).unwrap(), scan(line).unwrap());
    assert_eq!(scan_line("1 @").unwrap_err(), scan("1 @").unwrap_err());
}

#[test]
fn tokenize_classifies_and_decodes_literals() {
    let tokens = tokenize("print \"hi\" + 2.5;").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Print,
            TokenKind::String,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[1].lexeme, "\"hi\"");
    assert_eq!(tokens[1].literal, Some(LiteralValue::Str("hi".into())));
    assert_eq!(tokens[3].literal, Some(LiteralValue::Number(2.5)));
    assert_eq!(tokens[0].literal, None);
}

#[test]
fn tokenize_tracks_lines_and_spans() {
    let tokens = tokenize("a\n\n  b // c\nc").unwrap();
    let located: Vec<_> = tokens
        .iter()
        .map(|t| (t.lexeme.as_str(), t.line, t.span))
        .collect();
    assert_eq!(
        located,
        vec![
            ("a", 1, Span::new(0, 1)),
            ("b", 3, Span::new(5, 6)),
            ("c", 4, Span::new(12, 13)),
            ("", 4, Span::point(13)),
        ]
    );
}

#[test]
fn tokenize_empty_source_is_just_eof() {
    let tokens = tokenize("").unwrap();
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_eof());
    assert_eq!(tokens[0].line, 1);
}

#[test]
fn tokenize_fails_like_scan() {
    assert_eq!(tokenize("1 and 2.7 @").unwrap_err(), scan("1 and 2.7 @").unwrap_err());
}

#[test]
fn non_ascii_character_is_reported_whole() {
    let err = scan("x é").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('é'));
    assert_eq!(err.column, 3);
}

#[test]
fn unicode_whitespace_separates_lexemes() {
    assert_eq!(scan("1\u{a0}2").unwrap(), vec!["1", "2"]);
    assert_eq!(scan("print\u{2003}x;\u{3000}").unwrap(), vec!["print", "x", ";"]);

    let tokens = tokenize("1\u{2028}\n+\u{a0}2").unwrap();
    let lines: Vec<u32> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, [1, 2, 2, 2]);
}

fn source_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(r#"[a-z0-9 \t\n().+\-*/=<>!;,"@_]{0,60}"#).unwrap()
}

fn is_trivia(lexeme: &str) -> bool {
    lexeme.starts_with("//") || lexeme.chars().all(char::is_whitespace)
}

proptest! {
    #[test]
    fn kept_spans_and_trivia_gaps_partition_the_input(source in source_strategy()) {
        if let Ok(tokens) = tokenize(&source) {
            let mut cursor = 0;
            for token in &tokens {
                let range = token.span.to_range();
                prop_assert!(range.start >= cursor);
                prop_assert_eq!(&source[range.clone()], token.lexeme.as_str());
                prop_assert_eq!(scan(&source[cursor..range.start]).unwrap(), Vec::<&str>::new());
                cursor = range.end;
            }
            prop_assert_eq!(cursor, source.len());
        }
    }

    #[test]
    fn scan_never_returns_trivia(source in source_strategy()) {
        if let Ok(lexemes) = scan(&source) {
            for lexeme in lexemes {
                prop_assert!(!lexeme.is_empty());
                prop_assert!(!is_trivia(lexeme), "trivia lexeme {:?}", lexeme);
            }
        }
    }

    #[test]
    fn scan_is_deterministic_and_matches_tokenize(source in source_strategy()) {
        let first = scan(&source);
        prop_assert_eq!(&first, &scan(&source));
        match (first, tokenize(&source)) {
            (Ok(lexemes), Ok(tokens)) => {
                let from_tokens: Vec<&str> = tokens
                    .iter()
                    .filter(|t| !t.is_eof())
                    .map(|t| t.lexeme.as_str())
                    .collect();
                prop_assert_eq!(lexemes, from_tokens);
            }
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "scan {:?} vs tokenize {:?}", a, b),
        }
    }

    #[test]
    fn keyword_text_is_never_an_identifier(
        word in prop::sample::select(vec![
            "and", "class", "else", "false", "for", "fun", "if", "nil",
            "or", "print", "return", "super", "this", "true", "var", "while",
        ])
    ) {
        let tokens = tokenize(word).unwrap();
        prop_assert_eq!(Some(tokens[0].kind), TokenKind::keyword(word));
    }
}
