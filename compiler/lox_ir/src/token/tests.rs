use super::*;

#[test]
fn keyword_lookup() {
    assert_eq!(TokenKind::keyword("and"), Some(TokenKind::And));
    assert_eq!(TokenKind::keyword("while"), Some(TokenKind::While));
    assert_eq!(TokenKind::keyword("android"), None);
    assert_eq!(TokenKind::keyword("And"), None);
}

#[test]
fn every_keyword_round_trips_through_its_spelling() {
    for (spelling, keyword) in kind::KEYWORDS {
        assert_eq!(keyword.as_str(), spelling);
        assert_eq!(TokenKind::keyword(spelling), Some(keyword));
    }
    assert_eq!(TokenKind::keyword("<eof>"), None);
}

#[test]
fn literal_kinds() {
    assert!(TokenKind::Number.is_literal());
    assert!(TokenKind::String.is_literal());
    assert!(!TokenKind::True.is_literal());
    assert!(!TokenKind::Identifier.is_literal());
}

#[test]
fn literal_value_display() {
    assert_eq!(LiteralValue::Number(1.0).to_string(), "1");
    assert_eq!(LiteralValue::Number(45.67).to_string(), "45.67");
    assert_eq!(LiteralValue::from("hi there").to_string(), "hi there");
    assert_eq!(LiteralValue::Bool(false).to_string(), "false");
    assert_eq!(LiteralValue::Nil.to_string(), "nil");
}

#[test]
fn eof_token_is_synthetic() {
    let eof = Token::eof(3, 17);
    assert!(eof.is_eof());
    assert!(eof.lexeme.is_empty());
    assert_eq!(eof.line, 3);
    assert_eq!(eof.span, Span::point(17));
    assert_eq!(eof.literal, None);
}

#[test]
fn token_display_matches_listing_format() {
    let number = Token::new(TokenKind::Number, "1.5", 1, Span::new(0, 3))
        .with_literal(LiteralValue::Number(1.5));
    assert_eq!(number.to_string(), "Number 1.5 1.5");

    let paren = Token::new(TokenKind::LeftParen, "(", 1, Span::new(0, 1));
    assert_eq!(paren.to_string(), "LeftParen ( null");
}
