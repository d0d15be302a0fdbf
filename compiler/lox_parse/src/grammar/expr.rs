//! Expression parsing.

use lox_ir::{Binary, Expr, Grouping, Literal, LiteralValue, Token, TokenKind, Unary};
use lox_stack::with_stack;

use crate::recovery::TokenSet;
use crate::{ParseError, Parser};

const EQUALITY_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::BangEqual)
    .with(TokenKind::EqualEqual);

const COMPARISON_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Greater)
    .with(TokenKind::GreaterEqual)
    .with(TokenKind::Less)
    .with(TokenKind::LessEqual);

const TERM_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Minus)
    .with(TokenKind::Plus);

const FACTOR_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Slash)
    .with(TokenKind::Star);

const UNARY_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Bang)
    .with(TokenKind::Minus);

type Production<'a> = fn(&mut Parser<'a>) -> Result<Expr, ParseError>;

impl<'a> Parser<'a> {
    /// Parse an expression.
    ///
    /// Runs under `with_stack` so deeply nested groupings cannot overflow.
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        with_stack(|| self.equality())
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(EQUALITY_OPS, Self::comparison)
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(COMPARISON_OPS, Self::term)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(TERM_OPS, Self::factor)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(FACTOR_OPS, Self::unary)
    }

    /// `operand ( op operand )*`, folded to the left.
    fn binary_level(&mut self, ops: TokenSet, operand: Production<'a>) -> Result<Expr, ParseError> {
        let mut left = operand(self)?;

        while let Some(operator) = self.cursor.eat_any(ops) {
            let right = operand(self)?;
            left = Binary::new(left, operator.clone(), right).into();
        }

        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(operator) = self.cursor.eat_any(UNARY_OPS) {
            let right = with_stack(|| self.unary())?;
            return Ok(Unary::new(operator.clone(), right).into());
        }

        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        let value = match token.kind {
            TokenKind::False => LiteralValue::Bool(false),
            TokenKind::True => LiteralValue::Bool(true),
            TokenKind::Nil => LiteralValue::Nil,
            kind if kind.is_literal() => literal_value(token)?,
            TokenKind::LeftParen => {
                self.cursor.advance();
                let expression = self.expression()?;
                self.cursor
                    .expect(TokenKind::RightParen, "Expect ')' after expression")?;
                return Ok(Grouping::new(expression).into());
            }
            _ => return Err(ParseError::expected_expression(token)),
        };

        self.cursor.advance();
        Ok(Literal::new(value).into())
    }
}

/// Payload of a `Number` or `String` token.
///
/// Scanned tokens carry it already; hand-built ones are decoded from the
/// lexeme.
fn literal_value(token: &Token) -> Result<LiteralValue, ParseError> {
    if let Some(value) = &token.literal {
        return Ok(value.clone());
    }
    match token.kind {
        TokenKind::Number => token
            .lexeme
            .parse()
            .map(LiteralValue::Number)
            .map_err(|_| ParseError::expected_expression(token)),
        _ => Ok(LiteralValue::Str(
            token.lexeme.trim_matches('"').to_string(),
        )),
    }
}
