//! Recursive-descent parser for Lox.
//!
//! Turns the token list from `lox_lexer::tokenize` into statements:
//!
//! ```text
//! program     -> statement* EOF ;
//! statement   -> exprStmt | printStmt ;
//! exprStmt    -> expression ";" ;
//! printStmt   -> "print" expression ";" ;
//! expression  -> equality ;
//! equality    -> comparison ( ( "!=" | "==" ) comparison )* ;
//! comparison  -> term ( ( ">" | ">=" | "<" | "<=" ) term )* ;
//! term        -> factor ( ( "-" | "+" ) factor )* ;
//! factor      -> unary ( ( "/" | "*" ) unary )* ;
//! unary       -> ( "!" | "-" ) unary | primary ;
//! primary     -> NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")" ;
//! ```
//!
//! A syntax error does not stop the parse: the error is recorded, the
//! parser skips to the next statement boundary and carries on.

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use error::ParseError;
pub use recovery::{synchronize, TokenSet, STMT_START};

use lox_ir::{Expr, Stmt, Token};
use tracing::debug;

/// Statements that parsed and the errors met along the way.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParseOutput {
    pub statements: Vec<Stmt>,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// `program -> statement* EOF`, recovering after each bad statement.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut output = ParseOutput::default();

        while !self.cursor.is_at_end() {
            match self.statement() {
                Ok(stmt) => output.statements.push(stmt),
                Err(err) => {
                    debug!(%err, "syntax error");
                    output.errors.push(err);
                    synchronize(&mut self.cursor);
                }
            }
        }

        debug!(
            statements = output.statements.len(),
            errors = output.errors.len(),
            "parsed program"
        );
        output
    }

    /// A single expression that must use up the whole input.
    pub fn parse_expression(mut self) -> Result<Expr, ParseError> {
        let expr = self.expression()?;
        if !self.cursor.is_at_end() {
            return Err(ParseError::expected_token(
                self.cursor.current(),
                "Expect end of expression.",
            ));
        }
        Ok(expr)
    }
}

/// Parse a whole program.
pub fn parse(tokens: &[Token]) -> ParseOutput {
    Parser::new(tokens).parse_program()
}

/// Parse a bare expression, as typed at the prompt.
pub fn parse_expression(tokens: &[Token]) -> Result<Expr, ParseError> {
    Parser::new(tokens).parse_expression()
}
