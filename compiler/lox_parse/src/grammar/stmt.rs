//! Statement parsing.

use lox_ir::{Expression, Print, Stmt, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `statement -> exprStmt | printStmt`
    pub(crate) fn statement(&mut self) -> Result<Stmt, ParseError> {
        if self.cursor.eat(TokenKind::Print).is_some() {
            return self.print_statement();
        }
        self.expression_statement()
    }

    fn print_statement(&mut self) -> Result<Stmt, ParseError> {
        let value = self.expression()?;
        self.cursor
            .expect(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Print::new(value).into())
    }

    fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expression = self.expression()?;
        self.cursor
            .expect(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Expression::new(expression).into())
    }
}
