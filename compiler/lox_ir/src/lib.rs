//! Lox IR - shared front-end data types
//!
//! This crate holds the data that flows between the front-end phases:
//! - Spans for source locations
//! - Tokens, token kinds and decoded literal values
//! - Syntax-tree nodes (`Expr`, `Stmt`) and their visitor traits
//! - `AstPrinter`, a visitor that renders trees in prefix form
//!
//! The node types under [`ast`] are generated by `lox_astgen` from the
//! declarative node table and checked in. Regenerate them instead of
//! editing them by hand.

pub mod ast;
mod printer;
mod span;
mod token;

pub use ast::{
    Binary, Expr, ExprVisitor, Expression, Grouping, Literal, Print, Stmt, StmtVisitor, Unary,
};
pub use printer::AstPrinter;
pub use span::{Span, SpanError};
pub use token::{LiteralValue, Token, TokenKind};
