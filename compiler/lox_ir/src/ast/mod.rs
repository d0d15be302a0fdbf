//! Syntax-tree node types.
//!
//! `expr.rs` and `stmt.rs` are generated by `lox_astgen` from the node table
//! and must not be edited by hand. Each category is a sum type whose variants
//! are the node types; operations over a tree are written as visitors
//! (`ExprVisitor`, `StmtVisitor`) and invoked with `accept`.
//!
//! Children are owned: a `Binary` owns both operand subtrees, so trees are
//! acyclic and dropped as a whole. Dropping, cloning, comparing and
//! debug-printing an `Expr` do not recurse once per level on the thread's
//! stack, so trees nested a million deep are safe to handle.

mod expr;
mod stmt;

pub use expr::{Binary, Expr, ExprVisitor, Grouping, Literal, Unary};
pub use stmt::{Expression, Print, Stmt, StmtVisitor};
