//! Grammar productions.
//!
//! Each module extends `Parser` with the methods for one part of the
//! grammar:
//!
//! - [`stmt`]: `statement`, `exprStmt`, `printStmt`
//! - [`expr`]: the precedence chain from `expression` down to `primary`
//!
//! Binary levels are left-associative loops; `unary` recurses on itself
//! and `primary` recurses into `expression` for groupings, both through
//! `lox_stack::with_stack`.

mod expr;
mod stmt;
