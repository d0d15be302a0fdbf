//! Syntax-tree code generator for the Lox front end.
//!
//! The node types of each base category (`Expr`, `Stmt`) are described by a
//! declarative [`NodeTable`]. [`generate`] validates the table and renders one
//! Rust source artifact per category containing:
//!
//! - a sum type `enum <Base>` with one variant per node type and an `accept`
//!   method that dispatches on the variant,
//! - a `<Base>Visitor<R>` trait with one `visit_<node>_<base>` method per
//!   node type,
//! - one struct per node type holding its declared fields in order, with a
//!   positional `new`, its own `accept`, and a `From` conversion into the base.
//!
//! A category whose nodes hold boxed children (a field leading back to the
//! category itself) can nest without bound. Its enum gets a hand-written
//! `Drop` that moves children out onto a worklist, and `Clone`, `PartialEq`
//! and `Debug` impls that recurse through `lox_stack::with_stack`, so the
//! generated file depends on `lox_stack`. Such a category needs a node type
//! with no boxed child to stand in for moved-out children.
//!
//! Adding an operation over the tree means implementing a visitor; adding a
//! node type changes the trait and breaks every visitor at compile time.
//!
//! The artifacts for [`lox_node_table`] are checked into `lox_ir/src/ast`
//! and regenerated with `cargo run -p lox_astgen`.

mod artifacts;
mod emit;
mod error;
pub mod table;

pub use artifacts::{stale_artifacts, write_artifacts};
pub use emit::{generate, snake_case, visit_method, Artifact};
pub use error::{AstGenError, GenerationConfigError};
pub use table::NodeTable;

/// Expression node types.
pub const EXPR_NODES: &[(&str, &[&str])] = &[
    ("Unary", &["Token operator", "Expr right"]),
    ("Binary", &["Expr left", "Token operator", "Expr right"]),
    ("Grouping", &["Expr expression"]),
    ("Literal", &["Object value"]),
];

/// Statement node types.
pub const STMT_NODES: &[(&str, &[&str])] = &[
    ("Expression", &["Expr expression"]),
    ("Print", &["Expr expression"]),
];

/// The node table the Lox front end is built from.
pub fn lox_node_table() -> NodeTable {
    NodeTable::new()
        .category("Expr", EXPR_NODES)
        .category("Stmt", STMT_NODES)
}
