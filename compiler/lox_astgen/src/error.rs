//! Errors raised while validating a node table or writing its artifacts.

use std::io;
use std::path::PathBuf;

/// A malformed or inconsistent node table.
///
/// Raised before anything is rendered, so a failed run never leaves partial
/// output behind. Every variant names the offending entry.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GenerationConfigError {
    #[error("category `{category}` is declared twice")]
    DuplicateCategory { category: String },

    #[error("category `{category}` declares no node types")]
    EmptyCategory { category: String },

    #[error("`{category}`: node type `{node}` is declared twice")]
    DuplicateNodeType { category: String, node: String },

    #[error("`{category}.{node}`: field declaration `{decl}` must be `<type> <name>`")]
    MalformedField {
        category: String,
        node: String,
        decl: String,
    },

    #[error("`{category}.{node}`: field `{field}` is declared twice")]
    DuplicateField {
        category: String,
        node: String,
        field: String,
    },

    #[error("`{category}.{node}`: field `{field}` has unknown type `{ty}`")]
    UnknownFieldType {
        category: String,
        node: String,
        field: String,
        ty: String,
    },

    #[error("category `{category}`: every node type holds a boxed child, so no value is finite")]
    NoLeafNode { category: String },

    #[error("{location}: `{name}` is not a valid {what} name")]
    InvalidName {
        location: String,
        name: String,
        what: &'static str,
    },
}

/// Failure of a full generation run, including the filesystem side.
#[derive(Debug, thiserror::Error)]
pub enum AstGenError {
    #[error(transparent)]
    Config(#[from] GenerationConfigError),

    #[error("cannot read `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write `{}`: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
