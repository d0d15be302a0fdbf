//! The declarative node table and its validated form.
//!
//! A [`NodeTable`] is hand-authored data: category names mapped to node type
//! names mapped to `"<type> <name>"` field declarations, all in declared
//! order. [`NodeTable::resolve`] checks it and produces [`Category`] values
//! with parsed, typed fields for the emitter.

use rustc_hash::FxHashSet;

use crate::{snake_case, GenerationConfigError};

/// Leaf field types that are not themselves node categories.
const LEAF_TYPES: [(&str, FieldType); 5] = [
    ("Token", FieldType::Token),
    ("Object", FieldType::Object),
    ("String", FieldType::Str),
    ("Boolean", FieldType::Bool),
    ("Number", FieldType::Number),
];

/// Words that cannot be used as a Rust identifier.
const RESERVED: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Type names the generated code already uses for something else.
const EMITTED: &[&str] = &[
    "Box",
    "Clone",
    "Debug",
    "Drop",
    "From",
    "LiteralValue",
    "Option",
    "PartialEq",
    "String",
    "Token",
    "Vec",
];

/// Unvalidated node table, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeTable {
    categories: Vec<CategoryDecl>,
}

/// One base category as written in the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryDecl {
    pub name: String,
    pub nodes: Vec<NodeDecl>,
}

/// One node type as written in the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeDecl {
    pub name: String,
    /// Raw `"<type> <name>"` declarations.
    pub fields: Vec<String>,
}

impl NodeTable {
    pub fn new() -> Self {
        NodeTable::default()
    }

    /// Append a category with its node types.
    #[must_use]
    pub fn category(mut self, name: &str, nodes: &[(&str, &[&str])]) -> Self {
        self.categories.push(CategoryDecl {
            name: name.to_owned(),
            nodes: nodes
                .iter()
                .map(|(node, fields)| NodeDecl {
                    name: (*node).to_owned(),
                    fields: fields.iter().map(|decl| (*decl).to_owned()).collect(),
                })
                .collect(),
        });
        self
    }

    pub fn categories(&self) -> &[CategoryDecl] {
        &self.categories
    }

    /// Validate the whole table and parse every field declaration.
    ///
    /// Stops at the first problem; the error names the offending entry.
    pub fn resolve(&self) -> Result<Vec<Category>, GenerationConfigError> {
        let mut seen = FxHashSet::default();
        for decl in &self.categories {
            check_type_name(&decl.name, "category", || "node table".to_owned())?;
            // The visitor parameter is the snake_case category name.
            if RESERVED.contains(&snake_case(&decl.name).as_str()) || self.is_taken(&decl.name) {
                return Err(GenerationConfigError::InvalidName {
                    location: "node table".to_owned(),
                    name: decl.name.clone(),
                    what: "category",
                });
            }
            if !seen.insert(decl.name.as_str()) {
                return Err(GenerationConfigError::DuplicateCategory {
                    category: decl.name.clone(),
                });
            }
        }

        let categories = self
            .categories
            .iter()
            .map(|decl| self.resolve_category(decl))
            .collect::<Result<Vec<_>, _>>()?;
        check_leaves(&categories)?;
        Ok(categories)
    }

    /// Whether `name` collides with a name the emitter produces: a helper
    /// type, or some category's visitor trait.
    fn is_taken(&self, name: &str) -> bool {
        EMITTED.contains(&name)
            || self
                .categories
                .iter()
                .any(|c| name.strip_suffix("Visitor") == Some(c.name.as_str()))
    }

    fn resolve_category(&self, decl: &CategoryDecl) -> Result<Category, GenerationConfigError> {
        if decl.nodes.is_empty() {
            return Err(GenerationConfigError::EmptyCategory {
                category: decl.name.clone(),
            });
        }

        let mut seen = FxHashSet::default();
        let mut nodes = Vec::with_capacity(decl.nodes.len());
        for node in &decl.nodes {
            check_type_name(&node.name, "node type", || format!("`{}`", decl.name))?;
            if self.is_taken(&node.name) || self.categories.iter().any(|c| c.name == node.name) {
                return Err(GenerationConfigError::InvalidName {
                    location: format!("`{}`", decl.name),
                    name: node.name.clone(),
                    what: "node type",
                });
            }
            if !seen.insert(node.name.as_str()) {
                return Err(GenerationConfigError::DuplicateNodeType {
                    category: decl.name.clone(),
                    node: node.name.clone(),
                });
            }
            nodes.push(self.resolve_node(&decl.name, node)?);
        }

        Ok(Category {
            name: decl.name.clone(),
            nodes,
        })
    }

    fn resolve_node(
        &self,
        category: &str,
        node: &NodeDecl,
    ) -> Result<NodeType, GenerationConfigError> {
        let mut seen = FxHashSet::default();
        let mut fields = Vec::with_capacity(node.fields.len());

        for decl in &node.fields {
            let mut parts = decl.split_whitespace();
            let (Some(ty), Some(name), None) = (parts.next(), parts.next(), parts.next()) else {
                return Err(GenerationConfigError::MalformedField {
                    category: category.to_owned(),
                    node: node.name.clone(),
                    decl: decl.clone(),
                });
            };

            if !is_identifier(name) || RESERVED.contains(&name) {
                return Err(GenerationConfigError::InvalidName {
                    location: format!("`{category}.{}`", node.name),
                    name: name.to_owned(),
                    what: "field",
                });
            }
            if !seen.insert(name) {
                return Err(GenerationConfigError::DuplicateField {
                    category: category.to_owned(),
                    node: node.name.clone(),
                    field: name.to_owned(),
                });
            }

            let ty = self
                .field_type(ty)
                .ok_or_else(|| GenerationConfigError::UnknownFieldType {
                    category: category.to_owned(),
                    node: node.name.clone(),
                    field: name.to_owned(),
                    ty: ty.to_owned(),
                })?;

            fields.push(Field {
                name: name.to_owned(),
                ty,
            });
        }

        Ok(NodeType {
            name: node.name.clone(),
            fields,
        })
    }

    fn field_type(&self, ty: &str) -> Option<FieldType> {
        if self.categories.iter().any(|c| c.name == ty) {
            return Some(FieldType::Category(ty.to_owned()));
        }
        LEAF_TYPES
            .iter()
            .find(|(name, _)| *name == ty)
            .map(|(_, leaf)| leaf.clone())
    }
}

/// A validated base category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub nodes: Vec<NodeType>,
}

impl Category {
    /// True if any node of this category has a field of category `other`.
    pub fn refers_to(&self, other: &str) -> bool {
        self.categories_referenced().any(|c| c == other)
    }

    fn categories_referenced(&self) -> impl Iterator<Item = &str> {
        self.nodes
            .iter()
            .flat_map(|node| &node.fields)
            .filter_map(|field| match &field.ty {
                FieldType::Category(c) => Some(c.as_str()),
                _ => None,
            })
    }

    /// First node type whose value needs no boxed child.
    ///
    /// Generated teardown code swaps one of these in for every child it
    /// moves out of a node. Its unboxed category fields hold leaves of
    /// their own categories.
    pub fn leaf<'a>(&'a self, all: &[Category]) -> Option<&'a NodeType> {
        self.nodes.iter().find(|node| {
            node.fields.iter().all(|field| match &field.ty {
                FieldType::Category(other) => {
                    !is_boxed(all, &self.name, other)
                        && find(all, other).is_some_and(|c| c.leaf(all).is_some())
                }
                _ => true,
            })
        })
    }
}

/// Whether a field of category `other` inside `base` must be boxed to keep
/// `base` sized: true when `other` leads back to `base` through category
/// fields, directly or through other categories.
pub fn is_boxed(all: &[Category], base: &str, other: &str) -> bool {
    let mut seen = FxHashSet::default();
    let mut pending = vec![other];
    while let Some(name) = pending.pop() {
        if name == base {
            return true;
        }
        if seen.insert(name) {
            if let Some(category) = find(all, name) {
                pending.extend(category.categories_referenced());
            }
        }
    }
    false
}

fn find<'a>(all: &'a [Category], name: &str) -> Option<&'a Category> {
    all.iter().find(|c| c.name == name)
}

/// Every category held in a box needs a leaf node, or it has no finite
/// values and its teardown has nothing to leave behind.
fn check_leaves(all: &[Category]) -> Result<(), GenerationConfigError> {
    for category in all {
        for other in category.categories_referenced() {
            if !is_boxed(all, &category.name, other) {
                continue;
            }
            if find(all, other).and_then(|c| c.leaf(all)).is_none() {
                return Err(GenerationConfigError::NoLeafNode {
                    category: other.to_owned(),
                });
            }
        }
    }
    Ok(())
}

/// A validated node type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeType {
    pub name: String,
    pub fields: Vec<Field>,
}

/// A validated field declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: FieldType,
}

/// Resolved type of a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// Reference to a base category of the same table.
    Category(String),
    Token,
    /// Dynamic literal payload (`LiteralValue`).
    Object,
    Str,
    Bool,
    Number,
}

fn check_type_name(
    name: &str,
    what: &'static str,
    location: impl FnOnce() -> String,
) -> Result<(), GenerationConfigError> {
    let upper = name.starts_with(|c: char| c.is_ascii_uppercase());
    if upper && is_identifier(name) && !RESERVED.contains(&name) {
        Ok(())
    } else {
        Err(GenerationConfigError::InvalidName {
            location: location(),
            name: name.to_owned(),
            what,
        })
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && name != "_"
}
