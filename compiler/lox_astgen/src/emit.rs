//! Rust source emission for validated node categories.
//!
//! Output depends only on the table: categories, node types, fields and
//! imports are all written in declared (or sorted) order, so two runs over
//! the same table produce byte-identical artifacts.

use tracing::debug;

use crate::table::{is_boxed, Category, FieldType, NodeType};
use crate::{GenerationConfigError, NodeTable};

/// Generated source for one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    /// File name relative to the output directory, e.g. `expr.rs`.
    pub file_name: String,
    pub source: String,
}

/// Validate `table` and render one artifact per category.
///
/// Nothing is rendered unless the whole table is valid.
pub fn generate(table: &NodeTable) -> Result<Vec<Artifact>, GenerationConfigError> {
    let categories = table.resolve()?;
    let leaves = leaf_categories(&categories)?;
    categories
        .iter()
        .map(|category| {
            let source = render_category(category, &categories, &leaves)?;
            debug!(
                category = %category.name,
                nodes = category.nodes.len(),
                bytes = source.len(),
                "rendered node category"
            );
            Ok(Artifact {
                file_name: format!("{}.rs", snake_case(&category.name)),
                source,
            })
        })
        .collect()
}

/// `BinaryExpr` -> `binary_expr`.
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }
    out
}

/// Name of the visitor method for `node` in `base`: `visit_<node>_<base>`.
pub fn visit_method(node: &str, base: &str) -> String {
    format!("visit_{}_{}", snake_case(node), snake_case(base))
}

/// Widest struct literal body rustfmt keeps on one line.
const STRUCT_LIT_WIDTH: usize = 18;

struct Renderer<'a> {
    category: &'a Category,
    all: &'a [Category],
    /// Categories whose `leaf()` constructor some teardown calls.
    leaves: &'a [String],
    out: String,
}

fn render_category(
    category: &Category,
    all: &[Category],
    leaves: &[String],
) -> Result<String, GenerationConfigError> {
    let mut renderer = Renderer {
        category,
        all,
        leaves,
        out: String::new(),
    };
    renderer.header();
    renderer.base_enum()?;
    if renderer.owns_boxes() {
        renderer.teardown();
        renderer.stack_safe_traits();
    }
    renderer.visitor_trait();
    for node in &category.nodes {
        renderer.node(node);
    }
    Ok(renderer.out)
}

/// Categories that need a `leaf()` constructor: every category held in a
/// box, plus the categories their leaves are built from.
fn leaf_categories(all: &[Category]) -> Result<Vec<String>, GenerationConfigError> {
    let mut pending: Vec<&str> = all
        .iter()
        .flat_map(|category| {
            category
                .nodes
                .iter()
                .flat_map(|node| &node.fields)
                .filter_map(move |field| match &field.ty {
                    FieldType::Category(other) if is_boxed(all, &category.name, other) => {
                        Some(other.as_str())
                    }
                    _ => None,
                })
        })
        .collect();

    let mut leaves: Vec<String> = Vec::new();
    while let Some(name) = pending.pop() {
        if leaves.iter().any(|l| l == name) {
            continue;
        }
        let leaf = all
            .iter()
            .find(|c| c.name == name)
            .and_then(|c| c.leaf(all))
            .ok_or_else(|| GenerationConfigError::NoLeafNode {
                category: name.to_owned(),
            })?;
        pending.extend(leaf.fields.iter().filter_map(|field| match &field.ty {
            FieldType::Category(other) => Some(other.as_str()),
            _ => None,
        }));
        leaves.push(name.to_owned());
    }
    Ok(leaves)
}

impl Renderer<'_> {
    fn base(&self) -> &str {
        &self.category.name
    }

    fn visitor(&self) -> String {
        format!("{}Visitor", self.base())
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn is_boxed(&self, other: &str) -> bool {
        is_boxed(self.all, self.base(), other)
    }

    /// Whether any node holds a boxed child. Such trees can nest
    /// arbitrarily deep, so their drop and derived traits must not recurse
    /// on the thread's stack.
    fn owns_boxes(&self) -> bool {
        self.category
            .nodes
            .iter()
            .flat_map(|node| &node.fields)
            .any(|field| matches!(&field.ty, FieldType::Category(c) if self.is_boxed(c)))
    }

    /// Whether some node holds a child of its own category, always boxed.
    fn owns_self_boxes(&self) -> bool {
        self.category.refers_to(self.base())
    }

    fn header(&mut self) {
        let base = self.base().to_owned();
        self.line(&format!(
            "// @generated by lox-astgen from the `{base}` node table. Do not edit by hand."
        ));
        self.line("");

        if self.owns_boxes() {
            self.line("use std::{fmt, mem};");
            self.line("");
            self.line("use lox_stack::with_stack;");
            self.line("");
        }

        let mut ast_imports = Vec::new();
        let mut root_imports = Vec::new();
        for field in self.category.nodes.iter().flat_map(|n| &n.fields) {
            match &field.ty {
                FieldType::Category(other) if *other != base => ast_imports.push(other.clone()),
                FieldType::Token => root_imports.push("Token".to_owned()),
                FieldType::Object => root_imports.push("LiteralValue".to_owned()),
                _ => {}
            }
        }
        let wrote_ast = self.use_line("crate::ast", ast_imports);
        let wrote_root = self.use_line("crate", root_imports);
        if wrote_ast || wrote_root {
            self.line("");
        }
    }

    fn use_line(&mut self, path: &str, mut items: Vec<String>) -> bool {
        items.sort();
        items.dedup();
        match items.as_slice() {
            [] => return false,
            [single] => {
                let text = format!("use {path}::{single};");
                self.line(&text);
            }
            many => {
                let text = format!("use {path}::{{{}}};", many.join(", "));
                self.line(&text);
            }
        }
        true
    }

    fn base_enum(&mut self) -> Result<(), GenerationConfigError> {
        let base = self.base().to_owned();
        let visitor = self.visitor();

        self.line(&format!("/// A node in the `{base}` syntax tree."));
        if !self.owns_boxes() {
            self.line("#[derive(Clone, Debug, PartialEq)]");
        }
        let category = self.category;
        self.line(&format!("pub enum {base} {{"));
        for node in &category.nodes {
            let text = format!("    {0}({0}),", node.name);
            self.line(&text);
        }
        self.line("}");
        self.line("");

        self.line(&format!("impl {base} {{"));
        self.line(&format!(
            "    /// Dispatch to the `{visitor}` method for this variant."
        ));
        self.line(&format!(
            "    pub fn accept<R, V: {visitor}<R> + ?Sized>(&self, visitor: &mut V) -> R {{"
        ));
        self.line("        match self {");
        for node in &category.nodes {
            let text = format!(
                "            {base}::{}(node) => visitor.{}(node),",
                node.name,
                visit_method(&node.name, &base)
            );
            self.line(&text);
        }
        self.line("        }");
        self.line("    }");

        if self.leaves.iter().any(|l| *l == base) {
            let leaf = category
                .leaf(self.all)
                .ok_or_else(|| GenerationConfigError::NoLeafNode {
                    category: base.clone(),
                })?;
            let args: Vec<String> = leaf.fields.iter().map(|f| leaf_value(&f.ty)).collect();
            self.line("");
            self.line("    /// A value with no boxed children, left in place of a moved-out child.");
            self.line("    pub(crate) fn leaf() -> Self {");
            let text = format!(
                "        {base}::{0}({0}::new({1}))",
                leaf.name,
                args.join(", ")
            );
            self.line(&text);
            self.line("    }");
        }

        if self.owns_boxes() {
            self.take_children();
        }
        self.line("}");
        self.line("");
        Ok(())
    }

    /// `take_children`: move every boxed child out of `self`, leaving leaves
    /// behind. Children of this category go to `pending`; children of other
    /// categories are dropped on a grown stack.
    fn take_children(&mut self) {
        let base = self.base().to_owned();
        let self_boxes = self.owns_self_boxes();

        self.line("");
        if self_boxes {
            self.line(&format!(
                "    /// Move every boxed child out, leaving leaves behind. `{base}` children"
            ));
            self.line("    /// go to `pending`; others are dropped here.");
            self.line(&format!(
                "    fn take_children(&mut self, pending: &mut Vec<{base}>) {{"
            ));
        } else {
            self.line("    /// Move every boxed child out and drop it, leaving leaves behind.");
            self.line("    fn take_children(&mut self) {");
        }
        let category = self.category;
        self.line("        match self {");
        for node in &category.nodes {
            let boxed: Vec<(&str, &str)> = node
                .fields
                .iter()
                .filter_map(|field| match &field.ty {
                    FieldType::Category(other) if self.is_boxed(other) => {
                        Some((field.name.as_str(), other.as_str()))
                    }
                    _ => None,
                })
                .collect();
            if boxed.is_empty() {
                let text = format!("            {base}::{}(_) => {{}}", node.name);
                self.line(&text);
                continue;
            }
            let mut body = Vec::new();
            for (field, other) in boxed {
                if other == base {
                    body.push(format!(
                        "                pending.push(mem::replace(&mut *node.{field}, {base}::leaf()));"
                    ));
                } else {
                    body.push(format!(
                        "                let {field} = mem::replace(&mut *node.{field}, {other}::leaf());"
                    ));
                    body.push(format!("                with_stack(move || drop({field}));"));
                }
            }
            let text = format!("            {base}::{}(node) => {{", node.name);
            self.line(&text);
            for text in body {
                self.line(&text);
            }
            self.line("            }");
        }
        self.line("        }");
        self.line("    }");
    }

    /// `Drop` that tears the tree down with a worklist instead of recursing
    /// once per nesting level.
    fn teardown(&mut self) {
        let base = self.base().to_owned();
        self.line("/// Tears the tree down without recursing once per level, so dropping a");
        self.line("/// deeply nested tree cannot overflow the stack.");
        self.line(&format!("impl Drop for {base} {{"));
        self.line("    fn drop(&mut self) {");
        if self.owns_self_boxes() {
            self.line("        let mut pending = Vec::new();");
            self.line("        self.take_children(&mut pending);");
            self.line("        while let Some(mut node) = pending.pop() {");
            self.line("            node.take_children(&mut pending);");
            self.line("        }");
        } else {
            self.line("        self.take_children();");
        }
        self.line("    }");
        self.line("}");
        self.line("");
    }

    /// `Clone`, `PartialEq` and `Debug` for the base enum, recursing through
    /// `with_stack` so deep trees grow the stack instead of overflowing it.
    fn stack_safe_traits(&mut self) {
        let base = self.base().to_owned();
        let names: Vec<String> = self.category.nodes.iter().map(|n| n.name.clone()).collect();

        self.line(&format!("impl Clone for {base} {{"));
        self.line("    fn clone(&self) -> Self {");
        self.line("        with_stack(|| match self {");
        for name in &names {
            self.line(&format!(
                "            {base}::{name}(node) => {base}::{name}(node.clone()),"
            ));
        }
        self.line("        })");
        self.line("    }");
        self.line("}");
        self.line("");

        self.line(&format!("impl PartialEq for {base} {{"));
        self.line("    fn eq(&self, other: &Self) -> bool {");
        self.line("        with_stack(|| match (self, other) {");
        for name in &names {
            self.line(&format!(
                "            ({base}::{name}(a), {base}::{name}(b)) => a == b,"
            ));
        }
        if names.len() > 1 {
            self.line("            _ => false,");
        }
        self.line("        })");
        self.line("    }");
        self.line("}");
        self.line("");

        self.line(&format!("impl fmt::Debug for {base} {{"));
        self.line("    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {");
        self.line("        with_stack(|| match self {");
        for name in &names {
            self.line(&format!(
                "            {base}::{name}(node) => f.debug_tuple(\"{name}\").field(node).finish(),"
            ));
        }
        self.line("        })");
        self.line("    }");
        self.line("}");
        self.line("");
    }

    fn visitor_trait(&mut self) {
        let base = self.base().to_owned();
        let param = snake_case(&base);

        self.line(&format!("/// An operation over every `{base}` variant."));
        let category = self.category;
        self.line(&format!("pub trait {}<R> {{", self.visitor()));
        for node in &category.nodes {
            let text = format!(
                "    fn {}(&mut self, {param}: &{}) -> R;",
                visit_method(&node.name, &base),
                node.name
            );
            self.line(&text);
        }
        self.line("}");
    }

    fn stored_type(&self, ty: &FieldType) -> String {
        match ty {
            FieldType::Category(other) if self.is_boxed(other) => format!("Box<{other}>"),
            other => param_type(other).to_owned(),
        }
    }

    fn node(&mut self, node: &NodeType) {
        let base = self.base().to_owned();
        let visitor = self.visitor();
        let name = &node.name;

        let declared: Vec<String> = node
            .fields
            .iter()
            .map(|f| format!("{} {}", declared_type(&f.ty), f.name))
            .collect();

        self.line("");
        self.line(&format!("/// Declared as `{name}({})`.", declared.join(", ")));
        self.line("#[derive(Clone, Debug, PartialEq)]");
        if node.fields.is_empty() {
            self.line(&format!("pub struct {name} {{}}"));
        } else {
            self.line(&format!("pub struct {name} {{"));
            for field in &node.fields {
                let text = format!("    pub {}: {},", field.name, self.stored_type(&field.ty));
                self.line(&text);
            }
            self.line("}");
        }
        self.line("");

        let params: Vec<String> = node
            .fields
            .iter()
            .map(|f| format!("{}: {}", f.name, param_type(&f.ty)))
            .collect();
        self.line(&format!("impl {name} {{"));
        self.line(&format!(
            "    pub fn new({}) -> Self {{",
            params.join(", ")
        ));
        let inits: Vec<String> = node
            .fields
            .iter()
            .map(|field| match &field.ty {
                FieldType::Category(other) if self.is_boxed(other) => {
                    format!("{0}: Box::new({0})", field.name)
                }
                _ => field.name.clone(),
            })
            .collect();
        let body = inits.join(", ");
        if inits.is_empty() {
            self.line(&format!("        {name} {{}}"));
        } else if body.len() <= STRUCT_LIT_WIDTH {
            self.line(&format!("        {name} {{ {body} }}"));
        } else {
            self.line(&format!("        {name} {{"));
            for init in &inits {
                self.line(&format!("            {init},"));
            }
            self.line("        }");
        }
        self.line("    }");
        self.line("");
        self.line(&format!(
            "    pub fn accept<R, V: {visitor}<R> + ?Sized>(&self, visitor: &mut V) -> R {{"
        ));
        self.line(&format!(
            "        visitor.{}(self)",
            visit_method(name, &base)
        ));
        self.line("    }");
        self.line("}");
        self.line("");

        self.line(&format!("impl From<{name}> for {base} {{"));
        self.line(&format!("    fn from(node: {name}) -> Self {{"));
        self.line(&format!("        {base}::{name}(node)"));
        self.line("    }");
        self.line("}");
    }
}

/// Constructor argument for a field of a leaf node.
fn leaf_value(ty: &FieldType) -> String {
    match ty {
        FieldType::Category(other) => format!("{other}::leaf()"),
        FieldType::Token => "Token::eof(0, 0)".to_owned(),
        FieldType::Object => "LiteralValue::Nil".to_owned(),
        FieldType::Str => "String::new()".to_owned(),
        FieldType::Bool => "false".to_owned(),
        FieldType::Number => "0.0".to_owned(),
    }
}

/// Type used for constructor parameters and unboxed fields.
fn param_type(ty: &FieldType) -> &str {
    match ty {
        FieldType::Category(name) => name,
        FieldType::Token => "Token",
        FieldType::Object => "LiteralValue",
        FieldType::Str => "String",
        FieldType::Bool => "bool",
        FieldType::Number => "f64",
    }
}

/// Type as spelled in the node table.
fn declared_type(ty: &FieldType) -> &str {
    match ty {
        FieldType::Category(name) => name,
        FieldType::Token => "Token",
        FieldType::Object => "Object",
        FieldType::Str => "String",
        FieldType::Bool => "Boolean",
        FieldType::Number => "Number",
    }
}

#[cfg(test)]
mod tests;
