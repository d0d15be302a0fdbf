use pretty_assertions::assert_eq;

use super::*;
use crate::lox_node_table;

fn source_of<'a>(artifacts: &'a [Artifact], file: &str) -> &'a str {
    &artifacts
        .iter()
        .find(|a| a.file_name == file)
        .unwrap()
        .source
}

#[test]
fn snake_case_splits_on_case_changes() {
    assert_eq!(snake_case("Expr"), "expr");
    assert_eq!(snake_case("BinaryExpr"), "binary_expr");
    assert_eq!(snake_case("Stmt2Node"), "stmt2_node");
    assert_eq!(snake_case("already_snake"), "already_snake");
}

#[test]
fn visit_methods_combine_node_and_base() {
    assert_eq!(visit_method("Binary", "Expr"), "visit_binary_expr");
    assert_eq!(visit_method("Literal", "Expr"), "visit_literal_expr");
    assert_eq!(visit_method("Print", "Stmt"), "visit_print_stmt");
}

#[test]
fn one_artifact_per_category_in_declared_order() {
    let artifacts = generate(&lox_node_table()).unwrap();
    let names: Vec<_> = artifacts.iter().map(|a| a.file_name.as_str()).collect();
    assert_eq!(names, ["expr.rs", "stmt.rs"]);
}

#[test]
fn generation_is_deterministic() {
    let first = generate(&lox_node_table()).unwrap();
    let second = generate(&lox_node_table()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn variants_and_visit_methods_follow_table_order() {
    let artifacts = generate(&lox_node_table()).unwrap();
    let expr = source_of(&artifacts, "expr.rs");

    let variants = [
        "Unary(Unary)",
        "Binary(Binary)",
        "Grouping(Grouping)",
        "Literal(Literal)",
    ];
    let positions: Vec<usize> = variants
        .iter()
        .map(|variant| expr.find(variant).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    assert!(expr.contains("fn visit_binary_expr(&mut self, expr: &Binary) -> R;"));
    assert!(expr.contains("Expr::Binary(node) => visitor.visit_binary_expr(node),"));
}

#[test]
fn recursive_fields_are_boxed_and_constructors_are_positional() {
    let artifacts = generate(&lox_node_table()).unwrap();
    let expr = source_of(&artifacts, "expr.rs");

    assert!(expr.contains("/// Declared as `Binary(Expr left, Token operator, Expr right)`."));
    assert!(expr.contains(
        "    pub left: Box<Expr>,\n    pub operator: Token,\n    pub right: Box<Expr>,\n"
    ));
    assert!(expr.contains("pub fn new(left: Expr, operator: Token, right: Expr) -> Self {"));
    assert!(expr.contains("            left: Box::new(left),"));
    assert!(expr.contains("    pub value: LiteralValue,"));
}

#[test]
fn fields_of_an_unrelated_category_are_stored_inline() {
    let artifacts = generate(&lox_node_table()).unwrap();
    let stmt = source_of(&artifacts, "stmt.rs");

    assert!(stmt.starts_with("// @generated by lox-astgen"));
    assert!(stmt.contains("use crate::ast::Expr;\n"));
    assert!(stmt.contains("    pub expression: Expr,\n"));
    assert!(!stmt.contains("Box<"));
}

#[test]
fn mutually_recursive_categories_box_each_other() {
    let table = NodeTable::new()
        .category("Expr", &[("Block", &["Stmt body"]), ("Literal", &["Object value"])])
        .category("Stmt", &[("Eval", &["Expr value"]), ("Empty", &[])]);
    let artifacts = generate(&table).unwrap();
    let expr = source_of(&artifacts, "expr.rs");
    let stmt = source_of(&artifacts, "stmt.rs");

    assert!(expr.contains("pub body: Box<Stmt>,"));
    assert!(stmt.contains("pub value: Box<Expr>,"));

    // Children of the other category are dropped on a grown stack.
    assert!(expr.contains(
        "                let body = mem::replace(&mut *node.body, Stmt::leaf());\n\
         \x20               with_stack(move || drop(body));\n"
    ));
    assert!(expr.contains("    fn take_children(&mut self) {\n"));
    assert!(expr.contains("        Expr::Literal(Literal::new(LiteralValue::Nil))\n"));
    assert!(stmt.contains("        Stmt::Empty(Empty::new())\n"));
}

#[test]
fn boxing_follows_cycles_through_several_categories() {
    let table = NodeTable::new()
        .category("Expr", &[("Wrap", &["Stmt stmt"]), ("Count", &["Number n"])])
        .category("Stmt", &[("Hold", &["Decl decl"]), ("Skip", &[])])
        .category("Decl", &[("Back", &["Expr expr"]), ("Blank", &[])]);
    let artifacts = generate(&table).unwrap();

    assert!(source_of(&artifacts, "expr.rs").contains("pub stmt: Box<Stmt>,"));
    assert!(source_of(&artifacts, "stmt.rs").contains("pub decl: Box<Decl>,"));
    assert!(source_of(&artifacts, "decl.rs").contains("pub expr: Box<Expr>,"));
}

#[test]
fn recursive_category_tears_down_with_a_worklist() {
    let artifacts = generate(&lox_node_table()).unwrap();
    let expr = source_of(&artifacts, "expr.rs");

    assert!(expr.contains("/// A node in the `Expr` syntax tree.\npub enum Expr {"));
    assert!(expr.contains("impl Drop for Expr {"));
    assert!(expr.contains(
        "        let mut pending = Vec::new();\n\
         \x20       self.take_children(&mut pending);\n\
         \x20       while let Some(mut node) = pending.pop() {\n\
         \x20           node.take_children(&mut pending);\n\
         \x20       }\n"
    ));
    assert!(expr.contains("    fn take_children(&mut self, pending: &mut Vec<Expr>) {"));
    assert!(expr.contains("pending.push(mem::replace(&mut *node.left, Expr::leaf()));"));
    assert!(expr.contains("            Expr::Literal(_) => {}\n"));
    assert!(expr.contains("        Expr::Literal(Literal::new(LiteralValue::Nil))\n"));
}

#[test]
fn recursive_category_traits_grow_the_stack() {
    let artifacts = generate(&lox_node_table()).unwrap();
    let expr = source_of(&artifacts, "expr.rs");

    assert!(expr.starts_with(
        "// @generated by lox-astgen from the `Expr` node table. Do not edit by hand.\n\n\
         use std::{fmt, mem};\n\n\
         use lox_stack::with_stack;\n\n\
         use crate::{LiteralValue, Token};\n"
    ));
    for header in [
        "impl Clone for Expr {",
        "impl PartialEq for Expr {",
        "impl fmt::Debug for Expr {",
    ] {
        assert!(expr.contains(header), "missing `{header}`");
    }
    assert_eq!(expr.matches("with_stack(|| match").count(), 3);
    assert!(expr.contains(
        "            (Expr::Unary(a), Expr::Unary(b)) => a == b,\n            (Expr::Binary"
    ));
    assert!(expr.contains("            _ => false,\n"));
    assert!(expr.contains(
        "Expr::Grouping(node) => f.debug_tuple(\"Grouping\").field(node).finish(),"
    ));
}

#[test]
fn categories_without_boxes_keep_derived_traits() {
    let artifacts = generate(&lox_node_table()).unwrap();
    let stmt = source_of(&artifacts, "stmt.rs");

    assert!(stmt.contains("#[derive(Clone, Debug, PartialEq)]\npub enum Stmt {"));
    assert!(!stmt.contains("impl Drop"));
    assert!(!stmt.contains("with_stack"));
    assert!(!stmt.contains("fn leaf()"));
}

#[test]
fn short_constructors_fit_on_one_line() {
    let artifacts = generate(&lox_node_table()).unwrap();
    let expr = source_of(&artifacts, "expr.rs");
    let stmt = source_of(&artifacts, "stmt.rs");

    assert!(expr.contains(
        "pub fn new(value: LiteralValue) -> Self {\n        Literal { value }\n    }"
    ));
    assert!(stmt.contains("        Print { expression }\n"));
    // A boxed field makes the body too wide for one line.
    assert!(expr.contains(
        "        Grouping {\n            expression: Box::new(expression),\n        }\n"
    ));
}

#[test]
fn boxed_category_without_a_leaf_is_rejected() {
    let table = NodeTable::new().category(
        "Expr",
        &[("Neg", &["Expr operand"]), ("Pair", &["Expr a", "Expr b"])],
    );
    assert_eq!(
        generate(&table),
        Err(GenerationConfigError::NoLeafNode {
            category: "Expr".into()
        })
    );
}

#[test]
fn leaf_only_category_imports_only_what_it_uses() {
    let table = NodeTable::new().category(
        "Value",
        &[("Flag", &["Boolean on"]), ("Count", &["Number n", "String label"])],
    );
    let artifacts = generate(&table).unwrap();
    let source = source_of(&artifacts, "value.rs");

    assert!(!source.contains("use "));
    assert!(source.contains("pub on: bool,"));
    assert!(source.contains("pub fn new(n: f64, label: String) -> Self {"));
    assert!(source.contains("pub trait ValueVisitor<R> {"));
    assert!(source.contains("fn visit_count_value(&mut self, value: &Count) -> R;"));
}

#[test]
fn node_without_fields_gets_an_empty_struct() {
    let table = NodeTable::new().category("Expr", &[("Nil", &[])]);
    let artifacts = generate(&table).unwrap();
    let source = source_of(&artifacts, "expr.rs");

    assert!(source.contains("pub struct Nil {}\n"));
    assert!(source.contains("pub fn new() -> Self {\n        Nil {}\n    }"));
}

#[test]
fn invalid_table_renders_nothing() {
    let table = NodeTable::new().category("Expr", &[("Literal", &["Thing value"])]);
    assert_eq!(
        generate(&table),
        Err(GenerationConfigError::UnknownFieldType {
            category: "Expr".into(),
            node: "Literal".into(),
            field: "value".into(),
            ty: "Thing".into(),
        })
    );
}
