//! Prefix-form rendering of syntax trees.

use crate::ast::{
    Binary, Expr, ExprVisitor, Expression, Grouping, Literal, Print, Stmt, StmtVisitor, Unary,
};

/// Renders trees as fully parenthesized prefix expressions.
///
/// `-123 * (45.67)` prints as `(* (- 123) (group 45.67))`; a print
/// statement as `(print <expr>)` and an expression statement as `(; <expr>)`.
/// Strings print without quotes, matching their literal value.
#[derive(Copy, Clone, Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn new() -> Self {
        AstPrinter
    }

    pub fn print_expr(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    pub fn print_stmt(&mut self, stmt: &Stmt) -> String {
        stmt.accept(self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = String::with_capacity(name.len() + 2);
        out.push('(');
        out.push_str(name);
        for expr in exprs {
            out.push(' ');
            out.push_str(&lox_stack::with_stack(|| expr.accept(self)));
        }
        out.push(')');
        out
    }
}

impl ExprVisitor<String> for AstPrinter {
    fn visit_unary_expr(&mut self, expr: &Unary) -> String {
        self.parenthesize(&expr.operator.lexeme, &[&expr.right])
    }

    fn visit_binary_expr(&mut self, expr: &Binary) -> String {
        self.parenthesize(&expr.operator.lexeme, &[&expr.left, &expr.right])
    }

    fn visit_grouping_expr(&mut self, expr: &Grouping) -> String {
        self.parenthesize("group", &[&expr.expression])
    }

    fn visit_literal_expr(&mut self, expr: &Literal) -> String {
        expr.value.to_string()
    }
}

impl StmtVisitor<String> for AstPrinter {
    fn visit_expression_stmt(&mut self, stmt: &Expression) -> String {
        self.parenthesize(";", &[&stmt.expression])
    }

    fn visit_print_stmt(&mut self, stmt: &Print) -> String {
        self.parenthesize("print", &[&stmt.expression])
    }
}
