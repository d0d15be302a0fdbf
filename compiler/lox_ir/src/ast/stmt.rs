// @generated by lox-astgen from the `Stmt` node table. Do not edit by hand.

use crate::ast::Expr;

/// A node in the `Stmt` syntax tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Expression(Expression),
    Print(Print),
}

impl Stmt {
    /// Dispatch to the `StmtVisitor` method for this variant.
    pub fn accept<R, V: StmtVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        match self {
            Stmt::Expression(node) => visitor.visit_expression_stmt(node),
            Stmt::Print(node) => visitor.visit_print_stmt(node),
        }
    }
}

/// An operation over every `Stmt` variant.
pub trait StmtVisitor<R> {
    fn visit_expression_stmt(&mut self, stmt: &Expression) -> R;
    fn visit_print_stmt(&mut self, stmt: &Print) -> R;
}

/// Declared as `Expression(Expr expression)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    pub expression: Expr,
}

impl Expression {
    pub fn new(expression: Expr) -> Self {
        Expression { expression }
    }

    pub fn accept<R, V: StmtVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        visitor.visit_expression_stmt(self)
    }
}

impl From<Expression> for Stmt {
    fn from(node: Expression) -> Self {
        Stmt::Expression(node)
    }
}

/// Declared as `Print(Expr expression)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Print {
    pub expression: Expr,
}

impl Print {
    pub fn new(expression: Expr) -> Self {
        Print { expression }
    }

    pub fn accept<R, V: StmtVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        visitor.visit_print_stmt(self)
    }
}

impl From<Print> for Stmt {
    fn from(node: Print) -> Self {
        Stmt::Print(node)
    }
}
