// @generated by lox-astgen from the `Expr` node table. Do not edit by hand.

use std::{fmt, mem};

use lox_stack::with_stack;

use crate::{LiteralValue, Token};

/// A node in the `Expr` syntax tree.
pub enum Expr {
    Unary(Unary),
    Binary(Binary),
    Grouping(Grouping),
    Literal(Literal),
}

impl Expr {
    /// Dispatch to the `ExprVisitor` method for this variant.
    pub fn accept<R, V: ExprVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        match self {
            Expr::Unary(node) => visitor.visit_unary_expr(node),
            Expr::Binary(node) => visitor.visit_binary_expr(node),
            Expr::Grouping(node) => visitor.visit_grouping_expr(node),
            Expr::Literal(node) => visitor.visit_literal_expr(node),
        }
    }

    /// A value with no boxed children, left in place of a moved-out child.
    pub(crate) fn leaf() -> Self {
        Expr::Literal(Literal::new(LiteralValue::Nil))
    }

    /// Move every boxed child out, leaving leaves behind. `Expr` children
    /// go to `pending`; others are dropped here.
    fn take_children(&mut self, pending: &mut Vec<Expr>) {
        match self {
            Expr::Unary(node) => {
                pending.push(mem::replace(&mut *node.right, Expr::leaf()));
            }
            Expr::Binary(node) => {
                pending.push(mem::replace(&mut *node.left, Expr::leaf()));
                pending.push(mem::replace(&mut *node.right, Expr::leaf()));
            }
            Expr::Grouping(node) => {
                pending.push(mem::replace(&mut *node.expression, Expr::leaf()));
            }
            Expr::Literal(_) => {}
        }
    }
}

/// Tears the tree down without recursing once per level, so dropping a
/// deeply nested tree cannot overflow the stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.take_children(&mut pending);
        }
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        with_stack(|| match self {
            Expr::Unary(node) => Expr::Unary(node.clone()),
            Expr::Binary(node) => Expr::Binary(node.clone()),
            Expr::Grouping(node) => Expr::Grouping(node.clone()),
            Expr::Literal(node) => Expr::Literal(node.clone()),
        })
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        with_stack(|| match (self, other) {
            (Expr::Unary(a), Expr::Unary(b)) => a == b,
            (Expr::Binary(a), Expr::Binary(b)) => a == b,
            (Expr::Grouping(a), Expr::Grouping(b)) => a == b,
            (Expr::Literal(a), Expr::Literal(b)) => a == b,
            _ => false,
        })
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_stack(|| match self {
            Expr::Unary(node) => f.debug_tuple("Unary").field(node).finish(),
            Expr::Binary(node) => f.debug_tuple("Binary").field(node).finish(),
            Expr::Grouping(node) => f.debug_tuple("Grouping").field(node).finish(),
            Expr::Literal(node) => f.debug_tuple("Literal").field(node).finish(),
        })
    }
}

/// An operation over every `Expr` variant.
pub trait ExprVisitor<R> {
    fn visit_unary_expr(&mut self, expr: &Unary) -> R;
    fn visit_binary_expr(&mut self, expr: &Binary) -> R;
    fn visit_grouping_expr(&mut self, expr: &Grouping) -> R;
    fn visit_literal_expr(&mut self, expr: &Literal) -> R;
}

/// Declared as `Unary(Token operator, Expr right)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Unary {
    pub operator: Token,
    pub right: Box<Expr>,
}

impl Unary {
    pub fn new(operator: Token, right: Expr) -> Self {
        Unary {
            operator,
            right: Box::new(right),
        }
    }

    pub fn accept<R, V: ExprVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        visitor.visit_unary_expr(self)
    }
}

impl From<Unary> for Expr {
    fn from(node: Unary) -> Self {
        Expr::Unary(node)
    }
}

/// Declared as `Binary(Expr left, Token operator, Expr right)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Binary {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

impl Binary {
    pub fn new(left: Expr, operator: Token, right: Expr) -> Self {
        Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn accept<R, V: ExprVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        visitor.visit_binary_expr(self)
    }
}

impl From<Binary> for Expr {
    fn from(node: Binary) -> Self {
        Expr::Binary(node)
    }
}

/// Declared as `Grouping(Expr expression)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grouping {
    pub expression: Box<Expr>,
}

impl Grouping {
    pub fn new(expression: Expr) -> Self {
        Grouping {
            expression: Box::new(expression),
        }
    }

    pub fn accept<R, V: ExprVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        visitor.visit_grouping_expr(self)
    }
}

impl From<Grouping> for Expr {
    fn from(node: Grouping) -> Self {
        Expr::Grouping(node)
    }
}

/// Declared as `Literal(Object value)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Literal {
    pub value: LiteralValue,
}

impl Literal {
    pub fn new(value: LiteralValue) -> Self {
        Literal { value }
    }

    pub fn accept<R, V: ExprVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        visitor.visit_literal_expr(self)
    }
}

impl From<Literal> for Expr {
    fn from(node: Literal) -> Self {
        Expr::Literal(node)
    }
}
