use serde::{Deserialize, Serialize};

use crate::expr::Expr;
use crate::span::Span;
use crate::visitor::StatementVisitor;

/// An expression evaluated for its side effects, e.g. `y()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    expr: Expr,
    #[serde(default)]
    span: Span,
}

impl ExpressionStatement {
    pub fn new(expr: Expr) -> Self {
        Self {
            expr,
            span: Span::default(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn accept<V: StatementVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_expression(self);
    }

    pub(crate) fn write_text(&self, out: &mut String) {
        out.push_str(&self.expr.text());
    }
}

/// `return` with an optional value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStatement {
    value: Option<Expr>,
    #[serde(default)]
    span: Span,
}

impl ReturnStatement {
    pub fn new(value: Option<Expr>) -> Self {
        Self {
            value,
            span: Span::default(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn value(&self) -> Option<&Expr> {
        self.value.as_ref()
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn accept<V: StatementVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_return(self);
    }

    pub(crate) fn write_text(&self, out: &mut String) {
        out.push_str("return");
        if let Some(value) = &self.value {
            out.push(' ');
            out.push_str(&value.text());
        }
    }
}
