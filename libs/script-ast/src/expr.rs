//! Expression nodes.
//!
//! Statements only need an expression's canonical text, so the expression
//! tree is deliberately small: variables, constants, calls and operators.
//! Every variant renders through [`std::fmt::Display`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::span::Span;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Variable(Ident),
    Constant(Literal),
    Call {
        receiver: Option<Box<Expr>>,
        method: String,
        args: Vec<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Not(Box<Expr>),
    Paren(Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Variable(Ident::new(name))
    }

    pub fn int(value: i64) -> Self {
        Expr::Constant(Literal::Integer(value))
    }

    pub fn float(value: f64) -> Self {
        Expr::Constant(Literal::Float(value))
    }

    pub fn bool(value: bool) -> Self {
        Expr::Constant(Literal::Boolean(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::Constant(Literal::String(value.into()))
    }

    pub fn null() -> Self {
        Expr::Constant(Literal::Null)
    }

    /// Call without an explicit receiver, e.g. `y()`.
    pub fn call(method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            receiver: None,
            method: method.into(),
            args,
        }
    }

    /// Call on a receiver, e.g. `list.add(1)`.
    pub fn method_call(receiver: Expr, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            receiver: Some(Box::new(receiver)),
            method: method.into(),
            args,
        }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn not(expr: Expr) -> Self {
        Expr::Not(Box::new(expr))
    }

    pub fn paren(expr: Expr) -> Self {
        Expr::Paren(Box::new(expr))
    }

    /// Canonical source text of this expression.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Variable(ident) => write!(f, "{ident}"),
            Expr::Constant(literal) => write!(f, "{literal}"),
            Expr::Call {
                receiver,
                method,
                args,
            } => {
                if let Some(receiver) = receiver {
                    write!(f, "{receiver}.")?;
                }
                write!(f, "{method}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
            Expr::Binary { op, left, right } => write!(f, "{left} {op} {right}"),
            Expr::Not(expr) => write!(f, "!{expr}"),
            Expr::Paren(expr) => write!(f, "({expr})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            span: Span::default(),
        }
    }

    pub fn with_span(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => {
                f.write_str("\"")?;
                for c in s.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        _ => write!(f, "{c}")?,
                    }
                }
                f.write_str("\"")
            }
            Literal::Integer(v) => write!(f, "{v}"),
            // Debug keeps the fractional part on whole numbers ("1.0", not "1")
            Literal::Float(v) => write!(f, "{v:?}"),
            Literal::Boolean(v) => write!(f, "{v}"),
            Literal::Null => f.write_str("null"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Or,
    And,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An expression used where a boolean result is required, such as the
/// condition of an `if`.
///
/// The wrapper adds no text of its own: `BooleanExpr::new(x).text()` equals
/// `x.text()`.
///
/// # Examples
/// ```
/// use script_ast::{BinaryOp, BooleanExpr, Expr};
/// let cond = BooleanExpr::new(Expr::binary(BinaryOp::Lt, Expr::var("i"), Expr::int(10)));
/// assert_eq!(cond.text(), "i < 10");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanExpr {
    expr: Expr,
    #[serde(default)]
    span: Span,
}

impl BooleanExpr {
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

    /// Returns the literal value when the condition is a boolean constant,
    /// looking through parentheses.
    pub fn constant_value(&self) -> Option<bool> {
        let mut expr = &self.expr;
        while let Expr::Paren(inner) = expr {
            expr = inner;
        }
        match expr {
            Expr::Constant(Literal::Boolean(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn text(&self) -> String {
        self.expr.to_string()
    }
}

impl From<Expr> for BooleanExpr {
    fn from(expr: Expr) -> Self {
        BooleanExpr::new(expr)
    }
}

impl fmt::Display for BooleanExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_text_joins_arguments() {
        let call = Expr::method_call(Expr::var("list"), "add", vec![Expr::int(1), Expr::var("x")]);
        assert_eq!(call.text(), "list.add(1, x)");
        assert_eq!(Expr::call("y", vec![]).text(), "y()");
    }

    #[test]
    fn literal_text() {
        assert_eq!(Expr::float(1.0).text(), "1.0");
        assert_eq!(Expr::float(2.5).text(), "2.5");
        assert_eq!(Expr::null().text(), "null");
        assert_eq!(Expr::string("say \"hi\"").text(), r#""say \"hi\"""#);
    }

    #[test]
    fn operators_render_with_spaces() {
        let expr = Expr::not(Expr::paren(Expr::binary(
            BinaryOp::And,
            Expr::var("a"),
            Expr::binary(BinaryOp::Ge, Expr::var("b"), Expr::int(2)),
        )));
        assert_eq!(expr.text(), "!(a && b >= 2)");
    }

    #[test]
    fn boolean_expr_is_transparent() {
        let cond = BooleanExpr::new(Expr::var("x")).with_span(Span::new(4, 5));
        assert_eq!(cond.text(), "x");
        assert_eq!(cond.span(), Span::new(4, 5));
        assert_eq!(cond.constant_value(), None);
    }

    #[test]
    fn ident_span_does_not_change_text() {
        let ident = Ident::with_span("count", Span::new(8, 13));
        assert_eq!(ident.span, Span::new(8, 13));
        assert_eq!(Expr::Variable(ident).text(), Expr::var("count").text());
    }

    #[test]
    fn constant_value_looks_through_parens() {
        let cond = BooleanExpr::new(Expr::paren(Expr::paren(Expr::bool(false))));
        assert_eq!(cond.constant_value(), Some(false));
        assert_eq!(BooleanExpr::from(Expr::int(1)).constant_value(), None);
    }
}
