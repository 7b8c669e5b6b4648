//! # Statement Nodes
//!
//! Statements form a closed sum type. Every variant shares one capability
//! surface: an emptiness check, canonical text reconstruction and visitor
//! acceptance. Children are held as [`StmtRef`] so sub-trees built
//! independently can be handed to a parent without copying.
//!
//! ## Canonical empty statement
//!
//! "No statement here" is represented by a single process-wide instance
//! returned from [`Statement::empty`]. Every slot that accepts a statement
//! canonicalizes empty statements to that instance, so pointer identity can
//! be relied on anywhere in a tree.
//!
//! ```rust
//! use std::sync::Arc;
//! use script_ast::{BooleanExpr, Expr, IfStatement, Statement};
//!
//! let stmt = IfStatement::new(
//!     BooleanExpr::new(Expr::var("x")),
//!     Statement::expression(Expr::call("y", vec![])),
//!     None,
//! )?;
//! assert!(Arc::ptr_eq(stmt.else_branch(), &Statement::empty()));
//! assert_eq!(stmt.text(), "if (x) y()");
//! # Ok::<(), script_ast::AstError>(())
//! ```

use std::fmt;
use std::sync::{Arc, OnceLock};

use config::constants::TextConfig;
use serde::{Deserialize, Serialize};
use stacker::maybe_grow;

use crate::error::AstError;
use crate::expr::{BooleanExpr, Expr};
use crate::span::Span;
use crate::visitor::StatementVisitor;

mod block;
mod if_statement;
mod simple;

pub use block::BlockStatement;
pub use if_statement::IfStatement;
pub use simple::{ExpressionStatement, ReturnStatement};

/// Shared reference to a statement node.
pub type StmtRef = Arc<Statement>;

static EMPTY: OnceLock<StmtRef> = OnceLock::new();

/// A statement node: one of a closed set of executable units with no value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    If(IfStatement),
    Block(BlockStatement),
    Expression(ExpressionStatement),
    Return(ReturnStatement),
    Empty(EmptyStatement),
}

/// Payload of the canonical empty statement.
///
/// Only this crate can create one; use [`Statement::empty`] to obtain the
/// shared instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyStatement {
    #[serde(skip)]
    _private: (),
}

impl EmptyStatement {
    pub fn accept<V: StatementVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_empty(self);
    }
}

impl Statement {
    /// Returns the shared empty statement.
    pub fn empty() -> StmtRef {
        Arc::clone(EMPTY.get_or_init(|| Arc::new(Statement::Empty(EmptyStatement { _private: () }))))
    }

    /// Replaces any empty statement with the shared instance.
    pub fn canonical(stmt: StmtRef) -> StmtRef {
        if stmt.is_empty() {
            Self::empty()
        } else {
            stmt
        }
    }

    pub fn expression(expr: Expr) -> StmtRef {
        Statement::Expression(ExpressionStatement::new(expr)).shared()
    }

    pub fn returning(value: Option<Expr>) -> StmtRef {
        Statement::Return(ReturnStatement::new(value)).shared()
    }

    pub fn block(statements: Vec<StmtRef>) -> StmtRef {
        Statement::Block(BlockStatement::new(statements)).shared()
    }

    pub fn conditional(
        condition: impl Into<Option<BooleanExpr>>,
        then_branch: impl Into<Option<StmtRef>>,
        else_branch: impl Into<Option<StmtRef>>,
    ) -> Result<StmtRef, AstError> {
        IfStatement::new(condition, then_branch, else_branch).map(|s| Statement::If(s).shared())
    }

    /// Wraps this statement for use as a child of another node.
    pub fn shared(self) -> StmtRef {
        Statement::canonical(Arc::new(self))
    }

    /// True only for the empty statement. A block with no statements and a
    /// conditional with trivial branches are not empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Statement::Empty(_))
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Statement::Block(_))
    }

    pub fn span(&self) -> Span {
        match self {
            Statement::If(s) => s.span(),
            Statement::Block(s) => s.span(),
            Statement::Expression(s) => s.span(),
            Statement::Return(s) => s.span(),
            Statement::Empty(_) => Span::default(),
        }
    }

    pub fn as_if(&self) -> Option<&IfStatement> {
        match self {
            Statement::If(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_if_mut(&mut self) -> Option<&mut IfStatement> {
        match self {
            Statement::If(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_block(&self) -> Option<&BlockStatement> {
        match self {
            Statement::Block(s) => Some(s),
            _ => None,
        }
    }

    /// Dispatches to the visitor method for this statement's variant.
    pub fn accept<V: StatementVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Statement::If(s) => s.accept(visitor),
            Statement::Block(s) => s.accept(visitor),
            Statement::Expression(s) => s.accept(visitor),
            Statement::Return(s) => s.accept(visitor),
            Statement::Empty(s) => s.accept(visitor),
        }
    }

    /// Canonical source text of this statement, without a trailing
    /// terminator.
    pub fn text(&self) -> String {
        self.text_with(&TextConfig::default())
    }

    pub fn text_with(&self, config: &TextConfig) -> String {
        let mut out = String::with_capacity(config.initial_capacity);
        self.write_text(&mut out, config);
        out
    }

    /// Moves this node's children onto `pending`, leaving empty statements
    /// behind.
    fn detach_children(&mut self, pending: &mut Vec<StmtRef>) {
        match self {
            Statement::If(s) => s.detach_children(pending),
            Statement::Block(s) => s.detach_children(pending),
            Statement::Expression(_) | Statement::Return(_) | Statement::Empty(_) => {}
        }
    }

    pub(crate) fn write_text(&self, out: &mut String, config: &TextConfig) {
        maybe_grow(config.red_zone_bytes, config.stack_growth_bytes, || match self {
            Statement::If(s) => s.write_text(out, config),
            Statement::Block(s) => s.write_text(out, config),
            Statement::Expression(s) => s.write_text(out),
            Statement::Return(s) => s.write_text(out),
            Statement::Empty(_) => {}
        })
    }
}

/// Drops a set of detached children iteratively.
///
/// Each node whose last reference is released here has its own children
/// moved onto the worklist first, so dropping it never recurses more than
/// one level however deep the tree is.
pub(crate) fn release(children: Vec<StmtRef>) {
    let mut pending = children;
    while let Some(stmt) = pending.pop() {
        if let Some(mut node) = Arc::into_inner(stmt) {
            node.detach_children(&mut pending);
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl From<IfStatement> for Statement {
    fn from(stmt: IfStatement) -> Self {
        Statement::If(stmt)
    }
}

impl From<BlockStatement> for Statement {
    fn from(stmt: BlockStatement) -> Self {
        Statement::Block(stmt)
    }
}

impl From<ExpressionStatement> for Statement {
    fn from(stmt: ExpressionStatement) -> Self {
        Statement::Expression(stmt)
    }
}

impl From<ReturnStatement> for Statement {
    fn from(stmt: ReturnStatement) -> Self {
        Statement::Return(stmt)
    }
}

#[cfg(test)]
mod tests;
