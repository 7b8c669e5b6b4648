use config::constants::TextConfig;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{release, Statement, StmtRef};
use crate::error::AstError;
use crate::expr::BooleanExpr;
use crate::span::Span;
use crate::visitor::StatementVisitor;

const CONDITION: &str = "condition";
const THEN_BRANCH: &str = "then_branch";

/// An `if (condition) then_branch else else_branch` statement.
///
/// The condition and then-branch are always present. The else-branch is
/// always present too: a missing else is stored as the shared
/// [`Statement::empty`] instance.
///
/// # Examples
/// ```
/// use script_ast::{BooleanExpr, Expr, IfStatement, Statement};
///
/// let stmt = IfStatement::new(
///     BooleanExpr::new(Expr::var("x")),
///     Statement::expression(Expr::call("y", vec![])),
///     Statement::expression(Expr::call("z", vec![])),
/// )?;
/// assert_eq!(stmt.text(), "if (x) y(); else z()");
/// # Ok::<(), script_ast::AstError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IfStatementRepr")]
pub struct IfStatement {
    condition: BooleanExpr,
    then_branch: StmtRef,
    else_branch: StmtRef,
    span: Span,
}

impl IfStatement {
    /// Builds a conditional node.
    ///
    /// Fails with [`AstError::InvalidArgument`] when `condition` or
    /// `then_branch` is `None`. A `None` else-branch becomes the empty
    /// statement.
    pub fn new(
        condition: impl Into<Option<BooleanExpr>>,
        then_branch: impl Into<Option<StmtRef>>,
        else_branch: impl Into<Option<StmtRef>>,
    ) -> Result<Self, AstError> {
        let condition = condition.into().ok_or_else(|| AstError::missing(CONDITION))?;
        let then_branch = then_branch.into().ok_or_else(|| AstError::missing(THEN_BRANCH))?;
        Ok(Self {
            condition,
            then_branch: Statement::canonical(then_branch),
            else_branch: else_or_empty(else_branch.into()),
            span: Span::default(),
        })
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn condition(&self) -> &BooleanExpr {
        &self.condition
    }

    pub fn then_branch(&self) -> &StmtRef {
        &self.then_branch
    }

    pub fn else_branch(&self) -> &StmtRef {
        &self.else_branch
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// True when the else-branch is anything but the empty statement.
    pub fn has_else(&self) -> bool {
        !self.else_branch.is_empty()
    }

    pub fn set_condition(&mut self, condition: impl Into<Option<BooleanExpr>>) -> Result<(), AstError> {
        let condition = condition.into().ok_or_else(|| AstError::missing(CONDITION))?;
        trace!(field = CONDITION, text = %condition, "replacing child");
        self.condition = condition;
        Ok(())
    }

    pub fn set_then_branch(&mut self, stmt: impl Into<Option<StmtRef>>) -> Result<(), AstError> {
        let stmt = stmt.into().ok_or_else(|| AstError::missing(THEN_BRANCH))?;
        trace!(field = THEN_BRANCH, "replacing child");
        self.then_branch = Statement::canonical(stmt);
        Ok(())
    }

    /// Replaces the else-branch. `None` installs the empty statement.
    pub fn set_else_branch(&mut self, stmt: impl Into<Option<StmtRef>>) {
        let stmt = else_or_empty(stmt.into());
        trace!(field = "else_branch", empty = stmt.is_empty(), "replacing child");
        self.else_branch = stmt;
    }

    pub fn set_span(&mut self, span: Span) {
        self.span = span;
    }

    /// Hands this node to [`StatementVisitor::visit_if`].
    pub fn accept<V: StatementVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_if(self);
    }

    /// Canonical source text, e.g. `if (x) y(); else z()`.
    ///
    /// A `;` separates a non-block then-branch from a following `else`.
    /// Nothing is appended after the last branch.
    pub fn text(&self) -> String {
        self.text_with(&TextConfig::default())
    }

    pub fn text_with(&self, config: &TextConfig) -> String {
        let mut out = String::with_capacity(config.initial_capacity);
        self.write_text(&mut out, config);
        out
    }

    pub(crate) fn write_text(&self, out: &mut String, config: &TextConfig) {
        out.push_str("if (");
        out.push_str(&self.condition.text());
        out.push_str(") ");
        self.then_branch.write_text(out, config);
        if self.else_branch.is_empty() {
            return;
        }
        if !self.then_branch.is_block() {
            out.push(';');
        }
        out.push_str(" else ");
        self.else_branch.write_text(out, config);
    }
}

impl IfStatement {
    pub(super) fn detach_children(&mut self, pending: &mut Vec<StmtRef>) {
        pending.push(std::mem::replace(&mut self.then_branch, Statement::empty()));
        pending.push(std::mem::replace(&mut self.else_branch, Statement::empty()));
    }
}

impl Drop for IfStatement {
    fn drop(&mut self) {
        if self.then_branch.is_empty() && self.else_branch.is_empty() {
            return;
        }
        let mut children = Vec::with_capacity(2);
        self.detach_children(&mut children);
        release(children);
    }
}

impl std::fmt::Display for IfStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

fn else_or_empty(stmt: Option<StmtRef>) -> StmtRef {
    stmt.map(Statement::canonical).unwrap_or_else(Statement::empty)
}

/// Wire shape accepted when deserializing; routed through
/// [`IfStatement::new`] so a decoded node obeys the same rules as a built one.
#[derive(Deserialize)]
struct IfStatementRepr {
    #[serde(default)]
    condition: Option<BooleanExpr>,
    #[serde(default)]
    then_branch: Option<StmtRef>,
    #[serde(default)]
    else_branch: Option<StmtRef>,
    #[serde(default)]
    span: Span,
}

impl TryFrom<IfStatementRepr> for IfStatement {
    type Error = AstError;

    fn try_from(repr: IfStatementRepr) -> Result<Self, Self::Error> {
        Ok(IfStatement::new(repr.condition, repr.then_branch, repr.else_branch)?.with_span(repr.span))
    }
}
