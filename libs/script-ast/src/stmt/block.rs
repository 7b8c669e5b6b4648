use config::constants::TextConfig;
use serde::{Deserialize, Serialize};

use super::{release, Statement, StmtRef};
use crate::span::Span;
use crate::visitor::StatementVisitor;

/// A `{ ... }` block. Renders as `{ a; b }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "BlockRepr")]
pub struct BlockStatement {
    statements: Vec<StmtRef>,
    span: Span,
}

impl BlockStatement {
    pub fn new(statements: Vec<StmtRef>) -> Self {
        Self {
            statements: statements.into_iter().map(Statement::canonical).collect(),
            span: Span::default(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn push(&mut self, stmt: StmtRef) {
        self.statements.push(Statement::canonical(stmt));
    }

    pub fn statements(&self) -> &[StmtRef] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// True when the block holds no statements. The block itself is still a
    /// non-empty statement.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn accept<V: StatementVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_block(self);
    }

    pub fn text(&self) -> String {
        let config = TextConfig::default();
        let mut out = String::with_capacity(config.initial_capacity);
        self.write_text(&mut out, &config);
        out
    }

    pub(crate) fn write_text(&self, out: &mut String, config: &TextConfig) {
        out.push_str("{ ");
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                out.push_str("; ");
            }
            stmt.write_text(out, config);
        }
        out.push_str(" }");
    }
}

impl BlockStatement {
    pub(super) fn detach_children(&mut self, pending: &mut Vec<StmtRef>) {
        pending.append(&mut self.statements);
    }
}

impl Drop for BlockStatement {
    fn drop(&mut self) {
        if !self.statements.is_empty() {
            release(std::mem::take(&mut self.statements));
        }
    }
}

#[derive(Deserialize)]
struct BlockRepr {
    #[serde(default)]
    statements: Vec<StmtRef>,
    #[serde(default)]
    span: Span,
}

impl From<BlockRepr> for BlockStatement {
    fn from(repr: BlockRepr) -> Self {
        BlockStatement::new(repr.statements).with_span(repr.span)
    }
}
