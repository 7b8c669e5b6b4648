use config::constants::MAX_DIAGNOSTICS;
use tracing::debug;

use crate::diagnostic::Diagnostic;
use crate::expr::BooleanExpr;
use crate::stmt::{IfStatement, Statement, StmtRef};
use crate::visitor::{walk_if, walk_statements, StatementVisitor};

/// Walks every statement and collects structural warnings.
pub fn validate(statements: &[StmtRef]) -> Vec<Diagnostic> {
    let mut validator = Validator::default();
    walk_statements(&mut validator, statements);
    validator.finish()
}

#[derive(Debug, Default)]
pub struct Validator {
    diagnostics: Vec<Diagnostic>,
    dropped: usize,
}

impl Validator {
    pub fn finish(self) -> Vec<Diagnostic> {
        if self.dropped > 0 {
            debug!(dropped = self.dropped, limit = MAX_DIAGNOSTICS, "diagnostic limit reached");
        }
        self.diagnostics
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        if self.diagnostics.len() >= MAX_DIAGNOSTICS {
            self.dropped += 1;
            return;
        }
        debug!(%diagnostic, "validation finding");
        self.diagnostics.push(diagnostic);
    }
}

impl StatementVisitor for Validator {
    fn visit_if(&mut self, stmt: &IfStatement) {
        if stmt.then_branch().is_empty() {
            self.report(
                Diagnostic::warning("empty then-branch", stmt.span())
                    .with_hint("nothing runs when the condition holds"),
            );
        }
        if let Statement::Block(block) = stmt.else_branch().as_ref() {
            if block.is_empty() {
                self.report(
                    Diagnostic::warning("empty else block", block.span())
                        .with_hint("drop the `else` clause"),
                );
            }
        }
        walk_if(self, stmt);
    }

    fn visit_condition(&mut self, condition: &BooleanExpr) {
        if let Some(value) = condition.constant_value() {
            let taken = if value { "then" } else { "else" };
            self.report(
                Diagnostic::warning(format!("constant condition `{value}`"), condition.span())
                    .with_hint(format!("only the {taken}-branch can run")),
            );
        }
    }
}
