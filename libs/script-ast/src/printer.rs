//! Source printer for statement lists.
//!
//! Node text never carries a trailing terminator; terminating a top-level
//! statement is the printer's job. Each statement goes on its own line,
//! followed by `;` unless it is a block. An empty statement prints as a
//! bare `;`.

use config::constants::TextConfig;
use tracing::debug;

use crate::stmt::{
    BlockStatement, EmptyStatement, ExpressionStatement, IfStatement, ReturnStatement, StmtRef,
};
use crate::visitor::{walk_statements, StatementVisitor};

pub fn print(statements: &[StmtRef]) -> String {
    let mut printer = Printer::default();
    walk_statements(&mut printer, statements);
    printer.finish()
}

#[derive(Debug, Default)]
pub struct Printer {
    config: TextConfig,
    lines: Vec<String>,
}

impl Printer {
    pub fn with_config(config: TextConfig) -> Self {
        Self {
            config,
            lines: Vec::new(),
        }
    }

    pub fn finish(self) -> String {
        debug!(lines = self.lines.len(), "printed statements");
        self.lines.join("\n")
    }

    fn terminated(&mut self, mut text: String) {
        text.push(';');
        self.lines.push(text);
    }
}

impl StatementVisitor for Printer {
    fn visit_if(&mut self, stmt: &IfStatement) {
        self.terminated(stmt.text_with(&self.config));
    }

    fn visit_block(&mut self, stmt: &BlockStatement) {
        let mut text = String::with_capacity(self.config.initial_capacity);
        stmt.write_text(&mut text, &self.config);
        self.lines.push(text);
    }

    fn visit_expression(&mut self, stmt: &ExpressionStatement) {
        self.terminated(stmt.expr().text());
    }

    fn visit_return(&mut self, stmt: &ReturnStatement) {
        let mut text = String::new();
        stmt.write_text(&mut text);
        self.terminated(text);
    }

    fn visit_empty(&mut self, _stmt: &EmptyStatement) {
        self.lines.push(";".to_string());
    }

    fn config(&self) -> TextConfig {
        self.config
    }
}
