//! # Statement Visitors
//!
//! Double dispatch over the statement tree. A node's `accept` calls exactly
//! one `visit_*` method on the visitor, chosen by the node's own variant.
//! The default method bodies walk into children through the `walk_*`
//! functions, so a pass only overrides the methods it cares about and calls
//! the matching `walk_*` to keep descending.
//!
//! ```rust
//! use script_ast::visitor::{walk_if, StatementVisitor};
//! use script_ast::{BooleanExpr, Expr, IfStatement, Statement};
//!
//! #[derive(Default)]
//! struct CountIfs(usize);
//!
//! impl StatementVisitor for CountIfs {
//!     fn visit_if(&mut self, stmt: &IfStatement) {
//!         self.0 += 1;
//!         walk_if(self, stmt);
//!     }
//! }
//!
//! let inner = Statement::conditional(BooleanExpr::new(Expr::var("b")), Statement::expression(Expr::call("g", vec![])), None)?;
//! let outer = Statement::conditional(BooleanExpr::new(Expr::var("a")), Statement::expression(Expr::call("f", vec![])), inner)?;
//!
//! let mut counter = CountIfs::default();
//! outer.accept(&mut counter);
//! assert_eq!(counter.0, 2);
//! # Ok::<(), script_ast::AstError>(())
//! ```

use config::constants::TextConfig;
use stacker::maybe_grow;

use crate::expr::BooleanExpr;
use crate::stmt::{
    BlockStatement, EmptyStatement, ExpressionStatement, IfStatement, ReturnStatement, StmtRef,
};

pub trait StatementVisitor {
    fn visit_if(&mut self, stmt: &IfStatement) {
        walk_if(self, stmt);
    }

    fn visit_block(&mut self, stmt: &BlockStatement) {
        walk_block(self, stmt);
    }

    fn visit_expression(&mut self, _stmt: &ExpressionStatement) {}

    fn visit_return(&mut self, _stmt: &ReturnStatement) {}

    fn visit_empty(&mut self, _stmt: &EmptyStatement) {}

    /// Called by [`walk_if`] before descending into the branches.
    fn visit_condition(&mut self, _condition: &BooleanExpr) {}

    /// Sizes this visitor runs with. The `walk_*` helpers grow the stack by
    /// the same amounts that text rendering uses.
    fn config(&self) -> TextConfig {
        TextConfig::default()
    }
}

/// Visits the condition, then the then-branch, then the else-branch.
pub fn walk_if<V: StatementVisitor + ?Sized>(visitor: &mut V, stmt: &IfStatement) {
    let config = visitor.config();
    maybe_grow(config.red_zone_bytes, config.stack_growth_bytes, || {
        visitor.visit_condition(stmt.condition());
        stmt.then_branch().accept(visitor);
        stmt.else_branch().accept(visitor);
    })
}

pub fn walk_block<V: StatementVisitor + ?Sized>(visitor: &mut V, stmt: &BlockStatement) {
    let config = visitor.config();
    maybe_grow(config.red_zone_bytes, config.stack_growth_bytes, || {
        walk_statements(visitor, stmt.statements())
    })
}

/// Hands each statement to the visitor in order.
pub fn walk_statements<V: StatementVisitor + ?Sized>(visitor: &mut V, statements: &[StmtRef]) {
    for stmt in statements {
        stmt.accept(visitor);
    }
}
