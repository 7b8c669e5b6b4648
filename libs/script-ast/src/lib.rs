//! # Script AST Crate
//!
//! Statement tree for a script language front end. Nodes are built by a
//! tree builder, walked by any number of passes through the visitor
//! protocol, and turned back into canonical source text on demand.
//!
//! ## Architecture
//!
//! ```text
//! tree builder → Statement / IfStatement nodes → accept(visitor) → passes
//!                                              └→ text()        → unparse
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use script_ast::{print, validate, BooleanExpr, Expr, Statement};
//!
//! let stmt = Statement::conditional(
//!     BooleanExpr::new(Expr::var("x")),
//!     Statement::block(vec![Statement::expression(Expr::call("y", vec![]))]),
//!     Statement::expression(Expr::call("z", vec![])),
//! )?;
//!
//! assert_eq!(stmt.text(), "if (x) { y() } else z()");
//! assert_eq!(print(&[stmt.clone()]), "if (x) { y() } else z();");
//! assert!(validate(&[stmt]).is_empty());
//! # Ok::<(), script_ast::AstError>(())
//! ```
//!
//! ## Design Principles
//!
//! - **Closed statement set**: `Statement` is a sum type; passes dispatch on it
//!   through [`StatementVisitor`]
//! - **No absent children**: a missing else-branch is the shared empty
//!   statement, never `None`
//! - **Pure text**: `text()` depends only on current field values

pub mod diagnostic;
pub mod error;
pub mod expr;
pub mod printer;
pub mod span;
pub mod stmt;
pub mod validate;
pub mod visitor;

// Re-exports for convenience
pub use diagnostic::{Diagnostic, Severity};
pub use error::AstError;
pub use expr::{BinaryOp, BooleanExpr, Expr, Ident, Literal};
pub use printer::{print, Printer};
pub use span::Span;
pub use stmt::{
    BlockStatement, EmptyStatement, ExpressionStatement, IfStatement, ReturnStatement, Statement,
    StmtRef,
};
pub use validate::{validate, Validator};
pub use visitor::StatementVisitor;
