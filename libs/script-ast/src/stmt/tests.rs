//! Tests for statement nodes and the conditional node's invariants.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::*;

fn cond(name: &str) -> BooleanExpr {
    BooleanExpr::new(Expr::var(name))
}

fn call(name: &str) -> StmtRef {
    Statement::expression(Expr::call(name, vec![]))
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

#[test]
fn new_rejects_missing_condition() {
    let err = IfStatement::new(None, call("y"), None).unwrap_err();
    assert_eq!(err, AstError::InvalidArgument { field: "condition" });
}

#[test]
fn new_rejects_missing_then_branch() {
    let err = IfStatement::new(cond("x"), None, call("z")).unwrap_err();
    assert_eq!(err, AstError::InvalidArgument { field: "then_branch" });
}

#[test]
fn new_normalizes_missing_else_to_shared_empty() {
    let stmt = IfStatement::new(cond("x"), call("y"), None).unwrap();
    assert!(stmt.else_branch().is_empty());
    assert!(Arc::ptr_eq(stmt.else_branch(), &Statement::empty()));
    assert!(!stmt.has_else());
}

#[test]
fn new_keeps_supplied_children_without_copying() {
    let then_branch = call("y");
    let stmt = IfStatement::new(cond("x"), Arc::clone(&then_branch), None).unwrap();
    assert!(Arc::ptr_eq(stmt.then_branch(), &then_branch));
}

// =============================================================================
// MUTATION
// =============================================================================

#[test]
fn failed_setters_leave_fields_untouched() {
    let mut stmt = IfStatement::new(cond("x"), call("y"), call("z")).unwrap();
    let before = stmt.clone();

    assert_eq!(
        stmt.set_condition(None),
        Err(AstError::InvalidArgument { field: "condition" })
    );
    assert_eq!(
        stmt.set_then_branch(None),
        Err(AstError::InvalidArgument { field: "then_branch" })
    );
    assert_eq!(stmt, before);
    assert_eq!(stmt.text(), "if (x) y(); else z()");
}

#[test]
fn setters_replace_children() {
    let mut stmt = IfStatement::new(cond("x"), call("y"), None).unwrap();
    stmt.set_condition(cond("ready")).unwrap();
    stmt.set_then_branch(Statement::block(vec![call("go")])).unwrap();
    stmt.set_else_branch(call("wait"));
    assert_eq!(stmt.text(), "if (ready) { go() } else wait()");
}

#[test]
fn clearing_else_installs_shared_empty() {
    let mut stmt = IfStatement::new(cond("x"), call("y"), call("z")).unwrap();
    assert!(stmt.has_else());

    stmt.set_else_branch(None);
    assert!(Arc::ptr_eq(stmt.else_branch(), &Statement::empty()));
    assert_eq!(stmt.text(), "if (x) y()");
}

#[test]
fn text_tracks_mutation() {
    let mut stmt = IfStatement::new(cond("x"), call("y"), None).unwrap();
    let first = stmt.text();
    stmt.set_else_branch(call("z"));
    assert_ne!(stmt.text(), first);
    assert_eq!(stmt.text(), "if (x) y(); else z()");
}

#[test]
fn nested_node_mutates_through_make_mut() {
    let mut outer = Statement::conditional(cond("a"), call("f"), None).unwrap();
    Arc::make_mut(&mut outer)
        .as_if_mut()
        .unwrap()
        .set_else_branch(call("g"));
    assert_eq!(outer.text(), "if (a) f(); else g()");
}

// =============================================================================
// EMPTY STATEMENT
// =============================================================================

#[test]
fn foreign_empty_statements_are_canonicalized() {
    let stray = Arc::new(Statement::Empty(match Statement::empty().as_ref() {
        Statement::Empty(e) => e.clone(),
        _ => unreachable!(),
    }));
    assert!(!Arc::ptr_eq(&stray, &Statement::empty()));

    let stmt = IfStatement::new(cond("x"), Arc::clone(&stray), Arc::clone(&stray)).unwrap();
    assert!(Arc::ptr_eq(stmt.then_branch(), &Statement::empty()));
    assert!(Arc::ptr_eq(stmt.else_branch(), &Statement::empty()));

    let block = BlockStatement::new(vec![stray]);
    assert!(Arc::ptr_eq(&block.statements()[0], &Statement::empty()));
}

#[test]
fn only_the_empty_statement_is_empty() {
    assert!(Statement::empty().is_empty());
    assert!(!Statement::block(vec![]).is_empty());
    assert!(!Statement::returning(None).is_empty());
    let trivial = Statement::conditional(cond("x"), Statement::empty(), None).unwrap();
    assert!(!trivial.is_empty());
    assert_eq!(Statement::empty().text(), "");
}

// =============================================================================
// TEXT
// =============================================================================

#[test]
fn block_text_joins_with_separators() {
    assert_eq!(Statement::block(vec![call("a"), call("b")]).text(), "{ a(); b() }");
    assert_eq!(Statement::block(vec![]).text(), "{  }");
}

#[test]
fn return_text() {
    assert_eq!(Statement::returning(None).text(), "return");
    assert_eq!(Statement::returning(Some(Expr::var("x"))).text(), "return x");
}

#[test]
fn text_is_idempotent() {
    let stmt = IfStatement::new(cond("x"), call("y"), call("z")).unwrap();
    assert_eq!(stmt.text(), stmt.text());
    assert_eq!(stmt.to_string(), stmt.text());
}

#[test]
fn else_branch_shape_is_not_inspected() {
    let stmt = IfStatement::new(cond("x"), Statement::block(vec![call("y")]), Statement::block(vec![call("z")])).unwrap();
    assert_eq!(stmt.text(), "if (x) { y() } else { z() }");

    let stmt = IfStatement::new(cond("x"), call("y"), Statement::block(vec![call("z")])).unwrap();
    assert_eq!(stmt.text(), "if (x) y(); else { z() }");
}

#[test]
fn nested_then_branch_conditional_gets_separator() {
    let inner = Statement::conditional(cond("b"), call("g"), None).unwrap();
    let outer = IfStatement::new(cond("a"), inner, call("h")).unwrap();
    assert_eq!(outer.text(), "if (a) if (b) g(); else h()");
}

#[test]
fn text_with_small_buffer_matches_default() {
    let config = TextConfig::new(1, 64 * 1024, 1024 * 1024).unwrap();
    let stmt = IfStatement::new(cond("x"), call("y"), call("z")).unwrap();
    assert_eq!(stmt.text_with(&config), stmt.text());
}

#[test]
fn deep_else_chain_renders_on_small_stack() {
    let depth = 2_000;
    let mut stmt = call("last");
    for i in 0..depth {
        stmt = Statement::conditional(cond(&format!("c{i}")), call("f"), stmt).unwrap();
    }

    let shared = Arc::clone(&stmt);
    let text = std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(move || shared.text())
        .unwrap()
        .join()
        .unwrap();

    assert!(text.starts_with(&format!("if (c{}) f(); else if (c{}) f();", depth - 1, depth - 2)));
    assert!(text.ends_with("if (c0) f(); else last()"));
    assert_eq!(text.matches(" else ").count(), depth);
}

#[test]
fn deep_trees_drop_on_small_stack() {
    std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(|| {
            let mut chain = call("last");
            for i in 0..200_000 {
                chain = Statement::conditional(cond(&format!("c{i}")), call("f"), chain).unwrap();
            }
            assert!(chain.as_if().unwrap().has_else());
            drop(chain);

            let mut nested = call("leaf");
            for _ in 0..200_000 {
                nested = Statement::block(vec![call("a"), nested]);
            }
            drop(nested);
        })
        .unwrap()
        .join()
        .unwrap();
}

#[test]
fn dropping_a_parent_keeps_shared_children_alive() {
    let shared = Statement::block(vec![call("y")]);
    let parent = Statement::conditional(cond("x"), Arc::clone(&shared), Arc::clone(&shared)).unwrap();
    assert_eq!(Arc::strong_count(&shared), 3);

    drop(parent);
    assert_eq!(Arc::strong_count(&shared), 1);
    assert_eq!(shared.text(), "{ y() }");
    assert!(Statement::empty().is_empty());
}

#[test]
fn set_span_updates_position_only() {
    let mut stmt = IfStatement::new(cond("x"), call("y"), None).unwrap().with_span(Span::new(0, 10));
    stmt.set_span(Span::new(4, 14));
    assert_eq!(stmt.span(), Span::new(4, 14));
    assert_eq!(Statement::If(stmt.clone()).span(), Span::new(4, 14));
    assert_eq!(stmt.text(), "if (x) y()");
}

#[test]
fn spans_are_reported_per_variant() {
    let span = Span::new(3, 9);
    let stmt = Statement::If(IfStatement::new(cond("x"), call("y"), None).unwrap().with_span(span));
    assert_eq!(stmt.span(), span);
    assert_eq!(Statement::empty().span(), Span::default());
    assert_eq!(
        Statement::from(ExpressionStatement::new(Expr::var("v")).with_span(span)).span(),
        span
    );
}
