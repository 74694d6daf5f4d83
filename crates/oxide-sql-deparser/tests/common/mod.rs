#![allow(dead_code)]

use std::cell::RefCell;

use oxide_sql_deparser::ast::{
    Expr, ExpressionList, ItemsList, PlainSelect, SelectBody, SelectItem, SubSelect, Table,
    WithItem,
};
use oxide_sql_deparser::{
    DeparseError, ExpressionDeparser, PlainSelectDeparser, Result, SqlBuffer, StatementDeparser,
};

pub fn deparse(expr: &Expr) -> String {
    ExpressionDeparser::new()
        .deparse_to_string(expr)
        .unwrap_or_else(|e| panic!("Failed to deparse: {expr:?}\nError: {e}"))
}

pub fn deparse_with(expr: &Expr, statements: &dyn StatementDeparser) -> String {
    ExpressionDeparser::new()
        .with_statement_deparser(statements)
        .deparse_to_string(expr)
        .unwrap_or_else(|e| panic!("Failed to deparse: {expr:?}\nError: {e}"))
}

pub fn deparse_items(items: &ItemsList) -> String {
    let mut out = SqlBuffer::new();
    ExpressionDeparser::new()
        .deparse_items(items, &mut out)
        .unwrap_or_else(|e| panic!("Failed to deparse: {items:?}\nError: {e}"));
    out.into_string()
}

pub fn list(exprs: Vec<Expr>) -> ExpressionList {
    ExpressionList::new(exprs)
}

/// `SELECT <column> FROM <table>` as a bracketed sub-select.
pub fn select_column(column: &str, table: &str) -> SubSelect {
    SubSelect::new(
        PlainSelect::new(vec![SelectItem::from(Expr::column(column))])
            .from_table(Table::new(table)),
    )
}

/// Delegates to the built-in renderer and records what it was handed.
#[derive(Default)]
pub struct RecordingStatements {
    pub bodies: RefCell<Vec<SelectBody>>,
    pub with_items: RefCell<Vec<String>>,
}

impl StatementDeparser for RecordingStatements {
    fn deparse_select_body(
        &self,
        body: &SelectBody,
        expr: &ExpressionDeparser<'_>,
        out: &mut SqlBuffer,
    ) -> Result<()> {
        self.bodies.borrow_mut().push(body.clone());
        PlainSelectDeparser.deparse_select_body(body, expr, out)
    }

    fn deparse_with_item(
        &self,
        item: &WithItem,
        expr: &ExpressionDeparser<'_>,
        out: &mut SqlBuffer,
    ) -> Result<()> {
        self.with_items.borrow_mut().push(item.name.clone());
        PlainSelectDeparser.deparse_with_item(item, expr, out)
    }
}

/// Writes a marker, then fails.
pub struct FailingStatements;

impl StatementDeparser for FailingStatements {
    fn deparse_select_body(
        &self,
        _body: &SelectBody,
        _expr: &ExpressionDeparser<'_>,
        out: &mut SqlBuffer,
    ) -> Result<()> {
        out.push("<partial>");
        Err(DeparseError::Statement(String::from("unsupported body")))
    }

    fn deparse_with_item(
        &self,
        _item: &WithItem,
        _expr: &ExpressionDeparser<'_>,
        _out: &mut SqlBuffer,
    ) -> Result<()> {
        Err(DeparseError::Statement(String::from("unsupported WITH item")))
    }
}
