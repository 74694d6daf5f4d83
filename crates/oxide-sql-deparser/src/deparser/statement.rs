//! The statement-level capability reached from sub-selects.

use super::{table_qualifier, ExpressionDeparser, SqlBuffer};
use crate::ast::{PlainSelect, SelectBody, SelectItem, Table, WithItem};
use crate::error::Result;

/// Renders query bodies for the expression deparser.
///
/// Both methods receive the calling [`ExpressionDeparser`] and must write
/// into the buffer they are given; expressions inside the query go back
/// through `expr`.
pub trait StatementDeparser {
    /// Appends a query body (`SELECT ...`, `... UNION ...`).
    ///
    /// # Errors
    ///
    /// Implementations report failures as
    /// [`DeparseError::Statement`](crate::DeparseError::Statement).
    fn deparse_select_body(
        &self,
        body: &SelectBody,
        expr: &ExpressionDeparser<'_>,
        out: &mut SqlBuffer,
    ) -> Result<()>;

    /// Appends one WITH item (`name AS (...)`).
    ///
    /// # Errors
    ///
    /// Implementations report failures as
    /// [`DeparseError::Statement`](crate::DeparseError::Statement).
    fn deparse_with_item(
        &self,
        item: &WithItem,
        expr: &ExpressionDeparser<'_>,
        out: &mut SqlBuffer,
    ) -> Result<()>;
}

/// Built-in renderer for the select bodies the tree can carry.
///
/// Used whenever no other [`StatementDeparser`] is configured.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlainSelectDeparser;

impl PlainSelectDeparser {
    pub(super) fn plain(
        select: &PlainSelect,
        expr: &ExpressionDeparser<'_>,
        out: &mut SqlBuffer,
    ) -> Result<()> {
        out.push("SELECT ");
        if select.distinct {
            out.push("DISTINCT ");
        }
        for (i, item) in select.items.iter().enumerate() {
            out.push_sep(i, ", ");
            match item {
                SelectItem::AllColumns => out.push_char('*'),
                SelectItem::AllTableColumns(table) => {
                    out.push(&table_qualifier(table));
                    out.push(".*");
                }
                SelectItem::Expr { expr: item, alias } => {
                    expr.deparse(item, out)?;
                    if let Some(alias) = alias {
                        out.push(if alias.use_as { " AS " } else { " " });
                        out.push(&alias.name);
                    }
                }
            }
        }
        if let Some(table) = &select.from {
            out.push(" FROM ");
            write_table(table, out);
        }
        if let Some(condition) = &select.where_clause {
            out.push(" WHERE ");
            expr.deparse(condition, out)?;
        }
        if !select.group_by.is_empty() {
            out.push(" GROUP BY ");
            expr.comma_separated(&select.group_by, out)?;
        }
        if let Some(having) = &select.having {
            out.push(" HAVING ");
            expr.deparse(having, out)?;
        }
        if !select.order_by.is_empty() {
            out.push(" ORDER BY ");
            expr.order_by_list(&select.order_by, out)?;
        }
        if let Some(limit) = &select.limit {
            out.push(" LIMIT ");
            expr.deparse(limit, out)?;
        }
        Ok(())
    }
}

pub(super) fn write_table(table: &Table, out: &mut SqlBuffer) {
    out.push(&table.fully_qualified_name());
    if let Some(alias) = &table.alias {
        out.push(if alias.use_as { " AS " } else { " " });
        out.push(&alias.name);
    }
}

impl StatementDeparser for PlainSelectDeparser {
    fn deparse_select_body(
        &self,
        body: &SelectBody,
        expr: &ExpressionDeparser<'_>,
        out: &mut SqlBuffer,
    ) -> Result<()> {
        match body {
            SelectBody::Plain(select) => Self::plain(select, expr, out),
            SelectBody::SetOperation {
                op,
                all,
                left,
                right,
            } => {
                self.deparse_select_body(left, expr, out)?;
                out.push_char(' ');
                out.push(op.as_str());
                if *all {
                    out.push(" ALL");
                }
                out.push_char(' ');
                self.deparse_select_body(right, expr, out)
            }
        }
    }

    fn deparse_with_item(
        &self,
        item: &WithItem,
        expr: &ExpressionDeparser<'_>,
        out: &mut SqlBuffer,
    ) -> Result<()> {
        out.push(&item.name);
        if !item.columns.is_empty() {
            out.push(" (");
            for (i, column) in item.columns.iter().enumerate() {
                out.push_sep(i, ", ");
                out.push(column);
            }
            out.push_char(')');
        }
        out.push(" AS (");
        self.deparse_select_body(&item.body, expr, out)?;
        out.push_char(')');
        Ok(())
    }
}
