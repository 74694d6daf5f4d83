//! Expression deparsing.
//!
//! [`ExpressionDeparser`] turns an [`Expr`] tree back into SQL text. Each
//! node kind has exactly one rendering rule; the rules reproduce the forms
//! found in the wild (Oracle `(+)` joins, ODBC escapes, `ISNULL`, ...) rather
//! than normalising them.
//!
//! # Example
//!
//! ```rust
//! use oxide_sql_deparser::ast::{Expr, Function};
//! use oxide_sql_deparser::{ExpressionDeparser, SqlBuffer};
//!
//! let expr = Expr::from(Function::new("count").with_args(vec![Expr::column("a")]).distinct())
//!     .gt(Expr::long(1));
//!
//! let mut out = SqlBuffer::new();
//! ExpressionDeparser::new().deparse(&expr, &mut out).unwrap();
//! assert_eq!(out.as_str(), "count(DISTINCT a) > 1");
//! ```
//!
//! Sub-selects are handed to a [`StatementDeparser`]. Without one configured
//! the built-in [`PlainSelectDeparser`] is used.

mod buffer;
mod display;
mod items;
mod order_by;
mod statement;

use core::fmt::{self, Write as _};
use std::borrow::Cow;

use tracing::{debug, trace};

pub use buffer::SqlBuffer;
pub use order_by::OrderByDeparser;
pub use statement::{PlainSelectDeparser, StatementDeparser};

use crate::ast::{
    AnalyticExpression, CaseExpression, Column, ComparisonOperator, Expr, Function, GroupConcat,
    InOperand, KeepExpression, Literal, OracleHint, OracleJoin, OrderByElement, Parameter,
    SubSelect, Table,
};
use crate::error::Result;

const NOT: &str = "NOT ";
const ORACLE_JOIN_MARKER: &str = "(+)";

static DEFAULT_STATEMENTS: PlainSelectDeparser = PlainSelectDeparser;

/// Renders expression trees into an [`SqlBuffer`].
///
/// The deparser holds no per-call state and can be reused for any number of
/// trees and buffers.
#[derive(Clone, Copy)]
pub struct ExpressionDeparser<'a> {
    statements: Option<&'a dyn StatementDeparser>,
    order_by: OrderByDeparser,
}

impl<'a> ExpressionDeparser<'a> {
    /// Creates a deparser using the built-in statement deparser.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            statements: None,
            order_by: OrderByDeparser::new(),
        }
    }

    /// Routes sub-selects and WITH items through `statements`.
    #[must_use]
    pub fn with_statement_deparser(mut self, statements: &'a dyn StatementDeparser) -> Self {
        self.statements = Some(statements);
        self
    }

    /// Returns the configured statement deparser, if any.
    #[must_use]
    pub const fn statement_deparser(&self) -> Option<&'a dyn StatementDeparser> {
        self.statements
    }

    /// Replaces the statement deparser. `None` restores the built-in one.
    pub fn set_statement_deparser(&mut self, statements: Option<&'a dyn StatementDeparser>) {
        self.statements = statements;
    }

    /// Returns the order-by deparser used for analytic ORDER BY lists.
    #[must_use]
    pub const fn order_by_deparser(&self) -> &OrderByDeparser {
        &self.order_by
    }

    fn statements(&self) -> &'a dyn StatementDeparser {
        self.statements.unwrap_or(&DEFAULT_STATEMENTS)
    }

    /// Renders `expr` into a fresh string.
    ///
    /// # Errors
    ///
    /// Returns an error if a statement deparser fails on a sub-select.
    pub fn deparse_to_string(&self, expr: &Expr) -> Result<String> {
        let mut out = SqlBuffer::new();
        self.deparse(expr, &mut out)?;
        debug!(len = out.len(), "expression deparsed");
        Ok(out.into_string())
    }

    /// Appends the SQL text of `expr` to `out`.
    ///
    /// On error, whatever was appended before the failure stays in `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if a statement deparser fails on a sub-select.
    pub fn deparse(&self, expr: &Expr, out: &mut SqlBuffer) -> Result<()> {
        match expr {
            Expr::Binary {
                left,
                op,
                right,
                not,
            } => self.binary(left, op.as_str(), right, *not, out),
            Expr::Comparison {
                left,
                op,
                right,
                not,
                oracle_join,
            } => self.comparison(left, *op, right, *not, *oracle_join, out),
            Expr::Like {
                left,
                right,
                not,
                case_insensitive,
                escape,
            } => {
                let op = if *case_insensitive { "ILIKE" } else { "LIKE" };
                self.binary(left, op, right, *not, out)?;
                if let Some(escape) = escape {
                    out.push(" ESCAPE '");
                    out.push(escape);
                    out.push_char('\'');
                }
                Ok(())
            }
            Expr::Between {
                expr,
                start,
                end,
                not,
            } => {
                self.deparse(expr, out)?;
                if *not {
                    out.push(" NOT");
                }
                out.push(" BETWEEN ");
                self.deparse(start, out)?;
                out.push(" AND ");
                self.deparse(end, out)
            }
            Expr::In {
                left,
                right,
                not,
                oracle_join,
            } => {
                match left {
                    InOperand::Expr(left) => {
                        self.deparse(left, out)?;
                        if *oracle_join == OracleJoin::Right {
                            out.push(ORACLE_JOIN_MARKER);
                        }
                    }
                    InOperand::Items(items) => self.items(items, true, out)?,
                }
                if *not {
                    out.push(" NOT");
                }
                out.push(" IN ");
                self.items(right, true, out)
            }
            Expr::IsNull {
                expr,
                not,
                use_isnull,
            } => {
                self.deparse(expr, out)?;
                out.push(match (*use_isnull, *not) {
                    (true, true) => " NOT ISNULL",
                    (true, false) => " ISNULL",
                    (false, true) => " IS NOT NULL",
                    (false, false) => " IS NULL",
                });
                Ok(())
            }
            Expr::Exists { expr, not } => {
                out.push(if *not { "NOT EXISTS " } else { "EXISTS " });
                self.deparse(expr, out)
            }
            Expr::Not(expr) => {
                out.push(NOT);
                self.deparse(expr, out)
            }
            Expr::Signed { sign, expr } => {
                out.push(sign.as_str());
                self.deparse(expr, out)
            }
            Expr::Parenthesis { expr, not } => {
                if *not {
                    out.push(NOT);
                }
                out.push_char('(');
                self.deparse(expr, out)?;
                out.push_char(')');
                Ok(())
            }
            Expr::Case(case) => self.case(case, out),
            Expr::Function(function) => self.function(function, out),
            Expr::Analytic(analytic) => self.analytic(analytic, out),
            Expr::GroupConcat(group_concat) => self.group_concat(group_concat, out),
            Expr::Cast {
                expr,
                data_type,
                use_cast_keyword,
            } => {
                // The operand goes through its Display form, not through
                // this deparser's configuration.
                if *use_cast_keyword {
                    write!(out, "CAST({expr} AS {data_type})")?;
                } else {
                    write!(out, "{expr}::{data_type}")?;
                }
                Ok(())
            }
            Expr::Extract { field, expr } => {
                out.push("EXTRACT(");
                out.push(field);
                out.push(" FROM ");
                self.deparse(expr, out)?;
                out.push_char(')');
                Ok(())
            }
            Expr::Interval {
                parameter,
                interval_type,
            } => {
                out.push("INTERVAL ");
                out.push(parameter);
                if let Some(interval_type) = interval_type {
                    out.push_char(' ');
                    out.push(interval_type);
                }
                Ok(())
            }
            Expr::Row { name, exprs } => {
                if let Some(name) = name {
                    out.push(name);
                }
                out.push_char('(');
                self.comma_separated(exprs, out)?;
                out.push_char(')');
                Ok(())
            }
            Expr::ValueList(list) => self.expression_list(list, true, out),
            Expr::Column(column) => {
                write_column(column, out);
                Ok(())
            }
            Expr::Json { column, path } => {
                write_column(column, out);
                for element in path {
                    out.push(element.operator.as_str());
                    out.push(&element.key);
                }
                Ok(())
            }
            Expr::Literal(literal) => write_literal(literal, out),
            Expr::Parameter(parameter) => write_parameter(parameter, out),
            Expr::UserVariable { name, double_at } => {
                out.push(if *double_at { "@@" } else { "@" });
                out.push(name);
                Ok(())
            }
            Expr::TimeKey(key) => {
                out.push(key);
                Ok(())
            }
            Expr::SubSelect(sub_select) => self.sub_select(sub_select, out),
            Expr::AllComparison(sub_select) => {
                out.push("ALL ");
                self.sub_select(sub_select, out)
            }
            Expr::AnyComparison { kind, sub_select } => {
                out.push(kind.as_str());
                out.push_char(' ');
                self.sub_select(sub_select, out)
            }
            Expr::Hierarchical {
                start_with,
                connect_by,
                no_cycle,
            } => {
                if let Some(start_with) = start_with {
                    out.push(" START WITH ");
                    self.deparse(start_with, out)?;
                }
                out.push(" CONNECT BY ");
                if *no_cycle {
                    out.push("NOCYCLE ");
                }
                self.deparse(connect_by, out)
            }
            Expr::Hint(hint) => {
                write_hint(hint, out);
                Ok(())
            }
        }
    }

    fn binary(
        &self,
        left: &Expr,
        op: &str,
        right: &Expr,
        not: bool,
        out: &mut SqlBuffer,
    ) -> Result<()> {
        if not {
            out.push(NOT);
        }
        self.deparse(left, out)?;
        out.push_char(' ');
        out.push(op);
        out.push_char(' ');
        self.deparse(right, out)
    }

    fn comparison(
        &self,
        left: &Expr,
        op: ComparisonOperator,
        right: &Expr,
        not: bool,
        oracle_join: OracleJoin,
        out: &mut SqlBuffer,
    ) -> Result<()> {
        if not {
            out.push(NOT);
        }
        self.deparse(left, out)?;
        if oracle_join == OracleJoin::Right {
            out.push(ORACLE_JOIN_MARKER);
        }
        out.push_char(' ');
        out.push(op.as_str());
        out.push_char(' ');
        self.deparse(right, out)?;
        if oracle_join == OracleJoin::Left {
            out.push(ORACLE_JOIN_MARKER);
        }
        Ok(())
    }

    fn case(&self, case: &CaseExpression, out: &mut SqlBuffer) -> Result<()> {
        out.push("CASE ");
        if let Some(switch) = &case.switch {
            self.deparse(switch, out)?;
            out.push_char(' ');
        }
        for clause in &case.when_clauses {
            out.push("WHEN ");
            self.deparse(&clause.when, out)?;
            out.push(" THEN ");
            self.deparse(&clause.then, out)?;
            out.push_char(' ');
        }
        if let Some(else_expr) = &case.else_expr {
            out.push("ELSE ");
            self.deparse(else_expr, out)?;
            out.push_char(' ');
        }
        out.push("END");
        Ok(())
    }

    fn function(&self, function: &Function, out: &mut SqlBuffer) -> Result<()> {
        if function.escaped {
            out.push("{fn ");
        }
        out.push(&function.name);
        match (&function.parameters, function.quantifier) {
            (None, _) if function.all_columns => out.push("(*)"),
            (None, _) => out.push("()"),
            (Some(parameters), Some(quantifier)) => {
                // The quantifier owns the parentheses, so the list is
                // rendered bare.
                out.push_char('(');
                out.push(quantifier.as_str());
                out.push_char(' ');
                self.expression_list(parameters, false, out)?;
                out.push_char(')');
            }
            (Some(parameters), None) => self.expression_list(parameters, true, out)?,
        }
        if let Some(attribute) = &function.attribute {
            out.push_char('.');
            out.push(attribute);
        }
        if let Some(keep) = &function.keep {
            out.push_char(' ');
            self.keep(keep, out)?;
        }
        if function.escaped {
            out.push_char('}');
        }
        Ok(())
    }

    fn keep(&self, keep: &KeepExpression, out: &mut SqlBuffer) -> Result<()> {
        out.push("KEEP (");
        out.push(&keep.name);
        out.push(if keep.first { " FIRST" } else { " LAST" });
        if !keep.order_by.is_empty() {
            out.push(" ORDER BY ");
            self.order_by_list(&keep.order_by, out)?;
        }
        out.push_char(')');
        Ok(())
    }

    fn analytic(&self, analytic: &AnalyticExpression, out: &mut SqlBuffer) -> Result<()> {
        out.push(&analytic.name);
        out.push_char('(');
        if analytic.distinct {
            out.push("DISTINCT ");
        }
        if let Some(expression) = &analytic.expression {
            self.deparse(expression, out)?;
            if let Some(offset) = &analytic.offset {
                out.push(", ");
                self.deparse(offset, out)?;
                if let Some(default_value) = &analytic.default_value {
                    out.push(", ");
                    self.deparse(default_value, out)?;
                }
            }
        } else if analytic.all_columns {
            out.push_char('*');
        }
        if analytic.ignore_nulls {
            out.push(" IGNORE NULLS");
        }
        out.push(") ");
        if let Some(keep) = &analytic.keep {
            self.keep(keep, out)?;
            out.push_char(' ');
        }
        out.push(analytic.kind.as_str());
        out.push(" (");
        if !analytic.partition_by.is_empty() {
            out.push("PARTITION BY ");
            self.comma_separated(&analytic.partition_by, out)?;
            out.push_char(' ');
        }
        if !analytic.order_by.is_empty() {
            out.push("ORDER BY ");
            self.order_by_list(&analytic.order_by, out)?;
            // A frame is only written when ORDER BY is present.
            if let Some(window) = &analytic.window {
                out.push_char(' ');
                write!(out, "{window}")?;
            }
        }
        out.push_char(')');
        Ok(())
    }

    fn group_concat(&self, group_concat: &GroupConcat, out: &mut SqlBuffer) -> Result<()> {
        out.push("GROUP_CONCAT(");
        if group_concat.distinct {
            out.push("DISTINCT ");
        }
        self.expression_list(&group_concat.expressions, false, out)?;
        if !group_concat.order_by.is_empty() {
            out.push(" ORDER BY ");
            self.order_by_list(&group_concat.order_by, out)?;
        }
        if let Some(separator) = &group_concat.separator {
            out.push(" SEPARATOR '");
            out.push(separator);
            out.push_char('\'');
        }
        out.push_char(')');
        Ok(())
    }

    fn order_by_list(&self, elements: &[OrderByElement], out: &mut SqlBuffer) -> Result<()> {
        for (i, element) in elements.iter().enumerate() {
            out.push_sep(i, ", ");
            self.order_by.deparse_element(element, self, out)?;
        }
        Ok(())
    }

    fn sub_select(&self, sub_select: &SubSelect, out: &mut SqlBuffer) -> Result<()> {
        if sub_select.use_brackets {
            out.push_char('(');
        }
        let statements = self.statements();
        if !sub_select.with_items.is_empty() {
            out.push("WITH ");
            for (i, item) in sub_select.with_items.iter().enumerate() {
                out.push_sep(i, ", ");
                trace!(name = %item.name, "handing WITH item to statement deparser");
                statements.deparse_with_item(item, self, out)?;
            }
            out.push_char(' ');
        }
        trace!("handing sub-select body to statement deparser");
        statements.deparse_select_body(&sub_select.body, self, out)?;
        if sub_select.use_brackets {
            out.push_char(')');
        }
        Ok(())
    }
}

impl Default for ExpressionDeparser<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ExpressionDeparser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpressionDeparser")
            .field("custom_statements", &self.statements.is_some())
            .field("order_by", &self.order_by)
            .finish()
    }
}

/// The prefix a table contributes to its columns: its alias, else its
/// fully qualified name.
fn table_qualifier(table: &Table) -> Cow<'_, str> {
    match &table.alias {
        Some(alias) => Cow::Borrowed(&alias.name),
        None => Cow::Owned(table.fully_qualified_name()),
    }
}

fn write_column(column: &Column, out: &mut SqlBuffer) {
    if let Some(table) = &column.table {
        let qualifier = table_qualifier(table);
        if !qualifier.is_empty() {
            out.push(&qualifier);
            out.push_char('.');
        }
    }
    out.push(&column.name);
}

fn write_literal(literal: &Literal, out: &mut SqlBuffer) -> Result<()> {
    match literal {
        Literal::Long(text) | Literal::Double(text) | Literal::Hex(text) => out.push(text),
        Literal::String(value) => {
            if let Some(prefix) = &value.prefix {
                out.push(prefix);
            }
            out.push_char('\'');
            out.push(&value.value);
            out.push_char('\'');
        }
        Literal::Date(date) => write!(out, "{{d '{date}'}}")?,
        Literal::Time(time) => write!(out, "{{t '{time}'}}")?,
        Literal::Timestamp(timestamp) => write!(out, "{{ts '{timestamp}'}}")?,
        Literal::DateTime { kind, value } => {
            out.push(kind.as_str());
            out.push(" '");
            out.push(value);
            out.push_char('\'');
        }
        Literal::Null => out.push("NULL"),
    }
    Ok(())
}

fn write_parameter(parameter: &Parameter, out: &mut SqlBuffer) -> Result<()> {
    match parameter {
        Parameter::Positional { index } => {
            out.push_char('?');
            if let Some(index) = index {
                write!(out, "{index}")?;
            }
        }
        Parameter::Named { name, type_suffix } => {
            out.push_char(':');
            out.push(name);
            if let Some(type_suffix) = type_suffix {
                out.push(type_suffix);
            }
        }
        Parameter::NumericBind(id) => write!(out, ":{id}")?,
        Parameter::Markup { type_suffix } => {
            out.push_char('?');
            if let Some(type_suffix) = type_suffix {
                out.push(type_suffix);
            }
        }
    }
    Ok(())
}

fn write_hint(hint: &OracleHint, out: &mut SqlBuffer) {
    if hint.single_line {
        out.push("--+ ");
        out.push(&hint.value);
        out.push_char('\n');
    } else {
        out.push("/*+ ");
        out.push(&hint.value);
        out.push(" */");
    }
}
