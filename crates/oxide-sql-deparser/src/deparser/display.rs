//! `Display` for tree types: the text the default deparser produces.

use core::fmt;

use super::statement::{write_table, PlainSelectDeparser};
use super::{write_column, write_literal, write_parameter, ExpressionDeparser, SqlBuffer};
use super::StatementDeparser as _;
use crate::ast::{
    AnalyticExpression, CaseExpression, Column, Expr, ExpressionList, Function, GroupConcat,
    ItemsList, KeepExpression, Literal, OrderByElement, Parameter, PlainSelect, SelectBody,
    SubSelect, Table, WindowElement, WindowFrame, WindowOffset, WithItem,
};
use crate::error::Result;

fn render_with<F>(f: &mut fmt::Formatter<'_>, render: F) -> fmt::Result
where
    F: FnOnce(&ExpressionDeparser<'_>, &mut SqlBuffer) -> Result<()>,
{
    let mut out = SqlBuffer::new();
    render(&ExpressionDeparser::new(), &mut out).map_err(|_| fmt::Error)?;
    f.write_str(out.as_str())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_with(f, |deparser, out| deparser.deparse(self, out))
    }
}

impl fmt::Display for ItemsList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_with(f, |deparser, out| deparser.deparse_items(self, out))
    }
}

impl fmt::Display for ExpressionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_with(f, |deparser, out| deparser.expression_list(self, true, out))
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_with(f, |deparser, out| deparser.function(self, out))
    }
}

impl fmt::Display for AnalyticExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_with(f, |deparser, out| deparser.analytic(self, out))
    }
}

impl fmt::Display for GroupConcat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_with(f, |deparser, out| deparser.group_concat(self, out))
    }
}

impl fmt::Display for CaseExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_with(f, |deparser, out| deparser.case(self, out))
    }
}

impl fmt::Display for KeepExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_with(f, |deparser, out| deparser.keep(self, out))
    }
}

impl fmt::Display for OrderByElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_with(f, |deparser, out| {
            deparser.order_by_deparser().deparse_element(self, deparser, out)
        })
    }
}

impl fmt::Display for SubSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_with(f, |deparser, out| deparser.sub_select(self, out))
    }
}

impl fmt::Display for SelectBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_with(f, |deparser, out| {
            PlainSelectDeparser.deparse_select_body(self, deparser, out)
        })
    }
}

impl fmt::Display for PlainSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_with(f, |deparser, out| PlainSelectDeparser::plain(self, deparser, out))
    }
}

impl fmt::Display for WithItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_with(f, |deparser, out| {
            PlainSelectDeparser.deparse_with_item(self, deparser, out)
        })
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = SqlBuffer::new();
        write_column(self, &mut out);
        f.write_str(out.as_str())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = SqlBuffer::new();
        write_table(self, &mut out);
        f.write_str(out.as_str())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_with(f, |_, out| write_literal(self, out))
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_with(f, |_, out| write_parameter(self, out))
    }
}

impl fmt::Display for WindowOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundedPreceding => f.write_str("UNBOUNDED PRECEDING"),
            Self::UnboundedFollowing => f.write_str("UNBOUNDED FOLLOWING"),
            Self::CurrentRow => f.write_str("CURRENT ROW"),
            Self::Preceding(expr) => write!(f, "{expr} PRECEDING"),
            Self::Following(expr) => write!(f, "{expr} FOLLOWING"),
        }
    }
}

impl fmt::Display for WindowElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.frame {
            WindowFrame::Single(offset) => write!(f, "{} {offset}", self.kind.as_str()),
            WindowFrame::Between { start, end } => {
                write!(f, "{} BETWEEN {start} AND {end}", self.kind.as_str())
            }
        }
    }
}
