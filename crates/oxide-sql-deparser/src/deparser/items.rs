//! Item lists: function arguments, IN lists and row values.
//!
//! Whether a list is wrapped in parentheses is decided by the caller and
//! passed down as `brackets`. It only applies to the list being rendered;
//! nested lists choose their own.

use super::{ExpressionDeparser, SqlBuffer};
use crate::ast::{Expr, ExpressionList, ItemsList};
use crate::error::Result;

impl ExpressionDeparser<'_> {
    /// Appends an item list, bracketed.
    ///
    /// # Errors
    ///
    /// Returns an error if a statement deparser fails on a sub-select item.
    pub fn deparse_items(&self, items: &ItemsList, out: &mut SqlBuffer) -> Result<()> {
        self.items(items, true, out)
    }

    /// Appends an expression list, with or without surrounding parentheses.
    ///
    /// # Errors
    ///
    /// Returns an error if a statement deparser fails on a sub-select
    /// element.
    pub fn deparse_expression_list(
        &self,
        list: &ExpressionList,
        brackets: bool,
        out: &mut SqlBuffer,
    ) -> Result<()> {
        self.expression_list(list, brackets, out)
    }

    pub(super) fn items(&self, items: &ItemsList, brackets: bool, out: &mut SqlBuffer) -> Result<()> {
        match items {
            ItemsList::Expressions(list) => self.expression_list(list, brackets, out),
            ItemsList::Multi(lists) => {
                for (i, list) in lists.iter().enumerate() {
                    out.push_sep(i, ", ");
                    self.expression_list(list, brackets, out)?;
                }
                Ok(())
            }
            ItemsList::SubSelect(sub_select) => self.sub_select(sub_select, out),
        }
    }

    pub(super) fn expression_list(
        &self,
        list: &ExpressionList,
        brackets: bool,
        out: &mut SqlBuffer,
    ) -> Result<()> {
        if brackets {
            out.push_char('(');
        }
        self.comma_separated(&list.expressions, out)?;
        if brackets {
            out.push_char(')');
        }
        Ok(())
    }

    pub(super) fn comma_separated(&self, exprs: &[Expr], out: &mut SqlBuffer) -> Result<()> {
        for (i, expr) in exprs.iter().enumerate() {
            out.push_sep(i, ", ");
            self.deparse(expr, out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Function, PlainSelect, SelectItem, SubSelect};

    #[test]
    fn test_expression_list_brackets() {
        let deparser = ExpressionDeparser::new();
        let list = ExpressionList::new(vec![Expr::long(1), Expr::column("b")]);

        let mut out = SqlBuffer::new();
        deparser.deparse_expression_list(&list, true, &mut out).unwrap();
        out.push_char('|');
        deparser.deparse_expression_list(&list, false, &mut out).unwrap();
        assert_eq!(out.as_str(), "(1, b)|1, b");
    }

    #[test]
    fn test_empty_list() {
        let mut out = SqlBuffer::new();
        ExpressionDeparser::new()
            .deparse_items(&ItemsList::from(Vec::new()), &mut out)
            .unwrap();
        assert_eq!(out.as_str(), "()");
    }

    #[test]
    fn test_multi_list_has_no_outer_brackets() {
        let items = ItemsList::Multi(vec![
            ExpressionList::new(vec![Expr::long(1)]),
            ExpressionList::new(vec![Expr::long(2), Expr::long(3)]),
        ]);
        let mut out = SqlBuffer::new();
        ExpressionDeparser::new().deparse_items(&items, &mut out).unwrap();
        assert_eq!(out.as_str(), "(1), (2, 3)");
    }

    #[test]
    fn test_sub_select_items() {
        let sub = SubSelect::new(PlainSelect::new(vec![SelectItem::AllColumns]));
        let items = ItemsList::SubSelect(Box::new(sub));
        let mut out = SqlBuffer::new();
        ExpressionDeparser::new().deparse_items(&items, &mut out).unwrap();
        assert_eq!(out.as_str(), "(SELECT *)");
    }

    #[test]
    fn test_nested_call_inside_distinct_keeps_brackets() {
        let inner = Function::new("lower").with_args(vec![Expr::column("a")]);
        let outer = Function::new("count")
            .with_args(vec![inner.into()])
            .distinct();
        let expr = Expr::from(outer).plus(Expr::Function(
            Function::new("max").with_args(vec![Expr::column("b")]),
        ));
        let rendered = ExpressionDeparser::new().deparse_to_string(&expr).unwrap();
        assert_eq!(rendered, "count(DISTINCT lower(a)) + max(b)");
    }
}
