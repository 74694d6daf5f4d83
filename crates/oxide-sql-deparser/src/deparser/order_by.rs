//! ORDER BY elements inside analytic calls, KEEP clauses and GROUP_CONCAT.

use super::{ExpressionDeparser, SqlBuffer};
use crate::ast::{OrderByElement, OrderDirection};
use crate::error::Result;

/// Renders ordering keys.
///
/// The key expression itself goes back through the calling
/// [`ExpressionDeparser`], so both write into the same buffer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OrderByDeparser;

impl OrderByDeparser {
    /// Creates an order-by deparser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Appends `expr [ASC|DESC] [NULLS FIRST|NULLS LAST]`.
    ///
    /// `ASC` is only written when it was explicit in the tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the key expression fails to render.
    pub fn deparse_element(
        &self,
        element: &OrderByElement,
        expr: &ExpressionDeparser<'_>,
        out: &mut SqlBuffer,
    ) -> Result<()> {
        expr.deparse(&element.expr, out)?;
        match element.direction {
            Some(OrderDirection::Desc) => out.push(" DESC"),
            Some(OrderDirection::Asc) => out.push(" ASC"),
            None => {}
        }
        if let Some(nulls) = element.nulls {
            out.push_char(' ');
            out.push(nulls.as_str());
        }
        Ok(())
    }
}
