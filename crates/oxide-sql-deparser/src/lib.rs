//! # oxide-sql-deparser
//!
//! Turns already-parsed SQL expression trees back into SQL text.
//!
//! This crate provides:
//! - A closed expression tree covering arithmetic, comparison, predicates,
//!   function and analytic calls, literals, bind parameters and sub-selects
//! - An expression deparser writing minimal single-line SQL into a buffer
//! - A statement capability so sub-selects can be rendered by your own code
//!
//! Dialect-specific forms are reproduced as written: Oracle `(+)` outer join
//! markers, ODBC `{fn ...}` and `{d '...'}` escapes, `ISNULL`, `::` casts.
//!
//! ## Deparsing an Expression
//!
//! ```rust
//! use oxide_sql_deparser::ast::Expr;
//! use oxide_sql_deparser::ExpressionDeparser;
//!
//! let expr = Expr::column("x").not_between(Expr::long(1), Expr::long(10));
//!
//! let sql = ExpressionDeparser::new().deparse_to_string(&expr).unwrap();
//! assert_eq!(sql, "x NOT BETWEEN 1 AND 10");
//!
//! // Display produces the same text
//! assert_eq!(expr.to_string(), sql);
//! ```
//!
//! ## Custom Statement Rendering
//!
//! Sub-selects are handed to a [`StatementDeparser`]. The built-in
//! [`PlainSelectDeparser`] is used unless another one is configured:
//!
//! ```rust
//! use oxide_sql_deparser::ast::{Expr, PlainSelect, SelectBody, SubSelect, WithItem};
//! use oxide_sql_deparser::{ExpressionDeparser, Result, SqlBuffer, StatementDeparser};
//!
//! struct Placeholder;
//!
//! impl StatementDeparser for Placeholder {
//!     fn deparse_select_body(
//!         &self,
//!         _body: &SelectBody,
//!         _expr: &ExpressionDeparser<'_>,
//!         out: &mut SqlBuffer,
//!     ) -> Result<()> {
//!         out.push("<query>");
//!         Ok(())
//!     }
//!
//!     fn deparse_with_item(
//!         &self,
//!         item: &WithItem,
//!         _expr: &ExpressionDeparser<'_>,
//!         out: &mut SqlBuffer,
//!     ) -> Result<()> {
//!         out.push(&item.name);
//!         Ok(())
//!     }
//! }
//!
//! let expr = Expr::column("id").in_sub_select(SubSelect::new(PlainSelect::default()));
//! let sql = ExpressionDeparser::new()
//!     .with_statement_deparser(&Placeholder)
//!     .deparse_to_string(&expr)
//!     .unwrap();
//! assert_eq!(sql, "id IN (<query>)");
//! ```

pub mod ast;
pub mod deparser;
pub mod error;

pub use ast::Expr;
pub use deparser::{
    ExpressionDeparser, OrderByDeparser, PlainSelectDeparser, SqlBuffer, StatementDeparser,
};
pub use error::{DeparseError, Result};
