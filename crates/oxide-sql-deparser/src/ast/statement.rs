//! Statement-level AST types reachable from expressions.
//!
//! Only the parts a sub-select needs are modelled here; rendering them is
//! the job of a [`StatementDeparser`](crate::deparser::StatementDeparser).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::expression::Expr;
use super::schema::{Alias, Table};

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Null ordering for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NullOrdering {
    /// NULLs come first.
    First,
    /// NULLs come last.
    Last,
}

impl NullOrdering {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "NULLS FIRST",
            Self::Last => "NULLS LAST",
        }
    }
}

/// One ordering key.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderByElement {
    pub expr: Expr,
    /// `None` when no direction was written (implicitly ascending).
    pub direction: Option<OrderDirection>,
    pub nulls: Option<NullOrdering>,
}

impl OrderByElement {
    /// Creates an element without explicit direction.
    #[must_use]
    pub const fn new(expr: Expr) -> Self {
        Self {
            expr,
            direction: None,
            nulls: None,
        }
    }

    /// Creates an explicitly ascending element.
    #[must_use]
    pub const fn asc(expr: Expr) -> Self {
        Self {
            expr,
            direction: Some(OrderDirection::Asc),
            nulls: None,
        }
    }

    /// Creates a descending element.
    #[must_use]
    pub const fn desc(expr: Expr) -> Self {
        Self {
            expr,
            direction: Some(OrderDirection::Desc),
            nulls: None,
        }
    }

    /// Sets the null ordering.
    #[must_use]
    pub const fn nulls(mut self, nulls: NullOrdering) -> Self {
        self.nulls = Some(nulls);
        self
    }
}

/// Set operators combining two select bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SetOperator {
    Union,
    Intersect,
    Except,
}

impl SetOperator {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Union => "UNION",
            Self::Intersect => "INTERSECT",
            Self::Except => "EXCEPT",
        }
    }
}

/// An entry of a select list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SelectItem {
    /// `*`
    AllColumns,
    /// `t.*`
    AllTableColumns(Table),
    /// `expr [AS alias]`
    Expr { expr: Expr, alias: Option<Alias> },
}

impl From<Expr> for SelectItem {
    fn from(expr: Expr) -> Self {
        Self::Expr { expr, alias: None }
    }
}

/// A plain `SELECT ... FROM ... WHERE ...` body.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlainSelect {
    pub distinct: bool,
    pub items: Vec<SelectItem>,
    pub from: Option<Table>,
    pub where_clause: Option<Expr>,
    pub group_by: Vec<Expr>,
    pub having: Option<Expr>,
    pub order_by: Vec<OrderByElement>,
    pub limit: Option<Expr>,
}

impl PlainSelect {
    /// Creates a select over the given items.
    #[must_use]
    pub fn new(items: Vec<SelectItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Sets the FROM table.
    #[must_use]
    pub fn from_table(mut self, table: Table) -> Self {
        self.from = Some(table);
        self
    }

    /// Sets the WHERE condition.
    #[must_use]
    pub fn where_clause(mut self, condition: Expr) -> Self {
        self.where_clause = Some(condition);
        self
    }
}

/// The body of a query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SelectBody {
    Plain(Box<PlainSelect>),
    SetOperation {
        op: SetOperator,
        /// `UNION ALL` and friends.
        all: bool,
        left: Box<SelectBody>,
        right: Box<SelectBody>,
    },
}

impl From<PlainSelect> for SelectBody {
    fn from(select: PlainSelect) -> Self {
        Self::Plain(Box::new(select))
    }
}

/// A common table expression: `name [(columns)] AS (body)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WithItem {
    pub name: String,
    pub columns: Vec<String>,
    pub body: SelectBody,
}

/// A query used as an expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubSelect {
    pub body: SelectBody,
    /// WITH items; empty when there is no WITH clause.
    pub with_items: Vec<WithItem>,
    /// Wrap the query in parentheses.
    pub use_brackets: bool,
}

impl SubSelect {
    /// Creates a bracketed sub-select.
    #[must_use]
    pub fn new(body: impl Into<SelectBody>) -> Self {
        Self {
            body: body.into(),
            with_items: Vec::new(),
            use_brackets: true,
        }
    }

    /// Adds a WITH item.
    #[must_use]
    pub fn with_item(mut self, item: WithItem) -> Self {
        self.with_items.push(item);
        self
    }

    /// Drops the surrounding parentheses.
    #[must_use]
    pub const fn without_brackets(mut self) -> Self {
        self.use_brackets = false;
        self
    }
}
