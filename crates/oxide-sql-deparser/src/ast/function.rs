//! Function call, aggregate and window function AST types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::expression::{Expr, ExpressionList};
use super::statement::OrderByElement;

/// DISTINCT or ALL in front of a function's arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SetQuantifier {
    Distinct,
    All,
}

impl SetQuantifier {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Distinct => "DISTINCT",
            Self::All => "ALL",
        }
    }
}

/// Oracle `KEEP (DENSE_RANK FIRST ORDER BY ...)` clause.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeepExpression {
    /// Ranking function name, usually `DENSE_RANK`.
    pub name: String,
    /// FIRST when true, LAST otherwise.
    pub first: bool,
    pub order_by: Vec<OrderByElement>,
}

/// A function call expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Function {
    /// The function name, possibly qualified.
    pub name: String,
    /// The arguments. `None` means no argument list was written at all.
    pub parameters: Option<ExpressionList>,
    /// DISTINCT / ALL in front of the arguments.
    pub quantifier: Option<SetQuantifier>,
    /// `name(*)`, only used when `parameters` is `None`.
    pub all_columns: bool,
    /// ODBC escape `{fn ...}`.
    pub escaped: bool,
    /// Attribute access on the result: `func(a).attr`.
    pub attribute: Option<String>,
    pub keep: Option<KeepExpression>,
}

impl Function {
    /// Creates a call without argument list.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: None,
            quantifier: None,
            all_columns: false,
            escaped: false,
            attribute: None,
            keep: None,
        }
    }

    /// Sets the arguments.
    #[must_use]
    pub fn with_args(mut self, args: Vec<Expr>) -> Self {
        self.parameters = Some(ExpressionList::new(args));
        self
    }

    /// Marks the call as `name(*)`.
    #[must_use]
    pub const fn all_columns(mut self) -> Self {
        self.all_columns = true;
        self
    }

    /// Adds DISTINCT in front of the arguments.
    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.quantifier = Some(SetQuantifier::Distinct);
        self
    }

    /// Adds ALL in front of the arguments.
    #[must_use]
    pub const fn all(mut self) -> Self {
        self.quantifier = Some(SetQuantifier::All);
        self
    }

    /// Wraps the call in the ODBC `{fn ...}` escape.
    #[must_use]
    pub const fn escaped(mut self) -> Self {
        self.escaped = true;
        self
    }

    /// Sets the attribute accessed on the result.
    #[must_use]
    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Sets the KEEP clause.
    #[must_use]
    pub fn keep(mut self, keep: KeepExpression) -> Self {
        self.keep = Some(keep);
        self
    }
}

/// OVER or WITHIN GROUP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AnalyticKind {
    #[default]
    Over,
    WithinGroup,
}

impl AnalyticKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Over => "OVER",
            Self::WithinGroup => "WITHIN GROUP",
        }
    }
}

/// ROWS or RANGE frame unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindowKind {
    Rows,
    Range,
}

impl WindowKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rows => "ROWS",
            Self::Range => "RANGE",
        }
    }
}

/// A frame boundary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindowOffset {
    UnboundedPreceding,
    UnboundedFollowing,
    CurrentRow,
    Preceding(Box<Expr>),
    Following(Box<Expr>),
}

/// A frame extent: one boundary or `BETWEEN start AND end`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindowFrame {
    Single(WindowOffset),
    Between {
        start: WindowOffset,
        end: WindowOffset,
    },
}

/// A window frame clause such as `ROWS BETWEEN 1 PRECEDING AND CURRENT ROW`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindowElement {
    pub kind: WindowKind,
    pub frame: WindowFrame,
}

/// An analytic (window) function call.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalyticExpression {
    pub name: String,
    pub kind: AnalyticKind,
    /// Main argument.
    pub expression: Option<Expr>,
    /// Offset argument (`LAG(a, 2)`), only rendered after `expression`.
    pub offset: Option<Expr>,
    /// Default argument (`LAG(a, 2, 0)`), only rendered after `offset`.
    pub default_value: Option<Expr>,
    /// `name(*)` when there is no argument.
    pub all_columns: bool,
    pub distinct: bool,
    pub ignore_nulls: bool,
    pub keep: Option<KeepExpression>,
    pub partition_by: Vec<Expr>,
    pub order_by: Vec<OrderByElement>,
    /// Frame clause; rendered only together with a non-empty ORDER BY.
    pub window: Option<WindowElement>,
}

impl AnalyticExpression {
    /// Creates an `OVER` call with no arguments.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the main argument.
    #[must_use]
    pub fn with_expression(mut self, expr: Expr) -> Self {
        self.expression = Some(expr);
        self
    }

    /// Sets the PARTITION BY list.
    #[must_use]
    pub fn partition_by(mut self, exprs: Vec<Expr>) -> Self {
        self.partition_by = exprs;
        self
    }

    /// Sets the ORDER BY list.
    #[must_use]
    pub fn order_by(mut self, elements: Vec<OrderByElement>) -> Self {
        self.order_by = elements;
        self
    }

    /// Sets the frame clause.
    #[must_use]
    pub fn window(mut self, window: WindowElement) -> Self {
        self.window = Some(window);
        self
    }
}

/// MySQL `GROUP_CONCAT`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroupConcat {
    pub distinct: bool,
    pub expressions: ExpressionList,
    pub order_by: Vec<OrderByElement>,
    /// Separator text, written between quotes as-is.
    pub separator: Option<String>,
}
