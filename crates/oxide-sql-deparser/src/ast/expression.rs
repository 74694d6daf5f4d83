//! Expression AST types.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::function::{AnalyticExpression, Function, GroupConcat};
use super::schema::{Column, Table};
use super::statement::SubSelect;
use super::types::DataType;

/// Kind of an SQL datetime literal (`DATE '...'` and friends).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DateTimeKind {
    Date,
    Time,
    Timestamp,
}

impl DateTimeKind {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
        }
    }
}

/// A string literal together with its optional prefix (`N`, `E`, `_utf8`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StringValue {
    /// Charset or type prefix written right before the opening quote.
    pub prefix: Option<String>,
    /// The value between the quotes, already escaped.
    pub value: String,
}

/// A literal value.
///
/// Numeric literals keep the text they were parsed from so that large or
/// oddly formatted numbers survive unchanged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// Integer literal.
    Long(String),
    /// Floating point literal.
    Double(String),
    /// Hexadecimal literal (`0xFF`, `x'FF'`).
    Hex(String),
    /// String literal.
    String(StringValue),
    /// ODBC date literal, rendered as `{d '...'}`.
    Date(NaiveDate),
    /// ODBC time literal, rendered as `{t '...'}`.
    Time(NaiveTime),
    /// ODBC timestamp literal, rendered as `{ts '...'}`.
    Timestamp(NaiveDateTime),
    /// Typed datetime literal such as `DATE '2024-01-31'`.
    DateTime {
        /// Literal keyword.
        kind: DateTimeKind,
        /// Text between the quotes.
        value: String,
    },
    /// NULL literal.
    Null,
}

/// A bind parameter placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Parameter {
    /// `?`, or `?N` when a fixed index was assigned.
    Positional {
        /// Fixed index written after the marker.
        index: Option<u32>,
    },
    /// `:name`.
    Named {
        /// Parameter name.
        name: String,
        /// Type suffix appended verbatim.
        type_suffix: Option<String>,
    },
    /// Oracle numeric bind `:1`.
    NumericBind(u32),
    /// Custom markup parameter: `?` followed by an optional type suffix.
    Markup {
        /// Type suffix appended verbatim.
        type_suffix: Option<String>,
    },
}

/// Regular expression match operators (PostgreSQL).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RegexpOperator {
    Match,
    MatchCaseInsensitive,
    NotMatch,
    NotMatchCaseInsensitive,
}

impl RegexpOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Match => "~",
            Self::MatchCaseInsensitive => "~*",
            Self::NotMatch => "!~",
            Self::NotMatchCaseInsensitive => "!~*",
        }
    }
}

/// MySQL regular expression operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MySqlRegexpOperator {
    Regexp,
    RegexpBinary,
    Rlike,
}

impl MySqlRegexpOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Regexp => "REGEXP",
            Self::RegexpBinary => "REGEXP BINARY",
            Self::Rlike => "RLIKE",
        }
    }
}

/// JSON / JSONB operators (PostgreSQL).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JsonOperator {
    /// `->`
    Arrow,
    /// `->>`
    LongArrow,
    /// `#>`
    HashArrow,
    /// `#>>`
    HashLongArrow,
    /// `@>`
    Contains,
    /// `<@`
    ContainedBy,
    /// `?`
    Exists,
    /// `?|`
    ExistsAny,
    /// `?&`
    ExistsAll,
    /// `||`
    Concat,
    /// `-`
    Minus,
    /// `#-`
    HashMinus,
}

impl JsonOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Arrow => "->",
            Self::LongArrow => "->>",
            Self::HashArrow => "#>",
            Self::HashLongArrow => "#>>",
            Self::Contains => "@>",
            Self::ContainedBy => "<@",
            Self::Exists => "?",
            Self::ExistsAny => "?|",
            Self::ExistsAll => "?&",
            Self::Concat => "||",
            Self::Minus => "-",
            Self::HashMinus => "#-",
        }
    }
}

/// Operators rendered as `left op right` with an optional leading `NOT `.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,

    // Logical
    And,
    Or,

    // String
    Concat,

    // Bitwise
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    LeftShift,
    RightShift,

    // Pattern and document operators
    Regexp(RegexpOperator),
    MySqlRegexp(MySqlRegexpOperator),
    Json(JsonOperator),
}

impl BinaryOperator {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Concat => "||",
            Self::BitwiseAnd => "&",
            Self::BitwiseOr => "|",
            Self::BitwiseXor => "^",
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
            Self::Regexp(op) => op.as_str(),
            Self::MySqlRegexp(op) => op.as_str(),
            Self::Json(op) => op.as_str(),
        }
    }
}

/// Spelling of the not-equals operator, preserved from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NotEqualsStyle {
    /// `<>`
    #[default]
    Standard,
    /// `!=`
    Bang,
}

/// Comparison operators. These accept the legacy Oracle `(+)` join marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ComparisonOperator {
    Equals,
    NotEquals(NotEqualsStyle),
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    /// Full text match `@@`.
    Matches,
}

impl ComparisonOperator {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::NotEquals(NotEqualsStyle::Standard) => "<>",
            Self::NotEquals(NotEqualsStyle::Bang) => "!=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::Matches => "@@",
        }
    }
}

/// Legacy Oracle outer join marker `(+)`.
///
/// Placement is inverted relative to the name: `Right` puts the marker after
/// the left operand, `Left` puts it after the right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OracleJoin {
    #[default]
    None,
    Left,
    Right,
}

/// Sign of a signed expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    Plus,
    Minus,
    /// Bitwise complement `~`.
    Tilde,
}

impl Sign {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Tilde => "~",
        }
    }
}

/// `ANY` or `SOME` in a quantified comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AnyKind {
    Any,
    Some,
}

impl AnyKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "ANY",
            Self::Some => "SOME",
        }
    }
}

/// An ordered list of expressions (function arguments, IN values, ...).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExpressionList {
    /// The expressions, in source order.
    pub expressions: Vec<Expr>,
}

impl ExpressionList {
    /// Creates a list from expressions.
    #[must_use]
    pub const fn new(expressions: Vec<Expr>) -> Self {
        Self { expressions }
    }
}

impl From<Vec<Expr>> for ExpressionList {
    fn from(expressions: Vec<Expr>) -> Self {
        Self { expressions }
    }
}

/// Operand lists usable on either side of IN.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ItemsList {
    /// `(a, b, c)`
    Expressions(ExpressionList),
    /// `(a, b), (c, d)`
    Multi(Vec<ExpressionList>),
    /// `(SELECT ...)`
    SubSelect(Box<SubSelect>),
}

impl From<Vec<Expr>> for ItemsList {
    fn from(expressions: Vec<Expr>) -> Self {
        Self::Expressions(ExpressionList::new(expressions))
    }
}

/// Left-hand side of an IN expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InOperand {
    /// A single expression, which may carry the `(+)` marker.
    Expr(Box<Expr>),
    /// A row value such as `(a, b) IN ((1, 2))`.
    Items(ItemsList),
}

/// A WHEN/THEN pair of a CASE expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WhenClause {
    pub when: Expr,
    pub then: Expr,
}

/// A CASE expression, simple when `switch` is present, searched otherwise.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CaseExpression {
    /// The operand of a simple CASE.
    pub switch: Option<Box<Expr>>,
    /// WHEN/THEN clauses in declared order.
    pub when_clauses: Vec<WhenClause>,
    /// ELSE branch.
    pub else_expr: Option<Box<Expr>>,
}

/// One `->'key'` step of a JSON column path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JsonPathElement {
    pub operator: JsonOperator,
    /// Key text, written verbatim (quotes included).
    pub key: String,
}

/// An Oracle optimizer hint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OracleHint {
    pub value: String,
    /// `--+ hint` instead of `/*+ hint */`.
    pub single_line: bool,
}

/// An SQL expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// Arithmetic, logical, bitwise, string, regexp and JSON operators.
    Binary {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
        /// Leading `NOT `.
        not: bool,
    },

    /// Comparison operators.
    Comparison {
        left: Box<Expr>,
        op: ComparisonOperator,
        right: Box<Expr>,
        /// Leading `NOT `.
        not: bool,
        oracle_join: OracleJoin,
    },

    /// `[NOT ]left [I]LIKE right [ESCAPE '...']`.
    Like {
        left: Box<Expr>,
        right: Box<Expr>,
        /// Leading `NOT `.
        not: bool,
        /// Renders ILIKE instead of LIKE.
        case_insensitive: bool,
        /// Escape character text, written between quotes as-is.
        escape: Option<String>,
    },

    /// `expr [NOT] BETWEEN start AND end`.
    Between {
        expr: Box<Expr>,
        start: Box<Expr>,
        end: Box<Expr>,
        not: bool,
    },

    /// `left [NOT] IN right`.
    In {
        left: InOperand,
        right: ItemsList,
        not: bool,
        /// Only `Right` is rendered, after an expression operand.
        oracle_join: OracleJoin,
    },

    /// `expr IS [NOT] NULL` or `expr [NOT] ISNULL`.
    IsNull {
        expr: Box<Expr>,
        not: bool,
        /// Use the `ISNULL` keyword form.
        use_isnull: bool,
    },

    /// `[NOT ]EXISTS expr`.
    Exists { expr: Box<Expr>, not: bool },

    /// `NOT expr`.
    Not(Box<Expr>),

    /// `-expr`, `+expr` or `~expr`.
    Signed { sign: Sign, expr: Box<Expr> },

    /// `[NOT ](expr)`.
    Parenthesis { expr: Box<Expr>, not: bool },

    /// CASE expression.
    Case(CaseExpression),

    /// A function call.
    Function(Function),

    /// An analytic (window) function.
    Analytic(Box<AnalyticExpression>),

    /// MySQL `GROUP_CONCAT(...)`.
    GroupConcat(GroupConcat),

    /// `CAST(expr AS type)` or `expr::type`.
    Cast {
        expr: Box<Expr>,
        data_type: DataType,
        use_cast_keyword: bool,
    },

    /// `EXTRACT(field FROM expr)`.
    Extract { field: String, expr: Box<Expr> },

    /// `INTERVAL parameter [type]`.
    Interval {
        /// Interval amount as written (`'5'`, `5`).
        parameter: String,
        interval_type: Option<String>,
    },

    /// Row constructor `[name](a, b, ...)`.
    Row {
        name: Option<String>,
        exprs: Vec<Expr>,
    },

    /// A bracketed value list `(a, b)`.
    ValueList(ExpressionList),

    /// A column reference.
    Column(Column),

    /// JSON path on a column: `col->'a'->>'b'`.
    Json {
        column: Column,
        path: Vec<JsonPathElement>,
    },

    /// A literal value.
    Literal(Literal),

    /// A bind parameter.
    Parameter(Parameter),

    /// MySQL user variable `@name` / system variable `@@name`.
    UserVariable { name: String, double_at: bool },

    /// Time key word such as `CURRENT_TIMESTAMP`.
    TimeKey(String),

    /// A sub-select.
    SubSelect(Box<SubSelect>),

    /// `ALL (subquery)`.
    AllComparison(Box<SubSelect>),

    /// `ANY (subquery)` / `SOME (subquery)`.
    AnyComparison {
        kind: AnyKind,
        sub_select: Box<SubSelect>,
    },

    /// Oracle `START WITH ... CONNECT BY ...`.
    Hierarchical {
        start_with: Option<Box<Expr>>,
        connect_by: Box<Expr>,
        no_cycle: bool,
    },

    /// Oracle optimizer hint.
    Hint(OracleHint),
}

impl Expr {
    /// Creates a new column reference.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(Column::new(name))
    }

    /// Creates a column reference qualified with a table name.
    #[must_use]
    pub fn qualified_column(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Column(Column::new(name).with_table(Table::new(table)))
    }

    /// Creates an integer literal.
    #[must_use]
    pub fn long(value: i64) -> Self {
        Self::Literal(Literal::Long(value.to_string()))
    }

    /// Creates a floating point literal. The value always carries a
    /// fractional part (`1.0`, not `1`).
    #[must_use]
    pub fn double(value: f64) -> Self {
        Self::Literal(Literal::Double(format!("{value:?}")))
    }

    /// Creates a string literal without prefix.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal::String(StringValue {
            prefix: None,
            value: value.into(),
        }))
    }

    /// Creates a NULL literal.
    #[must_use]
    pub const fn null() -> Self {
        Self::Literal(Literal::Null)
    }

    /// Creates a plain `?` placeholder.
    #[must_use]
    pub const fn positional() -> Self {
        Self::Parameter(Parameter::Positional { index: None })
    }

    /// Creates a `:name` placeholder.
    #[must_use]
    pub fn named_parameter(name: impl Into<String>) -> Self {
        Self::Parameter(Parameter::Named {
            name: name.into(),
            type_suffix: None,
        })
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: BinaryOperator, right: Self) -> Self {
        Self::Binary {
            left: Box::new(self),
            op,
            right: Box::new(right),
            not: false,
        }
    }

    /// Creates a comparison expression without join marker.
    #[must_use]
    pub fn compare(self, op: ComparisonOperator, right: Self) -> Self {
        Self::Comparison {
            left: Box::new(self),
            op,
            right: Box::new(right),
            not: false,
            oracle_join: OracleJoin::None,
        }
    }

    /// Creates an addition.
    #[must_use]
    pub fn plus(self, right: Self) -> Self {
        self.binary(BinaryOperator::Add, right)
    }

    /// Creates a subtraction.
    #[must_use]
    pub fn minus(self, right: Self) -> Self {
        self.binary(BinaryOperator::Subtract, right)
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, right: Self) -> Self {
        self.compare(ComparisonOperator::Equals, right)
    }

    /// Creates an inequality expression (`<>`).
    #[must_use]
    pub fn not_eq(self, right: Self) -> Self {
        self.compare(ComparisonOperator::NotEquals(NotEqualsStyle::Standard), right)
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(self, right: Self) -> Self {
        self.compare(ComparisonOperator::LessThan, right)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, right: Self) -> Self {
        self.compare(ComparisonOperator::GreaterThan, right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        self.binary(BinaryOperator::And, right)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        self.binary(BinaryOperator::Or, right)
    }

    /// Wraps the expression in `NOT `.
    #[must_use]
    pub fn negated(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Wraps the expression in parentheses.
    #[must_use]
    pub fn nested(self) -> Self {
        Self::Parenthesis {
            expr: Box::new(self),
            not: false,
        }
    }

    /// Sets the join marker of a comparison or IN expression.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn with_oracle_join(mut self, join: OracleJoin) -> Self {
        if let Self::Comparison { oracle_join, .. } | Self::In { oracle_join, .. } = &mut self {
            *oracle_join = join;
        }
        self
    }

    /// Sets the NOT flag of variants that carry one.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn with_not(mut self) -> Self {
        match &mut self {
            Self::Binary { not, .. }
            | Self::Comparison { not, .. }
            | Self::Like { not, .. }
            | Self::Between { not, .. }
            | Self::In { not, .. }
            | Self::IsNull { not, .. }
            | Self::Exists { not, .. }
            | Self::Parenthesis { not, .. } => *not = true,
            _ => {}
        }
        self
    }

    /// Creates an IS NULL expression.
    #[must_use]
    pub fn is_null(self) -> Self {
        Self::IsNull {
            expr: Box::new(self),
            not: false,
            use_isnull: false,
        }
    }

    /// Creates an IS NOT NULL expression.
    #[must_use]
    pub fn is_not_null(self) -> Self {
        Self::IsNull {
            expr: Box::new(self),
            not: true,
            use_isnull: false,
        }
    }

    /// Creates a BETWEEN expression.
    #[must_use]
    pub fn between(self, start: Self, end: Self) -> Self {
        Self::Between {
            expr: Box::new(self),
            start: Box::new(start),
            end: Box::new(end),
            not: false,
        }
    }

    /// Creates a NOT BETWEEN expression.
    #[must_use]
    pub fn not_between(self, start: Self, end: Self) -> Self {
        self.between(start, end).with_not()
    }

    /// Creates an IN expression over a value list.
    #[must_use]
    pub fn in_list(self, list: Vec<Self>) -> Self {
        Self::In {
            left: InOperand::Expr(Box::new(self)),
            right: ItemsList::from(list),
            not: false,
            oracle_join: OracleJoin::None,
        }
    }

    /// Creates a NOT IN expression over a value list.
    #[must_use]
    pub fn not_in_list(self, list: Vec<Self>) -> Self {
        self.in_list(list).with_not()
    }

    /// Creates an IN expression over a sub-select.
    #[must_use]
    pub fn in_sub_select(self, sub_select: SubSelect) -> Self {
        Self::In {
            left: InOperand::Expr(Box::new(self)),
            right: ItemsList::SubSelect(Box::new(sub_select)),
            not: false,
            oracle_join: OracleJoin::None,
        }
    }

    /// Creates a LIKE expression.
    #[must_use]
    pub fn like(self, pattern: Self) -> Self {
        Self::Like {
            left: Box::new(self),
            right: Box::new(pattern),
            not: false,
            case_insensitive: false,
            escape: None,
        }
    }

    /// Creates an ILIKE expression.
    #[must_use]
    pub fn ilike(self, pattern: Self) -> Self {
        Self::Like {
            left: Box::new(self),
            right: Box::new(pattern),
            not: false,
            case_insensitive: true,
            escape: None,
        }
    }

    /// Sets the ESCAPE text of a LIKE expression.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn with_escape(mut self, text: impl Into<String>) -> Self {
        if let Self::Like { escape, .. } = &mut self {
            *escape = Some(text.into());
        }
        self
    }

    /// Creates an EXISTS expression.
    #[must_use]
    pub fn exists(sub_select: SubSelect) -> Self {
        Self::Exists {
            expr: Box::new(Self::SubSelect(Box::new(sub_select))),
            not: false,
        }
    }

    /// Creates a CAST expression using the `CAST(... AS ...)` form.
    #[must_use]
    pub fn cast(self, data_type: DataType) -> Self {
        Self::Cast {
            expr: Box::new(self),
            data_type,
            use_cast_keyword: true,
        }
    }

    /// Creates a `-expr` expression.
    #[must_use]
    pub fn negative(self) -> Self {
        Self::Signed {
            sign: Sign::Minus,
            expr: Box::new(self),
        }
    }
}

impl From<Function> for Expr {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<AnalyticExpression> for Expr {
    fn from(analytic: AnalyticExpression) -> Self {
        Self::Analytic(Box::new(analytic))
    }
}

impl From<SubSelect> for Expr {
    fn from(sub_select: SubSelect) -> Self {
        Self::SubSelect(Box::new(sub_select))
    }
}

impl From<Column> for Expr {
    fn from(column: Column) -> Self {
        Self::Column(column)
    }
}

impl From<Literal> for Expr {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_tokens() {
        assert_eq!(BinaryOperator::Add.as_str(), "+");
        assert_eq!(BinaryOperator::BitwiseXor.as_str(), "^");
        assert_eq!(
            BinaryOperator::Regexp(RegexpOperator::NotMatchCaseInsensitive).as_str(),
            "!~*"
        );
        assert_eq!(
            BinaryOperator::MySqlRegexp(MySqlRegexpOperator::RegexpBinary).as_str(),
            "REGEXP BINARY"
        );
        assert_eq!(
            ComparisonOperator::NotEquals(NotEqualsStyle::Bang).as_str(),
            "!="
        );
        assert_eq!(ComparisonOperator::Matches.as_str(), "@@");
    }

    #[test]
    fn test_expr_builders() {
        let col = Expr::column("name");
        assert!(matches!(col, Expr::Column(Column { ref name, table: None }) if name == "name"));

        let lit = Expr::long(42);
        assert!(matches!(lit, Expr::Literal(Literal::Long(ref text)) if text == "42"));

        let lit = Expr::double(1.0);
        assert!(matches!(lit, Expr::Literal(Literal::Double(ref text)) if text == "1.0"));
    }

    #[test]
    fn test_with_not_only_touches_flagged_variants() {
        let expr = Expr::column("a").between(Expr::long(1), Expr::long(2)).with_not();
        assert!(matches!(expr, Expr::Between { not: true, .. }));

        let column = Expr::column("a").with_not();
        assert_eq!(column, Expr::column("a"));
    }

    #[test]
    fn test_with_oracle_join() {
        let expr = Expr::column("a")
            .eq(Expr::column("b"))
            .with_oracle_join(OracleJoin::Right);
        assert!(matches!(
            expr,
            Expr::Comparison {
                oracle_join: OracleJoin::Right,
                ..
            }
        ));
    }
}
