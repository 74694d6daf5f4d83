//! Abstract Syntax Tree (AST) types for SQL expressions.
//!
//! The tree is produced by an external parser and is read-only as far as
//! this crate is concerned: deparsing never mutates a node.

mod expression;
mod function;
mod schema;
mod statement;
mod types;

pub use expression::{
    AnyKind, BinaryOperator, CaseExpression, ComparisonOperator, DateTimeKind, Expr,
    ExpressionList, InOperand, ItemsList, JsonOperator, JsonPathElement, Literal,
    MySqlRegexpOperator, NotEqualsStyle, OracleHint, OracleJoin, Parameter, RegexpOperator, Sign,
    StringValue, WhenClause,
};
pub use function::{
    AnalyticExpression, AnalyticKind, Function, GroupConcat, KeepExpression, SetQuantifier,
    WindowElement, WindowFrame, WindowKind, WindowOffset,
};
pub use schema::{Alias, Column, Table};
pub use statement::{
    NullOrdering, OrderByElement, OrderDirection, PlainSelect, SelectBody, SelectItem,
    SetOperator, SubSelect, WithItem,
};
pub use types::DataType;
