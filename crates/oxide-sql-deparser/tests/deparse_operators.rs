//! Tests for binary operators (arithmetic, logical, bitwise, regexp,
//! JSON), comparison operators with Oracle join markers, and unary forms.

mod common;
use common::*;

use oxide_sql_deparser::ast::{
    BinaryOperator, ComparisonOperator, Expr, JsonOperator, MySqlRegexpOperator, NotEqualsStyle,
    OracleJoin, RegexpOperator, Sign,
};

// ===================================================================
// Arithmetic and logical operators
// ===================================================================

#[test]
fn add_column_and_integer() {
    assert_eq!(deparse(&Expr::column("a").plus(Expr::long(1))), "a + 1");
}

#[test]
fn arithmetic_tokens() {
    let cases = [
        (BinaryOperator::Subtract, "a - b"),
        (BinaryOperator::Multiply, "a * b"),
        (BinaryOperator::Divide, "a / b"),
        (BinaryOperator::Modulo, "a % b"),
        (BinaryOperator::Concat, "a || b"),
    ];
    for (op, expected) in cases {
        let expr = Expr::column("a").binary(op, Expr::column("b"));
        assert_eq!(deparse(&expr), expected);
    }
}

#[test]
fn and_or_chain_is_left_to_right() {
    let expr = Expr::column("a")
        .and(Expr::column("b"))
        .or(Expr::column("c"));
    assert_eq!(deparse(&expr), "a AND b OR c");
}

#[test]
fn negated_parenthesized_and() {
    let expr = Expr::column("a").and(Expr::column("b")).nested().with_not();
    assert_eq!(deparse(&expr), "NOT (a AND b)");
}

#[test]
fn not_flag_on_binary_prefixes_whole_expression() {
    let expr = Expr::column("a").and(Expr::column("b")).with_not();
    assert_eq!(deparse(&expr), "NOT a AND b");
}

#[test]
fn standalone_not() {
    let expr = Expr::column("active").eq(Expr::long(1)).negated();
    assert_eq!(deparse(&expr), "NOT active = 1");
}

// ===================================================================
// Bitwise operators
// ===================================================================

#[test]
fn bitwise_tokens() {
    let cases = [
        (BinaryOperator::BitwiseAnd, "a & 4"),
        (BinaryOperator::BitwiseOr, "a | 4"),
        (BinaryOperator::BitwiseXor, "a ^ 4"),
        (BinaryOperator::LeftShift, "a << 4"),
        (BinaryOperator::RightShift, "a >> 4"),
    ];
    for (op, expected) in cases {
        let expr = Expr::column("a").binary(op, Expr::long(4));
        assert_eq!(deparse(&expr), expected);
    }
}

// ===================================================================
// Pattern and document operators
// ===================================================================

#[test]
fn postgres_regexp_operators() {
    let expr = Expr::column("name").binary(
        BinaryOperator::Regexp(RegexpOperator::MatchCaseInsensitive),
        Expr::string("^a"),
    );
    assert_eq!(deparse(&expr), "name ~* '^a'");

    let expr = Expr::column("name").binary(
        BinaryOperator::Regexp(RegexpOperator::NotMatch),
        Expr::string("z$"),
    );
    assert_eq!(deparse(&expr), "name !~ 'z$'");
}

#[test]
fn mysql_regexp_operators() {
    let expr = Expr::column("name").binary(
        BinaryOperator::MySqlRegexp(MySqlRegexpOperator::RegexpBinary),
        Expr::string("^A"),
    );
    assert_eq!(deparse(&expr), "name REGEXP BINARY '^A'");

    let expr = Expr::column("name")
        .binary(
            BinaryOperator::MySqlRegexp(MySqlRegexpOperator::Rlike),
            Expr::string("x"),
        )
        .with_not();
    assert_eq!(deparse(&expr), "NOT name RLIKE 'x'");
}

#[test]
fn json_operators() {
    let expr = Expr::column("doc").binary(
        BinaryOperator::Json(JsonOperator::Contains),
        Expr::string("{\"a\": 1}"),
    );
    assert_eq!(deparse(&expr), "doc @> '{\"a\": 1}'");

    let expr = Expr::column("doc").binary(
        BinaryOperator::Json(JsonOperator::HashLongArrow),
        Expr::string("{a,b}"),
    );
    assert_eq!(deparse(&expr), "doc #>> '{a,b}'");
}

// ===================================================================
// Comparison operators
// ===================================================================

#[test]
fn comparison_tokens() {
    let cases = [
        (ComparisonOperator::Equals, "a = 1"),
        (ComparisonOperator::NotEquals(NotEqualsStyle::Standard), "a <> 1"),
        (ComparisonOperator::NotEquals(NotEqualsStyle::Bang), "a != 1"),
        (ComparisonOperator::GreaterThan, "a > 1"),
        (ComparisonOperator::GreaterThanOrEqual, "a >= 1"),
        (ComparisonOperator::LessThan, "a < 1"),
        (ComparisonOperator::LessThanOrEqual, "a <= 1"),
    ];
    for (op, expected) in cases {
        let expr = Expr::column("a").compare(op, Expr::long(1));
        assert_eq!(deparse(&expr), expected);
    }
}

#[test]
fn full_text_match() {
    let expr = Expr::column("body").compare(ComparisonOperator::Matches, Expr::string("cat"));
    assert_eq!(deparse(&expr), "body @@ 'cat'");
}

#[test]
fn negated_comparison() {
    let expr = Expr::column("a").lt(Expr::long(3)).with_not();
    assert_eq!(deparse(&expr), "NOT a < 3");
}

// ===================================================================
// Oracle join marker
// ===================================================================

#[test]
fn join_marker_right_follows_left_operand() {
    let expr = Expr::qualified_column("e", "dept_id")
        .eq(Expr::qualified_column("d", "id"))
        .with_oracle_join(OracleJoin::Right);
    assert_eq!(deparse(&expr), "e.dept_id(+) = d.id");
}

#[test]
fn join_marker_left_follows_right_operand() {
    let expr = Expr::qualified_column("e", "dept_id")
        .eq(Expr::qualified_column("d", "id"))
        .with_oracle_join(OracleJoin::Left);
    assert_eq!(deparse(&expr), "e.dept_id = d.id(+)");
}

#[test]
fn join_marker_with_not() {
    let expr = Expr::column("a")
        .gt(Expr::column("b"))
        .with_oracle_join(OracleJoin::Left)
        .with_not();
    assert_eq!(deparse(&expr), "NOT a > b(+)");
}

#[test]
fn join_marker_ignored_on_binary_operators() {
    let expr = Expr::column("a")
        .plus(Expr::column("b"))
        .with_oracle_join(OracleJoin::Right);
    assert_eq!(deparse(&expr), "a + b");
}

// ===================================================================
// Unary forms
// ===================================================================

#[test]
fn signed_expressions() {
    assert_eq!(deparse(&Expr::column("a").negative()), "-a");

    let plus = Expr::Signed {
        sign: Sign::Plus,
        expr: Box::new(Expr::long(5)),
    };
    assert_eq!(deparse(&plus), "+5");
}

#[test]
fn signed_parenthesis() {
    let expr = Expr::column("a").minus(Expr::column("b")).nested().negative();
    assert_eq!(deparse(&expr), "-(a - b)");
}
