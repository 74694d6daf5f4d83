//! Property-based tests using proptest.
//!
//! Checks the compositional rules of the deparser over generated trees:
//! - binary and comparison output is built from the operands' output
//! - join markers add exactly one `(+)`
//! - a DISTINCT call does not change how its siblings are bracketed
//! - rendering is deterministic and agrees with `Display`

mod common;
use common::*;

use oxide_sql_deparser::ast::{
    BinaryOperator, ComparisonOperator, Expr, Function, NotEqualsStyle, OracleJoin,
};
use proptest::prelude::*;

// ── Strategies ─────────────────────────────────────────────────────────────

fn arb_binary_op() -> impl Strategy<Value = BinaryOperator> {
    prop_oneof![
        Just(BinaryOperator::Add),
        Just(BinaryOperator::Subtract),
        Just(BinaryOperator::Multiply),
        Just(BinaryOperator::Divide),
        Just(BinaryOperator::Modulo),
        Just(BinaryOperator::And),
        Just(BinaryOperator::Or),
        Just(BinaryOperator::Concat),
        Just(BinaryOperator::BitwiseAnd),
        Just(BinaryOperator::BitwiseOr),
        Just(BinaryOperator::BitwiseXor),
        Just(BinaryOperator::LeftShift),
        Just(BinaryOperator::RightShift),
    ]
}

fn arb_comparison_op() -> impl Strategy<Value = ComparisonOperator> {
    prop_oneof![
        Just(ComparisonOperator::Equals),
        Just(ComparisonOperator::NotEquals(NotEqualsStyle::Standard)),
        Just(ComparisonOperator::NotEquals(NotEqualsStyle::Bang)),
        Just(ComparisonOperator::GreaterThan),
        Just(ComparisonOperator::GreaterThanOrEqual),
        Just(ComparisonOperator::LessThan),
        Just(ComparisonOperator::LessThanOrEqual),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Expr> {
    prop_oneof![
        "[a-z][a-z0-9_]{0,8}".prop_map(Expr::column),
        any::<i64>().prop_map(Expr::long),
        "[a-zA-Z0-9 %]{0,10}".prop_map(Expr::string),
        Just(Expr::null()),
        Just(Expr::positional()),
    ]
}

/// Trees without join markers, so `(+)` only appears where a test adds it.
fn arb_expr() -> impl Strategy<Value = Expr> {
    arb_leaf().prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (inner.clone(), arb_binary_op(), inner.clone(), any::<bool>()).prop_map(
                |(left, op, right, not)| {
                    let expr = left.binary(op, right);
                    if not { expr.with_not() } else { expr }
                }
            ),
            (inner.clone(), arb_comparison_op(), inner.clone())
                .prop_map(|(left, op, right)| left.compare(op, right)),
            inner.clone().prop_map(Expr::nested),
            inner.clone().prop_map(Expr::is_null),
            (inner.clone(), inner.clone(), inner.clone())
                .prop_map(|(e, start, end)| e.between(start, end)),
            ("[a-z]{1,6}", prop::collection::vec(inner.clone(), 0..4))
                .prop_map(|(name, args)| Function::new(name).with_args(args).into()),
            (inner.clone(), prop::collection::vec(inner, 1..4))
                .prop_map(|(left, values)| left.in_list(values)),
        ]
    })
}

fn arb_join() -> impl Strategy<Value = OracleJoin> {
    prop_oneof![Just(OracleJoin::Left), Just(OracleJoin::Right)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // ── Composition ────────────────────────────────────────────────

    #[test]
    fn prop_binary_is_concatenation(
        left in arb_expr(),
        op in arb_binary_op(),
        right in arb_expr(),
        not in any::<bool>(),
    ) {
        let mut expr = left.clone().binary(op, right.clone());
        if not {
            expr = expr.with_not();
        }
        let expected = format!(
            "{}{} {} {}",
            if not { "NOT " } else { "" },
            deparse(&left),
            op.as_str(),
            deparse(&right),
        );
        prop_assert_eq!(deparse(&expr), expected);
    }

    #[test]
    fn prop_comparison_is_concatenation(
        left in arb_expr(),
        op in arb_comparison_op(),
        right in arb_expr(),
    ) {
        let expr = left.clone().compare(op, right.clone());
        let expected = format!("{} {} {}", deparse(&left), op.as_str(), deparse(&right));
        prop_assert_eq!(deparse(&expr), expected);
    }

    #[test]
    fn prop_join_marker_placement(
        left in arb_expr(),
        op in arb_comparison_op(),
        right in arb_expr(),
        join in arb_join(),
    ) {
        let expr = left.clone().compare(op, right.clone()).with_oracle_join(join);
        let (l, r) = (deparse(&left), deparse(&right));
        let expected = match join {
            OracleJoin::Right => format!("{l}(+) {} {r}", op.as_str()),
            _ => format!("{l} {} {r}(+)", op.as_str()),
        };
        let rendered = deparse(&expr);
        prop_assert_eq!(rendered.matches("(+)").count(), 1);
        prop_assert_eq!(rendered, expected);
    }

    // ── Bracket policy ─────────────────────────────────────────────

    #[test]
    fn prop_distinct_call_does_not_affect_siblings(
        args in prop::collection::vec(arb_expr(), 1..4),
        siblings in prop::collection::vec(arb_expr(), 0..4),
    ) {
        let distinct: Expr = Function::new("f").with_args(args).distinct().into();
        let mut values = vec![distinct.clone()];
        values.extend(siblings.iter().cloned());
        let expr = Expr::column("x").in_list(values);

        let mut parts = vec![deparse(&distinct)];
        parts.extend(siblings.iter().map(deparse));
        prop_assert_eq!(deparse(&expr), format!("x IN ({})", parts.join(", ")));
    }

    // ── Determinism ────────────────────────────────────────────────

    #[test]
    fn prop_deterministic_and_matches_display(expr in arb_expr()) {
        let first = deparse(&expr);
        let second = deparse(&expr);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(expr.to_string(), first);
    }
}
