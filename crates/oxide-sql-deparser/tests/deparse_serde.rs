//! Trees stored as JSON fixtures deparse the same after loading.

#![cfg(feature = "serde")]

mod common;
use common::*;

use chrono::NaiveDate;
use oxide_sql_deparser::ast::{
    AnalyticExpression, Expr, Function, Literal, OrderByElement, OracleJoin,
};

fn reload(expr: &Expr) -> Expr {
    let json = serde_json::to_string(expr).unwrap();
    serde_json::from_str(&json).unwrap_or_else(|e| panic!("Failed to load: {json}\nError: {e}"))
}

#[test]
fn reloaded_tree_deparses_identically() {
    let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let expr = Expr::column("a")
        .eq(Expr::column("b"))
        .with_oracle_join(OracleJoin::Left)
        .and(Expr::column("d").lt(Literal::Date(date).into()))
        .and(Expr::from(
            Function::new("count")
                .with_args(vec![Expr::column("x")])
                .distinct(),
        )
        .gt(Expr::long(1)));

    let reloaded = reload(&expr);
    assert_eq!(reloaded, expr);
    assert_eq!(
        deparse(&reloaded),
        "a = b(+) AND d < {d '2024-02-29'} AND count(DISTINCT x) > 1"
    );
}

#[test]
fn analytic_and_sub_select_survive_reload() {
    let analytic: Expr = AnalyticExpression::new("ROW_NUMBER")
        .order_by(vec![OrderByElement::desc(Expr::column("ts"))])
        .into();
    let expr = analytic.lt(Expr::from(select_column("n", "limits")));
    assert_eq!(deparse(&reload(&expr)), deparse(&expr));
}

#[test]
fn fixture_text_loads() {
    let json = r#"{"Column":{"table":null,"name":"id"}}"#;
    let expr: Expr = serde_json::from_str(json).unwrap();
    assert_eq!(deparse(&expr), "id");
}
