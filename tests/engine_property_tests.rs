//! Property-based tests for the accumulation engine
//!
//! These tests verify invariants that should hold for all inputs:
//! - Every unit report carries the baseline-floored value
//! - Container aggregation matches the closed-form average/highest
//! - A container with no units always averages 1
//! - Analysis is deterministic across repeated runs

use cyclomap::complexity::boolean_ops::count_short_circuit_ops;
use cyclomap::{ComplexityThresholds, CyclomaticEngine, Expr, Node};
use proptest::prelude::*;

fn engine(report_level: u32) -> CyclomaticEngine {
    CyclomaticEngine::new(ComplexityThresholds {
        report_level,
        ..Default::default()
    })
    .unwrap()
}

/// Build a guard containing exactly `ops` short-circuit operators.
fn guard_with_ops(ops: u32) -> Expr {
    let mut expr = Expr::ident("c0");
    for i in 0..ops {
        expr = if i % 2 == 0 {
            Expr::and(expr, Expr::ident(format!("c{}", i + 1)))
        } else {
            Expr::or(expr, Expr::ident(format!("c{}", i + 1)))
        };
    }
    expr
}

/// Unit whose decision points are exactly `1 + sum(1 + ops_i)`.
fn unit_with_ifs(name: &str, per_if_ops: &[u32]) -> Node {
    let body = per_if_ops
        .iter()
        .map(|&ops| Node::if_stmt(guard_with_ops(ops), vec![Node::statement()]))
        .collect();
    Node::program_unit(name, body)
}

/// Statement-level subtree generator; decision constructs only, so any
/// placement inside a unit is structurally valid.
fn statement_tree() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        Just(Node::statement()),
        (0u32..3).prop_map(|ops| Node::if_stmt(guard_with_ops(ops), vec![Node::statement()])),
        Just(Node::exception_handler(vec![Node::statement()])),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            (0u32..3, prop::collection::vec(inner.clone(), 0..4))
                .prop_map(|(ops, body)| Node::if_stmt(guard_with_ops(ops), body)),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Node::block),
            (0u32..2, prop::collection::vec(inner.clone(), 0..3)).prop_map(|(ops, body)| {
                Node::while_loop(guard_with_ops(ops), body)
            }),
            prop::collection::vec(inner.prop_map(|n| Node::case_when(vec![n])), 1..4)
                .prop_map(|arms| Node::case_stmt(None, arms)),
        ]
    })
}

/// Whole-tree generator: a root holding containers of units of statements.
fn analysis_tree() -> impl Strategy<Value = Node> {
    let unit = prop::collection::vec(statement_tree(), 0..5)
        .prop_map(|body| Node::program_unit("u", body))
        .boxed();
    let container = prop::collection::vec(unit.clone(), 0..4)
        .prop_map(|units| Node::package_body("pkg", units));
    prop::collection::vec(prop_oneof![unit, container], 0..4).prop_map(Node::input)
}

proptest! {
    /// Property: a generated guard contains exactly the requested number of
    /// short-circuit operators
    #[test]
    fn prop_guard_generator_is_exact(ops in 0u32..16) {
        prop_assert_eq!(count_short_circuit_ops(&guard_with_ops(ops)), ops);
    }

    /// Property: a unit's decision points follow the closed form
    /// `1 + sum(1 + ops_i)` and never drop below the baseline of 1
    #[test]
    fn prop_unit_value_matches_closed_form(per_if_ops in prop::collection::vec(0u32..4, 0..8)) {
        let tree = Node::input(vec![unit_with_ifs("u", &per_if_ops)]);
        let reports = engine(1).analyze_to_vec(&tree).unwrap();

        let expected: u32 = 1 + per_if_ops.iter().map(|ops| 1 + ops).sum::<u32>();
        prop_assert_eq!(reports.len(), 1);
        prop_assert_eq!(reports[0].value, expected);
        prop_assert!(reports[0].value >= 1);
    }

    /// Property: container aggregation equals the closed-form unit fold
    #[test]
    fn prop_container_aggregation(unit_if_counts in prop::collection::vec(0u32..6, 1..6)) {
        let units = unit_if_counts
            .iter()
            .map(|&n| unit_with_ifs("u", &vec![0; n as usize]))
            .collect();
        let tree = Node::input(vec![Node::package_body("pkg", units)]);
        let reports = engine(1).analyze_to_vec(&tree).unwrap();

        let unit_points: Vec<u32> = unit_if_counts.iter().map(|&n| 1 + n).collect();
        let total: u32 = 1 + unit_points.iter().sum::<u32>();
        let expected_average =
            (total as f64 / unit_points.len() as f64).round() as u32;
        let expected_highest = *unit_points.iter().max().unwrap();

        let container = reports.last().unwrap();
        prop_assert_eq!(container.value, expected_average);
        prop_assert_eq!(container.secondary_value, expected_highest);
        prop_assert_eq!(reports.len(), unit_points.len() + 1,
            "one report per unit plus the container at level 1");
    }

    /// Property: a container with no units averages exactly 1 no matter how
    /// many decision points land on it directly
    #[test]
    fn prop_empty_container_average_is_one(direct_ifs in prop::collection::vec(0u32..4, 0..8)) {
        let body = direct_ifs
            .iter()
            .map(|&ops| Node::if_stmt(guard_with_ops(ops), vec![Node::statement()]))
            .collect();
        let tree = Node::input(vec![Node::package_body("pkg", body)]);
        let reports = engine(1).analyze_to_vec(&tree).unwrap();

        prop_assert_eq!(reports.len(), 1);
        prop_assert_eq!(reports[0].value, 1);
        prop_assert_eq!(reports[0].secondary_value, 0);
    }

    /// Property: repeated analysis of the same tree with the same thresholds
    /// yields identical report sequences
    #[test]
    fn prop_analysis_is_deterministic(tree in analysis_tree(), level in 1u32..30) {
        let engine = engine(level);
        let first = engine.analyze_to_vec(&tree).unwrap();
        let second = engine.analyze_to_vec(&tree).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: every unit report that appears carries a value of at least 1
    #[test]
    fn prop_reported_units_respect_baseline_floor(tree in analysis_tree()) {
        let reports = engine(1).analyze_to_vec(&tree).unwrap();
        for report in reports {
            prop_assert!(report.value >= 1);
        }
    }
}
