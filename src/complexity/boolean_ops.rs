//! Short-circuit operator counting for guard and selector expressions.

use crate::ast::Expr;

/// Count the short-circuit AND/OR operators anywhere in an expression
/// subtree, including nested sub-expressions. Operator precedence and
/// traversal order do not affect the result; only the total number of
/// logical-combination nodes matters.
pub fn count_short_circuit_ops(expr: &Expr) -> u32 {
    match expr {
        Expr::And(lhs, rhs) | Expr::Or(lhs, rhs) => {
            1 + count_short_circuit_ops(lhs) + count_short_circuit_ops(rhs)
        }
        Expr::Not(inner) => count_short_circuit_ops(inner),
        Expr::Relational { lhs, rhs, .. } => {
            count_short_circuit_ops(lhs) + count_short_circuit_ops(rhs)
        }
        Expr::Ident(_) | Expr::Literal(_) => 0,
    }
}

/// Operator count of an optional guard. A construct without a guard (a bare
/// exception handler, an unconditional loop) counts as 0.
pub fn count_optional(guard: Option<&Expr>) -> u32 {
    guard.map(count_short_circuit_ops).unwrap_or(0)
}
