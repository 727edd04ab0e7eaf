//! Per-construct complexity contributions.

use crate::ast::NodeKind;

use super::boolean_ops::count_optional;

/// Complexity contribution of one control construct, `None` for nodes that
/// are not decision points. Pure lookup; the caller applies the value to the
/// open scope.
pub fn decision_contribution(kind: &NodeKind) -> Option<u32> {
    match kind {
        // A branch or loop always has a complexity of at least 1; each
        // short-circuit operator in its guard adds another path.
        NodeKind::If { guard }
        | NodeKind::ElsifClause { guard }
        | NodeKind::ForLoop { guard }
        | NodeKind::WhileLoop { guard }
        | NodeKind::Loop { guard } => Some(1 + count_optional(guard.as_ref())),
        // The case header itself adds no path; the enclosing scope's
        // baseline already covers it. Only selector operators count here,
        // each WHEN arm contributes its own 1.
        NodeKind::CaseStatement { selector } => Some(count_optional(selector.as_ref())),
        NodeKind::CaseWhenClause | NodeKind::ExceptionHandler => Some(1),
        _ => None,
    }
}
