//! Scope records and the LIFO stack that aggregates them.
//!
//! Each scope record's lifetime is strictly nested, so a growable stack of
//! value-type records is enough; no shared ownership is needed. The stack is
//! local to one traversal and must be empty before and after a successful
//! run.

use crate::ast::NodeKind;
use crate::errors::{EngineError, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScopeKind {
    /// Aggregation target grouping callable units.
    Container,
    /// A single callable routine, trigger body, or named sub-section.
    Unit,
}

/// One open container or unit scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScopeRecord {
    pub kind: ScopeKind,
    pub display_name: String,
    /// Baseline 1: the single straight-line path through the scope.
    pub decision_points: u32,
    /// Maximum `decision_points` among unit scopes folded directly into
    /// this record. Non-decreasing.
    pub highest_child_complexity: u32,
    /// Number of unit scopes folded directly into this record.
    pub unit_count: u32,
}

impl ScopeRecord {
    pub fn new(kind: ScopeKind, display_name: String) -> Self {
        Self {
            kind,
            display_name,
            decision_points: 1,
            highest_child_complexity: 0,
            unit_count: 0,
        }
    }

    /// Rounded per-unit average for a container. A container with no units
    /// averages exactly 1 regardless of its own decision points.
    ///
    /// Rounding is half away from zero (`f64::round`); 9 points over 2
    /// units reports as 5.
    pub fn complexity_average(&self) -> u32 {
        if self.unit_count == 0 {
            1
        } else {
            (self.decision_points as f64 / self.unit_count as f64).round() as u32
        }
    }
}

/// Stack of open scopes for one tree traversal.
#[derive(Debug, Default)]
pub struct ScopeStack {
    entries: Vec<ScopeRecord>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_container(&mut self, display_name: String) {
        self.push(ScopeKind::Container, display_name);
    }

    pub fn push_unit(&mut self, display_name: String) {
        self.push(ScopeKind::Unit, display_name);
    }

    fn push(&mut self, kind: ScopeKind, display_name: String) {
        log::trace!("entering {:?} scope '{}'", kind, display_name);
        self.entries.push(ScopeRecord::new(kind, display_name));
    }

    /// Add a decision-point contribution to the open scope. A bump with no
    /// open scope means the traversal is structurally malformed and the run
    /// aborts.
    pub fn bump(&mut self, amount: u32, node: &NodeKind) -> Result<()> {
        match self.entries.last_mut() {
            Some(top) => {
                top.decision_points += amount;
                Ok(())
            }
            None => Err(EngineError::StackUnderflow {
                operation: "decision-point bump",
                node: node.label().to_string(),
            }),
        }
    }

    /// Close the current unit scope, folding its result into the enclosing
    /// scope when one exists. A unit popped with no enclosing scope is a
    /// degenerate top-level unit and simply has nothing to fold into.
    pub fn pop_unit(&mut self, node: &NodeKind) -> Result<ScopeRecord> {
        let finished = self.pop("unit-scope exit", node)?;
        debug_assert_eq!(finished.kind, ScopeKind::Unit);
        if let Some(parent) = self.entries.last_mut() {
            parent.unit_count += 1;
            parent.decision_points += finished.decision_points;
            parent.highest_child_complexity = parent
                .highest_child_complexity
                .max(finished.decision_points);
        }
        Ok(finished)
    }

    /// Close the current container scope. Containers never fold into
    /// enclosing containers; nested containers aggregate independently.
    pub fn pop_container(&mut self, node: &NodeKind) -> Result<ScopeRecord> {
        let finished = self.pop("container-scope exit", node)?;
        debug_assert_eq!(finished.kind, ScopeKind::Container);
        Ok(finished)
    }

    fn pop(&mut self, operation: &'static str, node: &NodeKind) -> Result<ScopeRecord> {
        let finished = self.entries.pop().ok_or_else(|| EngineError::StackUnderflow {
            operation,
            node: node.label().to_string(),
        })?;
        log::trace!(
            "exiting {:?} scope '{}' with {} decision points",
            finished.kind,
            finished.display_name,
            finished.decision_points
        );
        Ok(finished)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_baseline() {
        let record = ScopeRecord::new(ScopeKind::Unit, String::new());
        assert_eq!(record.decision_points, 1);
        assert_eq!(record.highest_child_complexity, 0);
        assert_eq!(record.unit_count, 0);
    }

    #[test]
    fn test_average_no_units_is_one() {
        let mut record = ScopeRecord::new(ScopeKind::Container, String::new());
        record.decision_points = 17;
        assert_eq!(record.complexity_average(), 1);
    }

    #[test]
    fn test_average_rounds_half_away_from_zero() {
        let mut record = ScopeRecord::new(ScopeKind::Container, String::new());
        record.unit_count = 2;

        record.decision_points = 9; // 4.5
        assert_eq!(record.complexity_average(), 5);

        record.decision_points = 7; // 3.5
        assert_eq!(record.complexity_average(), 4);

        record.decision_points = 6; // 3.0
        assert_eq!(record.complexity_average(), 3);

        record.decision_points = 8; // 4.0
        assert_eq!(record.complexity_average(), 4);
    }

    #[test]
    fn test_bump_with_no_open_scope_underflows() {
        let mut stack = ScopeStack::new();
        let err = stack.bump(1, &NodeKind::If { guard: None }).unwrap_err();
        assert!(matches!(
            err,
            EngineError::StackUnderflow {
                operation: "decision-point bump",
                ..
            }
        ));
    }

    #[test]
    fn test_pop_with_no_open_scope_underflows() {
        let mut stack = ScopeStack::new();
        assert!(stack.pop_unit(&NodeKind::ProgramUnit).is_err());
        assert!(stack
            .pop_container(&NodeKind::PackageBody { name: None })
            .is_err());
    }
}
