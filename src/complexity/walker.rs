//! Depth-first traversal driver: pre-order scope entry, post-order exit.

use crate::ast::{Node, NodeKind};
use crate::config::ComplexityThresholds;
use crate::errors::Result;
use crate::report::{evaluate_container, evaluate_unit, ReportSink};

use super::decision_points::decision_contribution;
use super::scope_stack::ScopeStack;

pub(crate) struct Walker<'a> {
    thresholds: &'a ComplexityThresholds,
    sink: &'a mut dyn ReportSink,
    stack: ScopeStack,
}

impl<'a> Walker<'a> {
    pub(crate) fn new(thresholds: &'a ComplexityThresholds, sink: &'a mut dyn ReportSink) -> Self {
        Self {
            thresholds,
            sink,
            stack: ScopeStack::new(),
        }
    }

    pub(crate) fn walk(&mut self, node: &Node) -> Result<()> {
        match &node.kind {
            NodeKind::PackageBody { .. } => self.walk_container(node),
            NodeKind::ProgramUnit
            | NodeKind::TriggerUnit
            | NodeKind::TriggerTimingPointSection => self.walk_unit(node),
            // Declaration-only sections carry no executable complexity.
            NodeKind::PackageSpecification | NodeKind::TypeSpecification => Ok(()),
            kind => {
                if let Some(points) = decision_contribution(kind) {
                    self.stack.bump(points, kind)?;
                }
                // Guard expressions are consulted only through the operator
                // counter, never visited as nodes, so a logical operator can
                // never be counted twice.
                self.walk_children(node)
            }
        }
    }

    pub(crate) fn finish(self) -> Result<()> {
        debug_assert!(
            self.stack.is_empty(),
            "scope stack not drained after traversal"
        );
        Ok(())
    }

    fn walk_children(&mut self, node: &Node) -> Result<()> {
        for child in &node.children {
            self.walk(child)?;
        }
        Ok(())
    }

    fn walk_container(&mut self, node: &Node) -> Result<()> {
        self.stack.push_container(node.display_name());
        self.walk_children(node)?;
        let finished = self.stack.pop_container(&node.kind)?;
        let average = finished.complexity_average();
        log::debug!(
            "container '{}': average={}, highest={}",
            finished.display_name,
            average,
            finished.highest_child_complexity
        );
        if let Some(report) = evaluate_container(&finished, average, self.thresholds) {
            self.sink.report(report);
        }
        Ok(())
    }

    fn walk_unit(&mut self, node: &Node) -> Result<()> {
        self.stack.push_unit(node.display_name());
        self.walk_children(node)?;
        let finished = self.stack.pop_unit(&node.kind)?;
        log::debug!(
            "unit '{}': decision_points={}",
            finished.display_name,
            finished.decision_points
        );
        if let Some(report) = evaluate_unit(&finished, self.thresholds) {
            self.sink.report(report);
        }
        Ok(())
    }
}
