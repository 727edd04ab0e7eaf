pub mod boolean_ops;
pub mod decision_points;
pub mod scope_stack;
mod walker;

use crate::ast::Node;
use crate::config::ComplexityThresholds;
use crate::errors::Result;
use crate::report::{CollectingSink, ComplexityReport, ReportSink};

use walker::Walker;

/// Cyclomatic-complexity accumulation engine.
///
/// Holds one immutable threshold snapshot; each [`analyze`](Self::analyze)
/// call walks a complete tree with its own scope stack, so one engine value
/// can serve repeated or concurrent traversals.
#[derive(Clone, Debug)]
pub struct CyclomaticEngine {
    thresholds: ComplexityThresholds,
}

impl CyclomaticEngine {
    /// Validates the thresholds once up front; the engine never re-reads
    /// configuration mid-run.
    pub fn new(thresholds: ComplexityThresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &ComplexityThresholds {
        &self.thresholds
    }

    /// Walk one complete tree, handing threshold violations to `sink` in
    /// scope pop order. On a stack underflow the run aborts; reports already
    /// handed to the sink stay delivered, nothing further is emitted.
    pub fn analyze(&self, root: &Node, sink: &mut dyn ReportSink) -> Result<()> {
        let mut walker = Walker::new(&self.thresholds, sink);
        walker.walk(root)?;
        walker.finish()
    }

    /// Convenience wrapper collecting the report sequence into a `Vec`.
    pub fn analyze_to_vec(&self, root: &Node) -> Result<Vec<ComplexityReport>> {
        let mut sink = CollectingSink::new();
        self.analyze(root, &mut sink)?;
        Ok(sink.into_reports())
    }
}
