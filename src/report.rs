//! Threshold evaluation and violation reporting.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::complexity::scope_stack::ScopeRecord;
use crate::config::ComplexityThresholds;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportKind {
    Container,
    Unit,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportKind::Container => write!(f, "container"),
            ReportKind::Unit => write!(f, "unit"),
        }
    }
}

/// One threshold violation.
///
/// For unit reports `value` is the raw decision-point count and
/// `secondary_value` is 0. For container reports `value` is the rounded
/// per-unit average and `secondary_value` the highest complexity among the
/// container's direct units.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityReport {
    pub kind: ReportKind,
    pub display_name: String,
    pub value: u32,
    pub secondary_value: u32,
}

/// Receiver for finished reports, in scope pop order: a container's units
/// arrive strictly before the container itself.
pub trait ReportSink {
    fn report(&mut self, report: ComplexityReport);
}

/// Vec-backed sink for callers that want the full report sequence.
#[derive(Debug, Default)]
pub struct CollectingSink {
    reports: Vec<ComplexityReport>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[ComplexityReport] {
        &self.reports
    }

    pub fn into_reports(self) -> Vec<ComplexityReport> {
        self.reports
    }
}

impl ReportSink for CollectingSink {
    fn report(&mut self, report: ComplexityReport) {
        self.reports.push(report);
    }
}

/// Decide whether a finished unit scope is reported.
pub fn evaluate_unit(
    finished: &ScopeRecord,
    thresholds: &ComplexityThresholds,
) -> Option<ComplexityReport> {
    if !thresholds.show_unit_metrics || finished.decision_points < thresholds.report_level {
        return None;
    }
    Some(ComplexityReport {
        kind: ReportKind::Unit,
        display_name: finished.display_name.clone(),
        value: finished.decision_points,
        secondary_value: 0,
    })
}

/// Decide whether a finished container scope is reported.
pub fn evaluate_container(
    finished: &ScopeRecord,
    average: u32,
    thresholds: &ComplexityThresholds,
) -> Option<ComplexityReport> {
    if !thresholds.show_container_metrics {
        return None;
    }
    if average < thresholds.report_level
        && finished.highest_child_complexity < thresholds.report_level
    {
        return None;
    }
    Some(ComplexityReport {
        kind: ReportKind::Container,
        display_name: finished.display_name.clone(),
        value: average,
        secondary_value: finished.highest_child_complexity,
    })
}
