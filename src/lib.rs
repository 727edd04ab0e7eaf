// Export modules for library usage
pub mod ast;
pub mod complexity;
pub mod config;
pub mod errors;
pub mod report;

// Re-export commonly used types
pub use crate::ast::{Expr, Node, NodeKind};
pub use crate::complexity::CyclomaticEngine;
pub use crate::config::ComplexityThresholds;
pub use crate::errors::{EngineError, Result};
pub use crate::report::{CollectingSink, ComplexityReport, ReportKind, ReportSink};
