//! Report Assembler: per-network traversal plus model-wide spacing.

pub mod assembler;
pub mod eligibility;
pub mod types;

pub use assembler::ReportAssembler;
pub use eligibility::{check_eligibility, Eligibility};
pub use types::{AnalysisReport, SystemAnalysis};
