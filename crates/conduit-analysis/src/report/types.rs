//! Aggregate report types. Serialized field names are a fixed contract.

use chrono::{DateTime, Utc};
use conduit_core::errors::PipelineError;
use conduit_core::types::{ElementCategory, ElementId, NetworkDomain, NetworkId, PhysicalElement};
use serde::{Deserialize, Serialize};

use crate::proximity::SpacingViolation;
use crate::traversal::NestedNode;

/// Per-network analysis record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SystemAnalysis {
    pub system_id: NetworkId,
    pub system_name: String,
    pub domain: NetworkDomain,
    pub element_count: usize,
    pub sprinkler_count: usize,
    pub pipe_count: usize,
    pub fitting_count: usize,
    pub total_pipe_length: f64,
    pub root_element_id: Option<ElementId>,
    pub tree_depth: usize,
    pub branch_count: usize,
    /// Top-down tree; absent when traversal failed.
    pub tree: Option<NestedNode>,
    pub traversal_error: Option<String>,
}

impl SystemAnalysis {
    /// Record with counts only, no tree yet.
    pub fn with_counts(
        id: NetworkId,
        name: impl Into<String>,
        domain: NetworkDomain,
        elements: &[PhysicalElement],
    ) -> Self {
        let mut record = Self {
            system_id: id,
            system_name: name.into(),
            domain,
            element_count: elements.len(),
            sprinkler_count: 0,
            pipe_count: 0,
            fitting_count: 0,
            total_pipe_length: 0.0,
            root_element_id: None,
            tree_depth: 0,
            branch_count: 0,
            tree: None,
            traversal_error: None,
        };
        for element in elements {
            match element.category() {
                ElementCategory::Pipe => {
                    record.pipe_count += 1;
                    record.total_pipe_length += element.pipe_length().unwrap_or(0.0);
                }
                ElementCategory::Fitting => record.fitting_count += 1,
                ElementCategory::TerminalDevice => record.sprinkler_count += 1,
                ElementCategory::Unknown => {}
            }
        }
        record
    }

    pub fn has_tree(&self) -> bool {
        self.tree.is_some()
    }
}

/// The aggregate result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnalysisReport {
    pub model_name: String,
    pub analysis_date: DateTime<Utc>,
    pub total_sprinklers: usize,
    pub total_systems: usize,
    pub compliance_rate: f64,
    pub systems: Vec<SystemAnalysis>,
    pub spacing_violations: Vec<SpacingViolation>,
}

impl Default for AnalysisReport {
    fn default() -> Self {
        Self {
            model_name: String::new(),
            analysis_date: DateTime::<Utc>::default(),
            total_sprinklers: 0,
            total_systems: 0,
            compliance_rate: 100.0,
            systems: Vec::new(),
            spacing_violations: Vec::new(),
        }
    }
}

impl AnalysisReport {
    pub fn system(&self, id: NetworkId) -> Option<&SystemAnalysis> {
        self.systems.iter().find(|s| s.system_id == id)
    }

    pub fn to_json(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
