//! Drives traversal per eligible network and one model-wide spacing run.

use chrono::{DateTime, Utc};
use conduit_core::config::ConduitConfig;
use conduit_core::errors::{PipelineError, PipelineResult, SourceError};
use conduit_core::traits::ModelSource;
use conduit_core::types::{Network, PhysicalElement};
use rayon::prelude::*;

use super::eligibility::check_eligibility;
use super::types::{AnalysisReport, SystemAnalysis};
use crate::connectivity::build_connectivity;
use crate::proximity::ProximityAnalyzer;
use crate::traversal::TraversalEngine;

/// Enumerated input for one eligible network.
struct NetworkSnapshot {
    network: Network,
    elements: Result<Vec<PhysicalElement>, SourceError>,
}

/// Composes per-network trees and the spacing analysis into one report.
#[derive(Debug, Clone, Default)]
pub struct ReportAssembler {
    config: ConduitConfig,
}

impl ReportAssembler {
    pub fn new(config: ConduitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConduitConfig {
        &self.config
    }

    /// Assemble a report stamped with the current time.
    pub fn assemble<S: ModelSource>(
        &self,
        source: &S,
    ) -> Result<PipelineResult<AnalysisReport>, PipelineError> {
        self.assemble_at(source, Utc::now())
    }

    /// Assemble a report stamped with `timestamp`.
    ///
    /// Only failing to list networks or devices aborts the run. Per-network
    /// failures leave that network without a tree and are collected as
    /// non-fatal errors.
    pub fn assemble_at<S: ModelSource>(
        &self,
        source: &S,
        timestamp: DateTime<Utc>,
    ) -> Result<PipelineResult<AnalysisReport>, PipelineError> {
        let model_name = source.model_name();
        tracing::info!(model = %model_name, "analysis started");

        let snapshots = self.snapshot_networks(source)?;
        let devices = source.enumerate_devices()?;

        // Host access is done; the rest is pure and may fan out.
        let outcomes: Vec<(SystemAnalysis, Option<PipelineError>)> =
            if self.config.traversal.effective_parallel() {
                snapshots.into_par_iter().map(analyze_network).collect()
            } else {
                snapshots.into_iter().map(analyze_network).collect()
            };

        let mut result = PipelineResult::new(AnalysisReport::default());
        let mut systems = Vec::with_capacity(outcomes.len());
        for (system, error) in outcomes {
            if let Some(error) = error {
                result.add_error(error);
            }
            systems.push(system);
        }
        systems.sort_by_key(|s| s.system_id);

        let spacing = ProximityAnalyzer::new(&self.config.spacing).analyze(&devices);

        result.data = AnalysisReport {
            model_name,
            analysis_date: timestamp,
            total_sprinklers: devices.len(),
            total_systems: systems.len(),
            compliance_rate: spacing.compliance_rate,
            systems,
            spacing_violations: spacing.violations,
        };

        tracing::info!(
            systems = result.data.total_systems,
            sprinklers = result.data.total_sprinklers,
            violations = result.data.spacing_violations.len(),
            compliance = result.data.compliance_rate,
            failed = result.error_count(),
            "analysis complete"
        );

        Ok(result)
    }

    /// Filter to eligible networks and enumerate their elements, sequentially.
    fn snapshot_networks<S: ModelSource>(
        &self,
        source: &S,
    ) -> Result<Vec<NetworkSnapshot>, PipelineError> {
        let mut snapshots = Vec::new();
        for network in source.networks()? {
            let classification = source.classify_network(&network);
            let eligibility = check_eligibility(&network, &classification, &self.config.traversal);
            if !eligibility.is_eligible() {
                tracing::debug!(
                    network = %network.id,
                    name = %network.name,
                    reason = eligibility.name(),
                    "network skipped"
                );
                continue;
            }

            let elements = source.enumerate_elements(&network);
            snapshots.push(NetworkSnapshot {
                network: Network {
                    name: classification.name,
                    domain: classification.domain,
                    ..network
                },
                elements,
            });
        }
        Ok(snapshots)
    }
}

/// Build, traverse, and summarize one network. Never fails the run.
fn analyze_network(snapshot: NetworkSnapshot) -> (SystemAnalysis, Option<PipelineError>) {
    let NetworkSnapshot { network, elements } = snapshot;

    let elements = match elements {
        Ok(elements) => elements,
        Err(e) => {
            tracing::warn!(network = %network.id, error = %e, "element enumeration failed");
            let mut system =
                SystemAnalysis::with_counts(network.id, network.name.clone(), network.domain, &[]);
            system.element_count = network.element_count();
            system.traversal_error = Some(e.to_string());
            return (system, Some(PipelineError::Source(e)));
        }
    };

    let mut system =
        SystemAnalysis::with_counts(network.id, network.name.clone(), network.domain, &elements);
    let (graph, stats) = build_connectivity(&elements);
    tracing::debug!(
        network = %network.id,
        elements = stats.elements,
        connections = stats.connections,
        asymmetric = stats.asymmetric_dropped,
        isolated = stats.isolated,
        "connectivity built"
    );

    match TraversalEngine::new(&graph)
        .with_labels(&elements)
        .traverse(network.base_element)
    {
        Ok(tree) => {
            let tree_stats = tree.stats();
            system.root_element_id = Some(tree.root().element);
            system.tree_depth = tree_stats.depth;
            system.branch_count = tree_stats.branch_count;
            system.tree = Some(tree.to_nested());
            (system, None)
        }
        Err(e) => {
            tracing::warn!(network = %network.id, name = %network.name, error = %e, "traversal failed");
            system.traversal_error = Some(e.to_string());
            let error = PipelineError::Traversal {
                network: network.id.0,
                source: e,
            };
            (system, Some(error))
        }
    }
}
