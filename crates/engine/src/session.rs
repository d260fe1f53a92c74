//! Assessment session: the explicit context object for one evaluation.
//!
//! Owns the environment profile and every result collection produced during
//! the run. Scorers receive borrows, so independent sessions never share
//! state and can run side by side in tests.

use chrono::{DateTime, Utc};
use irr_core::{
    EnvironmentProfile, LogAnalysisResult, PlaybookAnalysisResult, ReadinessAssessment,
    ScenarioDefinition, ScenarioResult,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::aggregator::{aggregate, AggregationInputs};
use crate::log_scorer::{evidence_availability, score_log_source};
use crate::playbook_scorer::{playbook_effectiveness, score_playbook, STANDARD_PLAYBOOKS};
use crate::policy_tools::PolicyToolOutcome;
use crate::scenario_eval::evaluate_scenario;

/// One in-progress readiness evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentSession {
    pub id: String,
    pub profile: EnvironmentProfile,

    #[serde(default)]
    pub log_results: Vec<LogAnalysisResult>,
    #[serde(default)]
    pub playbook_results: Vec<PlaybookAnalysisResult>,
    #[serde(default)]
    pub policy_outcome: PolicyToolOutcome,
    #[serde(default)]
    pub scenario_results: Vec<ScenarioResult>,

    pub started_at: DateTime<Utc>,
}

impl AssessmentSession {
    /// Start a session for a collected environment profile.
    pub fn new(profile: EnvironmentProfile) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            profile,
            log_results: Vec::new(),
            playbook_results: Vec::new(),
            policy_outcome: PolicyToolOutcome::default(),
            scenario_results: Vec::new(),
            started_at: Utc::now(),
        }
    }

    /// Score every log source in the profile. Replaces prior log results.
    pub fn analyze_logs(&mut self) -> &[LogAnalysisResult] {
        self.log_results = self
            .profile
            .log_sources
            .iter()
            .map(|source| score_log_source(source, &self.profile))
            .collect();
        info!(
            session = self.id.as_str(),
            sources = self.log_results.len(),
            "log analysis complete"
        );
        &self.log_results
    }

    /// Evaluate a single playbook by name and record the result.
    pub fn evaluate_playbook(&mut self, name: &str) -> PlaybookAnalysisResult {
        let result = score_playbook(name);
        self.playbook_results.push(result.clone());
        result
    }

    /// Evaluate the six standard incident response playbooks.
    pub fn evaluate_standard_playbooks(&mut self) {
        for name in STANDARD_PLAYBOOKS {
            self.evaluate_playbook(name);
        }
        info!(
            session = self.id.as_str(),
            playbooks = self.playbook_results.len(),
            "playbook evaluation complete"
        );
    }

    /// Record the policy/tool evaluation outcome.
    pub fn record_policy_outcome(&mut self, outcome: PolicyToolOutcome) {
        self.policy_outcome = outcome;
    }

    /// Evaluate one scenario against the results computed so far.
    pub fn run_scenario(&mut self, definition: &ScenarioDefinition) -> ScenarioResult {
        let result = evaluate_scenario(definition, &self.log_results, &self.playbook_results);
        self.scenario_results.push(result.clone());
        result
    }

    /// Current evidence availability aggregate.
    pub fn evidence_availability(&self) -> f64 {
        evidence_availability(&self.log_results)
    }

    /// Current playbook effectiveness aggregate.
    pub fn playbook_effectiveness(&self) -> f64 {
        playbook_effectiveness(&self.playbook_results)
    }

    /// Aggregate everything collected so far into the final assessment.
    pub fn finalize(&self) -> ReadinessAssessment {
        aggregate(&AggregationInputs {
            evidence_availability: self.evidence_availability(),
            playbook_effectiveness: self.playbook_effectiveness(),
            policy_score: self.policy_outcome.policy_score,
            tool_score: self.policy_outcome.tool_score,
            retention_days: self.profile.retention_days,
            log_results: &self.log_results,
            playbook_results: &self.playbook_results,
            bottlenecks: &self.policy_outcome.bottlenecks,
            scenario_results: &self.scenario_results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> EnvironmentProfile {
        EnvironmentProfile::builder("Test Org")
            .security_tools(vec!["EDR".to_string(), "SIEM".to_string()])
            .log_sources(vec![
                "Windows Event Logs".to_string(),
                "Syslog".to_string(),
            ])
            .retention_days(90)
            .build()
    }

    #[test]
    fn test_analyze_logs_covers_every_source() {
        let mut session = AssessmentSession::new(profile());
        session.analyze_logs();
        assert_eq!(session.log_results.len(), 2);
        assert!(session.evidence_availability() > 0.0);
    }

    #[test]
    fn test_standard_playbooks_evaluated_once_each() {
        let mut session = AssessmentSession::new(profile());
        session.evaluate_standard_playbooks();
        assert_eq!(session.playbook_results.len(), STANDARD_PLAYBOOKS.len());
    }

    #[test]
    fn test_sessions_do_not_share_state() {
        let mut first = AssessmentSession::new(profile());
        let second = AssessmentSession::new(profile());

        first.analyze_logs();
        first.evaluate_playbook("Ransomware Response");

        assert_eq!(first.log_results.len(), 2);
        assert!(second.log_results.is_empty());
        assert!(second.playbook_results.is_empty());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_finalize_with_empty_collections() {
        let session = AssessmentSession::new(profile());
        let assessment = session.finalize();
        assert_eq!(assessment.evidence_availability, 0.0);
        assert_eq!(assessment.playbook_effectiveness, 0.0);
        assert_eq!(assessment.overall_score, 0.0);
    }
}
