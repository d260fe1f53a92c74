//! Hypothetical incident scenarios and their readiness results.

use serde::{Deserialize, Serialize};

/// Scenario complexity rating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

/// Definition of a hypothetical incident scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioDefinition {
    pub name: String,
    pub description: String,
    /// Log sources the investigation would depend on.
    #[serde(default)]
    pub required_logs: Vec<String>,
    /// Playbook the response would follow.
    pub required_playbook: String,
    pub complexity: Complexity,
}

/// Readiness evaluation for one scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub description: String,

    /// Composite readiness score in [0, 1].
    pub readiness_score: f64,
    /// Fraction of required log sources covered, in [0, 1].
    pub log_availability: f64,
    pub playbook_match: bool,
    /// Timeline reconstruction feasibility in [0, 1].
    pub timeline_feasibility: f64,

    #[serde(default)]
    pub gaps: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
}
