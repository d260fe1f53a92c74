use serde::{Deserialize, Serialize};

/// Evaluation of a single incident response playbook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybookAnalysisResult {
    pub playbook_name: String,

    /// Procedure clarity score in [0, 1].
    pub clarity_score: f64,
    /// Operational feasibility score in [0, 1].
    pub feasibility_score: f64,
    /// Coverage completeness score in [0, 1].
    pub completeness_score: f64,

    #[serde(default)]
    pub ambiguous_steps: Vec<String>,
    #[serde(default)]
    pub missing_elements: Vec<String>,
    #[serde(default)]
    pub unrealistic_assumptions: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl PlaybookAnalysisResult {
    /// Mean of the three effectiveness sub-scores.
    pub fn effectiveness(&self) -> f64 {
        (self.clarity_score + self.feasibility_score + self.completeness_score) / 3.0
    }
}
