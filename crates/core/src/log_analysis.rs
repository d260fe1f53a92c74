use serde::{Deserialize, Serialize};

/// Availability and quality analysis for a single log source.
///
/// Created by the log scorer, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogAnalysisResult {
    pub source_name: String,
    pub available: bool,
    pub retention_compliance: bool,

    /// Timestamp consistency score in [0, 1].
    pub timestamp_consistency: f64,
    /// Log volume score in [0, 1].
    pub volume_score: f64,
    /// Security event completeness score in [0, 1].
    pub completeness_score: f64,

    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl LogAnalysisResult {
    /// Mean of the three quality sub-scores.
    pub fn quality_score(&self) -> f64 {
        (self.timestamp_consistency + self.volume_score + self.completeness_score) / 3.0
    }
}
