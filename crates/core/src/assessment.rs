//! Overall incident response readiness assessment.
//!
//! The assessment is fully self-describing: every field needed to re-display
//! or export it is present, nothing is derived on read. The aggregator
//! produces it once and nothing mutates it afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ReadinessLevel;

/// Comprehensive readiness assessment for one organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessAssessment {
    /// Unique assessment ID.
    pub assessment_id: String,

    /// Weighted overall score in [0, 1].
    pub overall_score: f64,
    pub readiness_level: ReadinessLevel,

    /// Component scores, each in [0, 1].
    pub evidence_availability: f64,
    pub timeline_reconstruction: f64,
    pub playbook_effectiveness: f64,
    pub policy_alignment: f64,

    #[serde(default)]
    pub critical_gaps: Vec<String>,
    #[serde(default)]
    pub high_priority_gaps: Vec<String>,
    #[serde(default)]
    pub medium_priority_gaps: Vec<String>,

    /// Prioritized recommendations, capped at 15 entries.
    #[serde(default)]
    pub recommendations: Vec<String>,

    pub generated_at: DateTime<Utc>,
}
