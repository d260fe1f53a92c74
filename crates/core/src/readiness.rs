use serde::{Deserialize, Serialize};

/// Incident response readiness classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReadinessLevel {
    Critical,
    Low,
    Moderate,
    High,
    Excellent,
}

/// Ordered (lower bound, level) ladder. Evaluated top-down, first match
/// wins, so every boundary is closed above.
const LEVEL_LADDER: [(f64, ReadinessLevel); 5] = [
    (0.85, ReadinessLevel::Excellent),
    (0.75, ReadinessLevel::High),
    (0.60, ReadinessLevel::Moderate),
    (0.40, ReadinessLevel::Low),
    (0.0, ReadinessLevel::Critical),
];

impl ReadinessLevel {
    /// Classify an overall score via the threshold ladder.
    pub fn from_score(score: f64) -> Self {
        LEVEL_LADDER
            .iter()
            .find(|(bound, _)| score >= *bound)
            .map(|(_, level)| *level)
            .unwrap_or(ReadinessLevel::Critical)
    }

    pub fn as_str(&self) -> &str {
        match self {
            ReadinessLevel::Critical => "Critical",
            ReadinessLevel::Low => "Low",
            ReadinessLevel::Moderate => "Moderate",
            ReadinessLevel::High => "High",
            ReadinessLevel::Excellent => "Excellent",
        }
    }
}
