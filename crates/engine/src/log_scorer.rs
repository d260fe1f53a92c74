//! Log source availability and quality scoring.
//!
//! Scores are heuristic: the evaluator trusts the self-reported source list
//! and applies fixed weights keyed on the source name. No log content is
//! ever inspected.

use irr_core::score::mean_or_zero;
use irr_core::{EnvironmentProfile, LogAnalysisResult};
use tracing::debug;

/// Minimum retention period (days) for investigation-grade evidence.
pub const RETENTION_FLOOR_DAYS: u32 = 90;

/// Timestamp consistency for sources with managed clocks (Windows, Syslog).
const TIMESTAMP_MANAGED: f64 = 0.85;
/// Timestamp consistency for everything else.
const TIMESTAMP_UNMANAGED: f64 = 0.75;
/// Consistency below this raises an NTP synchronization issue.
const TIMESTAMP_TARGET: f64 = 0.9;

const VOLUME_BASELINE: f64 = 0.80;
const COMPLETENESS_BASELINE: f64 = 0.75;
/// Application and custom logs tend to miss security events.
const COMPLETENESS_APP_LOGS: f64 = 0.65;

/// Score one log source against the environment profile.
///
/// Availability is always true: the source was self-reported as present.
/// Name matching is case-sensitive substring, matching how sources are
/// conventionally entered ("Windows Event Logs", "Syslog", "Custom App Logs").
pub fn score_log_source(source: &str, profile: &EnvironmentProfile) -> LogAnalysisResult {
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    let retention_compliance = profile.retention_days >= RETENTION_FLOOR_DAYS;
    if !retention_compliance {
        issues.push(format!(
            "Retention period ({} days) below recommended {} days",
            profile.retention_days, RETENTION_FLOOR_DAYS
        ));
        recommendations.push(format!(
            "Increase log retention to at least {} days",
            RETENTION_FLOOR_DAYS
        ));
    }

    let timestamp_consistency = if source.contains("Windows") || source.contains("Syslog") {
        TIMESTAMP_MANAGED
    } else {
        TIMESTAMP_UNMANAGED
    };
    if timestamp_consistency < TIMESTAMP_TARGET {
        issues.push("Potential timestamp synchronization issues detected".to_string());
        recommendations.push("Implement NTP synchronization across all log sources".to_string());
    }

    let volume_score = VOLUME_BASELINE;
    let mut completeness_score = COMPLETENESS_BASELINE;
    if source.contains("Application") || source.contains("Custom") {
        completeness_score = COMPLETENESS_APP_LOGS;
        issues.push("Application logs may lack critical security events".to_string());
        recommendations.push(
            "Enhance application logging to include authentication and authorization events"
                .to_string(),
        );
    }

    debug!(
        source,
        timestamp_consistency, completeness_score, "scored log source"
    );

    LogAnalysisResult {
        source_name: source.to_string(),
        available: true,
        retention_compliance,
        timestamp_consistency,
        volume_score,
        completeness_score,
        issues,
        recommendations,
    }
}

/// Overall evidence availability: mean per-source quality. 0.0 when no
/// sources have been scored.
pub fn evidence_availability(results: &[LogAnalysisResult]) -> f64 {
    let scores: Vec<f64> = results.iter().map(LogAnalysisResult::quality_score).collect();
    mean_or_zero(&scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use irr_core::EnvironmentProfile;

    fn profile_with_retention(days: u32) -> EnvironmentProfile {
        EnvironmentProfile::builder("Test Org")
            .log_sources(vec!["Windows Event Logs".to_string()])
            .retention_days(days)
            .build()
    }

    #[test]
    fn test_windows_source_with_compliant_retention() {
        let result = score_log_source("Windows Event Logs", &profile_with_retention(90));

        assert!(result.available);
        assert!(result.retention_compliance);
        assert_eq!(result.timestamp_consistency, 0.85);
        assert_eq!(result.volume_score, 0.80);
        assert_eq!(result.completeness_score, 0.75);
        // 0.85 < 0.9 still raises the NTP issue; nothing else fires.
        assert_eq!(result.issues.len(), 1);
    }

    #[test]
    fn test_custom_source_with_short_retention() {
        let result = score_log_source("Custom App Logs", &profile_with_retention(30));

        assert!(!result.retention_compliance);
        assert_eq!(result.timestamp_consistency, 0.75);
        assert_eq!(result.completeness_score, 0.65);
        assert!(result.issues.len() >= 2);
        assert!(result
            .issues
            .iter()
            .any(|i| i.contains("Retention period (30 days)")));
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("authentication and authorization")));
    }

    #[test]
    fn test_syslog_timestamp_consistency() {
        let result = score_log_source("Syslog", &profile_with_retention(180));
        assert_eq!(result.timestamp_consistency, 0.85);
    }

    #[test]
    fn test_scores_in_unit_interval() {
        for source in ["Windows Event Logs", "Syslog", "Application Logs", "EDR"] {
            let result = score_log_source(source, &profile_with_retention(7));
            for score in [
                result.timestamp_consistency,
                result.volume_score,
                result.completeness_score,
            ] {
                assert!((0.0..=1.0).contains(&score), "{source}: {score}");
            }
        }
    }

    #[test]
    fn test_evidence_availability_empty() {
        assert_eq!(evidence_availability(&[]), 0.0);
    }

    #[test]
    fn test_evidence_availability_mean() {
        let profile = profile_with_retention(90);
        let results = vec![
            score_log_source("Windows Event Logs", &profile),
            score_log_source("Application Logs", &profile),
        ];
        let expected = (results[0].quality_score() + results[1].quality_score()) / 2.0;
        assert!((evidence_availability(&results) - expected).abs() < 1e-12);
    }
}
