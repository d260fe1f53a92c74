//! Scenario-based readiness evaluation.
//!
//! Cross-references a hypothetical incident's requirements against the log
//! and playbook results already computed. Pure per-scenario function, no
//! state machine.

use irr_core::score::clamp01;
use irr_core::{
    Complexity, LogAnalysisResult, PlaybookAnalysisResult, ScenarioDefinition, ScenarioResult,
};
use tracing::debug;

const LOG_AVAILABILITY_WEIGHT: f64 = 0.4;
const PLAYBOOK_MATCH_WEIGHT: f64 = 0.3;
const TIMELINE_WEIGHT: f64 = 0.3;

/// Timeline reconstruction feasibility ladder.
const TIMELINE_STRONG: f64 = 0.85;
const TIMELINE_PARTIAL: f64 = 0.65;
const TIMELINE_WEAK: f64 = 0.40;

/// Evaluate readiness for one scenario against the computed results.
pub fn evaluate_scenario(
    definition: &ScenarioDefinition,
    log_results: &[LogAnalysisResult],
    playbook_results: &[PlaybookAnalysisResult],
) -> ScenarioResult {
    let mut gaps = Vec::new();
    let mut strengths = Vec::new();

    let available: Vec<&str> = log_results
        .iter()
        .filter(|r| r.available)
        .map(|r| r.source_name.as_str())
        .collect();

    let log_availability = if definition.required_logs.is_empty() {
        0.0
    } else {
        let covered = definition
            .required_logs
            .iter()
            .filter(|required| source_covered(&available, required))
            .count();
        covered as f64 / definition.required_logs.len() as f64
    };

    if log_availability < 1.0 {
        let missing: Vec<&str> = definition
            .required_logs
            .iter()
            .filter(|required| !source_covered(&available, required))
            .map(String::as_str)
            .collect();
        gaps.push(format!("Missing critical logs: {}", missing.join(", ")));
    } else {
        strengths.push("All required log sources available".to_string());
    }

    let required_playbook = definition.required_playbook.to_lowercase();
    let playbook_match = playbook_results
        .iter()
        .any(|p| p.playbook_name.to_lowercase().contains(&required_playbook));

    if playbook_match {
        strengths.push(format!(
            "Relevant playbook exists: {}",
            definition.required_playbook
        ));
    } else {
        gaps.push(format!("No playbook for {}", definition.required_playbook));
    }

    let timeline_feasibility = if log_availability >= 0.8 && playbook_match {
        TIMELINE_STRONG
    } else if log_availability >= 0.6 {
        TIMELINE_PARTIAL
    } else {
        TIMELINE_WEAK
    };

    let playbook_score = if playbook_match { 1.0 } else { 0.0 };
    let readiness_score = clamp01(
        log_availability * LOG_AVAILABILITY_WEIGHT
            + playbook_score * PLAYBOOK_MATCH_WEIGHT
            + timeline_feasibility * TIMELINE_WEIGHT,
    );

    debug!(
        scenario = definition.name.as_str(),
        log_availability, playbook_match, readiness_score, "evaluated scenario"
    );

    ScenarioResult {
        name: definition.name.clone(),
        description: definition.description.clone(),
        readiness_score,
        log_availability,
        playbook_match,
        timeline_feasibility,
        gaps,
        strengths,
    }
}

/// A required log counts as covered when some available source name
/// contains it, case-insensitively.
fn source_covered(available: &[&str], required: &str) -> bool {
    let required = required.to_lowercase();
    available
        .iter()
        .any(|source| source.to_lowercase().contains(&required))
}

/// The three predefined assessment scenarios.
pub fn builtin_scenarios() -> Vec<ScenarioDefinition> {
    vec![
        ScenarioDefinition {
            name: "Ransomware Attack".to_string(),
            description: "Multiple endpoints encrypted, ransom note detected".to_string(),
            required_logs: vec![
                "Windows Event Logs".to_string(),
                "EDR".to_string(),
                "Network Traffic".to_string(),
            ],
            required_playbook: "Ransomware Response".to_string(),
            complexity: Complexity::High,
        },
        ScenarioDefinition {
            name: "Credential Compromise".to_string(),
            description: "Suspicious login from unusual location detected".to_string(),
            required_logs: vec!["Authentication Logs".to_string(), "VPN Logs".to_string()],
            required_playbook: "Insider Threat Response".to_string(),
            complexity: Complexity::Medium,
        },
        ScenarioDefinition {
            name: "Data Exfiltration".to_string(),
            description: "Large outbound data transfer to unknown destination".to_string(),
            required_logs: vec![
                "Network Traffic".to_string(),
                "Firewall Logs".to_string(),
                "DLP".to_string(),
            ],
            required_playbook: "Data Breach Response".to_string(),
            complexity: Complexity::High,
        },
    ]
}
