//! Playbook clarity, feasibility, and completeness scoring.
//!
//! The heuristics are an enumerated rule table (pattern set -> findings and
//! score deltas) rather than scattered conditionals, so the rule set stays
//! auditable and each rule is independently testable. Rules are cumulative:
//! a playbook name can trigger more than one.

use irr_core::score::mean_or_zero;
use irr_core::PlaybookAnalysisResult;
use tracing::debug;

/// The six standard incident response playbooks offered for evaluation.
pub const STANDARD_PLAYBOOKS: [&str; 6] = [
    "Malware Infection Response",
    "Phishing Incident Response",
    "Data Breach Response",
    "Ransomware Response",
    "Insider Threat Response",
    "DDoS Attack Response",
];

const CLARITY_BASELINE: f64 = 0.75;
const FEASIBILITY_BASELINE: f64 = 0.70;
const COMPLETENESS_BASELINE: f64 = 0.72;

/// Appended when no rule contributed a missing element.
const FALLBACK_MISSING_ELEMENT: &str = "Documentation requirements not specified";

/// One name-pattern rule: findings appended and score deltas applied when
/// any pattern matches (case-sensitive substring).
struct PlaybookRule {
    patterns: &'static [&'static str],
    ambiguous_step: Option<&'static str>,
    missing_element: Option<&'static str>,
    unrealistic_assumption: Option<&'static str>,
    recommendation: &'static str,
    clarity_delta: f64,
    feasibility_delta: f64,
    completeness_delta: f64,
}

const PLAYBOOK_RULES: [PlaybookRule; 3] = [
    PlaybookRule {
        patterns: &["Malware", "Ransomware"],
        ambiguous_step: Some("Step 5: 'Contain the threat' lacks specific isolation procedures"),
        missing_element: Some("No guidance on encrypted backup restoration"),
        unrealistic_assumption: None,
        recommendation: "Add detailed network isolation procedures with specific commands",
        clarity_delta: -0.05,
        feasibility_delta: 0.0,
        completeness_delta: -0.08,
    },
    PlaybookRule {
        patterns: &["Phishing"],
        ambiguous_step: Some("Step 3: 'Analyze email headers' assumes technical expertise"),
        missing_element: Some("Missing user communication templates"),
        unrealistic_assumption: None,
        recommendation: "Include step-by-step header analysis guide with examples",
        clarity_delta: -0.10,
        feasibility_delta: 0.0,
        completeness_delta: 0.0,
    },
    PlaybookRule {
        patterns: &["Data Breach"],
        ambiguous_step: None,
        missing_element: Some("Legal and regulatory notification procedures undefined"),
        unrealistic_assumption: Some("Assumes full network visibility and logging"),
        recommendation: "Develop breach notification checklist with timelines",
        clarity_delta: 0.0,
        feasibility_delta: -0.15,
        completeness_delta: -0.12,
    },
];

/// Evaluate one playbook by name. Accepts the standard catalog entries as
/// well as free-text names for custom playbooks.
pub fn score_playbook(name: &str) -> PlaybookAnalysisResult {
    let mut clarity = CLARITY_BASELINE;
    let mut feasibility = FEASIBILITY_BASELINE;
    let mut completeness = COMPLETENESS_BASELINE;

    let mut ambiguous_steps = Vec::new();
    let mut missing_elements = Vec::new();
    let mut unrealistic_assumptions = Vec::new();
    let mut recommendations = Vec::new();

    for rule in &PLAYBOOK_RULES {
        if !rule.patterns.iter().any(|p| name.contains(p)) {
            continue;
        }
        if let Some(step) = rule.ambiguous_step {
            ambiguous_steps.push(step.to_string());
        }
        if let Some(element) = rule.missing_element {
            missing_elements.push(element.to_string());
        }
        if let Some(assumption) = rule.unrealistic_assumption {
            unrealistic_assumptions.push(assumption.to_string());
        }
        recommendations.push(rule.recommendation.to_string());
        clarity += rule.clarity_delta;
        feasibility += rule.feasibility_delta;
        completeness += rule.completeness_delta;
    }

    if missing_elements.is_empty() {
        missing_elements.push(FALLBACK_MISSING_ELEMENT.to_string());
    }

    recommendations.push("Conduct tabletop exercise to validate procedures".to_string());
    recommendations.push("Define clear roles and escalation criteria".to_string());

    debug!(playbook = name, clarity, feasibility, completeness, "scored playbook");

    PlaybookAnalysisResult {
        playbook_name: name.to_string(),
        clarity_score: clarity.max(0.0),
        feasibility_score: feasibility.max(0.0),
        completeness_score: completeness.max(0.0),
        ambiguous_steps,
        missing_elements,
        unrealistic_assumptions,
        recommendations,
    }
}

/// Overall playbook effectiveness: mean per-playbook effectiveness. 0.0 when
/// no playbooks have been evaluated.
pub fn playbook_effectiveness(results: &[PlaybookAnalysisResult]) -> f64 {
    let scores: Vec<f64> = results
        .iter()
        .map(PlaybookAnalysisResult::effectiveness)
        .collect();
    mean_or_zero(&scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_ransomware_playbook_penalties() {
        let result = score_playbook("Ransomware Response");

        assert!((result.clarity_score - 0.70).abs() < EPS);
        assert!((result.feasibility_score - 0.70).abs() < EPS);
        assert!((result.completeness_score - 0.64).abs() < EPS);
        assert!(!result.ambiguous_steps.is_empty());
        assert!(!result.missing_elements.is_empty());
        assert!(result.unrealistic_assumptions.is_empty());
    }

    #[test]
    fn test_generic_playbook_keeps_baselines() {
        let result = score_playbook("Generic Incident");

        assert!((result.clarity_score - 0.75).abs() < EPS);
        assert!((result.feasibility_score - 0.70).abs() < EPS);
        assert!((result.completeness_score - 0.72).abs() < EPS);
        assert_eq!(
            result.missing_elements,
            vec![FALLBACK_MISSING_ELEMENT.to_string()]
        );
        // Only the two always-present recommendations.
        assert_eq!(result.recommendations.len(), 2);
    }

    #[test]
    fn test_phishing_clarity_penalty() {
        let result = score_playbook("Phishing Incident Response");
        assert!((result.clarity_score - 0.65).abs() < EPS);
        assert!((result.feasibility_score - 0.70).abs() < EPS);
    }

    #[test]
    fn test_data_breach_assumptions() {
        let result = score_playbook("Data Breach Response");
        assert!((result.feasibility_score - 0.55).abs() < EPS);
        assert!((result.completeness_score - 0.60).abs() < EPS);
        assert_eq!(result.unrealistic_assumptions.len(), 1);
    }

    #[test]
    fn test_rules_are_cumulative() {
        // Triggers both the malware/ransomware rule and the data breach rule.
        let result = score_playbook("Ransomware Data Breach Response");
        assert!((result.clarity_score - 0.70).abs() < EPS);
        assert!((result.feasibility_score - 0.55).abs() < EPS);
        assert!((result.completeness_score - 0.52).abs() < EPS);
        assert_eq!(result.missing_elements.len(), 2);
    }

    #[test]
    fn test_scores_never_negative() {
        for name in STANDARD_PLAYBOOKS {
            let result = score_playbook(name);
            assert!(result.clarity_score >= 0.0);
            assert!(result.feasibility_score >= 0.0);
            assert!(result.completeness_score >= 0.0);
        }
    }

    #[test]
    fn test_effectiveness_empty() {
        assert_eq!(playbook_effectiveness(&[]), 0.0);
    }

    #[test]
    fn test_effectiveness_mean() {
        let results = vec![
            score_playbook("Generic Incident"),
            score_playbook("Phishing Incident Response"),
        ];
        let expected = (results[0].effectiveness() + results[1].effectiveness()) / 2.0;
        assert!((playbook_effectiveness(&results) - expected).abs() < EPS);
    }
}
