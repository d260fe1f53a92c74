//! Assessment aggregation: weighted overall score, readiness tier, gap
//! prioritization, and recommendation generation.

use chrono::Utc;
use irr_core::score::clamp01;
use irr_core::{
    LogAnalysisResult, PlaybookAnalysisResult, ReadinessAssessment, ReadinessLevel, ScenarioResult,
};
use tracing::info;
use uuid::Uuid;

use crate::log_scorer::RETENTION_FLOOR_DAYS;
use crate::policy_tools::policy_alignment;

/// Component weights for the overall score.
const EVIDENCE_WEIGHT: f64 = 0.30;
const PLAYBOOK_WEIGHT: f64 = 0.25;
const POLICY_WEIGHT: f64 = 0.25;
const TIMELINE_WEIGHT: f64 = 0.20;

/// Timeline reconstruction depends mostly on evidence quality, partly on
/// tool/policy integration.
const TIMELINE_EVIDENCE_WEIGHT: f64 = 0.7;
const TIMELINE_POLICY_WEIGHT: f64 = 0.3;
/// Applied when retention falls short of the investigation floor.
const SHORT_RETENTION_PENALTY: f64 = 0.85;

/// Gap thresholds.
const CRITICAL_COMPONENT_FLOOR: f64 = 0.60;
const TOOL_INTEGRATION_FLOOR: f64 = 0.70;
const SCENARIO_READINESS_FLOOR: f64 = 0.65;

/// Recommendation thresholds.
const EVIDENCE_REC_FLOOR: f64 = 0.75;
const PLAYBOOK_REC_FLOOR: f64 = 0.70;
const POLICY_REC_FLOOR: f64 = 0.70;
const TOOL_REC_FLOOR: f64 = 0.75;
const TIMELINE_REC_FLOOR: f64 = 0.70;

/// Recommendations are truncated to this many entries, in generation order.
const MAX_RECOMMENDATIONS: usize = 15;

/// Everything the aggregator reads. All collections are borrowed; the
/// aggregator never mutates its inputs.
#[derive(Debug, Clone, Copy)]
pub struct AggregationInputs<'a> {
    pub evidence_availability: f64,
    pub playbook_effectiveness: f64,
    pub policy_score: f64,
    pub tool_score: f64,
    pub retention_days: u32,
    pub log_results: &'a [LogAnalysisResult],
    pub playbook_results: &'a [PlaybookAnalysisResult],
    pub bottlenecks: &'a [String],
    pub scenario_results: &'a [ScenarioResult],
}

/// Combine the component scores into one readiness assessment.
pub fn aggregate(inputs: &AggregationInputs<'_>) -> ReadinessAssessment {
    let alignment = policy_alignment(inputs.policy_score, inputs.tool_score);
    let timeline = timeline_score(
        inputs.evidence_availability,
        alignment,
        inputs.retention_days,
    );

    let overall = clamp01(
        inputs.evidence_availability * EVIDENCE_WEIGHT
            + inputs.playbook_effectiveness * PLAYBOOK_WEIGHT
            + alignment * POLICY_WEIGHT
            + timeline * TIMELINE_WEIGHT,
    );
    let readiness_level = ReadinessLevel::from_score(overall);

    let (critical_gaps, high_priority_gaps, medium_priority_gaps) = prioritize_gaps(inputs);
    let recommendations = build_recommendations(inputs, timeline);

    info!(
        overall,
        level = readiness_level.as_str(),
        critical_gaps = critical_gaps.len(),
        "aggregated readiness assessment"
    );

    ReadinessAssessment {
        assessment_id: Uuid::new_v4().to_string(),
        overall_score: overall,
        readiness_level,
        evidence_availability: clamp01(inputs.evidence_availability),
        timeline_reconstruction: timeline,
        playbook_effectiveness: clamp01(inputs.playbook_effectiveness),
        policy_alignment: clamp01(alignment),
        critical_gaps,
        high_priority_gaps,
        medium_priority_gaps,
        recommendations,
        generated_at: Utc::now(),
    }
}

/// Timeline reconstruction capability, penalized under short retention.
pub fn timeline_score(evidence: f64, alignment: f64, retention_days: u32) -> f64 {
    let mut score = evidence * TIMELINE_EVIDENCE_WEIGHT + alignment * TIMELINE_POLICY_WEIGHT;
    if retention_days < RETENTION_FLOOR_DAYS {
        score *= SHORT_RETENTION_PENALTY;
    }
    clamp01(score)
}

/// Fixed-rule gap prioritization. Emission order within each bucket is part
/// of the contract: component gaps first, then per-result gaps in input
/// order.
fn prioritize_gaps(inputs: &AggregationInputs<'_>) -> (Vec<String>, Vec<String>, Vec<String>) {
    let mut critical = Vec::new();
    let mut high = Vec::new();
    let mut medium = Vec::new();

    if inputs.evidence_availability < CRITICAL_COMPONENT_FLOOR {
        critical
            .push("Insufficient log coverage for effective incident investigation".to_string());
    }
    if inputs.playbook_effectiveness < CRITICAL_COMPONENT_FLOOR {
        critical.push("Incident response playbooks lack clarity or completeness".to_string());
    }
    if inputs.policy_score < CRITICAL_COMPONENT_FLOOR {
        critical.push("Security policies inadequate for effective incident response".to_string());
    }

    for result in inputs.log_results {
        if !result.retention_compliance {
            high.push(format!(
                "{}: Inadequate retention period",
                result.source_name
            ));
        }
    }
    for result in inputs.playbook_results {
        if !result.unrealistic_assumptions.is_empty() {
            high.push(format!(
                "{}: Contains unrealistic assumptions",
                result.playbook_name
            ));
        }
    }
    if inputs.tool_score < TOOL_INTEGRATION_FLOOR {
        high.push("Security tools not fully integrated into response workflow".to_string());
    }
    if !inputs.scenario_results.is_empty() {
        let mean_readiness = inputs
            .scenario_results
            .iter()
            .map(|s| s.readiness_score)
            .sum::<f64>()
            / inputs.scenario_results.len() as f64;
        if mean_readiness < SCENARIO_READINESS_FLOOR {
            high.push("Limited readiness for common incident scenarios".to_string());
        }
    }

    for bottleneck in inputs.bottlenecks {
        medium.push(bottleneck.clone());
    }

    (critical, high, medium)
}

/// Conditional recommendation blocks keyed to the scoring thresholds, then
/// three always-present general recommendations, truncated to
/// [`MAX_RECOMMENDATIONS`] in generation order.
fn build_recommendations(inputs: &AggregationInputs<'_>, timeline: f64) -> Vec<String> {
    let mut recommendations = Vec::new();

    if inputs.evidence_availability < EVIDENCE_REC_FLOOR {
        recommendations
            .push("Implement comprehensive logging across all critical systems".to_string());
        recommendations.push("Deploy centralized log management (SIEM) platform".to_string());
    }
    if inputs.retention_days < RETENTION_FLOOR_DAYS {
        recommendations
            .push("Extend log retention to minimum 90 days (180 days recommended)".to_string());
    }
    if inputs.playbook_effectiveness < PLAYBOOK_REC_FLOOR {
        recommendations.push("Conduct comprehensive playbook review and update cycle".to_string());
        recommendations
            .push("Schedule quarterly tabletop exercises to validate procedures".to_string());
    }
    if inputs.policy_score < POLICY_REC_FLOOR {
        recommendations.push("Formalize incident response policies and procedures".to_string());
        recommendations
            .push("Establish clear escalation paths and approval thresholds".to_string());
    }
    if inputs.tool_score < TOOL_REC_FLOOR {
        recommendations
            .push("Integrate security tools into unified incident response platform".to_string());
        recommendations
            .push("Implement SOAR capabilities for automated response actions".to_string());
    }
    if timeline < TIMELINE_REC_FLOOR {
        recommendations.push("Improve log correlation and timestamp synchronization".to_string());
        recommendations
            .push("Deploy network traffic analysis (NTA) for comprehensive visibility".to_string());
    }

    recommendations.push("Establish 24/7 SOC coverage or engage MDR provider".to_string());
    recommendations.push("Conduct annual incident response capability assessment".to_string());
    recommendations.push("Develop incident response metrics and KPIs".to_string());

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn inputs<'a>() -> AggregationInputs<'a> {
        AggregationInputs {
            evidence_availability: 0.8,
            playbook_effectiveness: 0.8,
            policy_score: 0.8,
            tool_score: 0.8,
            retention_days: 90,
            log_results: &[],
            playbook_results: &[],
            bottlenecks: &[],
            scenario_results: &[],
        }
    }

    #[test]
    fn test_timeline_score_weighting() {
        assert!((timeline_score(1.0, 1.0, 90) - 1.0).abs() < EPS);
        assert!((timeline_score(0.8, 0.6, 90) - (0.8 * 0.7 + 0.6 * 0.3)).abs() < EPS);
    }

    #[test]
    fn test_timeline_short_retention_penalty() {
        let unpenalized = timeline_score(0.8, 0.6, 90);
        let penalized = timeline_score(0.8, 0.6, 30);
        assert!((penalized - unpenalized * 0.85).abs() < EPS);
    }

    #[test]
    fn test_overall_weighting_and_level() {
        let inputs = inputs();
        let assessment = aggregate(&inputs);

        let timeline = timeline_score(0.8, 0.8, 90);
        let expected = 0.8 * 0.30 + 0.8 * 0.25 + 0.8 * 0.25 + timeline * 0.20;
        assert!((assessment.overall_score - expected).abs() < EPS);
        assert_eq!(assessment.readiness_level, ReadinessLevel::High);
        assert!((assessment.policy_alignment - 0.8).abs() < EPS);
    }

    #[test]
    fn test_critical_gaps_at_component_floors() {
        let mut weak = inputs();
        weak.evidence_availability = 0.5;
        weak.playbook_effectiveness = 0.5;
        weak.policy_score = 0.5;

        let assessment = aggregate(&weak);
        assert_eq!(assessment.critical_gaps.len(), 3);
        assert!(assessment.critical_gaps[0].contains("log coverage"));
        assert!(assessment.critical_gaps[1].contains("playbooks"));
        assert!(assessment.critical_gaps[2].contains("policies"));
    }

    #[test]
    fn test_no_gaps_for_strong_inputs() {
        let assessment = aggregate(&inputs());
        assert!(assessment.critical_gaps.is_empty());
        assert!(assessment.high_priority_gaps.is_empty());
        assert!(assessment.medium_priority_gaps.is_empty());
    }

    #[test]
    fn test_bottlenecks_become_medium_gaps_verbatim() {
        let bottlenecks =
            vec!["Tool fragmentation: No unified incident management platform".to_string()];
        let mut with_bottlenecks = inputs();
        with_bottlenecks.bottlenecks = &bottlenecks;

        let assessment = aggregate(&with_bottlenecks);
        assert_eq!(assessment.medium_priority_gaps, bottlenecks);
    }

    #[test]
    fn test_worst_case_recommendation_count() {
        let mut worst = inputs();
        worst.evidence_availability = 0.0;
        worst.playbook_effectiveness = 0.0;
        worst.policy_score = 0.0;
        worst.tool_score = 0.0;
        worst.retention_days = 7;

        let assessment = aggregate(&worst);
        // Every conditional block fires: 2+1+2+2+2+2 plus 3 general entries.
        assert_eq!(assessment.recommendations.len(), 14);
        assert!(assessment.recommendations.len() <= MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_strong_inputs_keep_general_recommendations_only() {
        let assessment = aggregate(&inputs());
        assert_eq!(assessment.recommendations.len(), 3);
        assert!(assessment.recommendations[0].contains("SOC coverage"));
    }
}
