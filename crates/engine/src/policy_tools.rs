//! Policy maturity, tool readiness, and response bottleneck detection.
//!
//! Inputs are yes/no answers collected by the interactive layer; scoring is
//! fixed-weight and deterministic. Bottlenecks come from an enumerated
//! catalog so each category maps to one specific remediation.

use irr_core::score::mean_or_zero;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The five fixed policies every assessment covers: (name, description).
pub const POLICY_CATALOG: [(&str, &str); 5] = [
    (
        "Incident Response Policy",
        "Formal documented procedures for incident handling",
    ),
    (
        "Escalation Policy",
        "Clear escalation paths and approval thresholds",
    ),
    (
        "Communication Policy",
        "Internal and external communication protocols",
    ),
    (
        "Data Handling Policy",
        "Evidence collection and preservation guidelines",
    ),
    (
        "Access Control Policy",
        "Emergency access and privilege escalation procedures",
    ),
];

/// Score granted for a policy that exists at all.
const POLICY_EXISTS_SCORE: f64 = 0.5;
const POLICY_DOCUMENTED_BONUS: f64 = 0.25;
const POLICY_TESTED_BONUS: f64 = 0.25;

/// Score granted for a tool that is deployed at all.
const TOOL_BASELINE_SCORE: f64 = 0.2;
const TOOL_OPERATIONAL_BONUS: f64 = 0.5;
const TOOL_INTEGRATED_BONUS: f64 = 0.3;

/// Yes/no answers about one security policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyAnswer {
    pub policy_name: String,
    /// Policy exists and is current.
    pub exists: bool,
    /// Well-documented and accessible.
    pub documented: bool,
    /// Tested in the last 12 months.
    pub tested: bool,
}

/// Policy maturity score with the recommendations it produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyAssessment {
    pub score: f64,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Score the answered policies. 0.0 when none were evaluated.
pub fn score_policies(answers: &[PolicyAnswer]) -> PolicyAssessment {
    let mut recommendations = Vec::new();
    let mut scores = Vec::with_capacity(answers.len());

    for answer in answers {
        if answer.exists {
            let mut score = POLICY_EXISTS_SCORE;
            if answer.documented {
                score += POLICY_DOCUMENTED_BONUS;
            }
            if answer.tested {
                score += POLICY_TESTED_BONUS;
            }
            scores.push(score);

            if !answer.tested {
                recommendations.push(format!(
                    "Conduct tabletop exercise for {}",
                    answer.policy_name
                ));
            }
        } else {
            scores.push(0.0);
            recommendations.push(format!("Develop and document {}", answer.policy_name));
        }
    }

    let score = mean_or_zero(&scores);
    debug!(policies = answers.len(), score, "scored policies");
    PolicyAssessment {
        score,
        recommendations,
    }
}

/// Yes/no answers about one security tool from the environment's tool list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolAnswer {
    pub tool_name: String,
    /// Fully operational and monitored.
    pub operational: bool,
    /// Integrated with the incident response workflow.
    pub integrated: bool,
}

/// Tool readiness score with the recommendations it produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolAssessment {
    pub score: f64,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Score the answered tools. 0.0 when the tool list is empty.
pub fn score_tools(answers: &[ToolAnswer]) -> ToolAssessment {
    let mut recommendations = Vec::new();
    let mut scores = Vec::with_capacity(answers.len());

    for answer in answers {
        let mut score = TOOL_BASELINE_SCORE;
        if answer.operational {
            score += TOOL_OPERATIONAL_BONUS;
        }
        if answer.integrated {
            score += TOOL_INTEGRATED_BONUS;
        }
        scores.push(score);

        if !answer.integrated {
            recommendations.push(format!(
                "Integrate {} into centralized incident response platform",
                answer.tool_name
            ));
        }
    }

    let score = mean_or_zero(&scores);
    debug!(tools = answers.len(), score, "scored tools");
    ToolAssessment {
        score,
        recommendations,
    }
}

/// Structural impediments to incident response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BottleneckCategory {
    ManualLogCorrelation,
    ApprovalDelays,
    ToolFragmentation,
    ExpertiseGaps,
    CommunicationDelays,
}

/// Catalog entry: label, description, and the one remediation it maps to.
pub struct BottleneckSpec {
    pub category: BottleneckCategory,
    pub label: &'static str,
    pub description: &'static str,
    pub remediation: &'static str,
}

pub const BOTTLENECK_CATALOG: [BottleneckSpec; 5] = [
    BottleneckSpec {
        category: BottleneckCategory::ManualLogCorrelation,
        label: "Manual log correlation",
        description: "Requires manual analysis across multiple systems",
        remediation: "Implement SOAR platform for automated log correlation",
    },
    BottleneckSpec {
        category: BottleneckCategory::ApprovalDelays,
        label: "Approval delays",
        description: "Critical actions require management approval",
        remediation: "Pre-authorize common response actions for on-call personnel",
    },
    BottleneckSpec {
        category: BottleneckCategory::ToolFragmentation,
        label: "Tool fragmentation",
        description: "No unified incident management platform",
        remediation: "Deploy unified SIEM/SOAR platform",
    },
    BottleneckSpec {
        category: BottleneckCategory::ExpertiseGaps,
        label: "Expertise gaps",
        description: "Limited 24/7 coverage or specialized skills",
        remediation: "Establish 24/7 SOC coverage or engage MDR provider",
    },
    BottleneckSpec {
        category: BottleneckCategory::CommunicationDelays,
        label: "Communication delays",
        description: "Stakeholder notification requires manual coordination",
        remediation: "Implement automated stakeholder notification system",
    },
];

/// One confirmed-or-denied bottleneck answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BottleneckAnswer {
    pub category: BottleneckCategory,
    pub present: bool,
}

/// Confirmed bottleneck descriptions with their remediations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BottleneckReport {
    #[serde(default)]
    pub bottlenecks: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Collect confirmed bottlenecks. Output follows catalog order regardless of
/// answer order, keeping reports deterministic.
pub fn detect_bottlenecks(answers: &[BottleneckAnswer]) -> BottleneckReport {
    let mut report = BottleneckReport::default();

    for spec in &BOTTLENECK_CATALOG {
        let confirmed = answers
            .iter()
            .any(|a| a.present && a.category == spec.category);
        if confirmed {
            report
                .bottlenecks
                .push(format!("{}: {}", spec.label, spec.description));
            report.recommendations.push(spec.remediation.to_string());
        }
    }

    report
}

/// Policy alignment: mean of policy maturity and tool readiness.
pub fn policy_alignment(policy_score: f64, tool_score: f64) -> f64 {
    (policy_score + tool_score) / 2.0
}

/// Combined outcome of the policy and tool evaluation, as recorded on the
/// assessment session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyToolOutcome {
    pub policy_score: f64,
    pub tool_score: f64,
    #[serde(default)]
    pub bottlenecks: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl PolicyToolOutcome {
    /// Assemble the outcome from the three evaluation steps.
    pub fn from_parts(
        policies: PolicyAssessment,
        tools: ToolAssessment,
        bottlenecks: BottleneckReport,
    ) -> Self {
        let mut recommendations = policies.recommendations;
        recommendations.extend(tools.recommendations);
        recommendations.extend(bottlenecks.recommendations);
        Self {
            policy_score: policies.score,
            tool_score: tools.score,
            bottlenecks: bottlenecks.bottlenecks,
            recommendations,
        }
    }

    pub fn policy_alignment(&self) -> f64 {
        policy_alignment(self.policy_score, self.tool_score)
    }
}
