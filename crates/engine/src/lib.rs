//! Deterministic scoring and aggregation engine.
//!
//! Converts self-reported answers about an organization's environment into
//! per-dimension readiness scores and one weighted overall assessment:
//! - log source availability and quality
//! - playbook clarity, feasibility, and completeness
//! - policy and tool maturity, with bottleneck detection
//! - scenario readiness cross-referencing logs and playbooks
//!
//! Every scoring function is pure: identical inputs produce identical
//! scores, with only the timestamp fields varying between runs. Input
//! validation belongs to the collection layer; empty collections are not
//! errors and aggregate to 0.0.

pub mod aggregator;
pub mod log_scorer;
pub mod playbook_scorer;
pub mod policy_tools;
pub mod scenario_eval;
pub mod session;

pub use aggregator::{aggregate, AggregationInputs};
pub use log_scorer::{evidence_availability, score_log_source};
pub use playbook_scorer::{playbook_effectiveness, score_playbook, STANDARD_PLAYBOOKS};
pub use policy_tools::{
    detect_bottlenecks, policy_alignment, score_policies, score_tools, BottleneckAnswer,
    BottleneckCategory, BottleneckReport, PolicyAnswer, PolicyAssessment, PolicyToolOutcome,
    ToolAnswer, ToolAssessment,
};
pub use scenario_eval::{builtin_scenarios, evaluate_scenario};
pub use session::AssessmentSession;
