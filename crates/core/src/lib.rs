pub mod assessment;
pub mod log_analysis;
pub mod playbook;
pub mod profile;
pub mod readiness;
pub mod scenario;
pub mod score;

pub use assessment::ReadinessAssessment;
pub use log_analysis::LogAnalysisResult;
pub use playbook::PlaybookAnalysisResult;
pub use profile::EnvironmentProfile;
pub use readiness::ReadinessLevel;
pub use scenario::{Complexity, ScenarioDefinition, ScenarioResult};
