//! Assessment export: structured, round-trippable JSON or YAML files with
//! an integrity digest.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use irr_core::ReadinessAssessment;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    fn extension(&self) -> &str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Where the assessment landed, with integrity metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRecord {
    pub path: PathBuf,
    pub sha256: String,
    pub size_bytes: usize,
}

/// Write the assessment into `output_dir` as
/// `irr_assessment_<timestamp>.<ext>`, returning path, digest, and size.
pub fn export_assessment(
    assessment: &ReadinessAssessment,
    format: ExportFormat,
    output_dir: &Path,
) -> Result<ExportRecord, ExportError> {
    let payload = match format {
        ExportFormat::Json => serde_json::to_string_pretty(assessment)?,
        ExportFormat::Yaml => serde_yaml::to_string(assessment)?,
    };

    let stamp = assessment.generated_at.format("%Y%m%d_%H%M%S");
    let path = output_dir.join(format!("irr_assessment_{stamp}.{}", format.extension()));
    fs::write(&path, payload.as_bytes())?;

    let record = ExportRecord {
        path,
        sha256: sha256_hex(payload.as_bytes()),
        size_bytes: payload.len(),
    };
    info!(
        path = %record.path.display(),
        sha256 = record.sha256.as_str(),
        size_bytes = record.size_bytes,
        "assessment exported"
    );
    Ok(record)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
