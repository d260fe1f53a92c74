//! Organization environment metadata.
//!
//! Collected once per assessment session by the interactive layer and then
//! treated as immutable; every scorer borrows it, none own or mutate it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Organization environment profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentProfile {
    pub org_name: String,
    pub platforms: Vec<String>,
    pub endpoints_count: u32,
    pub network_segments: Vec<String>,
    pub security_tools: Vec<String>,
    pub log_sources: Vec<String>,
    /// Log retention period in days.
    pub retention_days: u32,
    pub collected_at: DateTime<Utc>,
}

impl EnvironmentProfile {
    /// Start building a profile for the named organization.
    pub fn builder(org_name: impl Into<String>) -> EnvironmentProfileBuilder {
        EnvironmentProfileBuilder {
            org_name: org_name.into(),
            platforms: Vec::new(),
            endpoints_count: 0,
            network_segments: Vec::new(),
            security_tools: Vec::new(),
            log_sources: Vec::new(),
            retention_days: 0,
        }
    }
}

/// Builder for [`EnvironmentProfile`].
pub struct EnvironmentProfileBuilder {
    org_name: String,
    platforms: Vec<String>,
    endpoints_count: u32,
    network_segments: Vec<String>,
    security_tools: Vec<String>,
    log_sources: Vec<String>,
    retention_days: u32,
}

impl EnvironmentProfileBuilder {
    pub fn platforms(mut self, platforms: Vec<String>) -> Self {
        self.platforms = platforms;
        self
    }

    pub fn endpoints_count(mut self, count: u32) -> Self {
        self.endpoints_count = count;
        self
    }

    pub fn network_segments(mut self, segments: Vec<String>) -> Self {
        self.network_segments = segments;
        self
    }

    pub fn security_tools(mut self, tools: Vec<String>) -> Self {
        self.security_tools = tools;
        self
    }

    pub fn log_sources(mut self, sources: Vec<String>) -> Self {
        self.log_sources = sources;
        self
    }

    pub fn retention_days(mut self, days: u32) -> Self {
        self.retention_days = days;
        self
    }

    pub fn build(self) -> EnvironmentProfile {
        EnvironmentProfile {
            org_name: self.org_name,
            platforms: self.platforms,
            endpoints_count: self.endpoints_count,
            network_segments: self.network_segments,
            security_tools: self.security_tools,
            log_sources: self.log_sources,
            retention_days: self.retention_days,
            collected_at: Utc::now(),
        }
    }
}
