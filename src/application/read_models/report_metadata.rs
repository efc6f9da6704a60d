use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Metadata stamped onto every report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMetadata {
    /// RFC 3339 timestamp when the report was produced
    pub timestamp: String,
    /// Name of the tool that produced the report
    pub tool_name: String,
    /// Version of the tool
    pub tool_version: String,
}

impl ReportMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
        }
    }

    /// Metadata for a report produced right now by this build
    pub fn now() -> Self {
        Self::new(
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        )
    }
}
