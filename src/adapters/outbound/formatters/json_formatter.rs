use crate::application::read_models::{AssessmentView, ListingsView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter - pretty-printed JSON of the read models
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_assessment(&self, view: &AssessmentView) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(view).context("Failed to serialize assessment to JSON")?;
        json.push('\n');
        Ok(json)
    }

    fn format_listings(&self, view: &ListingsView) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(view).context("Failed to serialize listings to JSON")?;
        json.push('\n');
        Ok(json)
    }
}
