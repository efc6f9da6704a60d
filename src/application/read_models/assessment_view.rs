use super::report_metadata::ReportMetadata;
use crate::performance::domain::{ConfigurationTier, HardwareProfile, ScoreBand, ScoreResult};
use serde::Serialize;

/// View of one performance assessment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentView {
    pub metadata: ReportMetadata,
    pub profile: HardwareProfile,
    pub score: u8,
    pub band: ScoreBand,
    pub headline: String,
    pub tier: ConfigurationTier,
    pub can_handle: Vec<String>,
    pub might_struggle: Vec<String>,
    pub not_recommended: Vec<String>,
    pub upgrades: Vec<String>,
}

impl AssessmentView {
    pub fn build(profile: HardwareProfile, result: ScoreResult, metadata: ReportMetadata) -> Self {
        let band = result.band();
        Self {
            metadata,
            profile,
            score: result.score,
            band,
            headline: band.headline().to_string(),
            tier: result.tier,
            can_handle: result.can_handle,
            might_struggle: result.might_struggle,
            not_recommended: result.not_recommended,
            upgrades: result.upgrades,
        }
    }

    /// Titled advice sections that have at least one entry, in display order
    pub fn sections(&self) -> Vec<(&'static str, &[String])> {
        [
            ("Can Handle", self.can_handle.as_slice()),
            ("Might Struggle", self.might_struggle.as_slice()),
            ("Not Recommended", self.not_recommended.as_slice()),
            ("Suggested Upgrades", self.upgrades.as_slice()),
        ]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .collect()
    }
}
