use super::hardware_profile::{CpuTier, HardwareProfile, StorageKind};
use serde::Serialize;
use std::fmt;

/// Highest score a profile can be given
pub const MAX_SCORE: u8 = 100;

/// Hardware classification used to pick canned capability advice
///
/// Selected from the raw profile fields only, never from the numeric score:
/// a high-end machine used for video editing still scores in the 70s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfigurationTier {
    HighEnd,
    MidRange,
    LowEnd,
}

impl ConfigurationTier {
    /// Tests the tiers in order: high-end, then mid-range, else low-end
    pub fn classify(profile: &HardwareProfile) -> Self {
        if profile.ram_gb() >= 16
            && profile.cpu() == CpuTier::High
            && profile.storage() == StorageKind::Ssd
        {
            ConfigurationTier::HighEnd
        } else if profile.ram_gb() >= 8 && profile.cpu() == CpuTier::Medium {
            ConfigurationTier::MidRange
        } else {
            ConfigurationTier::LowEnd
        }
    }
}

impl fmt::Display for ConfigurationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationTier::HighEnd => write!(f, "high-end"),
            ConfigurationTier::MidRange => write!(f, "mid-range"),
            ConfigurationTier::LowEnd => write!(f, "low-end"),
        }
    }
}

/// Label shown next to the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Limited,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreBand::Excellent,
            60..=79 => ScoreBand::Good,
            40..=59 => ScoreBand::Fair,
            _ => ScoreBand::Limited,
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent performance - Your PC is powerful!",
            ScoreBand::Good => "Good performance - Handles most tasks well",
            ScoreBand::Fair => "Fair performance - Suitable for basic tasks",
            ScoreBand::Limited => "Limited performance - Consider upgrades",
        }
    }
}

/// ScoreResult - outcome of evaluating one hardware profile
///
/// Every list keeps insertion order; renderers show them as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: u8,
    pub tier: ConfigurationTier,
    pub can_handle: Vec<String>,
    pub might_struggle: Vec<String>,
    pub not_recommended: Vec<String>,
    pub upgrades: Vec<String>,
}

impl ScoreResult {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}
