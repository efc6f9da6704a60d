use super::capability_advisor::CapabilityAdvisor;
use super::upgrade_advisor::UpgradeAdvisor;
use crate::performance::domain::assessment::MAX_SCORE;
use crate::performance::domain::{
    ConfigurationTier, CpuTier, HardwareProfile, ScoreResult, StorageKind, Usage,
};

/// ScoreEngine - maps a hardware profile to a score and tiered advice
///
/// Component points top out at 90 (35 + 35 + 20); the usage multiplier
/// moves that distribution and the 80/60/40 bands are tuned against it.
pub struct ScoreEngine;

impl ScoreEngine {
    /// Evaluates a complete profile. Total and side-effect free.
    pub fn evaluate(profile: &HardwareProfile) -> ScoreResult {
        let raw = Self::raw_points(profile);
        let score = Self::apply_usage_multiplier(raw, profile.usage());
        let tier = ConfigurationTier::classify(profile);
        let capabilities = CapabilityAdvisor::advise(tier, profile.usage());
        let upgrades = UpgradeAdvisor::suggest(profile);

        tracing::debug!(
            %profile,
            raw,
            score,
            %tier,
            upgrades = upgrades.len(),
            "evaluated hardware profile"
        );

        ScoreResult {
            score,
            tier,
            can_handle: capabilities.can_handle,
            might_struggle: capabilities.might_struggle,
            not_recommended: capabilities.not_recommended,
            upgrades,
        }
    }

    /// Sum of the RAM, CPU and storage component points
    pub fn raw_points(profile: &HardwareProfile) -> u32 {
        Self::ram_points(profile.ram_gb())
            + Self::cpu_points(profile.cpu())
            + Self::storage_points(profile.storage())
    }

    fn ram_points(ram_gb: u32) -> u32 {
        match ram_gb {
            32..=u32::MAX => 35,
            16..=31 => 28,
            8..=15 => 20,
            4..=7 => 12,
            _ => 5,
        }
    }

    fn cpu_points(cpu: CpuTier) -> u32 {
        match cpu {
            CpuTier::High => 35,
            CpuTier::Medium => 22,
            CpuTier::Low => 10,
        }
    }

    fn storage_points(storage: StorageKind) -> u32 {
        match storage {
            StorageKind::Ssd => 20,
            StorageKind::Hdd => 8,
        }
    }

    /// Multiplier in hundredths: browsing 1.10, coding 1.00, gaming 0.95,
    /// video editing 0.85
    fn usage_multiplier_percent(usage: Usage) -> u32 {
        match usage {
            Usage::Browsing => 110,
            Usage::Coding => 100,
            Usage::Gaming => 95,
            Usage::VideoEditing => 85,
        }
    }

    /// Scales, rounds half up and clamps to [0, 100]
    fn apply_usage_multiplier(raw: u32, usage: Usage) -> u8 {
        let scaled = (raw * Self::usage_multiplier_percent(usage) + 50) / 100;
        scaled.min(u32::from(MAX_SCORE)) as u8
    }
}
