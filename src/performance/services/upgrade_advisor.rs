use crate::performance::domain::{CpuTier, HardwareProfile, StorageKind, Usage};

const SSD_UPGRADE: &str = "Upgrade to SSD - this is the #1 best upgrade for instant speed boost";
const RAM_BASELINE_UPGRADE: &str = "Upgrade to at least 8GB RAM for smoother multitasking";
const CPU_UPGRADE: &str = "CPU upgrade would provide significant performance improvements";
const GPU_UPGRADE: &str = "Your setup is excellent! Consider a GPU upgrade if gaming/rendering";

/// Shown when no guard fires
const WELL_BALANCED: &[&str] = &[
    "Your system is well-balanced for your needs",
    "Keep drivers and your operating system up to date for best performance",
];

/// UpgradeAdvisor - guard-ordered upgrade suggestions, independent of tier
pub struct UpgradeAdvisor;

impl UpgradeAdvisor {
    /// Evaluates every guard in order; the output order is the guard order
    pub fn suggest(profile: &HardwareProfile) -> Vec<String> {
        let ram = profile.ram_gb();
        let usage = profile.usage();
        let mut upgrades = Vec::new();

        if profile.storage() == StorageKind::Hdd {
            upgrades.push(SSD_UPGRADE.to_string());
        }

        if ram < 8 && usage != Usage::Browsing {
            upgrades.push(RAM_BASELINE_UPGRADE.to_string());
        }

        if ram < 16 && matches!(usage, Usage::Gaming | Usage::VideoEditing) {
            upgrades.push(format!(
                "Consider 16GB RAM for optimal {} experience",
                usage.describe()
            ));
        }

        if profile.cpu() == CpuTier::Low && usage != Usage::Browsing {
            upgrades.push(CPU_UPGRADE.to_string());
        }

        if ram >= 32 && profile.cpu() == CpuTier::High && profile.storage() == StorageKind::Ssd {
            upgrades.push(GPU_UPGRADE.to_string());
        }

        if upgrades.is_empty() {
            upgrades.extend(WELL_BALANCED.iter().map(|s| s.to_string()));
        }

        upgrades
    }
}
