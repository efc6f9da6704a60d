pub mod assessment;
pub mod hardware_profile;

pub use assessment::{ConfigurationTier, ScoreBand, ScoreResult};
pub use hardware_profile::{CpuTier, HardwareProfile, StorageKind, Usage};
