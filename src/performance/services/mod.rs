mod capability_advisor;
mod score_engine;
mod upgrade_advisor;

pub use capability_advisor::{CapabilityAdvisor, CapabilityReport};
pub use score_engine::ScoreEngine;
pub use upgrade_advisor::UpgradeAdvisor;
