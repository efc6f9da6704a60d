use crate::performance::domain::{CpuTier, HardwareProfile, StorageKind, Usage};
use crate::shared::error::RigcheckError;
use crate::shared::Result;
use serde::Deserialize;

/// ProfileDraft - the analyzer form as filled in so far
///
/// Every field may be unset; [`ProfileDraft::into_profile`] is the only way
/// to get a [`HardwareProfile`] out of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileDraft {
    pub ram: Option<u32>,
    pub cpu: Option<CpuTier>,
    pub storage: Option<StorageKind>,
    pub usage: Option<Usage>,
}

impl ProfileDraft {
    pub fn new(
        ram: Option<u32>,
        cpu: Option<CpuTier>,
        storage: Option<StorageKind>,
        usage: Option<Usage>,
    ) -> Self {
        Self {
            ram,
            cpu,
            storage,
            usage,
        }
    }

    /// Fills fields that are unset here from `fallback`
    pub fn or(self, fallback: ProfileDraft) -> Self {
        Self {
            ram: self.ram.or(fallback.ram),
            cpu: self.cpu.or(fallback.cpu),
            storage: self.storage.or(fallback.storage),
            usage: self.usage.or(fallback.usage),
        }
    }

    /// Names of unset fields, in form order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.ram.is_none() {
            missing.push("ram");
        }
        if self.cpu.is_none() {
            missing.push("cpu");
        }
        if self.storage.is_none() {
            missing.push("storage");
        }
        if self.usage.is_none() {
            missing.push("usage");
        }
        missing
    }

    /// # Errors
    /// Returns [`RigcheckError::MissingInput`] naming every unset field
    pub fn into_profile(self) -> Result<HardwareProfile> {
        match (self.ram, self.cpu, self.storage, self.usage) {
            (Some(ram), Some(cpu), Some(storage), Some(usage)) => {
                Ok(HardwareProfile::new(ram, cpu, storage, usage))
            }
            _ => Err(RigcheckError::MissingInput {
                fields: self.missing_fields(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_draft_converts() {
        let draft = ProfileDraft::new(
            Some(16),
            Some(CpuTier::High),
            Some(StorageKind::Ssd),
            Some(Usage::Gaming),
        );
        let profile = draft.into_profile().unwrap();
        assert_eq!(profile.ram_gb(), 16);
        assert_eq!(profile.usage(), Usage::Gaming);
    }

    #[test]
    fn test_missing_fields_reported_in_form_order() {
        let draft = ProfileDraft::new(None, Some(CpuTier::Low), None, None);
        let err = draft.into_profile().unwrap_err();
        match err.downcast_ref::<RigcheckError>() {
            Some(RigcheckError::MissingInput { fields }) => {
                assert_eq!(fields, &vec!["ram", "storage", "usage"]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_draft_misses_everything() {
        assert_eq!(
            ProfileDraft::default().missing_fields(),
            vec!["ram", "cpu", "storage", "usage"]
        );
    }

    #[test]
    fn test_or_prefers_own_values() {
        let cli = ProfileDraft::new(Some(8), None, None, Some(Usage::Coding));
        let config = ProfileDraft::new(
            Some(32),
            Some(CpuTier::Medium),
            Some(StorageKind::Hdd),
            Some(Usage::Gaming),
        );
        let merged = cli.or(config);
        assert_eq!(
            merged,
            ProfileDraft::new(
                Some(8),
                Some(CpuTier::Medium),
                Some(StorageKind::Hdd),
                Some(Usage::Coding)
            )
        );
    }

    #[test]
    fn test_zero_ram_is_a_value_not_missing() {
        let draft = ProfileDraft::new(
            Some(0),
            Some(CpuTier::Low),
            Some(StorageKind::Hdd),
            Some(Usage::Browsing),
        );
        assert!(draft.into_profile().is_ok());
    }
}
