use crate::performance::domain::{ConfigurationTier, Usage};

/// Canned advice for one tier: (can handle, might struggle, not recommended)
type AdviceTable = (
    &'static [&'static str],
    &'static [&'static str],
    &'static [&'static str],
);

const HIGH_END_BASE: AdviceTable = (
    &[
        "Heavy multitasking with 20+ browser tabs",
        "4K video streaming without buffering",
        "Professional photo editing (Photoshop, Lightroom)",
    ],
    &[],
    &[],
);

const MID_RANGE_BASE: AdviceTable = (
    &[
        "Smooth web browsing with 10+ tabs",
        "Microsoft Office and productivity apps",
        "Light photo editing",
        "1080p video streaming",
    ],
    &[],
    &[],
);

const LOW_END_BASE: AdviceTable = (
    &[
        "Basic web browsing (3-5 tabs)",
        "Email and document editing",
        "Music and podcast streaming",
    ],
    &[
        "Multiple browser tabs (10+)",
        "HD video streaming",
        "Basic photo editing",
    ],
    &[],
);

const NONE: AdviceTable = (&[], &[], &[]);

/// Capability lists for one evaluation, in display order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapabilityReport {
    pub can_handle: Vec<String>,
    pub might_struggle: Vec<String>,
    pub not_recommended: Vec<String>,
}

impl CapabilityReport {
    fn extend(&mut self, (can, struggle, not): AdviceTable) {
        self.can_handle.extend(can.iter().map(|s| s.to_string()));
        self.might_struggle
            .extend(struggle.iter().map(|s| s.to_string()));
        self.not_recommended
            .extend(not.iter().map(|s| s.to_string()));
    }
}

/// CapabilityAdvisor - tier base advice followed by usage-specific entries
pub struct CapabilityAdvisor;

impl CapabilityAdvisor {
    pub fn advise(tier: ConfigurationTier, usage: Usage) -> CapabilityReport {
        let mut report = CapabilityReport::default();
        report.extend(Self::base(tier));
        report.extend(Self::for_usage(tier, usage));
        report
    }

    fn base(tier: ConfigurationTier) -> AdviceTable {
        match tier {
            ConfigurationTier::HighEnd => HIGH_END_BASE,
            ConfigurationTier::MidRange => MID_RANGE_BASE,
            ConfigurationTier::LowEnd => LOW_END_BASE,
        }
    }

    fn for_usage(tier: ConfigurationTier, usage: Usage) -> AdviceTable {
        match (tier, usage) {
            (ConfigurationTier::HighEnd, Usage::Gaming) => (
                &[
                    "Modern AAA games at high/ultra settings",
                    "VR gaming experiences",
                ],
                &[],
                &[],
            ),
            (ConfigurationTier::HighEnd, Usage::VideoEditing) => (
                &[
                    "4K video editing with multiple layers",
                    "Real-time color grading and effects",
                ],
                &[],
                &[],
            ),
            (ConfigurationTier::HighEnd, Usage::Coding) => (
                &[
                    "Running multiple Docker containers",
                    "Large-scale IDE projects with IntelliSense",
                ],
                &[],
                &[],
            ),
            (ConfigurationTier::MidRange, Usage::Gaming) => (
                &[
                    "Esports titles (Valorant, CS:GO, League)",
                    "Games from 2015-2020 at medium settings",
                ],
                &[
                    "Latest AAA games at ultra settings",
                    "Ray tracing enabled games",
                ],
                &[],
            ),
            (ConfigurationTier::MidRange, Usage::VideoEditing) => (
                &["1080p video editing"],
                &["4K video editing", "Complex effects and transitions"],
                &[],
            ),
            (ConfigurationTier::MidRange, Usage::Coding) => (
                &[
                    "Web development (VS Code, Node.js)",
                    "Basic backend development",
                ],
                &["Heavy virtualization or Android Studio"],
                &[],
            ),
            (ConfigurationTier::LowEnd, Usage::Gaming) => (
                &[],
                &["Older casual games"],
                &["Modern gaming (2020+)", "VR experiences"],
            ),
            (ConfigurationTier::LowEnd, Usage::VideoEditing) => (
                &[],
                &[],
                &[
                    "Video editing of any kind",
                    "Content creation workflows",
                ],
            ),
            (ConfigurationTier::LowEnd, Usage::Coding) => (
                &[],
                &[
                    "Running local development servers",
                    "Using modern IDEs",
                ],
                &["Mobile app development"],
            ),
            (_, Usage::Browsing) => NONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_end_gaming_appends_after_base() {
        let report = CapabilityAdvisor::advise(ConfigurationTier::HighEnd, Usage::Gaming);
        assert_eq!(report.can_handle.len(), 5);
        assert_eq!(
            report.can_handle[0],
            "Heavy multitasking with 20+ browser tabs"
        );
        assert_eq!(report.can_handle[4], "VR gaming experiences");
        assert!(report.might_struggle.is_empty());
        assert!(report.not_recommended.is_empty());
    }

    #[test]
    fn test_browsing_only_gets_base_advice() {
        for tier in [
            ConfigurationTier::HighEnd,
            ConfigurationTier::MidRange,
            ConfigurationTier::LowEnd,
        ] {
            let report = CapabilityAdvisor::advise(tier, Usage::Browsing);
            let mut base = CapabilityReport::default();
            base.extend(CapabilityAdvisor::base(tier));
            assert_eq!(report, base);
        }
    }

    #[test]
    fn test_mid_range_coding() {
        let report = CapabilityAdvisor::advise(ConfigurationTier::MidRange, Usage::Coding);
        assert_eq!(report.can_handle.len(), 6);
        assert_eq!(
            report.might_struggle,
            vec!["Heavy virtualization or Android Studio".to_string()]
        );
        assert!(report.not_recommended.is_empty());
    }

    #[test]
    fn test_low_end_struggles_come_before_usage_entries() {
        let report = CapabilityAdvisor::advise(ConfigurationTier::LowEnd, Usage::Gaming);
        assert_eq!(
            report.might_struggle,
            vec![
                "Multiple browser tabs (10+)".to_string(),
                "HD video streaming".to_string(),
                "Basic photo editing".to_string(),
                "Older casual games".to_string(),
            ]
        );
        assert_eq!(
            report.not_recommended,
            vec![
                "Modern gaming (2020+)".to_string(),
                "VR experiences".to_string()
            ]
        );
    }

    #[test]
    fn test_low_end_video_editing_not_recommended() {
        let report =
            CapabilityAdvisor::advise(ConfigurationTier::LowEnd, Usage::VideoEditing);
        assert_eq!(report.not_recommended.len(), 2);
        assert_eq!(report.not_recommended[0], "Video editing of any kind");
    }
}
