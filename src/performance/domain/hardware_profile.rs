use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Processor class as chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CpuTier {
    Low,
    Medium,
    High,
}

impl FromStr for CpuTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(CpuTier::Low),
            "medium" | "mid" => Ok(CpuTier::Medium),
            "high" => Ok(CpuTier::High),
            _ => Err(format!(
                "Invalid CPU tier: {}. Please specify 'low', 'medium' or 'high'",
                s
            )),
        }
    }
}

impl fmt::Display for CpuTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuTier::Low => write!(f, "low"),
            CpuTier::Medium => write!(f, "medium"),
            CpuTier::High => write!(f, "high"),
        }
    }
}

/// Primary storage technology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    Ssd,
    Hdd,
}

impl FromStr for StorageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ssd" => Ok(StorageKind::Ssd),
            "hdd" => Ok(StorageKind::Hdd),
            _ => Err(format!(
                "Invalid storage type: {}. Please specify 'ssd' or 'hdd'",
                s
            )),
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKind::Ssd => write!(f, "ssd"),
            StorageKind::Hdd => write!(f, "hdd"),
        }
    }
}

/// What the machine is mostly used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Usage {
    Browsing,
    Coding,
    Gaming,
    #[serde(alias = "video-editing")]
    VideoEditing,
}

impl Usage {
    /// Human readable name used inside advice strings
    pub fn describe(&self) -> &'static str {
        match self {
            Usage::Browsing => "browsing",
            Usage::Coding => "coding",
            Usage::Gaming => "gaming",
            Usage::VideoEditing => "video editing",
        }
    }
}

impl FromStr for Usage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "browsing" => Ok(Usage::Browsing),
            "coding" => Ok(Usage::Coding),
            "gaming" => Ok(Usage::Gaming),
            "videoediting" | "video-editing" => Ok(Usage::VideoEditing),
            _ => Err(format!(
                "Invalid usage: {}. Please specify 'browsing', 'coding', 'gaming' or 'videoediting'",
                s
            )),
        }
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Usage::Browsing => write!(f, "browsing"),
            Usage::Coding => write!(f, "coding"),
            Usage::Gaming => write!(f, "gaming"),
            Usage::VideoEditing => write!(f, "videoediting"),
        }
    }
}

/// HardwareProfile value object - the four answers of the analyzer form
///
/// Built fresh for every evaluation. Incomplete forms never reach this type,
/// see [`crate::application::dto::ProfileDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HardwareProfile {
    ram_gb: u32,
    cpu: CpuTier,
    storage: StorageKind,
    usage: Usage,
}

impl HardwareProfile {
    pub fn new(ram_gb: u32, cpu: CpuTier, storage: StorageKind, usage: Usage) -> Self {
        Self {
            ram_gb,
            cpu,
            storage,
            usage,
        }
    }

    pub fn ram_gb(&self) -> u32 {
        self.ram_gb
    }

    pub fn cpu(&self) -> CpuTier {
        self.cpu
    }

    pub fn storage(&self) -> StorageKind {
        self.storage
    }

    pub fn usage(&self) -> Usage {
        self.usage
    }
}

impl fmt::Display for HardwareProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}GB RAM, {} CPU, {} storage, {}",
            self.ram_gb,
            self.cpu,
            self.storage.to_string().to_uppercase(),
            self.usage.describe()
        )
    }
}
