//! rigcheck - PC performance analyzer and shopping price comparison
//!
//! Two independent tools behind one CLI: a score engine that rates a hardware
//! configuration for an intended usage, and a price comparison that generates
//! mock listings across shopping platforms and filters/sorts them.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`performance`, `catalog`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases, read models and the search session
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use rigcheck::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = AnalyzePerformanceUseCase::new(StderrProgressReporter::new());
//! let draft = ProfileDraft::new(
//!     Some(16),
//!     Some(CpuTier::High),
//!     Some(StorageKind::Ssd),
//!     Some(Usage::Gaming),
//! );
//! let view = use_case.execute(draft)?;
//!
//! let formatter = JsonFormatter::new();
//! println!("{}", formatter.format_assessment(&view)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod performance;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::adapters::outbound::random::StdRandomSource;
    pub use crate::application::dto::{OutputFormat, ProfileDraft, SearchRequest};
    pub use crate::application::read_models::{AssessmentView, ListingsView, SearchState};
    pub use crate::application::session::{SearchSession, SearchSnapshot, SessionSettings};
    pub use crate::application::use_cases::{AnalyzePerformanceUseCase, SearchCatalogUseCase};
    pub use crate::catalog::domain::{
        FilterCriteria, Platform, ProductListing, ProductVariant, Rating, SortKey,
    };
    pub use crate::catalog::services::{ListingFilter, ListingGenerator};
    pub use crate::performance::domain::{
        ConfigurationTier, CpuTier, HardwareProfile, ScoreBand, ScoreResult, StorageKind, Usage,
    };
    pub use crate::performance::services::ScoreEngine;
    pub use crate::ports::inbound::{CatalogSearchPort, PerformanceAnalysisPort};
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, RandomSource, ReportFormatter,
    };
    pub use crate::shared::Result;
}
