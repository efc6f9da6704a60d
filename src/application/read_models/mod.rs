//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that the formatters render; built once per report
//! from domain results.

pub mod assessment_view;
pub mod listings_view;
pub mod report_metadata;

pub use assessment_view::AssessmentView;
pub use listings_view::{ListingsView, SearchState};
pub use report_metadata::ReportMetadata;
