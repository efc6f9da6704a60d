use crate::application::read_models::{AssessmentView, ListingsView};
use crate::shared::Result;

/// ReportFormatter port for rendering results
///
/// One implementation per output format (text, JSON, Markdown).
pub trait ReportFormatter {
    /// Renders a performance assessment
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_assessment(&self, view: &AssessmentView) -> Result<String>;

    /// Renders a filtered listing set, including the "no results" state
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_listings(&self, view: &ListingsView) -> Result<String>;
}
