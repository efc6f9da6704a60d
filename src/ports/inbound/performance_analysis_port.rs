use crate::application::dto::ProfileDraft;
use crate::application::read_models::AssessmentView;
use crate::shared::Result;

/// PerformanceAnalysisPort - inbound port for the "analyze" action
pub trait PerformanceAnalysisPort {
    /// Validates the draft and evaluates it
    ///
    /// # Errors
    /// Returns [`crate::shared::error::RigcheckError::MissingInput`] if any field
    /// of the draft is unset; nothing is evaluated in that case.
    fn analyze(&self, draft: ProfileDraft) -> Result<AssessmentView>;
}
