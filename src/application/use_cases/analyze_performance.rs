use crate::application::dto::ProfileDraft;
use crate::application::read_models::{AssessmentView, ReportMetadata};
use crate::performance::services::ScoreEngine;
use crate::ports::inbound::PerformanceAnalysisPort;
use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;

/// AnalyzePerformanceUseCase - validates the analyzer form and scores it
///
/// # Type Parameters
/// * `PR` - ProgressReporter implementation
pub struct AnalyzePerformanceUseCase<PR> {
    progress_reporter: PR,
}

impl<PR> AnalyzePerformanceUseCase<PR>
where
    PR: ProgressReporter,
{
    pub fn new(progress_reporter: PR) -> Self {
        Self { progress_reporter }
    }

    /// Executes the analysis
    ///
    /// # Errors
    /// Returns `MissingInput` if the draft is incomplete
    pub fn execute(&self, draft: ProfileDraft) -> Result<AssessmentView> {
        let profile = match draft.into_profile() {
            Ok(profile) => profile,
            Err(e) => {
                self.progress_reporter
                    .report_error("❌ Analysis aborted: the hardware profile is incomplete");
                return Err(e);
            }
        };

        self.progress_reporter
            .report(&format!("🧮 Analyzing {}", profile));

        let result = ScoreEngine::evaluate(&profile);

        self.progress_reporter.report_completion(&format!(
            "✅ Score: {}/100 ({} configuration)",
            result.score, result.tier
        ));

        Ok(AssessmentView::build(profile, result, ReportMetadata::now()))
    }
}

impl<PR> PerformanceAnalysisPort for AnalyzePerformanceUseCase<PR>
where
    PR: ProgressReporter,
{
    fn analyze(&self, draft: ProfileDraft) -> Result<AssessmentView> {
        self.execute(draft)
    }
}
