use crate::application::dto::SearchRequest;
use crate::application::read_models::{ListingsView, ReportMetadata, SearchState};
use crate::application::session::SearchSession;
use crate::ports::inbound::CatalogSearchPort;
use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;
use async_trait::async_trait;
use tracing::Instrument;

/// SearchCatalogUseCase - drives a [`SearchSession`] for one request
///
/// # Type Parameters
/// * `PR` - ProgressReporter implementation
pub struct SearchCatalogUseCase<PR> {
    session: SearchSession,
    progress_reporter: PR,
}

impl<PR> SearchCatalogUseCase<PR>
where
    PR: ProgressReporter,
{
    pub fn new(session: SearchSession, progress_reporter: PR) -> Self {
        Self {
            session,
            progress_reporter,
        }
    }

    /// Executes the search and waits for its results
    ///
    /// # Errors
    /// Returns an error if the price range is inverted
    pub async fn execute(&self, request: SearchRequest) -> Result<ListingsView> {
        request.validate()?;

        let span = tracing::info_span!("search", session = %self.session.id());
        self.run(request).instrument(span).await
    }

    async fn run(&self, request: SearchRequest) -> Result<ListingsView> {
        self.session.set_criteria(request.criteria.clone());
        let revision = self.session.snapshot().revision;
        let query = request.query.trim();

        if query.is_empty() {
            self.progress_reporter
                .report_error("⚠️  Empty search query: nothing to compare");
        } else {
            self.progress_reporter.report_pending(&format!(
                "🔍 Comparing prices for \"{}\" across {} platform(s)...",
                query,
                self.session.settings().platforms.len()
            ));
        }

        self.session.submit_query(query);
        let snapshot = self.session.wait_for_query(query, revision).await?;

        let view = ListingsView::build(
            snapshot.query,
            snapshot.criteria,
            snapshot.generated,
            snapshot.visible,
            ReportMetadata::now(),
        );

        match view.state {
            SearchState::Results => self.progress_reporter.report_completion(&format!(
                "✅ {} of {} listing(s) match your filters",
                view.listings.len(),
                view.generated
            )),
            SearchState::NoResults => self
                .progress_reporter
                .report_completion("ℹ️  No listings match your filters"),
            SearchState::EmptyQuery => {}
        }

        Ok(view)
    }
}

#[async_trait(?Send)]
impl<PR> CatalogSearchPort for SearchCatalogUseCase<PR>
where
    PR: ProgressReporter,
{
    async fn search(&self, request: SearchRequest) -> Result<ListingsView> {
        self.execute(request).await
    }
}
