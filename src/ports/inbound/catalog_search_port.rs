use crate::application::dto::SearchRequest;
use crate::application::read_models::ListingsView;
use crate::shared::Result;
use async_trait::async_trait;

/// CatalogSearchPort - inbound port for one price-comparison search
///
/// Futures are not required to be `Send`; the CLI drives them on a
/// current-thread runtime.
#[async_trait(?Send)]
pub trait CatalogSearchPort {
    /// Runs the query through the search session and returns the settled view
    ///
    /// An empty query yields an empty view rather than an error.
    ///
    /// # Errors
    /// Returns an error if the price range is inverted or the session shuts down
    async fn search(&self, request: SearchRequest) -> Result<ListingsView>;
}
