use super::report_metadata::ReportMetadata;
use crate::catalog::domain::{FilterCriteria, ProductListing};
use serde::Serialize;

/// What the results panel should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchState {
    /// No query typed yet, or only whitespace; nothing was generated
    EmptyQuery,
    /// Listings were generated but the filters removed all of them
    NoResults,
    Results,
}

/// View of a filtered listing set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingsView {
    pub metadata: ReportMetadata,
    pub query: String,
    pub state: SearchState,
    pub criteria: FilterCriteria,
    /// Listings before filtering
    pub generated: usize,
    pub listings: Vec<ProductListing>,
}

impl ListingsView {
    pub fn build(
        query: String,
        criteria: FilterCriteria,
        generated: usize,
        listings: Vec<ProductListing>,
        metadata: ReportMetadata,
    ) -> Self {
        let state = if query.trim().is_empty() {
            SearchState::EmptyQuery
        } else if listings.is_empty() {
            SearchState::NoResults
        } else {
            SearchState::Results
        };

        Self {
            metadata,
            query,
            state,
            criteria,
            generated,
            listings,
        }
    }

    /// Lowest visible price, if any listing is visible
    pub fn best_price(&self) -> Option<&ProductListing> {
        self.listings.iter().min_by_key(|l| l.price)
    }
}
