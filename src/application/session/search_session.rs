use super::debouncer::Debouncer;
use crate::catalog::domain::{FilterCriteria, Platform, ProductListing, SortKey};
use crate::catalog::services::{ListingFilter, ListingGenerator};
use crate::ports::outbound::RandomSource;
use crate::shared::Result;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use uuid::Uuid;

/// Timing and catalog settings for a search session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    /// Platforms listings are generated for
    pub platforms: Vec<Platform>,
    /// Quiet period after the last query change before searching
    pub search_debounce: Duration,
    /// Quiet period after the last price-range change before re-filtering
    pub range_debounce: Duration,
    /// Simulated backend response time
    pub latency: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            platforms: Platform::ALL.to_vec(),
            search_debounce: Duration::from_millis(300),
            range_debounce: Duration::from_millis(500),
            latency: Duration::from_millis(800),
        }
    }
}

/// Published state of the results panel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSnapshot {
    /// Bumped on every publish
    pub revision: u64,
    /// Query the listings were generated for; empty before the first search
    pub query: String,
    pub criteria: FilterCriteria,
    /// Listings before filtering
    pub generated: usize,
    /// Filtered and sorted listings
    pub visible: Vec<ProductListing>,
}

struct SessionState {
    query: String,
    listings: Vec<ProductListing>,
    criteria: FilterCriteria,
    revision: u64,
    rng: Box<dyn RandomSource>,
}

struct Shared {
    state: Mutex<SessionState>,
    results: watch::Sender<SearchSnapshot>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Re-filters the current listing set and publishes it
    fn publish(&self, state: &mut SessionState) {
        state.revision += 1;
        let visible = ListingFilter::apply(&state.listings, &state.criteria);
        self.results.send_replace(SearchSnapshot {
            revision: state.revision,
            query: state.query.clone(),
            criteria: state.criteria.clone(),
            generated: state.listings.len(),
            visible,
        });
    }
}

/// SearchSession - the price-comparison panel's state, owned by its controller
///
/// Holds the current query, the generated listing set and the filter panel
/// state. Query changes and price-range edits each go through their own
/// [`Debouncer`]; platform and sort changes re-filter immediately. Every
/// change ends in a new [`SearchSnapshot`] on the watch channel.
pub struct SearchSession {
    id: Uuid,
    settings: SessionSettings,
    shared: Arc<Shared>,
    search_channel: Debouncer,
    range_channel: Debouncer,
}

impl SearchSession {
    pub fn new<R>(settings: SessionSettings, rng: R) -> Self
    where
        R: RandomSource + 'static,
    {
        let (results, _) = watch::channel(SearchSnapshot::default());
        let state = SessionState {
            query: String::new(),
            listings: Vec::new(),
            criteria: FilterCriteria::default(),
            revision: 0,
            rng: Box::new(rng),
        };

        Self {
            id: Uuid::new_v4(),
            settings,
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                results,
            }),
            search_channel: Debouncer::new("search"),
            range_channel: Debouncer::new("price-range"),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Receiver that sees every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.shared.results.subscribe()
    }

    /// The most recently published snapshot
    pub fn snapshot(&self) -> SearchSnapshot {
        self.shared.results.borrow().clone()
    }

    /// True while a search or range change is waiting to fire
    pub fn is_pending(&self) -> bool {
        self.search_channel.is_pending() || self.range_channel.is_pending()
    }

    /// Schedules a search for `query` on the search channel
    ///
    /// Replaces any search that has not published yet. An empty or
    /// whitespace query cancels the pending search and clears the results
    /// right away without generating anything.
    pub fn submit_query(&self, query: &str) {
        let query = query.trim().to_string();

        if query.is_empty() {
            self.search_channel.cancel();
            let mut state = self.shared.lock();
            state.query.clear();
            state.listings.clear();
            self.shared.publish(&mut state);
            tracing::debug!(session = %self.id, "cleared results for empty query");
            return;
        }

        tracing::debug!(session = %self.id, %query, "scheduling search");
        let shared = Arc::clone(&self.shared);
        let platforms = self.settings.platforms.clone();
        let latency = self.settings.latency;
        let session = self.id;

        self.search_channel
            .schedule(self.settings.search_debounce, async move {
                tokio::time::sleep(latency).await;

                let mut state = shared.lock();
                match ListingGenerator::generate(&query, &platforms, state.rng.as_mut()) {
                    Ok(listings) => {
                        state.query = query;
                        state.listings = listings;
                        shared.publish(&mut state);
                    }
                    Err(e) => tracing::warn!(%session, error = %e, "search failed"),
                }
            });
    }

    /// Replaces the platform selection and re-filters immediately
    pub fn set_platforms(&self, platforms: impl IntoIterator<Item = Platform>) {
        let mut state = self.shared.lock();
        state.criteria.selected_platforms = platforms.into_iter().collect::<BTreeSet<_>>();
        self.shared.publish(&mut state);
    }

    /// Changes the sort order and re-filters immediately
    pub fn set_sort(&self, sort: SortKey) {
        let mut state = self.shared.lock();
        state.criteria.sort = sort;
        self.shared.publish(&mut state);
    }

    /// Schedules a price-range change on the price-range channel
    pub fn set_price_range(&self, min_price: Option<f64>, max_price: Option<f64>) {
        let shared = Arc::clone(&self.shared);
        self.range_channel
            .schedule(self.settings.range_debounce, async move {
                let mut state = shared.lock();
                state.criteria.min_price = min_price;
                state.criteria.max_price = max_price;
                shared.publish(&mut state);
            });
    }

    /// Replaces the whole filter panel state at once, without debouncing
    ///
    /// Cancels a pending price-range change, which `criteria` supersedes.
    pub fn set_criteria(&self, criteria: FilterCriteria) {
        self.range_channel.cancel();
        let mut state = self.shared.lock();
        state.criteria = criteria;
        self.shared.publish(&mut state);
    }

    /// Waits until a snapshot for `query` newer than `after_revision` is published
    ///
    /// # Errors
    /// Returns an error if the session is dropped while waiting
    pub async fn wait_for_query(&self, query: &str, after_revision: u64) -> Result<SearchSnapshot> {
        let query = query.trim();
        let mut results = self.subscribe();
        let snapshot = results
            .wait_for(|s| s.revision > after_revision && s.query == query)
            .await?
            .clone();
        Ok(snapshot)
    }
}
