//! Paginated resource controller
//!
//! One controller backs one list screen. It owns the page/size/content state,
//! fetches through a [`ResourceClient`], and reloads the current page after
//! every successful mutation. Failures never blank the screen: the last
//! loaded content stays visible and `error` carries the message.
//!
//! State sits behind a `parking_lot` lock that is never held across an
//! `.await`, so a controller can be shared between tasks behind an `Arc`.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use equus_client::constants::messages;
use equus_client::{ClientError, ListQuery, Page, RecordId, ResourceClient};
use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{ControllerConfig, EmptyPagePolicy, ResponseOrdering};
use crate::error::{ConsoleError, Result};
use crate::filter::LocalFilter;
use crate::state::{ControllerState, State};

/// What happened to one fetched response
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Applied,
    /// Applied, but the requested page lay past the new end
    StepBack,
    /// Superseded by a newer load
    Discarded,
}

/// Keeps the in-flight counter up to date even if the load future is dropped
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Server-paginated list with a local search filter and CRUD pass-throughs
pub struct PaginatedController<C: ResourceClient> {
    client: C,
    filter: LocalFilter<C::Entity>,
    config: ControllerConfig,
    state: RwLock<State<C::Entity>>,
    in_flight: AtomicUsize,
    sequence: AtomicU64,
}

impl<C> PaginatedController<C>
where
    C: ResourceClient,
    C::Entity: Clone,
{
    /// A configured page size outside the allowed set is replaced by
    /// [`ControllerConfig::effective_page_size`].
    pub fn new(client: C, filter: LocalFilter<C::Entity>, mut config: ControllerConfig) -> Self {
        let page_size = config.effective_page_size();
        if page_size != config.page_size {
            warn!(
                "{} page size {} is not one of {:?}, using {}",
                client.resource_name(),
                config.page_size,
                config.allowed_page_sizes,
                page_size
            );
            config.page_size = page_size;
        }
        let state = State::new(page_size, Vec::new());
        Self {
            client,
            filter,
            config,
            state: RwLock::new(state),
            in_flight: AtomicUsize::new(0),
            sequence: AtomicU64::new(0),
        }
    }

    /// Set the extra query parameters sent with every load
    pub fn with_filters<F: Serialize + ?Sized>(self, filters: &F) -> Result<Self> {
        let pairs = encode_filters(filters)?;
        self.state.write().filters = pairs;
        Ok(self)
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn filter(&self) -> &LocalFilter<C::Entity> {
        &self.filter
    }

    // ============== State ==============

    pub fn snapshot(&self) -> ControllerState<C::Entity> {
        let state = self.state.read();
        ControllerState {
            content: state.content.clone(),
            total_elements: state.total_elements,
            total_pages: state.total_pages,
            current_page: state.current_page,
            page_size: state.page_size,
            loading: self.is_loading(),
            error: state.error.clone(),
            search_term: state.search_term.clone(),
            filtered_content: self.filter.apply_cloned(&state.content, &state.search_term),
        }
    }

    /// Current content narrowed by the search term
    pub fn filtered(&self) -> Vec<C::Entity> {
        let state = self.state.read();
        self.filter.apply_cloned(&state.content, &state.search_term)
    }

    pub fn current_page(&self) -> u32 {
        self.state.read().current_page
    }

    pub fn page_size(&self) -> u32 {
        self.state.read().page_size
    }

    pub fn total_pages(&self) -> u32 {
        self.state.read().total_pages
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    /// True while at least one load is in flight
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Local only; never sent to the server
    pub fn set_search_term(&self, term: &str) {
        self.state.write().search_term = term.to_string();
    }

    // ============== Navigation ==============

    /// Fetch the current page with the current size and filters
    pub async fn load(&self) -> Result<()> {
        let mut stepped_back = false;
        loop {
            match self.fetch_once().await? {
                Outcome::StepBack if !stepped_back => {
                    debug!(
                        "{} page emptied out, reloading page {}",
                        self.client.resource_name(),
                        self.current_page()
                    );
                    stepped_back = true;
                }
                _ => return Ok(()),
            }
        }
    }

    /// Jump to page `page`. Targets outside `[0, total_pages)` are rejected
    /// with [`ConsoleError::OutOfRange`] and leave the state untouched.
    pub async fn go_to_page(&self, page: u32) -> Result<()> {
        {
            let mut state = self.state.write();
            if page >= state.total_pages {
                debug!(
                    "Ignoring navigation to page {} of {}",
                    page, state.total_pages
                );
                return Err(ConsoleError::OutOfRange {
                    page,
                    total_pages: state.total_pages,
                });
            }
            state.current_page = page;
        }
        self.load().await
    }

    pub async fn next_page(&self) -> Result<()> {
        let page = self.current_page().saturating_add(1);
        self.go_to_page(page).await
    }

    pub async fn previous_page(&self) -> Result<()> {
        let current = self.current_page();
        if current == 0 {
            return Err(ConsoleError::NoPreviousPage);
        }
        self.go_to_page(current - 1).await
    }

    /// Change the page size and go back to the first page
    pub async fn set_page_size(&self, size: u32) -> Result<()> {
        if !self.config.is_allowed_page_size(size) {
            return Err(ConsoleError::InvalidPageSize(size));
        }
        {
            let mut state = self.state.write();
            state.page_size = size;
            state.current_page = 0;
        }
        self.load().await
    }

    /// Replace the extra query parameters and reload from the first page
    pub async fn set_filters<F: Serialize + ?Sized>(&self, filters: &F) -> Result<()> {
        let pairs = encode_filters(filters)?;
        {
            let mut state = self.state.write();
            state.filters = pairs;
            state.current_page = 0;
        }
        self.load().await
    }

    async fn fetch_once(&self) -> Result<Outcome> {
        let _in_flight = InFlight::enter(&self.in_flight);

        let (query, seq) = {
            let mut state = self.state.write();
            state.error = None;
            let query = ListQuery {
                page: state.current_page,
                size: state.page_size,
                sort: self.config.sort.clone(),
                filters: state.filters.clone(),
            };
            (query, self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
        };

        debug!(
            "Loading {} page={} size={}",
            self.client.resource_name(),
            query.page,
            query.size
        );

        let result = self.client.list(&query).await;
        self.apply(result, &query, seq)
    }

    fn apply(
        &self,
        result: equus_client::Result<Page<C::Entity>>,
        query: &ListQuery,
        seq: u64,
    ) -> Result<Outcome> {
        let mut state = self.state.write();

        if self.config.ordering == ResponseOrdering::LatestRequest
            && self.sequence.load(Ordering::SeqCst) != seq
        {
            debug!(
                "Discarding stale {} response for page {}",
                self.client.resource_name(),
                query.page
            );
            return Ok(Outcome::Discarded);
        }

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                warn!(
                    "Failed to load {} page {}: {}",
                    self.client.resource_name(),
                    query.page,
                    e
                );
                state.error = Some(e.user_message_or(messages::LIST_FAILED));
                return Err(e.into());
            }
        };

        state.content = page.content;
        state.total_elements = page.total_elements;
        state.total_pages = page.total_pages;

        // Under `Keep` an index past the new end stays where it is, so the
        // index and the empty content describe the same page.
        let last = state.last_page();
        if self.config.empty_page == EmptyPagePolicy::StepBack && state.current_page > last {
            state.current_page = last;
            if state.total_pages > 0 && query.page > last {
                return Ok(Outcome::StepBack);
            }
        }
        Ok(Outcome::Applied)
    }

    // ============== Mutations ==============

    /// Fetch one record without touching the list state
    pub async fn get(&self, id: RecordId) -> Result<C::Entity> {
        Ok(self.client.get(id).await?)
    }

    pub async fn create(&self, dto: &C::Create) -> Result<C::Entity> {
        let result = self.client.create(dto).await;
        self.after_mutation(result, messages::CREATE_FAILED).await
    }

    pub async fn update(&self, id: RecordId, dto: &C::Update) -> Result<C::Entity> {
        let result = self.client.update(id, dto).await;
        self.after_mutation(result, messages::UPDATE_FAILED).await
    }

    /// Delete a record and reload the current page, which may come back
    /// empty when it held the last record
    pub async fn remove(&self, id: RecordId) -> Result<bool> {
        let result = self.client.remove(id).await;
        self.after_mutation(result, messages::REMOVE_FAILED).await
    }

    async fn after_mutation<T>(
        &self,
        result: equus_client::Result<T>,
        fallback: &str,
    ) -> Result<T> {
        match result {
            Ok(value) => {
                if let Err(e) = self.load().await {
                    debug!("Reload after mutation failed: {}", e);
                }
                Ok(value)
            }
            Err(e) => Err(self.record_failure(e, fallback)),
        }
    }

    fn record_failure(&self, error: ClientError, fallback: &str) -> ConsoleError {
        warn!(
            "{} mutation failed: {}",
            self.client.resource_name(),
            error
        );
        self.state.write().error = Some(error.user_message_or(fallback));
        error.into()
    }
}

fn encode_filters<F: Serialize + ?Sized>(filters: &F) -> Result<Vec<(String, String)>> {
    Ok(ListQuery::default().with_filters(filters)?.filters)
}
