use docverify_api::{ApiError, ClientConfig};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::models::audit::{AuditFilter, AuditFilterField};
use crate::repository::{AuditQuery, LoadAuditPage, PageRequest};

use super::query_state::{FetchMode, FetchStatus, QueryState};

/// A fetch issued by one of the `begin_*` methods, waiting to be executed.
///
/// Dropping a ticket without executing it, or dropping an `execute` future
/// before it completes, releases the `Loading` status it holds.
#[derive(Debug)]
pub struct FetchTicket {
    token: u64,
    mode: FetchMode,
    query: AuditQuery,
    pending: PendingFetch,
}

impl FetchTicket {
    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn mode(&self) -> FetchMode {
        self.mode
    }

    pub fn query(&self) -> &AuditQuery {
        &self.query
    }
}

/// Status to restore if the ticket goes away before its response is merged.
#[derive(Debug)]
struct PendingFetch {
    engine: Weak<Mutex<EngineInner>>,
    token: u64,
    fallback: Option<FetchStatus>,
}

impl PendingFetch {
    fn settle(&mut self) {
        self.fallback = None;
    }
}

impl Drop for PendingFetch {
    fn drop(&mut self) {
        let (Some(fallback), Some(engine)) = (self.fallback.take(), self.engine.upgrade()) else {
            return;
        };
        let mut inner = engine.lock();
        if inner.mounted && inner.latest_token == self.token && inner.state.is_loading() {
            debug!(token = self.token, "abandoned fetch released");
            inner.state.status = fallback;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was merged into the state
    Applied { mode: FetchMode, received: usize },
    /// A newer fetch was issued, or the view was unmounted, before this one completed
    Discarded,
    /// The fetch failed and the state now carries the error message
    Failed(ApiError),
}

struct EngineInner {
    state: QueryState,
    latest_token: u64,
    mounted: bool,
    /// Last page of the current filter and sort merged into `state.records`;
    /// `None` until the first page of a reset arrives
    loaded_page: Option<usize>,
}

impl EngineInner {
    fn issue(
        &mut self,
        engine: Weak<Mutex<EngineInner>>,
        mode: FetchMode,
        page: usize,
        page_size: usize,
    ) -> FetchTicket {
        self.latest_token += 1;
        let fallback = match mode {
            FetchMode::Reset => FetchStatus::Idle,
            FetchMode::LoadMore => self.state.status.clone(),
        };
        self.state.status = FetchStatus::Loading;
        FetchTicket {
            token: self.latest_token,
            mode,
            query: AuditQuery::new(
                self.state.filter.clone(),
                self.state.sort.clone(),
                PageRequest::new(page, page_size),
            ),
            pending: PendingFetch {
                engine,
                token: self.latest_token,
                fallback: Some(fallback),
            },
        }
    }
}

/// Filter, sort and pagination state of the audit trail view.
///
/// Every triggering action is split in two: a synchronous `begin_*` call
/// that updates the state and returns a [`FetchTicket`], and
/// [`execute`](Self::execute) which performs the request and merges the
/// response. Only the most recently issued ticket may change the state, so
/// responses that arrive out of order are dropped.
pub struct AuditQueryEngine {
    repository: Arc<dyn LoadAuditPage>,
    inner: Arc<Mutex<EngineInner>>,
    page_size: usize,
    fetch_timeout: Duration,
}

impl AuditQueryEngine {
    pub fn new(repository: Arc<dyn LoadAuditPage>, page_size: usize, fetch_timeout: Duration) -> Self {
        Self {
            repository,
            inner: Arc::new(Mutex::new(EngineInner {
                state: QueryState::default(),
                latest_token: 0,
                mounted: true,
                loaded_page: None,
            })),
            page_size,
            fetch_timeout,
        }
    }

    pub fn from_config(repository: Arc<dyn LoadAuditPage>, config: &ClientConfig) -> Self {
        Self::new(repository, config.page_size, config.request_timeout())
    }

    pub fn snapshot(&self) -> QueryState {
        self.inner.lock().state.clone()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Stop applying results. Pending and future fetches leave the state untouched.
    pub fn unmount(&self) {
        let mut inner = self.inner.lock();
        inner.mounted = false;
        debug!(token = inner.latest_token, "audit view unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.lock().mounted
    }

    /// Fetch the first page for the current filter and sort, replacing the records.
    pub fn begin_refresh(&self) -> Option<FetchTicket> {
        self.begin_reset(|_| {})
    }

    /// Edit one filter field; records are cleared before the new fetch starts.
    pub fn begin_filter_change(&self, field: AuditFilterField, value: impl Into<String>) -> Option<FetchTicket> {
        let value = value.into();
        self.begin_reset(move |state| state.filter.set(field, value))
    }

    pub fn begin_filter_replace(&self, filter: AuditFilter) -> Option<FetchTicket> {
        self.begin_reset(move |state| state.filter = filter)
    }

    /// Column header click on `key`.
    pub fn begin_sort_toggle(&self, key: &str) -> Option<FetchTicket> {
        self.begin_reset(|state| state.sort = state.sort.toggled(key))
    }

    /// Request the page after the last merged one.
    ///
    /// Returns `None` when the server reported no further pages or a fetch is
    /// still in flight. If no page of the current filter and sort has arrived
    /// yet (the reset failed or was abandoned), the first page is fetched
    /// again as a reset instead.
    pub fn begin_load_more(&self) -> Option<FetchTicket> {
        let mut inner = self.inner.lock();
        if !inner.mounted || !inner.state.has_more || inner.state.is_loading() {
            return None;
        }
        let engine = Arc::downgrade(&self.inner);
        let ticket = match inner.loaded_page {
            Some(page) => inner.issue(engine, FetchMode::LoadMore, page + 1, self.page_size),
            None => inner.issue(engine, FetchMode::Reset, 0, self.page_size),
        };
        debug!(token = ticket.token, page = ticket.query.page.page, mode = ?ticket.mode, "load-more fetch issued");
        Some(ticket)
    }

    fn begin_reset<F>(&self, mutate: F) -> Option<FetchTicket>
    where
        F: FnOnce(&mut QueryState),
    {
        let mut inner = self.inner.lock();
        if !inner.mounted {
            return None;
        }
        mutate(&mut inner.state);
        inner.state.page = 0;
        inner.state.records.clear();
        inner.loaded_page = None;
        let ticket = inner.issue(Arc::downgrade(&self.inner), FetchMode::Reset, 0, self.page_size);
        debug!(
            token = ticket.token,
            sort_by = %ticket.query.sort.key,
            direction = ticket.query.sort.direction.as_query_param(),
            "reset fetch issued"
        );
        Some(ticket)
    }

    /// Perform the fetch described by `ticket` and merge its result.
    #[instrument(skip(self, ticket), fields(token = ticket.token, mode = ?ticket.mode, page = ticket.query.page.page))]
    pub async fn execute(&self, mut ticket: FetchTicket) -> FetchOutcome {
        let result = match tokio::time::timeout(
            self.fetch_timeout,
            self.repository.load_audit_page(&ticket.query),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout(self.fetch_timeout)),
        };
        ticket.pending.settle();

        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        if !inner.mounted || ticket.token != inner.latest_token {
            debug!(latest = inner.latest_token, "stale audit response discarded");
            return FetchOutcome::Discarded;
        }

        let state = &mut inner.state;
        match result {
            Ok(page) => {
                let received = page.items.len();
                state.has_more = page.has_more();
                match ticket.mode {
                    FetchMode::Reset => state.records = page.items,
                    FetchMode::LoadMore => state.records.extend(page.items),
                }
                state.page = ticket.query.page.page;
                state.status = FetchStatus::Loaded;
                inner.loaded_page = Some(ticket.query.page.page);
                debug!(received, has_more = state.has_more, "audit page applied");
                FetchOutcome::Applied {
                    mode: ticket.mode,
                    received,
                }
            }
            Err(e) => {
                let error = e.into_audit_fetch_error();
                warn!(error = %error, "audit fetch failed");
                state.status = FetchStatus::Error(error.to_string());
                FetchOutcome::Failed(error)
            }
        }
    }

    async fn run(&self, ticket: Option<FetchTicket>) -> Option<FetchOutcome> {
        match ticket {
            Some(ticket) => Some(self.execute(ticket).await),
            None => None,
        }
    }

    /// Initial load when the view appears.
    pub async fn mount(&self) -> Option<FetchOutcome> {
        self.run(self.begin_refresh()).await
    }

    pub async fn refresh(&self) -> Option<FetchOutcome> {
        self.run(self.begin_refresh()).await
    }

    pub async fn set_filter_field(&self, field: AuditFilterField, value: impl Into<String>) -> Option<FetchOutcome> {
        self.run(self.begin_filter_change(field, value)).await
    }

    pub async fn replace_filter(&self, filter: AuditFilter) -> Option<FetchOutcome> {
        self.run(self.begin_filter_replace(filter)).await
    }

    pub async fn toggle_sort(&self, key: &str) -> Option<FetchOutcome> {
        self.run(self.begin_sort_toggle(key)).await
    }

    pub async fn load_more(&self) -> Option<FetchOutcome> {
        self.run(self.begin_load_more()).await
    }
}
