//! Search box state machine
//!
//! [`QueryInputController`] owns the query text, focus and loading flags and
//! the current suggestion batch. It never sleeps or performs I/O: every
//! operation returns the [`Effect`]s the caller must carry out (arm a timer,
//! issue a lookup, navigate), and timers and lookups report back through
//! [`QueryInputController::debounce_elapsed`],
//! [`QueryInputController::blur_elapsed`],
//! [`QueryInputController::lookup_resolved`] and
//! [`QueryInputController::lookup_failed`].
//!
//! Only the batch produced by the most recently issued request, whose query
//! still equals the live query, is ever stored. Everything else is discarded.

use adamftd_core::{NavigationTarget, Suggestion, TypeaheadConfig};
use adamftd_dispatch::DispatchRouter;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Identifies one issued lookup; strictly increasing per controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle for an armed timer; only the most recent ticket per slot is live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerTicket(u64);

/// A lookup the caller must send to the suggestion provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub id: RequestId,
    pub query: String,
}

/// Why a lookup produced no batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    /// The provider returned an error or was unreachable
    Provider(String),
    /// The provider did not answer within the lookup timeout
    TimedOut,
}

impl fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Provider(msg) => write!(f, "provider error: {msg}"),
            Self::TimedOut => write!(f, "timed out"),
        }
    }
}

/// Whether a lookup result was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupDisposition {
    Accepted,
    /// The request was superseded by a later edit or lookup
    Stale,
}

/// Work the caller must perform on behalf of the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Call [`QueryInputController::debounce_elapsed`] with `ticket` after `delay`
    ScheduleDebounce { ticket: TimerTicket, delay: Duration },
    /// Send the request to the suggestion provider
    IssueLookup(LookupRequest),
    /// Call [`QueryInputController::blur_elapsed`] with `ticket` after `delay`
    ScheduleBlur { ticket: TimerTicket, delay: Duration },
    /// Hand the target to the navigator
    Navigate(NavigationTarget),
}

/// Suggestions produced for one query snapshot; replaced wholesale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionBatch {
    pub request: RequestId,
    pub query: String,
    pub items: Arc<[Suggestion]>,
}

/// Read-only view of the search box for renderers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBoxState {
    pub query: String,
    pub focused: bool,
    pub loading: bool,
    pub suggestions: Arc<[Suggestion]>,
    pub suggestions_visible: bool,
}

/// Query text, focus, loading and debounce bookkeeping for one search box
#[derive(Debug)]
pub struct QueryInputController {
    config: TypeaheadConfig,
    query: String,
    focused: bool,
    loading: bool,
    batch: Option<SuggestionBatch>,
    pending_debounce: Option<TimerTicket>,
    pending_blur: Option<TimerTicket>,
    in_flight: Option<LookupRequest>,
    last_ticket: u64,
    last_request: u64,
}

impl QueryInputController {
    pub fn new(config: TypeaheadConfig) -> Self {
        Self {
            config,
            query: String::new(),
            focused: false,
            loading: false,
            batch: None,
            pending_debounce: None,
            pending_blur: None,
            in_flight: None,
            last_ticket: 0,
            last_request: 0,
        }
    }

    pub fn config(&self) -> &TypeaheadConfig {
        &self.config
    }

    /// Replace the query text
    ///
    /// Cancels the pending debounce timer and marks any in-flight lookup
    /// stale. Below the minimum length the batch is cleared and nothing is
    /// scheduled; otherwise a fresh debounce timer is armed. Setting the
    /// current text again is a no-op.
    pub fn set_query(&mut self, text: impl Into<String>) -> Vec<Effect> {
        let text = text.into();
        if text == self.query {
            return Vec::new();
        }

        trace!("Query changed to '{}'", text);
        self.query = text;
        self.pending_debounce = None;
        if let Some(stale) = self.in_flight.take() {
            debug!(
                "Lookup {} for '{}' superseded by edit",
                stale.id, stale.query
            );
        }
        self.loading = false;
        if self
            .batch
            .as_ref()
            .is_some_and(|batch| batch.query != self.query)
        {
            self.batch = None;
        }

        if self.query.chars().count() < self.config.min_query_chars {
            return Vec::new();
        }

        let ticket = self.next_ticket();
        self.pending_debounce = Some(ticket);
        vec![Effect::ScheduleDebounce {
            ticket,
            delay: self.config.debounce_duration(),
        }]
    }

    /// Reset the query to empty
    pub fn clear(&mut self) -> Vec<Effect> {
        self.set_query(String::new())
    }

    /// The debounce quiet period ended
    pub fn debounce_elapsed(&mut self, ticket: TimerTicket) -> Vec<Effect> {
        if self.pending_debounce != Some(ticket) {
            trace!("Ignoring superseded debounce timer");
            return Vec::new();
        }
        self.pending_debounce = None;

        self.last_request += 1;
        let request = LookupRequest {
            id: RequestId(self.last_request),
            query: self.query.clone(),
        };
        debug!("Issuing lookup {} for '{}'", request.id, request.query);
        self.in_flight = Some(request.clone());
        self.loading = true;
        vec![Effect::IssueLookup(request)]
    }

    /// A lookup settled with a batch
    pub fn lookup_resolved(
        &mut self,
        request: &LookupRequest,
        suggestions: Vec<Suggestion>,
    ) -> LookupDisposition {
        if !self.is_current(request) {
            debug!(
                "Discarding stale result of lookup {} for '{}'",
                request.id, request.query
            );
            return LookupDisposition::Stale;
        }

        trace!(
            "Lookup {} resolved with {} suggestions",
            request.id,
            suggestions.len()
        );
        self.in_flight = None;
        self.loading = false;
        self.batch = Some(SuggestionBatch {
            request: request.id,
            query: request.query.clone(),
            items: suggestions.into(),
        });
        LookupDisposition::Accepted
    }

    /// A lookup failed or timed out; degrades to no suggestions
    pub fn lookup_failed(
        &mut self,
        request: &LookupRequest,
        failure: LookupFailure,
    ) -> LookupDisposition {
        if !self.is_current(request) {
            debug!(
                "Discarding stale failure of lookup {} for '{}': {}",
                request.id, request.query, failure
            );
            return LookupDisposition::Stale;
        }

        warn!(
            "Suggestion lookup {} for '{}' failed: {}",
            request.id, request.query, failure
        );
        self.in_flight = None;
        self.loading = false;
        self.batch = None;
        LookupDisposition::Accepted
    }

    /// Submit the raw query; blank input does nothing
    pub fn submit(&mut self) -> Vec<Effect> {
        match DispatchRouter::resolve_query(&self.query) {
            Some(target) => vec![Effect::Navigate(target)],
            None => {
                trace!("Ignoring blank submit");
                Vec::new()
            }
        }
    }

    /// Navigate to a suggestion and close the suggestion list
    ///
    /// The query text is left as typed.
    pub fn select_suggestion(&mut self, suggestion: &Suggestion) -> Vec<Effect> {
        let target = DispatchRouter::resolve(suggestion);
        self.focused = false;
        self.pending_blur = None;
        vec![Effect::Navigate(target)]
    }

    /// Select the suggestion at `index` in the current batch
    pub fn select_index(&mut self, index: usize) -> Vec<Effect> {
        let Some(suggestion) = self.suggestions().get(index).cloned() else {
            trace!("No suggestion at index {}", index);
            return Vec::new();
        };
        self.select_suggestion(&suggestion)
    }

    pub fn focus(&mut self) -> Vec<Effect> {
        self.focused = true;
        self.pending_blur = None;
        Vec::new()
    }

    /// Request a blur; focus is only dropped once the blur delay elapses so
    /// a click on a suggestion that fires blur first still lands.
    pub fn blur(&mut self) -> Vec<Effect> {
        let ticket = self.next_ticket();
        self.pending_blur = Some(ticket);
        vec![Effect::ScheduleBlur {
            ticket,
            delay: self.config.blur_delay(),
        }]
    }

    /// The blur delay ended
    pub fn blur_elapsed(&mut self, ticket: TimerTicket) {
        if self.pending_blur != Some(ticket) {
            trace!("Ignoring superseded blur timer");
            return;
        }
        self.pending_blur = None;
        self.focused = false;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Lookup currently awaited, if any
    pub fn in_flight(&self) -> Option<&LookupRequest> {
        self.in_flight.as_ref()
    }

    /// Suggestions for the current query; empty when none apply
    pub fn suggestions(&self) -> &[Suggestion] {
        match &self.batch {
            Some(batch) if batch.query == self.query => &batch.items[..],
            _ => &[],
        }
    }

    pub fn suggestions_visible(&self) -> bool {
        self.focused && !self.suggestions().is_empty()
    }

    pub fn snapshot(&self) -> SearchBoxState {
        let suggestions = match &self.batch {
            Some(batch) if batch.query == self.query => Arc::clone(&batch.items),
            _ => Arc::from(Vec::new()),
        };
        SearchBoxState {
            query: self.query.clone(),
            focused: self.focused,
            loading: self.loading,
            suggestions_visible: self.focused && !suggestions.is_empty(),
            suggestions,
        }
    }

    fn is_current(&self, request: &LookupRequest) -> bool {
        self.in_flight.as_ref() == Some(request) && request.query == self.query
    }

    fn next_ticket(&mut self) -> TimerTicket {
        self.last_ticket += 1;
        TimerTicket(self.last_ticket)
    }
}

impl Default for QueryInputController {
    fn default() -> Self {
        Self::new(TypeaheadConfig::default())
    }
}
