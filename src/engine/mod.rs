//! Incremental search state machine.
//!
//! The engine owns the query text, the debounce timer, the active filter, and
//! the merged result list. Time is passed in explicitly (`now`) so the host
//! event loop decides when timers are polled, and fetches leave through a
//! [`QueryDispatch`] so the engine itself never blocks.

mod debounce;
mod dispatch;
mod runtime;
mod state;
mod tuning;


use std::time::Instant;

use classfind_search_api::{
	SearchContext, SearchFilter, SearchResult, SearchResultType, transform_assignment,
	transform_class, transform_document, transform_member, transform_post,
};

use self::debounce::Debouncer;
use self::runtime::RequestLedger;
use crate::recent::RecentQueryStore;

pub use dispatch::{DispatchError, FetchPayload, FetchRequest, FetchResponse, FetchTarget, QueryDispatch};
pub use state::{SearchPhase, SearchState};
pub use tuning::{DEBOUNCE_DELAY, MAX_RESULTS, MIN_QUERY_LENGTH, SearchTuning};

const DASHBOARD_FILTERS: [SearchFilter; 2] =
	[SearchFilter::All, SearchFilter::Only(SearchResultType::Class)];

const CLASS_FILTERS: [SearchFilter; 4] = {
	let [posts, documents, assignments, members] = SearchResultType::CLASS_RESOURCES;
	[
		SearchFilter::Only(posts),
		SearchFilter::Only(documents),
		SearchFilter::Only(assignments),
		SearchFilter::Only(members),
	]
};

/// Filters offered by a context, default first.
#[must_use]
pub fn filters_for(context: &SearchContext) -> &'static [SearchFilter] {
	match context {
		SearchContext::Dashboard => &DASHBOARD_FILTERS,
		SearchContext::Class { .. } => &CLASS_FILTERS,
	}
}

fn default_filter(context: &SearchContext) -> SearchFilter {
	filters_for(context)[0]
}

pub struct SearchEngine<D> {
	context: SearchContext,
	tuning: SearchTuning,
	state: SearchState,
	debounce: Debouncer,
	ledger: RequestLedger,
	payload: Option<FetchPayload>,
	recent: RecentQueryStore,
	dispatcher: D,
}

impl<D: QueryDispatch> SearchEngine<D> {
	pub fn new(
		context: SearchContext,
		tuning: SearchTuning,
		recent: RecentQueryStore,
		dispatcher: D,
	) -> Self {
		let state = SearchState::new(default_filter(&context), recent.entries().to_vec());
		Self {
			context,
			debounce: Debouncer::new(tuning.debounce),
			tuning,
			state,
			ledger: RequestLedger::default(),
			payload: None,
			recent,
			dispatcher,
		}
	}

	#[must_use]
	pub const fn context(&self) -> &SearchContext {
		&self.context
	}

	#[must_use]
	pub const fn state(&self) -> &SearchState {
		&self.state
	}

	#[must_use]
	pub const fn tuning(&self) -> &SearchTuning {
		&self.tuning
	}

	#[must_use]
	pub const fn dispatcher(&self) -> &D {
		&self.dispatcher
	}

	/// Filters selectable in the current context, default first.
	#[must_use]
	pub fn filters(&self) -> &'static [SearchFilter] {
		filters_for(&self.context)
	}

	#[must_use]
	pub fn phase(&self) -> SearchPhase {
		if !self.tuning.accepts(&self.state.query) {
			SearchPhase::Idle
		} else if self.debounce.is_pending() {
			SearchPhase::Debouncing
		} else if self.ledger.is_in_flight() {
			SearchPhase::Fetching
		} else if self.state.error.is_some() {
			SearchPhase::Errored
		} else {
			SearchPhase::Settled
		}
	}

	/// When the host should call [`SearchEngine::tick`] next, if at all.
	#[must_use]
	pub fn next_deadline(&self) -> Option<Instant> {
		self.debounce.deadline()
	}

	/// Record a keystroke.
	///
	/// Queries below the minimum length short-circuit to an idle, empty state
	/// immediately; longer queries restart the debounce timer.
	pub fn set_query(&mut self, text: impl Into<String>, now: Instant) {
		self.state.query = text.into();
		let trimmed = self.state.query.trim().to_string();

		if !self.tuning.accepts(&trimmed) {
			self.debounce.cancel();
			self.ledger.invalidate();
			self.payload = None;
			self.state.results.clear();
			self.state.is_loading = false;
			self.state.error = None;
			self.state.selected_index = 0;
			self.state.debounced_query = trimmed;
			return;
		}

		self.debounce.schedule(trimmed, now);
	}

	/// Release the debounced query if its quiet period has elapsed.
	///
	/// Returns `true` when a new query was committed.
	pub fn tick(&mut self, now: Instant) -> bool {
		match self.debounce.poll(now) {
			Some(query) => self.commit(query),
			None => false,
		}
	}

	/// Commit any pending query without waiting for the debounce timer.
	pub fn flush(&mut self) -> bool {
		match self.debounce.deadline() {
			Some(deadline) => self.tick(deadline),
			None => false,
		}
	}

	fn commit(&mut self, query: String) -> bool {
		let unchanged = query == self.state.debounced_query
			&& (self.payload.is_some() || self.ledger.is_in_flight());
		if unchanged {
			return false;
		}
		self.state.debounced_query = query;
		self.state.selected_index = 0;
		self.fetch();
		true
	}

	fn fetch(&mut self) {
		let target = match (&self.context, self.state.active_filter) {
			(SearchContext::Dashboard, _) => FetchTarget::Classes,
			(SearchContext::Class { class_id, .. }, SearchFilter::Only(kind)) => {
				FetchTarget::ClassResources {
					class_id: *class_id,
					kind,
				}
			}
			(SearchContext::Class { .. }, SearchFilter::All) => {
				tracing::warn!("class mode has no combined filter; skipping fetch");
				return;
			}
		};

		let id = self.ledger.issue();
		self.payload = None;
		self.state.results.clear();
		self.state.selected_index = 0;
		self.state.error = None;
		self.state.is_loading = true;

		let request = FetchRequest {
			id,
			query: self.state.debounced_query.clone(),
			target,
		};
		tracing::debug!(id, query = %request.query, ?target, "dispatching search");
		if let Err(err) = self.dispatcher.dispatch(request) {
			self.fail_in_flight(err.to_string());
		}
	}

	/// Apply a completed fetch. Responses to superseded requests are dropped.
	///
	/// Returns `true` when the response was applied.
	pub fn apply_response(&mut self, response: FetchResponse) -> bool {
		if !self.ledger.matches_latest(response.id) {
			tracing::debug!(id = response.id, query = %response.query, "dropping stale search response");
			return false;
		}
		self.ledger.complete();
		self.state.is_loading = false;

		match response.outcome {
			Ok(payload) => {
				self.payload = Some(payload);
				self.state.error = None;
				self.rebuild_results();
			}
			Err(message) => {
				tracing::error!(query = %response.query, %message, "search failed");
				self.settle_failure(message);
			}
		}
		true
	}

	/// Fail the outstanding request, if any, without waiting for a response.
	///
	/// Used when the fetch can no longer complete, e.g. the worker is gone.
	/// Returns `true` when a request was settled.
	pub fn fail_in_flight(&mut self, message: impl Into<String>) -> bool {
		if !self.ledger.is_in_flight() {
			return false;
		}
		let message = message.into();
		tracing::error!(query = %self.state.debounced_query, %message, "search failed");
		self.ledger.complete();
		self.settle_failure(message);
		true
	}

	fn settle_failure(&mut self, message: String) {
		self.state.is_loading = false;
		self.payload = None;
		self.state.results.clear();
		self.state.selected_index = 0;
		self.state.error = Some(message);
	}

	/// Switch the active filter.
	///
	/// Class mode fetches the matching resource collection again; dashboard
	/// mode re-filters the results it already holds. Filters not offered by
	/// the context are ignored.
	pub fn set_filter(&mut self, filter: SearchFilter) -> bool {
		if !self.filters().contains(&filter) {
			tracing::debug!(%filter, "filter not available in this context");
			return false;
		}
		if filter == self.state.active_filter {
			return false;
		}
		self.state.active_filter = filter;
		self.state.selected_index = 0;

		match self.context {
			SearchContext::Dashboard => self.rebuild_results(),
			SearchContext::Class { .. } => {
				let committed = self.tuning.accepts(&self.state.query)
					&& self.tuning.accepts(&self.state.debounced_query);
				if committed {
					self.fetch();
				}
			}
		}
		true
	}

	/// Move the cursor down. Does not wrap.
	pub fn select_next(&mut self) {
		if self.state.selected_index + 1 < self.state.results.len() {
			self.state.selected_index += 1;
		}
	}

	/// Move the cursor up. Does not wrap.
	pub fn select_prev(&mut self) {
		self.state.selected_index = self.state.selected_index.saturating_sub(1);
	}

	#[must_use]
	pub fn select_current(&self) -> Option<&SearchResult> {
		self.state.selected()
	}

	/// Reset the query, cursor, and filter. A committed query is remembered
	/// as a recent search first; the recent list itself is kept.
	pub fn clear_search(&mut self) {
		if self.tuning.accepts(&self.state.debounced_query) {
			let committed = self.state.debounced_query.clone();
			self.add_recent_search(&committed);
		}
		self.debounce.cancel();
		self.ledger.invalidate();
		self.payload = None;
		self.state.query.clear();
		self.state.debounced_query.clear();
		self.state.results.clear();
		self.state.selected_index = 0;
		self.state.is_loading = false;
		self.state.error = None;
		self.state.active_filter = default_filter(&self.context);
	}

	pub fn add_recent_search(&mut self, query: &str) {
		let entries = self.recent.add(query.trim());
		self.state.recent_searches = entries.to_vec();
	}

	pub fn remove_recent_search(&mut self, query: &str) {
		let entries = self.recent.remove(query);
		self.state.recent_searches = entries.to_vec();
	}

	fn rebuild_results(&mut self) {
		let filter = self.state.active_filter;
		let limit = self.tuning.max_results;
		let results: Vec<SearchResult> = match (&self.payload, &self.context) {
			(None, _) => Vec::new(),
			(Some(FetchPayload::Classes(page)), _) => page
				.items
				.iter()
				.map(transform_class)
				.filter(|result| filter.admits(result.kind()))
				.take(limit)
				.collect(),
			(Some(FetchPayload::ClassResources(page)), SearchContext::Class { class_id, .. }) => {
				let class_id = *class_id;
				let mut merged = Vec::new();
				if filter.admits(SearchResultType::Post) {
					merged.extend(page.posts.iter().map(|post| transform_post(post, class_id)));
				}
				if filter.admits(SearchResultType::Document) {
					merged.extend(
						page.documents
							.iter()
							.map(|document| transform_document(document, class_id)),
					);
				}
				if filter.admits(SearchResultType::Assignment) {
					merged.extend(
						page.assignments
							.iter()
							.map(|assignment| transform_assignment(assignment, class_id)),
					);
				}
				if filter.admits(SearchResultType::Member) {
					merged.extend(page.members.iter().map(transform_member));
				}
				merged.truncate(limit);
				merged
			}
			(Some(FetchPayload::ClassResources(_)), SearchContext::Dashboard) => {
				tracing::warn!("ignoring class resource payload in dashboard mode");
				Vec::new()
			}
		};
		self.state.results = results;
		self.state.clamp_selection();
	}
}
