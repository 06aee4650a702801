use classfind_search_api::{SearchFilter, SearchResult};

/// Observable state of a search surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
	/// Raw text of the input box.
	pub query: String,
	/// Trimmed text most recently released by the debounce timer.
	pub debounced_query: String,
	pub is_loading: bool,
	pub results: Vec<SearchResult>,
	/// Keyboard cursor. Always a valid index while `results` is non-empty.
	pub selected_index: usize,
	pub active_filter: SearchFilter,
	pub recent_searches: Vec<String>,
	pub error: Option<String>,
}

impl SearchState {
	pub(crate) fn new(active_filter: SearchFilter, recent_searches: Vec<String>) -> Self {
		Self {
			query: String::new(),
			debounced_query: String::new(),
			is_loading: false,
			results: Vec::new(),
			selected_index: 0,
			active_filter,
			recent_searches,
			error: None,
		}
	}

	/// Keep the cursor inside the current result list.
	pub(crate) fn clamp_selection(&mut self) {
		if self.results.is_empty() {
			self.selected_index = 0;
		} else if self.selected_index >= self.results.len() {
			self.selected_index = self.results.len() - 1;
		}
	}

	#[must_use]
	pub fn selected(&self) -> Option<&SearchResult> {
		self.results.get(self.selected_index)
	}
}

/// Coarse lifecycle of the engine, derived from its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
	/// Query below the minimum length; nothing is fetched.
	Idle,
	/// Waiting for typing to pause.
	Debouncing,
	/// A committed query is waiting on the search service.
	Fetching,
	/// Results (possibly none) are available.
	Settled,
	/// The last fetch failed.
	Errored,
}
