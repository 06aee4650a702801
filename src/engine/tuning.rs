use std::time::Duration;

/// Quiet period after the last keystroke before a query is committed.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Queries shorter than this (in characters, after trimming) never reach the
/// search service.
pub const MIN_QUERY_LENGTH: usize = 2;

/// Maximum number of rows kept from a single response.
pub const MAX_RESULTS: usize = 20;

/// Thresholds shared across the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTuning {
	pub debounce: Duration,
	pub min_query_length: usize,
	pub max_results: usize,
	pub recent_limit: usize,
}

impl Default for SearchTuning {
	fn default() -> Self {
		Self {
			debounce: DEBOUNCE_DELAY,
			min_query_length: MIN_QUERY_LENGTH,
			max_results: MAX_RESULTS,
			recent_limit: crate::recent::DEFAULT_RECENT_LIMIT,
		}
	}
}

impl SearchTuning {
	/// Whether `query` is long enough to be sent to the search service.
	#[must_use]
	pub fn accepts(&self, query: &str) -> bool {
		query.trim().chars().count() >= self.min_query_length
	}
}
