use classfind_search_api::SearchResult;
use serde::Serialize;

use crate::navigation::Navigation;

/// How a search session ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
	/// `true` when the user confirmed a result.
	pub accepted: bool,
	/// Input text at the time the session ended.
	pub query: String,
	pub selection: Option<SearchResult>,
	/// Where the host should go. `None` when a caller-supplied handler took
	/// the selection.
	pub navigation: Option<Navigation>,
}

impl SearchOutcome {
	#[must_use]
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			selection: None,
			navigation: None,
		}
	}

	#[must_use]
	pub fn confirmed(
		query: impl Into<String>,
		selection: SearchResult,
		navigation: Option<Navigation>,
	) -> Self {
		Self {
			accepted: true,
			query: query.into(),
			selection: Some(selection),
			navigation,
		}
	}
}
