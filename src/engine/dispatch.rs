use classfind_search_api::{ClassResourcePage, ClassSearchPage, SearchResultType};
use thiserror::Error;

/// Which endpoint a fetch targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTarget {
	/// Dashboard mode: the class directory.
	Classes,
	/// Class mode: one resource collection of a class.
	ClassResources {
		class_id: i64,
		kind: SearchResultType,
	},
}

/// A fetch issued by the engine for a committed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
	/// Sequence number used to discard superseded responses.
	pub id: u64,
	pub query: String,
	pub target: FetchTarget,
}

/// Raw payload returned by the search service.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchPayload {
	Classes(ClassSearchPage),
	ClassResources(ClassResourcePage),
}

/// Completion of a [`FetchRequest`]. Failures are flattened to a message.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
	pub id: u64,
	pub query: String,
	pub outcome: Result<FetchPayload, String>,
}

impl FetchResponse {
	#[must_use]
	pub fn success(request: &FetchRequest, payload: FetchPayload) -> Self {
		Self {
			id: request.id,
			query: request.query.clone(),
			outcome: Ok(payload),
		}
	}

	#[must_use]
	pub fn failure(request: &FetchRequest, message: impl Into<String>) -> Self {
		Self {
			id: request.id,
			query: request.query.clone(),
			outcome: Err(message.into()),
		}
	}
}

/// The fetch could not be handed to whatever runs it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("search worker is unavailable")]
pub struct DispatchError;

/// Sink for fetches issued by the engine.
///
/// Implementations must not block; the response is delivered later through
/// [`SearchEngine::apply_response`](super::SearchEngine::apply_response).
/// An `Err` settles the request as failed straight away.
pub trait QueryDispatch {
	fn dispatch(&mut self, request: FetchRequest) -> Result<(), DispatchError>;
}
