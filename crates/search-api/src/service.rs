use thiserror::Error;

use crate::records::{ClassResourcePage, ClassSearchPage};
use crate::result::SearchResultType;

/// Parameters of the dashboard-mode class search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassQuery {
	pub query: String,
}

/// Parameters of the class-mode resource search.
///
/// `kind` narrows the work done by the service; callers still render only
/// the bucket that matches their active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceQuery {
	pub class_id: i64,
	pub query: String,
	pub kind: Option<SearchResultType>,
}

/// Failures reported by a [`SearchService`].
#[derive(Debug, Error)]
pub enum ServiceError {
	#[error("search service could not be reached: {0}")]
	Transport(String),
	#[error("search service answered with status {status}: {body}")]
	Status { status: u16, body: String },
	#[error("search service returned an unreadable payload: {0}")]
	Decode(String),
	#[error("search service is misconfigured: {0}")]
	Config(String),
}

/// Remote read-only endpoints backing the search surface.
pub trait SearchService: Send + Sync {
	/// Search the class directory.
	fn search_classes(&self, query: &ClassQuery) -> Result<ClassSearchPage, ServiceError>;

	/// Search posts, documents, assignments and members of one class.
	fn search_class_resources(
		&self,
		query: &ResourceQuery,
	) -> Result<ClassResourcePage, ServiceError>;
}
