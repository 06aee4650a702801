//! Data model shared between the `classfind` search engine and the services
//! that feed it.
//!
//! Raw records arrive from the remote search service in [`records`], are
//! mapped into the common [`SearchResult`] shape by the functions in
//! [`transform`], and are scoped by a [`SearchContext`].

pub mod context;
pub mod records;
pub mod result;
pub mod service;
pub mod transform;

pub use context::{SearchContext, SearchMode};
pub use records::{
	AssignmentRecord, AuthorRecord, ClassRecord, ClassResourcePage, ClassSearchPage, DocumentRecord,
	MemberRecord, PostRecord,
};
pub use result::{
	AssignmentResult, ClassResult, DocumentResult, MemberResult, PostResult, SearchFilter,
	SearchResult, SearchResultType,
};
pub use service::{ClassQuery, ResourceQuery, SearchService, ServiceError};
pub use transform::{
	transform_assignment, transform_class, transform_document, transform_member, transform_post,
};
