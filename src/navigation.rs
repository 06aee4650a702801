//! Turn a confirmed [`SearchResult`] into a navigation decision.
//!
//! Posts and documents prefer an in-page anchor when the user already sits on
//! the owning page, so the host can open the item in place. Members never
//! navigate; the caller shows a profile overlay instead.

use classfind_search_api::{MemberResult, SearchResult};
use serde::Serialize;

use crate::context::location_path;

/// What the host should do with a confirmed result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "lowercase")]
pub enum Navigation {
	/// Push a new route.
	Navigate(String),
	/// Set the fragment of the current page.
	Anchor(String),
	/// Stay put; the caller handles the selection itself.
	None,
}

/// Result of routing a confirmed selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routed {
	/// The default resolver decided where to go.
	Resolved(Navigation),
	/// A caller-supplied handler took over.
	Delegated,
}

/// Caller-supplied replacement for default navigation, e.g. an inline picker.
pub type SelectHandler = Box<dyn FnMut(&SearchResult) + Send>;

#[must_use]
pub fn class_route(class_id: i64) -> String {
	format!("/class/{class_id}")
}

#[must_use]
pub fn documents_route(class_id: i64) -> String {
	format!("/class/{class_id}/documents")
}

#[must_use]
pub fn assignment_route(class_id: i64, assignment_id: i64) -> String {
	format!("/class/{class_id}/assignments/{assignment_id}")
}

#[must_use]
pub fn post_anchor(post_id: i64) -> String {
	format!("post-{post_id}")
}

#[must_use]
pub fn document_anchor(document_id: i64) -> String {
	format!("document-{document_id}")
}

/// Resolve `result` relative to `current_location`.
#[must_use]
pub fn resolve(result: &SearchResult, current_location: &str) -> Navigation {
	match result {
		SearchResult::Class(class) => Navigation::Navigate(class_route(class.id)),
		SearchResult::Post(post) => anchor_or_navigate(
			current_location,
			&class_route(post.class_id),
			&post_anchor(post.id),
		),
		SearchResult::Document(document) => anchor_or_navigate(
			current_location,
			&documents_route(document.class_id),
			&document_anchor(document.id),
		),
		SearchResult::Assignment(assignment) => {
			Navigation::Navigate(assignment_route(assignment.class_id, assignment.id))
		}
		SearchResult::Member(_) => Navigation::None,
	}
}

fn anchor_or_navigate(current_location: &str, page: &str, anchor: &str) -> Navigation {
	if same_page(current_location, page) {
		Navigation::Anchor(anchor.to_string())
	} else {
		Navigation::Navigate(format!("{page}#{anchor}"))
	}
}

fn same_page(current_location: &str, page: &str) -> bool {
	let current = location_path(current_location);
	let current = current.strip_suffix('/').unwrap_or(current);
	current == page
}

/// Routes confirmed results, honouring an optional [`SelectHandler`].
pub struct SelectionRouter {
	location: String,
	on_select: Option<SelectHandler>,
}

impl SelectionRouter {
	pub fn new(location: impl Into<String>) -> Self {
		Self {
			location: location.into(),
			on_select: None,
		}
	}

	/// Replace default navigation with `handler` entirely.
	#[must_use]
	pub fn with_handler(mut self, handler: SelectHandler) -> Self {
		self.on_select = Some(handler);
		self
	}

	#[must_use]
	pub fn location(&self) -> &str {
		&self.location
	}

	/// Record a route change performed by the host.
	pub fn set_location(&mut self, location: impl Into<String>) {
		self.location = location.into();
	}

	pub fn route(&mut self, result: &SearchResult) -> Routed {
		if let Some(handler) = self.on_select.as_mut() {
			handler(result);
			return Routed::Delegated;
		}
		Routed::Resolved(resolve(result, &self.location))
	}
}

/// Basic profile information shown for a member result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
	pub id: i64,
	pub name: String,
	pub email: Option<String>,
	pub avatar_url: Option<String>,
	pub role: Option<String>,
}

impl From<&MemberResult> for MemberProfile {
	fn from(member: &MemberResult) -> Self {
		Self {
			id: member.id,
			name: member.title.clone(),
			email: member.email.clone(),
			avatar_url: member.avatar_url.clone(),
			role: member.role.clone(),
		}
	}
}
