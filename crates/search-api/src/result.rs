use std::fmt;

use serde::Serialize;

/// Discriminant of a [`SearchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchResultType {
	Class,
	Post,
	Document,
	Assignment,
	Member,
}

impl SearchResultType {
	/// Resource kinds searchable inside a single class, in chip order.
	pub const CLASS_RESOURCES: [Self; 4] = [Self::Post, Self::Document, Self::Assignment, Self::Member];

	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Class => "class",
			Self::Post => "post",
			Self::Document => "document",
			Self::Assignment => "assignment",
			Self::Member => "member",
		}
	}

	/// Plural label used for filter chips.
	#[must_use]
	pub const fn plural_label(self) -> &'static str {
		match self {
			Self::Class => "Classes",
			Self::Post => "Posts",
			Self::Document => "Documents",
			Self::Assignment => "Assignments",
			Self::Member => "Members",
		}
	}

	/// Parse the lowercase identifier produced by [`SearchResultType::as_str`].
	#[must_use]
	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"class" => Some(Self::Class),
			"post" => Some(Self::Post),
			"document" => Some(Self::Document),
			"assignment" => Some(Self::Assignment),
			"member" => Some(Self::Member),
			_ => None,
		}
	}
}

impl fmt::Display for SearchResultType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Active filter of a search surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchFilter {
	All,
	Only(SearchResultType),
}

impl SearchFilter {
	/// Whether results of `kind` are visible under this filter.
	#[must_use]
	pub fn admits(self, kind: SearchResultType) -> bool {
		match self {
			Self::All => true,
			Self::Only(only) => only == kind,
		}
	}

	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::All => "all",
			Self::Only(kind) => kind.as_str(),
		}
	}

	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::All => "All",
			Self::Only(kind) => kind.plural_label(),
		}
	}

	#[must_use]
	pub fn parse(value: &str) -> Option<Self> {
		if value == "all" {
			return Some(Self::All);
		}
		SearchResultType::parse(value).map(Self::Only)
	}
}

impl fmt::Display for SearchFilter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassResult {
	pub id: i64,
	pub title: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subtitle: Option<String>,
	pub teacher_name: Option<String>,
	pub member_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResult {
	pub id: i64,
	pub class_id: i64,
	pub title: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subtitle: Option<String>,
	pub author_name: Option<String>,
	pub comment_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResult {
	pub id: i64,
	pub class_id: i64,
	pub title: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subtitle: Option<String>,
	pub file_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResult {
	pub id: i64,
	pub class_id: i64,
	pub title: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subtitle: Option<String>,
	pub due_date: Option<String>,
	pub max_score: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResult {
	pub id: i64,
	pub title: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subtitle: Option<String>,
	pub email: Option<String>,
	pub avatar_url: Option<String>,
	pub role: Option<String>,
}

/// A single row of the merged result list.
///
/// Ids are only unique within a type and context, so consumers that need a
/// key should pair [`SearchResult::kind`] with [`SearchResult::id`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchResult {
	Class(ClassResult),
	Post(PostResult),
	Document(DocumentResult),
	Assignment(AssignmentResult),
	Member(MemberResult),
}

impl SearchResult {
	#[must_use]
	pub const fn kind(&self) -> SearchResultType {
		match self {
			Self::Class(_) => SearchResultType::Class,
			Self::Post(_) => SearchResultType::Post,
			Self::Document(_) => SearchResultType::Document,
			Self::Assignment(_) => SearchResultType::Assignment,
			Self::Member(_) => SearchResultType::Member,
		}
	}

	#[must_use]
	pub const fn id(&self) -> i64 {
		match self {
			Self::Class(result) => result.id,
			Self::Post(result) => result.id,
			Self::Document(result) => result.id,
			Self::Assignment(result) => result.id,
			Self::Member(result) => result.id,
		}
	}

	#[must_use]
	pub fn title(&self) -> &str {
		match self {
			Self::Class(result) => &result.title,
			Self::Post(result) => &result.title,
			Self::Document(result) => &result.title,
			Self::Assignment(result) => &result.title,
			Self::Member(result) => &result.title,
		}
	}

	#[must_use]
	pub fn subtitle(&self) -> Option<&str> {
		match self {
			Self::Class(result) => result.subtitle.as_deref(),
			Self::Post(result) => result.subtitle.as_deref(),
			Self::Document(result) => result.subtitle.as_deref(),
			Self::Assignment(result) => result.subtitle.as_deref(),
			Self::Member(result) => result.subtitle.as_deref(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn filter_admits_only_its_type() {
		let filter = SearchFilter::Only(SearchResultType::Post);
		assert!(filter.admits(SearchResultType::Post));
		assert!(!filter.admits(SearchResultType::Member));
		assert!(SearchFilter::All.admits(SearchResultType::Class));
	}

	#[test]
	fn filter_parses_labels() {
		assert_eq!(SearchFilter::parse("all"), Some(SearchFilter::All));
		assert_eq!(
			SearchFilter::parse("document"),
			Some(SearchFilter::Only(SearchResultType::Document))
		);
		assert_eq!(SearchFilter::parse("grades"), None);
	}

	#[test]
	fn result_serializes_with_type_tag() {
		let result = SearchResult::Member(MemberResult {
			id: 9,
			title: "Ada".into(),
			subtitle: Some("teacher".into()),
			email: Some("ada@example.com".into()),
			avatar_url: None,
			role: Some("teacher".into()),
		});
		let json = serde_json::to_value(&result).expect("serialize");
		assert_eq!(json["type"], "member");
		assert_eq!(json["id"], 9);
		assert_eq!(json["avatarUrl"], serde_json::Value::Null);
	}
}
