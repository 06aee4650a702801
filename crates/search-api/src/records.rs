//! Raw records returned by the remote search service.
//!
//! Every field other than `id` is optional so that partially populated
//! payloads still deserialize; the transformers decide on fallbacks.

use serde::Deserialize;

/// A class entry from the class directory search.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassRecord {
	pub id: i64,
	pub name: Option<String>,
	pub description: Option<String>,
	pub teacher_name: Option<String>,
	pub member_count: Option<u32>,
}

/// Display information about the author of a post.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorRecord {
	pub id: Option<i64>,
	pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostRecord {
	pub id: i64,
	pub class_id: Option<i64>,
	pub title: Option<String>,
	pub content: Option<String>,
	pub author: Option<AuthorRecord>,
	pub comment_count: Option<u32>,
	pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentRecord {
	pub id: i64,
	pub class_id: Option<i64>,
	pub title: Option<String>,
	pub file_name: Option<String>,
	pub file_type: Option<String>,
	pub uploaded_by: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignmentRecord {
	pub id: i64,
	pub class_id: Option<i64>,
	pub title: Option<String>,
	pub description: Option<String>,
	pub due_date: Option<String>,
	pub max_score: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberRecord {
	pub id: i64,
	pub full_name: Option<String>,
	pub email: Option<String>,
	pub avatar_url: Option<String>,
	pub role: Option<String>,
}

/// Response of the dashboard-mode class search.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassSearchPage {
	pub items: Vec<ClassRecord>,
	pub total: u64,
	pub page: u32,
	pub page_size: u32,
}

/// Response of the class-mode resource search, one bucket per entity kind.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassResourcePage {
	pub posts: Vec<PostRecord>,
	pub documents: Vec<DocumentRecord>,
	pub assignments: Vec<AssignmentRecord>,
	pub members: Vec<MemberRecord>,
	pub total: u64,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn resource_page_defaults_missing_buckets() {
		let page: ClassResourcePage =
			serde_json::from_str(r#"{"posts":[{"id":3,"title":"Lab notes"}],"total":1}"#)
				.expect("parse page");
		assert_eq!(page.posts.len(), 1);
		assert_eq!(page.posts[0].title.as_deref(), Some("Lab notes"));
		assert!(page.documents.is_empty());
		assert!(page.members.is_empty());
	}

	#[test]
	fn class_page_reads_camel_case_fields() {
		let page: ClassSearchPage = serde_json::from_str(
			r#"{"items":[{"id":1,"name":"Chemistry","teacherName":"Ms. Vo"}],"total":1,"page":1,"pageSize":20}"#,
		)
		.expect("parse page");
		assert_eq!(page.page_size, 20);
		assert_eq!(page.items[0].teacher_name.as_deref(), Some("Ms. Vo"));
	}
}
