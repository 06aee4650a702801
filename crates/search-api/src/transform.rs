//! Pure mappings from raw service records to [`SearchResult`] rows.
//!
//! Each transformer is total: missing optional fields fall back to a fixed
//! literal instead of failing, and the record id is always preserved.

use crate::records::{AssignmentRecord, ClassRecord, DocumentRecord, MemberRecord, PostRecord};
use crate::result::{
	AssignmentResult, ClassResult, DocumentResult, MemberResult, PostResult, SearchResult,
};

/// Maximum number of characters kept from a post title.
pub const POST_TITLE_LIMIT: usize = 50;

const UNTITLED_CLASS: &str = "Untitled class";
const UNTITLED_POST: &str = "Untitled post";
const UNTITLED_DOCUMENT: &str = "Untitled document";
const UNTITLED_ASSIGNMENT: &str = "Untitled assignment";
const UNKNOWN_MEMBER: &str = "Unknown member";

pub fn transform_class(record: &ClassRecord) -> SearchResult {
	let subtitle = non_blank(record.teacher_name.as_deref())
		.or_else(|| non_blank(record.description.as_deref()))
		.map(single_line);
	SearchResult::Class(ClassResult {
		id: record.id,
		title: title_or(record.name.as_deref(), UNTITLED_CLASS),
		subtitle,
		teacher_name: non_blank(record.teacher_name.as_deref()).map(str::to_string),
		member_count: record.member_count.unwrap_or(0),
	})
}

/// Posts without a title borrow their first line of content.
pub fn transform_post(record: &PostRecord, class_id: i64) -> SearchResult {
	let source = non_blank(record.title.as_deref()).or_else(|| non_blank(record.content.as_deref()));
	let title = match source {
		Some(text) => truncate_chars(&single_line(text), POST_TITLE_LIMIT),
		None => UNTITLED_POST.to_string(),
	};
	let author_name = record
		.author
		.as_ref()
		.and_then(|author| non_blank(author.name.as_deref()))
		.map(str::to_string);
	SearchResult::Post(PostResult {
		id: record.id,
		class_id: record.class_id.unwrap_or(class_id),
		title,
		subtitle: author_name.clone(),
		author_name,
		comment_count: record.comment_count.unwrap_or(0),
	})
}

pub fn transform_document(record: &DocumentRecord, class_id: i64) -> SearchResult {
	let title = non_blank(record.title.as_deref())
		.or_else(|| non_blank(record.file_name.as_deref()))
		.map_or_else(|| UNTITLED_DOCUMENT.to_string(), single_line);
	let file_type = non_blank(record.file_type.as_deref()).map(str::to_ascii_uppercase);
	let subtitle = match (&file_type, non_blank(record.uploaded_by.as_deref())) {
		(Some(kind), Some(uploader)) => Some(format!("{kind} · {uploader}")),
		(Some(kind), None) => Some(kind.clone()),
		(None, Some(uploader)) => Some(uploader.to_string()),
		(None, None) => None,
	};
	SearchResult::Document(DocumentResult {
		id: record.id,
		class_id: record.class_id.unwrap_or(class_id),
		title,
		subtitle,
		file_type,
	})
}

pub fn transform_assignment(record: &AssignmentRecord, class_id: i64) -> SearchResult {
	let due_date = non_blank(record.due_date.as_deref()).map(str::to_string);
	SearchResult::Assignment(AssignmentResult {
		id: record.id,
		class_id: record.class_id.unwrap_or(class_id),
		title: title_or(record.title.as_deref(), UNTITLED_ASSIGNMENT),
		subtitle: due_date.as_ref().map(|date| format!("Due {date}")),
		due_date,
		max_score: record.max_score,
	})
}

pub fn transform_member(record: &MemberRecord) -> SearchResult {
	let email = non_blank(record.email.as_deref()).map(str::to_string);
	let title = non_blank(record.full_name.as_deref())
		.or(email.as_deref())
		.map_or_else(|| UNKNOWN_MEMBER.to_string(), single_line);
	let role = non_blank(record.role.as_deref()).map(str::to_ascii_lowercase);
	SearchResult::Member(MemberResult {
		id: record.id,
		title,
		subtitle: role.clone().or_else(|| email.clone()),
		email,
		avatar_url: non_blank(record.avatar_url.as_deref()).map(str::to_string),
		role,
	})
}

fn title_or(value: Option<&str>, fallback: &str) -> String {
	non_blank(value).map_or_else(|| fallback.to_string(), single_line)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
	value.map(str::trim).filter(|text| !text.is_empty())
}

/// Collapse a possibly multi-line value into its first non-empty line.
fn single_line(value: &str) -> String {
	value
		.lines()
		.map(str::trim)
		.find(|line| !line.is_empty())
		.unwrap_or_default()
		.to_string()
}

/// Keep at most `limit` characters, marking the cut with an ellipsis.
fn truncate_chars(value: &str, limit: usize) -> String {
	match value.char_indices().nth(limit) {
		Some((cut, _)) => format!("{}…", value[..cut].trim_end()),
		None => value.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::records::AuthorRecord;
	use crate::result::SearchResultType;

	#[test]
	fn class_keeps_id_and_prefers_teacher_subtitle() {
		let record = ClassRecord {
			id: 45,
			name: Some("Biology 101".into()),
			description: Some("Cells and more".into()),
			teacher_name: Some("Mr. Hale".into()),
			member_count: Some(28),
		};
		let SearchResult::Class(result) = transform_class(&record) else {
			panic!("expected class result");
		};
		assert_eq!(result.id, 45);
		assert_eq!(result.title, "Biology 101");
		assert_eq!(result.subtitle.as_deref(), Some("Mr. Hale"));
		assert_eq!(result.member_count, 28);
	}

	#[test]
	fn class_without_fields_uses_fallbacks() {
		let result = transform_class(&ClassRecord {
			id: 3,
			..ClassRecord::default()
		});
		assert_eq!(result.title(), "Untitled class");
		assert_eq!(result.subtitle(), None);
		assert_eq!(result.kind(), SearchResultType::Class);
	}

	#[test]
	fn long_post_title_is_cut_to_fifty_characters() {
		let title = "a".repeat(80);
		let record = PostRecord {
			id: 12,
			title: Some(title),
			..PostRecord::default()
		};
		let result = transform_post(&record, 45);
		let text = result.title();
		assert!(text.ends_with('…'));
		assert_eq!(text.chars().count(), POST_TITLE_LIMIT + 1);
	}

	#[test]
	fn post_title_falls_back_to_content_then_literal() {
		let from_content = transform_post(
			&PostRecord {
				id: 1,
				title: Some("   ".into()),
				content: Some("\nQuiz moved to Friday\nsee you".into()),
				..PostRecord::default()
			},
			45,
		);
		assert_eq!(from_content.title(), "Quiz moved to Friday");

		let empty = transform_post(&PostRecord::default(), 45);
		assert_eq!(empty.title(), "Untitled post");
	}

	#[test]
	fn post_carries_author_and_owning_class() {
		let record = PostRecord {
			id: 8,
			class_id: Some(99),
			title: Some("Field trip".into()),
			author: Some(AuthorRecord {
				id: Some(2),
				name: Some("Jo".into()),
			}),
			comment_count: Some(4),
			..PostRecord::default()
		};
		let SearchResult::Post(post) = transform_post(&record, 45) else {
			panic!("expected post result");
		};
		assert_eq!(post.class_id, 99);
		assert_eq!(post.author_name.as_deref(), Some("Jo"));
		assert_eq!(post.comment_count, 4);
	}

	#[test]
	fn document_falls_back_to_file_name() {
		let record = DocumentRecord {
			id: 5,
			file_name: Some("syllabus.pdf".into()),
			file_type: Some("pdf".into()),
			..DocumentRecord::default()
		};
		let SearchResult::Document(document) = transform_document(&record, 45) else {
			panic!("expected document result");
		};
		assert_eq!(document.title, "syllabus.pdf");
		assert_eq!(document.class_id, 45);
		assert_eq!(document.subtitle.as_deref(), Some("PDF"));
	}

	#[test]
	fn assignment_subtitle_shows_due_date() {
		let record = AssignmentRecord {
			id: 31,
			title: Some("Essay".into()),
			due_date: Some("2026-11-02".into()),
			max_score: Some(100),
			..AssignmentRecord::default()
		};
		let SearchResult::Assignment(assignment) = transform_assignment(&record, 45) else {
			panic!("expected assignment result");
		};
		assert_eq!(assignment.subtitle.as_deref(), Some("Due 2026-11-02"));
		assert_eq!(assignment.max_score, Some(100));
	}

	#[test]
	fn member_title_falls_back_to_email() {
		let record = MemberRecord {
			id: 77,
			email: Some("sam@school.test".into()),
			role: Some("STUDENT".into()),
			..MemberRecord::default()
		};
		let SearchResult::Member(member) = transform_member(&record) else {
			panic!("expected member result");
		};
		assert_eq!(member.id, 77);
		assert_eq!(member.title, "sam@school.test");
		assert_eq!(member.role.as_deref(), Some("student"));
		assert_eq!(transform_member(&MemberRecord::default()).title(), "Unknown member");
	}
}
