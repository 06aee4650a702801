//! Decide which [`SearchContext`] a search surface operates in.
//!
//! The context is derived once per mount from the current location, unless
//! the embedder supplies an explicit mode override.

use classfind_search_api::{SearchContext, SearchMode};

/// Path segment that introduces a class identifier, as in `/class/45`.
const CLASS_SEGMENT: &str = "class";

/// Explicit context requested by an embedder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextOverride {
	pub mode: Option<SearchMode>,
	pub class_id: Option<i64>,
	pub class_name: Option<String>,
}

impl ContextOverride {
	#[must_use]
	pub fn dashboard() -> Self {
		Self {
			mode: Some(SearchMode::Dashboard),
			..Self::default()
		}
	}

	#[must_use]
	pub fn class(class_id: i64) -> Self {
		Self {
			mode: Some(SearchMode::Class),
			class_id: Some(class_id),
			class_name: None,
		}
	}
}

/// Resolve the context for `location`.
///
/// An override carrying a mode always wins. Otherwise a `class/<id>` segment
/// selects class mode; a missing or unparseable id degrades to dashboard mode.
pub fn resolve(location: &str, context_override: Option<&ContextOverride>) -> SearchContext {
	let class_name = context_override.and_then(|value| value.class_name.clone());

	match context_override.and_then(|value| value.mode) {
		Some(SearchMode::Dashboard) => SearchContext::Dashboard,
		Some(SearchMode::Class) => {
			let class_id = context_override
				.and_then(|value| value.class_id)
				.or_else(|| class_id_from_location(location));
			match class_id {
				Some(class_id) => SearchContext::Class {
					class_id,
					class_name,
				},
				None => {
					tracing::warn!(location, "class mode requested without a class id");
					SearchContext::Dashboard
				}
			}
		}
		None => match class_id_from_location(location) {
			Some(class_id) => SearchContext::Class {
				class_id,
				class_name,
			},
			None => SearchContext::Dashboard,
		},
	}
}

/// Extract the class id from a location such as `/class/45/documents`.
#[must_use]
pub fn class_id_from_location(location: &str) -> Option<i64> {
	let mut segments = location_path(location)
		.split('/')
		.filter(|segment| !segment.is_empty());
	segments.find(|segment| *segment == CLASS_SEGMENT)?;
	let raw = segments.next()?;
	match raw.parse::<i64>() {
		Ok(class_id) => Some(class_id),
		Err(err) => {
			tracing::debug!(segment = raw, %err, "ignoring malformed class id");
			None
		}
	}
}

/// Return the path portion of a location, without origin, query or fragment.
#[must_use]
pub fn location_path(location: &str) -> &str {
	let without_origin = match location.find("://") {
		Some(scheme_end) => {
			let rest = &location[scheme_end + 3..];
			rest.find('/').map_or("/", |path_start| &rest[path_start..])
		}
		None => location,
	};
	let end = without_origin
		.find(['?', '#'])
		.unwrap_or(without_origin.len());
	&without_origin[..end]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn class_segment_selects_class_mode() {
		assert_eq!(resolve("/class/45", None), SearchContext::class(45));
		assert_eq!(
			resolve("/class/45/documents?sort=name#top", None),
			SearchContext::class(45)
		);
	}

	#[test]
	fn locations_without_class_segment_use_dashboard() {
		assert_eq!(resolve("/", None), SearchContext::Dashboard);
		assert_eq!(resolve("/shop/items", None), SearchContext::Dashboard);
		assert_eq!(resolve("/class", None), SearchContext::Dashboard);
	}

	#[test]
	fn malformed_class_id_degrades_to_dashboard() {
		assert_eq!(resolve("/class/abc", None), SearchContext::Dashboard);
		assert_eq!(resolve("/class/45x/documents", None), SearchContext::Dashboard);
	}

	#[test]
	fn override_mode_wins_over_location() {
		let dashboard = ContextOverride::dashboard();
		assert_eq!(resolve("/class/45", Some(&dashboard)), SearchContext::Dashboard);

		let class = ContextOverride::class(12);
		assert_eq!(resolve("/", Some(&class)), SearchContext::class(12));
	}

	#[test]
	fn class_override_without_id_borrows_location_id() {
		let request = ContextOverride {
			mode: Some(SearchMode::Class),
			class_id: None,
			class_name: Some("Chemistry".into()),
		};
		assert_eq!(
			resolve("/class/9/members", Some(&request)),
			SearchContext::Class {
				class_id: 9,
				class_name: Some("Chemistry".into()),
			}
		);
		assert_eq!(resolve("/grades", Some(&request)), SearchContext::Dashboard);
	}

	#[test]
	fn location_path_strips_origin_query_and_fragment() {
		assert_eq!(
			location_path("https://school.test/class/45?tab=posts#post-3"),
			"/class/45"
		);
		assert_eq!(location_path("https://school.test"), "/");
		assert_eq!(location_path("/class/45#post-3"), "/class/45");
	}
}
