use serde::{Deserialize, Serialize};

/// Which family of entities a search surface operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
	/// Search across the class directory.
	Dashboard,
	/// Search resources that belong to a single class.
	Class,
}

impl SearchMode {
	/// Return the lowercase identifier used in configuration and output.
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Dashboard => "dashboard",
			Self::Class => "class",
		}
	}
}

/// Scope of a mounted search surface.
///
/// A class id exists exactly when the context is in class mode, so the enum
/// carries it inside the [`SearchContext::Class`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SearchContext {
	Dashboard,
	Class {
		#[serde(rename = "classId")]
		class_id: i64,
		#[serde(rename = "className", default, skip_serializing_if = "Option::is_none")]
		class_name: Option<String>,
	},
}

impl SearchContext {
	/// Build a class-mode context without a display name.
	#[must_use]
	pub const fn class(class_id: i64) -> Self {
		Self::Class {
			class_id,
			class_name: None,
		}
	}

	#[must_use]
	pub const fn mode(&self) -> SearchMode {
		match self {
			Self::Dashboard => SearchMode::Dashboard,
			Self::Class { .. } => SearchMode::Class,
		}
	}

	#[must_use]
	pub const fn class_id(&self) -> Option<i64> {
		match self {
			Self::Dashboard => None,
			Self::Class { class_id, .. } => Some(*class_id),
		}
	}

	/// Human readable label for prompts and summaries.
	#[must_use]
	pub fn label(&self) -> String {
		match self {
			Self::Dashboard => "All classes".to_string(),
			Self::Class {
				class_name: Some(name),
				..
			} => name.clone(),
			Self::Class { class_id, .. } => format!("Class {class_id}"),
		}
	}
}

impl Default for SearchContext {
	fn default() -> Self {
		Self::Dashboard
	}
}
