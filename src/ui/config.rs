use crate::keyboard::KeyBinding;

/// Text and behaviour knobs for the terminal shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	/// Dialog title.
	pub title: String,
	/// Placeholder shown while the input is empty.
	pub placeholder: String,
	/// Shortcut that opens and closes the search surface.
	pub toggle: KeyBinding,
	/// Open the surface immediately instead of showing the host screen.
	pub start_open: bool,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			title: "Search".to_string(),
			placeholder: "Search classes, posts, documents…".to_string(),
			toggle: KeyBinding::platform_default(),
			start_open: false,
		}
	}
}
