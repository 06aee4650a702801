use ratatui::style::{Color, Modifier, Style};

/// Styles for the elements of the search surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Dialog title and the active filter chip.
	pub header: Style,
	/// Cursor row.
	pub row_highlight: Style,
	/// Prompt and dialog border.
	pub prompt: Style,
	/// Empty states, subtitles and hints.
	pub empty: Style,
	/// Type badges.
	pub highlight: Style,
	/// Error empty state.
	pub error: Style,
}

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::LightRed),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(180, 30, 30)),
};

const BUILTINS: [(&str, Theme); 2] = [("slate", SLATE), ("light", LIGHT)];

impl Theme {
	#[must_use]
	pub fn chip_inactive_style(&self) -> Style {
		Style::new()
			.fg(self.header.fg.unwrap_or(Color::Reset))
			.bg(self.row_highlight.bg.unwrap_or(Color::Reset))
	}

	#[must_use]
	pub fn chip_active_style(&self) -> Style {
		self.header.add_modifier(Modifier::BOLD)
	}
}

impl Default for Theme {
	fn default() -> Self {
		SLATE
	}
}

/// Look up a builtin theme, ignoring case and surrounding whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = name.trim().to_ascii_lowercase();
	BUILTINS
		.iter()
		.find(|(builtin, _)| *builtin == wanted)
		.map(|(_, theme)| *theme)
}

/// Names accepted by [`by_name`].
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILTINS.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_is_case_insensitive() {
		assert_eq!(by_name(" Light "), Some(LIGHT));
		assert_eq!(by_name("slate"), Some(SLATE));
		assert_eq!(by_name("solarized"), None);
	}

	#[test]
	fn inactive_chip_borrows_header_foreground() {
		let style = SLATE.chip_inactive_style();
		assert_eq!(style.fg, SLATE.header.fg);
		assert_eq!(style.bg, SLATE.row_highlight.bg);
	}
}
