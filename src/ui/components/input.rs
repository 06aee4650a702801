use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Single-line query editor built on [`TextArea`].
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
	placeholder: String,
	placeholder_style: Style,
}

impl<'a> QueryInput<'a> {
	pub fn new(initial: impl Into<String>, placeholder: impl Into<String>, placeholder_style: Style) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
			placeholder: placeholder.into(),
			placeholder_style,
		};
		input.set_text(initial);
		input
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea.lines().first().map(String::as_str).unwrap_or("")
	}

	/// Replace the contents and move the cursor to the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let text: String = text.into();
		let single_line = text.lines().next().unwrap_or("").to_string();
		let mut textarea = TextArea::new(vec![single_line]);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text(self.placeholder.clone());
		textarea.set_placeholder_style(self.placeholder_style);
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
	}

	/// Feed a key to the editor. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if inserts_newline(&key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		before != self.text()
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn inserts_newline(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}
