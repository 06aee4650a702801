use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::App;
use super::components::{
	InputContext, ProgressState, build_recent_rows, build_result_rows, centered_rect,
	detail_width, render_chips, render_input, render_profile, render_rows,
};
use crate::engine::SearchPhase;

const DIALOG_WIDTH: u16 = 84;
const DIALOG_HEIGHT: u16 = 22;
const ERROR_MESSAGE: &str = "Something went wrong. Try searching again.";

/// What the dialog body shows for the current engine state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BodyView {
	Recent,
	Hint(String),
	Loading,
	Error,
	NoResults,
	Results,
}

impl App<'_> {
	pub(crate) fn body_view(&self) -> BodyView {
		let state = self.engine.state();
		let tuning = self.engine.tuning();
		if !tuning.accepts(&state.query) {
			if state.recent_searches.is_empty() {
				return BodyView::Hint(format!(
					"Type at least {} characters to search",
					tuning.min_query_length
				));
			}
			return BodyView::Recent;
		}
		if state.error.is_some() {
			return BodyView::Error;
		}
		if !state.results.is_empty() {
			return BodyView::Results;
		}
		match self.engine.phase() {
			SearchPhase::Debouncing | SearchPhase::Fetching => BodyView::Loading,
			_ => BodyView::NoResults,
		}
	}

	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		self.render_host(frame, area);

		if self.is_open() {
			self.render_dialog(frame, area);
		}

		if let Some(profile) = &self.profile {
			render_profile(frame, area, profile, &self.theme);
		}
	}

	fn render_host(&self, frame: &mut Frame, area: Rect) {
		let context = self.engine.context();
		let mode = context.mode().as_str();
		let muted = self.theme.empty;
		let lines = vec![
			Line::from(Span::styled("classfind", self.theme.highlight)),
			Line::default(),
			Line::from(vec![
				Span::styled("Location  ", muted),
				Span::raw(self.router.location()),
			]),
			Line::from(vec![
				Span::styled("Context   ", muted),
				Span::raw(format!("{} ({mode} mode)", context.label())),
			]),
			Line::default(),
			Line::from(Span::styled(
				format!("Press {} to search, q to quit", self.keyboard.toggle()),
				muted,
			)),
		];
		let inner = area.inner(Margin {
			vertical: 1,
			horizontal: 2,
		});
		frame.render_widget(Paragraph::new(lines), inner);
	}

	fn render_dialog(&mut self, frame: &mut Frame, area: Rect) {
		let dialog = centered_rect(area, DIALOG_WIDTH, DIALOG_HEIGHT);
		let title = format!(" {} · {} ", self.ui.title, self.engine.context().label());
		let hints = " ↑↓ move · Enter open · Tab filter · Esc close ";
		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(self.theme.prompt)
			.title(Span::styled(title, self.theme.header))
			.title_bottom(Line::from(Span::styled(hints, self.theme.empty)));
		let inner = block.inner(dialog).inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		frame.render_widget(Clear, dialog);
		frame.render_widget(block, dialog);

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
			])
			.split(inner);

		let loading = matches!(self.body_view(), BodyView::Loading);
		render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				area: layout[0],
				theme: &self.theme,
			},
			ProgressState {
				label: " Searching",
				loading,
				throbber_state: &self.throbber_state,
			},
		);
		render_chips(
			frame,
			layout[1],
			self.engine.filters(),
			self.engine.state().active_filter,
			&self.theme,
		);
		self.render_body(frame, layout[3]);
	}

	fn render_body(&mut self, frame: &mut Frame, area: Rect) {
		match self.body_view() {
			BodyView::Results => {
				let state = self.engine.state();
				self.table_state.select(Some(state.selected_index));
				let rows = build_result_rows(&state.results, &self.theme);
				let width = detail_width(&state.results);
				render_rows(frame, area, rows, width, &mut self.table_state, &self.theme);
			}
			BodyView::Recent => {
				let [caption, list] = Layout::default()
					.direction(Direction::Vertical)
					.constraints([Constraint::Length(1), Constraint::Min(1)])
					.areas(area);
				frame.render_widget(
					Paragraph::new("Recent searches · Enter to reuse · Ctrl-D to remove")
						.style(self.theme.empty),
					caption,
				);
				self.table_state.select(Some(self.recent_cursor));
				let rows = build_recent_rows(&self.engine.state().recent_searches, &self.theme);
				render_rows(frame, list, rows, 0, &mut self.table_state, &self.theme);
			}
			BodyView::Hint(text) => self.render_message(frame, area, &text, false),
			BodyView::Loading => self.render_message(frame, area, "Searching…", false),
			BodyView::NoResults => self.render_message(frame, area, "No results", false),
			BodyView::Error => self.render_message(frame, area, ERROR_MESSAGE, true),
		}
	}

	fn render_message(&self, frame: &mut Frame, area: Rect, text: &str, is_error: bool) {
		let style = if is_error {
			self.theme.error
		} else {
			self.theme.empty
		};
		let message = Paragraph::new(text.to_string())
			.alignment(Alignment::Center)
			.style(style);
		frame.render_widget(message, area);
	}
}
