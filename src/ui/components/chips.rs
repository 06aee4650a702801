use classfind_search_api::SearchFilter;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Tabs;
use throbber_widgets_tui::{Throbber, ThrobberState};

use super::input::QueryInput;
use crate::ui::style::Theme;

/// Argument bundle for rendering the input row.
pub struct InputContext<'a, 'b> {
	pub search_input: &'a QueryInput<'b>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Activity indicator drawn at the right edge of the input row.
pub struct ProgressState<'a> {
	pub label: &'a str,
	pub loading: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render the input with the activity indicator right-aligned.
pub fn render_input(frame: &mut Frame, input: InputContext<'_, '_>, progress: ProgressState<'_>) {
	let InputContext {
		search_input,
		area,
		theme,
	} = input;

	search_input.render(frame, area);
	render_progress(frame, area, &progress, theme);
}

/// Render the filter chips for the current context.
pub fn render_chips(
	frame: &mut Frame,
	area: Rect,
	filters: &[SearchFilter],
	active: SearchFilter,
	theme: &Theme,
) {
	let selected = selected_chip_index(filters, active);
	let chips = Tabs::new(build_chip_titles(theme, filters, selected))
		.select(selected)
		.divider("")
		.padding("", " ")
		.highlight_style(theme.chip_active_style());
	frame.render_widget(chips, area);
}

fn selected_chip_index(filters: &[SearchFilter], active: SearchFilter) -> usize {
	filters
		.iter()
		.position(|filter| *filter == active)
		.unwrap_or(0)
}

fn build_chip_titles(theme: &Theme, filters: &[SearchFilter], selected: usize) -> Vec<Line<'static>> {
	let active = theme.chip_active_style();
	let inactive = theme.chip_inactive_style();
	filters
		.iter()
		.enumerate()
		.map(|(index, filter)| {
			let style = if index == selected { active } else { inactive };
			Line::from(format!(" {} ", filter.label())).style(style)
		})
		.collect()
}

fn render_progress(frame: &mut Frame, area: Rect, progress: &ProgressState<'_>, theme: &Theme) {
	if area.width == 0 || area.height == 0 || !progress.loading {
		return;
	}

	let muted = theme.empty;
	let spinner = Throbber::default().style(muted).throbber_style(muted);
	let mut line = Line::default();
	line.spans.push(spinner.to_symbol_span(progress.throbber_state));
	line.spans.push(Span::styled(progress.label.to_string(), muted));

	let line_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
	if line_width == 0 || line_width >= area.width {
		return;
	}

	let start_x = area.right().saturating_sub(line_width);
	let buffer = frame.buffer_mut();
	let last_char_x = (area.left()..area.right())
		.filter(|x| {
			buffer
				.cell((*x, area.top()))
				.is_some_and(|cell| !cell.symbol().trim().is_empty())
		})
		.last();
	// Two columns of padding after the typed text.
	if last_char_x.is_some_and(|last_x| last_x.saturating_add(3) > start_x) {
		return;
	}

	buffer.set_line(start_x, area.top(), &line, line_width);
}
