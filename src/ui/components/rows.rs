use classfind_search_api::{SearchResult, SearchResultType};
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row, Table, TableState};
use unicode_width::UnicodeWidthStr;

use crate::ui::style::Theme;

const BADGE_WIDTH: u16 = 8;
const MAX_DETAIL_WIDTH: u16 = 18;

#[must_use]
pub fn badge_label(kind: SearchResultType) -> &'static str {
	match kind {
		SearchResultType::Class => "CLASS",
		SearchResultType::Post => "POST",
		SearchResultType::Document => "DOC",
		SearchResultType::Assignment => "TASK",
		SearchResultType::Member => "MEMBER",
	}
}

/// Short right-hand annotation for a row, if the result carries one.
#[must_use]
pub fn detail_label(result: &SearchResult) -> Option<String> {
	match result {
		SearchResult::Class(class) => Some(match class.member_count {
			1 => "1 member".to_string(),
			count => format!("{count} members"),
		}),
		SearchResult::Post(post) if post.comment_count > 0 => Some(match post.comment_count {
			1 => "1 comment".to_string(),
			count => format!("{count} comments"),
		}),
		SearchResult::Document(document) => document.file_type.clone(),
		SearchResult::Assignment(assignment) => assignment.max_score.map(|score| format!("{score} pts")),
		SearchResult::Member(member) => member.role.clone(),
		SearchResult::Post(_) => None,
	}
}

/// Display width of the detail column: the widest label, capped.
#[must_use]
pub fn detail_width(results: &[SearchResult]) -> u16 {
	let widest = results
		.iter()
		.filter_map(detail_label)
		.map(|label| label.width())
		.max()
		.unwrap_or(0);
	u16::try_from(widest).map_or(MAX_DETAIL_WIDTH, |width| width.min(MAX_DETAIL_WIDTH))
}

/// Build table rows for a result list.
#[must_use]
pub fn build_result_rows<'a>(results: &'a [SearchResult], theme: &Theme) -> Vec<Row<'a>> {
	results
		.iter()
		.map(|result| {
			let mut line = Line::from(Span::raw(result.title()));
			if let Some(subtitle) = result.subtitle() {
				line.spans.push(Span::styled(format!("  {subtitle}"), theme.empty));
			}
			Row::new([
				Cell::from(badge_label(result.kind())).style(theme.highlight),
				Cell::from(line),
				Cell::from(detail_label(result).unwrap_or_default()).style(theme.empty),
			])
		})
		.collect()
}

/// Build rows for the recent-search list.
#[must_use]
pub fn build_recent_rows<'a>(recent: &'a [String], theme: &Theme) -> Vec<Row<'a>> {
	recent
		.iter()
		.map(|query| {
			Row::new([
				Cell::from("RECENT").style(theme.empty),
				Cell::from(query.as_str()),
				Cell::from(""),
			])
		})
		.collect()
}

/// Render `rows` with the cursor row highlighted. A zero `detail_width`
/// collapses the right-hand column.
pub fn render_rows(
	frame: &mut Frame,
	area: Rect,
	rows: Vec<Row<'_>>,
	detail_width: u16,
	state: &mut TableState,
	theme: &Theme,
) {
	let widths = [
		Constraint::Length(BADGE_WIDTH),
		Constraint::Min(1),
		Constraint::Length(detail_width),
	];
	let table = Table::new(rows, widths)
		.column_spacing(1)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol("› ");
	frame.render_stateful_widget(table, area, state);
}
