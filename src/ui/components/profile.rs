use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::layout::centered_rect;
use crate::navigation::MemberProfile;
use crate::ui::style::Theme;

const PROFILE_WIDTH: u16 = 44;
const PROFILE_HEIGHT: u16 = 8;

fn profile_lines<'a>(profile: &'a MemberProfile, theme: &Theme) -> Vec<Line<'a>> {
	let field = |label: &'static str, value: Option<&'a str>| {
		Line::from(vec![
			Span::styled(format!("{label:<7}"), theme.empty),
			Span::raw(value.unwrap_or("-")),
		])
	};
	vec![
		Line::from(Span::styled(profile.name.as_str(), theme.highlight)),
		Line::default(),
		field("Email", profile.email.as_deref()),
		field("Role", profile.role.as_deref()),
	]
}

/// Draw the member profile overlay centred in `area`.
pub fn render_profile(frame: &mut Frame, area: Rect, profile: &MemberProfile, theme: &Theme) {
	let popup = centered_rect(area, PROFILE_WIDTH, PROFILE_HEIGHT);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.prompt)
		.title(" Member ")
		.title_bottom(Line::from(Span::styled(" Esc to close ", theme.empty)));
	let body = Paragraph::new(profile_lines(profile, theme))
		.block(block)
		.wrap(Wrap { trim: true });
	frame.render_widget(Clear, popup);
	frame.render_widget(body, popup);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_fields_render_as_dash() {
		let profile = MemberProfile {
			id: 3,
			name: "Ada Lovelace".into(),
			email: None,
			avatar_url: None,
			role: Some("teacher".into()),
		};
		let lines = profile_lines(&profile, &Theme::default());
		assert_eq!(lines[0].spans[0].content, "Ada Lovelace");
		assert_eq!(lines[2].spans[1].content, "-");
		assert_eq!(lines[3].spans[1].content, "teacher");
	}
}
