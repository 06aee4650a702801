use std::time::Instant;

use classfind_search_api::SearchResult;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::SearchOutcome;
use crate::keyboard::KeyIntent;
use crate::navigation::{MemberProfile, Navigation, Routed};

fn is_interrupt(key: &KeyEvent) -> bool {
	key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

impl App<'_> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
		self.handle_key_at(key, Instant::now())
	}

	/// Handle a key press observed at `now`. Returns the outcome once the
	/// session ends.
	pub(crate) fn handle_key_at(&mut self, key: KeyEvent, now: Instant) -> Option<SearchOutcome> {
		if is_interrupt(&key) {
			return Some(self.cancel());
		}

		if self.profile.is_some() {
			if key.code == KeyCode::Esc {
				self.profile = None;
			}
			return None;
		}

		if let Some(intent) = self.keyboard.handle(&key) {
			return self.apply_intent(intent, now);
		}

		if !self.is_open() {
			return match key.code {
				KeyCode::Esc | KeyCode::Char('q') => Some(self.cancel()),
				_ => None,
			};
		}

		match key.code {
			KeyCode::Tab => self.cycle_filter(true),
			KeyCode::BackTab => self.cycle_filter(false),
			KeyCode::Char('d')
				if key.modifiers.contains(KeyModifiers::CONTROL) && self.showing_recent() =>
			{
				self.remove_highlighted_recent();
			}
			_ => {
				if self.search_input.input(key) {
					self.engine.set_query(self.search_input.text(), now);
				}
			}
		}
		None
	}

	fn apply_intent(&mut self, intent: KeyIntent, now: Instant) -> Option<SearchOutcome> {
		match intent {
			KeyIntent::Open | KeyIntent::Close => {
				tracing::debug!(?intent, query = %self.search_input.text(), "search surface toggled");
			}
			KeyIntent::SelectNext => {
				if self.showing_recent() {
					self.recent_cursor = self.recent_cursor.saturating_add(1);
					self.clamp_recent_cursor();
				} else {
					self.engine.select_next();
				}
			}
			KeyIntent::SelectPrev => {
				if self.showing_recent() {
					self.recent_cursor = self.recent_cursor.saturating_sub(1);
				} else {
					self.engine.select_prev();
				}
			}
			KeyIntent::Confirm => return self.confirm(now),
		}
		None
	}

	fn confirm(&mut self, now: Instant) -> Option<SearchOutcome> {
		if self.showing_recent() {
			if let Some(query) = self.highlighted_recent().map(str::to_string) {
				self.search_input.set_text(query.as_str());
				self.engine.set_query(query, now);
				self.engine.flush();
			}
			return None;
		}

		let selection = self.current_selection()?;
		let committed = self.engine.state().debounced_query.clone();
		self.engine.add_recent_search(&committed);

		match self.router.route(&selection) {
			Routed::Delegated => Some(self.finish(selection, None)),
			Routed::Resolved(Navigation::None) => {
				if let SearchResult::Member(member) = &selection {
					self.profile = Some(MemberProfile::from(member));
					return None;
				}
				Some(self.finish(selection, Some(Navigation::None)))
			}
			Routed::Resolved(navigation) => Some(self.finish(selection, Some(navigation))),
		}
	}

	fn finish(&mut self, selection: SearchResult, navigation: Option<Navigation>) -> SearchOutcome {
		self.keyboard.set_open(false);
		tracing::info!(
			kind = %selection.kind(),
			id = selection.id(),
			?navigation,
			"search result confirmed"
		);
		SearchOutcome::confirmed(self.search_input.text(), selection, navigation)
	}

	fn cancel(&mut self) -> SearchOutcome {
		self.keyboard.set_open(false);
		SearchOutcome::cancelled(self.search_input.text())
	}

	fn cycle_filter(&mut self, forward: bool) {
		let filters = self.engine.filters();
		let active = self.engine.state().active_filter;
		let current = filters
			.iter()
			.position(|filter| *filter == active)
			.unwrap_or(0);
		let next = if forward {
			(current + 1) % filters.len()
		} else {
			(current + filters.len() - 1) % filters.len()
		};
		self.engine.set_filter(filters[next]);
	}

	fn remove_highlighted_recent(&mut self) {
		if let Some(query) = self.highlighted_recent().map(str::to_string) {
			self.engine.remove_recent_search(&query);
			self.clamp_recent_cursor();
		}
	}
}
