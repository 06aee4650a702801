//! Core state container for the terminal shell.
//!
//! [`App`] ties the search engine, its background worker, the keyboard
//! coordinator and the selection router to the widgets that render them.

use classfind_search_api::SearchResult;
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use super::components::QueryInput;
use super::config::UiConfig;
use super::style::Theme;
use crate::engine::SearchEngine;
use crate::keyboard::KeyboardCoordinator;
use crate::navigation::{MemberProfile, SelectionRouter};
use crate::systems::search::{ChannelDispatch, SearchWorker};

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	pub(crate) engine: SearchEngine<ChannelDispatch>,
	pub(crate) worker: SearchWorker,
	pub(crate) keyboard: KeyboardCoordinator,
	pub(crate) router: SelectionRouter,
	/// Text input widget for the query.
	pub search_input: QueryInput<'a>,
	pub(crate) ui: UiConfig,
	pub(crate) theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) table_state: TableState,
	/// Cursor into the recent-search list shown below the minimum length.
	pub(crate) recent_cursor: usize,
	pub(crate) profile: Option<MemberProfile>,
	pub(crate) worker_lost: bool,
}

impl App<'_> {
	#[must_use]
	pub fn is_open(&self) -> bool {
		self.keyboard.is_open()
	}

	#[must_use]
	pub fn engine(&self) -> &SearchEngine<ChannelDispatch> {
		&self.engine
	}

	#[must_use]
	pub fn profile(&self) -> Option<&MemberProfile> {
		self.profile.as_ref()
	}

	/// Whether the recent-search list replaces the result list.
	pub(crate) fn showing_recent(&self) -> bool {
		let state = self.engine.state();
		!self.engine.tuning().accepts(&state.query) && !state.recent_searches.is_empty()
	}

	pub(crate) fn highlighted_recent(&self) -> Option<&str> {
		self.engine
			.state()
			.recent_searches
			.get(self.recent_cursor)
			.map(String::as_str)
	}

	pub(crate) fn clamp_recent_cursor(&mut self) {
		let len = self.engine.state().recent_searches.len();
		self.recent_cursor = self.recent_cursor.min(len.saturating_sub(1));
	}

	pub(crate) fn current_selection(&self) -> Option<SearchResult> {
		self.engine.select_current().cloned()
	}
}
