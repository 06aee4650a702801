use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use classfind_search_api::SearchService;
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use super::components::QueryInput;
use super::config::UiConfig;
use super::style::{self, Theme};
use super::{App, SearchOutcome};
use crate::context::{self, ContextOverride};
use crate::engine::{SearchEngine, SearchTuning};
use crate::keyboard::KeyboardCoordinator;
use crate::navigation::{SelectHandler, SelectionRouter};
use crate::recent::RecentQueryStore;
use crate::systems::search::SearchWorker;

/// Builder for an interactive search session.
///
/// The search context is resolved from the location (and an optional
/// override) when the session is built.
pub struct SearchUi {
	service: Arc<dyn SearchService>,
	location: String,
	context_override: Option<ContextOverride>,
	tuning: SearchTuning,
	recent: Option<RecentQueryStore>,
	ui_config: UiConfig,
	theme: Theme,
	initial_query: String,
	on_select: Option<SelectHandler>,
}

impl SearchUi {
	pub fn new(service: Arc<dyn SearchService>) -> Self {
		Self {
			service,
			location: "/".to_string(),
			context_override: None,
			tuning: SearchTuning::default(),
			recent: None,
			ui_config: UiConfig::default(),
			theme: Theme::default(),
			initial_query: String::new(),
			on_select: None,
		}
	}

	#[must_use]
	pub fn with_location(mut self, location: impl Into<String>) -> Self {
		self.location = location.into();
		self
	}

	#[must_use]
	pub fn with_context_override(mut self, context_override: ContextOverride) -> Self {
		self.context_override = Some(context_override);
		self
	}

	#[must_use]
	pub fn with_tuning(mut self, tuning: SearchTuning) -> Self {
		self.tuning = tuning;
		self
	}

	#[must_use]
	pub fn with_recent_store(mut self, recent: RecentQueryStore) -> Self {
		self.recent = Some(recent);
		self
	}

	#[must_use]
	pub fn with_ui_config(mut self, config: UiConfig) -> Self {
		self.ui_config = config;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	/// Apply a builtin theme by name. Unknown names keep the current theme.
	#[must_use]
	pub fn with_theme_name(mut self, name: &str) -> Self {
		match style::by_name(name) {
			Some(theme) => self.theme = theme,
			None => tracing::warn!(name, "unknown theme; keeping default"),
		}
		self
	}

	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	/// Replace default navigation for confirmed results.
	#[must_use]
	pub fn with_select_handler(mut self, handler: SelectHandler) -> Self {
		self.on_select = Some(handler);
		self
	}

	/// Build the [`App`] and spawn its search worker.
	pub fn build(self) -> App<'static> {
		let Self {
			service,
			location,
			context_override,
			tuning,
			recent,
			ui_config,
			theme,
			initial_query,
			on_select,
		} = self;

		let context = context::resolve(&location, context_override.as_ref());
		tracing::info!(%location, mode = context.mode().as_str(), "starting search session");

		let worker = SearchWorker::spawn(service);
		let recent = recent.unwrap_or_else(|| RecentQueryStore::in_memory(tuning.recent_limit));
		let mut engine = SearchEngine::new(context, tuning, recent, worker.dispatcher());

		let mut keyboard = KeyboardCoordinator::new(ui_config.toggle);
		keyboard.set_open(ui_config.start_open);

		let mut router = SelectionRouter::new(location);
		if let Some(handler) = on_select {
			router = router.with_handler(handler);
		}

		let search_input = QueryInput::new(
			initial_query.as_str(),
			ui_config.placeholder.as_str(),
			theme.empty,
		);
		if !initial_query.trim().is_empty() {
			engine.set_query(initial_query, Instant::now());
			engine.flush();
		}

		App {
			engine,
			worker,
			keyboard,
			router,
			search_input,
			ui: ui_config,
			theme,
			throbber_state: ThrobberState::default(),
			table_state: TableState::default(),
			recent_cursor: 0,
			profile: None,
			worker_lost: false,
		}
	}

	/// Build the session and run it in the terminal until it ends.
	pub fn run(self) -> Result<SearchOutcome> {
		self.build().run()
	}
}
