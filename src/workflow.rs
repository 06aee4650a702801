use std::sync::Arc;

use anyhow::{Context, Result};
use classfind::{
	ContextOverride, FileStore, HttpSearchService, RecentQueryStore, SearchOutcome, SearchTuning,
	SearchUi, ServiceSettings, UiConfig, app_dirs, logging,
};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive search experience.
pub(crate) struct SearchWorkflow {
	search_ui: SearchUi,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		init_logging();
		let search_ui = SearchUiFactory::build(config)?;
		Ok(Self { search_ui })
	}

	pub(crate) fn run(self) -> Result<SearchOutcome> {
		self.search_ui.run()
	}
}

/// Logging problems never stop the search from running.
fn init_logging() {
	let result = app_dirs::default_log_file().and_then(|path| logging::initialize(&path));
	if let Err(err) = result {
		eprintln!("warning: logging disabled: {err:#}");
	}
}

/// Helper for translating resolved configuration into a configured `SearchUi`.
struct SearchUiFactory {
	search_ui: SearchUi,
}

impl SearchUiFactory {
	fn build(config: ResolvedConfig) -> Result<SearchUi> {
		let ResolvedConfig {
			service,
			tuning,
			history,
			location,
			context_override,
			ui,
			theme,
			initial_query,
		} = config;

		let builder = Self::new(&service)?
			.with_location(location)
			.with_context_override(context_override)
			.with_recent_store(history, tuning)
			.with_tuning(tuning)
			.with_ui_config(ui)
			.with_theme(theme)
			.with_initial_query(initial_query);

		Ok(builder.finish())
	}

	fn new(settings: &ServiceSettings) -> Result<Self> {
		let service = HttpSearchService::new(settings)
			.with_context(|| format!("failed to configure search service at {}", settings.base_url))?;
		Ok(Self {
			search_ui: SearchUi::new(Arc::new(service)),
		})
	}

	fn with_location(mut self, location: String) -> Self {
		self.search_ui = self.search_ui.with_location(location);
		self
	}

	fn with_context_override(mut self, context_override: Option<ContextOverride>) -> Self {
		if let Some(context_override) = context_override {
			self.search_ui = self.search_ui.with_context_override(context_override);
		}
		self
	}

	fn with_recent_store(mut self, history: bool, tuning: SearchTuning) -> Self {
		let store = match history.then(app_dirs::get_data_dir) {
			Some(Ok(dir)) => RecentQueryStore::open(Box::new(FileStore::new(dir)), tuning.recent_limit),
			Some(Err(err)) => {
				tracing::warn!(error = %err, "no data directory; recent searches stay in memory");
				RecentQueryStore::in_memory(tuning.recent_limit)
			}
			None => RecentQueryStore::in_memory(tuning.recent_limit),
		};
		self.search_ui = self.search_ui.with_recent_store(store);
		self
	}

	fn with_tuning(mut self, tuning: SearchTuning) -> Self {
		self.search_ui = self.search_ui.with_tuning(tuning);
		self
	}

	fn with_ui_config(mut self, config: UiConfig) -> Self {
		self.search_ui = self.search_ui.with_ui_config(config);
		self
	}

	fn with_theme(mut self, theme: Option<String>) -> Self {
		if let Some(theme) = theme {
			self.search_ui = self.search_ui.with_theme_name(&theme);
		}
		self
	}

	fn with_initial_query(mut self, query: String) -> Self {
		self.search_ui = self.search_ui.with_initial_query(query);
		self
	}

	fn finish(self) -> SearchUi {
		self.search_ui
	}
}
