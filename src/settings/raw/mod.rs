use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod context;
mod search;
mod service;
mod ui;

use context::ContextSection;
use search::SearchSection;
use service::ServiceSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	service: ServiceSection,
	search: SearchSection,
	ui: UiSection,
	context: ContextSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.service.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.context.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			base_url: detect_source(
				cli.base_url.is_some(),
				self.service.base_url.is_some(),
				"CLASSFIND__SERVICE__BASE_URL",
				"--base-url",
				"service.base_url",
			),
			timeout: detect_source(
				cli.timeout_ms.is_some(),
				self.service.timeout_ms.is_some(),
				"CLASSFIND__SERVICE__TIMEOUT_MS",
				"--timeout-ms",
				"service.timeout_ms",
			),
			min_query_length: detect_source(
				cli.min_query_length.is_some(),
				self.search.min_query_length.is_some(),
				"CLASSFIND__SEARCH__MIN_QUERY_LENGTH",
				"--min-length",
				"search.min_query_length",
			),
			max_results: detect_source(
				cli.max_results.is_some(),
				self.search.max_results.is_some(),
				"CLASSFIND__SEARCH__MAX_RESULTS",
				"--max-results",
				"search.max_results",
			),
			recent_limit: detect_source(
				cli.recent_limit.is_some(),
				self.search.recent_limit.is_some(),
				"CLASSFIND__SEARCH__RECENT_LIMIT",
				"--recent-limit",
				"search.recent_limit",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"CLASSFIND__UI__THEME",
				"--theme",
				"ui.theme",
			),
		};

		let service = self.service.finalize();
		let search = self.search.finalize();
		let ui = self.ui.finalize()?;
		let context = self.context.finalize()?;

		let config = ResolvedConfig {
			service,
			tuning: search.tuning,
			history: search.history,
			location: context.location,
			context_override: context.context_override,
			ui: ui.ui,
			theme: ui.theme,
			initial_query: ui.initial_query,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
