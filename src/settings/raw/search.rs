use std::time::Duration;

use classfind::SearchTuning;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Search thresholds and history settings prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) debounce_ms: Option<u64>,
	pub(super) min_query_length: Option<usize>,
	pub(super) max_results: Option<usize>,
	pub(super) recent_limit: Option<usize>,
	pub(super) history: Option<bool>,
}

pub(super) struct SearchResolution {
	pub(super) tuning: SearchTuning,
	pub(super) history: bool,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(debounce) = cli.debounce_ms {
			self.debounce_ms = Some(debounce);
		}
		if let Some(length) = cli.min_query_length {
			self.min_query_length = Some(length);
		}
		if let Some(max) = cli.max_results {
			self.max_results = Some(max);
		}
		if let Some(limit) = cli.recent_limit {
			self.recent_limit = Some(limit);
		}
		if let Some(history) = cli.history {
			self.history = Some(history);
		}
	}

	pub(super) fn finalize(self) -> SearchResolution {
		let defaults = SearchTuning::default();
		let tuning = SearchTuning {
			debounce: self
				.debounce_ms
				.map_or(defaults.debounce, Duration::from_millis),
			min_query_length: self.min_query_length.unwrap_or(defaults.min_query_length),
			max_results: self.max_results.unwrap_or(defaults.max_results),
			recent_limit: self.recent_limit.unwrap_or(defaults.recent_limit),
		};

		SearchResolution {
			tuning,
			history: self.history.unwrap_or(true),
		}
	}
}
