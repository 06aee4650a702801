use std::time::Duration;

use classfind::ServiceSettings;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Connection settings for the search service prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ServiceSection {
	pub(super) base_url: Option<String>,
	pub(super) token: Option<String>,
	pub(super) timeout_ms: Option<u64>,
}

impl ServiceSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.base_url.clone() {
			self.base_url = Some(url);
		}
		if let Some(token) = cli.token.clone() {
			self.token = Some(token);
		}
		if let Some(timeout) = cli.timeout_ms {
			self.timeout_ms = Some(timeout);
		}
	}

	pub(super) fn finalize(self) -> ServiceSettings {
		let defaults = ServiceSettings::default();
		ServiceSettings {
			base_url: self.base_url.unwrap_or(defaults.base_url),
			token: self.token.filter(|token| !token.trim().is_empty()),
			timeout: self
				.timeout_ms
				.map_or(defaults.timeout, Duration::from_millis),
		}
	}
}
