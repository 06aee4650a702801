use classfind::{ContextOverride, SearchTuning, ServiceSettings, UiConfig};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub service: ServiceSettings,
	pub tuning: SearchTuning,
	/// Persist recent searches between sessions.
	pub history: bool,
	pub location: String,
	pub context_override: Option<ContextOverride>,
	pub ui: UiConfig,
	pub theme: Option<String>,
	pub initial_query: String,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
pub(super) fn sample() -> ResolvedConfig {
	ResolvedConfig {
		service: ServiceSettings::default(),
		tuning: SearchTuning::default(),
		history: true,
		location: "/".into(),
		context_override: None,
		ui: UiConfig::default(),
		theme: None,
		initial_query: String::new(),
	}
}
