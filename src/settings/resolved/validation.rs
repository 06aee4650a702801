use classfind::ui::style;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let base_url = config.service.base_url.trim();
	if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
		return Err(ConfigError::invalid(
			"service.base_url",
			base_url,
			ConfigSources::source_for(&sources.base_url, "service.base_url"),
			"must start with http:// or https://",
		));
	}

	if config.service.timeout.is_zero() {
		return Err(ConfigError::invalid(
			"service.timeout_ms",
			"0",
			ConfigSources::source_for(&sources.timeout, "service.timeout_ms"),
			"must be greater than zero",
		));
	}

	let counts = [
		(
			"search.min_query_length",
			config.tuning.min_query_length,
			&sources.min_query_length,
		),
		(
			"search.max_results",
			config.tuning.max_results,
			&sources.max_results,
		),
		(
			"search.recent_limit",
			config.tuning.recent_limit,
			&sources.recent_limit,
		),
	];
	for (key, value, source) in counts {
		if value == 0 {
			return Err(ConfigError::invalid(
				key,
				value.to_string(),
				ConfigSources::source_for(source, key),
				"must be at least 1",
			));
		}
	}

	if let Some(theme) = config.theme.as_deref()
		&& style::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme,
			ConfigSources::source_for(&sources.theme, "ui.theme"),
			format!("unknown theme; expected one of {}", style::names().join(", ")),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::super::{SettingSource, sample};
	use super::*;

	#[test]
	fn defaults_pass_validation() {
		validate(&sample(), &ConfigSources::default()).expect("valid");
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let mut config = sample();
		config.service.timeout = Duration::ZERO;
		let sources = ConfigSources {
			timeout: Some(SettingSource::CliFlag("--timeout-ms")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "service.timeout_ms");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_zero_recent_limit() {
		let mut config = sample();
		config.tuning.recent_limit = 0;
		let sources = ConfigSources {
			recent_limit: Some(SettingSource::Environment("CLASSFIND__SEARCH__RECENT_LIMIT")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "search.recent_limit");
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn validation_rejects_unknown_theme() {
		let mut config = sample();
		config.theme = Some("neon".into());
		let sources = ConfigSources {
			theme: Some(SettingSource::CliFlag("--theme")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "ui.theme");
		let message = err.to_string();
		assert!(message.contains("CLI flag `--theme`"));
		assert!(message.contains("slate"));

		config.theme = Some("Light".into());
		validate(&config, &sources).expect("builtin theme names are accepted");
	}

	#[test]
	fn validation_rejects_non_http_base_url() {
		let mut config = sample();
		config.service.base_url = "ftp://school.test".into();

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "service.base_url");
		assert!(err.to_string().contains("configuration key `service.base_url`"));
	}
}
