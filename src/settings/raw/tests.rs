use std::time::Duration;

use classfind::{KeyBinding, SearchMode};
use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"classfind",
		"--base-url",
		"https://school.test/api",
		"--timeout-ms",
		"2500",
		"--max-results",
		"10",
		"--title",
		"Find",
		"--toggle-key",
		"ctrl+p",
		"--mode",
		"class",
		"--class-id",
		"45",
	]);

	let mut config = RawConfig::default();
	config.service.base_url = Some("http://config.test".into());
	config.search.max_results = Some(50);
	config.apply_cli_overrides(&cli);

	assert_eq!(
		config.service.base_url.as_deref(),
		Some("https://school.test/api")
	);
	assert_eq!(config.service.timeout_ms, Some(2500));
	assert_eq!(config.search.max_results, Some(10));
	assert_eq!(config.ui.title.as_deref(), Some("Find"));
	assert_eq!(config.ui.toggle_key.as_deref(), Some("ctrl+p"));
	assert_eq!(config.context.mode.as_deref(), Some("class"));
	assert_eq!(config.context.class_id, Some(45));
}

#[test]
fn resolve_fills_defaults() {
	let cli = CliArgs::parse_from(["classfind"]);
	let resolved = RawConfig::default().resolve(&cli).expect("resolve");

	assert_eq!(resolved.service.base_url, "http://localhost:8080/api");
	assert_eq!(resolved.tuning.debounce, Duration::from_millis(300));
	assert_eq!(resolved.tuning.min_query_length, 2);
	assert_eq!(resolved.tuning.max_results, 20);
	assert_eq!(resolved.tuning.recent_limit, 5);
	assert!(resolved.history);
	assert_eq!(resolved.location, "/");
	assert!(resolved.context_override.is_none());
	assert_eq!(resolved.ui.toggle, KeyBinding::platform_default());
	assert!(!resolved.ui.start_open);
}

#[test]
fn class_id_alone_implies_class_mode() {
	let cli = CliArgs::parse_from(["classfind", "--class-id", "12", "--class-name", "Chemistry"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli).expect("resolve");

	let request = resolved.context_override.expect("override");
	assert_eq!(request.mode, Some(SearchMode::Class));
	assert_eq!(request.class_id, Some(12));
	assert_eq!(request.class_name.as_deref(), Some("Chemistry"));
}

#[test]
fn initial_query_opens_the_dialog() {
	let cli = CliArgs::parse_from(["classfind", "--initial-query", "bio"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli).expect("resolve");

	assert_eq!(resolved.initial_query, "bio");
	assert!(resolved.ui.start_open);
}

#[test]
fn unknown_mode_is_rejected() {
	let cli = CliArgs::parse_from(["classfind"]);
	let mut config = RawConfig::default();
	config.context.mode = Some("grades".into());

	let err = config.resolve(&cli).unwrap_err();
	assert!(err.to_string().contains("context.mode"));
}

#[test]
fn malformed_toggle_key_is_rejected() {
	let cli = CliArgs::parse_from(["classfind", "--toggle-key", "k"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).unwrap_err();
	assert!(err.to_string().contains("ui.toggle_key"));
}

#[test]
fn unknown_theme_from_config_is_rejected() {
	let cli = CliArgs::parse_from(["classfind"]);
	let mut config = RawConfig::default();
	config.ui.theme = Some("neon".into());

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("ui.theme"));
	assert!(message.contains("configuration key `ui.theme`"));
}

#[test]
fn zero_max_results_reports_cli_origin() {
	let cli = CliArgs::parse_from(["classfind", "--max-results", "0"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("search.max_results"));
	assert!(message.contains("CLI flag `--max-results`"));
}
