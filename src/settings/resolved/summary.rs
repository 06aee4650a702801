use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Service: {}", config.service.base_url),
		format!(
			"  Token: {}",
			if config.service.token.is_some() { "(set)" } else { "(none)" }
		),
		format!("  Timeout: {} ms", config.service.timeout.as_millis()),
		format!("  Debounce: {} ms", config.tuning.debounce.as_millis()),
		format!("  Minimum query length: {}", config.tuning.min_query_length),
		format!("  Max results: {}", config.tuning.max_results),
		format!("  Recent searches: {}", config.tuning.recent_limit),
		format!("  Persist history: {}", bool_to_word(config.history)),
		format!("  Location: {}", config.location),
	];

	if let Some(request) = &config.context_override {
		let mode = request
			.mode
			.map_or("(from location)", |mode| mode.as_str());
		lines.push(format!("  Mode override: {mode}"));
		if let Some(class_id) = request.class_id {
			lines.push(format!("  Class id: {class_id}"));
		}
		if let Some(name) = &request.class_name {
			lines.push(format!("  Class name: {name}"));
		}
	}

	lines.push(format!(
		"  UI theme: {}",
		config
			.theme
			.as_deref()
			.unwrap_or("(use the library default)")
	));
	lines.push(format!("  Title: {}", config.ui.title));
	lines.push(format!("  Toggle: {}", config.ui.toggle));
	lines.push(format!("  Start open: {}", bool_to_word(config.ui.start_open)));
	if !config.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}

	lines
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
