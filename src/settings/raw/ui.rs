use anyhow::{Context, Result};
use classfind::{KeyBinding, UiConfig};
use serde::Deserialize;

use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) toggle_key: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) start_open: Option<bool>,
	pub(super) theme: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) ui: UiConfig,
	pub(super) initial_query: String,
	pub(super) theme: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(shortcut) = cli.toggle_key.clone() {
			self.toggle_key = Some(shortcut);
		}
		if cli.open {
			self.start_open = Some(true);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	pub(super) fn finalize(self) -> Result<UiResolution> {
		let mut ui = UiConfig::default();
		if let Some(title) = self.title {
			ui.title = title;
		}
		if let Some(placeholder) = self.placeholder {
			ui.placeholder = placeholder;
		}
		if let Some(shortcut) = self.toggle_key {
			ui.toggle = KeyBinding::parse(&shortcut)
				.with_context(|| format!("invalid value for ui.toggle_key: '{shortcut}'"))?;
		}
		if let Some(start_open) = self.start_open {
			ui.start_open = start_open;
		}

		// A non-empty initial query only makes sense with the dialog open.
		let initial_query = self.initial_query.unwrap_or_default();
		if !initial_query.trim().is_empty() {
			ui.start_open = true;
		}

		Ok(UiResolution {
			ui,
			initial_query,
			theme: self.theme,
		})
	}
}
