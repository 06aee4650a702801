use anyhow::{Result, bail};
use classfind::{ContextOverride, SearchMode};
use serde::Deserialize;

use crate::cli::CliArgs;

/// Location and mode override prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ContextSection {
	pub(super) location: Option<String>,
	pub(super) mode: Option<String>,
	pub(super) class_id: Option<i64>,
	pub(super) class_name: Option<String>,
}

pub(super) struct ContextResolution {
	pub(super) location: String,
	pub(super) context_override: Option<ContextOverride>,
}

impl ContextSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(location) = cli.location.clone() {
			self.location = Some(location);
		}
		if let Some(mode) = cli.mode {
			self.mode = Some(mode.as_str().to_string());
		}
		if let Some(class_id) = cli.class_id {
			self.class_id = Some(class_id);
		}
		if let Some(name) = cli.class_name.clone() {
			self.class_name = Some(name);
		}
	}

	pub(super) fn finalize(self) -> Result<ContextResolution> {
		let mode = match self.mode.as_deref().map(str::trim) {
			None | Some("") => None,
			Some(value) => Some(parse_mode(value)?),
		};
		// A class id on its own implies class mode.
		let mode = mode.or(self.class_id.map(|_| SearchMode::Class));

		let context_override = if mode.is_none() && self.class_name.is_none() {
			None
		} else {
			Some(ContextOverride {
				mode,
				class_id: self.class_id,
				class_name: self.class_name,
			})
		};

		Ok(ContextResolution {
			location: self.location.unwrap_or_else(|| "/".to_string()),
			context_override,
		})
	}
}

fn parse_mode(value: &str) -> Result<SearchMode> {
	match value.to_ascii_lowercase().as_str() {
		"dashboard" => Ok(SearchMode::Dashboard),
		"class" => Ok(SearchMode::Class),
		other => bail!("invalid value for context.mode: '{other}' (expected dashboard or class)"),
	}
}
