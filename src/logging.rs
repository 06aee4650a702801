//! Tracing setup for the terminal application.
//!
//! The UI owns stdout and stderr while it runs, so events are written to a log
//! file instead. The filter comes from `CLASSFIND_LOG` using the usual
//! `EnvFilter` syntax and defaults to `info`.

use std::fs::{self, File};
use std::path::Path;
use std::sync::{Mutex, Once};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

const FILTER_ENV: &str = "CLASSFIND_LOG";

static INIT: Once = Once::new();

/// Initialize tracing to append to `log_file`. Safe to call multiple times;
/// only the first call installs a subscriber.
pub fn initialize(log_file: &Path) -> Result<()> {
	let mut outcome = Ok(());
	INIT.call_once(|| {
		outcome = install(log_file);
	});
	outcome
}

fn install(log_file: &Path) -> Result<()> {
	if let Some(parent) = log_file.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = File::options()
		.create(true)
		.append(true)
		.open(log_file)
		.with_context(|| format!("failed to open log file {}", log_file.display()))?;

	let filter = EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_ansi(false)
		.with_target(true)
		.with_span_events(FmtSpan::NONE)
		.with_writer(Mutex::new(file))
		.compact()
		.try_init()
		.map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}
