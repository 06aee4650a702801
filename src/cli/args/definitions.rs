use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{ModeArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `classfind` binary.
#[derive(Parser, Debug)]
#[command(
	name = "classfind",
	version,
	long_version = long_version(),
	about = "Keyboard-driven search over classes, posts, documents, assignments and members",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "CLASSFIND_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'L',
		long,
		value_name = "PATH",
		help = "Current page path the search is opened from (default: /)"
	)]
	pub(crate) location: Option<String>,
	#[arg(
		short = 'm',
		long,
		value_enum,
		help = "Force the search mode instead of deriving it from the location"
	)]
	pub(crate) mode: Option<ModeArg>,
	#[arg(
		long = "class-id",
		value_name = "ID",
		help = "Class to search in class mode (default: taken from the location)"
	)]
	pub(crate) class_id: Option<i64>,
	#[arg(
		long = "class-name",
		value_name = "NAME",
		help = "Display name of the class (default: none)"
	)]
	pub(crate) class_name: Option<String>,
	#[arg(
		short = 'b',
		long = "base-url",
		value_name = "URL",
		help = "Base URL of the search service (default: http://localhost:8080/api)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		long,
		value_name = "TOKEN",
		env = "CLASSFIND_TOKEN",
		hide_env_values = true,
		help = "Bearer token sent to the search service (default: none)"
	)]
	pub(crate) token: Option<String>,
	#[arg(
		long = "timeout-ms",
		value_name = "MS",
		help = "Request timeout in milliseconds (default: 10000)"
	)]
	pub(crate) timeout_ms: Option<u64>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Quiet period after typing before a query is sent (default: 300)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "min-length",
		value_name = "NUM",
		help = "Minimum query length in characters (default: 2)"
	)]
	pub(crate) min_query_length: Option<usize>,
	#[arg(
		long = "max-results",
		value_name = "NUM",
		help = "Maximum number of results shown (default: 20)"
	)]
	pub(crate) max_results: Option<usize>,
	#[arg(
		long = "recent-limit",
		value_name = "NUM",
		help = "Number of recent searches remembered (default: 5)"
	)]
	pub(crate) recent_limit: Option<usize>,
	#[arg(
		long = "history",
		value_parser = BoolishValueParser::new(),
		help = "Persist recent searches in the data directory (default: enabled)"
	)]
	pub(crate) history: Option<bool>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the dialog title (default: Search)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		short = 'k',
		long = "toggle-key",
		value_name = "SHORTCUT",
		help = "Shortcut that opens and closes search, e.g. ctrl+k (default: mod+k)"
	)]
	pub(crate) toggle_key: Option<String>,
	#[arg(
		long,
		help = "Open the search dialog immediately (default: disabled)"
	)]
	pub(crate) open: bool,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
