use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Build a sorted apps.json index from markdown app entries.",
	long_about = "appindex reads the `*.md` entries in your content directories, decodes their \
	              frontmatter and writes a single JSON index of apps, featured entries first and \
	              newest first.\n\nIt is meant to run whenever the CMS saves content.\n\nQuick \
	              start:\n  appindex init    Create appindex.toml and an example entry\n  appindex \
	              build   Regenerate apps.json\n  appindex list    Preview the index without \
	              writing\n  appindex invoke  Run the handler with an event read from stdin"
)]
pub struct AppIndexCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output and debug logging.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Create a sample `appindex.toml` and an example entry.
	///
	/// Writes `appindex.toml` with every option commented out and an
	/// `apps/example.md` entry. Files that already exist are left untouched.
	Init,
	/// Regenerate the apps index.
	///
	/// Reads every `*.md` entry in the configured source directories, sorts
	/// them with featured entries first and newest first, and writes the JSON
	/// index. Exits with a non-zero status code when the index could not be
	/// written.
	Build {
		/// Collect and sort entries without writing the index.
		#[arg(long, default_value_t = false)]
		dry_run: bool,

		/// Output format. `text` prints a summary, `json` prints the handler
		/// response (`statusCode` and `body`).
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// List the entries in index order without writing anything.
	List {
		/// Output format. `json` prints the array that `build` would write.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Run the handler once with an event read from stdin.
	///
	/// The event is any JSON document and is not inspected; empty input is
	/// treated as `null`. Prints the handler response as JSON. Failures are
	/// reported in the response, so the exit status is zero whenever a
	/// response was produced.
	Invoke,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
