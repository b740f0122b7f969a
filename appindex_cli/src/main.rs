use std::io::Read;
use std::path::PathBuf;
use std::process;

use appindex_cli::AppIndexCli;
use appindex_cli::Commands;
use appindex_cli::OutputFormat;
use appindex_core::AppIndexConfig;
use appindex_core::AppRecord;
use appindex_core::BuildContext;
use appindex_core::CONFIG_FILE_CANDIDATES;
use appindex_core::ResponseBody;
use appindex_core::handle_at;
use appindex_core::handler;
use appindex_core::preview_index;
use appindex_core::render_index;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

const SAMPLE_CONFIG: &str = "# appindex configuration\n# Every option is optional; the values \
                             below are the defaults.\n\n# Directories scanned for *.md entries, in \
                             order.\n# sources = [\"apps\", \"sadrzaj/aplikacije\"]\n\n# Where the \
                             generated index is written.\n# output = \"apps.json\"\n\n# Fallbacks \
                             for fields an entry leaves out.\n# [defaults]\n# icon = \"🌐\"\n# \
                             category = \"Other\"\n# status = \"Active\"\n";

const SAMPLE_ENTRY: &str = "---\ntitle: \"Example App\"\ndescription: \"Replace this entry with \
                            your own app.\"\nurl: \"https://example.com\"\nicon: 🚀\ncategory: \
                            Tools\nstatus: Active\nfeatured: false\n---\n\nEverything below the \
                            frontmatter is ignored by the index.\n";

fn main() {
	let args = AppIndexCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_logging(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match args.command {
		Some(Commands::Init) => run_init(&args),
		Some(Commands::Build { dry_run, format }) => run_build(&args, dry_run, format),
		Some(Commands::List { format }) => run_list(&args, format),
		Some(Commands::Invoke) => run_invoke(&args),
		None => {
			eprintln!("No subcommand specified. Run `appindex --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<appindex_core::AppIndexError>() {
			Ok(err) => {
				let report: miette::Report = (*err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Send library logs to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool, use_color: bool) {
	let filter = if std::env::var_os("RUST_LOG").is_some() {
		EnvFilter::from_default_env()
	} else if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::new("warn")
	};

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.try_init();
}

fn resolve_root(args: &AppIndexCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn run_init(args: &AppIndexCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);

	if let Some(existing) = AppIndexConfig::resolve_path(&root) {
		println!("Config file already exists: {}", existing.display());
	} else {
		let config_path = root.join(CONFIG_FILE_CANDIDATES[0]);
		std::fs::write(&config_path, SAMPLE_CONFIG)?;
		println!("Created {}", config_path.display());
	}

	let apps_dir = root.join("apps");
	let entry_path = apps_dir.join("example.md");

	if apps_dir.exists() {
		println!("Entry directory already exists: {}", apps_dir.display());
	} else {
		std::fs::create_dir_all(&apps_dir)?;
		std::fs::write(&entry_path, SAMPLE_ENTRY)?;
		println!("Created example entry: {}", entry_path.display());
		println!();
		println!("Next steps:");
		println!("  1. Edit {} or add more *.md entries", entry_path.display());
		println!("  2. Run `appindex list` to preview the index");
		println!("  3. Run `appindex build` to write apps.json");
	}

	Ok(())
}

fn run_build(
	args: &AppIndexCli,
	dry_run: bool,
	format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let ctx = BuildContext::load(&root)?;

	if dry_run {
		let apps = preview_index(&ctx);
		match format {
			OutputFormat::Json => println!("{}", render_index(&apps)?),
			OutputFormat::Text => {
				println!(
					"{} would write {} application(s) to {}",
					colored!("dry run:", yellow),
					apps.len(),
					ctx.output_path().display()
				);
				print_apps(&apps);
			}
		}
		return Ok(());
	}

	let response = handler(&serde_json::Value::Null, &ctx);

	match format {
		OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
		OutputFormat::Text => {
			match response.body()? {
				ResponseBody::Success { message, apps, .. } => {
					println!("{} {message}", colored!("done:", green));
					if args.verbose {
						print_apps(&apps);
					}
				}
				ResponseBody::Failure { error, .. } => {
					eprintln!("{} {error}", colored!("error:", red));
				}
			}
		}
	}

	if !response.is_success() {
		process::exit(2);
	}

	Ok(())
}

fn run_list(args: &AppIndexCli, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let ctx = BuildContext::load(&root)?;
	let apps = preview_index(&ctx);

	match format {
		OutputFormat::Json => println!("{}", render_index(&apps)?),
		OutputFormat::Text => {
			if apps.is_empty() {
				println!("No applications found.");
			} else {
				println!("{}", colored!(format!("Applications ({})", apps.len()), bold));
				print_apps(&apps);
			}
		}
	}

	Ok(())
}

fn run_invoke(args: &AppIndexCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);

	let mut input = String::new();
	std::io::stdin().read_to_string(&mut input)?;
	let event = if input.trim().is_empty() {
		serde_json::Value::Null
	} else {
		serde_json::from_str(&input)?
	};

	let response = handle_at(&event, &root);
	println!("{}", serde_json::to_string(&response)?);

	Ok(())
}

/// One line per entry: featured marker, title, date and category.
fn print_apps(apps: &[AppRecord]) {
	for app in apps {
		let marker = if app.featured { "*" } else { " " };
		println!(
			"  {marker} {:<28} {:<26} {}",
			app.title, app.date, app.category
		);
	}
}
