use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::AppIndexError;
use crate::AppIndexResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"appindex.toml",
	".appindex.toml",
	".config/appindex.toml",
];

/// Directories scanned for app entries when no config overrides them.
pub const DEFAULT_SOURCES: [&str; 2] = ["apps", "sadrzaj/aplikacije"];

/// Output file written when no config overrides it.
pub const DEFAULT_OUTPUT: &str = "apps.json";

/// Icon used for entries that do not set one.
pub const DEFAULT_ICON: &str = "🌐";

/// Category used for entries that do not set one.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Status used for entries that do not set one.
pub const DEFAULT_STATUS: &str = "Active";

/// Configuration loaded from an `appindex.toml` file.
///
/// ```toml
/// sources = ["apps", "sadrzaj/aplikacije"]
/// output = "apps.json"
///
/// [defaults]
/// icon = "🌐"
/// category = "Other"
/// status = "Active"
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppIndexConfig {
	/// Candidate directories scanned for `*.md` entries, in order. Relative
	/// paths are resolved against the project root.
	#[serde(default = "default_sources")]
	pub sources: Vec<PathBuf>,
	/// Where the JSON index is written. Relative to the project root.
	#[serde(default = "default_output")]
	pub output: PathBuf,
	/// Fallback values for fields an entry leaves out.
	#[serde(default)]
	pub defaults: RecordDefaults,
}

impl Default for AppIndexConfig {
	fn default() -> Self {
		Self {
			sources: default_sources(),
			output: default_output(),
			defaults: RecordDefaults::default(),
		}
	}
}

/// Fallback values applied while normalizing an entry.
///
/// ```toml
/// [defaults]
/// category = "Ostalo"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RecordDefaults {
	#[serde(default = "default_icon")]
	pub icon: String,
	#[serde(default = "default_category")]
	pub category: String,
	#[serde(default = "default_status")]
	pub status: String,
}

impl Default for RecordDefaults {
	fn default() -> Self {
		Self {
			icon: default_icon(),
			category: default_category(),
			status: default_status(),
		}
	}
}

fn default_sources() -> Vec<PathBuf> {
	DEFAULT_SOURCES.iter().map(PathBuf::from).collect()
}

fn default_output() -> PathBuf {
	PathBuf::from(DEFAULT_OUTPUT)
}

fn default_icon() -> String {
	DEFAULT_ICON.to_string()
}

fn default_category() -> String {
	DEFAULT_CATEGORY.to_string()
}

fn default_status() -> String {
	DEFAULT_STATUS.to_string()
}

impl AppIndexConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> AppIndexResult<Option<AppIndexConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::from_toml(&content)?;

		Ok(Some(config))
	}

	/// Load the config at `root`, falling back to the built-in defaults when
	/// no config file exists.
	pub fn load_or_default(root: &Path) -> AppIndexResult<AppIndexConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}

	/// Parse a config document.
	pub fn from_toml(content: &str) -> AppIndexResult<AppIndexConfig> {
		toml::from_str(content).map_err(|e| AppIndexError::ConfigParse(e.to_string()))
	}
}
