use std::path::Path;
use std::path::PathBuf;

use chrono::DateTime;
use chrono::Utc;

use crate::AppIndexConfig;
use crate::AppIndexResult;

/// Everything a single build needs: where to look, how to behave, and the
/// time to stamp on entries without a date.
#[derive(Debug, Clone)]
pub struct BuildContext {
	/// Directory that `sources` and `output` are resolved against.
	pub root: PathBuf,
	pub config: AppIndexConfig,
	/// Processing time used as the default `date`.
	pub now: DateTime<Utc>,
}

impl BuildContext {
	pub fn new(root: impl Into<PathBuf>, config: AppIndexConfig) -> Self {
		Self {
			root: root.into(),
			config,
			now: Utc::now(),
		}
	}

	/// Build a context for `root`, reading `appindex.toml` when present.
	pub fn load(root: &Path) -> AppIndexResult<Self> {
		let config = AppIndexConfig::load_or_default(root)?;
		Ok(Self::new(root, config))
	}

	/// Pin the processing time.
	#[must_use]
	pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
		self.now = now;
		self
	}

	/// Absolute location of the generated index.
	pub fn output_path(&self) -> PathBuf {
		self.root.join(&self.config.output)
	}
}
