use std::path::Path;
use std::path::PathBuf;

use chrono::DateTime;
use chrono::Utc;

use crate::AppRecord;
use crate::RecordDefaults;
use crate::parse_frontmatter;

/// File name suffix of app entries.
pub const MARKDOWN_SUFFIX: &str = ".md";

/// Collect app records from every candidate directory under `root`.
///
/// Directories are visited in the order given and each one is fully
/// processed before the next. A directory that cannot be listed contributes
/// nothing.
pub fn collect_apps(
	root: &Path,
	sources: &[PathBuf],
	defaults: &RecordDefaults,
	now: DateTime<Utc>,
) -> Vec<AppRecord> {
	let mut apps = Vec::new();

	for source in sources {
		collect_directory(&root.join(source), defaults, now, &mut apps);
	}

	apps
}

/// Append the records found directly inside `dir` to `apps`, returning how
/// many were added.
///
/// Entries are read in file name order. Files without frontmatter or without
/// a title are skipped, as are entries that cannot be read.
pub fn collect_directory(
	dir: &Path,
	defaults: &RecordDefaults,
	now: DateTime<Utc>,
	apps: &mut Vec<AppRecord>,
) -> usize {
	let files = match list_markdown_files(dir) {
		Ok(files) => files,
		Err(error) => {
			tracing::info!(
				dir = %dir.display(),
				%error,
				"source directory is missing or unreadable, skipping"
			);
			return 0;
		}
	};

	let before = apps.len();

	for path in files {
		let content = match read_entry(&path) {
			Ok(content) => content,
			Err(error) => {
				tracing::warn!(file = %path.display(), %error, "failed to read app entry, skipping");
				continue;
			}
		};

		let Some(frontmatter) = parse_frontmatter(&content) else {
			tracing::debug!(file = %path.display(), "no frontmatter, skipping");
			continue;
		};

		let Some(app) = AppRecord::from_frontmatter(&frontmatter, defaults, now) else {
			tracing::debug!(file = %path.display(), "frontmatter has no title, skipping");
			continue;
		};

		tracing::info!(title = %app.title, file = %path.display(), "added app");
		apps.push(app);
	}

	apps.len() - before
}

/// List the `*.md` entries directly inside `dir`, sorted by file name.
fn list_markdown_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in std::fs::read_dir(dir)? {
		let entry = entry?;
		let name = entry.file_name();

		if name.to_string_lossy().ends_with(MARKDOWN_SUFFIX) {
			files.push((name, entry.path()));
		}
	}

	files.sort_by(|a, b| a.0.cmp(&b.0));

	Ok(files.into_iter().map(|(_, path)| path).collect())
}

/// Read an entry as text. Invalid UTF-8 is replaced rather than rejected and
/// a leading byte order mark is dropped.
fn read_entry(path: &Path) -> std::io::Result<String> {
	let bytes = std::fs::read(path)?;
	let content = String::from_utf8_lossy(&bytes);
	let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

	Ok(content.to_string())
}
