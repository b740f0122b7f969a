use std::path::Path;

use chrono::DateTime;
use chrono::Utc;

use crate::AppRecord;
use crate::DEFAULT_CATEGORY;
use crate::DEFAULT_ICON;
use crate::DEFAULT_STATUS;

/// The processing time pinned in tests: `2025-03-01T12:00:00Z`.
pub fn fixed_now() -> DateTime<Utc> {
	DateTime::parse_from_rfc3339("2025-03-01T12:00:00Z")
		.map(|at| at.with_timezone(&Utc))
		.unwrap_or_else(|e| panic!("fixed time: {e}"))
}

/// Write `content` to `root/dir/name`, creating `dir` when needed.
pub fn write_entry(root: &Path, dir: &str, name: &str, content: &str) {
	let dir = root.join(dir);
	std::fs::create_dir_all(&dir).unwrap_or_else(|e| panic!("create {}: {e}", dir.display()));
	std::fs::write(dir.join(name), content).unwrap_or_else(|e| panic!("write {name}: {e}"));
}

/// Frontmatter document with a title and date.
pub fn entry(title: &str, date: &str) -> String {
	format!("---\ntitle: \"{title}\"\ndate: {date}\n---\n\nBody of {title}.\n")
}

/// A record with defaults everywhere except the fields that drive ordering.
pub fn app(title: &str, featured: bool, date: &str) -> AppRecord {
	AppRecord {
		title: title.to_string(),
		description: String::new(),
		url: String::new(),
		icon: DEFAULT_ICON.to_string(),
		category: DEFAULT_CATEGORY.to_string(),
		status: DEFAULT_STATUS.to_string(),
		featured,
		date: date.to_string(),
	}
}

pub fn titles(apps: &[AppRecord]) -> Vec<&str> {
	apps.iter().map(|app| app.title.as_str()).collect()
}
