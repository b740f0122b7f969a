use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::Frontmatter;
use crate::FrontmatterValue;
use crate::RecordDefaults;

/// One normalized entry of the apps index.
///
/// Every field is always present. Field order here is the order of keys in
/// the generated JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRecord {
	/// Display name. Never empty.
	pub title: String,
	pub description: String,
	pub url: String,
	pub icon: String,
	pub category: String,
	pub status: String,
	/// Featured entries are listed before all others.
	pub featured: bool,
	/// Publication date as written in the source file, or the processing
	/// time when the file has none.
	pub date: String,
}

impl AppRecord {
	/// Normalize decoded frontmatter into a record.
	///
	/// Returns `None` when there is no usable `title`. Text fields fall back
	/// to `defaults` when missing, empty or `false`. `featured` is only set by
	/// a bare `true`.
	pub fn from_frontmatter(
		frontmatter: &Frontmatter,
		defaults: &RecordDefaults,
		now: DateTime<Utc>,
	) -> Option<Self> {
		let title = field_text(frontmatter, "title")?;
		let text_or = |key: &str, fallback: &str| {
			field_text(frontmatter, key).unwrap_or_else(|| fallback.to_string())
		};

		Some(Self {
			title,
			description: text_or("description", ""),
			url: text_or("url", ""),
			icon: text_or("icon", defaults.icon.as_str()),
			category: text_or("category", defaults.category.as_str()),
			status: text_or("status", defaults.status.as_str()),
			featured: frontmatter.flag("featured") == Some(true),
			date: field_text(frontmatter, "date").unwrap_or_else(|| format_timestamp(now)),
		})
	}
}

/// Format a point in time the way default dates are written:
/// `2024-05-01T09:30:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
	at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn field_text(frontmatter: &Frontmatter, key: &str) -> Option<String> {
	match frontmatter.get(key)? {
		FrontmatterValue::Text(text) if !text.is_empty() => Some(text.clone()),
		FrontmatterValue::Bool(true) => Some("true".to_string()),
		FrontmatterValue::Text(_) | FrontmatterValue::Bool(false) => None,
	}
}
