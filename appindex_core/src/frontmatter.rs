use std::collections::BTreeMap;

use derive_more::Deref;

/// The marker line that opens and closes a frontmatter block.
pub const FRONTMATTER_MARKER: &str = "---";

/// A single decoded frontmatter value.
///
/// Only scalars are supported. A value becomes [`FrontmatterValue::Bool`]
/// when it is exactly `true` or `false` after quote stripping, so `"true"`
/// written with quotes stays text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontmatterValue {
	Text(String),
	Bool(bool),
}

impl FrontmatterValue {
	fn decode(raw: &str) -> Self {
		let value = strip_outer_quotes(raw.trim());

		match value {
			"true" => Self::Bool(true),
			"false" => Self::Bool(false),
			_ => Self::Text(value.to_string()),
		}
	}

	/// Returns the text content, or `None` for booleans.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text.as_str()),
			Self::Bool(_) => None,
		}
	}

	/// Returns the boolean content, or `None` for text.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Text(_) => None,
			Self::Bool(flag) => Some(*flag),
		}
	}
}

/// A flat key/value mapping decoded from a frontmatter block.
///
/// Keys are unique; when a key is repeated the last line wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct Frontmatter(BTreeMap<String, FrontmatterValue>);

impl Frontmatter {
	/// Decode the lines of a frontmatter header (without the `---` markers).
	///
	/// Lines without a `:` or starting with one are skipped. Only the first
	/// `:` separates the key from the value, so `url: https://x.test` keeps
	/// its scheme.
	pub fn from_header(header: &str) -> Self {
		let mut entries = BTreeMap::new();

		for line in header.lines() {
			let Some(colon) = line.find(':') else {
				continue;
			};

			if colon == 0 {
				continue;
			}

			let key = line[..colon].trim();
			let value = FrontmatterValue::decode(&line[colon + 1..]);
			entries.insert(key.to_string(), value);
		}

		Self(entries)
	}

	/// Text stored under `key`. Booleans are not converted.
	pub fn text(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(FrontmatterValue::as_text)
	}

	/// Boolean stored under `key`. Text values such as `"true"` are not
	/// converted.
	pub fn flag(&self, key: &str) -> Option<bool> {
		self.get(key).and_then(FrontmatterValue::as_bool)
	}
}

/// Parse the frontmatter at the very start of `content`.
///
/// Returns `None` when the text does not open with a `---` line followed by
/// a closing `---` line.
pub fn parse_frontmatter(content: &str) -> Option<Frontmatter> {
	let (header, _body) = split_frontmatter(content)?;
	Some(Frontmatter::from_header(header))
}

/// Split `content` into its frontmatter header and the remaining body.
///
/// Both marker lines must consist of `---` optionally followed by
/// horizontal whitespace, and each must end with a line break. The header
/// returned excludes the markers and the line break before the closing
/// marker.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
	let mut lines = content.split_inclusive('\n');
	let opening = lines.next()?;

	if !is_marker_line(opening) {
		return None;
	}

	let inner = &content[opening.len()..];
	let mut offset = 0;

	for line in inner.split_inclusive('\n') {
		if is_marker_line(line) {
			let header = &inner[..offset];
			let header = header
				.strip_suffix('\n')
				.map_or(header, |h| h.strip_suffix('\r').unwrap_or(h));
			let body = &inner[offset + line.len()..];

			return Some((header, body));
		}

		offset += line.len();
	}

	None
}

fn is_marker_line(line: &str) -> bool {
	let Some(without_newline) = line.strip_suffix('\n') else {
		return false;
	};

	without_newline.trim_end() == FRONTMATTER_MARKER
}

/// Remove one pair of matching outer quotes. A lone quote character counts as
/// both the opening and the closing quote and decodes to an empty string.
fn strip_outer_quotes(value: &str) -> &str {
	for quote in ['"', '\''] {
		if value.starts_with(quote) && value.ends_with(quote) {
			return value.get(1..value.len() - 1).unwrap_or_default();
		}
	}

	value
}
