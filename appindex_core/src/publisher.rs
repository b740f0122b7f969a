use std::cmp::Ordering;
use std::ffi::OsString;
use std::path::Path;
use std::path::PathBuf;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::time::UNIX_EPOCH;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::Utc;

use crate::AppIndexError;
use crate::AppIndexResult;
use crate::AppRecord;
use crate::BuildContext;
use crate::collect_apps;

/// Date-time layouts without an offset. They are read as UTC.
const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
	"%Y-%m-%dT%H:%M:%S%.f",
	"%Y-%m-%dT%H:%M",
	"%Y-%m-%d %H:%M:%S%.f",
	"%Y-%m-%d %H:%M",
];

/// Distinguishes temporary files written by the same process.
static TEMP_FILE_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
	/// Where the index was written.
	pub output: PathBuf,
	/// Human readable summary, e.g. `Generated apps.json with 3 applications`.
	pub message: String,
	/// The records in the order they were written.
	pub apps: Vec<AppRecord>,
}

impl BuildSummary {
	pub fn count(&self) -> usize {
		self.apps.len()
	}
}

/// Interpret an entry's `date` as a point in time.
///
/// Accepts RFC 3339, `YYYY-MM-DD[THH:MM[:SS[.fff]]]` (also with a space
/// instead of `T`), `YYYY-MM`, `YYYY` and RFC 2822. Values without an offset
/// are taken as UTC. Returns `None` for anything else.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
	let value = value.trim();

	if let Ok(at) = DateTime::parse_from_rfc3339(value) {
		return Some(at.with_timezone(&Utc));
	}

	for format in NAIVE_DATE_TIME_FORMATS {
		if let Ok(at) = NaiveDateTime::parse_from_str(value, format) {
			return Some(at.and_utc());
		}
	}

	let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
		.ok()
		.or_else(|| parse_partial_date(value));

	if let Some(date) = date {
		return date.and_hms_opt(0, 0, 0).map(|at| at.and_utc());
	}

	DateTime::parse_from_rfc2822(value)
		.ok()
		.map(|at| at.with_timezone(&Utc))
}

/// `YYYY` or `YYYY-MM`, anchored to the first day.
fn parse_partial_date(value: &str) -> Option<NaiveDate> {
	let (year, month) = value.split_once('-').unwrap_or((value, "01"));
	let is_digits = |part: &str, len: usize| {
		part.len() == len && part.bytes().all(|byte| byte.is_ascii_digit())
	};

	if !is_digits(year, 4) || !is_digits(month, 2) {
		return None;
	}

	NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// Order two records for the index: featured first, then newest first.
///
/// A date that cannot be parsed sorts after every valid date. Two
/// unparseable dates compare equal.
pub fn compare_apps(a: &AppRecord, b: &AppRecord) -> Ordering {
	b.featured
		.cmp(&a.featured)
		.then_with(|| parse_timestamp(&b.date).cmp(&parse_timestamp(&a.date)))
}

/// Sort records in index order. Records that compare equal keep their
/// relative order.
pub fn sort_apps(apps: &mut [AppRecord]) {
	apps.sort_by(compare_apps);
}

/// Serialize records as a pretty-printed JSON array.
pub fn render_index(apps: &[AppRecord]) -> AppIndexResult<String> {
	Ok(serde_json::to_string_pretty(apps)?)
}

/// Write the index to `path`, replacing any previous file.
///
/// The content is written to a temporary sibling first and then renamed into
/// place, so readers see either the old or the new index. Every call uses its
/// own temporary file, so concurrent writers never share one and the last
/// rename wins.
pub fn write_index(path: &Path, apps: &[AppRecord]) -> AppIndexResult<()> {
	let payload = render_index(apps)?;
	let write_error = |reason: String| {
		AppIndexError::WriteOutput {
			path: path.display().to_string(),
			reason,
		}
	};

	let Some(file_name) = path.file_name() else {
		return Err(write_error("output path has no file name".to_string()));
	};

	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		std::fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;
	}

	let mut temp_name = OsString::from(".");
	temp_name.push(file_name);
	temp_name.push(format!(
		".tmp-{}-{}-{}",
		std::process::id(),
		std::time::SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.map_or(0, |duration| duration.as_nanos()),
		TEMP_FILE_SEQUENCE.fetch_add(1, AtomicOrdering::Relaxed)
	));
	let temp_path = path.with_file_name(temp_name);

	std::fs::write(&temp_path, payload).map_err(|e| write_error(e.to_string()))?;

	if let Err(error) = std::fs::rename(&temp_path, path) {
		let _ = std::fs::remove_file(&temp_path);
		return Err(write_error(error.to_string()));
	}

	Ok(())
}

/// Collect and sort the records for `ctx` without writing anything.
pub fn preview_index(ctx: &BuildContext) -> Vec<AppRecord> {
	let mut apps = collect_apps(
		&ctx.root,
		&ctx.config.sources,
		&ctx.config.defaults,
		ctx.now,
	);
	sort_apps(&mut apps);
	apps
}

/// Regenerate the index for `ctx`: collect, sort and write.
pub fn build_index(ctx: &BuildContext) -> AppIndexResult<BuildSummary> {
	tracing::info!(root = %ctx.root.display(), "building apps index");

	let apps = preview_index(ctx);
	let output = ctx.output_path();
	write_index(&output, &apps)?;

	let message = format!(
		"Generated {} with {} applications",
		ctx.config.output.display(),
		apps.len()
	);
	tracing::info!(count = apps.len(), output = %output.display(), "{message}");

	Ok(BuildSummary {
		output,
		message,
		apps,
	})
}
