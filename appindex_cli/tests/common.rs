use std::path::Path;

use assert_cmd::Command;

pub fn appindex_cmd() -> Command {
	let mut cmd =
		Command::cargo_bin("appindex").unwrap_or_else(|e| panic!("appindex binary: {e}"));
	cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
	cmd
}

/// Write `content` to `root/dir/name`, creating `dir` when needed.
#[allow(dead_code)]
pub fn write_entry(root: &Path, dir: &str, name: &str, content: &str) -> std::io::Result<()> {
	let dir = root.join(dir);
	std::fs::create_dir_all(&dir)?;
	std::fs::write(dir.join(name), content)
}

#[allow(dead_code)]
pub fn entry(title: &str, date: &str) -> String {
	format!("---\ntitle: \"{title}\"\ndate: {date}\n---\n")
}
