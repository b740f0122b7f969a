mod common;

use appindex_core::AnyEmptyResult;

#[test]
fn list_prints_entries_in_index_order() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_entry(tmp.path(), "apps", "a.md", &common::entry("Older", "2022-01-01"))?;
	common::write_entry(tmp.path(), "apps", "b.md", &common::entry("Newer", "2024-01-01"))?;

	let output = common::appindex_cmd()
		.arg("list")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Applications (2)"))
		.get_output()
		.stdout
		.clone();

	let stdout = String::from_utf8(output)?;
	let newer = stdout.find("Newer").ok_or("Newer missing")?;
	let older = stdout.find("Older").ok_or("Older missing")?;
	assert!(newer < older, "{stdout}");
	assert!(!tmp.path().join("apps.json").exists());

	Ok(())
}

#[test]
fn list_json_matches_index_format() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_entry(
		tmp.path(),
		"apps",
		"a.md",
		"---\ntitle: A\ndate: 2024-01-01\ncategory: Tools\n---\n",
	)?;

	let output = common::appindex_cmd()
		.arg("list")
		.arg("--format")
		.arg("json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();

	let apps: Vec<serde_json::Value> = serde_json::from_slice(&output)?;
	assert_eq!(apps.len(), 1);
	assert_eq!(apps[0]["category"], "Tools");
	assert_eq!(apps[0]["featured"], false);

	Ok(())
}

#[test]
fn list_reports_empty_project() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::appindex_cmd()
		.arg("list")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("No applications found."));

	Ok(())
}
