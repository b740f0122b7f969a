mod common;

use appindex_core::AnyEmptyResult;

#[test]
fn init_creates_config_and_example_entry() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::appindex_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Created"))
		.stdout(predicates::str::contains("Next steps"));

	let config = std::fs::read_to_string(tmp.path().join("appindex.toml"))?;
	assert!(config.contains("# sources = [\"apps\", \"sadrzaj/aplikacije\"]"));
	assert!(tmp.path().join("apps/example.md").is_file());

	Ok(())
}

#[test]
fn init_keeps_existing_files() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join(".config"))?;
	std::fs::write(tmp.path().join(".config/appindex.toml"), "output = \"custom.json\"\n")?;
	std::fs::create_dir_all(tmp.path().join("apps"))?;

	common::appindex_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Config file already exists"))
		.stdout(predicates::str::contains("Entry directory already exists"));

	assert!(!tmp.path().join("appindex.toml").exists());
	assert!(!tmp.path().join("apps/example.md").exists());

	Ok(())
}

#[test]
fn init_output_builds_cleanly() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::appindex_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	common::appindex_cmd()
		.arg("build")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Generated apps.json with 1 applications"));

	let apps: serde_json::Value =
		serde_json::from_str(&std::fs::read_to_string(tmp.path().join("apps.json"))?)?;
	assert_eq!(apps[0]["title"], "Example App");
	assert_eq!(apps[0]["icon"], "🚀");

	Ok(())
}
