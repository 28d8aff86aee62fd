mod common;

use common::write;
use mdpp_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;

#[test]
fn check_passes_when_up_to_date() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write(tmp.path(), "index.md", "# Doc\n!INCLUDE \"part.md\", 1\n")?;
	write(tmp.path(), "part.md", "# Part\n")?;
	write(tmp.path(), "out.md", "# Doc\n## Part\n")?;

	common::mdpp_cmd()
		.arg("check")
		.arg(tmp.path().join("index.md"))
		.arg(tmp.path().join("out.md"))
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("up to date"));

	Ok(())
}

#[test]
fn check_fails_when_stale() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write(tmp.path(), "index.md", "# Doc\n!INCLUDE \"part.md\"\n")?;
	write(tmp.path(), "part.md", "new line\n")?;
	write(tmp.path(), "out.md", "# Doc\nold line\n")?;

	common::mdpp_cmd()
		.arg("check")
		.arg(tmp.path().join("index.md"))
		.arg(tmp.path().join("out.md"))
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(predicates::str::contains("out of date"))
		.stderr(predicates::str::contains("+new line").not());

	Ok(())
}

#[test]
fn check_diff_shows_changes() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write(tmp.path(), "index.md", "# Doc\n!INCLUDE \"part.md\"\n")?;
	write(tmp.path(), "part.md", "new line\n")?;
	write(tmp.path(), "out.md", "# Doc\nold line\n")?;

	common::mdpp_cmd()
		.arg("check")
		.arg("--diff")
		.arg(tmp.path().join("index.md"))
		.arg(tmp.path().join("out.md"))
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(predicates::str::contains("-old line"))
		.stderr(predicates::str::contains("+new line"));

	Ok(())
}
