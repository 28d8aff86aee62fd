use std::path::Path;

use assert_cmd::Command;
use mdpp_core::AnyEmptyResult;

pub fn mdpp_cmd() -> Command {
	let mut cmd = Command::cargo_bin("mdpp").expect("the mdpp binary is built for tests");
	cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
	cmd
}

pub fn write(root: &Path, relative: &str, content: &str) -> AnyEmptyResult {
	let path = root.join(relative);
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(path, content)?;

	Ok(())
}
