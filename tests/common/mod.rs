use assert_cmd::{Command, cargo::cargo_bin_cmd};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[allow(dead_code)]
pub const HEADER: &str = "/*\nAuthor: Ben Mezger (github.com/benmezger)\n*/\n";

pub fn authorstamp_cmd(cwd: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("authorstamp");
    cmd.arg("-C").arg(cwd);
    cmd
}

/// A project root with `src/a.rs` (unstamped) and `src/sub/b.txt`.
pub fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("src/sub")).unwrap();
    fs::write(temp.path().join("src/a.rs"), "fn main() {}").unwrap();
    fs::write(temp.path().join("src/sub/b.txt"), "notes").unwrap();
    temp
}

// Each integration test file is compiled as its own crate, and not all of
// them compare against the stamped form.
#[allow(dead_code)]
pub fn stamped(content: &str) -> String {
    format!("{HEADER}\n{content}")
}
