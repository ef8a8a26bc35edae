use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

#[allow(dead_code)]
pub fn run(repo: &Path, args: &[&str]) {
  let status = Command::new("git").args(args).current_dir(repo).status().unwrap();
  assert!(status.success(), "git {:?} failed", args);
}

#[allow(dead_code)]
pub fn commit_all(repo: &Path, msg: &str) {
  run(repo, &["add", "."]);
  run(repo, &["commit", "-q", "-m", msg]);
}

/// Bare-bones repo on the given initial branch, with one committed eligible
/// file so HEAD exists.
#[allow(dead_code)]
pub fn init_repo(branch: &str) -> tempfile::TempDir {
  let dir = tempfile::TempDir::new().unwrap();

  run(dir.path(), &["init", "-q", "-b", branch]);
  run(dir.path(), &["config", "user.name", "Fixture Bot"]);
  run(dir.path(), &["config", "user.email", "fixture@example.com"]);
  run(dir.path(), &["config", "commit.gpgsign", "false"]);

  std::fs::write(dir.path().join("base.py"), "x = 1\n").unwrap();
  std::fs::write(dir.path().join("README.md"), "fixture\n").unwrap();
  commit_all(dir.path(), "chore: base");

  dir
}

/// Repo on `main` with a `feature` branch (checked out) that changes one
/// eligible file, one generated file, and one non-source file.
#[allow(dead_code)]
pub fn init_feature_repo() -> tempfile::TempDir {
  let dir = init_repo("main");

  run(dir.path(), &["checkout", "-q", "-b", "feature"]);
  std::fs::write(dir.path().join("a.py"), "def f( ):\n    return   1\n").unwrap();
  std::fs::write(dir.path().join("b_pb2.py"), "# generated\n").unwrap();
  std::fs::write(dir.path().join("notes.md"), "wip\n").unwrap();
  commit_all(dir.path(), "feat: add a");

  dir
}

/// Drop an executable stub formatter into `dir` and return its path. The
/// default body records its arguments next to itself, for asserting what the
/// tool forwarded (or that it was never invoked at all).
#[allow(dead_code)]
pub fn write_stub_formatter(dir: &Path, body: &str) -> PathBuf {
  let path = dir.join("stub-formatter.sh");
  std::fs::write(&path, body).unwrap();
  std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
  path
}

#[allow(dead_code)]
pub const RECORDING_STUB: &str = "#!/bin/sh\nprintf '%s\\n' \"$@\" > \"$(dirname \"$0\")/formatter-args.txt\"\nexit 0\n";

#[allow(dead_code)]
pub fn recorded_args(dir: &Path) -> Option<String> {
  std::fs::read_to_string(dir.join("formatter-args.txt")).ok()
}
