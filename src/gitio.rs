use anyhow::{Context, Result};

use crate::util::run_git;

/// Version-control queries the tool depends on. Kept behind a trait so the
/// resolver and collector can run against a mock backend in unit tests.
pub trait Vcs {
  /// Full SHA of the commit `rev` points at, or None if `rev` is not a
  /// commit-ish in this repository.
  fn resolve_commit(&self, rev: &str) -> Result<Option<String>>;

  /// Merge-base (most recent common ancestor) of `a` and `b`.
  fn merge_base(&self, a: &str, b: &str) -> Result<String>;

  /// Paths that differ between `base` and the working tree, excluding
  /// deletions. Repo-relative.
  fn changed_files(&self, base: &str) -> Result<Vec<String>>;

  /// Every tracked path under the repository root. Repo-relative.
  fn tracked_files(&self) -> Result<Vec<String>>;
}

/// Backend that shells out to the `git` binary. Holds the repository root and
/// passes it to every invocation; the process working directory is never
/// changed.
pub struct GitCli {
  root: String,
}

impl GitCli {
  /// Discover the repository root from `path` (which may be any directory
  /// inside the repository).
  pub fn open(path: &str) -> Result<GitCli> {
    let out = run_git(path, &["rev-parse".into(), "--show-toplevel".into()])
      .with_context(|| format!("{} is not inside a git repository", path))?;
    Ok(GitCli { root: out.trim().to_string() })
  }

  pub fn root(&self) -> &str {
    &self.root
  }
}

impl Vcs for GitCli {
  fn resolve_commit(&self, rev: &str) -> Result<Option<String>> {
    // rev-parse --verify fails for unknown revs; that is an answer, not an
    // error, so inspect the status directly instead of going through run_git.
    let spec = format!("{}^{{commit}}", rev);
    let out = std::process::Command::new("git")
      .args(["rev-parse", "--verify", "--quiet", spec.as_str()])
      .current_dir(&self.root)
      .output()
      .with_context(|| format!("spawning git rev-parse for {}", rev))?;
    if out.status.success() {
      Ok(Some(String::from_utf8_lossy(&out.stdout).trim().to_string()))
    } else {
      Ok(None)
    }
  }

  fn merge_base(&self, a: &str, b: &str) -> Result<String> {
    let out = run_git(&self.root, &["merge-base".into(), a.into(), b.into()])?;
    Ok(out.trim().to_string())
  }

  fn changed_files(&self, base: &str) -> Result<Vec<String>> {
    let args: Vec<String> = vec![
      "diff".into(),
      "--name-only".into(),
      "--diff-filter=d".into(),
      base.into(),
    ];
    let out = run_git(&self.root, &args)?;
    Ok(split_lines(&out))
  }

  fn tracked_files(&self) -> Result<Vec<String>> {
    let out = run_git(&self.root, &["ls-files".into()])?;
    Ok(split_lines(&out))
  }
}

fn split_lines(out: &str) -> Vec<String> {
  out
    .lines()
    .map(|l| l.trim())
    .filter(|s| !s.is_empty())
    .map(|s| s.to_string())
    .collect()
}
