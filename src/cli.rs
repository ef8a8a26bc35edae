use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::errors::FmtDiffError;
use crate::util;

#[derive(Parser, Debug)]
#[command(
    name = "fmt-diff",
    version,
    about = "Check or apply Python formatting to files changed since a base revision",
    long_about = None
)]
pub struct Cli {
  /// Base revision to diff against (default: first existing upstream branch)
  #[arg(value_name = "REVISION")]
  pub revisions: Vec<String>,

  /// Rewrite files in place instead of reporting a diff
  #[arg(long)]
  pub apply: bool,

  /// Format every eligible file in the repository, not only changed ones
  #[arg(long)]
  pub all: bool,

  /// Path to a Git repository (default: current dir)
  #[arg(long, default_value = ".")]
  pub repo: PathBuf,

  /// Formatter binary to invoke (hidden; tests only)
  #[arg(long, hide = true, default_value = "black")]
  pub formatter: String,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,
}

/// Immutable per-run configuration, built once from the raw arguments.
#[derive(Debug)]
pub struct InvocationConfig {
  pub revision: Option<String>,
  pub apply: bool,
  pub all_files: bool,
  pub repo: String, // absolute path for stability
  pub formatter: String,
}

pub fn normalize(cli: Cli) -> Result<InvocationConfig> {
  if cli.revisions.len() > 1 {
    return Err(FmtDiffError::TooManyArguments(cli.revisions.len()).into());
  }

  let repo = util::canonicalize_lossy(&cli.repo);

  Ok(InvocationConfig {
    revision: cli.revisions.into_iter().next(),
    apply: cli.apply,
    all_files: cli.all,
    repo,
    formatter: cli.formatter,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn base_cli() -> Cli {
    Cli {
      revisions: vec![],
      apply: false,
      all: false,
      repo: PathBuf::from("."),
      formatter: "black".into(),
      gen_man: false,
    }
  }

  #[test]
  fn normalize_defaults_to_check_mode() {
    let cfg = normalize(base_cli()).unwrap();
    assert!(!cfg.apply);
    assert!(!cfg.all_files);
    assert!(cfg.revision.is_none());
  }

  #[test]
  fn normalize_keeps_single_revision() {
    let mut cli = base_cli();
    cli.revisions = vec!["origin/main".into()];
    let cfg = normalize(cli).unwrap();
    assert_eq!(cfg.revision.as_deref(), Some("origin/main"));
  }

  #[test]
  fn normalize_rejects_two_revisions() {
    let mut cli = base_cli();
    cli.revisions = vec!["a".into(), "b".into()];
    let err = normalize(cli).unwrap_err();
    assert!(err.to_string().contains("at most one revision"));
  }
}
