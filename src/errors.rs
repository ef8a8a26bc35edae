use thiserror::Error;

/// Validation failures that terminate the run before the formatter is ever
/// invoked. All of these exit with code 1.
#[derive(Debug, Error)]
pub enum FmtDiffError {
  #[error("'{0}' does not resolve to a commit in this repository")]
  InvalidRevision(String),

  #[error("expected at most one revision argument, got {0}")]
  TooManyArguments(usize),

  #[error("no revision given and none of the default upstreams exist ({0}); pass a revision or --all")]
  NoDefaultRevision(String),
}
