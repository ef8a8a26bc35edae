// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Subprocess helper for git, path canonicalization, colorized stderr reporting, man page rendering
// role: utilities/helpers
// inputs: Repo paths; git argument lists; message strings; clap CommandFactory
// outputs: Captured git stdout, canonicalized paths, ANSI-colored stderr lines, troff text
// side_effects: run_git invokes subprocesses; notice/warn/error write to stderr
// invariants:
// - run_git never mutates the process working directory; the repo path is passed to the child
// - reporting helpers write only to stderr, never stdout
// errors: run_git surfaces command + stderr; rendering errors bubble with context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use clap::CommandFactory;

const CYAN: &str = "\x1b[36m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

pub fn canonicalize_lossy<P: AsRef<Path>>(p: P) -> String {
  let p = p.as_ref();
  let pb: PathBuf = match std::fs::canonicalize(p) {
    Ok(x) => x,
    Err(_) => match std::env::current_dir() {
      Ok(cwd) => cwd.join(p),
      Err(_) => PathBuf::from(p),
    },
  };
  pb.to_string_lossy().to_string()
}

pub fn run_git(repo: &str, args: &[String]) -> Result<String> {
  let out = Command::new("git")
    .args(args)
    .current_dir(repo)
    .output()
    .with_context(|| format!("spawning git {:?}", args))?;

  if out.status.success() {
    Ok(String::from_utf8_lossy(&out.stdout).to_string())
  } else {
    let stderr = String::from_utf8_lossy(&out.stderr);
    anyhow::bail!("git {:?} failed: {}", args, stderr)
  }
}

/// Informational notice (cyan) on stderr.
pub fn notice(msg: &str) {
  eprintln!("{}{}{}", CYAN, msg, RESET);
}

/// Advisory warning (yellow) on stderr.
pub fn warn(msg: &str) {
  eprintln!("{}{}{}", YELLOW, msg, RESET);
}

/// Terminal error (red) on stderr.
pub fn error(msg: &str) {
  eprintln!("{}error: {}{}", RED, msg, RESET);
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
