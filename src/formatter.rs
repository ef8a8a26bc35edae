// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Invoke the external formatter over the collected file set and classify its outcome
// role: processing/invoker
// inputs: Formatter program name, repo root, file list, apply flag
// outputs: FormatOutcome (exit code + combined output); FormatterDiagnosis for the known double-pass bug
// side_effects: Spawns the formatter subprocess (which rewrites files in apply mode)
// invariants:
// - exactly one formatter invocation per run; the exit code is passed through unmodified
// - diagnose is pure and driven by the DOUBLE_PASS_* constants, never inline matching
// errors: Spawn failures bubble with context; formatter exit codes are outcomes, not errors
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::process::Command;

use anyhow::{Context, Result};

/// Exit code black uses for internal errors, including the double-pass bug.
const DOUBLE_PASS_EXIT: i32 = 123;

/// Diagnostic black prints when it produces different code on its second
/// formatting pass.
const DOUBLE_PASS_MARKER: &str = "INTERNAL ERROR: Black produced different code on the second pass";

pub const DOUBLE_PASS_ADVISORY: &str = "\
the formatter hit its known second-pass inconsistency; adding a trailing comma \
to the expression it choked on usually works around it. If this keeps \
happening, report it at https://github.com/psf/black/issues";

/// Result of the single formatter invocation, forwarded verbatim.
#[derive(Debug)]
pub struct FormatOutcome {
  pub exit_code: i32,
  pub output: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum FormatterDiagnosis {
  Normal,
  DoublePassBug,
}

/// Classify a formatter result against the known transient-bug signature.
pub fn diagnose(exit_code: i32, output: &str) -> FormatterDiagnosis {
  if exit_code == DOUBLE_PASS_EXIT && output.contains(DOUBLE_PASS_MARKER) {
    FormatterDiagnosis::DoublePassBug
  } else {
    FormatterDiagnosis::Normal
  }
}

/// Run the formatter once over `files`, from the repository root. Check mode
/// asks for a diff without rewriting; apply mode lets the formatter write.
pub fn run_formatter(program: &str, root: &str, files: &[String], apply: bool) -> Result<FormatOutcome> {
  let mut cmd = Command::new(program);
  cmd.arg("--color");
  if !apply {
    cmd.args(["--check", "--diff"]);
  }
  cmd.args(files);
  cmd.current_dir(root);

  let out = cmd.output().with_context(|| format!("spawning formatter '{}'", program))?;

  let mut output = String::from_utf8_lossy(&out.stdout).to_string();
  output.push_str(&String::from_utf8_lossy(&out.stderr));

  // A killed-by-signal formatter has no code; treat it as a plain failure.
  Ok(FormatOutcome { exit_code: out.status.code().unwrap_or(1), output })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn double_pass_needs_code_and_marker() {
    let marked = format!("error: cannot format x.py: {}", DOUBLE_PASS_MARKER);
    assert_eq!(diagnose(123, &marked), FormatterDiagnosis::DoublePassBug);
    assert_eq!(diagnose(1, &marked), FormatterDiagnosis::Normal);
    assert_eq!(diagnose(123, "some other internal error"), FormatterDiagnosis::Normal);
  }

  #[test]
  fn clean_run_is_normal() {
    assert_eq!(diagnose(0, "All done!"), FormatterDiagnosis::Normal);
  }
}
