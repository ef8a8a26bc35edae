// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Resolve the base revision (explicit or first existing default upstream) and its merge-base with HEAD
// role: processing/resolver
// inputs: Vcs backend; optional explicit revision name
// outputs: ResolvedRevision with the effective comparison commit
// side_effects: Informational notices on stderr about the comparison point
// invariants:
// - explicit revision that does not resolve is InvalidRevision, never a default-probe fallback
// - the comparison point is always the merge-base with HEAD; substitution is reported, not silent
// errors: InvalidRevision / NoDefaultRevision for user mistakes; git failures bubble with context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::Result;

use crate::errors::FmtDiffError;
use crate::gitio::Vcs;
use crate::util;

/// Upstream branch names probed, in priority order, when no revision is
/// given on the command line.
pub const DEFAULT_REVISIONS: [&str; 3] = ["upstream/main", "origin/main", "main"];

/// Base revision chosen for the run, with the effective comparison commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRevision {
  pub name: String,
  pub merge_base: String,
}

/// First candidate that resolves to a commit, as (name, sha). Pure over the
/// backend; None when nothing resolves.
pub fn resolve_first_existing(vcs: &dyn Vcs, candidates: &[&str]) -> Result<Option<(String, String)>> {
  for cand in candidates {
    if let Some(sha) = vcs.resolve_commit(cand)? {
      return Ok(Some((cand.to_string(), sha)));
    }
  }
  Ok(None)
}

/// Resolve the comparison point for changed-files mode.
///
/// With an explicit revision, that revision must resolve to a commit. Without
/// one, the first existing entry of [`DEFAULT_REVISIONS`] wins. Either way the
/// comparison point is the merge-base with HEAD; when that differs from the
/// revision itself the substitution is reported as a notice.
pub fn resolve(vcs: &dyn Vcs, explicit: Option<&str>) -> Result<ResolvedRevision> {
  let (name, sha) = match explicit {
    Some(rev) => match vcs.resolve_commit(rev)? {
      Some(sha) => (rev.to_string(), sha),
      None => return Err(FmtDiffError::InvalidRevision(rev.to_string()).into()),
    },
    None => match resolve_first_existing(vcs, &DEFAULT_REVISIONS)? {
      Some(found) => found,
      None => {
        return Err(FmtDiffError::NoDefaultRevision(DEFAULT_REVISIONS.join(", ")).into());
      }
    },
  };

  let merge_base = vcs.merge_base(&name, "HEAD")?;
  if merge_base == sha {
    util::notice(&format!("comparing against {}", name));
  } else {
    util::notice(&format!(
      "{} is not an ancestor of HEAD; comparing against merge-base {}",
      name, merge_base
    ));
  }

  Ok(ResolvedRevision { name, merge_base })
}
