use anyhow::Result;

use crate::gitio::Vcs;

/// Extension of files the formatter handles.
pub const SOURCE_EXTENSION: &str = ".py";

/// Suffix marking machine-generated protobuf modules; never formatted.
pub const GENERATED_SUFFIX: &str = "_pb2.py";

fn eligible(path: &str) -> bool {
  path.ends_with(SOURCE_EXTENSION) && !path.ends_with(GENERATED_SUFFIX)
}

fn filter_eligible(paths: Vec<String>) -> Vec<String> {
  paths.into_iter().filter(|p| eligible(p)).collect()
}

/// Every tracked source file under the repository root, minus generated ones.
pub fn collect_all(vcs: &dyn Vcs) -> Result<Vec<String>> {
  Ok(filter_eligible(vcs.tracked_files()?))
}

/// Source files that differ between `base` and the working tree, minus
/// generated ones. An empty result is valid and means nothing to do.
pub fn collect_changed(vcs: &dyn Vcs, base: &str) -> Result<Vec<String>> {
  Ok(filter_eligible(vcs.changed_files(base)?))
}
