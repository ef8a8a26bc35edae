use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod changeset;
mod cli;
mod errors;
mod formatter;
mod gitio;
mod revision;
mod util;

use crate::cli::{Cli, normalize};
use crate::formatter::FormatterDiagnosis;
use crate::gitio::GitCli;

fn main() -> ExitCode {
  let cli = Cli::parse();

  if cli.gen_man {
    return match util::render_man_page::<Cli>() {
      Ok(page) => {
        print!("{}", page);
        ExitCode::SUCCESS
      }
      Err(err) => {
        util::error(&format!("{:#}", err));
        ExitCode::FAILURE
      }
    };
  }

  match run(cli) {
    Ok(code) => code,
    Err(err) => {
      util::error(&format!("{:#}", err));
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> Result<ExitCode> {
  // Phase 1: normalize CLI
  let cfg = normalize(cli)?;
  let git = GitCli::open(&cfg.repo)?;

  // Phase 2: resolve the base and collect candidates
  let files = if cfg.all_files {
    changeset::collect_all(&git)?
  } else {
    let resolved = revision::resolve(&git, cfg.revision.as_deref())?;
    changeset::collect_changed(&git, &resolved.merge_base)?
  };

  if files.is_empty() {
    util::notice("no files to format");
    return Ok(ExitCode::SUCCESS);
  }

  // Phase 3: one formatter pass over the whole set; its exit code is ours
  let outcome = formatter::run_formatter(&cfg.formatter, git.root(), &files, cfg.apply)?;
  print!("{}", outcome.output);

  if formatter::diagnose(outcome.exit_code, &outcome.output) == FormatterDiagnosis::DoublePassBug {
    util::warn(formatter::DOUBLE_PASS_ADVISORY);
  }

  Ok(ExitCode::from(u8::try_from(outcome.exit_code).unwrap_or(1)))
}
