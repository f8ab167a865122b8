//! Check names against avoids

use namescreen::config::ScreenConfig;
use namescreen::core::models::{IgnoreList, parse_names};
use namescreen::output::{CheckReport, OutputMode};

use super::{load_repository, read_text};
use crate::cli::CheckArgs;

/// Screen the given names and print the conflict report
pub fn check(args: &CheckArgs, config: &ScreenConfig, mode: OutputMode) -> anyhow::Result<()> {
    let mut text = args.names.join("\n");
    if let Some(path) = &args.names_file {
        text.push('\n');
        text.push_str(&read_text(path)?);
    }
    let names = parse_names(&text);
    let ignore = IgnoreList::parse(args.ignore.as_deref().unwrap_or_default());

    let repo = load_repository(config)?;
    let table = config.matching.checker().check_names(
        &names,
        &ignore,
        repo.avoids(),
        &args.enabled_categories(),
    )?;

    CheckReport::new(table.with_name_case(args.case), names.len()).render(mode);
    Ok(())
}
