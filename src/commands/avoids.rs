//! Manage user avoids and browse the avoid list

use std::path::Path;

use namescreen::config::ScreenConfig;
use namescreen::core::ScreenError;
use namescreen::core::models::UserAvoids;
use namescreen::core::ports::SessionStore;
use namescreen::output::{AvoidListResult, OperationResult, OutputMode};

use super::{load_repository, read_text, session_store};
use crate::cli::AvoidsAction;

/// Handle avoids subcommands
pub fn avoids_cmd(
    action: AvoidsAction,
    config: &ScreenConfig,
    mode: OutputMode,
) -> anyhow::Result<()> {
    match action {
        AvoidsAction::Save {
            project_file,
            competitor_file,
        } => save(project_file.as_deref(), competitor_file.as_deref(), config, mode),
        AvoidsAction::List {
            category,
            search,
            sort,
        } => {
            let repo = load_repository(config)?;
            let mut avoids = repo.search(category, search.as_deref());
            if let Some(sort) = sort {
                sort.apply(&mut avoids);
            }
            let result = AvoidListResult {
                master_loaded: repo.has_master(),
                avoids: avoids.into_iter().cloned().collect(),
            };
            result.render(mode);
            Ok(())
        },
        AvoidsAction::Clear => {
            session_store(config).clear()?;
            OperationResult {
                success: true,
                message: "Cleared saved project and competitor avoids.".to_string(),
            }
            .render(mode);
            Ok(())
        },
    }
}

/// Replace the saved avoids; a block without a file keeps its saved text
///
/// Text is classified before anything is written, so a rejected save leaves
/// the session file as it was.
fn save(
    project_file: Option<&Path>,
    competitor_file: Option<&Path>,
    config: &ScreenConfig,
    mode: OutputMode,
) -> anyhow::Result<()> {
    if project_file.is_none() && competitor_file.is_none() {
        return Err(ScreenError::user_input(
            "Nothing to save. Pass --project-file and/or --competitor-file.",
        )
        .into());
    }

    let store = session_store(config);
    let saved = store.load()?;
    let project = match project_file {
        Some(path) => read_text(path)?,
        None => saved.project,
    };
    let competitor = match competitor_file {
        Some(path) => read_text(path)?,
        None => saved.competitor,
    };
    let user = UserAvoids::new(project, competitor);

    let parsed = config.matching.classifier().parse_user_avoids(&user)?;
    store.save(&user)?;

    OperationResult {
        success: true,
        message: format!("Saved {} user-defined avoid(s).", parsed.len()),
    }
    .render(mode);
    Ok(())
}
