//! Command implementations

mod avoids;
mod check;
mod config;
mod init;

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::Context;

use namescreen::adapters::toml::{TomlAvoidSource, TomlSessionStore};
use namescreen::config::ScreenConfig;
use namescreen::core::ports::SessionStore;
use namescreen::core::services::AvoidRepository;

pub use avoids::avoids_cmd;
pub use check::check;
pub use config::show_config;
pub use init::init;

/// Load curated avoids and merge in the saved user avoids
fn load_repository(config: &ScreenConfig) -> anyhow::Result<AvoidRepository> {
    let source = TomlAvoidSource::new(config.sources.master_avoids_path());
    let mut repo = AvoidRepository::load(&source)?;

    let user = session_store(config).load()?;
    if !user.is_blank() {
        let added = repo.add_user_avoids(&config.matching.classifier(), &user)?;
        log::debug!("merged {added} user-defined avoids");
    }
    Ok(repo)
}

fn session_store(config: &ScreenConfig) -> TomlSessionStore {
    TomlSessionStore::new(config.sources.session_file_path())
}

/// Read a text file, or stdin for "-"
fn read_text(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).context("reading stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
