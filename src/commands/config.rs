//! Show the effective configuration

use std::path::Path;

use namescreen::config::ScreenConfig;
use namescreen::output::OutputMode;

/// Print the configuration with resolved source paths
pub fn show_config(config: &ScreenConfig, path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let master = config.sources.master_avoids_path();
    let session = config.sources.session_file_path();

    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "config_file": path,
                "matching": config.matching,
                "master_avoids": master,
                "session_file": session,
            })
        );
        return Ok(());
    }

    println!("# config file: {}", path.display());
    println!("# master avoids: {}", master.display());
    println!("# session file: {}\n", session.display());
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
