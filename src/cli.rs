//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands;
use namescreen::config::ScreenConfig;
use namescreen::core::models::{AvoidSort, Category, NameCase};
use namescreen::output::OutputMode;

/// namescreen - Screen proposed names against avoid lists
#[derive(Parser, Debug)]
#[command(
    name = "namescreen",
    version,
    about = "Screen proposed product names against avoid lists",
    long_about = "Flag proposed product or brand names that collide with strings to avoid.\n\n\
                  Avoids come from a curated master list (INN/USAN stems, linguistic\n\
                  conflicts, market research) and from saved project and competitor avoids."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Use this config file instead of ~/.namescreen/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check names against the enabled avoid categories
    Check(CheckArgs),

    /// Manage project and competitor avoids (save, list, clear)
    Avoids {
        /// What to do with the avoids
        #[command(subcommand)]
        action: AvoidsAction,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show the effective configuration
    Config,

    /// Show version
    Version,
}

/// Arguments of `namescreen check`
#[derive(Args, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    /// Names to check
    pub names: Vec<String>,

    /// Read names from a file, one per line ("-" for stdin)
    #[arg(short = 'f', long, value_name = "PATH")]
    pub names_file: Option<PathBuf>,

    /// Comma-separated substrings; avoids contained in any of them are skipped
    #[arg(short, long, value_name = "LIST")]
    pub ignore: Option<String>,

    /// Check INN - USAN avoids
    #[arg(long)]
    pub inn_usan: bool,

    /// Check linguistic avoids
    #[arg(long)]
    pub linguistic: bool,

    /// Check market research avoids
    #[arg(long)]
    pub market_research: bool,

    /// Check project avoids
    #[arg(long)]
    pub project: bool,

    /// Check competitor avoids
    #[arg(long)]
    pub competitor: bool,

    /// Check every category
    #[arg(short, long)]
    pub all: bool,

    /// Display names as-entered, lower, upper or title case
    #[arg(long, default_value = "as-entered")]
    pub case: NameCase,
}

impl CheckArgs {
    /// Categories enabled by the flags
    #[must_use]
    pub fn enabled_categories(&self) -> Vec<Category> {
        let flags = [
            (Category::InnUsan, self.inn_usan),
            (Category::Linguistic, self.linguistic),
            (Category::MarketResearch, self.market_research),
            (Category::Project, self.project),
            (Category::Competitor, self.competitor),
        ];
        flags.into_iter().filter(|&(_, on)| on || self.all).map(|(c, _)| c).collect()
    }
}

/// `namescreen avoids` subcommands
#[derive(Subcommand, Debug)]
pub enum AvoidsAction {
    /// Save project and competitor avoids (a block without a file keeps its saved text)
    #[command(long_about = "Save project and competitor avoids, one avoid per line.\n\n\
                  Project avoids mark their rule with signifiers:\n  \
                  Dal-    prefix (hyphen AFTER the letter string)\n  \
                  -bri    suffix (hyphen BEFORE the letter string)\n  \
                  -rex-   infix (hyphen or tilde on both sides)\n  \
                  *rex*   anywhere (asterisks or double quotes on both sides)\n\n\
                  Entries without signifiers, such as competitor names, are\n\
                  screened for similar letter strings.\n\n\
                  A block whose file is not given keeps its saved text.")]
    Save {
        /// File of project avoids ("-" for stdin)
        #[arg(short, long, value_name = "PATH")]
        project_file: Option<PathBuf>,

        /// File of competitor names ("-" for stdin)
        #[arg(short, long, value_name = "PATH")]
        competitor_file: Option<PathBuf>,
    },

    /// List avoids (curated and saved)
    List {
        /// Only this category: inn-usan, linguistic, market-research, project or competitor
        #[arg(short, long)]
        category: Option<Category>,

        /// Only avoids whose value or description contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Sort by value, category or type (default: collection order)
        #[arg(long)]
        sort: Option<AvoidSort>,
    },

    /// Forget saved project and competitor avoids
    Clear,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = cli.config.unwrap_or_else(ScreenConfig::config_path);

    match cli.command {
        Some(Command::Check(args)) => {
            let config = ScreenConfig::load_from(&config_path)?;
            commands::check(&args, &config, output_mode)
        },
        Some(Command::Avoids { action }) => {
            let config = ScreenConfig::load_from(&config_path)?;
            commands::avoids_cmd(action, &config, output_mode)
        },
        Some(Command::Init { force }) => commands::init(&config_path, force, output_mode),
        Some(Command::Config) => {
            let config = ScreenConfig::load_from(&config_path)?;
            commands::show_config(&config, &config_path, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("namescreen v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("namescreen v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'namescreen --help' for usage");
                println!("Run 'namescreen init' to get started");
            }
            Ok(())
        },
    }
}
