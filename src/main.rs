use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use changelog_lookup::config::AppConfig;
use changelog_lookup::version::semver::versions_newest_first;
use changelog_lookup::{
    FileSource, TextSource, get_changelog, get_changelog_for_version, install_source, logging,
};

#[derive(Parser)]
#[command(name = "changelog-lookup")]
#[command(version, about = "Look up release notes by version")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Changelog file to read instead of the bundled one
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List versions, newest first
    List,
    /// Show the release notes for a version
    Show {
        version: String,
        /// Print the entry as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the whole table as JSON
    Dump,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let _guard = logging::init_or_warn(&config.log);

    match cli.file.or(config.changelog_path) {
        Some(path) => {
            info!("Using changelog file {:?}", path);
            install_source(FileSource::open(&path)?)?;
        }
        None => install_source(TextSource::bundled())?,
    }

    match cli.command {
        Command::List => {
            for version in versions_newest_first(get_changelog()) {
                println!("{version}");
            }
        }
        Command::Show { version, json } => {
            let Some(entry) = get_changelog_for_version(&version) else {
                bail!("No release notes for version {version}");
            };
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(entry).context("Failed to encode entry")?
                );
            } else {
                println!("{}", entry.title);
                if !entry.content.is_empty() {
                    println!();
                    println!("{}", entry.content);
                }
            }
        }
        Command::Dump => {
            println!(
                "{}",
                serde_json::to_string_pretty(get_changelog()).context("Failed to encode table")?
            );
        }
    }

    Ok(())
}
