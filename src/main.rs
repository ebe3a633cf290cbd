use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use posync::catalog::StubPolicy;
use posync::config::{CatalogsConfig, Config};

mod commands;

#[derive(Parser)]
#[command(
    name = "posync",
    version,
    about = "Keep a directory of gettext catalogs in sync with a canonical language",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the canonical keys each catalog is missing
    FindMissing {
        /// Directory holding the catalogs [default: .]
        directory: Option<PathBuf>,

        /// Canonical language [default: en]
        canonical: Option<String>,
    },

    /// Append stub entries for missing keys to every catalog
    AddStubs {
        /// Directory holding the catalogs [default: .]
        directory: Option<PathBuf>,

        /// Canonical language [default: en]
        canonical: Option<String>,

        /// Stub template with {key}, {language} and {value} placeholders
        #[arg(long, conflicts_with_all = ["fixed", "empty"])]
        template: Option<String>,

        /// Use the same value for every stub
        #[arg(long, conflicts_with = "empty")]
        fixed: Option<String>,

        /// Leave stubs untranslated
        #[arg(long)]
        empty: bool,
    },

    /// Create the catalog of a new language from the canonical header
    AddLanguage {
        /// Language to add
        language: String,

        /// Directory holding the catalogs [default: .]
        directory: Option<PathBuf>,

        /// Canonical language [default: en]
        #[arg(long)]
        canonical: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(format) = &cli.log_format {
        config.logging.format = format.clone();
    }
    config.validate()?;

    // Initialize tracing/logging
    setup_tracing(&config.logging.format, &config.logging.level, cli.verbose)?;

    tracing::debug!(config = ?config, "Configuration loaded");

    match cli.command {
        Commands::FindMissing {
            directory,
            canonical,
        } => {
            let catalogs = resolve_catalogs(&config, directory, canonical);
            tracing::info!(
                directory = %catalogs.directory.display(),
                canonical = %catalogs.canonical_language,
                "Starting find-missing command"
            );
            commands::find_missing(&catalogs)?;
        }

        Commands::AddStubs {
            directory,
            canonical,
            template,
            fixed,
            empty,
        } => {
            let catalogs = resolve_catalogs(&config, directory, canonical);
            let policy = if empty {
                None
            } else if let Some(fixed) = fixed {
                Some(StubPolicy::fixed(fixed))
            } else if let Some(template) = template {
                Some(StubPolicy::template(template))
            } else {
                config.stubs.policy()
            };

            tracing::info!(
                directory = %catalogs.directory.display(),
                canonical = %catalogs.canonical_language,
                "Starting add-stubs command"
            );
            commands::add_stubs(&catalogs, policy)?;
        }

        Commands::AddLanguage {
            language,
            directory,
            canonical,
        } => {
            let catalogs = resolve_catalogs(&config, directory, canonical);
            tracing::info!(
                language = %language,
                directory = %catalogs.directory.display(),
                "Starting add-language command"
            );
            commands::add_language(&catalogs, &language)?;
        }
    }

    Ok(())
}

/// Command-line values win over the configuration file
fn resolve_catalogs(
    config: &Config,
    directory: Option<PathBuf>,
    canonical: Option<String>,
) -> CatalogsConfig {
    let mut catalogs = config.catalogs.clone();
    if let Some(directory) = directory {
        catalogs.directory = directory;
    }
    if let Some(canonical) = canonical {
        catalogs.canonical_language = canonical;
    }
    catalogs
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("posync=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_new(format!("posync={level},warn"))?
    };

    // Logs go to stderr so reports on stdout stay clean
    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
