use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::Context;
use commands::{config, replay, session};
use review_config::{Config, PathManager};
use review_models::SortMode;
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "reviews")]
#[command(about = "Collect product reviews and see them aggregated, sorted and rated")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive review session
    #[command(long_about = "Open an interactive session: write reviews, mark them helpful and change the sort order. Reviews are kept in memory only and disappear when the session ends.")]
    Session {
        /// Initial sort order: newest, highest or submitted
        #[arg(long, value_name = "MODE")]
        sort: Option<String>,
    },
    /// Apply a JSON list of commands and print the resulting reviews
    #[command(long_about = "Replay a JSON array of commands (submit, vote_helpful, set_sort_mode) against a fresh session and print the aggregated view. Submissions that fail validation are reported and skipped.")]
    Replay {
        /// JSON file containing the commands
        file: PathBuf,

        /// Initial sort order: newest, highest or submitted
        #[arg(long, value_name = "MODE")]
        sort: Option<String>,
    },
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file without asking
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
    /// Print the config file location
    Path,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let config_file = match cli.config.clone() {
        Some(path) => path,
        None => PathManager::resolve()
            .map_err(|e| color_eyre::eyre::eyre!("{}", e))?
            .config_file(),
    };
    let mut config_error = None;
    let app_config = match Config::load_or_default(&config_file) {
        Ok(config) => config,
        // A broken file must not block `config init --force`
        Err(e) if matches!(cli.command, Commands::Config { .. }) => {
            config_error = Some(e.to_string());
            Config::default()
        }
        Err(e) => {
            return Err(color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e));
        }
    };

    logging::init_logging(cli.verbose, cli.quiet, &app_config.logging)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))
        .wrap_err("Failed to initialize logging")?;

    if let Some(error) = config_error {
        tracing::warn!(config_file = %config_file.display(), error = %error, "Ignoring unreadable config file");
    }

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Session { sort } => session::run_session(&app_config, sort.as_deref().map(SortMode::from), &output),
        Commands::Replay { file, sort } => {
            replay::run_replay(&app_config, &file, sort.as_deref().map(SortMode::from), &output)
        }
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show);
            config::run_config(cmd, &config_file, &output)
        }
    }
}
