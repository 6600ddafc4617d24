mod config_cmd;
mod resolve_cmd;
mod terminal_output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use liveroom_config::{config_dir, config_file_path, load_and_prepare, DEFAULT_LOG_LEVEL};
use liveroom_logging::init_logger;

use terminal_output::note_error;

#[derive(Parser)]
#[command(name = "liveroom")]
#[command(about = "Resolve livestream room ids from public user handles")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.liveroom/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level regardless of config
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a user's uniqueId to the room id of their live session
    Resolve {
        /// The user's uniqueId (a leading '@' is ignored)
        unique_id: String,

        /// Print a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Show the effective configuration with secrets redacted
    Config {
        /// Print the config file path only
        #[arg(long)]
        path: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(e) => {
            note_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config_path = cli
        .config
        .unwrap_or_else(|| config_file_path(&config_dir()));

    if let Commands::Config { path: true } = cli.command {
        println!("{}", config_path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_and_prepare(&config_path).await?;

    let logging = config.logging();
    let level = if cli.verbose {
        "debug"
    } else {
        logging.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    };
    let _log_guard = init_logger(
        logging.dir.as_deref().map(Path::new),
        level,
        logging.json.unwrap_or(false),
    );

    match cli.command {
        Commands::Resolve { unique_id, json } => resolve_cmd::run(&config, &unique_id, json).await,
        Commands::Config { .. } => {
            config_cmd::run(&config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
