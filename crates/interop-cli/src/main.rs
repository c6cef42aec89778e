use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use interop_client::Client;

mod commands;
mod credentials;

#[derive(Parser, Debug)]
#[command(author, version, about = "AUVSI SUAS interoperability CLI")]
struct Cli {
    /// Base URL of the interoperability server, e.g. http://localhost:8000.
    #[arg(long)]
    url: String,

    /// Account username.
    #[arg(long)]
    username: String,

    /// Account password. Prompted for interactively when omitted.
    #[arg(long)]
    password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the mission list and print each mission.
    Missions,
    /// Upload targets to the interoperability server.
    ///
    /// Searches --target-dir for target JSON and image files conforming to
    /// the 2017 Object File Format and uploads the target characteristics
    /// and thumbnails. Alternatively, if --legacy-filepath is specified,
    /// that file is parsed as the legacy 2016 tab-delimited target file
    /// format; image paths referenced in the file are relative to
    /// --target-dir.
    ///
    /// There is no deduplication logic. Targets will be uploaded multiple
    /// times, as unique targets, if the tool is run multiple times.
    Targets {
        /// Directory containing target data.
        #[arg(long, alias = "target_dir")]
        target_dir: PathBuf,

        /// Target file in the legacy 2016 tab-delimited format.
        #[arg(long, alias = "legacy_filepath")]
        legacy_filepath: Option<PathBuf>,
    },
    /// Send periodic dummy telemetry and obstacle requests.
    Probe {
        /// Time between request cycles, in seconds.
        #[arg(long, alias = "interop_time", default_value_t = 1.0)]
        interop_time: f64,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let password = credentials::resolve(cli.password.clone(), &mut credentials::TerminalPrompt)
        .context("failed to read the interoperability password")?;
    let client = Client::new(&cli.url, &cli.username, &password)
        .with_context(|| format!("failed to authenticate with {}", cli.url))?;

    match cli.command {
        Command::Missions => commands::missions::handle_missions(&client),
        Command::Targets {
            target_dir,
            legacy_filepath,
        } => commands::targets::handle_targets(&client, &target_dir, legacy_filepath.as_deref()),
        Command::Probe { interop_time } => commands::probe::handle_probe(&client, interop_time),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stdout)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
