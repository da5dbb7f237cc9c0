//! PortKill CLI - Kill processes running on a specific port
//!
//! A command-line tool for finding and killing the processes bound to a
//! port, checking whether a port is taken, and finding free ports.

mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, CommandFactory, Parser};
use commands::Status;
use portkill_core::ports::{ProcessKillerPort, ProcessLocatorPort};
use portkill_core::{ConfigStore, PortService, Settings};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const EXAMPLES: &str = "\
EXAMPLES:
  portkill 3000            Kill whatever is on port 3000
  portkill 8080 -f         Force kill on port 8080
  portkill 3000 --list     See what's running on 3000
  portkill --find 3000     Find free ports starting at 3000
  portkill --check 80      Check if port 80 is in use";

#[derive(Parser, Debug)]
#[command(name = "portkill")]
#[command(version, about = "Kill processes running on a specific port")]
#[command(disable_version_flag = true, after_help = EXAMPLES)]
struct Cli {
    /// Port whose processes should be killed
    #[arg(value_name = "PORT", value_parser = parse_port)]
    port: Option<u16>,

    /// Force kill processes (SIGKILL on Unix, /F on Windows)
    #[arg(short, long)]
    force: bool,

    /// List processes on the port without killing
    #[arg(short, long)]
    list: bool,

    /// Find available ports starting from the specified port
    #[arg(long, value_name = "PORT", value_parser = parse_port, conflicts_with = "check")]
    find: Option<u16>,

    /// Number of free ports to report with --find
    #[arg(short = 'n', long, requires = "find")]
    count: Option<usize>,

    /// Check if a specific port is in use
    #[arg(long, value_name = "PORT", value_parser = parse_port)]
    check: Option<u16>,

    /// Read settings from this file instead of ~/.portkill/config.json
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long)]
    verbose: bool,

    /// Show version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),
}

fn parse_port(value: &str) -> Result<u16, String> {
    match value.trim().parse::<u16>() {
        Ok(port) if port >= 1 => Ok(port),
        _ => Err("Invalid port number. Must be between 1 and 65535.".to_string()),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if std::env::args_os().len() <= 1 {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // Help and version go to stdout and are not failures
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            output::error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let store = match &cli.config {
        Some(path) => ConfigStore::with_path(path.clone()),
        None => ConfigStore::new()?,
    };
    debug!(path = %store.config_path().display(), "Loading settings");
    let settings = store.load().await?;
    let service = PortService::for_current_platform(&settings);

    Ok(dispatch(&cli, &settings, &service).await.into())
}

/// Route parsed arguments to a command.
async fn dispatch<L, K>(cli: &Cli, settings: &Settings, service: &PortService<L, K>) -> Status
where
    L: ProcessLocatorPort,
    K: ProcessKillerPort,
{
    if let Some(port) = cli.find {
        let count = cli.count.unwrap_or(settings.find_count).max(1);
        return commands::find::run(service, port, count).await;
    }

    if let Some(port) = cli.check {
        return commands::check::run(service, port).await;
    }

    let Some(port) = cli.port else {
        output::error("Please specify a port number.");
        let _ = Cli::command().print_help();
        return Status::Failure;
    };

    if cli.list {
        return commands::list::run(service, port).await;
    }

    let force = cli.force || settings.force_by_default;
    commands::kill::run(service, port, force).await
}
