use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use console_state::action::Action;
use console_state::config::Config;
use console_state::domains;
use console_state::logging::init_tracing;
use console_state::notify::RecordingNotifier;
use console_state::pipeline::Pipeline;
use console_state::routes;
use console_state::store::{self, Store};

#[derive(Debug, Parser)]
#[command(name = "console-state", version, about = "Admin console state store")]
struct Cli {
    /// Config file (default: ~/.config/console-state/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Dispatch newline-delimited JSON actions and print the final state.
    Replay { file: PathBuf },
    /// Print the page served for a route path.
    Route { path: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.logging);

    match cli.command {
        Command::Replay { file } => replay(&config, &file),
        Command::Route { path } => route(&path),
    }
}

fn replay(config: &Config, file: &Path) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read action log '{}'", file.display()))?;

    let pipeline = Pipeline::new(domains::console_domains(), &config.pipeline)?;
    let notifier = RecordingNotifier::forwarding(config.notifications.sink.build());
    let store = store::init(Store::new(pipeline, Arc::new(notifier.clone())))?;

    let mut dispatched = 0usize;
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let action: Action = serde_json::from_str(line)
            .with_context(|| format!("Invalid action on line {}", index + 1))?;
        store.dispatch(&action);
        dispatched += 1;
    }

    info!(
        actions = dispatched,
        notifications = notifier.count(),
        "replay finished"
    );
    println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
    eprintln!(
        "{} actions dispatched, {} notifications",
        dispatched,
        notifier.count()
    );
    Ok(())
}

fn route(path: &str) -> Result<()> {
    match routes::resolve(path) {
        Some(page) => {
            println!("{}", page);
            Ok(())
        }
        None => bail!("No route for '{}'", path),
    }
}
