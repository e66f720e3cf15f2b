use std::{
    io::{self, IsTerminal, Write},
    path::PathBuf,
};

mod command;
mod session;

use anyhow::Result;
use clap::Parser;
use client_core::{config, pages::APP_TITLE};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::command::parse_line;
use crate::session::{Session, Step};

#[derive(Parser, Debug)]
struct Args {
    /// Settings file; defaults to ./anecdotes.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    notification_ms: Option<u64>,
    /// Start without the two seeded anecdotes.
    #[arg(long)]
    empty: bool,
    /// Print views as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => config::load_settings_from(path)?,
        None => config::load_settings(),
    };
    if let Some(notification_ms) = args.notification_ms {
        settings.notification_ms = notification_ms;
    }
    if args.empty {
        settings.seed_anecdotes = false;
    }
    tracing::debug!(?settings, "settings loaded");

    let mut session = Session::new(&settings, tokio::runtime::Handle::current(), args.json)?;
    let interactive = io::stdin().is_terminal();
    if interactive {
        println!("{APP_TITLE} (type `help` for commands)");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if interactive {
            print!("{}> ", session.current_path());
            io::stdout().flush()?;
        }
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        match session.execute(command) {
            Ok(Step::Continue(output)) if output.is_empty() => {}
            Ok(Step::Continue(output)) => println!("{output}"),
            Ok(Step::Quit) => break,
            Err(err) => eprintln!("error: {err:#}"),
        }
    }

    Ok(())
}
