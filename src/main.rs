//! Console front end for the toy robot.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use toy_robot::{CommandInterpreter, ConsoleSink, logging, resolve_config};

#[derive(Parser)]
#[command(name = "toy-robot", version, about = "Toy robot simulator")]
struct Cli {
    /// Read commands from this file instead of stdin.
    script: Option<PathBuf>,

    /// TOML config file. Missing file means defaults.
    #[arg(short, long, default_value = "toy-robot.toml")]
    config: PathBuf,

    /// Override the table size (largest valid coordinate).
    #[arg(short, long)]
    table_size: Option<i32>,

    /// Do not print the command menu.
    #[arg(long)]
    no_menu: bool,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(&cli.config, cli.table_size, cli.no_menu.then_some(false))?;
    tracing::debug!(?config, "starting session");

    match cli.script {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("open {}", path.display()))?;
            let mut session = CommandInterpreter::new(config, ConsoleSink);
            session
                .run(BufReader::new(file), || {})
                .with_context(|| format!("read {}", path.display()))?;
        }
        None => {
            let show_menu = config.show_menu;
            let mut session = CommandInterpreter::new(config, ConsoleSink);
            if show_menu {
                session.write_menu();
            }
            session
                .run(io::stdin().lock(), prompt)
                .context("read stdin")?;
        }
    }
    Ok(())
}

fn prompt() {
    let mut out = io::stdout().lock();
    if let Err(err) = write!(out, "Enter a command:\t").and_then(|()| out.flush()) {
        tracing::warn!(%err, "failed to write prompt to stdout");
    }
}
