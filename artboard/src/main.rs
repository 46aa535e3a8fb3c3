//! Interactive client for the art discussion board.
//!
//! Reads menu choices from stdin and draws screens on stdout. Diagnostics go
//! to stderr (see `RUST_LOG`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use artboard::driver::{Driver, SessionEnd};
use artboard::exit_codes;
use artboard::io::config::{DEFAULT_CONFIG_FILE, load_config};
use artboard::io::console::StdConsole;
use artboard::io::screen::Screen;
use artboard::io::sqlite::SqliteStore;
use artboard::logging;

#[derive(Parser)]
#[command(name = "artboard", version, about = "Text-menu client for an art discussion board")]
struct Cli {
    /// Configuration file. Missing files fall back to defaults.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Board database, overriding `database.path` from the config.
    #[arg(long)]
    db: Option<PathBuf>,
}

fn main() {
    logging::init();
    let code = match run(Cli::parse()) {
        Ok(SessionEnd::Quit) => exit_codes::OK,
        Ok(SessionEnd::InputClosed) => exit_codes::INPUT_CLOSED,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<SessionEnd> {
    let mut cfg = load_config(&cli.config)?;
    if let Some(db) = cli.db {
        cfg.database.path = db;
    }
    cfg.validate()
        .with_context(|| format!("invalid configuration {}", cli.config.display()))?;

    let store = SqliteStore::open(&cfg.database.path)?;
    let screen = Screen::new(StdConsole::new(), cfg.display);
    let mut driver = Driver::new(store, screen)?;
    driver.run()
}
