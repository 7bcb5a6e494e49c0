//! Headless shop registration form.
//!
//! Wires the catalog-backed availability lookup into a
//! [`FormValidationEngine`], feeds it commands read from stdin, and prints
//! every event it publishes to stdout.  Logs go to stderr so the event
//! stream stays machine-readable with `--json`.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()                 -- TOML config or defaults
//!  └─ FormValidationEngine::new()   -- with CatalogAvailabilityChecker
//!  └─ tasks
//!       ├─ engine.run(inputs)       -- applies inputs and lookup results,
//!       │                              publishes state snapshots
//!       ├─ event printer            -- drains the event stream
//!       └─ stdin reader (this task) -- parses commands into inputs
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use shop_form::application::validate_form::FormValidationEngine;
use shop_form::infrastructure::availability::CatalogAvailabilityChecker;
use shop_form::infrastructure::console::{
    parse_command, render_event, render_json, ConsoleCommand, OutputFormat, HELP,
};
use shop_form::infrastructure::storage::config::{
    config_file_path, load_config, load_config_from, save_config, save_config_to, AppConfig,
};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "shop-form", about = "Drive the shop registration form from the terminal")]
struct Args {
    /// Path to a TOML config file (defaults to the platform config directory).
    #[arg(long, env = "SHOP_FORM_CONFIG")]
    config: Option<PathBuf>,

    /// Print events as JSON lines instead of text.
    #[arg(long)]
    json: bool,

    /// Log level override (`RUST_LOG` still wins).
    #[arg(long)]
    log_level: Option<String>,

    /// Write the default configuration to the config path and exit.
    #[arg(long)]
    write_default_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.write_default_config {
        let defaults = AppConfig::default();
        let path = match &args.config {
            Some(path) => {
                save_config_to(&defaults, path)?;
                path.clone()
            }
            None => {
                save_config(&defaults)?;
                config_file_path()?
            }
        };
        println!("wrote default config to {}", path.display());
        return Ok(());
    }

    let config: AppConfig = match &args.config {
        Some(path) => load_config_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => load_config().context("loading config")?,
    };

    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let checker = Arc::new(CatalogAvailabilityChecker::from_config(&config));
    let (engine, mut events) = FormValidationEngine::new(checker, config.form.to_settings());
    info!(session = %engine.session_id(), "shop form ready; type `help` for commands");

    // ── Event printer ─────────────────────────────────────────────────────────
    let printer = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match render_event(&event, format) {
                Ok(line) => println!("{line}"),
                Err(e) => warn!("failed to render event {event:?}: {e}"),
            }
        }
    });

    // ── Engine ────────────────────────────────────────────────────────────────
    let state_rx = engine.subscribe_state();
    let (input_tx, input_rx) = mpsc::channel(32);
    let session = tokio::spawn(engine.run(input_rx));

    // ── Stdin reader ──────────────────────────────────────────────────────────
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        match parse_command(&line, &config.catalog) {
            Ok(ConsoleCommand::Input(input)) => {
                if input_tx.send(input).await.is_err() {
                    warn!("form session ended unexpectedly");
                    break;
                }
            }
            Ok(ConsoleCommand::ListCities) => {
                for city in &config.catalog.cities {
                    eprintln!("  {}  {}", city.id, city.name);
                }
            }
            Ok(ConsoleCommand::State) => {
                let snapshot = state_rx.borrow().clone();
                println!("{}", render_json(&snapshot, !args.json)?);
            }
            Ok(ConsoleCommand::Help) => eprintln!("{HELP}"),
            Ok(ConsoleCommand::Quit) => break,
            Ok(ConsoleCommand::Nothing) => {}
            Err(e) => eprintln!("{e}"),
        }
    }

    // Closing the input channel lets the engine settle and return.
    drop(input_tx);
    let state = session.await.context("form session task failed")?;
    printer.await.context("event printer task failed")?;

    info!(complete = state.is_complete(), "shop form closed");
    println!("{}", render_json(&state, !args.json)?);
    Ok(())
}
