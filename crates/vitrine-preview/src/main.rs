//! Vitrine preview - plays the page sequence in a terminal.
//!
//! Usage: `vitrine-preview [CONFIG]`. Without a path the user config file is
//! loaded, or created with defaults. `VITRINE_LOG_DIR` moves the log files.

mod command;
mod error;
mod logging;
mod preview;
mod terminal;

use std::path::Path;
use std::process::ExitCode;

use error::Result;
use logging::LoggingConfig;
use terminal::TerminalView;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use vitrine_core::{CarouselDriver, MemorySessionStore, VitrineConfig, session_started};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Preview failed: {}", e);
            eprintln!("vitrine-preview: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let mut log_config = LoggingConfig::auto();
    if let Some(dir) = std::env::var_os("VITRINE_LOG_DIR") {
        log_config = log_config.with_log_directory(dir.into());
    }
    let _logging = logging::init(&log_config)?;
    info!("Starting Vitrine preview");

    let config = match std::env::args_os().nth(1) {
        Some(path) => VitrineConfig::load_from(Path::new(&path))?,
        None => VitrineConfig::load()?,
    };
    let messages = config.message_list()?;
    info!(messages = messages.len(), "Configuration ready");

    let mut stdout = std::io::stdout();
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut session = MemorySessionStore::new();

    if !session_started(&session) {
        let mut progress =
            preview::run_splash(&config.splash, &mut rand::thread_rng(), &mut stdout).await?;
        if input.next_line().await?.is_none() {
            info!("Input closed before start");
            return Ok(());
        }
        preview::enter(&mut progress, &mut session, &config.splash, &mut stdout).await?;
    }

    let driver =
        CarouselDriver::with_timings(messages, TerminalView::new(std::io::stdout()), &config.timings);
    preview::run_carousel(
        &driver,
        config.timings.intro_delay(),
        &mut input,
        &mut stdout,
    )
    .await?;

    info!("Preview finished");
    Ok(())
}
