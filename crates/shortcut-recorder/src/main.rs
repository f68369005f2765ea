//! Shortcut Recorder: turns a raw keyboard/mouse event stream into recognized
//! shortcut descriptors.

mod app;
mod attempt_state;
mod config;
mod error;
mod event_hub;
mod event_source;
mod logging;
mod output_handler;

pub(crate) use {
    app::{App, RunSummary},
    attempt_state::AttemptState,
    error::{AppError, Result as AppResult},
    event_hub::EventHub,
    event_source::{EventSource, SourceStats},
    output_handler::OutputHandler,
};

use crate::config::{Config, LoggingConfig, OutputFormat};

use std::path::PathBuf;

use clap::Parser;
use shortcut_recorder_core::RecorderConfig;
use tokio::io::{AsyncBufRead, BufReader};
use tracing::{debug, error, info};

/// Capacity of each listener's raw event channel.
const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Parser)]
#[command(name = "shortcut-recorder", version, about)]
struct Cli {
    /// JSON-lines event file (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format, overriding the config file
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Print only finished shortcuts
    #[arg(long)]
    finished_only: bool,
}

/// Application entry point.
fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    let logging_config = loaded
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_else(|_| LoggingConfig::default());
    let _log_guard = logging::init(&logging_config);

    let mut config = match loaded {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.finished_only {
        config.output.finished_only = true;
    }

    let recorder_config = match config.recorder_config() {
        Ok(rc) => rc,
        Err(e) => {
            error!("Invalid recorder configuration: {:?}", e);
            std::process::exit(1);
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    let result = rt.block_on(run(cli.input, recorder_config, &config));

    match result {
        Ok((stats, summary)) => {
            info!(
                published = stats.published,
                skipped = stats.skipped,
                recognized = summary.recognized,
                rejected = summary.rejected,
                cancelled = summary.cancelled,
                "Shortcut recorder finished"
            );
        }
        Err(e) => {
            error!(error = ?e, "Shortcut recorder failed");
            std::process::exit(1);
        }
    }
}

async fn run(
    input: Option<PathBuf>,
    recorder_config: RecorderConfig,
    config: &Config,
) -> AppResult<(SourceStats, RunSummary)> {
    let mut hub = EventHub::new(EVENT_CHANNEL_CAPACITY);
    let (listener_id, event_rx) = hub.listen();

    let output = OutputHandler::new(tokio::io::stdout(), &config.output);
    let app = App::new(recorder_config, event_rx, output)?;

    let (source_result, app_result) = tokio::join!(
        async {
            let stats = match &input {
                Some(path) => match tokio::fs::File::open(path).await {
                    Ok(file) => feed(BufReader::new(file), &mut hub).await,
                    Err(e) => Err(AppError::from(e)),
                },
                None => feed(BufReader::new(tokio::io::stdin()), &mut hub).await,
            };
            // Closing the app's channel ends its loop.
            hub.unlisten(listener_id);
            stats
        },
        app.run()
    );

    debug!(listeners = hub.listener_count(), "Event hub drained");

    Ok((source_result?, app_result?))
}

async fn feed<R: AsyncBufRead + Unpin>(reader: R, hub: &mut EventHub) -> AppResult<SourceStats> {
    EventSource::new(reader).run(hub).await
}
